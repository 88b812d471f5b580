use axum::http::HeaderValue;
use lazy_static::lazy_static;
use regex::Regex;
use sqlx::PgPool;
use tracing::debug;

use crate::auth::dto::UserProfile;
use crate::auth::error::ApiError;

/// Cookie carrying the session's user id.
pub const SESSION_COOKIE: &str = "userId";

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Map a request's session cookie to the owning user's public profile.
///
/// A missing cookie and a cookie that matches no user both come back as
/// `NotAuthenticated`; the caller cannot tell whether the id ever
/// existed. Read-only, a single store round-trip.
pub async fn resolve_current_user(
    db: &PgPool,
    session: Option<&str>,
) -> Result<UserProfile, ApiError> {
    let user_id = session.ok_or(ApiError::NotAuthenticated)?;
    match UserProfile::find_by_id(db, user_id).await? {
        Some(profile) => Ok(profile),
        None => {
            debug!(user_id = %user_id, "session does not resolve to a user");
            Err(ApiError::NotAuthenticated)
        }
    }
}

/// `Set-Cookie` value establishing a session for the given user.
pub fn session_cookie(user_id: &str) -> HeaderValue {
    HeaderValue::from_str(&format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/",
        SESSION_COOKIE, user_id
    ))
    .expect("session cookie header value")
}

/// `Set-Cookie` value that expires the session cookie immediately.
pub fn clear_session_cookie() -> HeaderValue {
    HeaderValue::from_str(&format!(
        "{}=deleted; Expires=Thu, 01 Jan 1970 00:00:00 GMT; HttpOnly; SameSite=Lax; Path=/",
        SESSION_COOKIE
    ))
    .expect("clear cookie header value")
}
