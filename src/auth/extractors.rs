use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};

use crate::auth::dto::UserProfile;
use crate::auth::error::ApiError;
use crate::auth::services::{resolve_current_user, SESSION_COOKIE};
use crate::state::AppState;

/// Resolves the request's session cookie to the user's public profile.
pub struct CurrentUser(pub UserProfile);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = parse_cookie(&parts.headers, SESSION_COOKIE);
        let profile = resolve_current_user(&state.db, session.as_deref()).await?;
        Ok(CurrentUser(profile))
    }
}

/// Pull a single cookie value out of the `Cookie` header.
pub(crate) fn parse_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookie = headers.get("cookie").or_else(|| headers.get("Cookie"))?;
    let s = cookie.to_str().ok()?;
    for part in s.split(';') {
        let p = part.trim();
        if let Some(eq) = p.find('=') {
            let (k, v) = p.split_at(eq);
            if k == name {
                return Some(v[1..].to_string());
            }
        }
    }
    None
}
