use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, RegisterRequest, UserProfile},
        error::ApiError,
        extractors::{parse_cookie, CurrentUser},
        password::{hash_password, verify_password},
        repo_types::User,
        services::{clear_session_cookie, is_valid_email, session_cookie, SESSION_COOKIE},
    },
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(HeaderMap, Json<UserProfile>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::Validation("Invalid email".into()));
    }

    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(ApiError::Validation("Password too short".into()));
    }

    if payload.name.trim().is_empty() {
        return Err(ApiError::Validation("Name is required".into()));
    }

    // Ensure email is not taken
    if let Ok(Some(_)) = User::find_by_email(&state.db, &payload.email).await {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::EmailTaken);
    }

    let hash = hash_password(&payload.password)?;
    let user = User::create(
        &state.db,
        &payload.email,
        payload.name.trim(),
        &hash,
        payload.role,
    )
    .await?;

    info!(user_id = %user.id, email = %user.email, "user registered");

    let mut headers = HeaderMap::new();
    headers.insert(axum::http::header::SET_COOKIE, session_cookie(&user.id));
    Ok((headers, Json(UserProfile::from(user))))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<(HeaderMap, Json<UserProfile>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::Validation("Invalid email".into()));
    }

    let user = match User::find_by_email(&state.db, &payload.email).await? {
        Some(u) => u,
        None => {
            warn!(email = %payload.email, "login unknown email");
            return Err(ApiError::InvalidCredentials);
        }
    };

    let ok = verify_password(&payload.password, &user.password_hash)?;
    if !ok {
        warn!(email = %payload.email, user_id = %user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    User::set_online(&state.db, &user.id, true).await?;

    info!(user_id = %user.id, email = %user.email, "user logged in");

    let mut headers = HeaderMap::new();
    headers.insert(axum::http::header::SET_COOKIE, session_cookie(&user.id));
    Ok((
        headers,
        Json(UserProfile::from(User {
            is_online: true,
            ..user
        })),
    ))
}

#[instrument(skip(state, headers))]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<(HeaderMap, Json<Value>), ApiError> {
    if let Some(user_id) = parse_cookie(&headers, SESSION_COOKIE) {
        User::set_online(&state.db, &user_id, false).await?;
        info!(user_id = %user_id, "user logged out");
    }

    let mut out = HeaderMap::new();
    out.insert(axum::http::header::SET_COOKIE, clear_session_cookie());
    Ok((out, Json(json!({ "status": "ok" }))))
}

/// The session identity endpoint: the cookie either resolves to a
/// projected profile or the request fails with a uniform 401.
#[instrument(skip_all)]
pub async fn get_me(CurrentUser(profile): CurrentUser) -> Json<UserProfile> {
    Json(profile)
}
