//! Authentication API endpoints
//!
//! Registration, login and logout. Successful register and login open a
//! session and hand the token back in an HTTP-only cookie.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use crate::api::cookie;
use crate::api::middleware::session::session_token_or_unauthorized;
use crate::api::middleware::RequireSession;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::account::{Account, Role};
use crate::infrastructure::auth::RegisterRequest;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// Registration request
#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

/// Account response (safe to expose)
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: i64,
    pub email: String,
    pub role: String,
}

impl AccountResponse {
    fn from_account(account: &Account) -> Self {
        Self {
            id: account.id(),
            email: account.email().to_string(),
            role: account.role().to_string(),
        }
    }
}

/// Response for register and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub user: AccountResponse,
}

/// Logout response
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

/// Register a new account
///
/// POST /auth/register
///
/// Creates the account and opens a session for it in the same call, so
/// the browser is logged in as soon as registration succeeds.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<impl IntoResponse, ApiError> {
    let authenticated = state
        .auth_service
        .register(RegisterRequest {
            email: body.email,
            password: body.password,
            role: body.role,
        })
        .await
        .map_err(|e| ApiError::from(e).with_internal_message("Registration Failed"))?;

    let cookie = cookie::session_cookie(&state.cookies, &authenticated.token)?;

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(AuthResponse {
            success: true,
            message: "User created successfully".to_string(),
            user: AccountResponse::from_account(&authenticated.account),
        }),
    ))
}

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<impl IntoResponse, ApiError> {
    let authenticated = state
        .auth_service
        .login(&body.email, &body.password)
        .await
        .map_err(|e| ApiError::from(e).with_internal_message("Login Failed"))?;

    let cookie = cookie::session_cookie(&state.cookies, &authenticated.token)?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(AuthResponse {
            success: true,
            message: "Login successful".to_string(),
            user: AccountResponse::from_account(&authenticated.account),
        }),
    ))
}

/// Logout and destroy the session
///
/// POST /auth/logout
///
/// The replacement cookie expires immediately so the browser drops it.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    _session: RequireSession,
) -> Result<impl IntoResponse, ApiError> {
    let token = session_token_or_unauthorized(&headers, &state.cookies.name)?;

    state
        .auth_service
        .logout(&token)
        .await
        .map_err(|e| ApiError::from(e).with_internal_message("Logout Failed"))?;

    let cookie = cookie::clear_session_cookie(&state.cookies)?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LogoutResponse {
            success: true,
            message: "Logged out successfully".to_string(),
        }),
    ))
}
