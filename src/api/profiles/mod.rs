//! Profile API endpoints
//!
//! Role-scoped profile creation and update for the logged-in account,
//! plus the unauthenticated public lookup by id. Mutating endpoints
//! accept loosely typed JSON bodies so validation can report every
//! violated rule in one response.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Router,
};
use serde::Serialize;

use crate::api::middleware::RequireSession;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::profile::{Profile, ProfileId, ProfilePayload};

/// Create the profiles router
pub fn create_profiles_router() -> Router<AppState> {
    Router::new()
        .route("/musician", post(create_musician_profile))
        .route("/venue", post(create_venue_profile))
        .route("/me", get(get_current_profile))
        .route("/me", put(update_current_profile))
        .route("/{id}", get(get_public_profile))
}

/// Response for profile creation and update
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub message: String,
    pub profile: Profile,
}

/// Response for the logged-in account's own profile
#[derive(Debug, Serialize)]
pub struct CurrentProfileResponse {
    pub success: bool,
    #[serde(rename = "userRole")]
    pub user_role: String,
    pub profile: Profile,
}

/// Response for the public profile lookup
#[derive(Debug, Serialize)]
pub struct PublicProfileResponse {
    pub success: bool,
    #[serde(rename = "profileType")]
    pub profile_type: &'static str,
    pub profile: Profile,
}

/// Create the musician profile for the logged-in account
///
/// POST /profiles/musician
pub async fn create_musician_profile(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    Json(payload): Json<ProfilePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let profile = state
        .profile_service
        .create_musician_profile(session.account_id, &payload)
        .await
        .map_err(|e| {
            ApiError::from(e).with_internal_message("Internal server error while creating profile")
        })?;

    Ok((
        StatusCode::CREATED,
        Json(ProfileResponse {
            success: true,
            message: "Musician profile created successfully".to_string(),
            profile: Profile::Musician(profile),
        }),
    ))
}

/// Create the venue profile for the logged-in account
///
/// POST /profiles/venue
pub async fn create_venue_profile(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    Json(payload): Json<ProfilePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let profile = state
        .profile_service
        .create_venue_profile(session.account_id, &payload)
        .await
        .map_err(|e| {
            ApiError::from(e).with_internal_message("Internal server error while creating profile")
        })?;

    Ok((
        StatusCode::CREATED,
        Json(ProfileResponse {
            success: true,
            message: "Venue profile created successfully".to_string(),
            profile: Profile::Venue(profile),
        }),
    ))
}

/// Get the logged-in account's profile
///
/// GET /profiles/me
///
/// The role from the session picks which profile store is read; the
/// 404 for a missing profile names that role so the page can route the
/// user to the right creation form.
pub async fn get_current_profile(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
) -> Result<Json<CurrentProfileResponse>, ApiError> {
    let profile = state
        .profile_service
        .current_profile(session.account_id, session.role)
        .await
        .map_err(|e| {
            ApiError::from(e)
                .with_internal_message("Internal server error")
                .with_user_role(session.role)
        })?;

    Ok(Json(CurrentProfileResponse {
        success: true,
        user_role: session.role.to_string(),
        profile,
    }))
}

/// Update the logged-in account's profile
///
/// PUT /profiles/me
///
/// Full replacement with the same validation as create. Fails with 404
/// when no profile exists yet; update never creates one.
pub async fn update_current_profile(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    Json(payload): Json<ProfilePayload>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = state
        .profile_service
        .update_current_profile(session.account_id, session.role, &payload)
        .await
        .map_err(|e| {
            ApiError::from(e)
                .with_internal_message("Internal server error")
                .with_user_role(session.role)
        })?;

    Ok(Json(ProfileResponse {
        success: true,
        message: "Profile updated successfully".to_string(),
        profile,
    }))
}

/// Public profile lookup by id
///
/// GET /profiles/{id}
pub async fn get_public_profile(
    State(state): State<AppState>,
    Path(id): Path<ProfileId>,
) -> Result<Json<PublicProfileResponse>, ApiError> {
    let profile = state
        .profile_service
        .public_profile(id)
        .await
        .map_err(|e| ApiError::from(e).with_internal_message("Internal server error"))?;

    Ok(Json(PublicProfileResponse {
        success: true,
        profile_type: profile.profile_type(),
        profile,
    }))
}
