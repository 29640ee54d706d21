//! Session authentication middleware backed by the cookie token

use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::debug;

use crate::api::cookie;
use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::session::Session;

/// Extractor that requires a live session
///
/// The token comes from the session cookie; the identity behind it is
/// resolved against the server-held store on every request.
#[derive(Debug, Clone)]
pub struct RequireSession(pub Session);

impl FromRequestParts<AppState> for RequireSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token_or_unauthorized(&parts.headers, &state.cookies.name)?;

        debug!("Resolving session token");

        let session = state
            .sessions
            .resolve(&token)
            .await?
            .ok_or_else(|| ApiError::unauthorized("Please Log in to access this resource"))?;

        Ok(RequireSession(session))
    }
}

/// Extract the session token from the cookie header
pub fn session_token_or_unauthorized(
    headers: &axum::http::HeaderMap,
    cookie_name: &str,
) -> Result<String, ApiError> {
    cookie::session_token(headers, cookie_name)
        .ok_or_else(|| ApiError::unauthorized("Please Log in to access this resource"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};

    #[test]
    fn test_token_extracted_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert("cookie", "bandmate_session=tok123".parse().unwrap());

        let result = session_token_or_unauthorized(&headers, "bandmate_session");
        assert_eq!(result.unwrap(), "tok123");
    }

    #[test]
    fn test_missing_cookie_is_unauthorized() {
        let headers = HeaderMap::new();

        let err = session_token_or_unauthorized(&headers, "bandmate_session").unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.body.message, "Please Log in to access this resource");
    }

    #[test]
    fn test_other_cookies_do_not_authenticate() {
        let mut headers = HeaderMap::new();
        headers.insert("cookie", "theme=dark".parse().unwrap());

        let err = session_token_or_unauthorized(&headers, "bandmate_session").unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }
}
