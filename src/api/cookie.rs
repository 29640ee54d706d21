//! Session cookie construction and parsing
//!
//! The session token travels only in an HTTP-only cookie, so scripts
//! on the page can never read it.

use axum::http::{HeaderMap, HeaderValue};

use crate::api::types::ApiError;
use crate::config::SessionConfig;

/// Attributes applied to the session cookie
#[derive(Debug, Clone)]
pub struct CookieSettings {
    pub name: String,
    pub max_age_secs: u64,
    pub secure: bool,
}

impl CookieSettings {
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            name: config.cookie_name.clone(),
            max_age_secs: config.ttl_hours * 3600,
            secure: config.cookie_secure,
        }
    }
}

/// Pull the session token out of the Cookie header, if present
pub fn session_token(headers: &HeaderMap, name: &str) -> Option<String> {
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

/// HTTP-only session cookie scoped to path /
pub fn session_cookie(settings: &CookieSettings, token: &str) -> Result<HeaderValue, ApiError> {
    let mut cookie = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        settings.name, token, settings.max_age_secs
    );
    if settings.secure {
        cookie.push_str("; Secure");
    }

    HeaderValue::from_str(&cookie)
        .map_err(|e| ApiError::internal(format!("Failed to build session cookie: {}", e)))
}

/// Expired replacement cookie that makes the browser drop the session
pub fn clear_session_cookie(settings: &CookieSettings) -> Result<HeaderValue, ApiError> {
    let mut cookie = format!(
        "{}=deleted; Expires=Thu, 01 Jan 1970 00:00:00 GMT; HttpOnly; SameSite=Lax; Path=/",
        settings.name
    );
    if settings.secure {
        cookie.push_str("; Secure");
    }

    HeaderValue::from_str(&cookie)
        .map_err(|e| ApiError::internal(format!("Failed to build session cookie: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> CookieSettings {
        CookieSettings::from_config(&SessionConfig::default())
    }

    #[test]
    fn test_session_token_parses_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert("cookie", "bandmate_session=abc123".parse().unwrap());

        assert_eq!(
            session_token(&headers, "bandmate_session"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_session_token_found_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "cookie",
            "theme=dark; bandmate_session=abc123; lang=en".parse().unwrap(),
        );

        assert_eq!(
            session_token(&headers, "bandmate_session"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_session_token_requires_exact_name() {
        let mut headers = HeaderMap::new();
        headers.insert("cookie", "bandmate_session2=abc123".parse().unwrap());

        assert_eq!(session_token(&headers, "bandmate_session"), None);
    }

    #[test]
    fn test_session_token_absent_without_cookie_header() {
        let headers = HeaderMap::new();

        assert_eq!(session_token(&headers, "bandmate_session"), None);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let value = session_cookie(&settings(), "abc123").unwrap();
        let cookie = value.to_str().unwrap();

        assert!(cookie.starts_with("bandmate_session=abc123"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_secure_flag_is_config_driven() {
        let mut secure_settings = settings();
        secure_settings.secure = true;

        let value = session_cookie(&secure_settings, "abc123").unwrap();
        assert!(value.to_str().unwrap().contains("; Secure"));
    }

    #[test]
    fn test_issued_cookie_round_trips_through_parser() {
        let value = session_cookie(&settings(), "abc123").unwrap();

        let mut headers = HeaderMap::new();
        headers.insert("cookie", value);

        // The browser echoes the full attribute string in tests; the
        // parser only cares about the name=value pair up front.
        assert_eq!(
            session_token(&headers, "bandmate_session"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_clear_cookie_expires_in_the_past() {
        let value = clear_session_cookie(&settings()).unwrap();
        let cookie = value.to_str().unwrap();

        assert!(cookie.starts_with("bandmate_session=deleted"));
        assert!(cookie.contains("Expires=Thu, 01 Jan 1970"));
    }
}
