/// Cookie name for the session token
pub const SESSION_COOKIE: &str = "session_token";

/// Cookie security configuration
///
/// Controls how the session cookie is created and secured for browser clients
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct CookieConfig {
    /// HttpOnly flag prevents JavaScript access (XSS protection)
    pub http_only: bool,
    /// Secure flag ensures HTTPS-only transmission (should be true in production)
    pub secure: bool,
    /// SameSite attribute for CSRF protection
    pub same_site: SameSite,
    /// Path attribute to limit cookie scope
    pub path: String,
}

/// SameSite cookie attribute for CSRF protection
#[derive(Debug, Clone, Copy, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    /// Strict mode - cookie not sent with cross-site requests
    Strict,
    /// Lax mode - cookie sent with top-level navigations
    Lax,
    /// None mode - cookie sent with all requests (requires Secure)
    None,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            http_only: true,
            secure: false, // Set to true in production
            same_site: SameSite::Lax, // Allows top-level navigations into the app
            path: "/".to_string(),
        }
    }
}

/// Builds a Set-Cookie header value for the session token
pub fn build_session_cookie(token: &str, max_age_seconds: i64, config: &CookieConfig) -> String {
    let same_site_str = match config.same_site {
        SameSite::Strict => "Strict",
        SameSite::Lax => "Lax",
        SameSite::None => "None",
    };

    format!(
        "{}={}; {}{}SameSite={}; Path={}; Max-Age={}",
        SESSION_COOKIE,
        token,
        if config.http_only { "HttpOnly; " } else { "" },
        if config.secure { "Secure; " } else { "" },
        same_site_str,
        config.path,
        max_age_seconds
    )
}

/// Builds a Set-Cookie header value that clears the session cookie
///
/// Used during logout to invalidate the cookie by setting Max-Age=0
pub fn build_clear_session_cookie() -> String {
    format!(
        "{}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0",
        SESSION_COOKIE
    )
}

/// Extract specific cookie value from Cookie header
///
/// # Arguments
/// * `cookie_str` - Cookie header value
/// * `cookie_name` - Name of the cookie to extract
///
/// # Returns
/// * `Some(token)` - Cookie value if found
/// * `None` - Cookie not found
pub fn extract_cookie_value(cookie_str: &str, cookie_name: &str) -> Option<String> {
    cookie_str
        .split(';')
        .map(|s| s.trim())
        .find(|cookie| cookie.starts_with(&format!("{}=", cookie_name)))
        .and_then(|cookie| cookie.split('=').nth(1).map(|s| s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_cookie_value() {
        let cookie_str = "session_token=abc123; theme=dark";
        assert_eq!(
            extract_cookie_value(cookie_str, "session_token"),
            Some("abc123".to_string())
        );
        assert_eq!(
            extract_cookie_value(cookie_str, "theme"),
            Some("dark".to_string())
        );
        assert_eq!(extract_cookie_value(cookie_str, "nonexistent"), None);
    }

    #[test]
    fn test_extract_cookie_value_with_spaces() {
        let cookie_str = "session_token=token123; other=value";
        assert_eq!(
            extract_cookie_value(cookie_str, "session_token"),
            Some("token123".to_string())
        );
    }

    #[test]
    fn test_extract_cookie_value_empty() {
        let cookie_str = "session_token=; other=value";
        // Empty cookie value returns empty string (not None)
        assert_eq!(
            extract_cookie_value(cookie_str, "session_token"),
            Some("".to_string())
        );
    }

    #[test]
    fn test_build_session_cookie() {
        let cookie = build_session_cookie("abc123", 3600, &CookieConfig::default());
        assert_eq!(
            cookie,
            "session_token=abc123; HttpOnly; SameSite=Lax; Path=/; Max-Age=3600"
        );
    }

    #[test]
    fn test_build_session_cookie_hardened_config() {
        let config = CookieConfig {
            http_only: true,
            secure: true,
            same_site: SameSite::Strict,
            path: "/".to_string(),
        };
        let cookie = build_session_cookie("abc123", 3600, &config);
        assert_eq!(
            cookie,
            "session_token=abc123; HttpOnly; Secure; SameSite=Strict; Path=/; Max-Age=3600"
        );
    }

    #[test]
    fn test_build_clear_session_cookie() {
        let cookie = build_clear_session_cookie();
        assert!(cookie.starts_with("session_token=;"));
        assert!(cookie.ends_with("Max-Age=0"));
    }
}
