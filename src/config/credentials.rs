//! Authentication scheme and secret handling.
//!
//! Passwords and login tokens are wrapped in [`SecureString`] so they never
//! end up in logs or panic messages.

use super::types::ApiConfig;

/// Keyword placed before the token in the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: token <key>` (Django REST framework token auth).
    Token,
    /// `Authorization: Bearer <key>`.
    Bearer,
}

impl AuthScheme {
    /// Parse auth scheme from string.
    /// Defaults to `Token` for unknown values.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "bearer" => AuthScheme::Bearer,
            _ => AuthScheme::Token,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            AuthScheme::Token => "token",
            AuthScheme::Bearer => "Bearer",
        }
    }
}

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs or disk.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

impl ApiConfig {
    /// Parse the auth_scheme field to AuthScheme enum.
    pub fn auth_scheme(&self) -> AuthScheme {
        AuthScheme::parse(&self.auth_scheme_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_scheme_parsing() {
        assert_eq!(AuthScheme::parse("token"), AuthScheme::Token);
        assert_eq!(AuthScheme::parse("Token"), AuthScheme::Token);
        assert_eq!(AuthScheme::parse("bearer"), AuthScheme::Bearer);
        assert_eq!(AuthScheme::parse("BEARER"), AuthScheme::Bearer);
        assert_eq!(AuthScheme::parse("unknown"), AuthScheme::Token);
        assert_eq!(AuthScheme::parse(""), AuthScheme::Token);
    }

    #[test]
    fn test_secure_string_does_not_leak() {
        let secret = SecureString::new("9f2c-token".to_string());

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("9f2c-token"));
        assert!(debug_output.contains("••••••••"));

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("9f2c-token"));

        assert_eq!(secret.expose(), "9f2c-token");
    }

    #[test]
    fn test_default_config_uses_token_scheme() {
        assert_eq!(ApiConfig::default().auth_scheme(), AuthScheme::Token);
    }
}
