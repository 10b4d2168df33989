//! Authentication header building for API requests.

use super::credentials::{AuthScheme, SecureString};

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the `Authorization` header for a stored token.
///
/// Returns `None` when there is no token or it is empty; the caller treats
/// that as "not logged in" instead of sending an anonymous request.
pub fn build_auth_header(scheme: AuthScheme, token: Option<&SecureString>) -> Option<AuthHeader> {
    let token = token.filter(|t| !t.is_empty())?;
    Some((
        "Authorization".to_string(),
        format!("{} {}", scheme.keyword(), token.expose()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(value: &str) -> SecureString {
        SecureString::new(value.to_string())
    }

    #[test]
    fn test_token_header() {
        let header = build_auth_header(AuthScheme::Token, Some(&token("abc123")));
        let (name, value) = header.unwrap();
        assert_eq!(name, "Authorization");
        assert_eq!(value, "token abc123");
    }

    #[test]
    fn test_bearer_header() {
        let header = build_auth_header(AuthScheme::Bearer, Some(&token("abc123")));
        assert_eq!(header.unwrap().1, "Bearer abc123");
    }

    #[test]
    fn test_missing_token() {
        assert!(build_auth_header(AuthScheme::Token, None).is_none());
    }

    #[test]
    fn test_empty_token() {
        assert!(build_auth_header(AuthScheme::Token, Some(&token(""))).is_none());
    }
}
