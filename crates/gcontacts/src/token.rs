//! Token exchange response types.

use serde::Deserialize;

/// Successful response from the refresh-token exchange.
///
/// Only `access_token` is required; a response without it fails to
/// decode.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// New access token.
    pub access_token: String,
    /// Token type (usually `"Bearer"`).
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime of the access token in seconds.
    #[serde(default)]
    pub expires_in: Option<u32>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_full_response() {
        let json = r#"{"access_token": "abc123", "token_type": "Bearer", "expires_in": 3600}"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "abc123");
        assert_eq!(response.token_type.as_deref(), Some("Bearer"));
        assert_eq!(response.expires_in, Some(3600));
    }

    #[test]
    fn test_access_token_alone_is_enough() {
        let response: TokenResponse =
            serde_json::from_str(r#"{"access_token": "abc123"}"#).unwrap();
        assert_eq!(response.access_token, "abc123");
        assert!(response.token_type.is_none());
    }

    #[test]
    fn test_missing_access_token_fails() {
        let result = serde_json::from_str::<TokenResponse>(r#"{"token_type": "Bearer"}"#);
        assert!(result.is_err());
    }
}
