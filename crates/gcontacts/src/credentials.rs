//! Client credentials for the feed and token endpoints.

/// OAuth2 credentials owned by one client instance.
///
/// Every field is optional; the feed only needs an access token, the
/// refresh exchange only the consumer pair and a refresh token. A
/// successful refresh produces a new value carrying the fresh access
/// token, which the owning client swaps in. Nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    consumer_key: Option<String>,
    consumer_secret: Option<String>,
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl Credentials {
    /// Creates empty credentials.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates credentials holding only an access token.
    #[must_use]
    pub fn from_access_token(token: impl Into<String>) -> Self {
        Self::new().with_access_token(token)
    }

    /// Sets the consumer key (sent as `client_id` on refresh).
    #[must_use]
    pub fn with_consumer_key(mut self, key: impl Into<String>) -> Self {
        self.consumer_key = Some(key.into());
        self
    }

    /// Sets the consumer secret (sent as `client_secret` on refresh).
    #[must_use]
    pub fn with_consumer_secret(mut self, secret: impl Into<String>) -> Self {
        self.consumer_secret = Some(secret.into());
        self
    }

    /// Sets the access token used on feed requests.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the long-lived refresh token.
    #[must_use]
    pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    /// Returns the consumer key if set.
    #[must_use]
    pub fn consumer_key(&self) -> Option<&str> {
        self.consumer_key.as_deref()
    }

    /// Returns the consumer secret if set.
    #[must_use]
    pub fn consumer_secret(&self) -> Option<&str> {
        self.consumer_secret.as_deref()
    }

    /// Returns the current access token if set.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Returns the refresh token if set.
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_credentials() {
        let creds = Credentials::new();
        assert!(creds.consumer_key().is_none());
        assert!(creds.access_token().is_none());
        assert!(creds.refresh_token().is_none());
    }

    #[test]
    fn test_builder_chain() {
        let creds = Credentials::new()
            .with_consumer_key("key")
            .with_consumer_secret("secret")
            .with_access_token("access")
            .with_refresh_token("refresh");

        assert_eq!(creds.consumer_key(), Some("key"));
        assert_eq!(creds.consumer_secret(), Some("secret"));
        assert_eq!(creds.access_token(), Some("access"));
        assert_eq!(creds.refresh_token(), Some("refresh"));
    }

    #[test]
    fn test_access_token_swap_keeps_rest() {
        let creds = Credentials::new()
            .with_consumer_key("key")
            .with_refresh_token("refresh")
            .with_access_token("old");

        let swapped = creds.clone().with_access_token("new");
        assert_eq!(swapped.access_token(), Some("new"));
        assert_eq!(swapped.consumer_key(), Some("key"));
        assert_eq!(swapped.refresh_token(), Some("refresh"));
        assert_eq!(creds.access_token(), Some("old"));
    }
}
