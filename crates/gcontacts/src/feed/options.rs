//! Feed request options and path construction.

use url::form_urlencoded;

/// Root of every feed path.
const FEED_ROOT: &str = "/m8/feeds";

/// Output format requested from the feed (`alt` query parameter).
const OUTPUT_FORMAT: &str = "json";

/// Default page size requested from the feed.
const DEFAULT_MAX_RESULTS: u32 = 2000;

/// Options for one feed request.
///
/// An explicit path, when set, overrides every other field; pagination
/// uses it to follow server-supplied continuation links. Values are not
/// validated beyond defaulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    result_type: String,
    email_scope: String,
    projection: String,
    max_results: u32,
    explicit_path: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            result_type: "contacts".to_string(),
            email_scope: "default".to_string(),
            projection: "full".to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            explicit_path: None,
        }
    }
}

impl FetchOptions {
    /// Creates options with the default contact-feed settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the result type path segment (default `"contacts"`).
    #[must_use]
    pub fn with_result_type(mut self, result_type: impl Into<String>) -> Self {
        self.result_type = result_type.into();
        self
    }

    /// Sets the email scope path segment (default `"default"`).
    #[must_use]
    pub fn with_email_scope(mut self, email_scope: impl Into<String>) -> Self {
        self.email_scope = email_scope.into();
        self
    }

    /// Sets the projection path segment (default `"full"`).
    #[must_use]
    pub fn with_projection(mut self, projection: impl Into<String>) -> Self {
        self.projection = projection.into();
        self
    }

    /// Sets the page size (default 2000, the feed's hard ceiling).
    #[must_use]
    pub const fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Sets an explicit path, bypassing path construction entirely.
    #[must_use]
    pub fn with_explicit_path(mut self, path: impl Into<String>) -> Self {
        self.explicit_path = Some(path.into());
        self
    }

    /// Builds the request path and query string.
    ///
    /// An explicit path is returned unchanged. Otherwise the fixed
    /// `/m8/feeds/<type>/<email>/<projection>` form is produced, with
    /// the output format and page size form-encoded into the query
    /// string.
    #[must_use]
    pub fn to_path(&self) -> String {
        if let Some(path) = &self.explicit_path {
            return path.clone();
        }

        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("alt", OUTPUT_FORMAT)
            .append_pair("max-results", &self.max_results.to_string())
            .finish();

        format!(
            "{FEED_ROOT}/{}/{}/{}?{query}",
            self.result_type, self.email_scope, self.projection
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let path = FetchOptions::default().to_path();
        assert_eq!(path, "/m8/feeds/contacts/default/full?alt=json&max-results=2000");
    }

    #[test]
    fn test_default_path_carries_format_and_page_size() {
        let path = FetchOptions::new().to_path();
        assert!(path.contains("alt=json"));
        assert!(path.contains("max-results=2000"));
    }

    #[test]
    fn test_explicit_path_passthrough() {
        let options = FetchOptions::new()
            .with_max_results(10)
            .with_projection("thin")
            .with_explicit_path("/foo?bar=1");
        assert_eq!(options.to_path(), "/foo?bar=1");
    }

    #[test]
    fn test_custom_segments() {
        let path = FetchOptions::new()
            .with_result_type("groups")
            .with_email_scope("user@example.com")
            .with_projection("thin")
            .with_max_results(25)
            .to_path();
        assert!(path.starts_with("/m8/feeds/groups/user@example.com/thin?"));
        assert!(path.contains("max-results=25"));
    }
}
