//! HTTP transport abstraction.
//!
//! The client issues every feed and token request through the
//! [`Transport`] trait: one HTTPS request in, status code and raw body
//! bytes out. [`HttpsTransport`] is the `reqwest`-backed default; tests
//! substitute a scripted implementation. The trait assumes a reliable
//! adapter and specifies no retry, timeout or connection management —
//! those belong to the implementation or the caller.

use bytes::Bytes;

use crate::error::Result;

/// HTTP method used by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET request (feed pages).
    Get,
    /// POST request (token exchange).
    Post,
}

/// One HTTPS request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Request method.
    pub method: Method,
    /// Target host, without scheme.
    pub host: String,
    /// Target port.
    pub port: u16,
    /// Path plus query string.
    pub path: String,
    /// Header name/value pairs, in send order.
    pub headers: Vec<(String, String)>,
    /// Request body, if any.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a GET request on the default HTTPS port.
    #[must_use]
    pub fn get(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            host: host.into(),
            port: 443,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Creates a POST request carrying `body`, with a matching
    /// `Content-Length` header.
    #[must_use]
    pub fn post(host: impl Into<String>, path: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method: Method::Post,
            host: host.into(),
            port: 443,
            path: path.into(),
            headers: vec![("Content-Length".to_string(), body.len().to_string())],
            body: Some(body),
        }
    }

    /// Appends a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Returns the first header with the given name, if any.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status code plus body bytes.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw body bytes.
    pub body: Bytes,
}

impl HttpResponse {
    /// Creates a response from a status code and body bytes.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true if the status is in 200-299.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Performs one HTTPS request.
pub trait Transport {
    /// Sends the request and returns the raw status and body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) on a
    /// network or connection failure.
    fn request(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse>> + Send;
}

impl<T: Transport> Transport for std::sync::Arc<T> {
    fn request(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse>> + Send {
        T::request(self, request)
    }
}

/// `reqwest`-backed transport speaking HTTPS.
#[derive(Debug, Clone, Default)]
pub struct HttpsTransport {
    client: reqwest::Client,
}

impl HttpsTransport {
    /// Creates a transport with a fresh connection pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpsTransport {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = if request.port == 443 {
            format!("https://{}{}", request.host, request.path)
        } else {
            format!("https://{}:{}{}", request.host, request.port, request.path)
        };

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_request_defaults() {
        let request = HttpRequest::get("www.google.com", "/m8/feeds");
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.port, 443);
        assert!(request.headers.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_post_sets_content_length() {
        let request = HttpRequest::post("accounts.google.com", "/o/oauth2/token", b"a=1".to_vec());
        assert_eq!(request.header("content-length"), Some("3"));
        assert_eq!(request.body.as_deref(), Some(b"a=1".as_slice()));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request =
            HttpRequest::get("www.google.com", "/").with_header("Authorization", "OAuth tok");
        assert_eq!(request.header("authorization"), Some("OAuth tok"));
        assert_eq!(request.header("x-missing"), None);
    }

    #[test]
    fn test_response_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(299, "").is_success());
        assert!(!HttpResponse::new(199, "").is_success());
        assert!(!HttpResponse::new(400, "").is_success());
    }
}
