//! Stateful directory client: pagination driver and token refresher.

use tracing::debug;
use url::{Url, form_urlencoded};

use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::feed::{Contact, FeedPage, FetchOptions, extract_contacts};
use crate::token::TokenResponse;
use crate::transport::{HttpRequest, Transport};

/// Host serving the contact feed.
pub const FEED_HOST: &str = "www.google.com";

/// Host serving the OAuth2 token endpoint.
pub const TOKEN_HOST: &str = "accounts.google.com";

/// Path of the OAuth2 token endpoint.
pub const TOKEN_PATH: &str = "/o/oauth2/token";

/// Ceiling on pages followed per traversal before giving up. Guards
/// against a cyclic or unbounded `"next"` chain from the server.
const DEFAULT_MAX_PAGES: usize = 100;

/// Client for the contact-directory feed and its token endpoint.
///
/// Owns one [`Credentials`] value. Feed traversal never mutates it; a
/// successful [`refresh_access_token`](Self::refresh_access_token)
/// swaps in credentials carrying the new access token, so subsequent
/// requests on the same client use it. Clients wanting concurrent
/// traversals should use separate instances.
#[derive(Debug)]
pub struct DirectoryClient<T> {
    transport: T,
    credentials: Credentials,
    max_pages: usize,
}

impl<T: Transport> DirectoryClient<T> {
    /// Creates a client over the given transport.
    #[must_use]
    pub const fn new(transport: T, credentials: Credentials) -> Self {
        Self {
            transport,
            credentials,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Sets the pagination ceiling (default 100 pages).
    #[must_use]
    pub const fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Current credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Fetches the full contact list with default feed options.
    ///
    /// # Errors
    ///
    /// See [`fetch_contacts_with`](Self::fetch_contacts_with).
    pub async fn fetch_contacts(&self) -> Result<Vec<Contact>> {
        self.fetch_contacts_with(FetchOptions::default()).await
    }

    /// Fetches the full contact list, following `"next"` links until
    /// the feed is exhausted.
    ///
    /// Pages are requested strictly one at a time, each continuation
    /// depending on the previous page's next link. The returned
    /// contacts keep server feed order: page arrival order, then entry
    /// order within each page.
    ///
    /// # Errors
    ///
    /// A transport failure ([`Error::Transport`]), non-2xx status
    /// ([`Error::HttpStatus`]) or undecodable page ([`Error::Decode`])
    /// aborts the whole traversal; no partial list is returned. A chain
    /// longer than the configured ceiling fails with
    /// [`Error::TooManyPages`]. Nothing is retried.
    pub async fn fetch_contacts_with(&self, options: FetchOptions) -> Result<Vec<Contact>> {
        let mut contacts = Vec::new();
        let mut path = options.to_path();

        for page_number in 1..=self.max_pages {
            let page = self.fetch_page(&path).await?;
            let entries = page.entries().len();
            contacts.extend(extract_contacts(page.entries()));
            debug!(page_number, entries, total = contacts.len(), "fetched feed page");

            match page.next_link() {
                Some(href) => path = continuation_path(href)?,
                None => return Ok(contacts),
            }
        }

        Err(Error::TooManyPages(self.max_pages))
    }

    /// Requests and decodes one feed page.
    async fn fetch_page(&self, path: &str) -> Result<FeedPage> {
        let token = self.credentials.access_token().unwrap_or_default();
        let request = HttpRequest::get(FEED_HOST, path)
            .with_header("Authorization", format!("OAuth {token}"));

        let response = self.transport.request(request).await?;
        if !response.is_success() {
            return Err(Error::HttpStatus(response.status));
        }

        FeedPage::decode(&response.body)
    }

    /// Exchanges the stored refresh token for a new access token.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NoRefreshToken`] if the credentials hold no
    /// refresh token; otherwise as [`refresh_with`](Self::refresh_with).
    pub async fn refresh_access_token(&mut self) -> Result<String> {
        let refresh_token = self
            .credentials
            .refresh_token()
            .ok_or(Error::NoRefreshToken)?
            .to_owned();
        self.refresh_with(&refresh_token).await
    }

    /// Exchanges the given refresh token for a new access token.
    ///
    /// On success the new token is returned and the stored credentials
    /// are replaced with a copy carrying it. On any failure the
    /// credentials are left untouched.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::HttpStatus`] on a non-2xx exchange response,
    /// [`Error::Decode`] if the response body is malformed or missing
    /// the access token, or [`Error::Transport`] on a network failure.
    /// Nothing is retried.
    pub async fn refresh_with(&mut self, refresh_token: &str) -> Result<String> {
        let mut form = form_urlencoded::Serializer::new(String::new());
        form.append_pair("refresh_token", refresh_token);
        if let Some(key) = self.credentials.consumer_key() {
            form.append_pair("client_id", key);
        }
        if let Some(secret) = self.credentials.consumer_secret() {
            form.append_pair("client_secret", secret);
        }
        form.append_pair("grant_type", "refresh_token");
        let body = form.finish().into_bytes();

        let request = HttpRequest::post(TOKEN_HOST, TOKEN_PATH, body)
            .with_header("Content-Type", "application/x-www-form-urlencoded");

        let response = self.transport.request(request).await?;
        if !response.is_success() {
            return Err(Error::HttpStatus(response.status));
        }

        let token: TokenResponse = serde_json::from_slice(&response.body)?;
        debug!("access token refreshed");
        self.credentials = self
            .credentials
            .clone()
            .with_access_token(token.access_token.clone());

        Ok(token.access_token)
    }
}

/// Reduces a continuation href to its path and query component.
///
/// Continuation links are assumed to target the feed host, so scheme
/// and host are discarded. A relative href is already a path and is
/// used verbatim.
fn continuation_path(href: &str) -> Result<String> {
    match Url::parse(href) {
        Ok(url) => {
            let mut path = url.path().to_string();
            if let Some(query) = url.query() {
                path.push('?');
                path.push_str(query);
            }
            Ok(path)
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(href.to_string()),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_continuation_path_strips_scheme_and_host() {
        let path = continuation_path(
            "https://www.google.com/m8/feeds/contacts/default/full?alt=json&start-index=26",
        )
        .unwrap();
        assert_eq!(path, "/m8/feeds/contacts/default/full?alt=json&start-index=26");
    }

    #[test]
    fn test_continuation_path_without_query() {
        let path = continuation_path("https://www.google.com/m8/feeds/contacts").unwrap();
        assert_eq!(path, "/m8/feeds/contacts");
    }

    #[test]
    fn test_relative_href_used_verbatim() {
        let path = continuation_path("/m8/feeds/contacts?start-index=26").unwrap();
        assert_eq!(path, "/m8/feeds/contacts?start-index=26");
    }
}
