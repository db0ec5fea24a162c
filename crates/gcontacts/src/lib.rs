//! # gcontacts
//!
//! Client for the Google Contacts v3 ("GData") feed API with OAuth2
//! token refresh.
//!
//! The feed returns contacts in bounded pages; when a response is
//! truncated the server adds a `"next"` navigation link pointing at the
//! rest. [`DirectoryClient::fetch_contacts`] follows that chain
//! sequentially and returns the accumulated list in server order.
//! [`DirectoryClient::refresh_access_token`] exchanges a long-lived
//! refresh token for a fresh access token via the OAuth2 refresh-token
//! grant.
//!
//! ## Quick Start
//!
//! ```ignore
//! use gcontacts::{Credentials, DirectoryClient, HttpsTransport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::new()
//!         .with_consumer_key("your_client_id")
//!         .with_consumer_secret("your_secret")
//!         .with_refresh_token("long_lived_refresh_token");
//!
//!     let mut client = DirectoryClient::new(HttpsTransport::new(), credentials);
//!
//!     // Mint a fresh access token; the client stores it for later calls.
//!     client.refresh_access_token().await?;
//!
//!     // Fetch every page of the contact feed.
//!     let contacts = client.fetch_contacts().await?;
//!     for contact in &contacts {
//!         println!("{}", contact.display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Scope
//!
//! One grant flow (refresh-token exchange) and one resource traversal
//! (the contact feed); no write operations and no retry or backoff —
//! errors surface to the caller on first occurrence. Transport concerns
//! (TLS, pooling, timeouts) live behind the [`Transport`] trait;
//! [`HttpsTransport`] is the `reqwest`-backed default.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
mod credentials;
mod error;
pub mod feed;
mod token;
pub mod transport;

pub use client::{DirectoryClient, FEED_HOST, TOKEN_HOST, TOKEN_PATH};
pub use credentials::Credentials;
pub use error::{Error, Result};
pub use feed::{Contact, FeedLink, FeedPage, FetchOptions, RawEntry, extract_contacts};
pub use token::TokenResponse;
pub use transport::{HttpRequest, HttpResponse, HttpsTransport, Method, Transport};
