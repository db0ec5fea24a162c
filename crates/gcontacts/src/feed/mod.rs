//! Directory feed types: request options, page decoding, contact
//! extraction.

mod extract;
mod options;
mod page;

pub use extract::{Contact, extract_contacts};
pub use options::FetchOptions;
pub use page::{FeedLink, FeedPage, RawEntry};
