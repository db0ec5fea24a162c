//! GData feed page decoding.

use serde::Deserialize;

use crate::error::Result;

/// Relation name marking a continuation link.
const NEXT_REL: &str = "next";

/// Top-level GData document wrapping the feed object.
#[derive(Debug, Deserialize)]
struct FeedDocument {
    feed: FeedPage,
}

/// One decoded feed page: raw entries plus navigation links.
#[derive(Debug, Default, Deserialize)]
pub struct FeedPage {
    #[serde(default, rename = "entry")]
    entries: Vec<RawEntry>,
    #[serde(default, rename = "link")]
    links: Vec<FeedLink>,
}

impl FeedPage {
    /// Decodes a raw response body into a feed page.
    ///
    /// Absent `entry` or `link` arrays decode as empty; entry shape is
    /// not validated here, that is extraction's job.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`](crate::Error::Decode) if the bytes are
    /// not well-formed JSON or the top-level `feed` object is missing.
    pub fn decode(raw: &[u8]) -> Result<Self> {
        let document: FeedDocument = serde_json::from_slice(raw)?;
        Ok(document.feed)
    }

    /// Raw entries in server order.
    #[must_use]
    pub fn entries(&self) -> &[RawEntry] {
        &self.entries
    }

    /// Navigation links carried by the page.
    #[must_use]
    pub fn links(&self) -> &[FeedLink] {
        &self.links
    }

    /// Href of the first `"next"` link, if more pages remain.
    ///
    /// The upstream API sends at most one such link per page; should
    /// more appear, only the first is honored.
    #[must_use]
    pub fn next_link(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.rel == NEXT_REL)
            .map(|link| link.href.as_str())
    }
}

/// One navigation link from a feed page.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedLink {
    /// Link relation, for example `"next"` or `"self"`.
    pub rel: String,
    /// Link target as an absolute URL.
    pub href: String,
}

/// One raw feed entry before extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    title: Option<TextValue>,
    #[serde(default, rename = "gd$email")]
    emails: Vec<EmailField>,
}

impl RawEntry {
    /// Display name from the entry's `title.$t` field.
    pub(crate) fn display_name(&self) -> Option<&str> {
        self.title.as_ref()?.value.as_deref()
    }

    /// First listed email address; later ones are never consulted.
    pub(crate) fn first_email(&self) -> Option<&str> {
        self.emails.first()?.address.as_deref()
    }
}

/// GData text wrapper, `{"$t": "..."}`.
#[derive(Debug, Clone, Deserialize)]
struct TextValue {
    #[serde(rename = "$t")]
    value: Option<String>,
}

/// One element of an entry's `gd$email` array.
#[derive(Debug, Clone, Deserialize)]
struct EmailField {
    address: Option<String>,
}
