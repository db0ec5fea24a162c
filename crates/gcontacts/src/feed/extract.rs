//! Contact extraction from raw feed entries.

use tracing::debug;

use super::page::RawEntry;

/// A contact extracted from the directory feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Display name.
    pub name: String,
    /// Primary email address: the first one the feed lists.
    pub email: String,
}

impl Contact {
    /// Creates a new contact.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns a display string for the contact.
    ///
    /// If a name is present, returns "Name <email>", otherwise just the
    /// email.
    #[must_use]
    pub fn display(&self) -> String {
        if self.name.is_empty() {
            self.email.clone()
        } else {
            format!("{} <{}>", self.name, self.email)
        }
    }
}

/// Maps raw entries to contacts, preserving input order.
///
/// Only the first listed email of an entry is kept; additional
/// addresses are dropped by policy. An entry missing its display name
/// or listing no email is skipped silently, never failing the batch;
/// skips are counted and logged at debug level.
#[must_use]
pub fn extract_contacts(entries: &[RawEntry]) -> Vec<Contact> {
    let mut contacts = Vec::with_capacity(entries.len());
    let mut skipped = 0_usize;

    for entry in entries {
        match (entry.display_name(), entry.first_email()) {
            (Some(name), Some(email)) => contacts.push(Contact::new(name, email)),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(skipped, "dropped entries missing a name or email");
    }

    contacts
}
