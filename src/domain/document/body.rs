//! Free-form text stored beneath a document's header.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the body text.
fn digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Everything in a document file after the closing header line.
///
/// A digest is captured at construction, so detecting an out-of-band edit
/// means comparing two short strings instead of the whole text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownBody {
    raw: String,
    checksum: String,
}

impl MarkdownBody {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            checksum: digest(&raw),
            raw,
        }
    }

    /// The body text exactly as stored.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Digest of the stored text.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn size_bytes(&self) -> usize {
        self.raw.len()
    }

    /// True when `text` would hash to a different digest than this body.
    pub fn differs_from(&self, text: &str) -> bool {
        self.checksum != digest(text)
    }
}

impl Default for MarkdownBody {
    fn default() -> Self {
        Self::new("")
    }
}

// Two bodies with the same digest hold the same text.
impl PartialEq for MarkdownBody {
    fn eq(&self, other: &Self) -> bool {
        self.checksum == other.checksum
    }
}

impl Eq for MarkdownBody {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_is_stable_for_same_text() {
        let a = MarkdownBody::new("## Notes\n\nSome text.");
        let b = MarkdownBody::new("## Notes\n\nSome text.");
        assert_eq!(a.checksum(), b.checksum());
    }

    #[test]
    fn equality_follows_checksum() {
        let a = MarkdownBody::new("same");
        let b = MarkdownBody::new("same");
        let c = MarkdownBody::new("different");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn differs_from_detects_edits() {
        let body = MarkdownBody::new("original");
        assert!(!body.differs_from("original"));
        assert!(body.differs_from("edited"));
    }

    #[test]
    fn default_is_empty() {
        let body = MarkdownBody::default();
        assert_eq!(body.raw(), "");
        assert_eq!(body.size_bytes(), 0);
    }
}
