//! Document identifier value object.
//!
//! The identifier is the filename stem and carries the lifecycle marker:
//!
//! - Open documents: `P{1-3}-YYYY-MM-DD-feature-name` (priority + creation date)
//! - Completed: `DONE-YYYY-MM-DD-feature-name` (completion date replaces both)

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DocDate, Priority, Slug, ValidationError};

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(P[123]|DONE)-(\d{4}-\d{2}-\d{2})-([a-z0-9-]+)$").unwrap());

/// Leading marker of a document name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameMarker {
    /// Open document carrying its priority band.
    Priority(Priority),
    /// Completed document.
    Done,
}

impl NameMarker {
    /// Returns the filename prefix form (`P1`..`P3` or `DONE`).
    pub fn as_str(&self) -> &'static str {
        match self {
            NameMarker::Priority(priority) => priority.as_str(),
            NameMarker::Done => "DONE",
        }
    }
}

impl fmt::Display for NameMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unique, stable identifier for a managed document.
///
/// Serialized as its string form, e.g. `P2-2024-01-15-auth-flow`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DocumentName {
    marker: NameMarker,
    date: DocDate,
    slug: Slug,
}

impl DocumentName {
    /// Creates an open document name: priority marker + creation date + slug.
    pub fn new(priority: Priority, created_on: DocDate, slug: Slug) -> Self {
        Self {
            marker: NameMarker::Priority(priority),
            date: created_on,
            slug,
        }
    }

    /// Parses a name from its filename-stem form.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let captures = NAME_PATTERN.captures(s).ok_or_else(|| {
            ValidationError::invalid_format(
                "document_name",
                format!(
                    "expected P{{1-3}}-YYYY-MM-DD-feature-name or DONE-YYYY-MM-DD-feature-name, got '{}'",
                    s
                ),
            )
        })?;

        let marker = match &captures[1] {
            "DONE" => NameMarker::Done,
            prefix => NameMarker::Priority(prefix.parse()?),
        };
        let date = DocDate::parse(&captures[2])?;
        let slug = Slug::new(&captures[3])?;

        Ok(Self { marker, date, slug })
    }

    /// Returns the leading marker.
    pub fn marker(&self) -> NameMarker {
        self.marker
    }

    /// Returns the date segment (creation date for open documents,
    /// completion date once the DONE marker is applied).
    pub fn date(&self) -> DocDate {
        self.date
    }

    /// Returns the feature-name slug.
    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Returns the priority for open documents, None once completed.
    pub fn priority(&self) -> Option<Priority> {
        match self.marker {
            NameMarker::Priority(priority) => Some(priority),
            NameMarker::Done => None,
        }
    }

    /// Returns true if the name carries the DONE marker.
    pub fn is_done(&self) -> bool {
        matches!(self.marker, NameMarker::Done)
    }

    /// Returns the name rewritten for completion on the given date.
    ///
    /// The DONE marker and completion date replace the priority and
    /// creation date; the slug survives.
    pub fn completed(&self, on: DocDate) -> DocumentName {
        DocumentName {
            marker: NameMarker::Done,
            date: on,
            slug: self.slug.clone(),
        }
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.marker, self.date, self.slug)
    }
}

impl FromStr for DocumentName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentName::parse(s)
    }
}

impl From<DocumentName> for String {
    fn from(name: DocumentName) -> String {
        name.to_string()
    }
}

impl TryFrom<String> for DocumentName {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        DocumentName::parse(&s)
    }
}
