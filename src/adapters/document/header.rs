//! Regex-based header codec for stored document files.
//!
//! A stored file is a four-line metadata header fenced by `---` followed by
//! the markdown body. `decode` reassembles a file into a `Document`;
//! `encode` is its inverse and renders the canonical layout:
//!
//! ```text
//! ---
//! Author: [Name]
//! Date: YYYY-MM-DD
//! Status: [INBOX|IN PROGRESS|COMPLETED|MISC]
//! Goal: [Brief purpose statement]
//! ---
//! ```
//!
//! The filename stem carries one of the record's two dates, the header
//! `Date:` line the other: for an open document the stem holds the creation
//! date and the header the last-modified date; for a completed document the
//! stem holds the completion date and the header the creation date.

use regex::Regex;
use thiserror::Error;

use crate::domain::document::{Document, DocumentName, MarkdownBody};
use crate::domain::foundation::{DocDate, DocumentStatus, ValidationError};

/// Keys the header block accepts, in render order.
const HEADER_KEYS: [&str; 4] = ["Author", "Date", "Status", "Goal"];

const FENCE: &str = "---";

/// Error raised when a stored file cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("line {line}: {message}")]
    AtLine { line: usize, message: String },

    #[error("{message}")]
    Structural { message: String },
}

impl HeaderError {
    fn at_line(line: usize, message: impl Into<String>) -> Self {
        Self::AtLine {
            line,
            message: message.into(),
        }
    }

    fn structural(message: impl Into<String>) -> Self {
        Self::Structural {
            message: message.into(),
        }
    }
}

/// Regex-based implementation of the header contract.
///
/// Parsing is order-insensitive over the four keys and tolerates blank
/// lines inside the fence; unknown, duplicate, and missing keys are
/// rejected. Rendering always emits the canonical key order.
#[derive(Debug, Clone)]
pub struct HeaderCodec {
    key_value_regex: Regex,
}

impl Default for HeaderCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderCodec {
    /// Creates a new codec with precompiled regexes.
    pub fn new() -> Self {
        Self {
            // Matches "Key: value" header lines; value may be empty.
            key_value_regex: Regex::new(r"^([A-Za-z][A-Za-z ]*):\s*(.*)$").unwrap(),
        }
    }

    /// Decodes a stored file into a `Document`.
    ///
    /// `stem` is the filename without the `.md` extension and supplies the
    /// identifier; `content` is the full file text. The body is carried
    /// byte-exact, so `encode` of the result reproduces the file.
    ///
    /// # Errors
    ///
    /// Returns `HeaderError` naming the offending line where one exists:
    /// malformed fences, unknown/duplicate/missing keys, unparseable
    /// values, or header fields that contradict the name.
    pub fn decode(&self, stem: &str, content: &str) -> Result<Document, HeaderError> {
        let name: DocumentName = stem
            .parse()
            .map_err(|e: ValidationError| {
                HeaderError::structural(format!("invalid document name {:?}: {}", stem, e))
            })?;

        let (first_line, mut rest) = split_line(content);
        if first_line.trim_end_matches('\r') != FENCE {
            return Err(HeaderError::at_line(1, "expected opening '---' fence"));
        }

        let mut author: Option<String> = None;
        let mut date: Option<(usize, String)> = None;
        let mut status: Option<(usize, String)> = None;
        let mut goal: Option<(usize, String)> = None;

        let mut line_no = 1;
        let mut closed = false;

        while !rest.is_empty() {
            let (line, remainder) = split_line(rest);
            rest = remainder;
            line_no += 1;

            let line = line.trim_end_matches('\r');
            if line == FENCE {
                closed = true;
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            let caps = self
                .key_value_regex
                .captures(line)
                .ok_or_else(|| HeaderError::at_line(line_no, "expected 'Key: value'"))?;
            let key = caps.get(1).map(|m| m.as_str()).unwrap_or("").trim();
            let value = caps.get(2).map(|m| m.as_str()).unwrap_or("").trim();

            let slot = match key {
                "Author" => {
                    if author.is_some() {
                        return Err(HeaderError::at_line(
                            line_no,
                            format!("duplicate key {:?}", key),
                        ));
                    }
                    author = Some(value.to_string());
                    continue;
                }
                "Date" => &mut date,
                "Status" => &mut status,
                "Goal" => &mut goal,
                other => {
                    return Err(HeaderError::at_line(
                        line_no,
                        format!("unknown header key {:?}", other),
                    ));
                }
            };
            if slot.is_some() {
                return Err(HeaderError::at_line(
                    line_no,
                    format!("duplicate key {:?}", key),
                ));
            }
            *slot = Some((line_no, value.to_string()));
        }

        if !closed {
            return Err(HeaderError::structural("header never closed with '---'"));
        }

        let author = author.ok_or_else(|| missing_key("Author"))?;
        let (date_line, date_value) = date.ok_or_else(|| missing_key("Date"))?;
        let (status_line, status_value) = status.ok_or_else(|| missing_key("Status"))?;
        let (_, goal_value) = goal.ok_or_else(|| missing_key("Goal"))?;

        let header_date = DocDate::parse(&date_value)
            .map_err(|e| HeaderError::at_line(date_line, e.to_string()))?;
        let status = DocumentStatus::from_header_label(&status_value)
            .map_err(|e| HeaderError::at_line(status_line, e.to_string()))?;

        // The name holds the creation date for open documents and the
        // completion date for completed ones; the header holds the other.
        let (created_on, last_modified_on) = match status {
            DocumentStatus::Completed => (header_date, name.date()),
            _ => (name.date(), header_date),
        };

        Document::new(
            name,
            status,
            author,
            goal_value,
            created_on,
            last_modified_on,
            MarkdownBody::new(rest),
        )
        .map_err(|e| HeaderError::structural(e.to_string()))
    }

    /// Renders a document as file text: canonical header plus the body.
    pub fn encode(&self, document: &Document) -> String {
        // Header fields are single-line by construction; a line break
        // here would corrupt the fence structure.
        debug_assert!(!document.author().contains('\n'));
        debug_assert!(!document.goal().as_str().contains('\n'));

        let header_date = match document.status() {
            DocumentStatus::Completed => document.created_on(),
            _ => document.last_modified_on(),
        };
        format!(
            "{fence}\nAuthor: {author}\nDate: {date}\nStatus: {status}\nGoal: {goal}\n{fence}\n{body}",
            fence = FENCE,
            author = document.author(),
            date = header_date,
            status = document.status().header_label(),
            goal = document.goal(),
            body = document.body().raw(),
        )
    }
}

fn missing_key(key: &str) -> HeaderError {
    debug_assert!(HEADER_KEYS.contains(&key));
    HeaderError::structural(format!("missing header key {:?}", key))
}

/// Splits off the first line, excluding the newline from both halves' start.
fn split_line(s: &str) -> (&str, &str) {
    match s.find('\n') {
        Some(i) => (&s[..i], &s[i + 1..]),
        None => (s, ""),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
