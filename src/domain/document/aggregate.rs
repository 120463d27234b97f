//! Document aggregate entity.
//!
//! One managed markdown file tracked through the four-state lifecycle.
//! The aggregate is pure: a transition returns a new `Document` and leaves
//! the physical relocation to the storage layer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    Author, DocDate, DocumentStatus, Goal, Priority, Slug, StateMachine, TransitionError,
    ValidationError,
};

use super::{DocumentName, MarkdownBody};

/// Document aggregate - one managed markdown file.
///
/// # Invariants
///
/// - `name` and `status` agree: the DONE marker appears exactly when the
///   status is `Completed`
/// - an open document's name carries its creation date; a completed
///   document's name carries a completion date on or after `created_on`
/// - `goal` is non-empty; `goal` and `author` each fit on one header line
/// - `status` changes only along the lifecycle edge table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier; also the filename stem.
    name: DocumentName,

    /// Current lifecycle status. Always matches the folder the file
    /// lives in.
    status: DocumentStatus,

    /// Free-text author.
    author: Author,

    /// Purpose statement from the header.
    goal: Goal,

    /// When the document was created.
    created_on: DocDate,

    /// When the document last changed (content or relocation).
    last_modified_on: DocDate,

    /// Markdown text below the header.
    body: MarkdownBody,
}

impl Document {
    /// Creates a brand-new document in INBOX, named for today.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if goal is empty
    /// - `InvalidFormat` if goal or author spans more than one line
    pub fn create(
        priority: Priority,
        slug: Slug,
        author: impl Into<String>,
        goal: impl Into<String>,
        body: MarkdownBody,
        today: DocDate,
    ) -> Result<Self, ValidationError> {
        let author = Author::new(author)?;
        let goal = Goal::new(goal)?;
        Ok(Self {
            name: DocumentName::new(priority, today, slug),
            status: DocumentStatus::Inbox,
            author,
            goal,
            created_on: today,
            last_modified_on: today,
            body,
        })
    }

    /// Assembles a document from already-persisted parts, validating
    /// every cross-field invariant.
    ///
    /// Storage adapters use this when reading files back; a file that
    /// fails here is malformed, not merely stale.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if goal is empty
    /// - `InvalidFormat` if goal or author spans more than one line, if
    ///   name and status disagree, or the dates are inconsistent
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: DocumentName,
        status: DocumentStatus,
        author: impl Into<String>,
        goal: impl Into<String>,
        created_on: DocDate,
        last_modified_on: DocDate,
        body: MarkdownBody,
    ) -> Result<Self, ValidationError> {
        let author = Author::new(author)?;
        let goal = Goal::new(goal)?;
        Self::validate_consistency(&name, status, created_on, last_modified_on)?;
        Ok(Self {
            name,
            status,
            author,
            goal,
            created_on,
            last_modified_on,
            body,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the document name.
    pub fn name(&self) -> &DocumentName {
        &self.name
    }

    /// Returns the filename for this document (`<name>.md`).
    pub fn file_name(&self) -> String {
        format!("{}.md", self.name)
    }

    /// Returns the current status.
    pub fn status(&self) -> DocumentStatus {
        self.status
    }

    /// Returns the author.
    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    /// Returns the goal.
    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    /// Returns the creation date.
    pub fn created_on(&self) -> DocDate {
        self.created_on
    }

    /// Returns the last-modified date.
    pub fn last_modified_on(&self) -> DocDate {
        self.last_modified_on
    }

    /// Returns the markdown body.
    pub fn body(&self) -> &MarkdownBody {
        &self.body
    }

    /// Returns the number of whole days since the last modification.
    pub fn days_idle(&self, today: DocDate) -> i64 {
        today.days_since(&self.last_modified_on)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a lifecycle transition, returning the moved document.
    ///
    /// The returned document carries the new status and
    /// `last_modified_on = today`. Completing additionally rewrites the
    /// name with the DONE marker and today as the completion date.
    ///
    /// # Errors
    ///
    /// - `TransitionError::Illegal` if the edge is not in the lifecycle
    ///   table (terminal statuses reject every target)
    pub fn transition_to(
        &self,
        target: DocumentStatus,
        today: DocDate,
    ) -> Result<Document, TransitionError> {
        let status = self.status.transition_to(target)?;
        let name = if status == DocumentStatus::Completed {
            self.name.completed(today)
        } else {
            self.name.clone()
        };
        Ok(Document {
            name,
            status,
            author: self.author.clone(),
            goal: self.goal.clone(),
            created_on: self.created_on,
            last_modified_on: today,
            body: self.body.clone(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_consistency(
        name: &DocumentName,
        status: DocumentStatus,
        created_on: DocDate,
        last_modified_on: DocDate,
    ) -> Result<(), ValidationError> {
        match (status, name.is_done()) {
            (DocumentStatus::Completed, false) => {
                return Err(ValidationError::invalid_format(
                    "document_name",
                    "completed document must carry the DONE marker",
                ));
            }
            (DocumentStatus::Completed, true) => {
                if name.date().is_before(&created_on) {
                    return Err(ValidationError::invalid_format(
                        "document_name",
                        format!(
                            "completion date {} is before creation date {}",
                            name.date(),
                            created_on
                        ),
                    ));
                }
            }
            (_, true) => {
                return Err(ValidationError::invalid_format(
                    "document_name",
                    "only completed documents carry the DONE marker",
                ));
            }
            (_, false) => {
                if name.date() != created_on {
                    return Err(ValidationError::invalid_format(
                        "document_name",
                        format!(
                            "name date {} does not match creation date {}",
                            name.date(),
                            created_on
                        ),
                    ));
                }
            }
        }

        if last_modified_on.is_before(&created_on) {
            return Err(ValidationError::invalid_format(
                "last_modified",
                format!(
                    "last modified {} is before creation date {}",
                    last_modified_on, created_on
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> DocDate {
        DocDate::parse(s).unwrap()
    }

    fn slug(s: &str) -> Slug {
        Slug::new(s).unwrap()
    }

    fn inbox_doc() -> Document {
        Document::create(
            Priority::P1,
            slug("auth-flow"),
            "dana",
            "Describe the auth flow",
            MarkdownBody::new("## Plan\n"),
            date("2024-01-15"),
        )
        .unwrap()
    }

    // Construction tests

    #[test]
    fn create_starts_in_inbox() {
        let doc = inbox_doc();
        assert_eq!(doc.status(), DocumentStatus::Inbox);
        assert_eq!(doc.name().to_string(), "P1-2024-01-15-auth-flow");
        assert_eq!(doc.created_on(), date("2024-01-15"));
        assert_eq!(doc.last_modified_on(), date("2024-01-15"));
    }

    #[test]
    fn create_rejects_empty_goal() {
        let result = Document::create(
            Priority::P1,
            slug("auth-flow"),
            "dana",
            "   ",
            MarkdownBody::default(),
            date("2024-01-15"),
        );
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn create_rejects_multiline_goal() {
        let result = Document::create(
            Priority::P1,
            slug("rollout"),
            "dana",
            "Ship the rollout\nStatus: COMPLETED",
            MarkdownBody::default(),
            date("2024-03-01"),
        );
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn create_rejects_multiline_author() {
        let result = Document::create(
            Priority::P1,
            slug("rollout"),
            "dana\nAuthor: lee",
            "Ship the rollout",
            MarkdownBody::default(),
            date("2024-03-01"),
        );
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn file_name_appends_markdown_extension() {
        assert_eq!(inbox_doc().file_name(), "P1-2024-01-15-auth-flow.md");
    }

    #[test]
    fn new_rejects_done_marker_on_open_document() {
        let name = DocumentName::parse("DONE-2024-01-20-auth-flow").unwrap();
        let result = Document::new(
            name,
            DocumentStatus::Inbox,
            "dana",
            "goal",
            date("2024-01-15"),
            date("2024-01-20"),
            MarkdownBody::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_rejects_completed_without_done_marker() {
        let name = DocumentName::parse("P1-2024-01-15-auth-flow").unwrap();
        let result = Document::new(
            name,
            DocumentStatus::Completed,
            "dana",
            "goal",
            date("2024-01-15"),
            date("2024-01-20"),
            MarkdownBody::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_rejects_completion_before_creation() {
        let name = DocumentName::parse("DONE-2024-01-10-auth-flow").unwrap();
        let result = Document::new(
            name,
            DocumentStatus::Completed,
            "dana",
            "goal",
            date("2024-01-15"),
            date("2024-01-15"),
            MarkdownBody::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_rejects_name_date_mismatch_for_open_document() {
        let name = DocumentName::parse("P1-2024-01-10-auth-flow").unwrap();
        let result = Document::new(
            name,
            DocumentStatus::Inbox,
            "dana",
            "goal",
            date("2024-01-15"),
            date("2024-01-15"),
            MarkdownBody::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_rejects_last_modified_before_creation() {
        let name = DocumentName::parse("P1-2024-01-15-auth-flow").unwrap();
        let result = Document::new(
            name,
            DocumentStatus::Inbox,
            "dana",
            "goal",
            date("2024-01-15"),
            date("2024-01-10"),
            MarkdownBody::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_accepts_completed_document() {
        let name = DocumentName::parse("DONE-2024-01-20-auth-flow").unwrap();
        let doc = Document::new(
            name,
            DocumentStatus::Completed,
            "dana",
            "goal",
            date("2024-01-15"),
            date("2024-01-20"),
            MarkdownBody::default(),
        )
        .unwrap();
        assert_eq!(doc.status(), DocumentStatus::Completed);
    }

    // Transition tests

    #[test]
    fn start_updates_status_and_modified_date_only() {
        let doc = inbox_doc();
        let started = doc
            .transition_to(DocumentStatus::InProgress, date("2024-01-18"))
            .unwrap();

        assert_eq!(started.status(), DocumentStatus::InProgress);
        assert_eq!(started.last_modified_on(), date("2024-01-18"));
        assert_eq!(started.name(), doc.name());
        assert_eq!(started.created_on(), doc.created_on());
    }

    #[test]
    fn complete_rewrites_name_with_done_marker() {
        let doc = inbox_doc();
        let completed = doc
            .transition_to(DocumentStatus::Completed, date("2024-02-01"))
            .unwrap();

        assert_eq!(completed.status(), DocumentStatus::Completed);
        assert_eq!(completed.name().to_string(), "DONE-2024-02-01-auth-flow");
        assert_eq!(completed.last_modified_on(), date("2024-02-01"));
        assert_eq!(completed.created_on(), date("2024-01-15"));
    }

    #[test]
    fn complete_from_in_progress_is_legal() {
        let doc = inbox_doc();
        let started = doc
            .transition_to(DocumentStatus::InProgress, date("2024-01-18"))
            .unwrap();
        let completed = started
            .transition_to(DocumentStatus::Completed, date("2024-01-25"))
            .unwrap();
        assert!(completed.name().is_done());
    }

    #[test]
    fn shelve_keeps_priority_name() {
        let doc = inbox_doc();
        let shelved = doc
            .transition_to(DocumentStatus::Misc, date("2024-01-20"))
            .unwrap();
        assert_eq!(shelved.status(), DocumentStatus::Misc);
        assert_eq!(shelved.name().to_string(), "P1-2024-01-15-auth-flow");
    }

    #[test]
    fn in_progress_cannot_return_to_inbox() {
        let doc = inbox_doc();
        let started = doc
            .transition_to(DocumentStatus::InProgress, date("2024-01-18"))
            .unwrap();
        let result = started.transition_to(DocumentStatus::Inbox, date("2024-01-19"));
        assert!(matches!(result, Err(TransitionError::Illegal { .. })));
    }

    #[test]
    fn completed_rejects_every_target() {
        let completed = inbox_doc()
            .transition_to(DocumentStatus::Completed, date("2024-02-01"))
            .unwrap();
        for target in DocumentStatus::ALL {
            let result = completed.transition_to(target, date("2024-02-02"));
            assert!(matches!(result, Err(TransitionError::Illegal { .. })));
        }
    }

    #[test]
    fn misc_rejects_every_target() {
        let shelved = inbox_doc()
            .transition_to(DocumentStatus::Misc, date("2024-01-20"))
            .unwrap();
        for target in DocumentStatus::ALL {
            let result = shelved.transition_to(target, date("2024-01-21"));
            assert!(matches!(result, Err(TransitionError::Illegal { .. })));
        }
    }

    #[test]
    fn transition_preserves_metadata_and_body() {
        let doc = inbox_doc();
        let moved = doc
            .transition_to(DocumentStatus::InProgress, date("2024-01-18"))
            .unwrap();
        assert_eq!(moved.author(), doc.author());
        assert_eq!(moved.goal(), doc.goal());
        assert_eq!(moved.body(), doc.body());
    }

    #[test]
    fn transition_result_satisfies_construction_invariants() {
        let doc = inbox_doc();
        let completed = doc
            .transition_to(DocumentStatus::Completed, date("2024-02-01"))
            .unwrap();
        // reassembling from parts must accept what a transition produced
        let rebuilt = Document::new(
            completed.name().clone(),
            completed.status(),
            completed.author(),
            completed.goal().as_str(),
            completed.created_on(),
            completed.last_modified_on(),
            completed.body().clone(),
        );
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn days_idle_counts_from_last_modification() {
        let doc = inbox_doc();
        assert_eq!(doc.days_idle(date("2024-01-23")), 8);
        assert_eq!(doc.days_idle(date("2024-01-15")), 0);
    }
}
