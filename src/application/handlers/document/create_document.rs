//! CreateDocumentHandler - Command handler for creating documents.

use std::sync::Arc;
use tracing::info;

use crate::domain::document::{Document, MarkdownBody};
use crate::domain::foundation::{Priority, Slug};
use crate::ports::{Clock, DocumentStore};

use super::DocumentError;

/// Command to create a new document in the inbox.
#[derive(Debug, Clone)]
pub struct CreateDocumentCommand {
    pub priority: Priority,
    pub slug: String,
    pub author: String,
    pub goal: String,
    pub body: String,
}

/// Result of successful document creation.
#[derive(Debug, Clone)]
pub struct CreateDocumentResult {
    pub document: Document,
}

/// Handler for creating documents.
///
/// New documents always land in INBOX, named for today's date.
pub struct CreateDocumentHandler {
    store: Arc<dyn DocumentStore>,
    clock: Arc<dyn Clock>,
}

impl CreateDocumentHandler {
    pub fn new(store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn handle(
        &self,
        cmd: CreateDocumentCommand,
    ) -> Result<CreateDocumentResult, DocumentError> {
        // 1. Validate the slug
        let slug = Slug::new(cmd.slug)?;

        // 2. Assemble the document, dated today
        let document = Document::create(
            cmd.priority,
            slug,
            cmd.author,
            cmd.goal,
            MarkdownBody::new(cmd.body),
            self.clock.today(),
        )?;

        // 3. Store it; a name collision is rejected here
        self.store.insert(&document).await?;

        info!(name = %document.name(), "Created document");

        Ok(CreateDocumentResult { document })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedClock, InMemoryDocumentStore};
    use crate::domain::foundation::{DocDate, DocumentStatus};

    fn fixed_clock(s: &str) -> Arc<FixedClock> {
        Arc::new(FixedClock::new(s.parse::<DocDate>().unwrap()))
    }

    fn test_command(slug: &str) -> CreateDocumentCommand {
        CreateDocumentCommand {
            priority: Priority::P2,
            slug: slug.to_string(),
            author: "Sam Rivera".to_string(),
            goal: "Ship the login rework".to_string(),
            body: "\n## Notes\n".to_string(),
        }
    }

    #[tokio::test]
    async fn creates_document_in_inbox() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let handler = CreateDocumentHandler::new(store.clone(), fixed_clock("2024-01-15"));

        let result = handler.handle(test_command("auth-flow")).await.unwrap();

        assert_eq!(result.document.status(), DocumentStatus::Inbox);
        assert_eq!(
            result.document.name().to_string(),
            "P2-2024-01-15-auth-flow"
        );
        assert!(store.exists(result.document.name()).await.unwrap());
    }

    #[tokio::test]
    async fn rejects_duplicate_name() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let handler = CreateDocumentHandler::new(store, fixed_clock("2024-01-15"));

        handler.handle(test_command("auth-flow")).await.unwrap();
        let result = handler.handle(test_command("auth-flow")).await;

        assert!(matches!(result, Err(DocumentError::DuplicateName(_))));
    }

    #[tokio::test]
    async fn same_slug_on_a_new_day_is_a_new_document() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let monday = CreateDocumentHandler::new(store.clone(), fixed_clock("2024-01-15"));
        let tuesday = CreateDocumentHandler::new(store.clone(), fixed_clock("2024-01-16"));

        monday.handle(test_command("auth-flow")).await.unwrap();
        let result = tuesday.handle(test_command("auth-flow")).await.unwrap();

        assert_eq!(
            result.document.name().to_string(),
            "P2-2024-01-16-auth-flow"
        );
        assert_eq!(store.document_count().await, 2);
    }

    #[tokio::test]
    async fn rejects_invalid_slug() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let handler = CreateDocumentHandler::new(store, fixed_clock("2024-01-15"));

        let result = handler.handle(test_command("Not A Slug")).await;

        assert!(matches!(result, Err(DocumentError::Validation(_))));
    }

    #[tokio::test]
    async fn rejects_empty_goal() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let handler = CreateDocumentHandler::new(store, fixed_clock("2024-01-15"));

        let mut cmd = test_command("auth-flow");
        cmd.goal = "   ".to_string();
        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(DocumentError::Validation(_))));
    }

    #[tokio::test]
    async fn rejects_multiline_goal_before_writing() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let handler = CreateDocumentHandler::new(store.clone(), fixed_clock("2024-03-01"));

        let mut cmd = test_command("rollout");
        cmd.goal = "Ship the rollout\nStatus: COMPLETED".to_string();
        let result = handler.handle(cmd).await;

        // Rejected up front: a stored copy would not re-parse.
        assert!(matches!(result, Err(DocumentError::Validation(_))));
        assert_eq!(store.document_count().await, 0);
    }

    #[tokio::test]
    async fn rejects_multiline_author_before_writing() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let handler = CreateDocumentHandler::new(store.clone(), fixed_clock("2024-03-01"));

        let mut cmd = test_command("rollout");
        cmd.author = "Sam\nStatus: COMPLETED".to_string();
        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(DocumentError::Validation(_))));
        assert_eq!(store.document_count().await, 0);
    }
}
