//! CompleteDocumentHandler - Command handler for completing documents.

use std::sync::Arc;
use tracing::info;

use crate::domain::document::{Document, DocumentName};
use crate::domain::foundation::DocumentStatus;
use crate::ports::{Clock, DocumentStore};

use super::DocumentError;

/// Command to move a document into COMPLETED.
#[derive(Debug, Clone)]
pub struct CompleteDocumentCommand {
    pub name: DocumentName,
}

/// Result of successfully completing a document.
///
/// Completion renames the document, so the result carries both the old
/// name and the finished document under its DONE name.
#[derive(Debug, Clone)]
pub struct CompleteDocumentResult {
    pub previous_name: DocumentName,
    pub document: Document,
}

/// Handler for completing documents.
pub struct CompleteDocumentHandler {
    store: Arc<dyn DocumentStore>,
    clock: Arc<dyn Clock>,
}

impl CompleteDocumentHandler {
    pub fn new(store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn handle(
        &self,
        cmd: CompleteDocumentCommand,
    ) -> Result<CompleteDocumentResult, DocumentError> {
        // 1. Load the document
        let document = self
            .store
            .fetch(&cmd.name)
            .await?
            .ok_or_else(|| DocumentError::NotFound(cmd.name.clone()))?;

        // 2. Apply the transition; today becomes the completion date
        let completed = document.transition_to(DocumentStatus::Completed, self.clock.today())?;

        // 3. Relocate under the DONE name
        self.store.relocate(&cmd.name, &completed).await?;

        info!(
            previous = %cmd.name,
            name = %completed.name(),
            "Completed document"
        );

        Ok(CompleteDocumentResult {
            previous_name: cmd.name,
            document: completed,
        })
    }
}
