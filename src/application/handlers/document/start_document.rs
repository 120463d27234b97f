//! StartDocumentHandler - Command handler for starting work on a document.

use std::sync::Arc;
use tracing::info;

use crate::domain::document::{Document, DocumentName};
use crate::domain::foundation::DocumentStatus;
use crate::domain::lifecycle::{LifecyclePolicy, LifecycleValidator};
use crate::ports::{Clock, DocumentStore};

use super::DocumentError;

/// Command to move a document into IN_PROGRESS.
#[derive(Debug, Clone)]
pub struct StartDocumentCommand {
    pub name: DocumentName,
}

/// Result of successfully starting a document.
#[derive(Debug, Clone)]
pub struct StartDocumentResult {
    pub document: Document,
}

/// Handler for starting work on a document.
///
/// Applies the write-guard: entry into IN_PROGRESS is refused while the
/// active set is already at the policy cap.
pub struct StartDocumentHandler {
    store: Arc<dyn DocumentStore>,
    clock: Arc<dyn Clock>,
    validator: LifecycleValidator,
}

impl StartDocumentHandler {
    pub fn new(store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>, policy: LifecyclePolicy) -> Self {
        Self {
            store,
            clock,
            validator: LifecycleValidator::new(policy),
        }
    }

    pub async fn handle(
        &self,
        cmd: StartDocumentCommand,
    ) -> Result<StartDocumentResult, DocumentError> {
        // 1. Load the document
        let document = self
            .store
            .fetch(&cmd.name)
            .await?
            .ok_or_else(|| DocumentError::NotFound(cmd.name.clone()))?;

        // 2. Snapshot the active set for the write-guard
        let active = self.store.list(DocumentStatus::InProgress).await?;

        // 3. Validate and apply the transition
        let started = self.validator.validate_transition(
            &document,
            DocumentStatus::InProgress,
            active.len(),
            self.clock.today(),
        )?;

        // 4. Relocate in storage
        self.store.relocate(&cmd.name, &started).await?;

        info!(
            name = %started.name(),
            active = active.len() + 1,
            "Started document"
        );

        Ok(StartDocumentResult { document: started })
    }
}
