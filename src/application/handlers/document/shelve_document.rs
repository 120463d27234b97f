//! ShelveDocumentHandler - Command handler for diverting documents to MISC.

use std::sync::Arc;
use tracing::info;

use crate::domain::document::{Document, DocumentName};
use crate::domain::foundation::DocumentStatus;
use crate::ports::{Clock, DocumentStore};

use super::DocumentError;

/// Command to move a document into MISC.
#[derive(Debug, Clone)]
pub struct ShelveDocumentCommand {
    pub name: DocumentName,
}

/// Result of successfully shelving a document.
#[derive(Debug, Clone)]
pub struct ShelveDocumentResult {
    pub document: Document,
}

/// Handler for shelving documents.
///
/// MISC is terminal: a shelved document keeps its name but never moves
/// again.
pub struct ShelveDocumentHandler {
    store: Arc<dyn DocumentStore>,
    clock: Arc<dyn Clock>,
}

impl ShelveDocumentHandler {
    pub fn new(store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn handle(
        &self,
        cmd: ShelveDocumentCommand,
    ) -> Result<ShelveDocumentResult, DocumentError> {
        // 1. Load the document
        let document = self
            .store
            .fetch(&cmd.name)
            .await?
            .ok_or_else(|| DocumentError::NotFound(cmd.name.clone()))?;

        // 2. Apply the transition
        let shelved = document.transition_to(DocumentStatus::Misc, self.clock.today())?;

        // 3. Relocate into the MISC folder
        self.store.relocate(&cmd.name, &shelved).await?;

        info!(name = %shelved.name(), "Shelved document");

        Ok(ShelveDocumentResult { document: shelved })
    }
}
