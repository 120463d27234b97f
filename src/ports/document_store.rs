//! Document store port.
//!
//! The storage collaborator for the lifecycle core: lists status folders
//! and relocates documents between them. Implementations choose the
//! medium (in-memory map, folder of markdown files) and must serialize
//! per-document updates so a relocation is atomic from the core's point
//! of view.
//!
//! Deletion is deliberately absent from the contract: managed documents
//! are only ever relocated, never removed.

use async_trait::async_trait;

use crate::domain::document::{Document, DocumentName};
use crate::domain::foundation::DocumentStatus;

/// Errors that can occur during document storage operations
#[derive(Debug, thiserror::Error)]
pub enum DocumentStoreError {
    #[error("Document not found: {0}")]
    NotFound(DocumentName),

    #[error("Document already exists: {0}")]
    Duplicate(DocumentName),

    #[error("Malformed document file {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(String),
}

/// Port for listing, storing, and relocating managed documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Lists the documents currently in the given status folder.
    ///
    /// # Errors
    ///
    /// Returns `Malformed` if a stored file cannot be reassembled into
    /// a valid document.
    async fn list(&self, status: DocumentStatus) -> Result<Vec<Document>, DocumentStoreError>;

    /// Lists every managed document across all four status folders.
    async fn list_all(&self) -> Result<Vec<Document>, DocumentStoreError>;

    /// Fetches a single document by name.
    ///
    /// Returns `None` if nothing is stored under that name.
    async fn fetch(&self, name: &DocumentName) -> Result<Option<Document>, DocumentStoreError>;

    /// Stores a new document in its status folder.
    ///
    /// # Errors
    ///
    /// - `Duplicate` if a document with the same name already exists
    async fn insert(&self, document: &Document) -> Result<(), DocumentStoreError>;

    /// Relocates a document: removes the entry under `previous_name` and
    /// stores the updated document in its new status folder.
    ///
    /// Covers renames too: completing a document changes its name along
    /// with its folder.
    ///
    /// # Errors
    ///
    /// - `NotFound` if nothing is stored under `previous_name`
    /// - `Duplicate` if a rename would overwrite a different document
    async fn relocate(
        &self,
        previous_name: &DocumentName,
        document: &Document,
    ) -> Result<(), DocumentStoreError>;

    /// Checks whether a document exists under the given name.
    async fn exists(&self, name: &DocumentName) -> Result<bool, DocumentStoreError>;
}
