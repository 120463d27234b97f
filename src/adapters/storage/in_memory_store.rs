//! In-Memory Document Store Adapter
//!
//! Keeps the whole working set in a HashMap keyed by document name.
//! Useful for testing and development. Data is lost when the process exits.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::document::{Document, DocumentName};
use crate::domain::foundation::DocumentStatus;
use crate::ports::{DocumentStore, DocumentStoreError};

/// In-memory store for managed documents
///
/// Thread-safe via RwLock. Suitable for:
/// - Unit and integration testing
/// - Local development
/// - Dry-run triage over a snapshot that should not touch disk
///
/// Listings are returned in name order so snapshots are stable across runs.
#[derive(Debug, Clone)]
pub struct InMemoryDocumentStore {
    documents: Arc<RwLock<HashMap<DocumentName, Document>>>,
}

impl InMemoryDocumentStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored documents
    pub async fn clear(&self) {
        self.documents.write().await.clear();
    }

    /// Get count of stored documents (for testing)
    pub async fn document_count(&self) -> usize {
        self.documents.read().await.len()
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn list(&self, status: DocumentStatus) -> Result<Vec<Document>, DocumentStoreError> {
        let documents = self.documents.read().await;
        let mut matching: Vec<Document> = documents
            .values()
            .filter(|doc| doc.status() == status)
            .cloned()
            .collect();
        matching.sort_by_key(|doc| doc.name().to_string());
        Ok(matching)
    }

    async fn list_all(&self) -> Result<Vec<Document>, DocumentStoreError> {
        let documents = self.documents.read().await;
        let mut all: Vec<Document> = documents.values().cloned().collect();
        all.sort_by_key(|doc| doc.name().to_string());
        Ok(all)
    }

    async fn fetch(&self, name: &DocumentName) -> Result<Option<Document>, DocumentStoreError> {
        let documents = self.documents.read().await;
        Ok(documents.get(name).cloned())
    }

    async fn insert(&self, document: &Document) -> Result<(), DocumentStoreError> {
        let mut documents = self.documents.write().await;

        if documents.contains_key(document.name()) {
            return Err(DocumentStoreError::Duplicate(document.name().clone()));
        }

        documents.insert(document.name().clone(), document.clone());
        Ok(())
    }

    async fn relocate(
        &self,
        previous_name: &DocumentName,
        document: &Document,
    ) -> Result<(), DocumentStoreError> {
        let mut documents = self.documents.write().await;

        if !documents.contains_key(previous_name) {
            return Err(DocumentStoreError::NotFound(previous_name.clone()));
        }
        // A rename must not overwrite a different document already
        // holding the target name.
        if document.name() != previous_name && documents.contains_key(document.name()) {
            return Err(DocumentStoreError::Duplicate(document.name().clone()));
        }

        documents.remove(previous_name);
        documents.insert(document.name().clone(), document.clone());
        Ok(())
    }

    async fn exists(&self, name: &DocumentName) -> Result<bool, DocumentStoreError> {
        let documents = self.documents.read().await;
        Ok(documents.contains_key(name))
    }
}
