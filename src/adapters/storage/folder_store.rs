//! Folder-based Document Store Adapter
//!
//! Stores each managed document as a markdown file under its status folder:
//!
//! ```text
//! <root>/
//!   1-INBOX/
//!   2-IN_PROGRESS/
//!   3-COMPLETED/
//!   4-MISC/
//! ```
//!
//! Folders are numbered so directory listings sort in lifecycle order.
//! Files are `<name>.md` with the metadata header rendered by `HeaderCodec`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::adapters::document::HeaderCodec;
use crate::domain::document::{Document, DocumentName};
use crate::domain::foundation::DocumentStatus;
use crate::ports::{DocumentStore, DocumentStoreError};

/// Folder-of-files storage for managed documents
///
/// A document's folder always matches its status; `relocate` physically
/// moves the file and rewrites the header. Missing status folders are
/// treated as empty on read and created on demand for writes.
///
/// Listings are returned in name order so snapshots are stable across runs.
#[derive(Debug, Clone)]
pub struct FolderDocumentStore {
    root: PathBuf,
    codec: HeaderCodec,
}

impl FolderDocumentStore {
    /// Create a new folder store rooted at the workspace directory
    ///
    /// # Arguments
    /// * `root` - The directory holding the four status folders
    ///
    /// # Example
    /// ```ignore
    /// let store = FolderDocumentStore::new("./workspace");
    /// ```
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            codec: HeaderCodec::new(),
        }
    }

    /// Get the folder path for a status
    fn status_dir(&self, status: DocumentStatus) -> PathBuf {
        self.root.join(status.folder_name())
    }

    /// Get the file path a document with this name would occupy in a folder
    fn document_path(&self, status: DocumentStatus, name: &DocumentName) -> PathBuf {
        self.status_dir(status).join(format!("{}.md", name))
    }

    /// Ensure directory exists
    async fn ensure_dir(&self, path: &Path) -> Result<(), DocumentStoreError> {
        fs::create_dir_all(path)
            .await
            .map_err(|e| DocumentStoreError::Io(e.to_string()))
    }

    /// Find the path currently occupied by a name, searching all folders
    fn find_path(&self, name: &DocumentName) -> Option<(DocumentStatus, PathBuf)> {
        for status in DocumentStatus::ALL {
            let path = self.document_path(status, name);
            if path.exists() {
                return Some((status, path));
            }
        }
        None
    }

    /// Read and decode one stored file, checking it belongs in its folder
    async fn read_document(
        &self,
        folder: DocumentStatus,
        path: &Path,
    ) -> Result<Document, DocumentStoreError> {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| DocumentStoreError::Io(e.to_string()))?;

        let document =
            self.codec
                .decode(&stem, &content)
                .map_err(|e| DocumentStoreError::Malformed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;

        if document.status() != folder {
            return Err(DocumentStoreError::Malformed {
                path: path.display().to_string(),
                reason: format!(
                    "header status {} does not match folder {}",
                    document.status().header_label(),
                    folder.folder_name()
                ),
            });
        }

        Ok(document)
    }

    /// Write a document into its status folder
    async fn write_document(&self, document: &Document) -> Result<PathBuf, DocumentStoreError> {
        let dir = self.status_dir(document.status());
        self.ensure_dir(&dir).await?;

        let path = dir.join(document.file_name());
        let content = self.codec.encode(document);

        fs::write(&path, content)
            .await
            .map_err(|e| DocumentStoreError::Io(e.to_string()))?;

        Ok(path)
    }
}

#[async_trait]
impl DocumentStore for FolderDocumentStore {
    async fn list(&self, status: DocumentStatus) -> Result<Vec<Document>, DocumentStoreError> {
        let dir = self.status_dir(status);

        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            // A folder nobody has written to yet is just empty.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(DocumentStoreError::Io(e.to_string())),
        };

        let mut documents = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| DocumentStoreError::Io(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }
            documents.push(self.read_document(status, &path).await?);
        }

        documents.sort_by_key(|doc| doc.name().to_string());
        Ok(documents)
    }

    async fn list_all(&self) -> Result<Vec<Document>, DocumentStoreError> {
        let mut all = Vec::new();
        for status in DocumentStatus::ALL {
            all.extend(self.list(status).await?);
        }
        Ok(all)
    }

    async fn fetch(&self, name: &DocumentName) -> Result<Option<Document>, DocumentStoreError> {
        match self.find_path(name) {
            Some((folder, path)) => Ok(Some(self.read_document(folder, &path).await?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, document: &Document) -> Result<(), DocumentStoreError> {
        if self.find_path(document.name()).is_some() {
            return Err(DocumentStoreError::Duplicate(document.name().clone()));
        }

        let path = self.write_document(document).await?;
        tracing::debug!(path = %path.display(), "stored new document");
        Ok(())
    }

    async fn relocate(
        &self,
        previous_name: &DocumentName,
        document: &Document,
    ) -> Result<(), DocumentStoreError> {
        let (_, previous_path) = self
            .find_path(previous_name)
            .ok_or_else(|| DocumentStoreError::NotFound(previous_name.clone()))?;

        // A rename must not overwrite a different document already
        // holding the target name.
        if document.name() != previous_name && self.find_path(document.name()).is_some() {
            return Err(DocumentStoreError::Duplicate(document.name().clone()));
        }

        // Write the destination before removing the source so a failure
        // between the two leaves a copy rather than nothing.
        let new_path = self.write_document(document).await?;

        if previous_path != new_path {
            fs::remove_file(&previous_path)
                .await
                .map_err(|e| DocumentStoreError::Io(e.to_string()))?;
        }

        tracing::debug!(
            from = %previous_path.display(),
            to = %new_path.display(),
            "relocated document"
        );
        Ok(())
    }

    async fn exists(&self, name: &DocumentName) -> Result<bool, DocumentStoreError> {
        Ok(self.find_path(name).is_some())
    }
}
