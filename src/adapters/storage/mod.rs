//! Storage Adapters
//!
//! Implementations of the DocumentStore port for keeping the working set.
//!
//! ## Available Adapters
//!
//! - **FolderDocumentStore** - Stores documents as markdown files in status folders
//! - **InMemoryDocumentStore** - Stores documents in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FolderDocumentStore, InMemoryDocumentStore};
//!
//! // Production: folder-of-files storage
//! let store = FolderDocumentStore::new("./workspace");
//!
//! // Testing: in-memory storage
//! let store = InMemoryDocumentStore::new();
//! ```

mod folder_store;
mod in_memory_store;

pub use folder_store::FolderDocumentStore;
pub use in_memory_store::InMemoryDocumentStore;
