//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DocumentStore` - Storage collaborator: list folders, store and
//!   relocate documents
//! - `Clock` - Supplies today's date to the rule core

mod clock;
mod document_store;

pub use clock::Clock;
pub use document_store::{DocumentStore, DocumentStoreError};
