//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Document store implementations (in-memory, folder-of-files)
//! - `document` - The stored-file header codec
//! - `clock` - System and fixed calendar clocks

pub mod clock;
pub mod document;
pub mod storage;

pub use clock::{FixedClock, SystemClock};
pub use document::{HeaderCodec, HeaderError};
pub use storage::{FolderDocumentStore, InMemoryDocumentStore};
