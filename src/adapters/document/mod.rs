//! Document adapters - The stored-file format.
//!
//! - `HeaderCodec` - Renders and parses the metadata header + body layout
//!   used by the folder store

mod header;

pub use header::{HeaderCodec, HeaderError};
