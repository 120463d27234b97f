//! Document module - The managed-document aggregate and its value objects.

mod aggregate;
mod body;
mod name;

pub use aggregate::Document;
pub use body::MarkdownBody;
pub use name::{DocumentName, NameMarker};
