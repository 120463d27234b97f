//! Document command and query handlers.

mod complete_document;
mod create_document;
mod errors;
mod shelve_document;
mod start_document;
mod triage_report;

pub use complete_document::{
    CompleteDocumentCommand, CompleteDocumentHandler, CompleteDocumentResult,
};
pub use create_document::{CreateDocumentCommand, CreateDocumentHandler, CreateDocumentResult};
pub use errors::DocumentError;
pub use shelve_document::{ShelveDocumentCommand, ShelveDocumentHandler, ShelveDocumentResult};
pub use start_document::{StartDocumentCommand, StartDocumentHandler, StartDocumentResult};
pub use triage_report::{StatusCounts, TriageReport, TriageReportHandler, TriageSuggestion};
