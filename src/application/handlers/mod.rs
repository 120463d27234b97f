//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod document;

pub use document::{
    // Commands and Results
    CompleteDocumentCommand,
    CompleteDocumentResult,
    CreateDocumentCommand,
    CreateDocumentResult,
    ShelveDocumentCommand,
    ShelveDocumentResult,
    StartDocumentCommand,
    StartDocumentResult,
    // Handlers
    CompleteDocumentHandler,
    CreateDocumentHandler,
    ShelveDocumentHandler,
    StartDocumentHandler,
    TriageReportHandler,
    // Report projections
    StatusCounts,
    TriageReport,
    TriageSuggestion,
    // Errors
    DocumentError,
};
