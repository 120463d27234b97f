//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types
//! that form the vocabulary of the docflow domain.

mod date;
mod errors;
mod priority;
mod state_machine;
mod status;
mod text;

pub use date::DocDate;
pub use errors::{ErrorCode, TransitionError, ValidationError};
pub use priority::Priority;
pub use state_machine::StateMachine;
pub use status::DocumentStatus;
pub use text::{Author, Goal, Slug};
