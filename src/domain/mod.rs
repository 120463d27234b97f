//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, enums, errors)
//! - `document` - The managed-document aggregate and its value objects
//! - `lifecycle` - Pure rule services: transition validation, capacity
//!   monitoring, triage suggestions

pub mod document;
pub mod foundation;
pub mod lifecycle;
