//! Clock port.
//!
//! The rule core never reads the system clock directly. Handlers inject
//! this port so staleness arithmetic and completion dates stay
//! deterministic under test.

use crate::domain::foundation::DocDate;

/// Port for supplying the current calendar date.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> DocDate;
}
