//! Clock adapters.
//!
//! `SystemClock` reads the host's current date. `FixedClock` pins the date
//! for tests and replays.

use chrono::Utc;

use crate::domain::foundation::DocDate;
use crate::ports::Clock;

/// Clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn today(&self) -> DocDate {
        DocDate::new(Utc::now().date_naive())
    }
}

/// Clock that always reports the same date.
///
/// Useful for testing staleness windows and transition timestamps
/// without depending on the wall calendar.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: DocDate,
}

impl FixedClock {
    pub fn new(today: DocDate) -> Self {
        Self { today }
    }

    /// Moves the pinned date forward by `days`.
    pub fn advanced_by(&self, days: i64) -> Self {
        Self {
            today: self.today.plus_days(days),
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> DocDate {
        self.today
    }
}
