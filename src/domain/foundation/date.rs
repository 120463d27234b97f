//! Calendar date value object.
//!
//! The lifecycle contract works in whole calendar dates (`YYYY-MM-DD`);
//! no time component is stored anywhere.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Immutable calendar date, rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocDate(NaiveDate);

impl DocDate {
    /// Creates a date from a NaiveDate.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Creates a date from year, month, day.
    ///
    /// Returns an error for out-of-range components (e.g. month 13).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "date",
                    format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day),
                )
            })
    }

    /// Parses a strict `YYYY-MM-DD` string (zero-padded, no extras).
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let parsed = NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| {
            ValidationError::invalid_format("date", format!("expected YYYY-MM-DD, got '{}'", s))
        })?;
        // chrono accepts unpadded components; round-trip to enforce padding
        if parsed.format(DATE_FORMAT).to_string() != s {
            return Err(ValidationError::invalid_format(
                "date",
                format!("expected zero-padded YYYY-MM-DD, got '{}'", s),
            ));
        }
        Ok(Self(parsed))
    }

    /// Returns the inner NaiveDate.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Checks if this date is before another.
    pub fn is_before(&self, other: &DocDate) -> bool {
        self.0 < other.0
    }

    /// Checks if this date is after another.
    pub fn is_after(&self, other: &DocDate) -> bool {
        self.0 > other.0
    }

    /// Returns the number of whole days from `earlier` to this date.
    ///
    /// Negative if `earlier` is actually later.
    pub fn days_since(&self, earlier: &DocDate) -> i64 {
        (self.0 - earlier.0).num_days()
    }

    /// Creates a new date the specified number of days later.
    pub fn plus_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Creates a new date the specified number of days earlier.
    pub fn minus_days(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }
}

impl fmt::Display for DocDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for DocDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocDate::parse(s)
    }
}
