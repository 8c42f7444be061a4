use crate::timestamps::error::TimeError;
use crate::timestamps::to_epoch_millis;
use std::fmt;
use std::fmt::{Display, Formatter};

/// An inclusive `[start, end]` window in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl TimeRange {
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    /// Parses both ends with the same `strftime` pattern, as UTC.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::Parse`] if either end does not match `pattern`.
    pub fn parse(start: &str, end: &str, pattern: &str) -> Result<Self, TimeError> {
        Ok(Self {
            start_ms: to_epoch_millis(start, pattern)?,
            end_ms: to_epoch_millis(end, pattern)?,
        })
    }

    /// Value of the `time` query parameter: `"<start>,<end>"`.
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.start_ms, self.end_ms)
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start_ms, self.end_ms)
    }
}
