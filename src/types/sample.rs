use chrono::{DateTime, Utc};

/// One retained observation: a strictly positive value at a timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp_ms: i64,
    pub value: f64,
}

/// One row of an averaged series, as collected from a
/// [`crate::SeriesFrame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub datetime: DateTime<Utc>,
    pub value: f64,
}
