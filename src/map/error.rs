use crate::timestamps::error::TimeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("Observation catalog is empty")]
    EmptyCatalog,

    #[error("Timestamp {0} is not one of the slider options")]
    UnknownTimestamp(i64),

    #[error("Slider index {index} is out of range for {len} options")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Layer opacity must be within 0.0..=1.0, got {0}")]
    InvalidOpacity(f64),

    #[error("Failed to format slider label")]
    Time(#[from] TimeError),
}
