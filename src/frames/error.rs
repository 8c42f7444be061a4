use crate::timestamps::error::TimeError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("Failed processing DataFrame for {variable}: {source}")]
    Polars {
        variable: String,
        #[source]
        source: PolarsError,
    },

    #[error("Invalid timestamp in series")]
    Time(#[from] TimeError),
}
