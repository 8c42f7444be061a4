use crate::frames::error::FrameError;
use crate::frames::sample_frame::DATETIME_COLUMN;
use crate::timestamps::datetime_from_epoch_millis;
use crate::types::sample::SeriesPoint;
use polars::prelude::{DataFrame, LazyFrame};

/// The per-timestamp mean of one variable, ordered by time.
///
/// Obtained from [`crate::SampleFrame::mean_by_timestamp`]. Columns are
/// `datetime` and `<variable>`.
#[derive(Clone)]
pub struct SeriesFrame {
    /// The underlying Polars LazyFrame.
    pub frame: LazyFrame,
    variable: String,
}

impl SeriesFrame {
    pub fn new(frame: LazyFrame, variable: &str) -> Self {
        Self {
            frame,
            variable: variable.to_string(),
        }
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn collect(&self) -> Result<DataFrame, FrameError> {
        self.frame
            .clone()
            .collect()
            .map_err(|source| self.polars_error(source))
    }

    /// Collects the series into typed rows.
    ///
    /// Rows with a null time or mean are skipped; neither occurs for frames
    /// built by [`crate::SampleFrame`].
    pub fn collect_series(&self) -> Result<Vec<SeriesPoint>, FrameError> {
        let df = self.collect()?;
        let datetimes = df
            .column(DATETIME_COLUMN)
            .and_then(|c| c.datetime())
            .map_err(|source| self.polars_error(source))?;
        let values = df
            .column(&self.variable)
            .and_then(|c| c.f64())
            .map_err(|source| self.polars_error(source))?;

        let mut points = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            let (Some(ms), Some(value)) = (datetimes.get(idx), values.get(idx)) else {
                continue;
            };
            points.push(SeriesPoint {
                datetime: datetime_from_epoch_millis(ms)?,
                value,
            });
        }
        Ok(points)
    }

    fn polars_error(&self, source: polars::error::PolarsError) -> FrameError {
        FrameError::Polars {
            variable: self.variable.clone(),
            source,
        }
    }
}
