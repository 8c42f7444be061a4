//! Contains the `SampleFrame` structure: the filtered samples of one variable as
//! a polars `LazyFrame`.

use crate::frames::error::FrameError;
use crate::frames::series_frame::SeriesFrame;
use crate::samples::extractor::{ExtractedSamples, STD_TIME_FIELD};
use crate::types::sample::Sample;
use polars::prelude::*;

/// Name of the calendar column derived from [`STD_TIME_FIELD`].
pub const DATETIME_COLUMN: &str = "datetime";

/// A wrapper around a Polars `LazyFrame` holding one row per retained sample.
///
/// Columns:
/// * `StdTime` - raw epoch milliseconds (`Int64`),
/// * `<variable>` - the sampled value (`Float64`),
/// * `datetime` - `StdTime` as `Datetime(Milliseconds)`, timezone-naive UTC.
///
/// Several rows may share a timestamp (samples at different locations inside
/// the envelope); [`SampleFrame::mean_by_timestamp`] reduces them.
#[derive(Clone)]
pub struct SampleFrame {
    /// The underlying Polars LazyFrame.
    pub frame: LazyFrame,
    variable: String,
}

impl SampleFrame {
    /// Builds the frame for `variable` out of already filtered samples.
    ///
    /// An empty slice gives an empty frame with the same schema.
    pub fn from_samples(variable: &str, samples: &[Sample]) -> Result<Self, FrameError> {
        let timestamps: Vec<i64> = samples.iter().map(|s| s.timestamp_ms).collect();
        let values: Vec<f64> = samples.iter().map(|s| s.value).collect();

        let df = df!(
            STD_TIME_FIELD => timestamps,
            variable => values
        )
        .map_err(|source| FrameError::Polars {
            variable: variable.to_string(),
            source,
        })?;

        let frame = df.lazy().with_column(
            col(STD_TIME_FIELD)
                .cast(DataType::Datetime(TimeUnit::Milliseconds, None))
                .alias(DATETIME_COLUMN),
        );

        Ok(Self {
            frame,
            variable: variable.to_string(),
        })
    }

    pub fn from_extracted(extracted: &ExtractedSamples) -> Result<Self, FrameError> {
        Self::from_samples(&extracted.variable, &extracted.samples)
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Groups rows by exact `datetime` and averages the variable.
    ///
    /// Replicates at one timestamp are averaged, not deduplicated. The result is
    /// ordered by `datetime` ascending.
    pub fn mean_by_timestamp(&self) -> SeriesFrame {
        let variable = self.variable.as_str();
        let frame = self
            .frame
            .clone()
            .group_by([col(DATETIME_COLUMN)])
            .agg([col(variable).mean()])
            .sort([DATETIME_COLUMN], SortMultipleOptions::default());
        SeriesFrame::new(frame, variable)
    }

    pub fn collect(&self) -> Result<DataFrame, FrameError> {
        self.frame
            .clone()
            .collect()
            .map_err(|source| FrameError::Polars {
                variable: self.variable.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T1: i64 = 1_716_206_400_000;
    const T2: i64 = 1_716_210_000_000;

    fn sample(timestamp_ms: i64, value: f64) -> Sample {
        Sample {
            timestamp_ms,
            value,
        }
    }

    #[test]
    fn test_schema() -> Result<(), Box<dyn std::error::Error>> {
        let frame = SampleFrame::from_samples("NO2", &[sample(T1, 1.0)])?;
        let df = frame.collect()?;

        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, ["StdTime", "NO2", "datetime"]);
        assert!(matches!(
            df.column(DATETIME_COLUMN)?.dtype(),
            DataType::Datetime(TimeUnit::Milliseconds, None)
        ));
        assert_eq!(df.column(DATETIME_COLUMN)?.datetime()?.get(0), Some(T1));
        Ok(())
    }

    #[test]
    fn test_replicates_are_averaged() -> Result<(), Box<dyn std::error::Error>> {
        let frame = SampleFrame::from_samples("NO2", &[sample(T1, 4.0), sample(T1, 6.0)])?;
        let df = frame.mean_by_timestamp().collect()?;

        assert_eq!(df.height(), 1);
        assert_eq!(df.column("NO2")?.f64()?.get(0), Some(5.0));
        Ok(())
    }

    #[test]
    fn test_groups_are_sorted_by_time() -> Result<(), Box<dyn std::error::Error>> {
        let frame = SampleFrame::from_samples(
            "NO2",
            &[sample(T2, 10.0), sample(T1, 2.0), sample(T1, 4.0)],
        )?;
        let df = frame.mean_by_timestamp().collect()?;

        let times = df.column(DATETIME_COLUMN)?.datetime()?;
        let values = df.column("NO2")?.f64()?;
        assert_eq!(df.height(), 2);
        assert_eq!((times.get(0), values.get(0)), (Some(T1), Some(3.0)));
        assert_eq!((times.get(1), values.get(1)), (Some(T2), Some(10.0)));
        Ok(())
    }

    #[test]
    fn test_empty_samples_give_empty_table() -> Result<(), Box<dyn std::error::Error>> {
        let frame = SampleFrame::from_samples("NO2", &[])?;
        assert_eq!(frame.collect()?.height(), 0);
        assert_eq!(frame.mean_by_timestamp().collect()?.height(), 0);
        Ok(())
    }
}
