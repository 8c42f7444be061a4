//! Line-and-marker chart of an averaged series.
//!
//! Labels and the chart table are always available; drawing needs the
//! `plotting` feature (plotlars).

use crate::frames::error::FrameError;
use crate::timestamps::ISO_UTC_PATTERN;
use crate::types::sample::SeriesPoint;
use polars::prelude::*;

/// Column holding the formatted x values of a chart table.
pub const TIME_LABEL_COLUMN: &str = "time";

/// Title and axis labels, derived from the variable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLabels {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
}

impl ChartLabels {
    /// # Examples
    ///
    /// ```
    /// use imagery_series::ChartLabels;
    ///
    /// let labels = ChartLabels::for_variable("NO2");
    /// assert_eq!(labels.title, "Average NO2 Concentration Over Time");
    /// assert_eq!(labels.y_title, "NO2 Concentration");
    /// ```
    pub fn for_variable(variable: &str) -> Self {
        Self {
            title: format!("Average {variable} Concentration Over Time"),
            x_title: "Time".to_string(),
            y_title: format!("{variable} Concentration"),
        }
    }
}

/// Table handed to the plotting backend: `time` as ISO UTC text, `<variable>`.
pub fn chart_frame(variable: &str, points: &[SeriesPoint]) -> Result<DataFrame, FrameError> {
    let times: Vec<String> = points
        .iter()
        .map(|p| p.datetime.format(ISO_UTC_PATTERN).to_string())
        .collect();
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();

    df!(
        TIME_LABEL_COLUMN => times,
        variable => values
    )
    .map_err(|source| FrameError::Polars {
        variable: variable.to_string(),
        source,
    })
}

#[cfg(feature = "plotting")]
pub use plotting::SeriesChart;

#[cfg(feature = "plotting")]
mod plotting {
    use super::{chart_frame, ChartLabels, TIME_LABEL_COLUMN};
    use crate::frames::error::FrameError;
    use crate::types::sample::SeriesPoint;
    use plotlars::{Line, Plot, Rgb, Shape, Text, TimeSeriesPlot};

    /// A rendered time-series chart. An empty series gives an empty chart.
    pub struct SeriesChart {
        plot: TimeSeriesPlot,
    }

    impl SeriesChart {
        pub fn new(variable: &str, points: &[SeriesPoint]) -> Result<Self, FrameError> {
            let data = chart_frame(variable, points)?;
            let labels = ChartLabels::for_variable(variable);

            let plot = TimeSeriesPlot::builder()
                .data(&data)
                .x(TIME_LABEL_COLUMN)
                .y(variable)
                .size(8)
                .colors(vec![Rgb(69, 157, 230)])
                .lines(vec![Line::Solid])
                .with_shape(true)
                .shapes(vec![Shape::Circle])
                .plot_title(Text::from(labels.title.as_str()).size(18))
                .x_title(Text::from(labels.x_title.as_str()))
                .y_title(Text::from(labels.y_title.as_str()))
                .build();

            Ok(Self { plot })
        }

        /// Opens the chart in the default browser.
        pub fn show(&self) {
            self.plot.plot();
        }

        /// Writes a standalone HTML page with the chart.
        pub fn write_html(&self, path: &str) {
            self.plot.write_html(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_labels_follow_variable() {
        let labels = ChartLabels::for_variable("vertical_column_troposphere");
        assert_eq!(
            labels.title,
            "Average vertical_column_troposphere Concentration Over Time"
        );
        assert_eq!(labels.x_title, "Time");
        assert_eq!(labels.y_title, "vertical_column_troposphere Concentration");
    }

    #[test]
    fn test_chart_frame() -> Result<(), Box<dyn std::error::Error>> {
        let points = [SeriesPoint {
            datetime: Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap(),
            value: 3.0,
        }];
        let df = chart_frame("NO2", &points)?;

        assert_eq!(df.height(), 1);
        assert_eq!(
            df.column(TIME_LABEL_COLUMN)?.str()?.get(0),
            Some("2024-05-20T12:00:00Z")
        );
        assert_eq!(df.column("NO2")?.f64()?.get(0), Some(3.0));
        Ok(())
    }

    #[test]
    fn test_empty_chart_frame() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(chart_frame("NO2", &[])?.height(), 0);
        Ok(())
    }

    #[cfg(feature = "plotting")]
    #[test]
    fn test_write_html() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("no2.html");
        let points = [SeriesPoint {
            datetime: Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap(),
            value: 3.0,
        }];

        SeriesChart::new("NO2", &points)?.write_html(&path.to_string_lossy());

        assert!(std::fs::read_to_string(&path)?.contains("NO2"));
        Ok(())
    }
}
