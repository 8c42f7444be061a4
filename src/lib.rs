//! Sample a multidimensional image service (for instance tropospheric NO₂
//! columns) over a bounding box and time range, and turn the response into an
//! averaged time series.
//!
//! The crate is a thin client: the service does all pixel work. Locally it
//! converts times, builds the `getSamples` request, filters invalid samples,
//! averages per timestamp with polars, and optionally charts the result
//! (feature `plotting`). The [`map`] module models the interactive map whose
//! time slider drives an imagery overlay of the same service.

mod chart;
mod error;
mod frames;
mod imagery_service;
pub mod map;
mod samples;
mod timestamps;
mod types;

pub use error::ImageryError;
pub use imagery_service::*;

pub use chart::{chart_frame, ChartLabels, TIME_LABEL_COLUMN};
#[cfg(feature = "plotting")]
pub use chart::SeriesChart;

pub use frames::error::FrameError;
pub use frames::sample_frame::{SampleFrame, DATETIME_COLUMN};
pub use frames::series_frame::SeriesFrame;

pub use samples::error::SampleError;
pub use samples::extractor::{
    extract_samples, extract_samples_from_value, ExtractReport, ExtractedSamples, FieldStatus,
    ServiceRejection, STD_TIME_FIELD,
};
pub use samples::fetcher::SampleFetcher;
pub use samples::query::{SampleQuery, GEOMETRY_TYPE_ENVELOPE};

pub use timestamps::error::TimeError;
pub use timestamps::{
    datetime_from_epoch_millis, from_epoch_millis, to_epoch_millis, to_epoch_millis_with,
    TimeZonePolicy, DEFAULT_INPUT_PATTERN, ISO_UTC_PATTERN,
};

pub use types::envelope::{Envelope, SpatialReference, WGS84_WKID};
pub use types::lat_lon::LatLon;
pub use types::sample::{Sample, SeriesPoint};
pub use types::service_config::ServiceConfig;
pub use types::service_options::{Interpolation, ResponseFormat};
pub use types::time_range::TimeRange;

pub use map::binding::{BoundEdge, TimeBinding};
pub use map::catalog::ObservationCatalog;
pub use map::error::MapError;
pub use map::layer::{ImageryLayer, LayerSettings};
pub use map::slider::{SliderOption, SubscriptionId, TimeSlider, ValueChange};
pub use map::view::{CoordinateLabel, MapInteraction, MapView};
pub use map::InteractiveMap;
