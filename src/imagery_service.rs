//! This module provides the main entry point for sampling an image service.
//! It turns a bounding box and time range into filtered samples, a polars
//! frame of those samples, or the averaged time series.

use crate::error::ImageryError;
use crate::frames::sample_frame::SampleFrame;
use crate::frames::series_frame::SeriesFrame;
use crate::samples::extractor::ExtractedSamples;
use crate::samples::fetcher::SampleFetcher;
use crate::samples::query::SampleQuery;
use crate::types::envelope::Envelope;
use crate::types::service_config::ServiceConfig;
use crate::types::service_options::{Interpolation, ResponseFormat};
use crate::types::time_range::TimeRange;
use bon::bon;
use reqwest::Client;

/// The client for one image service and variable.
///
/// Holds the immutable [`ServiceConfig`] and the HTTP client. Each call issues
/// exactly one `getSamples` request; nothing is cached between calls.
///
/// # Examples
///
/// ```no_run
/// # use imagery_series::{Envelope, ImageryError, ImageryService, ServiceConfig, TimeRange};
/// # #[tokio::main]
/// # async fn main() -> Result<(), ImageryError> {
/// let config = ServiceConfig::builder()
///     .service_url("https://example.com/arcgis/rest/services/NO2/ImageServer")
///     .variable("NO2")
///     .time_range(TimeRange::parse(
///         "2024-05-20 12:00:00",
///         "2024-05-21 12:00:00",
///         "%Y-%m-%d %H:%M:%S",
///     )?)
///     .build();
/// let service = ImageryService::new(config);
///
/// let series = service
///     .time_series()
///     .envelope(Envelope::wgs84(-118.7, 33.6, -117.6, 34.4))
///     .call()
///     .await?
///     .collect_series()?;
/// println!("{} averaged points", series.len());
/// # Ok(())
/// # }
/// ```
pub struct ImageryService {
    config: ServiceConfig,
    fetcher: SampleFetcher,
}

#[bon]
impl ImageryService {
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Uses a preconfigured `reqwest` client (proxies, timeouts, headers).
    pub fn with_client(config: ServiceConfig, client: Client) -> Self {
        Self {
            config,
            fetcher: SampleFetcher::with_client(client),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// The query `samples` and friends would send.
    ///
    /// * `.envelope(Envelope)`: **Required.** Region to sample.
    /// * `.time_range(TimeRange)`: Optional. Defaults to the configured range.
    /// * `.interpolation(Interpolation)`: Optional. Defaults to nearest neighbour.
    /// * `.format(ResponseFormat)`: Optional. Defaults to pretty JSON.
    #[builder]
    pub fn query(
        &self,
        envelope: Envelope,
        time_range: Option<TimeRange>,
        interpolation: Option<Interpolation>,
        format: Option<ResponseFormat>,
    ) -> SampleQuery {
        SampleQuery::builder()
            .envelope(envelope)
            .variable(self.config.variable.clone())
            .time_range(time_range.unwrap_or(self.config.time_range))
            .maybe_interpolation(interpolation)
            .maybe_format(format)
            .build()
    }

    /// Fetches the valid samples of the configured variable inside `envelope`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageryError::Samples`] for transport failures, non-success
    /// statuses and non-JSON bodies. A response without samples is not an
    /// error; a service `error` document ends up in the report.
    #[builder]
    pub async fn samples(
        &self,
        envelope: Envelope,
        time_range: Option<TimeRange>,
        interpolation: Option<Interpolation>,
        format: Option<ResponseFormat>,
    ) -> Result<ExtractedSamples, ImageryError> {
        let query = self
            .query()
            .envelope(envelope)
            .maybe_time_range(time_range)
            .maybe_interpolation(interpolation)
            .maybe_format(format)
            .call();
        Ok(self
            .fetcher
            .fetch(&self.config.samples_endpoint(), &query)
            .await?)
    }

    /// Same as [`ImageryService::samples`], as a [`SampleFrame`].
    #[builder]
    pub async fn sample_frame(
        &self,
        envelope: Envelope,
        time_range: Option<TimeRange>,
        interpolation: Option<Interpolation>,
        format: Option<ResponseFormat>,
    ) -> Result<SampleFrame, ImageryError> {
        let extracted = self
            .samples()
            .envelope(envelope)
            .maybe_time_range(time_range)
            .maybe_interpolation(interpolation)
            .maybe_format(format)
            .call()
            .await?;
        Ok(SampleFrame::from_extracted(&extracted)?)
    }

    /// Fetches samples and averages them per timestamp.
    #[builder]
    pub async fn time_series(
        &self,
        envelope: Envelope,
        time_range: Option<TimeRange>,
        interpolation: Option<Interpolation>,
        format: Option<ResponseFormat>,
    ) -> Result<SeriesFrame, ImageryError> {
        let frame = self
            .sample_frame()
            .envelope(envelope)
            .maybe_time_range(time_range)
            .maybe_interpolation(interpolation)
            .maybe_format(format)
            .call()
            .await?;
        Ok(frame.mean_by_timestamp())
    }
}
