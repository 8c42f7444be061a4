use crate::types::time_range::TimeRange;
use bon::Builder;

/// Settings shared by the time-series and the interactive-map pipelines.
///
/// Built once and handed to each stage by reference; nothing mutates it.
///
/// # Examples
///
/// ```
/// use imagery_series::{ServiceConfig, TimeRange};
///
/// let config = ServiceConfig::builder()
///     .service_url("https://example.com/arcgis/rest/services/NO2/ImageServer")
///     .variable("NO2")
///     .time_range(TimeRange::new(1_716_206_400_000, 1_716_292_800_000))
///     .build();
///
/// assert_eq!(
///     config.samples_endpoint(),
///     "https://example.com/arcgis/rest/services/NO2/ImageServer/getSamples/"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct ServiceConfig {
    /// Base URL of the image service (the `.../ImageServer` resource).
    #[builder(into)]
    pub service_url: String,
    /// Name of the multidimensional variable to sample, e.g. `"NO2"`.
    #[builder(into)]
    pub variable: String,
    pub time_range: TimeRange,
}

impl ServiceConfig {
    /// `<service_url>/getSamples/`, tolerating a trailing slash on the base.
    pub fn samples_endpoint(&self) -> String {
        format!("{}/getSamples/", self.service_url.trim_end_matches('/'))
    }
}
