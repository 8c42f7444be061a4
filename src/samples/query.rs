//! Builds the query string of the `getSamples` capability.
//!
//! Complex parameters (`geometry`, `mosaicRule`) are compact JSON strings
//! embedded as plain query values, not nested JSON.

use crate::samples::error::SampleError;
use crate::types::envelope::Envelope;
use crate::types::service_options::{Interpolation, ResponseFormat};
use crate::types::time_range::TimeRange;
use bon::Builder;
use reqwest::Url;
use serde::Serialize;

pub const GEOMETRY_TYPE_ENVELOPE: &str = "esriGeometryEnvelope";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MosaicRule<'a> {
    multidimensional_definition: [VariableSelection<'a>; 1],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VariableSelection<'a> {
    variable_name: &'a str,
}

/// Parameters of one "sample values in region over time range" request.
///
/// # Examples
///
/// ```
/// use imagery_series::{Envelope, SampleQuery, TimeRange};
///
/// let query = SampleQuery::builder()
///     .envelope(Envelope::wgs84(-118.7, 33.6, -117.6, 34.4))
///     .variable("NO2")
///     .time_range(TimeRange::new(1_716_206_400_000, 1_716_292_800_000))
///     .build();
///
/// let pairs = query.query_pairs().unwrap();
/// assert!(pairs.contains(&("time", "1716206400000,1716292800000".to_string())));
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct SampleQuery {
    pub envelope: Envelope,
    #[builder(into)]
    pub variable: String,
    pub time_range: TimeRange,
    #[builder(default)]
    pub interpolation: Interpolation,
    #[builder(default)]
    pub format: ResponseFormat,
}

impl SampleQuery {
    /// `{"multidimensionalDefinition":[{"variableName":"<variable>"}]}`
    pub fn mosaic_rule_json(&self) -> Result<String, SampleError> {
        let rule = MosaicRule {
            multidimensional_definition: [VariableSelection {
                variable_name: &self.variable,
            }],
        };
        serde_json::to_string(&rule).map_err(SampleError::QueryEncoding)
    }

    /// Query parameters in the order the service documents them.
    pub fn query_pairs(&self) -> Result<Vec<(&'static str, String)>, SampleError> {
        let geometry = self
            .envelope
            .to_geometry_json()
            .map_err(SampleError::QueryEncoding)?;
        let interpolation = self.interpolation.as_query_value().to_string();

        Ok(vec![
            ("geometry", geometry),
            ("geometryType", GEOMETRY_TYPE_ENVELOPE.to_string()),
            ("mosaicRule", self.mosaic_rule_json()?),
            ("interpolation", interpolation),
            ("time", self.time_range.to_query_value()),
            ("f", self.format.as_query_value().to_string()),
        ])
    }

    /// Full, percent-encoded request URL against `endpoint`
    /// (usually [`crate::ServiceConfig::samples_endpoint`]).
    pub fn to_url(&self, endpoint: &str) -> Result<Url, SampleError> {
        let pairs = self.query_pairs()?;
        Url::parse_with_params(endpoint, &pairs).map_err(|e| SampleError::InvalidServiceUrl {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no2_query() -> SampleQuery {
        SampleQuery::builder()
            .envelope(Envelope::wgs84(-118.5, 33.5, -117.5, 34.5))
            .variable("NO2")
            .time_range(TimeRange::new(1_716_206_400_000, 1_716_292_800_000))
            .build()
    }

    fn lookup<'a>(pairs: &'a [(&'static str, String)], key: &str) -> &'a str {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or_else(|| panic!("missing query parameter {key}"))
    }

    #[test]
    fn test_query_pairs() {
        let pairs = no2_query().query_pairs().unwrap();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            ["geometry", "geometryType", "mosaicRule", "interpolation", "time", "f"]
        );

        assert_eq!(
            lookup(&pairs, "geometry"),
            r#"{"xmin":-118.5,"ymin":33.5,"xmax":-117.5,"ymax":34.5,"spatialReference":{"wkid":4326}}"#
        );
        assert_eq!(lookup(&pairs, "geometryType"), "esriGeometryEnvelope");
        assert_eq!(
            lookup(&pairs, "mosaicRule"),
            r#"{"multidimensionalDefinition":[{"variableName":"NO2"}]}"#
        );
        assert_eq!(lookup(&pairs, "interpolation"), "RSP_NearestNeighbor");
        assert_eq!(lookup(&pairs, "time"), "1716206400000,1716292800000");
        assert_eq!(lookup(&pairs, "f"), "pjson");
    }

    #[test]
    fn test_variable_name_is_json_escaped() {
        let query = SampleQuery::builder()
            .envelope(Envelope::wgs84(0.0, 0.0, 1.0, 1.0))
            .variable(r#"odd"name"#)
            .time_range(TimeRange::new(0, 1))
            .build();
        assert_eq!(
            query.mosaic_rule_json().unwrap(),
            r#"{"multidimensionalDefinition":[{"variableName":"odd\"name"}]}"#
        );
    }

    #[test]
    fn test_url_round_trips_embedded_json() {
        let url = no2_query()
            .to_url("https://host/arcgis/rest/services/NO2/ImageServer/getSamples/")
            .unwrap();
        assert_eq!(
            url.path(),
            "/arcgis/rest/services/NO2/ImageServer/getSamples/"
        );

        let decoded: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let mosaic = decoded
            .iter()
            .find(|(k, _)| k == "mosaicRule")
            .map(|(_, v)| v.clone())
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&mosaic).unwrap();
        assert_eq!(
            parsed["multidimensionalDefinition"][0]["variableName"],
            "NO2"
        );
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = no2_query().to_url("not a url").unwrap_err();
        assert!(matches!(err, SampleError::InvalidServiceUrl { .. }));
    }
}
