//! Flattens a `getSamples` JSON body into typed [`Sample`]s.
//!
//! A record is kept only when its variable parses to a finite, strictly
//! positive number. Everything else is skipped and counted in the
//! [`ExtractReport`]; a body without a usable `samples` array yields an empty
//! result instead of an error, including an `error` document sent back by the
//! service, which is recorded in the report.

use crate::samples::error::SampleError;
use crate::types::sample::Sample;
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Attribute holding the acquisition time of a sample, in epoch ms.
pub const STD_TIME_FIELD: &str = "StdTime";

/// What happened to the top-level `samples` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Present,
    /// Absent; treated as an empty array.
    Missing,
    /// Present but not an array (or the body is not an object); treated as empty.
    Malformed,
}

/// `error` document returned by the service in place of `samples`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceRejection {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Vec<String>,
}

/// Per-record bookkeeping of one extraction pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractReport {
    pub samples_field: FieldStatus,
    pub service_error: Option<ServiceRejection>,
    /// Records seen in the `samples` array.
    pub records: usize,
    pub kept: usize,
    pub missing_attributes: usize,
    pub missing_variable: usize,
    pub unparseable_value: usize,
    /// Parsed to NaN or an infinity, e.g. `"inf"` or `"1e400"`.
    pub non_finite_value: usize,
    pub non_positive_value: usize,
    pub missing_timestamp: usize,
    pub invalid_timestamp: usize,
}

impl ExtractReport {
    pub fn dropped(&self) -> usize {
        self.records - self.kept
    }
}

/// Typed result of [`extract_samples`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedSamples {
    pub variable: String,
    pub samples: Vec<Sample>,
    pub report: ExtractReport,
}

impl ExtractedSamples {
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[derive(Deserialize)]
struct SamplesPayload {
    samples: Option<Value>,
    error: Option<ServiceRejection>,
}

enum Rejection {
    MissingAttributes,
    MissingVariable,
    UnparseableValue,
    NonFiniteValue,
    NonPositiveValue,
    MissingTimestamp,
    InvalidTimestamp,
}

/// Parses a raw response body and keeps the valid samples of `variable`.
///
/// # Errors
///
/// Returns [`SampleError::InvalidJson`] when the body is not JSON at all.
/// Bad individual records and service `error` documents never produce an error.
pub fn extract_samples(body: &str, variable: &str) -> Result<ExtractedSamples, SampleError> {
    let value: Value = serde_json::from_str(body).map_err(SampleError::InvalidJson)?;
    Ok(extract_samples_from_value(value, variable))
}

/// Same as [`extract_samples`] for an already parsed document.
pub fn extract_samples_from_value(value: Value, variable: &str) -> ExtractedSamples {
    let mut report = ExtractReport::default();

    let records = match serde_json::from_value::<SamplesPayload>(value) {
        Ok(payload) => {
            if let Some(error) = payload.error {
                warn!(
                    "Image service rejected the request for {} ({}): {} {:?}",
                    variable, error.code, error.message, error.details
                );
                report.service_error = Some(error);
            }
            match payload.samples {
                Some(Value::Array(records)) => records,
                None | Some(Value::Null) => {
                    report.samples_field = FieldStatus::Missing;
                    Vec::new()
                }
                Some(_) => {
                    report.samples_field = FieldStatus::Malformed;
                    Vec::new()
                }
            }
        }
        Err(_) => {
            report.samples_field = FieldStatus::Malformed;
            Vec::new()
        }
    };

    report.records = records.len();
    let mut samples = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        match extract_record(record, variable) {
            Ok(sample) => samples.push(sample),
            Err(rejection) => {
                let reason = match rejection {
                    Rejection::MissingAttributes => {
                        report.missing_attributes += 1;
                        "no attributes"
                    }
                    Rejection::MissingVariable => {
                        report.missing_variable += 1;
                        "variable missing"
                    }
                    Rejection::UnparseableValue => {
                        report.unparseable_value += 1;
                        "value not numeric"
                    }
                    Rejection::NonFiniteValue => {
                        report.non_finite_value += 1;
                        "value not finite"
                    }
                    Rejection::NonPositiveValue => {
                        report.non_positive_value += 1;
                        "value not positive"
                    }
                    Rejection::MissingTimestamp => {
                        report.missing_timestamp += 1;
                        "timestamp missing"
                    }
                    Rejection::InvalidTimestamp => {
                        report.invalid_timestamp += 1;
                        "timestamp not numeric"
                    }
                };
                debug!("Skipping sample #{} for {}: {}", index, variable, reason);
            }
        }
    }
    report.kept = samples.len();

    info!(
        "Extracted {} of {} samples for {} (samples field {:?})",
        report.kept, report.records, variable, report.samples_field
    );

    ExtractedSamples {
        variable: variable.to_string(),
        samples,
        report,
    }
}

fn extract_record(record: &Value, variable: &str) -> Result<Sample, Rejection> {
    let attributes: &Map<String, Value> = record
        .get("attributes")
        .and_then(Value::as_object)
        .ok_or(Rejection::MissingAttributes)?;

    let raw_value = attributes.get(variable).ok_or(Rejection::MissingVariable)?;
    let value = parse_number(raw_value).ok_or(Rejection::UnparseableValue)?;
    if !value.is_finite() {
        return Err(Rejection::NonFiniteValue);
    }
    if value <= 0.0 {
        return Err(Rejection::NonPositiveValue);
    }

    let raw_time = attributes
        .get(STD_TIME_FIELD)
        .ok_or(Rejection::MissingTimestamp)?;
    let timestamp_ms = parse_epoch_millis(raw_time).ok_or(Rejection::InvalidTimestamp)?;

    Ok(Sample {
        timestamp_ms,
        value,
    })
}

/// Numbers come back as strings from most services, sometimes as JSON numbers.
fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Number(number) => number.as_f64(),
        _ => None,
    }
}

fn parse_epoch_millis(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(whole_millis)),
        Value::String(text) => {
            let text = text.trim();
            match text.parse::<i64>() {
                Ok(ms) => Some(ms),
                Err(_) => text.parse::<f64>().ok().and_then(whole_millis),
            }
        }
        _ => None,
    }
}

fn whole_millis(ms: f64) -> Option<i64> {
    ms.is_finite().then_some(ms as i64)
}
