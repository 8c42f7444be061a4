//! Fixed-choice query parameters of the `getSamples` capability.

use std::fmt;
use std::fmt::{Display, Formatter};

/// Resampling used by the service when a sample point falls between pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interpolation {
    #[default]
    NearestNeighbor,
    Bilinear,
    Cubic,
    Majority,
}

impl Interpolation {
    pub fn as_query_value(self) -> &'static str {
        match self {
            Interpolation::NearestNeighbor => "RSP_NearestNeighbor",
            Interpolation::Bilinear => "RSP_BilinearInterpolation",
            Interpolation::Cubic => "RSP_CubicConvolution",
            Interpolation::Majority => "RSP_Majority",
        }
    }
}

/// The `f` parameter: which JSON flavour the service should answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseFormat {
    Json,
    /// Pretty-printed JSON, same structure as [`ResponseFormat::Json`].
    #[default]
    PrettyJson,
}

impl ResponseFormat {
    pub fn as_query_value(self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::PrettyJson => "pjson",
        }
    }
}

impl Display for Interpolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

impl Display for ResponseFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}
