//! Axis-aligned geographic bounding boxes, serialized the way the image
//! service expects its `geometry` parameter.

use serde::{Deserialize, Serialize};

/// WGS84 geographic coordinates.
pub const WGS84_WKID: u32 = 4326;

/// A coordinate reference system, identified by its well-known id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpatialReference {
    pub wkid: u32,
}

impl SpatialReference {
    pub const WGS84: SpatialReference = SpatialReference { wkid: WGS84_WKID };
}

impl Default for SpatialReference {
    fn default() -> Self {
        Self::WGS84
    }
}

/// A rectangular bounding box (min/max longitude and latitude) plus its
/// spatial reference.
///
/// Corner ordering is not checked; an inverted box is sent to the service as is.
///
/// # Examples
///
/// ```
/// use imagery_series::Envelope;
///
/// let los_angeles = Envelope::wgs84(-118.7, 33.6, -117.6, 34.4);
/// assert_eq!(los_angeles.spatial_reference.wkid, 4326);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
    pub spatial_reference: SpatialReference,
}

impl Envelope {
    pub fn new(
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
        spatial_reference: SpatialReference,
    ) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
            spatial_reference,
        }
    }

    /// Builds an envelope in WGS84 longitude/latitude degrees.
    pub fn wgs84(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self::new(xmin, ymin, xmax, ymax, SpatialReference::WGS84)
    }

    /// Compact JSON as embedded in the `geometry` query parameter.
    pub fn to_geometry_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
