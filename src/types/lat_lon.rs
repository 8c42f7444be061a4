/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are represented as `f64`.
///
/// # Examples
///
/// ```
/// use imagery_series::LatLon;
///
/// let los_angeles = LatLon(34.05, -118.24);
/// assert_eq!(los_angeles.0, 34.05); // Latitude
/// assert_eq!(los_angeles.1, -118.24); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lon(self) -> f64 {
        self.1
    }
}
