use crate::map::catalog::ObservationCatalog;
use crate::types::time_range::TimeRange;

/// Where one edge of the overlay's time window comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundEdge {
    /// Follows the slider's current value.
    Slider,
    CatalogFirst,
    CatalogLast,
    Fixed(i64),
}

/// How slider positions map onto the overlay's `[start, end]` window.
///
/// The default moves the start with the slider and keeps the end on the last
/// catalog timestamp, so the window always reaches the newest imagery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBinding {
    pub start: BoundEdge,
    pub end: BoundEdge,
}

impl Default for TimeBinding {
    fn default() -> Self {
        Self {
            start: BoundEdge::Slider,
            end: BoundEdge::CatalogLast,
        }
    }
}

impl TimeBinding {
    /// Both edges on the slider: a single-instant window.
    pub fn instant() -> Self {
        Self {
            start: BoundEdge::Slider,
            end: BoundEdge::Slider,
        }
    }

    pub fn resolve(&self, slider_value: i64, catalog: &ObservationCatalog) -> TimeRange {
        let edge = |edge: BoundEdge| match edge {
            BoundEdge::Slider => slider_value,
            BoundEdge::CatalogFirst => catalog.first(),
            BoundEdge::CatalogLast => catalog.last(),
            BoundEdge::Fixed(ms) => ms,
        };
        TimeRange::new(edge(self.start), edge(self.end))
    }
}
