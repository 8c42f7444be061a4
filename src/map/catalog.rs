use crate::map::error::MapError;
use crate::map::slider::SliderOption;
use crate::timestamps::from_epoch_millis;

/// Timestamps (epoch ms) for which the service has pre-rendered imagery.
///
/// Curated by hand and never checked against the live service; only used to
/// populate the time slider. Always non-empty, ascending and free of
/// duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationCatalog {
    timestamps: Vec<i64>,
}

impl ObservationCatalog {
    /// # Errors
    ///
    /// Returns [`MapError::EmptyCatalog`] if `timestamps` yields nothing.
    pub fn new(timestamps: impl IntoIterator<Item = i64>) -> Result<Self, MapError> {
        let mut timestamps: Vec<i64> = timestamps.into_iter().collect();
        timestamps.sort_unstable();
        timestamps.dedup();
        if timestamps.is_empty() {
            return Err(MapError::EmptyCatalog);
        }
        Ok(Self { timestamps })
    }

    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    pub fn first(&self) -> i64 {
        self.timestamps[0]
    }

    pub fn last(&self) -> i64 {
        self.timestamps[self.timestamps.len() - 1]
    }

    pub fn contains(&self, ms: i64) -> bool {
        self.timestamps.binary_search(&ms).is_ok()
    }

    /// One option per timestamp: label is the ISO UTC string, value the epoch ms.
    pub fn slider_options(&self) -> Result<Vec<SliderOption>, MapError> {
        self.timestamps
            .iter()
            .map(|&value| {
                Ok(SliderOption {
                    label: from_epoch_millis(value)?,
                    value,
                })
            })
            .collect()
    }
}
