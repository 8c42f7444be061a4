use crate::map::error::MapError;
use crate::types::time_range::TimeRange;
use bon::Builder;
use serde_json::json;

pub const DEFAULT_IMAGE_FORMAT: &str = "jpgpng";
pub const DEFAULT_OPACITY: f64 = 0.8;

/// Fixed rendering settings of the imagery overlay.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct LayerSettings {
    /// Name of a raster function published by the service.
    #[builder(into)]
    pub rendering_rule: String,
    #[builder(into, default = DEFAULT_IMAGE_FORMAT.to_string())]
    pub format: String,
    #[builder(default = DEFAULT_OPACITY)]
    pub opacity: f64,
}

/// The dynamic imagery overlay drawn from the image service.
///
/// Tile fetching and drawing belong to the map renderer; this only carries
/// the parameters it needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageryLayer {
    url: String,
    rendering_rule: String,
    format: String,
    opacity: f64,
    time_window: TimeRange,
}

impl ImageryLayer {
    /// # Errors
    ///
    /// Returns [`MapError::InvalidOpacity`] unless `0.0 <= opacity <= 1.0`.
    pub fn new(
        url: impl Into<String>,
        settings: LayerSettings,
        time_window: TimeRange,
    ) -> Result<Self, MapError> {
        if !(0.0..=1.0).contains(&settings.opacity) {
            return Err(MapError::InvalidOpacity(settings.opacity));
        }
        Ok(Self {
            url: url.into(),
            rendering_rule: settings.rendering_rule,
            format: settings.format,
            opacity: settings.opacity,
            time_window,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn rendering_rule(&self) -> &str {
        &self.rendering_rule
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn time_window(&self) -> TimeRange {
        self.time_window
    }

    pub fn set_time_window(&mut self, time_window: TimeRange) {
        self.time_window = time_window;
    }

    /// Parameters a renderer sends with every export request for this layer.
    pub fn export_params(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "renderingRule",
                json!({ "rasterFunction": self.rendering_rule }).to_string(),
            ),
            ("format", self.format.clone()),
            ("time", self.time_window.to_query_value()),
        ]
    }
}
