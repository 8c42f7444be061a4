//! Model of the interactive map: a time slider over the observation catalog
//! driving the time window of an imagery overlay, plus pointer handlers.
//!
//! The renderer itself (tiles, drawing, the UI event loop) is external. This
//! module owns the state that renderer reads and the wiring between widgets.
//! Everything here is single-threaded.

pub mod binding;
pub mod catalog;
pub mod error;
pub mod layer;
pub mod slider;
pub mod view;

use crate::map::binding::TimeBinding;
use crate::map::catalog::ObservationCatalog;
use crate::map::error::MapError;
use crate::map::layer::{ImageryLayer, LayerSettings};
use crate::map::slider::{SubscriptionId, TimeSlider};
use crate::map::view::{MapInteraction, MapView, DEFAULT_BASE_LAYER};
use crate::types::lat_lon::LatLon;
use crate::types::service_config::ServiceConfig;
use bon::bon;
use log::debug;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

pub const DEFAULT_CENTER: LatLon = LatLon(39.0, -98.0);
pub const DEFAULT_ZOOM: u8 = 4;

/// Assembled widgets: slider, map view with its overlay, and the binding
/// subscription between them.
pub struct InteractiveMap {
    catalog: ObservationCatalog,
    binding: TimeBinding,
    slider: TimeSlider,
    view: MapView,
    binding_subscription: SubscriptionId,
}

#[bon]
impl InteractiveMap {
    /// Builds the slider from `catalog`, the overlay on `config.service_url`,
    /// and subscribes the overlay's time window to slider changes.
    ///
    /// # Arguments
    ///
    /// * `.config(&ServiceConfig)`: **Required.** Supplies the service URL.
    /// * `.catalog(ObservationCatalog)`: **Required.** Slider positions.
    /// * `.layer(LayerSettings)`: **Required.** Rendering rule, format, opacity.
    /// * `.binding(TimeBinding)`: Optional. Defaults to start on the slider,
    ///   end on the last catalog timestamp.
    /// * `.center(LatLon)`, `.zoom(u8)`, `.base_layer(String)`: Optional view settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use imagery_series::{
    ///     InteractiveMap, LayerSettings, ObservationCatalog, ServiceConfig, TimeRange,
    /// };
    ///
    /// let config = ServiceConfig::builder()
    ///     .service_url("https://host/arcgis/rest/services/NO2/ImageServer")
    ///     .variable("NO2")
    ///     .time_range(TimeRange::new(100, 300))
    ///     .build();
    ///
    /// let mut map = InteractiveMap::assemble()
    ///     .config(&config)
    ///     .catalog(ObservationCatalog::new([100, 200, 300]).unwrap())
    ///     .layer(LayerSettings::builder().rendering_rule("NO2_Color").build())
    ///     .call()
    ///     .unwrap();
    ///
    /// map.select_time(200).unwrap();
    /// assert_eq!(map.overlay().time_window(), TimeRange::new(200, 300));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidOpacity`] for bad layer settings and
    /// [`MapError::Time`] if a catalog timestamp cannot be labelled.
    #[builder]
    pub fn assemble(
        config: &ServiceConfig,
        catalog: ObservationCatalog,
        layer: LayerSettings,
        binding: Option<TimeBinding>,
        center: Option<LatLon>,
        zoom: Option<u8>,
        #[builder(into)] base_layer: Option<String>,
    ) -> Result<Self, MapError> {
        let binding = binding.unwrap_or_default();
        let mut slider = TimeSlider::new("Time", catalog.slider_options()?)?;

        let initial_window = binding.resolve(slider.value(), &catalog);
        let overlay = Rc::new(RefCell::new(ImageryLayer::new(
            config.service_url.clone(),
            layer,
            initial_window,
        )?));

        let bound_overlay = Rc::clone(&overlay);
        let bound_catalog = catalog.clone();
        let binding_subscription = slider.subscribe(move |change| {
            let window = binding.resolve(change.new, &bound_catalog);
            debug!("Overlay time window -> {}", window);
            bound_overlay.borrow_mut().set_time_window(window);
        });

        let view = MapView::new(
            center.unwrap_or(DEFAULT_CENTER),
            zoom.unwrap_or(DEFAULT_ZOOM),
            base_layer.unwrap_or_else(|| DEFAULT_BASE_LAYER.to_string()),
            overlay,
        );

        Ok(Self {
            catalog,
            binding,
            slider,
            view,
            binding_subscription,
        })
    }
}

impl InteractiveMap {
    pub fn catalog(&self) -> &ObservationCatalog {
        &self.catalog
    }

    pub fn binding(&self) -> TimeBinding {
        self.binding
    }

    pub fn slider(&self) -> &TimeSlider {
        &self.slider
    }

    /// Direct slider access, e.g. to add observers. Value changes still
    /// reach the overlay through the binding subscription.
    pub fn slider_mut(&mut self) -> &mut TimeSlider {
        &mut self.slider
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    pub fn overlay(&self) -> Ref<'_, ImageryLayer> {
        self.view.overlay()
    }

    pub fn binding_subscription(&self) -> SubscriptionId {
        self.binding_subscription
    }

    /// Moves the slider to `ms`; returns whether the value changed.
    pub fn select_time(&mut self, ms: i64) -> Result<bool, MapError> {
        self.slider.set_value(ms)
    }

    pub fn handle_interaction(&mut self, interaction: MapInteraction) {
        self.view.handle(interaction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::binding::BoundEdge;
    use crate::types::time_range::TimeRange;

    const CATALOG: [i64; 4] = [
        1_716_206_400_000,
        1_716_210_000_000,
        1_716_213_600_000,
        1_716_217_200_000,
    ];

    fn config() -> ServiceConfig {
        ServiceConfig::builder()
            .service_url("https://host/arcgis/rest/services/NO2/ImageServer")
            .variable("NO2")
            .time_range(TimeRange::new(CATALOG[0], CATALOG[3]))
            .build()
    }

    fn settings() -> LayerSettings {
        LayerSettings::builder().rendering_rule("NO2_Color").build()
    }

    #[test]
    fn test_slider_start_moves_end_stays_pinned() {
        let config = config();
        let mut map = InteractiveMap::assemble()
            .config(&config)
            .catalog(ObservationCatalog::new(CATALOG).unwrap())
            .layer(settings())
            .call()
            .unwrap();

        assert_eq!(
            map.overlay().time_window(),
            TimeRange::new(CATALOG[0], CATALOG[3])
        );
        assert_eq!(map.slider().label(), "2024-05-20T12:00:00Z");

        assert!(map.select_time(CATALOG[2]).unwrap());
        assert_eq!(
            map.overlay().time_window(),
            TimeRange::new(CATALOG[2], CATALOG[3])
        );

        map.slider_mut().select_index(1).unwrap();
        assert_eq!(
            map.overlay().time_window(),
            TimeRange::new(CATALOG[1], CATALOG[3])
        );
    }

    #[test]
    fn test_overlay_uses_service_url_and_settings() {
        let config = config();
        let map = InteractiveMap::assemble()
            .config(&config)
            .catalog(ObservationCatalog::new(CATALOG).unwrap())
            .layer(settings())
            .base_layer("Esri.WorldGrayCanvas")
            .zoom(6)
            .call()
            .unwrap();

        assert_eq!(map.overlay().url(), config.service_url);
        assert_eq!(map.overlay().rendering_rule(), "NO2_Color");
        assert_eq!(map.view().base_layer(), "Esri.WorldGrayCanvas");
        assert_eq!(map.view().zoom(), 6);
        assert_eq!(map.view().center(), DEFAULT_CENTER);
        assert_eq!(map.slider().observer_count(), 1);
    }

    #[test]
    fn test_custom_binding() {
        let config = config();
        let mut map = InteractiveMap::assemble()
            .config(&config)
            .catalog(ObservationCatalog::new(CATALOG).unwrap())
            .layer(settings())
            .binding(TimeBinding {
                start: BoundEdge::Slider,
                end: BoundEdge::Slider,
            })
            .call()
            .unwrap();

        map.select_time(CATALOG[1]).unwrap();
        assert_eq!(
            map.overlay().time_window(),
            TimeRange::new(CATALOG[1], CATALOG[1])
        );
    }

    #[test]
    fn test_unknown_time_leaves_overlay_alone() {
        let config = config();
        let mut map = InteractiveMap::assemble()
            .config(&config)
            .catalog(ObservationCatalog::new(CATALOG).unwrap())
            .layer(settings())
            .call()
            .unwrap();

        assert!(matches!(
            map.select_time(42),
            Err(MapError::UnknownTimestamp(42))
        ));
        assert_eq!(
            map.overlay().time_window(),
            TimeRange::new(CATALOG[0], CATALOG[3])
        );
    }

    #[test]
    fn test_detached_binding_stops_updates() {
        let config = config();
        let mut map = InteractiveMap::assemble()
            .config(&config)
            .catalog(ObservationCatalog::new(CATALOG).unwrap())
            .layer(settings())
            .call()
            .unwrap();

        let id = map.binding_subscription();
        assert!(map.slider_mut().unsubscribe(id));
        map.select_time(CATALOG[3]).unwrap();
        assert_eq!(
            map.overlay().time_window(),
            TimeRange::new(CATALOG[0], CATALOG[3])
        );
    }

    #[test]
    fn test_pointer_events() {
        let config = config();
        let mut map = InteractiveMap::assemble()
            .config(&config)
            .catalog(ObservationCatalog::new(CATALOG).unwrap())
            .layer(settings())
            .call()
            .unwrap();

        map.handle_interaction(MapInteraction::MouseMove(LatLon(34.0, -118.0)));
        assert_eq!(
            map.view().coordinate_label().text(),
            "Lat: 34.0000, Lon: -118.0000"
        );
    }
}
