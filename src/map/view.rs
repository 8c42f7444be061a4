use crate::map::layer::ImageryLayer;
use crate::types::lat_lon::LatLon;
use log::info;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

pub const DEFAULT_BASE_LAYER: &str = "OpenStreetMap.Mapnik";

/// Pointer events forwarded by the map renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapInteraction {
    Click(LatLon),
    MouseMove(LatLon),
}

/// Text readout of the coordinates under the pointer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinateLabel {
    text: String,
}

impl CoordinateLabel {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn update(&mut self, position: LatLon) {
        self.text = format!("Lat: {:.4}, Lon: {:.4}", position.lat(), position.lon());
    }
}

/// A base map plus one imagery overlay and the coordinate readout.
pub struct MapView {
    center: LatLon,
    zoom: u8,
    base_layer: String,
    overlay: Rc<RefCell<ImageryLayer>>,
    coordinate_label: CoordinateLabel,
}

impl MapView {
    pub fn new(
        center: LatLon,
        zoom: u8,
        base_layer: impl Into<String>,
        overlay: Rc<RefCell<ImageryLayer>>,
    ) -> Self {
        Self {
            center,
            zoom,
            base_layer: base_layer.into(),
            overlay,
            coordinate_label: CoordinateLabel::default(),
        }
    }

    pub fn center(&self) -> LatLon {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn base_layer(&self) -> &str {
        &self.base_layer
    }

    pub fn overlay(&self) -> Ref<'_, ImageryLayer> {
        self.overlay.borrow()
    }

    pub fn coordinate_label(&self) -> &CoordinateLabel {
        &self.coordinate_label
    }

    /// Clicks are only logged; pointer moves rewrite the coordinate label.
    pub fn handle(&mut self, interaction: MapInteraction) {
        match interaction {
            MapInteraction::Click(position) => {
                info!(
                    "Clicked at lat {:.4}, lon {:.4}",
                    position.lat(),
                    position.lon()
                );
            }
            MapInteraction::MouseMove(position) => self.coordinate_label.update(position),
        }
    }
}
