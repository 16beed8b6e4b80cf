// src/map/mod.rs
mod adapter;

pub use adapter::{MapResponse, MapView};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Map center plus zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: f64,
}

/// Shared default viewport. Both the full-page screen and the modal reset to
/// this exact view, so it lives here rather than in either call site.
pub const DEFAULT_VIEWPORT: Viewport = Viewport {
    center: LatLng { lat: 12.0, lng: 30.0 },
    zoom: 2.5,
};

/// Zoom applied when flying to a selected event.
pub const DETAIL_ZOOM: f64 = 6.0;

/// Imperative command surface of a mounted map. `MapView` implements this
/// over the real widget; tests substitute a recording fake so selection and
/// composition logic run without a rendering backend.
pub trait MapController {
    fn fly_to(&mut self, target: LatLng, zoom: f64);
    fn set_view(&mut self, center: LatLng, zoom: f64);
    fn zoom_in(&mut self);
    fn zoom_out(&mut self);
    /// Notify the map that its container footprint changed (dialog maximize,
    /// restore). Mapping widgets do not detect container resizes themselves.
    fn invalidate_size(&mut self);
    fn viewport(&self) -> Viewport;
}
