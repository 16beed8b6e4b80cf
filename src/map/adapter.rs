// src/map/adapter.rs
use eframe::egui;
use walkers::{lat_lon, HttpOptions, HttpTiles, Map, MapMemory, Plugin, Projector};

use super::{LatLng, MapController, Viewport, DEFAULT_VIEWPORT};
use crate::data::OutbreakEvent;

/// Diameter multiplier applied to the selected event's marker.
pub const SELECTED_SCALE: f32 = 1.5;

/// One full cycle of the expand/fade pulse halo, in seconds.
const PULSE_PERIOD: f64 = 2.0;

/// Minimum click hit radius so small markers stay clickable.
const MIN_HIT_RADIUS: f32 = 8.0;

pub struct MapResponse {
    pub clicked: Option<u32>,
}

/// Walkers plugin that paints the per-event markers on top of the tiles and
/// reports any marker click back through the borrowed output slots.
struct MarkerLayer<'a> {
    visible: &'a [&'a OutbreakEvent],
    selected: Option<u32>,
    clicked: &'a mut Option<u32>,
    any_pulsing: &'a mut bool,
}

impl Plugin for MarkerLayer<'_> {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        _response: &egui::Response,
        projector: &Projector,
        _map_memory: &MapMemory,
    ) {
        let painter = ui.painter();
        let rect = ui.max_rect();
        let time = ui.input(|i| i.time);
        let click_pos = ui.input(|i| {
            if i.pointer.primary_clicked() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });
        let mut best_hit: Option<(u32, f32)> = None;

        for event in self.visible {
            let projected = projector.project(lat_lon(event.lat, event.lng));
            let center = egui::pos2(projected.x, projected.y);
            if !rect.expand(32.0).contains(center) {
                continue;
            }

            let is_selected = Some(event.id) == self.selected;
            let scale = if is_selected { SELECTED_SCALE } else { 1.0 };
            let radius = event.size * scale / 2.0;
            let color = event.color();

            // Pulse halo, suppressed while selected so it does not
            // fight the selection ring.
            if event.pulse && !is_selected {
                *self.any_pulsing = true;
                let phase = ((time % PULSE_PERIOD) / PULSE_PERIOD) as f32;
                let halo_radius = radius + phase * radius * 2.0;
                let alpha = ((1.0 - phase) * 160.0) as u8;
                painter.circle_stroke(
                    center,
                    halo_radius,
                    egui::Stroke::new(
                        2.0,
                        egui::Color32::from_rgba_unmultiplied(
                            color.r(),
                            color.g(),
                            color.b(),
                            alpha,
                        ),
                    ),
                );
            }

            painter.circle_filled(center, radius, color);
            if is_selected {
                painter.circle_stroke(
                    center,
                    radius + 2.0,
                    egui::Stroke::new(2.0, egui::Color32::WHITE),
                );
            }

            if let Some(pos) = click_pos {
                let distance = pos.distance(center);
                if distance <= radius.max(MIN_HIT_RADIUS)
                    && best_hit.map_or(true, |(_, d)| distance < d)
                {
                    best_hit = Some((event.id, distance));
                }
            }
        }

        *self.clicked = best_hit.map(|(id, _)| id);
    }
}

/// Walkers-backed map view. Owns the rendering technology (tile fetcher and
/// viewport memory) and nothing else; business state stays with the caller.
/// Constructed once per mount by the owning composition, which keeps the only
/// long-lived handle. Dropping it tears the tile layer down.
pub struct MapView {
    tiles: HttpTiles,
    memory: MapMemory,
    home: LatLng,
}

impl MapView {
    pub fn new(ctx: egui::Context) -> Self {
        let http_options = HttpOptions {
            cache: dirs::cache_dir().map(|dir| dir.join("sentinel").join("tiles")),
            ..Default::default()
        };
        let tiles = HttpTiles::with_options(walkers::sources::OpenStreetMap, http_options, ctx);

        let mut memory = MapMemory::default();
        if let Err(e) = memory.set_zoom(DEFAULT_VIEWPORT.zoom) {
            log::warn!("Failed to set default zoom: {:?}", e);
        }
        memory.center_at(lat_lon(
            DEFAULT_VIEWPORT.center.lat,
            DEFAULT_VIEWPORT.center.lng,
        ));

        Self {
            tiles,
            memory,
            home: DEFAULT_VIEWPORT.center,
        }
    }

    /// Draws the map plus one marker per visible event. Markers are repainted
    /// from scratch every frame (expected full clear-and-redraw; nothing
    /// stale can survive a filter change). Reports a marker click through the
    /// response instead of mutating anything itself.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        visible: &[&OutbreakEvent],
        selected: Option<u32>,
    ) -> MapResponse {
        let mut clicked: Option<u32> = None;
        let mut any_pulsing = false;
        let home = lat_lon(self.home.lat, self.home.lng);

        ui.add(
            Map::new(Some(&mut self.tiles), &mut self.memory, home).with_plugin(MarkerLayer {
                visible,
                selected,
                clicked: &mut clicked,
                any_pulsing: &mut any_pulsing,
            }),
        );

        if any_pulsing {
            ui.ctx().request_repaint();
        }

        MapResponse { clicked }
    }
}

impl MapController for MapView {
    fn fly_to(&mut self, target: LatLng, zoom: f64) {
        self.memory.center_at(lat_lon(target.lat, target.lng));
        if let Err(e) = self.memory.set_zoom(zoom) {
            log::warn!("Fly-to zoom rejected: {:?}", e);
        }
    }

    fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.memory.center_at(lat_lon(center.lat, center.lng));
        if let Err(e) = self.memory.set_zoom(zoom) {
            log::warn!("Set-view zoom rejected: {:?}", e);
        }
    }

    fn zoom_in(&mut self) {
        // Clamped by the widget at the tile source's zoom bounds.
        let _ = self.memory.set_zoom(self.memory.zoom() + 1.0);
    }

    fn zoom_out(&mut self) {
        let _ = self.memory.set_zoom(self.memory.zoom() - 1.0);
    }

    fn invalidate_size(&mut self) {
        // The widget lays itself out from the container rect every frame, so
        // a resize only needs a fresh frame to take effect.
    }

    fn viewport(&self) -> Viewport {
        let position = self
            .memory
            .detached()
            .unwrap_or_else(|| lat_lon(self.home.lat, self.home.lng));
        Viewport {
            // Position is (lon, lat) order: x() is longitude, y() latitude.
            center: LatLng {
                lat: position.y(),
                lng: position.x(),
            },
            zoom: self.memory.zoom(),
        }
    }
}
