//! Map view with point picker
//!
//! Owns only camera state. Marker, address and lookup status are passed in
//! each frame from the view controller; a picked point is returned to the
//! caller rather than applied here.

pub mod camera;
pub mod input;
pub mod render;

pub use camera::MapCamera;
pub use input::{InputHandler, MapInput};
pub use render::MapRenderer;

use egui::{Color32, RichText, Sense, Ui};
use geo_form_types::GeoPoint;

/// Data needed to render the map (extracted before render)
pub struct MapViewData<'a> {
    pub marker: Option<GeoPoint>,
    /// Popup text for the marker (`road, city, country`)
    pub popup: Option<String>,
    pub is_pending: bool,
    /// Set only when lookup errors are configured to be visible
    pub failure: Option<&'a str>,
}

pub struct MapView {
    camera: MapCamera,
}

impl MapView {
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self {
            camera: MapCamera::new(center, zoom),
        }
    }

    /// Render the map; returns the point the user clicked, if any
    pub fn ui(&mut self, ui: &mut Ui, data: &MapViewData<'_>) -> Option<GeoPoint> {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let screen_rect = response.rect;

        let input = InputHandler::handle_input(&response, &mut self.camera, screen_rect);
        if input.needs_repaint {
            ui.ctx().request_repaint();
        }

        MapRenderer::paint_background(&painter, &self.camera, screen_rect);
        MapRenderer::paint_graticule(&painter, &self.camera, screen_rect);
        if let Some(marker) = data.marker {
            MapRenderer::paint_marker(
                &painter,
                &self.camera,
                screen_rect,
                marker,
                data.popup.as_deref(),
            );
        }
        MapRenderer::paint_readout(&painter, screen_rect, self.camera.zoom(), input.hovered);

        if data.is_pending {
            let spinner_rect = egui::Rect::from_min_size(
                screen_rect.left_top() + egui::vec2(10.0, 10.0),
                egui::vec2(18.0, 18.0),
            );
            egui::Spinner::new().paint_at(ui, spinner_rect);
        }

        if let Some(failure) = data.failure {
            let notice_rect = egui::Rect::from_min_size(
                screen_rect.left_top() + egui::vec2(10.0, 10.0),
                egui::vec2(screen_rect.width() - 20.0, 20.0),
            );
            ui.put(
                notice_rect,
                egui::Label::new(
                    RichText::new(format!("Address lookup failed: {}", failure))
                        .color(Color32::RED)
                        .small(),
                ),
            );
        }

        input.selected
    }
}
