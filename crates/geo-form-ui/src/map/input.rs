//! Input handling - mouse/touch interaction with the map
//!
//! Drag pans, scroll zooms about the pointer, a click without a drag is a
//! point selection (only inside the drawn world).

use egui::{Rect, Response};
use geo_form_types::GeoPoint;

use super::camera::MapCamera;

/// Zoom levels per point of scroll
const SCROLL_ZOOM_RATE: f64 = 0.01;

/// What the map input produced this frame
#[derive(Debug, Clone, Default)]
pub struct MapInput {
    /// Point picked by a click
    pub selected: Option<GeoPoint>,
    /// Pointer position in geo space, for the coordinate readout
    pub hovered: Option<GeoPoint>,
    pub needs_repaint: bool,
}

pub struct InputHandler;

impl InputHandler {
    pub fn handle_input(response: &Response, camera: &mut MapCamera, screen_rect: Rect) -> MapInput {
        let mut input = MapInput::default();
        let pointer_pos = response.hover_pos();

        if let Some(pos) = pointer_pos {
            input.hovered = camera.pick(pos, screen_rect);
        }

        // egui only reports a click when the pointer did not travel far enough
        // to count as a drag. Clicks off the world are ignored.
        if response.clicked() {
            if let Some(point) = response
                .interact_pointer_pos()
                .and_then(|pos| camera.pick(pos, screen_rect))
            {
                input.selected = Some(point);
                input.needs_repaint = true;
            }
        }

        if response.dragged() {
            let delta = response.drag_delta();
            if delta.length() > 0.0 {
                camera.pan(delta);
                input.needs_repaint = true;
            }
        }

        if response.hovered() {
            let scroll = response.ctx.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                if let Some(pos) = pointer_pos {
                    camera.zoom_at(scroll as f64 * SCROLL_ZOOM_RATE, pos, screen_rect);
                    input.needs_repaint = true;
                }
            }
        }

        input
    }
}
