//! MapCamera - Web-Mercator pan/zoom
//!
//! Provides geo-to-screen and screen-to-geo transforms over the standard
//! 256-px tile pyramid, so clicks land on the same coordinates a slippy map
//! would report.
//!
//! Camera state is UI-only; it never enters the user record.

use std::f64::consts::PI;

use egui::{Pos2, Rect, Vec2};
use geo_form_types::GeoPoint;

/// Edge length of one tile at zoom 0, in screen points
pub const TILE_SIZE: f64 = 256.0;

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 19.0;

/// World size in points at `zoom`
fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * 2f64.powf(zoom)
}

/// Project to world pixel coordinates at `zoom` (origin top-left, y down)
pub fn project(point: GeoPoint, zoom: f64) -> (f64, f64) {
    let point = point.normalized();
    let size = world_size(zoom);
    let x = (point.longitude + 180.0) / 360.0 * size;
    let lat = point.latitude.to_radians();
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}

/// Inverse of [`project`]
pub fn unproject(x: f64, y: f64, zoom: f64) -> GeoPoint {
    unproject_unwrapped(x, y, zoom).normalized()
}

/// Inverse of [`project`] without wrapping, so x = world size stays at +180
fn unproject_unwrapped(x: f64, y: f64, zoom: f64) -> GeoPoint {
    let size = world_size(zoom);
    let longitude = x / size * 360.0 - 180.0;
    let n = PI - 2.0 * PI * y / size;
    let latitude = n.sinh().atan().to_degrees();
    GeoPoint::new(latitude, longitude)
}

/// 2D map camera: geographic centre plus fractional zoom level
#[derive(Debug, Clone)]
pub struct MapCamera {
    center: GeoPoint,
    zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl MapCamera {
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self {
            center: center.normalized(),
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    // =========================================================================
    // CAMERA CONTROLS
    // =========================================================================

    /// Pan by delta in screen coordinates (content follows the pointer)
    pub fn pan(&mut self, screen_delta: Vec2) {
        let (cx, cy) = project(self.center, self.zoom);
        self.center = unproject(
            cx - screen_delta.x as f64,
            cy - screen_delta.y as f64,
            self.zoom,
        );
    }

    /// Change zoom by `delta` levels, keeping the point under `screen_pos` fixed
    pub fn zoom_at(&mut self, delta: f64, screen_pos: Pos2, screen_rect: Rect) {
        let new_zoom = (self.zoom + delta).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - self.zoom).abs() < 1e-6 {
            return;
        }

        let anchor = self.screen_to_geo(screen_pos, screen_rect);
        let offset = screen_pos - screen_rect.center();
        let (ax, ay) = project(anchor, new_zoom);

        self.zoom = new_zoom;
        self.center = unproject(ax - offset.x as f64, ay - offset.y as f64, new_zoom);
    }

    // =========================================================================
    // COORDINATE TRANSFORMS
    // =========================================================================

    pub fn geo_to_screen(&self, point: GeoPoint, screen_rect: Rect) -> Pos2 {
        let (cx, cy) = project(self.center, self.zoom);
        let (px, py) = project(point, self.zoom);
        let screen_center = screen_rect.center();
        Pos2::new(
            screen_center.x + (px - cx) as f32,
            screen_center.y + (py - cy) as f32,
        )
    }

    pub fn screen_to_geo(&self, screen_pos: Pos2, screen_rect: Rect) -> GeoPoint {
        let (cx, cy) = project(self.center, self.zoom);
        let offset = screen_pos - screen_rect.center();
        unproject(cx + offset.x as f64, cy + offset.y as f64, self.zoom)
    }

    /// Screen rect covered by the one world copy drawn around the centre.
    ///
    /// At low zoom it is narrower than the view; everything outside it is
    /// off the map.
    pub fn world_rect(&self, screen_rect: Rect) -> Rect {
        let (cx, cy) = project(self.center, self.zoom);
        let size = world_size(self.zoom) as f32;
        let min = screen_rect.center() - Vec2::new(cx as f32, cy as f32);
        Rect::from_min_size(min, Vec2::splat(size))
    }

    /// Point under `screen_pos`, or `None` when it falls outside the world.
    ///
    /// Only points inside [`Self::world_rect`] map back to the same screen
    /// position through [`Self::geo_to_screen`], so the marker lands under
    /// the click.
    pub fn pick(&self, screen_pos: Pos2, screen_rect: Rect) -> Option<GeoPoint> {
        let world = self.world_rect(screen_rect);
        let inside = screen_pos.x >= world.min.x
            && screen_pos.x < world.max.x
            && screen_pos.y >= world.min.y
            && screen_pos.y <= world.max.y;
        inside.then(|| self.screen_to_geo(screen_pos, screen_rect))
    }

    /// Geographic extent of the visible part of the world: (north-west, south-east).
    /// Never crosses the antimeridian.
    pub fn visible_bounds(&self, screen_rect: Rect) -> (GeoPoint, GeoPoint) {
        let visible = screen_rect.intersect(self.world_rect(screen_rect));
        let (cx, cy) = project(self.center, self.zoom);
        let corner = |pos: Pos2| {
            let offset = pos - screen_rect.center();
            unproject_unwrapped(cx + offset.x as f64, cy + offset.y as f64, self.zoom)
        };
        (corner(visible.left_top()), corner(visible.right_bottom()))
    }

    /// Degrees per point at the current zoom (longitude axis)
    pub fn degrees_per_point(&self) -> f64 {
        360.0 / world_size(self.zoom)
    }
}
