//! Map painting: background, graticule, marker and popup
//!
//! Raster tiles are not drawn; the graticule gives the user a sense of
//! position and scale while picking.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};
use geo_form_types::GeoPoint;

use super::camera::MapCamera;

/// Smallest spacing between graticule lines, in points
const MIN_LINE_SPACING: f64 = 80.0;

/// Candidate graticule steps in degrees, coarse to fine
const GRATICULE_STEPS: &[f64] = &[
    30.0, 10.0, 5.0, 2.0, 1.0, 0.5, 0.2, 0.1, 0.05, 0.02, 0.01, 0.005, 0.002, 0.001, 0.0005,
    0.0002, 0.0001,
];

const BACKGROUND: Color32 = Color32::from_rgb(242, 239, 233);
const OFF_WORLD: Color32 = Color32::from_rgb(200, 196, 188);
const GRID_LINE: Color32 = Color32::from_rgb(214, 208, 196);
const GRID_LABEL: Color32 = Color32::from_rgb(150, 140, 125);
const MARKER_FILL: Color32 = Color32::from_rgb(42, 129, 203);
const POPUP_FILL: Color32 = Color32::WHITE;
const POPUP_TEXT: Color32 = Color32::from_rgb(51, 51, 51);

/// Finest step whose lines are still at least [`MIN_LINE_SPACING`] apart
pub fn graticule_step(degrees_per_point: f64) -> f64 {
    GRATICULE_STEPS
        .iter()
        .copied()
        .filter(|step| step / degrees_per_point >= MIN_LINE_SPACING)
        .last()
        .unwrap_or(GRATICULE_STEPS[0])
}

pub struct MapRenderer;

impl MapRenderer {
    pub fn paint_background(painter: &Painter, camera: &MapCamera, screen_rect: Rect) {
        painter.rect_filled(screen_rect, 0.0, OFF_WORLD);
        painter.rect_filled(
            screen_rect.intersect(camera.world_rect(screen_rect)),
            0.0,
            BACKGROUND,
        );
    }

    pub fn paint_graticule(painter: &Painter, camera: &MapCamera, screen_rect: Rect) {
        let step = graticule_step(camera.degrees_per_point());
        let (north_west, south_east) = camera.visible_bounds(screen_rect);
        let area = screen_rect.intersect(camera.world_rect(screen_rect));
        let stroke = Stroke::new(1.0, GRID_LINE);
        let font = FontId::monospace(10.0);

        // Meridians
        let mut lon = (north_west.longitude / step).floor() * step;
        while lon <= south_east.longitude {
            let x = camera
                .geo_to_screen(GeoPoint::new(camera.center().latitude, lon), screen_rect)
                .x;
            if x >= area.left() && x <= area.right() {
                painter.line_segment(
                    [Pos2::new(x, area.top()), Pos2::new(x, area.bottom())],
                    stroke,
                );
                painter.text(
                    Pos2::new(x + 3.0, area.bottom() - 3.0),
                    Align2::LEFT_BOTTOM,
                    format_degrees(lon, step),
                    font.clone(),
                    GRID_LABEL,
                );
            }
            lon += step;
        }

        // Parallels
        let mut lat = (south_east.latitude / step).floor() * step;
        while lat <= north_west.latitude {
            let y = camera
                .geo_to_screen(GeoPoint::new(lat, camera.center().longitude), screen_rect)
                .y;
            if y >= area.top() && y <= area.bottom() {
                painter.line_segment(
                    [Pos2::new(area.left(), y), Pos2::new(area.right(), y)],
                    stroke,
                );
                painter.text(
                    Pos2::new(area.left() + 3.0, y - 2.0),
                    Align2::LEFT_BOTTOM,
                    format_degrees(lat, step),
                    font.clone(),
                    GRID_LABEL,
                );
            }
            lat += step;
        }
    }

    /// Pin with its tip on the marker position, popup above it
    pub fn paint_marker(
        painter: &Painter,
        camera: &MapCamera,
        screen_rect: Rect,
        marker: GeoPoint,
        popup: Option<&str>,
    ) {
        let tip = camera.geo_to_screen(marker, screen_rect);
        if !screen_rect.expand(20.0).contains(tip) {
            return;
        }

        let head = tip - Vec2::new(0.0, 22.0);
        painter.line_segment([tip, head], Stroke::new(3.0, MARKER_FILL));
        painter.circle_filled(head, 9.0, MARKER_FILL);
        painter.circle_filled(head, 3.5, Color32::WHITE);
        painter.circle_filled(tip, 2.0, Color32::from_black_alpha(90));

        if let Some(text) = popup {
            let galley =
                painter.layout_no_wrap(text.to_string(), FontId::proportional(13.0), POPUP_TEXT);
            let size = galley.size() + Vec2::new(16.0, 10.0);
            let rect = Rect::from_center_size(
                head - Vec2::new(0.0, 14.0 + size.y / 2.0),
                size,
            );
            painter.rect(rect, 6.0, POPUP_FILL, Stroke::new(1.0, GRID_LINE));
            painter.galley(rect.min + Vec2::new(8.0, 5.0), galley, POPUP_TEXT);
        }
    }

    pub fn paint_readout(painter: &Painter, screen_rect: Rect, zoom: f64, hovered: Option<GeoPoint>) {
        let text = match hovered {
            Some(point) => format!("{}  z{:.1}", point, zoom),
            None => format!("z{:.1}", zoom),
        };
        painter.text(
            screen_rect.right_top() + Vec2::new(-8.0, 8.0),
            Align2::RIGHT_TOP,
            text,
            FontId::monospace(11.0),
            GRID_LABEL,
        );
    }
}

/// Label with just enough decimals for `step`
fn format_degrees(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10()).ceil() as usize
    };
    format!("{:.*}°", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graticule_step_tracks_zoom() {
        // Zoom 1: 512 pt world, 0.703 deg/pt -> 80pt needs >= 56 deg, none qualify
        let coarse = graticule_step(360.0 / 512.0);
        assert_eq!(coarse, 30.0);

        // Zoom 13: ~0.00017 deg/pt -> 80pt needs >= 0.0137 deg
        let fine = graticule_step(360.0 / (256.0 * 8192.0));
        assert_eq!(fine, 0.02);
    }

    #[test]
    fn test_format_degrees_precision() {
        assert_eq!(format_degrees(84.0, 1.0), "84°");
        assert_eq!(format_degrees(28.25, 0.05), "28.25°");
        assert_eq!(format_degrees(83.98, 0.02), "83.98°");
    }
}
