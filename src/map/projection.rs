//! Map projection and coordinate transformation.
//!
//! Converts between geographic coordinates (lon/lat) and screen
//! coordinates for rendering on the canvas.

use eframe::egui::{Pos2, Rect, Vec2};
use geo_types::Coord;

/// Minimum zoom level for the world view.
pub const MIN_ZOOM: f32 = 1.0;
/// Maximum zoom level for the world view.
pub const MAX_ZOOM: f32 = 8.0;

/// Projection from geographic to screen coordinates.
#[derive(Debug, Clone)]
pub struct MapProjection {
    /// Center latitude of the view.
    pub center_lat: f64,
    /// Center longitude of the view.
    pub center_lon: f64,
    /// Visible longitude half-span in degrees at zoom 1.
    pub range_deg: f64,
    /// Current zoom level.
    pub zoom: f32,
    /// Pan offset in screen pixels.
    pub pan_offset: Vec2,
    /// Screen rectangle for the canvas.
    pub screen_rect: Rect,
}

impl Default for MapProjection {
    fn default() -> Self {
        Self {
            // Whole-world view, nudged north since most land is there
            center_lat: 15.0,
            center_lon: 0.0,
            range_deg: 180.0,
            zoom: 1.0,
            pan_offset: Vec2::ZERO,
            screen_rect: Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0)),
        }
    }
}

impl MapProjection {
    /// Updates the projection with current view state.
    pub fn update(&mut self, zoom: f32, pan_offset: Vec2, screen_rect: Rect) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.pan_offset = pan_offset;
        self.screen_rect = screen_rect;
    }

    /// Converts geographic coordinates (lon, lat) to screen position.
    ///
    /// Uses a simple equirectangular projection, adequate for a schematic
    /// world basemap behind point markers.
    pub fn geo_to_screen(&self, coord: Coord<f64>) -> Pos2 {
        let effective_range = self.range_deg / self.zoom as f64;

        let rel_lon = coord.x - self.center_lon;
        let rel_lat = coord.y - self.center_lat;

        // Normalized coordinates (-1 to 1 across the visible span)
        let norm_x = rel_lon / effective_range;
        let norm_y = -rel_lat / effective_range; // Screen Y increases downward

        let center = self.screen_rect.center() + self.pan_offset;
        let half_size = self.screen_rect.width() / 2.0;

        Pos2::new(
            center.x + (norm_x as f32) * half_size,
            center.y + (norm_y as f32) * half_size,
        )
    }

    /// Converts screen position to geographic coordinates (lon, lat).
    pub fn screen_to_geo(&self, pos: Pos2) -> Coord<f64> {
        let effective_range = self.range_deg / self.zoom as f64;

        let center = self.screen_rect.center() + self.pan_offset;
        let half_size = self.screen_rect.width() / 2.0;

        let norm_x = (pos.x - center.x) / half_size;
        let norm_y = (pos.y - center.y) / half_size;

        Coord {
            x: self.center_lon + (norm_x as f64) * effective_range,
            y: self.center_lat - (norm_y as f64) * effective_range,
        }
    }

    /// Returns the visible geographic bounds as (min_lon, min_lat, max_lon, max_lat).
    pub fn visible_bounds(&self) -> (f64, f64, f64, f64) {
        let top_left = self.screen_to_geo(self.screen_rect.left_top());
        let bottom_right = self.screen_to_geo(self.screen_rect.right_bottom());

        (
            top_left.x.min(bottom_right.x),
            top_left.y.min(bottom_right.y),
            top_left.x.max(bottom_right.x),
            top_left.y.max(bottom_right.y),
        )
    }

    /// Checks if a coordinate is within the visible bounds (with margin).
    pub fn is_visible(&self, coord: Coord<f64>, margin_deg: f64) -> bool {
        let (min_lon, min_lat, max_lon, max_lat) = self.visible_bounds();
        coord.x >= min_lon - margin_deg
            && coord.x <= max_lon + margin_deg
            && coord.y >= min_lat - margin_deg
            && coord.y <= max_lat + margin_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_screen_center() {
        let projection = MapProjection::default();
        let pos = projection.geo_to_screen(Coord { x: 0.0, y: 15.0 });
        let center = projection.screen_rect.center();
        assert!((pos.x - center.x).abs() < 0.001);
        assert!((pos.y - center.y).abs() < 0.001);
    }

    #[test]
    fn test_round_trip() {
        let mut projection = MapProjection::default();
        projection.update(
            3.0,
            Vec2::new(40.0, -25.0),
            Rect::from_min_size(Pos2::ZERO, Vec2::new(1024.0, 640.0)),
        );

        let coord = Coord { x: -73.5, y: 45.5 };
        let back = projection.screen_to_geo(projection.geo_to_screen(coord));
        assert!((back.x - coord.x).abs() < 1e-6);
        assert!((back.y - coord.y).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut projection = MapProjection::default();
        projection.update(0.2, Vec2::ZERO, projection.screen_rect);
        assert_eq!(projection.zoom, MIN_ZOOM);
        projection.update(20.0, Vec2::ZERO, projection.screen_rect);
        assert_eq!(projection.zoom, MAX_ZOOM);
    }
}
