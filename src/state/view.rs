//! Map view state (zoom and pan).

use eframe::egui::Vec2;

use crate::map::{MAX_ZOOM, MIN_ZOOM};

/// Zoom/pan state for the whole point layer. Applied as one transform;
/// independent of the sequencer.
pub struct ViewState {
    /// Current zoom level (1.0 = whole world).
    pub zoom: f32,

    /// Current pan offset from center in screen pixels.
    pub pan_offset: Vec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_offset: Vec2::ZERO,
        }
    }
}

impl ViewState {
    /// Applies a zoom factor, clamped to the allowed range.
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Restores the default view.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_offset = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_clamped_to_range() {
        let mut view = ViewState::default();
        view.zoom_by(100.0);
        assert_eq!(view.zoom, MAX_ZOOM);
        view.zoom_by(0.0001);
        assert_eq!(view.zoom, MIN_ZOOM);
    }
}
