//! Centralized color constants for the UI.
//!
//! This module provides consistent colors across all panels and the map
//! canvas.

use eframe::egui::Color32;

/// Colors for point markers and detail rings.
pub mod markers {
    use super::Color32;

    /// Default/idle marker color (slate).
    pub const IDLE: Color32 = Color32::from_rgb(45, 55, 72);
    /// Chronological-highlight color (violet).
    pub const HIGHLIGHT: Color32 = Color32::from_rgb(188, 19, 254);
    /// Detail ring stroke.
    pub const RING_STROKE: Color32 = Color32::from_rgb(160, 174, 192);
}

/// Magnitude bucket colors, low to high.
pub mod buckets {
    use super::Color32;

    /// Low band (gold).
    pub const LOW: Color32 = Color32::from_rgb(255, 215, 0);
    /// Medium band (orange).
    pub const MEDIUM: Color32 = Color32::from_rgb(255, 165, 0);
    /// High band (red).
    pub const HIGH: Color32 = Color32::from_rgb(255, 0, 0);
}

/// Colors for the map canvas.
pub mod canvas {
    use super::Color32;

    /// Background color.
    pub const BACKGROUND: Color32 = Color32::from_rgb(26, 26, 26);
    /// Land polygon outline.
    pub const LAND_OUTLINE: Color32 = Color32::from_rgb(70, 80, 100);
}

/// General UI colors for labels and values.
pub mod ui {
    use super::Color32;

    /// Muted gray for inactive nav links and labels.
    pub const LABEL: Color32 = Color32::from_rgb(160, 160, 160);
    /// Emphasized color for the active nav link.
    pub const ACTIVE: Color32 = Color32::WHITE;
    /// Error text shown in place of the map.
    pub const ERROR: Color32 = Color32::from_rgb(248, 113, 113);
}

/// Colors for the legend and tooltip overlays.
pub mod overlay {
    use super::Color32;

    /// Legend/tooltip title text.
    pub const TITLE: Color32 = Color32::WHITE;
    /// Legend/tooltip body text.
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
    /// Tooltip background.
    pub const TOOLTIP_BACKGROUND: Color32 = Color32::from_rgb(45, 55, 72);
}
