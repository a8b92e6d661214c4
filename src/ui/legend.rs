//! Legend for the bucketed-magnitude modes.
//!
//! A pure function of the mode's bucket strategy; absent in chronological
//! and reset modes. Drawn fresh every frame, so a mode switch replaces it
//! by construction.

use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Vec2};

use crate::sequencer::{Bucket, Mode};

use super::colors;

/// Offset of the legend anchor from the canvas bottom-right corner.
const ANCHOR_OFFSET: Vec2 = Vec2::new(-200.0, -120.0);
/// Vertical spacing between legend rows.
const ROW_SPACING: f32 = 25.0;
/// Swatch circle radius.
const SWATCH_RADIUS: f32 = 5.0;

/// Resolved legend content: a title plus three color/label rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    pub title: &'static str,
    pub rows: [(Color32, &'static str); 3],
}

/// The legend for a mode, or `None` for modes that suppress it.
pub fn legend_for(mode: &Mode) -> Option<Legend> {
    let strategy = mode.strategy()?;
    Some(Legend {
        title: strategy.title,
        rows: [
            (Bucket::Low.color(), strategy.labels[0]),
            (Bucket::Medium.color(), strategy.labels[1]),
            (Bucket::High.color(), strategy.labels[2]),
        ],
    })
}

/// Draws the legend anchored near the bottom-right of the canvas.
pub fn draw(painter: &Painter, canvas: Rect, legend: &Legend) {
    let origin = canvas.right_bottom() + ANCHOR_OFFSET;

    painter.text(
        origin,
        Align2::LEFT_BOTTOM,
        legend.title,
        FontId::proportional(13.0),
        colors::overlay::TITLE,
    );

    for (i, (color, label)) in legend.rows.iter().enumerate() {
        let y = origin.y + (i as f32 + 1.0) * ROW_SPACING;
        painter.circle_filled(Pos2::new(origin.x, y), SWATCH_RADIUS, *color);
        painter.text(
            Pos2::new(origin.x + 15.0, y),
            Align2::LEFT_CENTER,
            *label,
            FontId::proportional(12.0),
            colors::overlay::TEXT,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chronology_and_reset_have_no_legend() {
        assert!(legend_for(&Mode::Chronology {
            category: None,
            until: None
        })
        .is_none());
        assert!(legend_for(&Mode::Reset).is_none());
    }

    #[test]
    fn test_bucketed_modes_have_titled_legends() {
        let birds = legend_for(&Mode::Birds).unwrap();
        assert_eq!(birds.title, "Bird Species Count");
        assert_eq!(birds.rows[0].1, "1-10 species");

        let distance = legend_for(&Mode::BikeDistance).unwrap();
        assert_eq!(distance.title, "Distance (miles)");

        let elevation = legend_for(&Mode::BikeElevation).unwrap();
        assert_eq!(elevation.title, "Elevation Gain (ft)");
        assert_eq!(elevation.rows[2].1, "1000+ ft");
    }
}
