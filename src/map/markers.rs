//! Rendered point markers and detail rings.
//!
//! One marker per base feature, one ring per fid carrying bio data. The
//! registry owns all mutable display state; iteration order is insertion
//! order, which the sequencer relies on for bucketed reveals.

use std::collections::HashMap;

use eframe::egui::Color32;
use geo_types::Coord;

use crate::data::{DatasetIndex, Fid, PointFeature};
use crate::ui::colors;

/// Default marker radius in screen pixels.
pub const MARKER_RADIUS: f32 = 2.0;
/// Marker radius while hovered.
pub const MARKER_RADIUS_HOVER: f32 = 4.0;
/// Default detail-ring radius in screen pixels.
pub const RING_RADIUS: f32 = 7.5;
/// Detail-ring radius while hovered.
pub const RING_RADIUS_HOVER: f32 = 15.0;

/// A rendered point marker with mutable display state.
#[derive(Debug, Clone)]
pub struct PointMarker {
    pub fid: Fid,
    pub coord: Coord<f64>,
    pub color: Color32,
    pub radius: f32,
}

/// Secondary marker indicating auxiliary bio data; hidden outside the
/// chronological mode.
#[derive(Debug, Clone)]
pub struct DetailRing {
    pub fid: Fid,
    pub coord: Coord<f64>,
    pub visible: bool,
    pub radius: f32,
}

/// The set of markers and rings on the shared point layer.
#[derive(Default)]
pub struct MarkerRegistry {
    markers: Vec<PointMarker>,
    marker_by_fid: HashMap<Fid, usize>,
    rings: Vec<DetailRing>,
    ring_by_fid: HashMap<Fid, usize>,
}

impl MarkerRegistry {
    /// Builds the registry from the base features, creating a ring for
    /// every fid the index has bio data for.
    pub fn build(points: &[PointFeature], index: &DatasetIndex) -> Self {
        let mut registry = MarkerRegistry::default();
        for point in points {
            let marker_idx = registry.markers.len();
            registry.marker_by_fid.insert(point.fid.clone(), marker_idx);
            registry.markers.push(PointMarker {
                fid: point.fid.clone(),
                coord: point.coord,
                color: colors::markers::IDLE,
                radius: MARKER_RADIUS,
            });

            if index.has_bio(&point.fid) {
                let ring_idx = registry.rings.len();
                registry.ring_by_fid.insert(point.fid.clone(), ring_idx);
                registry.rings.push(DetailRing {
                    fid: point.fid.clone(),
                    coord: point.coord,
                    visible: false,
                    radius: RING_RADIUS,
                });
            }
        }
        registry
    }

    /// Resets every marker and ring to default display state. Called at
    /// the start of every mode switch.
    pub fn reset(&mut self) {
        for marker in &mut self.markers {
            marker.color = colors::markers::IDLE;
            marker.radius = MARKER_RADIUS;
        }
        for ring in &mut self.rings {
            ring.visible = false;
            ring.radius = RING_RADIUS;
        }
    }

    pub fn markers(&self) -> &[PointMarker] {
        &self.markers
    }

    pub fn rings(&self) -> &[DetailRing] {
        &self.rings
    }

    pub fn contains(&self, fid: &str) -> bool {
        self.marker_by_fid.contains_key(fid)
    }

    pub fn marker_mut(&mut self, fid: &str) -> Option<&mut PointMarker> {
        let idx = *self.marker_by_fid.get(fid)?;
        self.markers.get_mut(idx)
    }

    pub fn ring_mut(&mut self, fid: &str) -> Option<&mut DetailRing> {
        let idx = *self.ring_by_fid.get(fid)?;
        self.rings.get_mut(idx)
    }

    /// Colors a marker. Unknown fids are ignored.
    pub fn set_color(&mut self, fid: &str, color: Color32) {
        if let Some(marker) = self.marker_mut(fid) {
            marker.color = color;
        }
    }

    /// Makes a detail ring visible. Fids without a ring are ignored.
    pub fn show_ring(&mut self, fid: &str) {
        if let Some(ring) = self.ring_mut(fid) {
            ring.visible = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BioEntry;
    use chrono::NaiveDate;

    fn point(fid: &str, x: f64, y: f64) -> PointFeature {
        PointFeature {
            fid: fid.to_string(),
            coord: Coord { x, y },
        }
    }

    fn index_with_bio(fid: &str) -> DatasetIndex {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        DatasetIndex::build(
            Vec::new(),
            vec![BioEntry {
                fid: fid.to_string(),
                start_date: date,
                end_date: date,
                category: "travel".to_string(),
                title: "t".to_string(),
                details: String::new(),
            }],
            Vec::new(),
        )
    }

    #[test]
    fn test_build_preserves_insertion_order() {
        let points = vec![point("3", 0.0, 0.0), point("1", 1.0, 1.0), point("2", 2.0, 2.0)];
        let registry = MarkerRegistry::build(&points, &DatasetIndex::default());

        let fids: Vec<&str> = registry.markers().iter().map(|m| m.fid.as_str()).collect();
        assert_eq!(fids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_rings_only_for_bio_fids() {
        let points = vec![point("1", 0.0, 0.0), point("2", 1.0, 1.0)];
        let registry = MarkerRegistry::build(&points, &index_with_bio("2"));

        assert_eq!(registry.rings().len(), 1);
        assert_eq!(registry.rings()[0].fid, "2");
        assert!(!registry.rings()[0].visible);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let points = vec![point("1", 0.0, 0.0)];
        let mut registry = MarkerRegistry::build(&points, &index_with_bio("1"));

        registry.set_color("1", Color32::RED);
        registry.show_ring("1");
        registry.marker_mut("1").unwrap().radius = MARKER_RADIUS_HOVER;

        registry.reset();

        let marker = &registry.markers()[0];
        assert_eq!(marker.color, colors::markers::IDLE);
        assert_eq!(marker.radius, MARKER_RADIUS);
        assert!(!registry.rings()[0].visible);
        assert_eq!(registry.rings()[0].radius, RING_RADIUS);
    }

    #[test]
    fn test_unknown_fid_is_ignored() {
        let mut registry = MarkerRegistry::build(&[point("1", 0.0, 0.0)], &DatasetIndex::default());
        registry.set_color("99", Color32::RED);
        registry.show_ring("99");
        assert_eq!(registry.markers()[0].color, colors::markers::IDLE);
    }
}
