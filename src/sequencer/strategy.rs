//! Bucketed-magnitude reveal strategies.
//!
//! One parameterized record per category replaces what would otherwise be
//! three copies of the same partition-and-animate logic. Thresholds are
//! inclusive upper bounds: a value equal to `low_max` is still Low, equal
//! to `medium_max` is still Medium.

use eframe::egui::Color32;

use crate::ui::colors;

/// Magnitude band a value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Low,
    Medium,
    High,
}

impl Bucket {
    /// Reveal color for this band.
    pub fn color(&self) -> Color32 {
        match self {
            Bucket::Low => colors::buckets::LOW,
            Bucket::Medium => colors::buckets::MEDIUM,
            Bucket::High => colors::buckets::HIGH,
        }
    }
}

/// Thresholds and legend text for one bucketed category.
#[derive(Debug, Clone, Copy)]
pub struct BucketStrategy {
    /// Legend title.
    pub title: &'static str,
    /// Legend labels for the low/medium/high bands.
    pub labels: [&'static str; 3],
    /// Inclusive upper bound of the Low band.
    pub low_max: f64,
    /// Inclusive upper bound of the Medium band.
    pub medium_max: f64,
}

impl BucketStrategy {
    /// Assigns a value to its band. Total and disjoint: every value lands
    /// in exactly one band.
    pub fn bucket(&self, value: f64) -> Bucket {
        if value <= self.low_max {
            Bucket::Low
        } else if value <= self.medium_max {
            Bucket::Medium
        } else {
            Bucket::High
        }
    }
}

/// Bird species count bands.
pub const BIRD_SPECIES: BucketStrategy = BucketStrategy {
    title: "Bird Species Count",
    labels: ["1-10 species", "11-50 species", "50+ species"],
    low_max: 10.0,
    medium_max: 50.0,
};

/// Bike route distance bands (miles).
pub const BIKE_DISTANCE: BucketStrategy = BucketStrategy {
    title: "Distance (miles)",
    labels: ["0.1 - 50 miles", "50 - 199 miles", "200+ miles"],
    low_max: 50.0,
    medium_max: 199.0,
};

/// Bike route elevation gain bands (feet).
pub const BIKE_ELEVATION: BucketStrategy = BucketStrategy {
    title: "Elevation Gain (ft)",
    labels: ["1 - 100 ft", "100 - 1000 ft", "1000+ ft"],
    low_max: 100.0,
    medium_max: 1000.0,
};
