//! Core dataset records shared across the application.
//!
//! Every dataset is keyed by a feature identifier (`fid`), a
//! string-normalized integer that joins the point geometry to its
//! per-category attribute records.

use chrono::NaiveDate;
use geo_types::Coord;

/// Feature identifier joining the datasets. Always string-normalized so
/// numeric and string-typed source values compare equal.
pub type Fid = String;

/// Normalizes a raw JSON fid value (number or string) to its canonical form.
pub fn normalize_fid(value: &serde_json::Value) -> Option<Fid> {
    match value {
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::String(s) => Some(s.trim().to_string()),
        _ => None,
    }
}

/// A base point geometry with its identifier.
#[derive(Debug, Clone)]
pub struct PointFeature {
    pub fid: Fid,
    pub coord: Coord<f64>,
}

/// A biography event tied to a location.
#[derive(Debug, Clone, PartialEq)]
pub struct BioEntry {
    pub fid: Fid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category: String,
    pub title: String,
    pub details: String,
}

/// Bird observation data for a location.
#[derive(Debug, Clone)]
pub struct BirdFeature {
    pub fid: Fid,
    /// Source encodes this as a 0/1 integer; locations with 0 carry no
    /// meaningful observation and are dropped at index time.
    pub has_birds: bool,
    pub species_count: u32,
    pub species_list: Option<String>,
}

/// Bike route metrics for a location. Both metrics may be absent in the
/// source; the index only keeps records with both present.
#[derive(Debug, Clone)]
pub struct RawBikeFeature {
    pub fid: Fid,
    pub distance: Option<f64>,
    pub elevation_gain: Option<f64>,
}

/// A fully-populated bike record as stored in the index.
#[derive(Debug, Clone)]
pub struct BikeFeature {
    pub fid: Fid,
    /// Route distance in miles.
    pub distance: f64,
    /// Elevation gain in feet.
    pub elevation_gain: f64,
}
