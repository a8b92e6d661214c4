//! Dataset parsing.
//!
//! The point, bird, and bike collections are GeoJSON feature collections;
//! the biography events are a plain JSON document. Individual malformed
//! features are skipped with a warning so one bad record cannot take down
//! an otherwise usable dataset; only an unparseable document is an error.

use chrono::NaiveDate;
use geo_types::Coord;
use geojson::{Feature, GeoJson, Value};
use serde::Deserialize;
use thiserror::Error;

use super::model::{normalize_fid, BioEntry, BirdFeature, Fid, PointFeature, RawBikeFeature};

/// Errors raised while parsing a dataset document.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to parse GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a FeatureCollection, got {0}")]
    NotACollection(&'static str),
}

/// Parses the base point centroids.
pub fn load_points(geojson_str: &str) -> Result<Vec<PointFeature>, DataError> {
    let mut points = Vec::new();
    for feature in feature_collection(geojson_str)? {
        let Some(fid) = feature_fid(&feature) else {
            log::warn!("Skipping point feature without fid");
            continue;
        };
        let Some(coord) = point_coord(&feature) else {
            log::warn!("Skipping point feature {fid} without point geometry");
            continue;
        };
        points.push(PointFeature { fid, coord });
    }
    Ok(points)
}

/// Parses the bird observation collection.
pub fn load_birds(geojson_str: &str) -> Result<Vec<BirdFeature>, DataError> {
    let mut birds = Vec::new();
    for feature in feature_collection(geojson_str)? {
        let Some(fid) = feature_fid(&feature) else {
            log::warn!("Skipping bird feature without fid");
            continue;
        };
        let has_birds = property_u64(&feature, "has_birds").unwrap_or(0) == 1;
        let species_count = property_u64(&feature, "species_count").unwrap_or(0) as u32;
        let species_list = feature
            .property("species_list")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());
        birds.push(BirdFeature {
            fid,
            has_birds,
            species_count,
            species_list,
        });
    }
    Ok(birds)
}

/// Parses the bike route collection. Missing metrics are preserved as
/// `None`; the index filters incomplete records.
pub fn load_bikes(geojson_str: &str) -> Result<Vec<RawBikeFeature>, DataError> {
    let mut bikes = Vec::new();
    for feature in feature_collection(geojson_str)? {
        let Some(fid) = feature_fid(&feature) else {
            log::warn!("Skipping bike feature without fid");
            continue;
        };
        let distance = feature.property("distance").and_then(|v| v.as_f64());
        let elevation_gain = feature.property("elevation_gain").and_then(|v| v.as_f64());
        bikes.push(RawBikeFeature {
            fid,
            distance,
            elevation_gain,
        });
    }
    Ok(bikes)
}

/// Raw biography document shape.
#[derive(Deserialize)]
struct BioDocument {
    features: Vec<RawBioEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBioEntry {
    fid: serde_json::Value,
    start_date: String,
    end_date: String,
    category: String,
    title: String,
    details: String,
}

/// Parses the biography events document.
pub fn load_bio(json_str: &str) -> Result<Vec<BioEntry>, DataError> {
    let document: BioDocument = serde_json::from_str(json_str)?;

    let mut entries = Vec::new();
    for raw in document.features {
        let Some(fid) = normalize_fid(&raw.fid) else {
            log::warn!("Skipping bio entry without fid: {:?}", raw.title);
            continue;
        };
        let (Some(start_date), Some(end_date)) =
            (parse_date(&raw.start_date), parse_date(&raw.end_date))
        else {
            log::warn!("Skipping bio entry {fid} with unparseable dates");
            continue;
        };
        entries.push(BioEntry {
            fid,
            start_date,
            end_date,
            category: raw.category,
            title: raw.title,
            details: raw.details,
        });
    }
    Ok(entries)
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

fn feature_collection(geojson_str: &str) -> Result<Vec<Feature>, DataError> {
    match geojson_str.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(fc) => Ok(fc.features),
        GeoJson::Feature(_) => Err(DataError::NotACollection("Feature")),
        GeoJson::Geometry(_) => Err(DataError::NotACollection("Geometry")),
    }
}

fn feature_fid(feature: &Feature) -> Option<Fid> {
    feature.property("fid").and_then(normalize_fid)
}

fn property_u64(feature: &Feature, key: &str) -> Option<u64> {
    feature.property(key).and_then(|v| v.as_u64())
}

fn point_coord(feature: &Feature) -> Option<Coord<f64>> {
    match &feature.geometry.as_ref()?.value {
        Value::Point(coords) if coords.len() >= 2 => Some(Coord {
            x: coords[0],
            y: coords[1],
        }),
        _ => None,
    }
}
