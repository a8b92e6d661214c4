//! World land basemap loaded from GeoJSON.

use eframe::egui::{Painter, Pos2, Shape, Stroke};
use geo_types::Coord;
use geojson::{Feature, GeoJson, Value};

use crate::data::DataError;
use crate::ui::colors;

use super::MapProjection;

/// A single land polygon outline. Holes are retained for completeness but
/// rendered as outlines like the exteriors.
#[derive(Debug, Clone)]
pub struct LandPolygon {
    pub exterior: Vec<Coord<f64>>,
    pub holes: Vec<Vec<Coord<f64>>>,
}

/// The land-boundary layer drawn beneath the point markers.
#[derive(Default)]
pub struct Basemap {
    pub polygons: Vec<LandPolygon>,
}

impl Basemap {
    /// Loads land polygons from a GeoJSON document. Non-polygon features
    /// are ignored.
    pub fn from_geojson(geojson_str: &str) -> Result<Self, DataError> {
        let geojson: GeoJson = geojson_str.parse()?;

        let mut basemap = Basemap::default();
        match geojson {
            GeoJson::FeatureCollection(fc) => {
                for feature in fc.features {
                    basemap.add_feature(&feature);
                }
            }
            GeoJson::Feature(feature) => basemap.add_feature(&feature),
            GeoJson::Geometry(geometry) => basemap.add_geometry(&geometry.value),
        }
        Ok(basemap)
    }

    fn add_feature(&mut self, feature: &Feature) {
        if let Some(geometry) = &feature.geometry {
            self.add_geometry(&geometry.value);
        }
    }

    fn add_geometry(&mut self, value: &Value) {
        match value {
            Value::Polygon(rings) => {
                if let Some(polygon) = convert_rings(rings) {
                    self.polygons.push(polygon);
                }
            }
            Value::MultiPolygon(polygons) => {
                for rings in polygons {
                    if let Some(polygon) = convert_rings(rings) {
                        self.polygons.push(polygon);
                    }
                }
            }
            _ => {}
        }
    }

    /// Renders the land outlines to the canvas.
    ///
    /// Polygons are drawn as outlines; filling would require tessellation
    /// of concave rings.
    pub fn render(&self, painter: &Painter, projection: &MapProjection) {
        let stroke = Stroke::new(1.0, colors::canvas::LAND_OUTLINE);
        for polygon in &self.polygons {
            render_ring(painter, &polygon.exterior, projection, stroke);
            for hole in &polygon.holes {
                render_ring(painter, hole, projection, stroke);
            }
        }
    }
}

fn convert_rings(rings: &[Vec<Vec<f64>>]) -> Option<LandPolygon> {
    let mut iter = rings.iter().map(|ring| {
        ring.iter()
            .filter(|c| c.len() >= 2)
            .map(|c| Coord { x: c[0], y: c[1] })
            .collect::<Vec<_>>()
    });
    let exterior = iter.next()?;
    if exterior.is_empty() {
        return None;
    }
    Some(LandPolygon {
        exterior,
        holes: iter.collect(),
    })
}

fn render_ring(
    painter: &Painter,
    ring: &[Coord<f64>],
    projection: &MapProjection,
    stroke: Stroke,
) {
    if ring.len() < 2 {
        return;
    }
    let points: Vec<Pos2> = ring.iter().map(|c| projection.geo_to_screen(*c)).collect();
    painter.add(Shape::closed_line(points, stroke));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_and_multipolygon_load() {
        let data = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{},"geometry":{"type":"Polygon","coordinates":[[[0,0],[10,0],[10,10],[0,0]]]}},
            {"type":"Feature","properties":{},"geometry":{"type":"MultiPolygon","coordinates":[[[[20,20],[30,20],[30,30],[20,20]]],[[[40,40],[50,40],[50,50],[40,40]]]]}}
        ]}"#;
        let basemap = Basemap::from_geojson(data).unwrap();
        assert_eq!(basemap.polygons.len(), 3);
        assert_eq!(basemap.polygons[0].exterior.len(), 4);
    }

    #[test]
    fn test_non_polygon_features_ignored() {
        let data = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[0,0]}}
        ]}"#;
        let basemap = Basemap::from_geojson(data).unwrap();
        assert!(basemap.polygons.is_empty());
    }
}
