//! Map layer: projection, basemap, and the rendered point layer.

mod basemap;
mod markers;
mod projection;

pub use basemap::Basemap;
pub use markers::{
    DetailRing, MarkerRegistry, PointMarker, MARKER_RADIUS, MARKER_RADIUS_HOVER, RING_RADIUS,
    RING_RADIUS_HOVER,
};
pub use projection::{MapProjection, MAX_ZOOM, MIN_ZOOM};
