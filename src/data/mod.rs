//! Dataset parsing and indexing.
//!
//! The raw collections are parsed once at startup and folded into an
//! immutable [`DatasetIndex`]; everything downstream reads through it.

mod index;
mod loader;
mod model;

pub use index::DatasetIndex;
pub use loader::{load_bikes, load_bio, load_birds, load_points, DataError};
pub use model::{BikeFeature, BioEntry, BirdFeature, Fid, PointFeature, RawBikeFeature};
