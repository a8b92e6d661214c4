//! Immutable dataset lookup tables.
//!
//! Built once after the datasets parse and read-only thereafter. All
//! per-fid bio lists and the flattened timeline are sorted ascending by
//! start date with a stable sort, so entries sharing a date keep their
//! source order.

use std::collections::HashMap;

use super::model::{BikeFeature, BioEntry, BirdFeature, Fid, RawBikeFeature};

/// Lookup tables joining the auxiliary datasets by fid.
#[derive(Default)]
pub struct DatasetIndex {
    birds: HashMap<Fid, BirdFeature>,
    bio: HashMap<Fid, Vec<BioEntry>>,
    bikes: HashMap<Fid, BikeFeature>,
    /// All bio entries across every fid, globally sorted by start date.
    bio_timeline: Vec<BioEntry>,
}

impl DatasetIndex {
    /// Builds the index. Bird records without an observation and bike
    /// records missing either metric are dropped here.
    pub fn build(
        birds: Vec<BirdFeature>,
        bio_entries: Vec<BioEntry>,
        bikes: Vec<RawBikeFeature>,
    ) -> Self {
        let birds: HashMap<Fid, BirdFeature> = birds
            .into_iter()
            .filter(|b| b.has_birds)
            .map(|b| (b.fid.clone(), b))
            .collect();

        let bikes: HashMap<Fid, BikeFeature> = bikes
            .into_iter()
            .filter_map(|raw| {
                Some(BikeFeature {
                    distance: raw.distance?,
                    elevation_gain: raw.elevation_gain?,
                    fid: raw.fid,
                })
            })
            .map(|b| (b.fid.clone(), b))
            .collect();

        let mut bio: HashMap<Fid, Vec<BioEntry>> = HashMap::new();
        let mut bio_timeline = Vec::with_capacity(bio_entries.len());
        for entry in bio_entries {
            bio.entry(entry.fid.clone()).or_default().push(entry.clone());
            bio_timeline.push(entry);
        }
        for entries in bio.values_mut() {
            entries.sort_by_key(|e| e.start_date);
        }
        bio_timeline.sort_by_key(|e| e.start_date);

        Self {
            birds,
            bio,
            bikes,
            bio_timeline,
        }
    }

    /// Bird observation for a fid, if any.
    pub fn bird(&self, fid: &str) -> Option<&BirdFeature> {
        self.birds.get(fid)
    }

    /// Bio entries for a fid in ascending start-date order.
    pub fn bio_entries(&self, fid: &str) -> &[BioEntry] {
        self.bio.get(fid).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a fid has any bio entry (and therefore a detail ring).
    pub fn has_bio(&self, fid: &str) -> bool {
        self.bio.contains_key(fid)
    }

    /// Bike metrics for a fid, if both were present in the source.
    pub fn bike(&self, fid: &str) -> Option<&BikeFeature> {
        self.bikes.get(fid)
    }

    /// All bio entries globally sorted by start date.
    pub fn bio_timeline(&self) -> &[BioEntry] {
        &self.bio_timeline
    }

    /// Distinct bio categories in first-appearance order of the timeline.
    pub fn bio_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for entry in &self.bio_timeline {
            if !categories.contains(&entry.category) {
                categories.push(entry.category.clone());
            }
        }
        categories
    }
}
