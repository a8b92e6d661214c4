//! Category sequencer: decides which markers become visible, in what
//! color, and in what temporal order for the selected mode.
//!
//! Planning is a pure function of (mode, index, registry) so every
//! sequencing rule is testable without a clock; playback happens on the
//! cancellable [`Timeline`].

mod strategy;
mod timeline;

pub use strategy::{Bucket, BucketStrategy, BIKE_DISTANCE, BIKE_ELEVATION, BIRD_SPECIES};
pub use timeline::{RevealStep, Timeline};

use chrono::NaiveDate;

use crate::data::DatasetIndex;
use crate::map::MarkerRegistry;
use crate::ui::colors;

/// Stagger between points within one bucket.
const STEP_STAGGER_MS: u64 = 100;
/// Pause before the middle bucket starts.
const BUCKET_PAUSE_MS: u64 = 500;
/// Pause before the final bucket starts.
const FINAL_BUCKET_PAUSE_MS: u64 = 1000;
/// Stride between chronological reveals.
const CHRONOLOGY_STRIDE_MS: u64 = 500;

/// Mutually exclusive visualization modes.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Biography events revealed in date order, optionally filtered to one
    /// category and/or cut off at a date.
    Chronology {
        category: Option<String>,
        until: Option<NaiveDate>,
    },
    /// Bird observations bucketed by species count.
    Birds,
    /// Bike routes bucketed by distance.
    BikeDistance,
    /// Bike routes bucketed by elevation gain.
    BikeElevation,
    /// Default colors, rings hidden, no legend.
    Reset,
}

impl Mode {
    /// The bucket strategy for magnitude modes; `None` for chronology and
    /// reset.
    pub fn strategy(&self) -> Option<&'static BucketStrategy> {
        match self {
            Mode::Birds => Some(&BIRD_SPECIES),
            Mode::BikeDistance => Some(&BIKE_DISTANCE),
            Mode::BikeElevation => Some(&BIKE_ELEVATION),
            Mode::Chronology { .. } | Mode::Reset => None,
        }
    }

    /// Short status line for the top bar.
    pub fn describe(&self) -> String {
        match self {
            Mode::Chronology {
                category: Some(c), ..
            } => format!("Timeline: {c}"),
            Mode::Chronology { .. } => "Timeline".to_string(),
            Mode::Birds => "Bird species count".to_string(),
            Mode::BikeDistance => "Bike routes by distance".to_string(),
            Mode::BikeElevation => "Bike routes by elevation gain".to_string(),
            Mode::Reset => "Ready".to_string(),
        }
    }
}

/// Computes the ordered reveal sequence for a mode.
///
/// Bucketed modes walk the registry in insertion order and partition the
/// markers that carry data for the category; buckets play back-to-back,
/// each point staggered 100 ms, with a 500 ms pause before the middle
/// bucket and 1000 ms before the final one. Chronology walks the globally
/// sorted bio timeline at a 500 ms stride.
pub fn plan(mode: &Mode, index: &DatasetIndex, registry: &MarkerRegistry) -> Vec<RevealStep> {
    match mode {
        Mode::Reset => Vec::new(),
        Mode::Chronology { category, until } => plan_chronology(index, registry, category, *until),
        Mode::Birds => plan_bucketed(registry, &BIRD_SPECIES, |fid| {
            index.bird(fid).map(|b| b.species_count as f64)
        }),
        Mode::BikeDistance => {
            plan_bucketed(registry, &BIKE_DISTANCE, |fid| {
                index.bike(fid).map(|b| b.distance)
            })
        }
        Mode::BikeElevation => plan_bucketed(registry, &BIKE_ELEVATION, |fid| {
            index.bike(fid).map(|b| b.elevation_gain)
        }),
    }
}

fn plan_chronology(
    index: &DatasetIndex,
    registry: &MarkerRegistry,
    category: &Option<String>,
    until: Option<NaiveDate>,
) -> Vec<RevealStep> {
    index
        .bio_timeline()
        .iter()
        .filter(|entry| until.is_none_or(|cutoff| entry.start_date <= cutoff))
        .filter(|entry| category.as_ref().is_none_or(|c| &entry.category == c))
        .filter(|entry| registry.contains(&entry.fid))
        .enumerate()
        .map(|(i, entry)| RevealStep {
            fid: entry.fid.clone(),
            delay_ms: i as u64 * CHRONOLOGY_STRIDE_MS,
            color: colors::markers::HIGHLIGHT,
            show_ring: true,
        })
        .collect()
}

fn plan_bucketed<F>(
    registry: &MarkerRegistry,
    strategy: &BucketStrategy,
    metric: F,
) -> Vec<RevealStep>
where
    F: Fn(&str) -> Option<f64>,
{
    let mut buckets: [Vec<&str>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    for marker in registry.markers() {
        if let Some(value) = metric(&marker.fid) {
            let slot = match strategy.bucket(value) {
                Bucket::Low => 0,
                Bucket::Medium => 1,
                Bucket::High => 2,
            };
            buckets[slot].push(marker.fid.as_str());
        }
    }

    let low_count = buckets[0].len() as u64;
    let medium_count = buckets[1].len() as u64;
    let starts = [
        0,
        low_count * STEP_STAGGER_MS + BUCKET_PAUSE_MS,
        (low_count + medium_count) * STEP_STAGGER_MS + FINAL_BUCKET_PAUSE_MS,
    ];
    let bucket_colors = [
        Bucket::Low.color(),
        Bucket::Medium.color(),
        Bucket::High.color(),
    ];

    let mut steps = Vec::with_capacity(buckets.iter().map(Vec::len).sum());
    for (slot, fids) in buckets.iter().enumerate() {
        for (i, fid) in fids.iter().enumerate() {
            steps.push(RevealStep {
                fid: (*fid).to_string(),
                delay_ms: starts[slot] + i as u64 * STEP_STAGGER_MS,
                color: bucket_colors[slot],
                show_ring: false,
            });
        }
    }
    steps
}

/// Applies one due step to the registry.
pub fn apply(step: &RevealStep, registry: &mut MarkerRegistry) {
    registry.set_color(&step.fid, step.color);
    if step.show_ring {
        registry.show_ring(&step.fid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{BioEntry, BirdFeature, PointFeature, RawBikeFeature};
    use eframe::egui::Color32;
    use geo_types::Coord;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn points(fids: &[&str]) -> Vec<PointFeature> {
        fids.iter()
            .map(|fid| PointFeature {
                fid: fid.to_string(),
                coord: Coord { x: 0.0, y: 0.0 },
            })
            .collect()
    }

    fn bird(fid: &str, count: u32) -> BirdFeature {
        BirdFeature {
            fid: fid.to_string(),
            has_birds: true,
            species_count: count,
            species_list: None,
        }
    }

    fn bio(fid: &str, start: NaiveDate, category: &str) -> BioEntry {
        BioEntry {
            fid: fid.to_string(),
            start_date: start,
            end_date: start,
            category: category.to_string(),
            title: format!("event {fid}"),
            details: String::new(),
        }
    }

    fn bike(fid: &str, distance: f64, elevation: f64) -> RawBikeFeature {
        RawBikeFeature {
            fid: fid.to_string(),
            distance: Some(distance),
            elevation_gain: Some(elevation),
        }
    }

    fn marker_color(registry: &MarkerRegistry, fid: &str) -> Color32 {
        registry
            .markers()
            .iter()
            .find(|m| m.fid == fid)
            .unwrap()
            .color
    }

    fn run_to_completion(mode: &Mode, index: &DatasetIndex, registry: &mut MarkerRegistry) {
        registry.reset();
        let mut timeline = Timeline::new();
        timeline.begin(plan(mode, index, registry));
        let due: Vec<RevealStep> = timeline.poll(u64::MAX).to_vec();
        for step in &due {
            apply(step, registry);
        }
    }

    #[test]
    fn test_bird_buckets_color_low_medium_high() {
        let index = DatasetIndex::build(
            vec![bird("1", 5), bird("2", 25), bird("3", 75)],
            Vec::new(),
            Vec::new(),
        );
        let mut registry = MarkerRegistry::build(&points(&["1", "2", "3"]), &index);

        run_to_completion(&Mode::Birds, &index, &mut registry);

        assert_eq!(marker_color(&registry, "1"), colors::buckets::LOW);
        assert_eq!(marker_color(&registry, "2"), colors::buckets::MEDIUM);
        assert_eq!(marker_color(&registry, "3"), colors::buckets::HIGH);
    }

    #[test]
    fn test_point_without_data_stays_idle() {
        let index = DatasetIndex::build(vec![bird("1", 5)], Vec::new(), Vec::new());
        let mut registry = MarkerRegistry::build(&points(&["1", "2"]), &index);

        let steps = plan(&Mode::Birds, &index, &registry);
        assert!(steps.iter().all(|s| s.fid != "2"));

        run_to_completion(&Mode::Birds, &index, &mut registry);
        assert_eq!(marker_color(&registry, "2"), colors::markers::IDLE);
    }

    #[test]
    fn test_bucket_delay_schedule() {
        // Two low, one medium, two high points in insertion order.
        let index = DatasetIndex::build(
            vec![
                bird("1", 3),
                bird("2", 60),
                bird("3", 8),
                bird("4", 20),
                bird("5", 90),
            ],
            Vec::new(),
            Vec::new(),
        );
        let registry = MarkerRegistry::build(&points(&["1", "2", "3", "4", "5"]), &index);

        let steps = plan(&Mode::Birds, &index, &registry);
        let delay = |fid: &str| steps.iter().find(|s| s.fid == fid).unwrap().delay_ms;

        // Low bucket staggers from zero in insertion order.
        assert_eq!(delay("1"), 0);
        assert_eq!(delay("3"), 100);
        // Medium starts after all low points plus the 500 ms pause.
        assert_eq!(delay("4"), 2 * 100 + 500);
        // High starts after all prior points plus the 1000 ms pause.
        assert_eq!(delay("2"), 3 * 100 + 1000);
        assert_eq!(delay("5"), 3 * 100 + 1000 + 100);
    }

    #[test]
    fn test_bike_modes_use_their_metric() {
        let index = DatasetIndex::build(
            Vec::new(),
            Vec::new(),
            vec![bike("1", 30.0, 1500.0), bike("2", 250.0, 50.0)],
        );
        let mut registry = MarkerRegistry::build(&points(&["1", "2"]), &index);

        run_to_completion(&Mode::BikeDistance, &index, &mut registry);
        assert_eq!(marker_color(&registry, "1"), colors::buckets::LOW);
        assert_eq!(marker_color(&registry, "2"), colors::buckets::HIGH);

        run_to_completion(&Mode::BikeElevation, &index, &mut registry);
        assert_eq!(marker_color(&registry, "1"), colors::buckets::HIGH);
        assert_eq!(marker_color(&registry, "2"), colors::buckets::LOW);
    }

    #[test]
    fn test_chronology_orders_by_date() {
        let index = DatasetIndex::build(
            Vec::new(),
            vec![
                bio("1", date(1920, 1, 1), "travel"),
                bio("2", date(1850, 1, 1), "travel"),
            ],
            Vec::new(),
        );
        let registry = MarkerRegistry::build(&points(&["1", "2"]), &index);

        let steps = plan(
            &Mode::Chronology {
                category: None,
                until: None,
            },
            &index,
            &registry,
        );

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].fid, "2");
        assert_eq!(steps[0].delay_ms, 0);
        assert!(steps[0].show_ring);
        assert_eq!(steps[1].fid, "1");
        assert_eq!(steps[1].delay_ms, 500);
        assert!(steps.iter().all(|s| s.color == colors::markers::HIGHLIGHT));
    }

    #[test]
    fn test_chronology_cutoff_date() {
        let index = DatasetIndex::build(
            Vec::new(),
            vec![
                bio("1", date(1850, 1, 1), "travel"),
                bio("2", date(1900, 1, 1), "travel"),
                bio("3", date(1900, 1, 2), "travel"),
            ],
            Vec::new(),
        );
        let registry = MarkerRegistry::build(&points(&["1", "2", "3"]), &index);

        let steps = plan(
            &Mode::Chronology {
                category: None,
                until: Some(date(1900, 1, 1)),
            },
            &index,
            &registry,
        );

        let fids: Vec<&str> = steps.iter().map(|s| s.fid.as_str()).collect();
        assert_eq!(fids, vec!["1", "2"]);
    }

    #[test]
    fn test_chronology_category_filter() {
        let index = DatasetIndex::build(
            Vec::new(),
            vec![
                bio("1", date(1850, 1, 1), "travel"),
                bio("2", date(1860, 1, 1), "work"),
            ],
            Vec::new(),
        );
        let registry = MarkerRegistry::build(&points(&["1", "2"]), &index);

        let steps = plan(
            &Mode::Chronology {
                category: Some("work".to_string()),
                until: None,
            },
            &index,
            &registry,
        );

        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].fid, "2");
    }

    #[test]
    fn test_chronology_skips_entries_without_marker() {
        let index = DatasetIndex::build(
            Vec::new(),
            vec![bio("99", date(1850, 1, 1), "travel")],
            Vec::new(),
        );
        let registry = MarkerRegistry::build(&points(&["1"]), &index);

        let steps = plan(
            &Mode::Chronology {
                category: None,
                until: None,
            },
            &index,
            &registry,
        );
        assert!(steps.is_empty());
    }

    #[test]
    fn test_mode_switch_leaves_no_stale_state() {
        let index = DatasetIndex::build(
            vec![bird("1", 5)],
            vec![bio("2", date(1850, 1, 1), "travel")],
            Vec::new(),
        );
        let mut registry = MarkerRegistry::build(&points(&["1", "2"]), &index);
        let mut timeline = Timeline::new();

        // Start birds, let only part of it play.
        timeline.begin(plan(&Mode::Birds, &index, &registry));
        for step in timeline.poll(0).to_vec() {
            apply(&step, &mut registry);
        }

        // Switch to chronology: reset then begin, as the app does.
        registry.reset();
        timeline.begin(plan(
            &Mode::Chronology {
                category: None,
                until: None,
            },
            &index,
            &registry,
        ));
        for step in timeline.poll(u64::MAX).to_vec() {
            apply(&step, &mut registry);
        }

        // No marker retains bird-mode coloring.
        assert_eq!(marker_color(&registry, "1"), colors::markers::IDLE);
        assert_eq!(marker_color(&registry, "2"), colors::markers::HIGHLIGHT);
        assert!(registry.rings().iter().all(|r| r.visible == (r.fid == "2")));
    }

    #[test]
    fn test_repeated_mode_is_idempotent() {
        let index = DatasetIndex::build(
            vec![bird("1", 5), bird("2", 75)],
            Vec::new(),
            Vec::new(),
        );
        let mut registry = MarkerRegistry::build(&points(&["1", "2"]), &index);

        run_to_completion(&Mode::Birds, &index, &mut registry);
        let first: Vec<Color32> = registry.markers().iter().map(|m| m.color).collect();

        run_to_completion(&Mode::Birds, &index, &mut registry);
        let second: Vec<Color32> = registry.markers().iter().map(|m| m.color).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_reset_mode_plans_nothing() {
        let index = DatasetIndex::build(vec![bird("1", 5)], Vec::new(), Vec::new());
        let registry = MarkerRegistry::build(&points(&["1"]), &index);
        assert!(plan(&Mode::Reset, &index, &registry).is_empty());
    }
}
