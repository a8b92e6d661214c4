//! Navigation and filter state.

use crate::sequencer::Mode;

/// Content sections reachable from the top bar. Each maps to a sequencer
/// mode; sections without their own visualization reset the map.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    #[default]
    Bio,
    Birds,
    Bikes,
    About,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::Bio => "Bio",
            Section::Birds => "Birds",
            Section::Bikes => "Bikes",
            Section::About => "About",
        }
    }

    pub fn all() -> &'static [Section] {
        &[Section::Bio, Section::Birds, Section::Bikes, Section::About]
    }

    /// The sequencer mode a click on this section invokes.
    pub fn mode(&self) -> Mode {
        match self {
            Section::Bio => Mode::Chronology {
                category: None,
                until: None,
            },
            Section::Birds => Mode::Birds,
            // Distance is the default sub-view for the bike section.
            Section::Bikes => Mode::BikeDistance,
            Section::About => Mode::Reset,
        }
    }
}

/// Bike sub-view selector.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum BikeMetric {
    #[default]
    Distance,
    Elevation,
}

impl BikeMetric {
    pub fn label(&self) -> &'static str {
        match self {
            BikeMetric::Distance => "Distance",
            BikeMetric::Elevation => "Elevation",
        }
    }

    pub fn all() -> &'static [BikeMetric] {
        &[BikeMetric::Distance, BikeMetric::Elevation]
    }

    pub fn mode(&self) -> Mode {
        match self {
            BikeMetric::Distance => Mode::BikeDistance,
            BikeMetric::Elevation => Mode::BikeElevation,
        }
    }
}

/// Navigation selections: active section plus the exclusive filter choice
/// within each group.
#[derive(Default)]
pub struct NavState {
    /// Active content section.
    pub section: Section,

    /// Selected bio category; `None` shows all categories.
    pub bio_category: Option<String>,

    /// Selected bike sub-view.
    pub bike_metric: BikeMetric,

    /// Distinct categories present in the bio dataset, for filter buttons.
    pub bio_categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_modes() {
        assert_eq!(Section::Birds.mode(), Mode::Birds);
        assert_eq!(Section::Bikes.mode(), Mode::BikeDistance);
        assert_eq!(Section::About.mode(), Mode::Reset);
        assert!(matches!(
            Section::Bio.mode(),
            Mode::Chronology {
                category: None,
                until: None
            }
        ));
    }
}
