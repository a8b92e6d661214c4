//! Application state management.
//!
//! State is organized into logical groupings: map view, navigation and
//! filters, dataset readiness, and transient interaction state.

mod nav;
mod view;

pub use nav::{BikeMetric, NavState, Section};
pub use view::ViewState;

use crate::data::Fid;
use crate::sequencer::Mode;

/// What the pointer is currently over on the point layer.
#[derive(Clone, PartialEq, Eq)]
pub enum HoverTarget {
    Marker(Fid),
    Ring(Fid),
}

impl HoverTarget {
    pub fn fid(&self) -> &str {
        match self {
            HoverTarget::Marker(fid) | HoverTarget::Ring(fid) => fid,
        }
    }
}

/// Readiness of the independently loaded optional datasets. Controls for
/// a category stay disabled until its dataset has resolved.
#[derive(Default, Clone, Copy)]
pub struct Readiness {
    pub birds: bool,
    pub bikes: bool,
}

/// Root application state containing all sub-states.
#[derive(Default)]
pub struct AppState {
    /// Map view (zoom/pan).
    pub view: ViewState,

    /// Navigation and filter selections.
    pub nav: NavState,

    /// Optional-dataset readiness flags.
    pub readiness: Readiness,

    /// Mode requested by the UI this frame, consumed by the update loop.
    pub pending_mode: Option<Mode>,

    /// Current hover target, if any.
    pub hover: Option<HoverTarget>,

    /// Application status message displayed in the top bar.
    pub status_message: String,

    /// Fatal load error; when set, the map area shows this instead of the
    /// visualization.
    pub load_error: Option<String>,
}
