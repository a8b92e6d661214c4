#![warn(clippy::all)]

//! Atlas Workbench - a web-based interactive map for personal geographic
//! datasets.
//!
//! Renders biography events, bird sightings, and bike routes over a world
//! basemap. Selecting a section replays that dataset's reveal sequence on
//! the shared point layer; hovering a point shows its details.

mod data;
mod map;
mod sequencer;
mod state;
mod ui;

use std::time::Duration;

use chrono::NaiveDate;
use eframe::egui;

use data::DatasetIndex;
use map::{Basemap, MarkerRegistry};
use sequencer::{Mode, RevealStep, Timeline};
use state::AppState;

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Atlas Workbench",
        native_options,
        Box::new(|cc| Ok(Box::new(AtlasApp::new(cc)))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("app_canvas")
            .expect("Failed to find app_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("app_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(AtlasApp::new(cc)))),
            )
            .await;

        if let Err(e) = start_result {
            panic!("Failed to start eframe: {e:?}");
        }
    });
}

// Embed the datasets at compile time
static LAND_GEOJSON: &str = include_str!("../assets/data/land.geojson");
static POINTS_GEOJSON: &str = include_str!("../assets/data/centroids.geojson");
static BIRDS_GEOJSON: &str = include_str!("../assets/data/birds.geojson");
static BIO_JSON: &str = include_str!("../assets/data/bio.json");
static BIKES_GEOJSON: &str = include_str!("../assets/data/bikes.geojson");

/// Main application state and logic.
pub struct AtlasApp {
    /// Application state containing all sub-states
    state: AppState,

    /// Immutable dataset lookup tables
    index: DatasetIndex,

    /// Rendered markers and rings (all mutable display state)
    registry: MarkerRegistry,

    /// Land-boundary basemap
    basemap: Basemap,

    /// The currently live mode
    mode: Mode,

    /// Scheduled reveal steps for the live mode
    timeline: Timeline,

    /// Start instant of the live sequence
    sequence_started: Option<web_time::Instant>,
}

impl AtlasApp {
    /// Creates a new AtlasApp instance, parsing the embedded datasets.
    ///
    /// A failure in the land, centroid, or bio data is fatal for the
    /// visualization and surfaces as an inline error; bird and bike data
    /// fail independently, leaving their category inert.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut state = AppState::default();

        let basemap = match Basemap::from_geojson(LAND_GEOJSON) {
            Ok(basemap) => basemap,
            Err(e) => {
                log::error!("Failed to load land data: {e}");
                state.load_error = Some(e.to_string());
                Basemap::default()
            }
        };

        let points = match data::load_points(POINTS_GEOJSON) {
            Ok(points) => points,
            Err(e) => {
                log::error!("Failed to load centroid data: {e}");
                state.load_error = Some(e.to_string());
                Vec::new()
            }
        };

        let bio_entries = match data::load_bio(BIO_JSON) {
            Ok(entries) => entries,
            Err(e) => {
                log::error!("Failed to load bio data: {e}");
                state.load_error = Some(e.to_string());
                Vec::new()
            }
        };

        let birds = match data::load_birds(BIRDS_GEOJSON) {
            Ok(birds) => {
                state.readiness.birds = true;
                birds
            }
            Err(e) => {
                log::warn!("Failed to load bird data, view disabled: {e}");
                Vec::new()
            }
        };

        let bikes = match data::load_bikes(BIKES_GEOJSON) {
            Ok(bikes) => {
                state.readiness.bikes = true;
                bikes
            }
            Err(e) => {
                log::warn!("Failed to load bike data, filters disabled: {e}");
                Vec::new()
            }
        };

        let index = DatasetIndex::build(birds, bio_entries, bikes);
        let registry = MarkerRegistry::build(&points, &index);

        state.nav.bio_categories = index.bio_categories();
        state.status_message = "Ready".to_string();

        if state.load_error.is_none() {
            log::info!(
                "Loaded {} points, {} bio entries, {} land polygons",
                registry.markers().len(),
                index.bio_timeline().len(),
                basemap.polygons.len(),
            );

            // Quiet initial view: early events only, no category filter.
            state.pending_mode = Some(Mode::Chronology {
                category: None,
                until: NaiveDate::from_ymd_opt(1900, 1, 1),
            });
        }

        Self {
            state,
            index,
            registry,
            basemap,
            mode: Mode::Reset,
            timeline: Timeline::new(),
            sequence_started: None,
        }
    }

    /// Switches the live mode: cancels the previous sequence, resets all
    /// display state, and schedules the new reveal sequence. Exactly one
    /// mode's sequence is live at any instant.
    fn switch_mode(&mut self, mode: Mode) {
        log::info!("Switching mode: {mode:?}");

        // Outstanding steps from the previous mode must never fire into
        // the new mode's state.
        self.timeline.cancel();
        self.registry.reset();
        self.state.hover = None;

        let steps = sequencer::plan(&mode, &self.index, &self.registry);
        log::debug!("Planned {} reveal steps", steps.len());

        self.timeline.begin(steps);
        self.sequence_started = Some(web_time::Instant::now());
        self.state.status_message = mode.describe();
        self.mode = mode;
    }

    /// Applies all newly due reveal steps and schedules the next repaint.
    fn advance_timeline(&mut self, ctx: &egui::Context) {
        if !self.timeline.is_running() {
            return;
        }
        let Some(started) = self.sequence_started else {
            return;
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;
        let due: Vec<RevealStep> = self.timeline.poll(elapsed_ms).to_vec();
        for step in &due {
            sequencer::apply(step, &mut self.registry);
        }

        if let Some(next_ms) = self.timeline.next_due_ms() {
            let wait = next_ms.saturating_sub(elapsed_ms).max(16);
            ctx.request_repaint_after(Duration::from_millis(wait));
        }
    }
}

impl eframe::App for AtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(mode) = self.state.pending_mode.take() {
            self.switch_mode(mode);
        }

        self.advance_timeline(ctx);

        ui::render_top_bar(ctx, &mut self.state);
        ui::render_side_panel(ctx, &mut self.state);
        ui::render_canvas(
            ctx,
            &mut self.state,
            &mut self.registry,
            &self.index,
            &self.basemap,
            &self.mode,
        );
    }
}
