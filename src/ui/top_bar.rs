//! Top bar UI: app title, navigation links, and status.

use eframe::egui::{self, RichText};

use crate::sequencer::Mode;
use crate::state::{AppState, Section};

use super::colors;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new("Atlas Workbench")
                        .strong()
                        .size(16.0)
                        .color(colors::ui::ACTIVE),
                );

                ui.separator();

                for section in Section::all() {
                    let active = state.nav.section == *section;
                    let text = if active {
                        RichText::new(section.label())
                            .strong()
                            .color(colors::ui::ACTIVE)
                    } else {
                        RichText::new(section.label()).color(colors::ui::LABEL)
                    };
                    if ui.selectable_label(active, text).clicked() {
                        select_section(state, *section);
                    }
                }

                ui.separator();

                ui.label(
                    RichText::new(&state.status_message)
                        .size(13.0)
                        .color(colors::ui::LABEL),
                );
            });
        });
}

/// Activates a section: resets its filter group to defaults and requests
/// the section's mode. Sections whose optional dataset has not resolved
/// fall back to a plain reset so no stale legend or colors appear.
fn select_section(state: &mut AppState, section: Section) {
    state.nav.section = section;
    state.nav.bio_category = None;
    state.nav.bike_metric = Default::default();

    let mode = match section {
        Section::Birds if !state.readiness.birds => {
            state.status_message = "Bird data unavailable".to_string();
            Mode::Reset
        }
        Section::Bikes if !state.readiness.bikes => {
            state.status_message = "Bike data unavailable".to_string();
            Mode::Reset
        }
        _ => section.mode(),
    };
    state.pending_mode = Some(mode);
}
