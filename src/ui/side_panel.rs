//! Side panel UI: per-section content and filter buttons.

use eframe::egui::{self, RichText, ScrollArea};

use crate::sequencer::Mode;
use crate::state::{AppState, BikeMetric, Section};

use super::colors;

pub fn render_side_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::left("side_panel")
        .resizable(true)
        .default_width(230.0)
        .min_width(180.0)
        .max_width(350.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading(state.nav.section.label());
                ui.separator();

                match state.nav.section {
                    Section::Bio => render_bio_section(ui, state),
                    Section::Birds => render_birds_section(ui, state),
                    Section::Bikes => render_bikes_section(ui, state),
                    Section::About => render_about_section(ui),
                }
            });
        });
}

fn render_bio_section(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(
        RichText::new("Life events revealed in order. Hover a ring for details.")
            .small()
            .color(colors::ui::LABEL),
    );
    ui.add_space(8.0);

    ui.label(RichText::new("Filter by category").strong());

    let mut clicked: Option<Option<String>> = None;

    if ui
        .selectable_label(state.nav.bio_category.is_none(), "All")
        .clicked()
    {
        clicked = Some(None);
    }
    for category in state.nav.bio_categories.clone() {
        let selected = state.nav.bio_category.as_deref() == Some(category.as_str());
        if ui.selectable_label(selected, category.as_str()).clicked() {
            clicked = Some(Some(category));
        }
    }

    if let Some(category) = clicked {
        state.nav.bio_category = category.clone();
        state.pending_mode = Some(Mode::Chronology {
            category,
            until: None,
        });
    }
}

fn render_birds_section(ui: &mut egui::Ui, state: &AppState) {
    if state.readiness.birds {
        ui.label(
            RichText::new(
                "Locations colored by how many bird species were sighted there. \
                 Hover a point for the species list.",
            )
            .small()
            .color(colors::ui::LABEL),
        );
    } else {
        ui.label(
            RichText::new("Bird data failed to load; this view is unavailable.")
                .small()
                .color(colors::ui::ERROR),
        );
    }
}

fn render_bikes_section(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(
        RichText::new("Routes colored by magnitude.")
            .small()
            .color(colors::ui::LABEL),
    );
    ui.add_space(8.0);

    ui.label(RichText::new("Color by").strong());

    let ready = state.readiness.bikes;
    ui.add_enabled_ui(ready, |ui| {
        for metric in BikeMetric::all() {
            let selected = state.nav.bike_metric == *metric;
            if ui.selectable_label(selected, metric.label()).clicked() && !selected {
                state.nav.bike_metric = *metric;
                state.pending_mode = Some(metric.mode());
            }
        }
    });

    if !ready {
        ui.add_space(4.0);
        ui.label(
            RichText::new("Bike data failed to load; filters are disabled.")
                .small()
                .color(colors::ui::ERROR),
        );
    }
}

fn render_about_section(ui: &mut egui::Ui) {
    ui.label(
        RichText::new(
            "An interactive map of one life: places lived and visited, birds \
             sighted, and routes ridden. Pick a section above to replay its \
             story on the map.",
        )
        .small()
        .color(colors::ui::LABEL),
    );
}
