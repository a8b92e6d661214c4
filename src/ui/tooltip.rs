//! Hover tooltip composition and rendering.

use eframe::egui::{self, Pos2, RichText, Vec2};

use crate::data::DatasetIndex;

use super::colors;

/// Offset of the tooltip from the pointer position.
const POINTER_OFFSET: Vec2 = Vec2::new(10.0, 10.0);

/// One block of tooltip content: a bold heading and detail lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipBlock {
    pub heading: String,
    pub lines: Vec<String>,
}

/// Composes tooltip content for a fid: the bird block first when present,
/// then one block per bio entry in date order. Empty when neither dataset
/// has an entry for the fid.
pub fn compose(fid: &str, index: &DatasetIndex) -> Vec<TooltipBlock> {
    let mut blocks = Vec::new();

    if let Some(bird) = index.bird(fid) {
        let mut lines = vec![format!("Species Count: {}", bird.species_count)];
        if let Some(list) = &bird.species_list {
            lines.push(format!("Species: {list}"));
        }
        blocks.push(TooltipBlock {
            heading: "Bird Location".to_string(),
            lines,
        });
    }

    for entry in index.bio_entries(fid) {
        blocks.push(TooltipBlock {
            heading: entry.title.clone(),
            lines: vec![
                format!(
                    "{} - {}",
                    entry.start_date.format("%Y-%m-%d"),
                    entry.end_date.format("%Y-%m-%d")
                ),
                entry.details.clone(),
            ],
        });
    }

    blocks
}

/// Draws the tooltip at the pointer position. Does nothing when there is
/// no content.
pub fn show(ctx: &egui::Context, pointer: Pos2, blocks: &[TooltipBlock]) {
    if blocks.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("marker_tooltip"))
        .fixed_pos(pointer + POINTER_OFFSET)
        .order(egui::Order::Tooltip)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(colors::overlay::TOOLTIP_BACKGROUND)
                .show(ui, |ui| {
                    for block in blocks {
                        ui.label(
                            RichText::new(&block.heading)
                                .strong()
                                .color(colors::overlay::TITLE),
                        );
                        for line in &block.lines {
                            ui.label(
                                RichText::new(line)
                                    .small()
                                    .color(colors::overlay::TEXT),
                            );
                        }
                        ui.add_space(4.0);
                    }
                });
        });
}
