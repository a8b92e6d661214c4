//! Central canvas UI: the map visualization area.
//!
//! Draws the basemap, point markers, and detail rings, handles hover and
//! pan/zoom interaction, and overlays the legend and tooltip.

use eframe::egui::{self, Pos2, Rect, RichText, Sense, Stroke};

use crate::data::DatasetIndex;
use crate::map::{
    Basemap, MapProjection, MarkerRegistry, MARKER_RADIUS, MARKER_RADIUS_HOVER, RING_RADIUS,
    RING_RADIUS_HOVER,
};
use crate::sequencer::Mode;
use crate::state::{AppState, HoverTarget};

use super::{colors, legend, tooltip};

/// Extra hit-test slack around a marker, in pixels.
const HIT_SLACK: f32 = 2.0;

pub fn render_canvas(
    ctx: &egui::Context,
    state: &mut AppState,
    registry: &mut MarkerRegistry,
    index: &DatasetIndex,
    basemap: &Basemap,
    mode: &Mode,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if let Some(error) = &state.load_error {
            render_load_error(ui, error);
            return;
        }

        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, Sense::click_and_drag());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, colors::canvas::BACKGROUND);

        let mut projection = MapProjection::default();
        projection.update(state.view.zoom, state.view.pan_offset, rect);

        basemap.render(&painter, &projection);
        render_markers(&painter, registry, &projection);

        if let Some(entries) = legend::legend_for(mode) {
            legend::draw(&painter, rect, &entries);
        }

        handle_hover(ctx, state, registry, index, &response, &projection);
        handle_view_interaction(&response, &rect, state);
    });
}

fn render_load_error(ui: &mut egui::Ui, error: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(
            RichText::new(format!("Error loading map data: {error}"))
                .color(colors::ui::ERROR)
                .size(14.0),
        );
    });
}

/// Draws markers first, then rings, so rings sit on top of the layer.
fn render_markers(
    painter: &egui::Painter,
    registry: &MarkerRegistry,
    projection: &MapProjection,
) {
    for marker in registry.markers() {
        if !projection.is_visible(marker.coord, 1.0) {
            continue;
        }
        let pos = projection.geo_to_screen(marker.coord);
        painter.circle_filled(pos, marker.radius, marker.color);
    }

    for ring in registry.rings() {
        if !ring.visible || !projection.is_visible(ring.coord, 1.0) {
            continue;
        }
        let pos = projection.geo_to_screen(ring.coord);
        painter.circle_stroke(pos, ring.radius, Stroke::new(1.0, colors::markers::RING_STROKE));
    }
}

/// Updates the hover target, adjusting radii and showing the tooltip.
fn handle_hover(
    ctx: &egui::Context,
    state: &mut AppState,
    registry: &mut MarkerRegistry,
    index: &DatasetIndex,
    response: &egui::Response,
    projection: &MapProjection,
) {
    let target = response
        .hover_pos()
        .and_then(|pos| hit_test(registry, pos, projection));

    if target != state.hover {
        // Restore the previous target's default radius.
        match &state.hover {
            Some(HoverTarget::Marker(fid)) => {
                if let Some(marker) = registry.marker_mut(fid) {
                    marker.radius = MARKER_RADIUS;
                }
            }
            Some(HoverTarget::Ring(fid)) => {
                if let Some(ring) = registry.ring_mut(fid) {
                    ring.radius = RING_RADIUS;
                }
            }
            None => {}
        }

        match &target {
            Some(HoverTarget::Marker(fid)) => {
                // Markers only enlarge when they carry auxiliary data.
                let has_data = index.bird(fid).is_some() || index.has_bio(fid);
                if has_data {
                    if let Some(marker) = registry.marker_mut(fid) {
                        marker.radius = MARKER_RADIUS_HOVER;
                    }
                }
            }
            Some(HoverTarget::Ring(fid)) => {
                if let Some(ring) = registry.ring_mut(fid) {
                    ring.radius = RING_RADIUS_HOVER;
                }
            }
            None => {}
        }

        state.hover = target;
    }

    if let (Some(hover), Some(pointer)) = (&state.hover, response.hover_pos()) {
        let blocks = tooltip::compose(hover.fid(), index);
        tooltip::show(ctx, pointer, &blocks);
    }
}

/// Finds the topmost marker or ring under the pointer. Rings draw above
/// markers, so they hit-test first.
fn hit_test(
    registry: &MarkerRegistry,
    pos: Pos2,
    projection: &MapProjection,
) -> Option<HoverTarget> {
    for ring in registry.rings().iter().rev() {
        if !ring.visible {
            continue;
        }
        let center = projection.geo_to_screen(ring.coord);
        if center.distance(pos) <= ring.radius + HIT_SLACK {
            return Some(HoverTarget::Ring(ring.fid.clone()));
        }
    }

    for marker in registry.markers().iter().rev() {
        let center = projection.geo_to_screen(marker.coord);
        if center.distance(pos) <= marker.radius + HIT_SLACK {
            return Some(HoverTarget::Marker(marker.fid.clone()));
        }
    }

    None
}

/// Pan/zoom handling: one transform over the whole layer, independent of
/// the sequencer.
fn handle_view_interaction(response: &egui::Response, rect: &Rect, state: &mut AppState) {
    if response.dragged() {
        state.view.pan_offset += response.drag_delta();
    }

    if response.hovered() {
        let scroll_delta = response.ctx.input(|i| i.raw_scroll_delta);
        if scroll_delta.y != 0.0 {
            let old_zoom = state.view.zoom;
            state.view.zoom_by(1.0 + scroll_delta.y * 0.001);

            // Keep the point under the cursor stationary while zooming.
            if let Some(cursor_pos) = response.hover_pos() {
                let cursor_rel = cursor_pos - rect.center();
                let ratio = state.view.zoom / old_zoom;
                state.view.pan_offset =
                    cursor_rel * (1.0 - ratio) + state.view.pan_offset * ratio;
            }
        }
    }

    if response.double_clicked() {
        state.view.reset();
    }
}
