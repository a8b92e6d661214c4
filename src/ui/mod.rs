//! UI modules for the Atlas Workbench application.
//!
//! The UI is split into distinct panels:
//! - Top bar: title, navigation links, and status
//! - Side panel: section content and filter buttons
//! - Central canvas: map visualization with legend and tooltip overlays

mod canvas;
pub mod colors;
mod legend;
mod side_panel;
mod tooltip;
mod top_bar;

pub use canvas::render_canvas;
pub use side_panel::render_side_panel;
pub use top_bar::render_top_bar;
