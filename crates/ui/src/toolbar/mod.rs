//! Map tools toolbar, split into sub-modules:
//!
//! - `catalog`: render order and the per-frame render model
//! - `widgets`: tool button and tool row drawing
//! - `ui_system`: the `toolbar_ui` egui system

mod catalog;
mod ui_system;
mod widgets;


pub use catalog::{toolbar_entries, ButtonHighlight, ToolbarEntry, ToolbarSlot, TOOL_ORDER};
pub use ui_system::toolbar_ui;
pub use widgets::show_tool_buttons;
