use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use tools::{TempToolModes, ToolKind, ToolRegistry};

use super::catalog::toolbar_entries;
use super::widgets::show_tool_buttons;

/// Apply a toolbar button click to the registry.
pub(crate) fn apply_toolbar_click(registry: &mut ToolRegistry, kind: ToolKind) {
    if registry.select(kind) {
        debug!("Toolbar selected tool {kind}");
    }
}

// ---------------------------------------------------------------------------
// Map tools panel system
// ---------------------------------------------------------------------------

pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut registry: ResMut<ToolRegistry>,
    modes: Res<TempToolModes>,
) {
    let entries = toolbar_entries(&registry);
    let selected = registry.selected();

    let clicked = egui::TopBottomPanel::top("map_tools_panel")
        .exact_height(36.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal_centered(|ui| {
                let responses = show_tool_buttons(ui, &entries);

                ui.separator();
                let label = if modes.is_active() {
                    format!("{selected} (held)")
                } else {
                    selected.to_string()
                };
                ui.label(egui::RichText::new(label).weak());

                responses
                    .into_iter()
                    .find(|(_, response)| response.clicked())
                    .map(|(kind, _)| kind)
            })
            .inner
        })
        .inner;

    if let Some(kind) = clicked {
        apply_toolbar_click(&mut registry, kind);
    }
}
