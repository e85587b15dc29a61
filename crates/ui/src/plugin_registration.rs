use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use tools::ToolInputSet;

use crate::*;

/// Register all UI plugins and systems.
///
/// Expects `tools::ToolsPlugin` to be added as well; it owns the registry
/// and the `ToolInputSet` ordering the systems below hook into.
pub(crate) fn register_ui_systems(app: &mut App) {
    // Core egui
    app.add_plugins(EguiPlugin);

    // UI systems
    app.add_systems(Startup, theme::apply_editor_theme);
    app.add_systems(
        Update,
        shortcut_gate::update_shortcut_gate.in_set(ToolInputSet::Gate),
    );
    app.add_systems(
        Update,
        toolbar::toolbar_ui.after(ToolInputSet::Selection),
    );
}
