use bevy::prelude::*;

use crate::gate::ShortcutGate;
use crate::keybindings::ToolKeyBindings;
use crate::registry::ToolRegistry;

use super::state::TempToolModes;

/// Drives [`TempToolModes`] once per frame from the keyboard state.
/// No-ops in headless contexts where `ButtonInput<KeyCode>` is absent.
pub fn process_temp_tool_modes(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    gate: Res<ShortcutGate>,
    bindings: Res<ToolKeyBindings>,
    mut modes: ResMut<TempToolModes>,
    mut registry: ResMut<ToolRegistry>,
) {
    let Some(keys) = keys else {
        return;
    };
    modes.tick(&mut registry, &bindings.temp_tools, &keys, gate.visible);
}
