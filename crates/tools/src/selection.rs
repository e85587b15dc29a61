//! Direct tool selection: external triggers, the Add shortcut and Alt
//! tracking.

use bevy::prelude::*;

use crate::gate::ShortcutGate;
use crate::keybindings::ToolKeyBindings;
use crate::registry::ToolRegistry;
use crate::tool::ToolKind;

/// Request to make a tool the selected one (menus, other panels, scripts).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectToolEvent(pub ToolKind);

/// Force the Add tool, the pane's default.
pub fn select_add_tool(registry: &mut ToolRegistry) {
    if registry.select(ToolKind::Add) {
        debug!("Selected tool {}", ToolKind::Add);
    }
}

/// Applies every pending [`SelectToolEvent`]; the last one of a frame wins.
pub fn apply_select_tool_events(
    mut events: EventReader<SelectToolEvent>,
    mut registry: ResMut<ToolRegistry>,
) {
    for SelectToolEvent(kind) in events.read() {
        if registry.select(*kind) {
            debug!("Selected tool {kind}");
        }
    }
}

/// Direct selection shortcut (default `1` selects Add).
pub fn direct_select_keybinds(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    gate: Res<ShortcutGate>,
    bindings: Res<ToolKeyBindings>,
    mut registry: ResMut<ToolRegistry>,
) {
    let Some(keys) = keys else {
        return;
    };
    if !gate.visible {
        return;
    }
    if keys.just_pressed(bindings.select_add) {
        select_add_tool(&mut registry);
    }
}

/// Arms the alternate behaviour of the selected tool while Alt is held.
pub fn track_alt_behaviour(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    gate: Res<ShortcutGate>,
    mut registry: ResMut<ToolRegistry>,
) {
    let alt_held = gate.visible
        && keys.is_some_and(|keys| keys.any_pressed([KeyCode::AltLeft, KeyCode::AltRight]));
    let selected = registry.selected();

    for kind in ToolKind::ALL {
        let enabled = alt_held && kind == selected;
        if registry.tool(kind).alt_behaviour() != enabled {
            registry.set_alt_behaviour(kind, enabled);
        }
    }
}
