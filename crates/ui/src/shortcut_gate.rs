//! Shortcut gate: keeps single-key tool shortcuts quiet while egui owns the
//! keyboard (text fields, drag values, etc.).

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use tools::ShortcutGate;

/// Returns `true` when tool shortcuts may fire, i.e. egui does not want
/// keyboard input this frame.
#[inline]
pub fn shortcuts_visible(ctx: &bevy_egui::egui::Context) -> bool {
    !ctx.wants_keyboard_input()
}

pub fn update_shortcut_gate(mut contexts: EguiContexts, mut gate: ResMut<ShortcutGate>) {
    let visible = shortcuts_visible(contexts.ctx_mut());
    if gate.visible != visible {
        debug!("Tool shortcuts {}", if visible { "enabled" } else { "disabled" });
        gate.visible = visible;
    }
}
