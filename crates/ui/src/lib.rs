use bevy::prelude::*;

mod plugin_registration;

pub mod shortcut_gate;
pub mod theme;
pub mod toolbar;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        plugin_registration::register_ui_systems(app);
    }
}
