use bevy::prelude::*;

pub mod gate;
pub mod keybindings;
pub mod registry;
pub mod selection;
pub mod temp_mode;
pub mod tool;
pub mod tool_error;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub(crate) mod test_harness;

pub use gate::ShortcutGate;
pub use keybindings::{TempToolBinding, ToolKeyBindings};
pub use registry::ToolRegistry;
pub use selection::SelectToolEvent;
pub use temp_mode::TempToolModes;
pub use tool::{Tool, ToolDescriptor, ToolKind};
pub use tool_error::ToolError;

// ---------------------------------------------------------------------------
// Update phases
// ---------------------------------------------------------------------------

/// Ordered phases for tool input handling in the `Update` schedule.
///
/// Configured as a chain: `Gate` → `TempModes` → `Selection`.
/// Presentation systems that read the registry run `.after(ToolInputSet::Selection)`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ToolInputSet {
    /// Decide whether single-key shortcuts may fire (owned by the UI layer).
    Gate,
    /// Hold-to-switch temporary tool modes.
    TempModes,
    /// Direct selection (events, shortcut keys) and Alt tracking.
    Selection,
}

pub struct ToolsPlugin;

impl Plugin for ToolsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ToolRegistry>()
            .init_resource::<TempToolModes>()
            .init_resource::<ShortcutGate>()
            .init_resource::<ToolKeyBindings>()
            .add_event::<SelectToolEvent>()
            .configure_sets(
                Update,
                (
                    ToolInputSet::Gate,
                    ToolInputSet::TempModes,
                    ToolInputSet::Selection,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                temp_mode::process_temp_tool_modes.in_set(ToolInputSet::TempModes),
            )
            .add_systems(
                Update,
                (
                    selection::direct_select_keybinds,
                    selection::apply_select_tool_events,
                    selection::track_alt_behaviour,
                )
                    .chain()
                    .in_set(ToolInputSet::Selection),
            );
    }
}
