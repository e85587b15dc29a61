use bevy::prelude::*;

/// Whether single-key tool shortcuts may fire this frame.
///
/// The UI layer closes the gate while a text field (or any other widget)
/// owns keyboard input, so typing never toggles tools.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutGate {
    pub visible: bool,
}

impl Default for ShortcutGate {
    fn default() -> Self {
        Self { visible: true }
    }
}
