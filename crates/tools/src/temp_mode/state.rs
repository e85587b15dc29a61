//! Hold-to-switch state machine.
//!
//! Each frame every configured [`TempToolBinding`] is evaluated:
//!
//! ```text
//! Idle --(key just pressed, bound tool not selected)--> Engaged
//! Engaged --(key just released, prev tool known)--> Idle
//! ```
//!
//! On engage the tool selected right before is remembered in `prev_tool`.
//! On release the selection goes back to it, but only while the bound tool
//! is still selected. Independently, `restore_tool` is snapshotted on every
//! frame where no session is active; once no binding is held anymore the
//! session ends and `restore_tool` is selected again. This keeps
//! overlapping holds (S then D, release S, release D) from leaking an
//! intermediate tool.
//!
//! While the shortcut gate is closed no key edge is looked at and every
//! binding counts as released, so an ongoing session ends on that frame.

use bevy::prelude::*;

use crate::keybindings::TempToolBinding;
use crate::registry::ToolRegistry;
use crate::tool::ToolKind;

/// Transient temporary tool mode bookkeeping of the map pane.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct TempToolModes {
    /// A temporary mode session is in progress.
    active: bool,
    /// Tool to restore once every binding is released.
    restore_tool: Option<ToolKind>,
    /// Tool selected right before the most recent key hold started.
    prev_tool: Option<ToolKind>,
}

impl TempToolModes {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn restore_tool(&self) -> Option<ToolKind> {
        self.restore_tool
    }

    pub fn prev_tool(&self) -> Option<ToolKind> {
        self.prev_tool
    }

    /// Run one frame of temporary tool mode processing.
    ///
    /// Keys are not polled while `shortcuts_visible` is false, but the
    /// session bookkeeping still runs. Returns whether any binding is held
    /// this frame.
    pub fn tick(
        &mut self,
        registry: &mut ToolRegistry,
        bindings: &[TempToolBinding],
        keys: &ButtonInput<KeyCode>,
        shortcuts_visible: bool,
    ) -> bool {
        if !self.active {
            self.restore_tool = Some(registry.selected());
        }

        // Every binding must see its press/release edge, so no short-circuit.
        let mut held = false;
        if shortcuts_visible {
            for binding in bindings {
                held |= self.process_binding(binding, registry, keys);
            }
        }

        if self.active && !held {
            if let Some(tool) = self.restore_tool.take() {
                debug!("Temporary tool mode ended, restoring {tool}");
                registry.select(tool);
            }
            self.prev_tool = None;
            self.active = false;
        }

        held
    }

    fn process_binding(
        &mut self,
        binding: &TempToolBinding,
        registry: &mut ToolRegistry,
        keys: &ButtonInput<KeyCode>,
    ) -> bool {
        let is_selected = registry.is_selected(binding.tool);

        if binding.just_pressed(keys) && !is_selected {
            self.prev_tool = Some(registry.selected());
            self.active = true;
            debug!(
                "Temporary tool mode: {} -> {} (hold {})",
                registry.selected(),
                binding.tool,
                binding.display_label()
            );
            registry.select(binding.tool);
        } else if binding.just_released(keys) {
            if let Some(prev) = self.prev_tool.take() {
                if is_selected {
                    registry.select(prev);
                }
            }
        }

        binding.pressed(keys)
    }
}
