//! Configurable keyboard shortcuts of the map tool panel.
//!
//! Provides a `ToolKeyBindings` resource containing the hold-to-switch
//! temporary tool bindings and the direct selection shortcut. Systems read
//! from this resource instead of hardcoding `KeyCode` values. Bindings can be
//! loaded from a JSON file at startup.

mod bindings;
pub(crate) mod key_helpers;

pub use bindings::{BindingSlot, TempToolBinding, ToolKeyBindings};
pub use key_helpers::{keycode_from_label, keycode_label};
