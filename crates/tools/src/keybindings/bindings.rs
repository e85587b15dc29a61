//! Tool key binding types, the `ToolKeyBindings` resource and its JSON form.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::key_helpers::{keycode_from_label, keycode_label};
use crate::tool::ToolKind;
use crate::tool_error::ToolError;

// =============================================================================
// Temporary tool binding
// =============================================================================

/// Holding `key` (or `alt_key`, when set) switches to `tool` until release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempToolBinding {
    pub key: KeyCode,
    pub alt_key: Option<KeyCode>,
    pub tool: ToolKind,
}

impl TempToolBinding {
    pub const fn new(key: KeyCode, tool: ToolKind) -> Self {
        Self {
            key,
            alt_key: None,
            tool,
        }
    }

    pub const fn with_alt_key(mut self, alt_key: KeyCode) -> Self {
        self.alt_key = Some(alt_key);
        self
    }

    fn keys(&self) -> impl Iterator<Item = KeyCode> {
        std::iter::once(self.key).chain(self.alt_key)
    }

    pub fn just_pressed(&self, keys: &ButtonInput<KeyCode>) -> bool {
        self.keys().any(|key| keys.just_pressed(key))
    }

    pub fn just_released(&self, keys: &ButtonInput<KeyCode>) -> bool {
        self.keys().any(|key| keys.just_released(key))
    }

    /// Whether either key of the binding is held this frame.
    pub fn pressed(&self, keys: &ButtonInput<KeyCode>) -> bool {
        self.keys().any(|key| keys.pressed(key))
    }

    /// Human-readable label (e.g. "S", "S / Left").
    pub fn display_label(&self) -> String {
        self.keys().map(keycode_label).collect::<Vec<_>>().join(" / ")
    }
}

// =============================================================================
// Serializable form for config files
// =============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct SerTempToolBinding {
    key: String,
    #[serde(default)]
    alt_key: Option<String>,
    tool: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
struct SerToolKeyBindings {
    temp_tools: Vec<SerTempToolBinding>,
    select_add: String,
}

impl Default for SerToolKeyBindings {
    fn default() -> Self {
        SerToolKeyBindings::from_bindings(&ToolKeyBindings::default())
    }
}

fn parse_key(label: &str) -> Result<KeyCode, ToolError> {
    keycode_from_label(label).ok_or_else(|| ToolError::UnknownKey(label.to_string()))
}

impl SerToolKeyBindings {
    fn from_bindings(bindings: &ToolKeyBindings) -> Self {
        Self {
            temp_tools: bindings
                .temp_tools
                .iter()
                .map(|b| SerTempToolBinding {
                    key: keycode_label(b.key).to_string(),
                    alt_key: b.alt_key.map(|k| keycode_label(k).to_string()),
                    tool: b.tool.name().to_string(),
                })
                .collect(),
            select_add: keycode_label(bindings.select_add).to_string(),
        }
    }

    fn into_bindings(self) -> Result<ToolKeyBindings, ToolError> {
        let temp_tools = self
            .temp_tools
            .into_iter()
            .map(|b| -> Result<TempToolBinding, ToolError> {
                let tool = ToolKind::from_name(&b.tool).ok_or(ToolError::UnknownTool(b.tool))?;
                Ok(TempToolBinding {
                    key: parse_key(&b.key)?,
                    alt_key: b.alt_key.as_deref().map(parse_key).transpose()?,
                    tool,
                })
            })
            .collect::<Result<Vec<_>, ToolError>>()?;
        Ok(ToolKeyBindings {
            temp_tools,
            select_add: parse_key(&self.select_add)?,
        })
    }
}

// =============================================================================
// ToolKeyBindings resource
// =============================================================================

/// Identifies one key assignment inside [`ToolKeyBindings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingSlot {
    TempTool(ToolKind),
    SelectAdd,
}

/// Keyboard shortcuts of the map tool panel.
/// Systems read from this instead of hardcoding `KeyCode` values.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ToolKeyBindings {
    /// Hold-to-switch bindings, evaluated in order every frame.
    pub temp_tools: Vec<TempToolBinding>,
    /// Press to select the Add tool.
    pub select_add: KeyCode,
}

impl Default for ToolKeyBindings {
    fn default() -> Self {
        Self {
            temp_tools: vec![
                TempToolBinding::new(KeyCode::KeyS, ToolKind::Select),
                TempToolBinding::new(KeyCode::KeyD, ToolKind::Delete),
            ],
            select_add: KeyCode::Digit1,
        }
    }
}

impl ToolKeyBindings {
    /// Parse bindings from JSON. Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, ToolError> {
        let ser: SerToolKeyBindings = serde_json::from_str(json)?;
        ser.into_bindings()
    }

    pub fn to_json(&self) -> Result<String, ToolError> {
        Ok(serde_json::to_string_pretty(
            &SerToolKeyBindings::from_bindings(self),
        )?)
    }

    /// The hold binding for `tool`, if one is configured.
    pub fn temp_binding_for(&self, tool: ToolKind) -> Option<&TempToolBinding> {
        self.temp_tools.iter().find(|b| b.tool == tool)
    }

    /// Pairs of assignments that share a key.
    pub fn find_conflicts(&self) -> Vec<(BindingSlot, BindingSlot)> {
        let mut assigned: Vec<(BindingSlot, KeyCode)> = self
            .temp_tools
            .iter()
            .flat_map(|b| b.keys().map(move |key| (BindingSlot::TempTool(b.tool), key)))
            .collect();
        assigned.push((BindingSlot::SelectAdd, self.select_add));

        let mut conflicts = Vec::new();
        for (i, &(slot_a, key_a)) in assigned.iter().enumerate() {
            for &(slot_b, key_b) in &assigned[i + 1..] {
                if key_a == key_b {
                    conflicts.push((slot_a, slot_b));
                }
            }
        }
        conflicts
    }
}
