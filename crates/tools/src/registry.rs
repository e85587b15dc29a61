//! Owned registry of map tools and the currently selected one.

use bevy::prelude::*;

use crate::tool::{Tool, ToolKind};
use crate::tool_error::ToolError;

/// Holds every tool instance plus the selection.
///
/// Systems mutate the selection only through [`ToolRegistry::select`] so the
/// toolbar, temporary tool modes and external triggers all agree on one
/// source of truth.
#[derive(Resource, Debug, Clone)]
pub struct ToolRegistry {
    tools: [Tool; ToolKind::COUNT],
    selected: ToolKind,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self {
            tools: ToolKind::ALL.map(Tool::new),
            selected: ToolKind::default(),
        }
    }
}

impl ToolRegistry {
    /// All tools keyed by their stable name.
    pub fn tools_by_name(&self) -> impl Iterator<Item = (&'static str, &Tool)> {
        self.tools.iter().map(|tool| (tool.name(), tool))
    }

    pub fn tool(&self, kind: ToolKind) -> &Tool {
        &self.tools[kind as usize]
    }

    /// Look up a tool by its stable name.
    pub fn get(&self, name: &str) -> Option<&Tool> {
        ToolKind::from_name(name).map(|kind| self.tool(kind))
    }

    pub fn selected(&self) -> ToolKind {
        self.selected
    }

    pub fn selected_tool(&self) -> &Tool {
        self.tool(self.selected)
    }

    pub fn is_selected(&self, kind: ToolKind) -> bool {
        self.selected == kind
    }

    /// Make `kind` the selected tool. Returns `true` if the selection changed.
    pub fn select(&mut self, kind: ToolKind) -> bool {
        if self.selected == kind {
            return false;
        }
        self.selected = kind;
        true
    }

    /// Select a tool by its stable name.
    pub fn select_by_name(&mut self, name: &str) -> Result<bool, ToolError> {
        let kind =
            ToolKind::from_name(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        Ok(self.select(kind))
    }

    pub fn set_alt_behaviour(&mut self, kind: ToolKind, enabled: bool) {
        self.tools[kind as usize].set_alt_behaviour(enabled);
    }
}
