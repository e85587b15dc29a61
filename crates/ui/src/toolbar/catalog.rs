use tools::{ToolKind, ToolRegistry};

// ---------------------------------------------------------------------------
// Render order
// ---------------------------------------------------------------------------

/// One position in the tool row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarSlot {
    Tool(ToolKind),
    /// Non-selectable divider between button groups.
    Separator,
}

pub const TOOL_ORDER: &[ToolbarSlot] = &[
    ToolbarSlot::Tool(ToolKind::Add),
    ToolbarSlot::Separator,
    ToolbarSlot::Tool(ToolKind::Select),
    ToolbarSlot::Tool(ToolKind::Delete),
];

// ---------------------------------------------------------------------------
// Per-frame render model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonHighlight {
    None,
    /// Selected, normal behaviour.
    Active,
    /// Selected with the alternate behaviour armed.
    Alternate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarEntry {
    Separator,
    Button {
        kind: ToolKind,
        icon: &'static str,
        help: &'static str,
        highlight: ButtonHighlight,
    },
}

/// Build the tool row for the current registry state.
pub fn toolbar_entries(registry: &ToolRegistry) -> Vec<ToolbarEntry> {
    TOOL_ORDER
        .iter()
        .map(|slot| match *slot {
            ToolbarSlot::Separator => ToolbarEntry::Separator,
            ToolbarSlot::Tool(kind) => {
                let desc = kind.descriptor();
                let highlight = if !registry.is_selected(kind) {
                    ButtonHighlight::None
                } else if registry.tool(kind).alt_behaviour() {
                    ButtonHighlight::Alternate
                } else {
                    ButtonHighlight::Active
                };
                ToolbarEntry::Button {
                    kind,
                    icon: desc.icon,
                    help: desc.help,
                    highlight,
                }
            }
        })
        .collect()
}
