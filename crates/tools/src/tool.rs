//! The closed set of map editing tools and their static descriptors.

/// Every editing tool the map pane knows about.
///
/// Name, icon and help text are associated data of each variant, so the
/// toolbar tables can never drift out of sync with the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolKind {
    #[default]
    Add,
    Select,
    Delete,
}

/// Icon glyph and tooltip text shown for a tool in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub icon: &'static str,
    pub help: &'static str,
}

impl ToolKind {
    pub const COUNT: usize = 3;

    /// All tools in declaration order.
    pub const ALL: [ToolKind; Self::COUNT] = [ToolKind::Add, ToolKind::Select, ToolKind::Delete];

    /// Stable identifier used in config files and external triggers.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Add => "add",
            ToolKind::Select => "select",
            ToolKind::Delete => "delete",
        }
    }

    /// Resolve a tool from its stable name.
    pub fn from_name(name: &str) -> Option<ToolKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn descriptor(self) -> ToolDescriptor {
        match self {
            ToolKind::Add => ToolDescriptor {
                icon: "\u{2795}",
                help: "Add (1)\nClick - Place selected object topmost\nAlt+Click - Place selected object with replace",
            },
            ToolKind::Select => ToolDescriptor {
                icon: "\u{261D}",
                help: "Select (Hold S)\nClick - Select hovered object",
            },
            ToolKind::Delete => ToolDescriptor {
                icon: "\u{1F5D1}",
                help: "Delete (Hold D)\nClick - Delete hovered object\nAlt+Click - Delete tile",
            },
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A registered tool instance.
///
/// `alt_behaviour` is set while the alternate interaction (Alt+Click) is
/// armed; it only changes how the toolbar highlights the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    kind: ToolKind,
    alt_behaviour: bool,
}

impl Tool {
    pub fn new(kind: ToolKind) -> Self {
        Self {
            kind,
            alt_behaviour: false,
        }
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn alt_behaviour(&self) -> bool {
        self.alt_behaviour
    }

    pub(crate) fn set_alt_behaviour(&mut self, enabled: bool) {
        self.alt_behaviour = enabled;
    }
}
