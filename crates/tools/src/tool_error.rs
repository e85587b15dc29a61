// ---------------------------------------------------------------------------
// ToolError: failures at the registry and config boundaries
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors raised when resolving tools or key bindings from external input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// A tool name outside the known tool set.
    UnknownTool(String),
    /// A key label that does not map to a supported key code.
    UnknownKey(String),
    /// The key binding config could not be parsed or written.
    Config(String),
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::UnknownTool(name) => write!(f, "Unknown tool: {name:?}"),
            ToolError::UnknownKey(label) => write!(f, "Unknown key: {label:?}"),
            ToolError::Config(msg) => write!(f, "Key binding config error: {msg}"),
        }
    }
}

impl std::error::Error for ToolError {}

impl From<serde_json::Error> for ToolError {
    fn from(e: serde_json::Error) -> Self {
        ToolError::Config(e.to_string())
    }
}
