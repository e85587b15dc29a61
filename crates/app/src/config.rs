//! Loading the tool key bindings from a JSON file at startup.

use std::path::Path;

use bevy::prelude::*;

use tools::{ToolError, ToolKeyBindings};

/// Environment variable naming the key binding JSON file.
pub const KEYBINDINGS_ENV: &str = "MAPEDITOR_KEYBINDINGS";

pub fn load_key_bindings(path: &Path) -> Result<ToolKeyBindings, ToolError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| ToolError::Config(format!("{}: {e}", path.display())))?;
    ToolKeyBindings::from_json(&json)
}

/// Startup system: replace the default bindings with the configured file, if any.
/// A missing or broken file keeps the defaults.
pub fn apply_key_bindings_config(mut bindings: ResMut<ToolKeyBindings>) {
    let Some(path) = std::env::var_os(KEYBINDINGS_ENV) else {
        return;
    };
    let path = Path::new(&path);

    match load_key_bindings(path) {
        Ok(loaded) => {
            for (a, b) in loaded.find_conflicts() {
                warn!("Key binding conflict in {}: {a:?} and {b:?}", path.display());
            }
            info!(
                "Loaded tool key bindings from {} ({} hold bindings)",
                path.display(),
                loaded.temp_tools.len()
            );
            *bindings = loaded;
        }
        Err(e) => {
            warn!("Keeping default tool key bindings: {e}");
        }
    }
}
