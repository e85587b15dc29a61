//! Temporary tool modes: hold a key to switch tools, release to switch back.

mod state;
mod systems;


pub use state::TempToolModes;
pub use systems::process_temp_tool_modes;
