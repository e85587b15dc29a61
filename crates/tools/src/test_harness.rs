//! # TestEditor: headless harness for tool panel integration tests
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + `ToolsPlugin` and a
//! hand-driven `ButtonInput<KeyCode>`, so tests can press and release keys
//! frame by frame without a window.

use bevy::prelude::*;

use crate::gate::ShortcutGate;
use crate::keybindings::ToolKeyBindings;
use crate::registry::ToolRegistry;
use crate::selection::SelectToolEvent;
use crate::temp_mode::TempToolModes;
use crate::tool::ToolKind;
use crate::ToolsPlugin;

pub struct TestEditor {
    app: App,
}

impl Default for TestEditor {
    fn default() -> Self {
        Self::with_bindings(ToolKeyBindings::default())
    }
}

impl TestEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: ToolKeyBindings) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(ToolsPlugin);
        // No InputPlugin: the harness owns the keyboard state.
        app.init_resource::<ButtonInput<KeyCode>>();
        app.insert_resource(bindings);
        Self { app }
    }

    /// Advance one frame, then drop the just-pressed/released edges the way
    /// the input plugin does before the next frame.
    pub fn tick(&mut self) -> &mut Self {
        self.app.update();
        self.keys_mut().clear();
        self
    }

    pub fn press(&mut self, key: KeyCode) -> &mut Self {
        self.keys_mut().press(key);
        self.tick()
    }

    pub fn release(&mut self, key: KeyCode) -> &mut Self {
        self.keys_mut().release(key);
        self.tick()
    }

    /// Press without advancing a frame, to combine several edges.
    pub fn hold(&mut self, key: KeyCode) -> &mut Self {
        self.keys_mut().press(key);
        self
    }

    pub fn set_shortcuts_visible(&mut self, visible: bool) -> &mut Self {
        self.app.world_mut().resource_mut::<ShortcutGate>().visible = visible;
        self
    }

    pub fn send(&mut self, event: SelectToolEvent) -> &mut Self {
        self.app.world_mut().send_event(event);
        self
    }

    pub fn selected(&self) -> ToolKind {
        self.registry().selected()
    }

    pub fn registry(&self) -> &ToolRegistry {
        self.app.world().resource::<ToolRegistry>()
    }

    pub fn registry_mut(&mut self) -> Mut<'_, ToolRegistry> {
        self.app.world_mut().resource_mut::<ToolRegistry>()
    }

    pub fn modes(&self) -> &TempToolModes {
        self.app.world().resource::<TempToolModes>()
    }

    fn keys_mut(&mut self) -> Mut<'_, ButtonInput<KeyCode>> {
        self.app.world_mut().resource_mut::<ButtonInput<KeyCode>>()
    }
}
