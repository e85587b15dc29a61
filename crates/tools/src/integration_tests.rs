use bevy::prelude::KeyCode;

use crate::keybindings::{TempToolBinding, ToolKeyBindings};
use crate::selection::SelectToolEvent;
use crate::test_harness::TestEditor;
use crate::tool::ToolKind;

#[test]
fn test_plugin_starts_with_add_selected() {
    let mut editor = TestEditor::new();
    editor.tick();
    assert_eq!(editor.selected(), ToolKind::Add);
    assert!(!editor.modes().is_active());
}

#[test]
fn test_default_editor_uses_default_bindings() {
    let mut editor = TestEditor::default();
    editor.press(KeyCode::KeyD);
    assert_eq!(editor.selected(), ToolKind::Delete);
    editor.release(KeyCode::KeyD);
    assert_eq!(editor.selected(), ToolKind::Add);
}

#[test]
fn test_hold_s_through_plugin() {
    let mut editor = TestEditor::new();
    editor.press(KeyCode::KeyS);
    assert_eq!(editor.selected(), ToolKind::Select);
    assert!(editor.modes().is_active());

    editor.tick().tick();
    assert_eq!(editor.selected(), ToolKind::Select);

    editor.release(KeyCode::KeyS);
    assert_eq!(editor.selected(), ToolKind::Add);
    assert!(!editor.modes().is_active());
}

#[test]
fn test_overlapping_holds_through_plugin() {
    let mut editor = TestEditor::new();
    editor.press(KeyCode::KeyS).press(KeyCode::KeyD);
    assert_eq!(editor.selected(), ToolKind::Delete);

    editor.release(KeyCode::KeyS);
    assert_eq!(editor.selected(), ToolKind::Delete);
    assert!(editor.modes().is_active());

    editor.release(KeyCode::KeyD);
    assert_eq!(editor.selected(), ToolKind::Add);
}

#[test]
fn test_hidden_shortcuts_ignore_hold() {
    let mut editor = TestEditor::new();
    editor.set_shortcuts_visible(false);
    editor.press(KeyCode::KeyS);
    assert_eq!(editor.selected(), ToolKind::Add);
    assert!(!editor.modes().is_active());

    editor.registry_mut().select(ToolKind::Delete);
    editor.press(KeyCode::Digit1);
    assert_eq!(editor.selected(), ToolKind::Delete);
}

#[test]
fn test_focus_loss_mid_hold_restores_tool() {
    let mut editor = TestEditor::new();
    editor.press(KeyCode::KeyS);
    assert_eq!(editor.selected(), ToolKind::Select);

    editor.set_shortcuts_visible(false).tick();
    assert_eq!(editor.selected(), ToolKind::Add);
    assert!(!editor.modes().is_active());

    editor.set_shortcuts_visible(true).release(KeyCode::KeyS);
    assert_eq!(editor.selected(), ToolKind::Add);
}

#[test]
fn test_select_event_applies_next_frame() {
    let mut editor = TestEditor::new();
    editor.send(SelectToolEvent(ToolKind::Delete)).tick();
    assert_eq!(editor.selected(), ToolKind::Delete);

    // Re-selecting the current tool changes nothing observable.
    let before = editor.registry().clone();
    editor.send(SelectToolEvent(ToolKind::Delete)).tick();
    assert_eq!(editor.selected(), before.selected());
    assert_eq!(editor.registry().selected_tool(), before.selected_tool());
}

#[test]
fn test_last_select_event_of_frame_wins() {
    let mut editor = TestEditor::new();
    editor
        .send(SelectToolEvent(ToolKind::Select))
        .send(SelectToolEvent(ToolKind::Delete))
        .tick();
    assert_eq!(editor.selected(), ToolKind::Delete);
}

#[test]
fn test_digit1_selects_add() {
    let mut editor = TestEditor::new();
    editor.registry_mut().select(ToolKind::Delete);
    editor.press(KeyCode::Digit1);
    assert_eq!(editor.selected(), ToolKind::Add);
}

#[test]
fn test_alt_arms_selected_tool_only() {
    let mut editor = TestEditor::new();
    editor.registry_mut().select(ToolKind::Delete);
    editor.press(KeyCode::AltLeft);
    assert!(editor.registry().tool(ToolKind::Delete).alt_behaviour());
    assert!(!editor.registry().tool(ToolKind::Add).alt_behaviour());

    editor.release(KeyCode::AltLeft);
    assert!(!editor.registry().tool(ToolKind::Delete).alt_behaviour());
}

#[test]
fn test_alt_follows_temporary_tool() {
    let mut editor = TestEditor::new();
    editor.hold(KeyCode::AltRight).press(KeyCode::KeyS);
    assert_eq!(editor.selected(), ToolKind::Select);
    assert!(editor.registry().tool(ToolKind::Select).alt_behaviour());

    editor.release(KeyCode::KeyS);
    assert!(editor.registry().tool(ToolKind::Add).alt_behaviour());
    assert!(!editor.registry().tool(ToolKind::Select).alt_behaviour());
}

#[test]
fn test_custom_bindings_drive_temp_modes() {
    let bindings = ToolKeyBindings {
        temp_tools: vec![
            TempToolBinding::new(KeyCode::KeyE, ToolKind::Delete).with_alt_key(KeyCode::Delete),
        ],
        select_add: KeyCode::KeyA,
    };
    let mut editor = TestEditor::with_bindings(bindings);

    editor.press(KeyCode::KeyS);
    assert_eq!(editor.selected(), ToolKind::Add);
    editor.release(KeyCode::KeyS);

    editor.press(KeyCode::Delete);
    assert_eq!(editor.selected(), ToolKind::Delete);
    editor.release(KeyCode::Delete);
    assert_eq!(editor.selected(), ToolKind::Add);
}
