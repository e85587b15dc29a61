use bevy_egui::egui;

use tools::ToolKind;

use super::catalog::{ButtonHighlight, ToolbarEntry};
use crate::theme;

// ---------------------------------------------------------------------------
// Tool button
// ---------------------------------------------------------------------------

/// Renders an icon button, filled green when active and red when the
/// alternate behaviour is armed. Unselected buttons keep the theme fill.
pub(crate) fn tool_button(
    ui: &mut egui::Ui,
    icon: &str,
    highlight: ButtonHighlight,
) -> egui::Response {
    let text = egui::RichText::new(icon).size(theme::TOOL_ICON_SIZE);
    let mut button = egui::Button::new(text).min_size(egui::vec2(
        theme::TOOL_BUTTON_SIZE,
        theme::TOOL_BUTTON_SIZE,
    ));

    let fills = match highlight {
        ButtonHighlight::None => None,
        ButtonHighlight::Active => Some((theme::TOOL_ACTIVE, theme::TOOL_ACTIVE_HOVER)),
        ButtonHighlight::Alternate => Some((theme::TOOL_ALTERNATE, theme::TOOL_ALTERNATE_HOVER)),
    };

    if let Some((fill, hover_fill)) = fills {
        // Hover colour comes from the style, so override it for this button only.
        let visuals = &mut ui.style_mut().visuals.widgets;
        visuals.hovered.weak_bg_fill = hover_fill;
        visuals.active.weak_bg_fill = hover_fill;
        button = button.fill(fill);
    }

    ui.add(button)
}

// ---------------------------------------------------------------------------
// Tool row
// ---------------------------------------------------------------------------

/// Draws the tool row left to right and returns each button's response.
/// Separators render as disabled text and produce no response.
pub fn show_tool_buttons(
    ui: &mut egui::Ui,
    entries: &[ToolbarEntry],
) -> Vec<(ToolKind, egui::Response)> {
    let mut responses = Vec::with_capacity(entries.len());
    ui.horizontal(|ui| {
        for entry in entries {
            match *entry {
                ToolbarEntry::Separator => {
                    ui.add_enabled(false, egui::Label::new("|"));
                }
                ToolbarEntry::Button {
                    kind,
                    icon,
                    help,
                    highlight,
                } => {
                    let response = ui
                        .scope(|ui| tool_button(ui, icon, highlight))
                        .inner
                        .on_hover_text(help);
                    responses.push((kind, response));
                }
            }
        }
    });
    responses
}
