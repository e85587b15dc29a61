use bevy_egui::{egui, EguiContexts};

// Tool button fills
pub const TOOL_ACTIVE: egui::Color32 = egui::Color32::from_rgb(46, 125, 50);
pub const TOOL_ACTIVE_HOVER: egui::Color32 = egui::Color32::from_rgb(67, 160, 71);
pub const TOOL_ALTERNATE: egui::Color32 = egui::Color32::from_rgb(183, 28, 28);
pub const TOOL_ALTERNATE_HOVER: egui::Color32 = egui::Color32::from_rgb(211, 47, 47);

pub const TOOL_ICON_SIZE: f32 = 16.0;
pub const TOOL_BUTTON_SIZE: f32 = 28.0;
pub const TOOLTIP_DELAY_SECS: f32 = 0.3;

pub fn apply_editor_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let panel = egui::Color32::from_rgb(35, 37, 48);
    let inactive = egui::Color32::from_rgb(50, 55, 65);
    let hover = egui::Color32::from_rgb(70, 80, 100);
    let active = egui::Color32::from_rgb(100, 160, 220);

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;

    // egui 0.31+ uses CornerRadius with u8 values
    let widget_rounding = egui::CornerRadius::same(4);
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    style.interaction.tooltip_delay = TOOLTIP_DELAY_SECS;

    ctx.set_style(style);
}
