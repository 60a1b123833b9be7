use egui::{Color32, FontId, Rounding, Stroke, Visuals};

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_CHART: Color32 = Color32::WHITE;
pub const BG_PANEL: Color32 = Color32::from_rgb(249, 250, 251);
pub const BG_HEADER: Color32 = Color32::from_rgb(249, 250, 251);
pub const BG_WEEKEND: Color32 = Color32::from_rgb(249, 250, 251);
pub const BG_TODAY: Color32 = Color32::from_rgb(254, 242, 242);
pub const BG_OVERLAY_BUTTON: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 90);

pub const BORDER: Color32 = Color32::from_rgb(229, 231, 235);
pub const GRID_LINE: Color32 = Color32::from_rgb(243, 244, 246);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(17, 24, 39);
pub const TEXT_HEADER: Color32 = Color32::from_rgb(55, 65, 81);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(75, 85, 99);
pub const TEXT_DIM: Color32 = Color32::from_rgb(156, 163, 175);
pub const TEXT_ON_BAR: Color32 = Color32::WHITE;
pub const TEXT_TODAY: Color32 = Color32::from_rgb(220, 38, 38);

pub const ACCENT: Color32 = Color32::from_rgb(79, 70, 229);
// #EF4444 at 50%
pub const TODAY_LINE: Color32 = Color32::from_rgba_premultiplied(120, 34, 34, 128);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const SIDE_PANEL_WIDTH: f32 = 220.0;
pub const STATUS_BAR_HEIGHT: f32 = 22.0;
pub const BAR_ROUNDING: f32 = 2.0;
pub const DIALOG_WIDTH: f32 = 340.0;
pub const DASH_LENGTH: f32 = 4.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_header() -> FontId {
    FontId::proportional(12.0)
}

pub fn font_project() -> FontId {
    FontId::proportional(14.0)
}

pub fn font_milestone() -> FontId {
    FontId::proportional(12.0)
}

pub fn font_tag() -> FontId {
    FontId::proportional(crate::render::scene::TAG_FONT_SIZE)
}

pub fn font_icon() -> FontId {
    FontId::proportional(16.0)
}

pub fn font_menu() -> FontId {
    FontId::proportional(13.0)
}

pub fn font_status() -> FontId {
    FontId::proportional(11.0)
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::light();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = Color32::WHITE;
    visuals.extreme_bg_color = Color32::WHITE;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER);
    visuals.striped = false;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}

/// Register the phosphor icon font as a fallback so icons render inline
/// with text.
pub fn install_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}
