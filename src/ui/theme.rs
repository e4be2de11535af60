//! Messenger theme for egui

use crate::config::Theme;
use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Messenger color palette
pub struct ChatColors;

impl ChatColors {
    // Accent
    pub const ACCENT: Color32 = Color32::from_rgb(0x25, 0x63, 0xEB);
    pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0x1D, 0x4E, 0xD8);
    pub const ACCENT_SOFT: Color32 = Color32::from_rgb(0xEF, 0xF6, 0xFF);
    pub const ACCENT_TEXT_SOFT: Color32 = Color32::from_rgb(0xDB, 0xEA, 0xFE);

    // Light theme
    pub const LIGHT_BG: Color32 = Color32::from_rgb(0xF9, 0xFA, 0xFB);
    pub const LIGHT_SURFACE: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);
    pub const LIGHT_BORDER: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);
    pub const LIGHT_TEXT: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);
    pub const LIGHT_TEXT_SECONDARY: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);

    // Dark theme
    pub const DARK_BG: Color32 = Color32::from_rgb(0x17, 0x21, 0x2B);
    pub const DARK_SURFACE: Color32 = Color32::from_rgb(0x24, 0x2F, 0x3D);
    pub const DARK_BORDER: Color32 = Color32::from_rgb(0x10, 0x16, 0x1D);
    pub const DARK_TEXT: Color32 = Color32::from_rgb(0xF5, 0xF5, 0xF5);
    pub const DARK_TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8B, 0x9B, 0xAB);

    // Placeholder icons
    pub const ICON_MUTED: Color32 = Color32::from_rgb(0xD1, 0xD5, 0xDB);

    // Presence
    pub const ONLINE: Color32 = Color32::from_rgb(0x22, 0xC5, 0x5E);

    // Unread indicator
    pub const UNREAD: Color32 = Color32::from_rgb(0x25, 0x63, 0xEB);
}

/// Theme configuration applied to the egui context
pub struct ChatTheme {
    pub is_dark: bool,
}

impl ChatTheme {
    pub fn light() -> Self {
        Self { is_dark: false }
    }

    pub fn dark() -> Self {
        Self { is_dark: true }
    }

    pub fn from_config(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    /// Apply theme to egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.visuals = if self.is_dark {
            self.dark_visuals()
        } else {
            self.light_visuals()
        };

        style.text_styles = [
            (TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
            (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
        ]
        .into();

        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        style.spacing.window_margin = egui::Margin::same(16.0);

        // Pin the theme so a system light/dark switch does not swap the style out
        ctx.set_theme(if self.is_dark {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        ctx.set_style(style);
    }

    fn light_visuals(&self) -> Visuals {
        let mut visuals = Visuals::light();

        visuals.panel_fill = ChatColors::LIGHT_SURFACE;
        visuals.window_fill = ChatColors::LIGHT_SURFACE;
        visuals.extreme_bg_color = ChatColors::LIGHT_BG;
        visuals.faint_bg_color = ChatColors::LIGHT_BG;
        visuals.override_text_color = Some(ChatColors::LIGHT_TEXT);

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, ChatColors::LIGHT_BORDER);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, ChatColors::LIGHT_TEXT_SECONDARY);
        visuals.widgets.noninteractive.rounding = Rounding::same(8.0);

        visuals.widgets.inactive.weak_bg_fill = Color32::TRANSPARENT;
        visuals.widgets.inactive.bg_fill = ChatColors::LIGHT_BG;
        visuals.widgets.inactive.rounding = Rounding::same(8.0);

        visuals.widgets.hovered.weak_bg_fill = ChatColors::LIGHT_BG;
        visuals.widgets.hovered.rounding = Rounding::same(8.0);

        visuals.widgets.active.weak_bg_fill = ChatColors::ACCENT_SOFT;
        visuals.widgets.active.rounding = Rounding::same(8.0);

        visuals.selection.bg_fill = ChatColors::ACCENT.linear_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, ChatColors::ACCENT);
        visuals.hyperlink_color = ChatColors::ACCENT;

        visuals.window_rounding = Rounding::same(12.0);
        visuals.window_shadow.blur = 8.0;

        visuals
    }

    fn dark_visuals(&self) -> Visuals {
        let mut visuals = Visuals::dark();

        visuals.panel_fill = ChatColors::DARK_SURFACE;
        visuals.window_fill = ChatColors::DARK_SURFACE;
        visuals.extreme_bg_color = ChatColors::DARK_BG;
        visuals.faint_bg_color = ChatColors::DARK_BG;
        visuals.override_text_color = Some(ChatColors::DARK_TEXT);

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, ChatColors::DARK_BORDER);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, ChatColors::DARK_TEXT_SECONDARY);
        visuals.widgets.noninteractive.rounding = Rounding::same(8.0);

        visuals.widgets.inactive.weak_bg_fill = Color32::TRANSPARENT;
        visuals.widgets.inactive.bg_fill = ChatColors::DARK_BG;
        visuals.widgets.inactive.rounding = Rounding::same(8.0);

        visuals.widgets.hovered.weak_bg_fill = ChatColors::DARK_BG;
        visuals.widgets.hovered.rounding = Rounding::same(8.0);

        visuals.widgets.active.weak_bg_fill = ChatColors::ACCENT_HOVER;
        visuals.widgets.active.rounding = Rounding::same(8.0);

        visuals.selection.bg_fill = ChatColors::ACCENT.linear_multiply(0.5);
        visuals.selection.stroke = Stroke::new(1.0, ChatColors::ACCENT);
        visuals.hyperlink_color = ChatColors::ACCENT;

        visuals.window_rounding = Rounding::same(12.0);
        visuals.window_shadow.blur = 16.0;

        visuals
    }
}

/// Secondary text color for the active visuals
pub fn secondary_text(ui: &egui::Ui) -> Color32 {
    ui.visuals().widgets.noninteractive.fg_stroke.color
}
