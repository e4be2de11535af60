//! Settings section of the sidebar

use egui::{Rounding, Sense, Vec2};

/// Entries of the settings list
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsItem {
    Profile,
    Notifications,
    Privacy,
    Themes,
}

impl SettingsItem {
    pub const ALL: [SettingsItem; 4] = [
        SettingsItem::Profile,
        SettingsItem::Notifications,
        SettingsItem::Privacy,
        SettingsItem::Themes,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            SettingsItem::Profile => "👤",
            SettingsItem::Notifications => "🔔",
            SettingsItem::Privacy => "🛡",
            SettingsItem::Themes => "🎨",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsItem::Profile => "Профиль",
            SettingsItem::Notifications => "Уведомления",
            SettingsItem::Privacy => "Конфиденциальность",
            SettingsItem::Themes => "Темы",
        }
    }
}

/// Show the settings list. The entries are static and open nothing.
pub fn show(ui: &mut egui::Ui) {
    ui.add_space(16.0);

    for item in SettingsItem::ALL {
        if show_item(ui, item) {
            tracing::debug!("Settings item {:?} has no page", item);
        }
        ui.add_space(4.0);
    }
}

fn show_item(ui: &mut egui::Ui, item: SettingsItem) -> bool {
    let row_height = 44.0;
    let padding = 16.0;
    let (rect, response) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), row_height),
        Sense::click(),
    );
    let inner = rect.shrink2(Vec2::new(padding, 0.0));

    if response.hovered() {
        ui.painter()
            .rect_filled(inner, Rounding::same(8.0), ui.visuals().extreme_bg_color);
    }

    ui.painter().text(
        egui::pos2(inner.left() + 12.0, inner.center().y),
        egui::Align2::LEFT_CENTER,
        item.icon(),
        egui::FontId::proportional(18.0),
        ui.visuals().text_color(),
    );
    ui.painter().text(
        egui::pos2(inner.left() + 44.0, inner.center().y),
        egui::Align2::LEFT_CENTER,
        item.label(),
        egui::FontId::proportional(14.0),
        ui.visuals().text_color(),
    );

    response.clicked()
}
