//! Unread count badge

use crate::ui::theme::ChatColors;
use egui::{Color32, Vec2};

/// Pill showing a count, capped at "99+"
pub struct Badge {
    count: u32,
    color: Color32,
    text_color: Color32,
}

impl Badge {
    pub fn count(count: u32) -> Self {
        Self {
            count,
            color: ChatColors::UNREAD,
            text_color: Color32::WHITE,
        }
    }

    pub fn label(&self) -> String {
        if self.count > 99 {
            "99+".to_string()
        } else {
            self.count.to_string()
        }
    }

    /// Width and height of the pill for the current label
    fn size(&self, ui: &egui::Ui, font: &egui::FontId) -> Vec2 {
        let padding = 6.0;
        let galley = ui
            .painter()
            .layout_no_wrap(self.label(), font.clone(), self.text_color);
        Vec2::new((galley.rect.width() + padding * 2.0).max(20.0), 20.0)
    }

    /// Paint the badge with its right edge centered vertically on `anchor`
    pub fn paint_right_aligned(&self, ui: &egui::Ui, anchor: egui::Pos2) {
        let font = egui::FontId::proportional(11.0);
        let size = self.size(ui, &font);
        let rect = egui::Rect::from_min_size(
            egui::pos2(anchor.x - size.x, anchor.y - size.y / 2.0),
            size,
        );

        let painter = ui.painter();
        painter.rect_filled(rect, egui::Rounding::same(size.y / 2.0), self.color);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            self.label(),
            font,
            self.text_color,
        );
    }
}
