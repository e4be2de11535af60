//! Avatar component: a colored circle with initials

use crate::ui::theme::ChatColors;
use egui::{Color32, Vec2};

/// Avatar display component
pub struct Avatar {
    size: f32,
    color: Color32,
    initials: String,
    is_online: bool,
}

impl Avatar {
    pub fn new(initials: impl Into<String>) -> Self {
        Self {
            size: 40.0,
            color: ChatColors::ACCENT,
            initials: initials.into(),
            is_online: false,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Draw the green presence dot in the bottom-right corner
    pub fn online(mut self, is_online: bool) -> Self {
        self.is_online = is_online;
        self
    }

    /// Paint into a rect that has already been allocated
    pub fn paint(&self, ui: &egui::Ui, rect: egui::Rect) {
        if !ui.is_rect_visible(rect) {
            return;
        }

        let painter = ui.painter();
        let center = rect.center();
        let radius = self.size / 2.0;

        painter.circle_filled(center, radius, self.color);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            &self.initials,
            egui::FontId::proportional(self.size * 0.35),
            Color32::WHITE,
        );

        if self.is_online {
            let indicator_radius = self.size * 0.125;
            let indicator_center = center + Vec2::splat(radius * 0.7);

            // Ring in the panel color so the dot stands off the avatar
            painter.circle_filled(
                indicator_center,
                indicator_radius + 2.0,
                ui.visuals().panel_fill,
            );
            painter.circle_filled(indicator_center, indicator_radius, ChatColors::ONLINE);
        }
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(self.size), egui::Sense::hover());
        self.paint(ui, rect);
        response
    }
}
