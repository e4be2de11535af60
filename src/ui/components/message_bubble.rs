//! Message bubble component

use crate::ui::theme::{secondary_text, ChatColors};
use egui::{Align, Color32, Layout, Rounding};

/// Message bubble direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BubbleDirection {
    /// Authored by the local user, right aligned
    Own,
    Incoming,
}

impl BubbleDirection {
    pub fn from_own(is_own: bool) -> Self {
        if is_own {
            Self::Own
        } else {
            Self::Incoming
        }
    }
}

/// Message bubble component
pub struct MessageBubble {
    direction: BubbleDirection,
    max_width: f32,
}

impl MessageBubble {
    pub fn new(direction: BubbleDirection) -> Self {
        Self {
            direction,
            max_width: 400.0,
        }
    }

    pub fn max_width(mut self, width: f32) -> Self {
        self.max_width = width;
        self
    }

    /// Show the message bubble with content
    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        let is_own = self.direction == BubbleDirection::Own;

        let bubble_color = if is_own {
            ChatColors::ACCENT
        } else {
            ui.visuals().panel_fill
        };

        let align = if is_own { Align::Max } else { Align::Min };

        ui.with_layout(Layout::top_down(align), |ui| {
            egui::Frame::none()
                .fill(bubble_color)
                .rounding(Rounding::same(16.0))
                .inner_margin(egui::Margin::symmetric(16.0, 8.0))
                .show(ui, |ui| {
                    ui.set_max_width(self.max_width);
                    ui.with_layout(Layout::top_down(Align::Min), add_contents).inner
                })
                .inner
        })
    }
}

/// Text message with its time underneath
pub fn text_message(
    ui: &mut egui::Ui,
    text: &str,
    time: &str,
    direction: BubbleDirection,
) -> egui::Response {
    let max_width = (ui.available_width() * 0.6).clamp(200.0, 420.0);
    let (text_color, time_color) = match direction {
        BubbleDirection::Own => (Color32::WHITE, ChatColors::ACCENT_TEXT_SOFT),
        BubbleDirection::Incoming => (ui.visuals().text_color(), secondary_text(ui)),
    };

    MessageBubble::new(direction)
        .max_width(max_width)
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 4.0;
            ui.label(egui::RichText::new(text).size(14.0).color(text_color));
            ui.label(egui::RichText::new(time).size(11.0).color(time_color));
        })
        .response
}
