//! Main view - sidebar on the left, conversation on the right

use crate::chat::{ChatAction, ChatController};

pub const SIDEBAR_WIDTH: f32 = 320.0;

/// Show the whole messenger screen
pub fn show(ctx: &egui::Context, controller: &ChatController, actions: &mut Vec<ChatAction>) {
    egui::SidePanel::left("sidebar")
        .resizable(false)
        .exact_width(SIDEBAR_WIDTH)
        .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::ZERO))
        .show(ctx, |ui| {
            super::sidebar::show(ui, controller, actions);
        });

    egui::CentralPanel::default()
        .frame(
            egui::Frame::central_panel(&ctx.style())
                .fill(ctx.style().visuals.extreme_bg_color)
                .inner_margin(egui::Margin::ZERO),
        )
        .show(ctx, |ui| {
            super::chat_view::show(ui, controller, actions);
        });
}
