//! Chat view - header, message thread and compose row of the active chat

use crate::chat::controller::is_sendable;
use crate::chat::{ChatAction, ChatController, ChatSummary, Message};
use crate::ui::components::message_bubble::{self, BubbleDirection};
use crate::ui::components::Avatar;
use crate::ui::theme::{secondary_text, ChatColors};
use egui::{Key, Vec2};

/// Show the conversation panel, or the welcome screen when the active chat
/// id is unset or unknown
pub fn show(ui: &mut egui::Ui, controller: &ChatController, actions: &mut Vec<ChatAction>) {
    let Some(chat) = controller.active_chat_summary() else {
        if let Some(id) = controller.active_chat_id() {
            tracing::trace!("Active chat {} not found, showing welcome screen", id);
        }
        show_empty_state(ui);
        return;
    };

    egui::TopBottomPanel::top("chat_header")
        .frame(panel_frame(ui))
        .show_inside(ui, |ui| {
            show_conversation_header(ui, chat);
        });

    egui::TopBottomPanel::bottom("compose")
        .frame(panel_frame(ui))
        .show_inside(ui, |ui| {
            show_message_input(ui, controller.compose_text(), actions);
        });

    egui::CentralPanel::default()
        .frame(
            egui::Frame::none()
                .fill(ui.visuals().extreme_bg_color)
                .inner_margin(egui::Margin::same(16.0)),
        )
        .show_inside(ui, |ui| {
            show_messages(ui, controller.messages());
        });
}

fn panel_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::none()
        .fill(ui.visuals().panel_fill)
        .inner_margin(egui::Margin::same(16.0))
}

/// Show empty state when no conversation is selected
fn show_empty_state(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);

        ui.label(egui::RichText::new("💬").size(64.0).color(ChatColors::ICON_MUTED));
        ui.add_space(16.0);
        ui.heading("Добро пожаловать в Telegram");
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("Выберите чат, чтобы начать общение").color(secondary_text(ui)),
        );
    });
}

fn show_conversation_header(ui: &mut egui::Ui, chat: &ChatSummary) {
    ui.horizontal(|ui| {
        Avatar::new(&chat.avatar_initials).size(40.0).show(ui);

        ui.add_space(4.0);

        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing.y = 2.0;
            ui.label(egui::RichText::new(&chat.display_name).strong().size(16.0));
            ui.label(
                egui::RichText::new(chat.presence_label())
                    .size(13.0)
                    .color(secondary_text(ui)),
            );
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Calls and the chat menu are not implemented
            if ui.button("⋮").on_hover_text("Ещё").clicked() {
                tracing::debug!("Chat menu has no action");
            }
            if ui.button("📹").on_hover_text("Видеозвонок").clicked() {
                tracing::debug!("Video call has no action");
            }
            if ui.button("📞").on_hover_text("Звонок").clicked() {
                tracing::debug!("Voice call has no action");
            }
        });
    });
}

fn show_messages(ui: &mut egui::Ui, messages: &[Message]) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.spacing_mut().item_spacing.y = 16.0;

            for msg in messages {
                message_bubble::text_message(
                    ui,
                    &msg.text,
                    &msg.time,
                    BubbleDirection::from_own(msg.is_own),
                )
                .on_hover_text(msg.sender_name.as_str());
            }
        });
}

/// Show the compose row. Enter or the send button queue a send; the button
/// is disabled while the buffer is blank.
fn show_message_input(ui: &mut egui::Ui, compose_text: &str, actions: &mut Vec<ChatAction>) {
    let mut input = compose_text.to_owned();

    ui.horizontal(|ui| {
        if ui.button("📎").on_hover_text("Прикрепить файл").clicked() {
            tracing::debug!("Attachments are not supported");
        }

        let response = ui.add(
            egui::TextEdit::singleline(&mut input)
                .hint_text("Введите сообщение...")
                .desired_width(ui.available_width() - 90.0),
        );

        if response.changed() {
            actions.push(ChatAction::UpdateComposeText(input.clone()));
        }

        if ui.button("😊").on_hover_text("Эмодзи").clicked() {
            tracing::debug!("Emoji picker is not supported");
        }

        let can_send = is_sendable(&input);
        let send_button = egui::Button::new(egui::RichText::new("➤").color(egui::Color32::WHITE))
            .fill(ChatColors::ACCENT)
            .min_size(Vec2::new(36.0, 28.0));
        let send_clicked = ui
            .add_enabled(can_send, send_button)
            .on_hover_text("Отправить")
            .clicked();

        let enter_pressed = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

        if send_clicked || enter_pressed {
            actions.push(ChatAction::SendMessage);
            response.request_focus();
        }
    });
}
