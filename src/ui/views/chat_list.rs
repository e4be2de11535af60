//! Chat list - rows for the chats matching the search query

use crate::chat::{ChatAction, ChatController, ChatSummary};
use crate::ui::components::{Avatar, Badge};
use crate::ui::theme::{secondary_text, ChatColors};
use egui::{Rounding, Sense, Vec2};
use unicode_segmentation::UnicodeSegmentation;

const ROW_HEIGHT: f32 = 72.0;
const AVATAR_SIZE: f32 = 48.0;
const PREVIEW_MAX_GRAPHEMES: usize = 32;

pub fn show(ui: &mut egui::Ui, controller: &ChatController, actions: &mut Vec<ChatAction>) {
    let chats = controller.visible_chats();
    let selected_id = controller.active_chat_id();

    ui.add_space(8.0);

    for chat in &chats {
        if show_chat_item(ui, chat, selected_id) {
            actions.push(ChatAction::SelectChat(chat.id.clone()));
        }
    }

    if chats.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(egui::RichText::new("Ничего не найдено").color(secondary_text(ui)));
        });
    }
}

/// Returns true when the row was clicked
fn show_chat_item(ui: &mut egui::Ui, chat: &ChatSummary, selected_id: Option<&str>) -> bool {
    let padding = 12.0;
    let (rect, response) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), ROW_HEIGHT),
        Sense::click(),
    );
    let row = rect.shrink2(Vec2::new(8.0, 0.0));

    let is_selected = selected_id == Some(chat.id.as_str());

    if is_selected {
        ui.painter().rect_filled(
            row,
            Rounding::same(8.0),
            ChatColors::ACCENT.linear_multiply(0.12),
        );
    } else if response.hovered() {
        ui.painter()
            .rect_filled(row, Rounding::same(8.0), ui.visuals().extreme_bg_color);
    }

    let avatar_rect = egui::Rect::from_min_size(
        row.min + Vec2::new(padding, (ROW_HEIGHT - AVATAR_SIZE) / 2.0),
        Vec2::splat(AVATAR_SIZE),
    );
    Avatar::new(&chat.avatar_initials)
        .size(AVATAR_SIZE)
        .online(chat.is_online)
        .paint(ui, avatar_rect);

    let text_left = avatar_rect.right() + padding;
    let text_right = row.right() - padding;

    // Name
    ui.painter().text(
        egui::pos2(text_left, row.min.y + 16.0),
        egui::Align2::LEFT_TOP,
        &chat.display_name,
        egui::FontId::proportional(15.0),
        ui.visuals().text_color(),
    );

    // Time
    ui.painter().text(
        egui::pos2(text_right, row.min.y + 16.0),
        egui::Align2::RIGHT_TOP,
        &chat.last_message_time,
        egui::FontId::proportional(12.0),
        secondary_text(ui),
    );

    // Last message preview
    ui.painter().text(
        egui::pos2(text_left, row.min.y + 40.0),
        egui::Align2::LEFT_TOP,
        truncate_preview(&chat.last_message_preview, PREVIEW_MAX_GRAPHEMES),
        egui::FontId::proportional(13.0),
        secondary_text(ui),
    );

    // Unread badge
    if chat.unread_count > 0 {
        Badge::count(chat.unread_count)
            .paint_right_aligned(ui, egui::pos2(text_right, row.min.y + 48.0));
    }

    response.clicked()
}

/// Shorten to at most `max` grapheme clusters, adding an ellipsis when cut
pub fn truncate_preview(text: &str, max: usize) -> String {
    let mut graphemes = text.graphemes(true);
    let head: String = graphemes.by_ref().take(max).collect();

    if graphemes.next().is_some() {
        format!("{}…", head)
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_preview_is_unchanged() {
        assert_eq!(truncate_preview("Отправила файлы", 32), "Отправила файлы");
        assert_eq!(truncate_preview("", 32), "");
    }

    #[test]
    fn test_long_preview_is_cut_on_grapheme_boundary() {
        assert_eq!(truncate_preview("Привет! Как дела?", 6), "Привет…");

        // Flag emoji is two code points but one grapheme
        let flags = "🇷🇺🇷🇺🇷🇺";
        assert_eq!(truncate_preview(flags, 2), "🇷🇺🇷🇺…");
    }

    #[test]
    fn test_exact_length_preview_has_no_ellipsis() {
        assert_eq!(truncate_preview("abc", 3), "abc");
    }
}
