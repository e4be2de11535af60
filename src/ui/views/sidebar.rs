//! Sidebar - title, search, section tabs and the active section's content

use crate::chat::{ChatAction, ChatController, Section};
use crate::ui::theme::{secondary_text, ChatColors};
use crate::ui::widgets::SearchBar;
use egui::{Rounding, Sense, Vec2};

const TAB_HEIGHT: f32 = 40.0;

pub fn show(ui: &mut egui::Ui, controller: &ChatController, actions: &mut Vec<ChatAction>) {
    egui::Frame::none()
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            show_header(ui);
            ui.add_space(8.0);

            if let Some(query) = SearchBar::new("Поиск").show(ui, controller.search_query()) {
                actions.push(ChatAction::UpdateSearchQuery(query));
            }
        });

    ui.separator();
    show_tab_bar(ui, controller.active_section(), actions);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            match controller.active_section() {
                Section::Chats => super::chat_list::show(ui, controller, actions),
                Section::Archive => show_placeholder(ui, "🗄", "Архивированных чатов нет"),
                Section::Search => show_placeholder(ui, "🔍", "Введите запрос для поиска"),
                Section::Settings => super::settings::show(ui),
            }
        });
}

fn show_header(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.heading(egui::RichText::new("Telegram").strong());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⋮").on_hover_text("Меню").clicked() {
                tracing::debug!("Menu button has no action");
            }
            if ui.button("+").on_hover_text("Новый чат").clicked() {
                tracing::debug!("New chat button has no action");
            }
        });
    });
}

fn show_tab_bar(ui: &mut egui::Ui, active: Section, actions: &mut Vec<ChatAction>) {
    let tab_width = ui.available_width() / Section::ALL.len() as f32;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;

        for section in Section::ALL {
            let (rect, response) =
                ui.allocate_exact_size(Vec2::new(tab_width, TAB_HEIGHT), Sense::click());
            let is_active = section == active;

            if is_active {
                ui.painter().rect_filled(
                    rect,
                    Rounding::ZERO,
                    ChatColors::ACCENT.linear_multiply(0.12),
                );
                let underline = egui::Rect::from_min_max(
                    egui::pos2(rect.left(), rect.bottom() - 2.0),
                    rect.right_bottom(),
                );
                ui.painter().rect_filled(underline, Rounding::ZERO, ChatColors::ACCENT);
            } else if response.hovered() {
                ui.painter()
                    .rect_filled(rect, Rounding::ZERO, ui.visuals().extreme_bg_color);
            }

            let color = if is_active {
                ChatColors::ACCENT
            } else {
                secondary_text(ui)
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                format!("{} {}", section.icon(), section.label()),
                egui::FontId::proportional(12.0),
                color,
            );

            if response.clicked() && !is_active {
                actions.push(ChatAction::SelectSection(section));
            }
        }
    });

    ui.separator();
}

/// Centered icon and caption for sections without content
pub fn show_placeholder(ui: &mut egui::Ui, icon: &str, text: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.label(egui::RichText::new(icon).size(48.0).color(ChatColors::ICON_MUTED));
        ui.add_space(16.0);
        ui.label(egui::RichText::new(text).color(secondary_text(ui)));
    });
}
