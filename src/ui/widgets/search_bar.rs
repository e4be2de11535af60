//! Search bar widget

use crate::ui::theme::secondary_text;
use egui::Rounding;

/// Rounded search field with a clear button
pub struct SearchBar {
    placeholder: String,
}

impl SearchBar {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }

    /// Show the field for `query`. Returns the new text when the user edited
    /// or cleared it this frame.
    pub fn show(self, ui: &mut egui::Ui, query: &str) -> Option<String> {
        let desired_width = ui.available_width();
        let mut text = query.to_owned();
        let mut changed = false;

        egui::Frame::none()
            .fill(ui.visuals().extreme_bg_color)
            .rounding(Rounding::same(8.0))
            .inner_margin(egui::Margin::symmetric(12.0, 6.0))
            .show(ui, |ui| {
                ui.set_width(desired_width - 24.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("🔍").color(secondary_text(ui)));

                    let clear_width = if text.is_empty() { 0.0 } else { 28.0 };
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut text)
                            .hint_text(&self.placeholder)
                            .desired_width(ui.available_width() - clear_width)
                            .frame(false),
                    );
                    changed |= response.changed();

                    if !text.is_empty() && ui.small_button("✕").on_hover_text("Очистить").clicked() {
                        text.clear();
                        changed = true;
                    }
                });
            });

        changed.then_some(text)
    }
}
