//! Main application state and frame loop

use crate::chat::{ChatAction, ChatController};
use crate::config::AppConfig;
use crate::ui::{theme::ChatTheme, views::main_view};

pub struct MessengerApp {
    controller: ChatController,
}

impl MessengerApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        ChatTheme::from_config(config.theme).apply(&cc.egui_ctx);

        let controller = ChatController::new();
        tracing::info!(
            "Loaded {} chats and {} messages",
            controller.chats().len(),
            controller.messages().len()
        );

        Self::with_controller(controller)
    }

    pub fn with_controller(controller: ChatController) -> Self {
        Self { controller }
    }

    #[cfg(test)]
    pub fn controller(&self) -> &ChatController {
        &self.controller
    }

    /// Build one frame, then apply the actions it produced in order.
    /// Returns the number of actions applied.
    pub fn render(&mut self, ctx: &egui::Context) -> usize {
        let mut actions: Vec<ChatAction> = Vec::new();
        main_view::show(ctx, &self.controller, &mut actions);

        let applied = actions.len();
        for action in actions {
            self.controller.dispatch(action);
        }

        if applied > 0 {
            // State changed after layout; show it without waiting for input
            ctx.request_repaint();
        }

        applied
    }
}

impl eframe::App for MessengerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Section;
    use crate::config::Theme;
    use egui::{Event, Key, Modifiers, PointerButton, Pos2, Rect, Shape};

    const SCREEN: Rect = Rect {
        min: Pos2::ZERO,
        max: Pos2 { x: 1200.0, y: 800.0 },
    };

    /// Text drawn during a frame, with its screen rect
    struct FrameText {
        text: String,
        rect: Rect,
    }

    fn collect_texts(shape: &Shape, out: &mut Vec<FrameText>) {
        match shape {
            Shape::Text(text) => out.push(FrameText {
                text: text.galley.text().to_owned(),
                rect: text.galley.rect.translate(text.pos.to_vec2()),
            }),
            Shape::Vec(shapes) => {
                for shape in shapes {
                    collect_texts(shape, out);
                }
            }
            _ => {}
        }
    }

    fn run_events(app: &mut MessengerApp, ctx: &egui::Context, events: Vec<Event>) -> Vec<FrameText> {
        let input = egui::RawInput {
            screen_rect: Some(SCREEN),
            events,
            ..Default::default()
        };

        let output = ctx.run(input, |ctx| {
            app.render(ctx);
        });

        let mut texts = Vec::new();
        for clipped in &output.shapes {
            collect_texts(&clipped.shape, &mut texts);
        }
        texts
    }

    fn run_frame(app: &mut MessengerApp, ctx: &egui::Context) -> Vec<FrameText> {
        run_events(app, ctx, Vec::new())
    }

    fn contains(texts: &[FrameText], needle: &str) -> bool {
        texts.iter().any(|t| t.text == needle)
    }

    fn center_of(texts: &[FrameText], needle: &str) -> Pos2 {
        texts
            .iter()
            .find(|t| t.text == needle)
            .map(|t| t.rect.center())
            .unwrap_or_else(|| panic!("{:?} was not drawn", needle))
    }

    /// Press and release the primary button at `pos`, returning the texts of
    /// the frame after the release
    fn click(app: &mut MessengerApp, ctx: &egui::Context, pos: Pos2) -> Vec<FrameText> {
        let button = |pressed| Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        };

        run_events(app, ctx, vec![Event::PointerMoved(pos), button(true)]);
        run_events(app, ctx, vec![button(false)]);
        run_frame(app, ctx)
    }

    fn type_text(app: &mut MessengerApp, ctx: &egui::Context, text: &str) {
        run_events(app, ctx, vec![Event::Text(text.to_string())]);
    }

    fn press_enter(app: &mut MessengerApp, ctx: &egui::Context) {
        let key = |pressed| Event::Key {
            key: Key::Enter,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: Modifiers::default(),
        };
        run_events(app, ctx, vec![key(true), key(false)]);
    }

    /// Render a couple of frames so widget rects are known for hit testing
    fn settled(app: &mut MessengerApp, ctx: &egui::Context) -> Vec<FrameText> {
        run_frame(app, ctx);
        run_frame(app, ctx)
    }

    #[test]
    fn test_unknown_chat_renders_welcome_screen() {
        let ctx = egui::Context::default();
        let mut controller = ChatController::new();
        controller.select_chat("nonexistent-id");
        let mut app = MessengerApp::with_controller(controller);

        let texts = settled(&mut app, &ctx);

        assert!(contains(&texts, "Добро пожаловать в Telegram"));
        assert!(contains(&texts, "Выберите чат, чтобы начать общение"));
        assert!(!contains(&texts, "Введите сообщение..."));
        assert!(!contains(&texts, "Был в сети недавно"));
    }

    #[test]
    fn test_known_chat_renders_conversation() {
        let ctx = egui::Context::default();
        let mut controller = ChatController::new();
        controller.select_chat("2");
        let mut app = MessengerApp::with_controller(controller);

        let texts = settled(&mut app, &ctx);

        assert!(!contains(&texts, "Добро пожаловать в Telegram"));
        assert!(contains(&texts, "Введите сообщение..."));
        assert!(contains(&texts, "Был в сети недавно"));
        assert!(contains(&texts, "Звучит интересно! Расскажешь подробнее?"));
    }

    #[test]
    fn test_every_section_renders_without_input() {
        for theme in [Theme::Light, Theme::Dark] {
            for section in Section::ALL {
                let ctx = egui::Context::default();
                ChatTheme::from_config(theme).apply(&ctx);

                let mut controller = ChatController::new();
                controller.select_section(section);
                controller.select_chat("1");
                controller.update_compose_text("draft");
                let mut app = MessengerApp::with_controller(controller);

                settled(&mut app, &ctx);
                assert_eq!(app.controller().active_section(), section);
                assert_eq!(app.controller().compose_text(), "draft");
            }
        }
    }

    #[test]
    fn test_search_with_no_matches_renders() {
        let ctx = egui::Context::default();
        let mut controller = ChatController::new();
        controller.update_search_query("zzz");
        let mut app = MessengerApp::with_controller(controller);

        let texts = settled(&mut app, &ctx);

        assert!(contains(&texts, "Ничего не найдено"));
        assert!(!contains(&texts, "Алексей Петров"));
    }

    #[test]
    fn test_enter_sends_untrimmed_compose_text() {
        let ctx = egui::Context::default();
        let mut controller = ChatController::new();
        controller.select_chat("1");
        let mut app = MessengerApp::with_controller(controller);
        let before = app.controller().messages().len();

        let texts = settled(&mut app, &ctx);
        click(&mut app, &ctx, center_of(&texts, "Введите сообщение..."));
        type_text(&mut app, &ctx, "  hi ");
        assert_eq!(app.controller().compose_text(), "  hi ");

        press_enter(&mut app, &ctx);

        let messages = app.controller().messages();
        assert_eq!(messages.len(), before + 1);
        assert_eq!(messages[messages.len() - 1].text, "  hi ");
        assert!(messages[messages.len() - 1].is_own);
        assert_eq!(app.controller().compose_text(), "");
    }

    #[test]
    fn test_enter_on_blank_compose_sends_nothing() {
        let ctx = egui::Context::default();
        let mut controller = ChatController::new();
        controller.select_chat("1");
        let mut app = MessengerApp::with_controller(controller);
        let before = app.controller().messages().len();

        let texts = settled(&mut app, &ctx);
        click(&mut app, &ctx, center_of(&texts, "Введите сообщение..."));
        type_text(&mut app, &ctx, "   ");
        press_enter(&mut app, &ctx);

        assert_eq!(app.controller().messages().len(), before);
        assert_eq!(app.controller().compose_text(), "   ");
    }

    #[test]
    fn test_send_button_sends_message() {
        let ctx = egui::Context::default();
        let mut controller = ChatController::new();
        controller.select_chat("3");
        controller.update_compose_text("Привет");
        let mut app = MessengerApp::with_controller(controller);
        let before = app.controller().messages().len();

        let texts = settled(&mut app, &ctx);
        let texts = click(&mut app, &ctx, center_of(&texts, "➤"));

        assert_eq!(app.controller().messages().len(), before + 1);
        assert_eq!(app.controller().compose_text(), "");
        assert!(contains(&texts, "Привет"));
    }

    #[test]
    fn test_row_click_selects_chat() {
        let ctx = egui::Context::default();
        let mut app = MessengerApp::with_controller(ChatController::new());

        let texts = settled(&mut app, &ctx);
        let texts = click(&mut app, &ctx, center_of(&texts, "Мария Иванова"));

        assert_eq!(app.controller().active_chat_id(), Some("3"));
        assert!(!contains(&texts, "Добро пожаловать в Telegram"));
        assert!(contains(&texts, "В сети"));
        assert_eq!(app.controller().chats()[2].unread_count, 1);
    }

    #[test]
    fn test_tab_click_switches_section_and_back() {
        let ctx = egui::Context::default();
        let mut controller = ChatController::new();
        controller.select_chat("1");
        controller.update_compose_text("draft");
        let mut app = MessengerApp::with_controller(controller);

        let texts = settled(&mut app, &ctx);
        let texts = click(&mut app, &ctx, center_of(&texts, "🗄 Архив"));

        assert_eq!(app.controller().active_section(), Section::Archive);
        assert!(contains(&texts, "Архивированных чатов нет"));
        assert!(!contains(&texts, "Мария Иванова"));

        let texts = click(&mut app, &ctx, center_of(&texts, "💬 Чаты"));

        assert_eq!(app.controller().active_section(), Section::Chats);
        assert!(contains(&texts, "Мария Иванова"));
        assert_eq!(app.controller().active_chat_id(), Some("1"));
        assert_eq!(app.controller().compose_text(), "draft");
    }

    #[test]
    fn test_search_edit_filters_chat_list() {
        let ctx = egui::Context::default();
        let mut app = MessengerApp::with_controller(ChatController::new());

        let texts = settled(&mut app, &ctx);
        click(&mut app, &ctx, center_of(&texts, "Поиск"));
        type_text(&mut app, &ctx, "МАРИЯ");
        let texts = run_frame(&mut app, &ctx);

        assert_eq!(app.controller().search_query(), "МАРИЯ");
        assert!(contains(&texts, "Мария Иванова"));
        assert!(!contains(&texts, "Алексей Петров"));
    }
}
