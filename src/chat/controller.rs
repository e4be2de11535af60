//! Chat view controller - owns the interaction state of the messenger screen
//!
//! Views never touch the controller directly. They emit [`ChatAction`]s while
//! the frame is built and the app feeds them to [`ChatController::dispatch`]
//! afterwards.

use super::models::{ChatSummary, Message, Section};
use super::seed;
use chrono::{DateTime, Local};

/// Mutable view state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub active_section: Section,
    /// May reference an id that is not in the chat list
    pub active_chat_id: Option<String>,
    pub compose_text: String,
    pub search_query: String,
}

/// A user-triggered operation on the controller
#[derive(Debug, Clone, PartialEq)]
pub enum ChatAction {
    SelectSection(Section),
    SelectChat(String),
    UpdateSearchQuery(String),
    UpdateComposeText(String),
    SendMessage,
}

pub struct ChatController {
    state: ViewState,
    chats: Vec<ChatSummary>,
    messages: Vec<Message>,
    next_message_id: u64,
}

impl ChatController {
    /// Controller over the built-in dataset
    pub fn new() -> Self {
        Self::with_data(seed::chats(), seed::messages())
    }

    pub fn with_data(chats: Vec<ChatSummary>, messages: Vec<Message>) -> Self {
        // Numeric ids continue after the highest seeded one
        let next_message_id = messages
            .iter()
            .filter_map(|m| m.id.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);

        Self {
            state: ViewState::default(),
            chats,
            messages,
            next_message_id,
        }
    }

    pub fn active_section(&self) -> Section {
        self.state.active_section
    }

    pub fn active_chat_id(&self) -> Option<&str> {
        self.state.active_chat_id.as_deref()
    }

    pub fn compose_text(&self) -> &str {
        &self.state.compose_text
    }

    pub fn search_query(&self) -> &str {
        &self.state.search_query
    }

    pub fn chats(&self) -> &[ChatSummary] {
        &self.chats
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Apply a single action
    pub fn dispatch(&mut self, action: ChatAction) {
        match action {
            ChatAction::SelectSection(section) => self.select_section(section),
            ChatAction::SelectChat(id) => self.select_chat(id),
            ChatAction::UpdateSearchQuery(text) => self.update_search_query(text),
            ChatAction::UpdateComposeText(text) => self.update_compose_text(text),
            ChatAction::SendMessage => self.send_message(),
        }
    }

    pub fn select_section(&mut self, section: Section) {
        tracing::debug!("Switching section: {:?}", section);
        self.state.active_section = section;
    }

    /// The id is not checked against the chat list.
    pub fn select_chat(&mut self, chat_id: impl Into<String>) {
        let chat_id = chat_id.into();
        tracing::info!("Selected chat: {}", chat_id);
        self.state.active_chat_id = Some(chat_id);
    }

    pub fn update_search_query(&mut self, text: impl Into<String>) {
        self.state.search_query = text.into();
    }

    pub fn update_compose_text(&mut self, text: impl Into<String>) {
        self.state.compose_text = text.into();
    }

    /// Whether the compose buffer holds anything besides whitespace
    pub fn can_send(&self) -> bool {
        is_sendable(&self.state.compose_text)
    }

    /// Send the compose buffer, stamped with the current local time
    pub fn send_message(&mut self) {
        self.send_message_at(Local::now());
    }

    /// Send the compose buffer, stamped with `now`.
    ///
    /// A blank buffer is ignored. The text is stored exactly as typed,
    /// surrounding whitespace included.
    pub fn send_message_at(&mut self, now: DateTime<Local>) {
        if !self.can_send() {
            tracing::debug!("Ignoring send of blank message");
            return;
        }

        let id = self.next_message_id;
        self.next_message_id += 1;

        let message = Message::new(
            id.to_string(),
            std::mem::take(&mut self.state.compose_text),
            seed::LOCAL_USER_NAME,
            now.format("%H:%M").to_string(),
            true,
        );

        tracing::info!("Sent message {} at {}", message.id, message.time);
        self.messages.push(message);
    }

    /// Chats matching the search query, in list order
    pub fn visible_chats(&self) -> Vec<&ChatSummary> {
        if self.state.search_query.is_empty() {
            return self.chats.iter().collect();
        }

        let needle = self.state.search_query.to_lowercase();
        self.chats.iter().filter(|c| c.matches(&needle)).collect()
    }

    /// The chat referenced by the active chat id, if it exists
    pub fn active_chat_summary(&self) -> Option<&ChatSummary> {
        let id = self.state.active_chat_id.as_deref()?;
        self.chats.iter().find(|c| c.id == id)
    }
}

/// Blank (empty or whitespace-only) text is never sent
pub fn is_sendable(text: &str) -> bool {
    !text.trim().is_empty()
}

impl Default for ChatController {
    fn default() -> Self {
        Self::new()
    }
}
