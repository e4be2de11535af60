//! Chat and message models shown by the messenger view

/// Top-level navigation target in the sidebar tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Chats,
    Archive,
    Search,
    Settings,
}

impl Section {
    /// Tab order in the sidebar
    pub const ALL: [Section; 4] = [
        Section::Chats,
        Section::Archive,
        Section::Search,
        Section::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Chats => "Чаты",
            Section::Archive => "Архив",
            Section::Search => "Поиск",
            Section::Settings => "Настройки",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Chats => "💬",
            Section::Archive => "🗄",
            Section::Search => "🔍",
            Section::Settings => "⚙",
        }
    }
}

/// A row in the chat list
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSummary {
    pub id: String,
    pub display_name: String,
    pub avatar_initials: String,
    pub last_message_preview: String,
    /// Already formatted for display ("12:30", "Вчера")
    pub last_message_time: String,
    pub unread_count: u32,
    pub is_online: bool,
}

impl ChatSummary {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        avatar_initials: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            avatar_initials: avatar_initials.into(),
            last_message_preview: String::new(),
            last_message_time: String::new(),
            unread_count: 0,
            is_online: false,
        }
    }

    pub fn with_last_message(mut self, preview: impl Into<String>, time: impl Into<String>) -> Self {
        self.last_message_preview = preview.into();
        self.last_message_time = time.into();
        self
    }

    pub fn with_unread(mut self, count: u32) -> Self {
        self.unread_count = count;
        self
    }

    pub fn online(mut self, is_online: bool) -> Self {
        self.is_online = is_online;
        self
    }

    /// Case-insensitive match against the name and the last message preview.
    /// `needle_lower` must already be lowercased.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.display_name.to_lowercase().contains(needle_lower)
            || self.last_message_preview.to_lowercase().contains(needle_lower)
    }

    /// Header subtitle for the conversation panel
    pub fn presence_label(&self) -> &'static str {
        if self.is_online {
            "В сети"
        } else {
            "Был в сети недавно"
        }
    }
}

/// A message in the thread. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender_name: String,
    /// Local wall-clock time, formatted `HH:MM`
    pub time: String,
    /// Authored by the local user
    pub is_own: bool,
}

impl Message {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        sender_name: impl Into<String>,
        time: impl Into<String>,
        is_own: bool,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            sender_name: sender_name.into(),
            time: time.into(),
            is_own,
        }
    }
}
