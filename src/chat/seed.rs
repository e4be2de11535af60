//! Hardcoded dataset the view starts with

use super::models::{ChatSummary, Message};

/// Sender name used for messages authored by the local user
pub const LOCAL_USER_NAME: &str = "Вы";

pub fn chats() -> Vec<ChatSummary> {
    vec![
        ChatSummary::new("1", "Алексей Петров", "AP")
            .with_last_message("Привет! Как дела?", "12:30")
            .with_unread(2)
            .online(true),
        ChatSummary::new("2", "Команда разработки", "КР")
            .with_last_message("Обновили API документацию", "11:45"),
        ChatSummary::new("3", "Мария Иванова", "МИ")
            .with_last_message("Отправила файлы", "10:20")
            .with_unread(1)
            .online(true),
        ChatSummary::new("4", "Новости Tech", "НТ")
            .with_last_message("Новый релиз React 19", "Вчера"),
    ]
}

pub fn messages() -> Vec<Message> {
    vec![
        Message::new("1", "Привет! Как дела?", "Алексей Петров", "12:30", false),
        Message::new(
            "2",
            "Привет! Все отлично, работаю над новым проектом",
            LOCAL_USER_NAME,
            "12:32",
            true,
        ),
        Message::new(
            "3",
            "Звучит интересно! Расскажешь подробнее?",
            "Алексей Петров",
            "12:33",
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_chat_ids_unique() {
        let chats = chats();
        let ids: HashSet<_> = chats.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), chats.len());
        assert_eq!(chats.len(), 4);
    }

    #[test]
    fn test_avatar_initials() {
        let initials: Vec<String> = chats().into_iter().map(|c| c.avatar_initials).collect();
        // The first chat's initials are Latin letters, the rest Cyrillic
        assert_eq!(initials, vec!["AP", "КР", "МИ", "НТ"]);
        assert!(initials[0].is_ascii());
    }

    #[test]
    fn test_message_ids_unique() {
        let messages = messages();
        let ids: HashSet<_> = messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), messages.len());
    }
}
