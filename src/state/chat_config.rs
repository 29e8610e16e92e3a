//! Per-chat configuration: rules text and welcome templates.

use crate::types::ChatId;
use dashmap::DashMap;

/// Placeholder replaced with the joining member's name.
const USER_TOKEN: &str = "{user}";
/// Placeholder replaced with the chat title.
const CHAT_TOKEN: &str = "{chat}";

/// Per-chat rules and welcome storage.
///
/// The two namespaces are independent; an absent key means "not
/// configured", which is distinct from an empty string.
#[derive(Debug, Default)]
pub struct ChatConfigStore {
    rules: DashMap<ChatId, String>,
    welcome: DashMap<ChatId, String>,
}

impl ChatConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_rules(&self, chat: ChatId, text: String) {
        self.rules.insert(chat, text);
    }

    pub fn rules(&self, chat: ChatId) -> Option<String> {
        self.rules.get(&chat).map(|r| r.value().clone())
    }

    pub fn set_welcome(&self, chat: ChatId, template: String) {
        self.welcome.insert(chat, template);
    }

    pub fn welcome(&self, chat: ChatId) -> Option<String> {
        self.welcome.get(&chat).map(|w| w.value().clone())
    }

    pub fn delete_welcome(&self, chat: ChatId) {
        self.welcome.remove(&chat);
    }
}

/// Substitute `{user}` and `{chat}` into a welcome template.
///
/// A chat with no title (possible for basic groups) substitutes "chat".
pub fn render_welcome(template: &str, user_name: &str, chat_title: Option<&str>) -> String {
    template
        .replace(USER_TOKEN, user_name)
        .replace(CHAT_TOKEN, chat_title.unwrap_or("chat"))
}
