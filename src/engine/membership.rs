//! Member-join flow.

use super::Engine;
use crate::outcome::CommandOutcome;
use crate::state::render_welcome;
use crate::types::{ChatInfo, User};

impl Engine {
    /// Decide what to say when a user joins a chat.
    ///
    /// The bot's own join produces a greeting; any other join produces the
    /// chat's welcome message if one is configured, and nothing otherwise.
    pub async fn handle_member_joined(
        &self,
        chat: &ChatInfo,
        user: &User,
    ) -> Option<CommandOutcome> {
        if user.id == self.client.self_id() {
            return Some(CommandOutcome::Greeting);
        }

        let template = self.chats.welcome(chat.id)?;
        Some(CommandOutcome::Welcome {
            text: render_welcome(&template, &user.first_name, chat.title.as_deref()),
        })
    }
}
