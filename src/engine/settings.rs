//! Per-chat rules and welcome configuration commands.

use super::Engine;
use crate::outcome::{CommandOutcome, Usage};
use crate::types::MessageEvent;
use tracing::info;

impl Engine {
    /// `/setrules <text>` — the raw remainder of the message, spacing and
    /// line breaks preserved.
    pub async fn handle_setrules(&self, msg: &MessageEvent) -> CommandOutcome {
        if let Some(denied) = self.group_gate(msg) {
            return denied;
        }
        if let Some(denied) = self.admin_gate(msg).await {
            return denied;
        }
        let Some(text) = Self::remainder(&msg.text) else {
            return CommandOutcome::InvalidArgument {
                usage: Usage::SetRules,
            };
        };

        self.chats.set_rules(msg.chat.id, text.to_string());
        info!(chat = %msg.chat.id, by = %msg.from.id, "rules updated");
        CommandOutcome::RulesSet
    }

    /// `/rules` — open to everyone.
    pub fn handle_rules(&self, msg: &MessageEvent) -> CommandOutcome {
        if let Some(denied) = self.group_gate(msg) {
            return denied;
        }
        CommandOutcome::Rules {
            text: self.chats.rules(msg.chat.id),
        }
    }

    /// `/setwelcome <template>` with `{user}` and `{chat}` placeholders.
    pub async fn handle_setwelcome(&self, msg: &MessageEvent) -> CommandOutcome {
        if let Some(denied) = self.group_gate(msg) {
            return denied;
        }
        if let Some(denied) = self.admin_gate(msg).await {
            return denied;
        }
        let Some(template) = Self::remainder(&msg.text) else {
            return CommandOutcome::InvalidArgument {
                usage: Usage::SetWelcome,
            };
        };

        self.chats.set_welcome(msg.chat.id, template.to_string());
        info!(chat = %msg.chat.id, by = %msg.from.id, "welcome template set");
        CommandOutcome::WelcomeSet
    }

    /// `/delwelcome`.
    pub async fn handle_delwelcome(&self, msg: &MessageEvent) -> CommandOutcome {
        if let Some(denied) = self.group_gate(msg) {
            return denied;
        }
        if let Some(denied) = self.admin_gate(msg).await {
            return denied;
        }

        self.chats.delete_welcome(msg.chat.id);
        info!(chat = %msg.chat.id, by = %msg.from.id, "welcome template removed");
        CommandOutcome::WelcomeDeleted
    }
}
