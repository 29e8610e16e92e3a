//! Command orchestration.
//!
//! One engine instance owns all moderation state (operator set, warn
//! counters, chat configuration) and decides every command. Enforcement
//! goes through the capability trait, and no store lock is ever held
//! across those calls.

mod info;
mod membership;
mod moderation;
mod settings;
mod warns;

use crate::authority::AuthorityChecker;
use crate::client::EnforcementClient;
use crate::config::Config;
use crate::outcome::{CommandOutcome, DenyReason};
use crate::state::{ChatConfigStore, WarnStore};
use crate::types::{ChatId, MessageEvent, UserId};
use chrono::Duration;
use std::sync::Arc;

/// The moderation policy engine.
pub struct Engine {
    client: Arc<dyn EnforcementClient>,
    authority: AuthorityChecker,
    warns: WarnStore,
    chats: ChatConfigStore,
    default_mute: Duration,
}

impl Engine {
    pub fn new(config: &Config, client: Arc<dyn EnforcementClient>) -> Self {
        Self {
            client,
            authority: AuthorityChecker::new(config.operators.iter().copied()),
            warns: WarnStore::new(config.moderation.warn_limit),
            chats: ChatConfigStore::new(),
            default_mute: Duration::minutes(i64::from(config.moderation.default_mute_minutes)),
        }
    }

    pub fn handle_help(&self) -> CommandOutcome {
        CommandOutcome::Help
    }

    /// Reject commands issued outside a group context.
    fn group_gate(&self, msg: &MessageEvent) -> Option<CommandOutcome> {
        if msg.chat.kind.is_group() {
            None
        } else {
            Some(CommandOutcome::Denied(DenyReason::NotGroup))
        }
    }

    /// Require moderation authority from the invoker.
    async fn admin_gate(&self, msg: &MessageEvent) -> Option<CommandOutcome> {
        if self
            .authority
            .is_authorized(self.client.as_ref(), msg.chat.id, msg.from.id)
            .await
        {
            None
        } else {
            Some(CommandOutcome::Denied(DenyReason::NotAuthorized))
        }
    }

    /// Refuse destructive actions against protected targets.
    async fn protection_gate(&self, chat: ChatId, target: UserId) -> Option<CommandOutcome> {
        if self
            .authority
            .is_restrictable(self.client.as_ref(), chat, target)
            .await
        {
            None
        } else {
            Some(CommandOutcome::Denied(DenyReason::TargetProtected))
        }
    }

    /// The message text after the command word, spacing preserved.
    fn remainder(text: &str) -> Option<&str> {
        let (_, rest) = text.split_once(char::is_whitespace)?;
        let rest = rest.trim();
        if rest.is_empty() { None } else { Some(rest) }
    }
}
