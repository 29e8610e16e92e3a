//! Ban, unban, mute, unmute, and kick commands.

use super::Engine;
use crate::client::PermissionSet;
use crate::duration::parse_duration;
use crate::outcome::{CommandOutcome, Usage};
use crate::targets::{parse_user_id, resolve_target};
use crate::types::MessageEvent;
use chrono::Utc;
use tracing::info;

impl Engine {
    /// `/ban [@user|id] [reason] [duration]`, or as a reply. No duration
    /// means permanent.
    pub async fn handle_ban(&self, msg: &MessageEvent) -> CommandOutcome {
        if let Some(denied) = self.group_gate(msg) {
            return denied;
        }
        let args: Vec<&str> = msg.text.split_whitespace().collect();
        let Some(target) = resolve_target(self.client.as_ref(), msg, &args).await else {
            return CommandOutcome::NotFound { usage: Usage::Ban };
        };
        if let Some(denied) = self.admin_gate(msg).await {
            return denied;
        }
        if let Some(denied) = self.protection_gate(msg.chat.id, target.user.id).await {
            return denied;
        }

        let offset = target.mode.reason_offset();
        let reason = args.get(offset).map(|s| (*s).to_string());
        let duration = args.get(offset + 1).and_then(|t| parse_duration(t));
        let until = duration.map(|d| Utc::now() + d);

        match self.client.ban(msg.chat.id, target.user.id, until).await {
            Ok(()) => {
                info!(
                    chat = %msg.chat.id,
                    target = %target.user.id,
                    by = %msg.from.id,
                    permanent = duration.is_none(),
                    "member banned"
                );
                crate::metrics::record_action("ban");
                CommandOutcome::Banned {
                    target: target.user,
                    reason,
                    duration,
                }
            }
            Err(error) => CommandOutcome::PlatformError {
                detail: error.to_string(),
            },
        }
    }

    /// `/unban @user|id`.
    ///
    /// Takes a raw id rather than resolving a target: a banned user is no
    /// longer a member, so a lookup would always fail.
    pub async fn handle_unban(&self, msg: &MessageEvent) -> CommandOutcome {
        if let Some(denied) = self.group_gate(msg) {
            return denied;
        }
        if let Some(denied) = self.admin_gate(msg).await {
            return denied;
        }
        let args: Vec<&str> = msg.text.split_whitespace().collect();
        let Some(user_id) = args.get(1).and_then(|t| parse_user_id(t)) else {
            return CommandOutcome::InvalidArgument {
                usage: Usage::Unban,
            };
        };

        match self.client.unban(msg.chat.id, user_id, true).await {
            Ok(()) => {
                info!(chat = %msg.chat.id, target = %user_id, by = %msg.from.id, "member unbanned");
                crate::metrics::record_action("unban");
                CommandOutcome::Unbanned { user_id }
            }
            Err(error) => CommandOutcome::PlatformError {
                detail: error.to_string(),
            },
        }
    }

    /// `/mute [@user|id] [reason] [duration]`, or as a reply. A missing or
    /// unparseable duration falls back to the configured default.
    pub async fn handle_mute(&self, msg: &MessageEvent) -> CommandOutcome {
        if let Some(denied) = self.group_gate(msg) {
            return denied;
        }
        let args: Vec<&str> = msg.text.split_whitespace().collect();
        let Some(target) = resolve_target(self.client.as_ref(), msg, &args).await else {
            return CommandOutcome::NotFound { usage: Usage::Mute };
        };
        if let Some(denied) = self.admin_gate(msg).await {
            return denied;
        }
        if let Some(denied) = self.protection_gate(msg.chat.id, target.user.id).await {
            return denied;
        }

        let offset = target.mode.reason_offset();
        let reason = args.get(offset).map(|s| (*s).to_string());
        let duration = args
            .get(offset + 1)
            .and_then(|t| parse_duration(t))
            .unwrap_or(self.default_mute);
        let until = Utc::now() + duration;

        match self
            .client
            .restrict(msg.chat.id, target.user.id, PermissionSet::muted(), Some(until))
            .await
        {
            Ok(()) => {
                info!(
                    chat = %msg.chat.id,
                    target = %target.user.id,
                    by = %msg.from.id,
                    minutes = duration.num_minutes(),
                    "member muted"
                );
                crate::metrics::record_action("mute");
                CommandOutcome::Muted {
                    target: target.user,
                    reason,
                    duration,
                }
            }
            Err(error) => CommandOutcome::PlatformError {
                detail: error.to_string(),
            },
        }
    }

    /// `/unmute @user|id`, or as a reply. Restores the full permission set.
    pub async fn handle_unmute(&self, msg: &MessageEvent) -> CommandOutcome {
        if let Some(denied) = self.group_gate(msg) {
            return denied;
        }
        let args: Vec<&str> = msg.text.split_whitespace().collect();
        let Some(target) = resolve_target(self.client.as_ref(), msg, &args).await else {
            return CommandOutcome::NotFound {
                usage: Usage::Unmute,
            };
        };
        if let Some(denied) = self.admin_gate(msg).await {
            return denied;
        }

        match self
            .client
            .restrict(
                msg.chat.id,
                target.user.id,
                PermissionSet::unrestricted(),
                None,
            )
            .await
        {
            Ok(()) => {
                crate::metrics::record_action("unmute");
                CommandOutcome::Unmuted {
                    target: target.user,
                }
            }
            Err(error) => CommandOutcome::PlatformError {
                detail: error.to_string(),
            },
        }
    }

    /// `/kick @user|id`, or as a reply: ban immediately followed by unban,
    /// which removes the member without a lasting ban entry.
    pub async fn handle_kick(&self, msg: &MessageEvent) -> CommandOutcome {
        if let Some(denied) = self.group_gate(msg) {
            return denied;
        }
        let args: Vec<&str> = msg.text.split_whitespace().collect();
        let Some(target) = resolve_target(self.client.as_ref(), msg, &args).await else {
            return CommandOutcome::NotFound { usage: Usage::Kick };
        };
        if let Some(denied) = self.admin_gate(msg).await {
            return denied;
        }
        if let Some(denied) = self.protection_gate(msg.chat.id, target.user.id).await {
            return denied;
        }

        if let Err(error) = self.client.ban(msg.chat.id, target.user.id, None).await {
            return CommandOutcome::PlatformError {
                detail: error.to_string(),
            };
        }
        if let Err(error) = self.client.unban(msg.chat.id, target.user.id, true).await {
            return CommandOutcome::PlatformError {
                detail: error.to_string(),
            };
        }

        info!(chat = %msg.chat.id, target = %target.user.id, by = %msg.from.id, "member kicked");
        crate::metrics::record_action("kick");
        CommandOutcome::Kicked {
            target: target.user,
        }
    }
}
