//! Warn commands and the escalation policy.

use super::Engine;
use crate::outcome::{CommandOutcome, Usage};
use crate::targets::resolve_target;
use crate::types::MessageEvent;
use tracing::{info, warn};

impl Engine {
    /// `/warn [@user|id] [reason...]`, or as a reply.
    ///
    /// Reaching the warn limit escalates: the engine issues a permanent
    /// ban, then clears the counter. The two steps are deliberately
    /// non-transactional: if the ban fails, the count stays at the limit
    /// and the failure is surfaced to the invoker.
    pub async fn handle_warn(&self, msg: &MessageEvent) -> CommandOutcome {
        if let Some(denied) = self.group_gate(msg) {
            return denied;
        }
        let args: Vec<&str> = msg.text.split_whitespace().collect();
        let Some(target) = resolve_target(self.client.as_ref(), msg, &args).await else {
            return CommandOutcome::NotFound { usage: Usage::Warn };
        };
        if let Some(denied) = self.admin_gate(msg).await {
            return denied;
        }
        if let Some(denied) = self.protection_gate(msg.chat.id, target.user.id).await {
            return denied;
        }

        let offset = target.mode.reason_offset();
        let reason = if args.len() > offset {
            Some(args[offset..].join(" "))
        } else {
            None
        };

        let added = self.warns.add(msg.chat.id, target.user.id);
        if added.crossed {
            match self.client.ban(msg.chat.id, target.user.id, None).await {
                Ok(()) => {
                    self.warns.clear(msg.chat.id, target.user.id);
                    info!(
                        chat = %msg.chat.id,
                        target = %target.user.id,
                        count = added.count,
                        "warn limit reached, member banned"
                    );
                    crate::metrics::record_action("escalation");
                    CommandOutcome::Escalated {
                        target: target.user,
                        count: added.count,
                    }
                }
                Err(error) => {
                    // The counter stays at the limit; only a moderator can
                    // unwind it once the ban itself is failing.
                    warn!(
                        chat = %msg.chat.id,
                        target = %target.user.id,
                        error = %error,
                        "escalation ban failed"
                    );
                    CommandOutcome::PlatformError {
                        detail: error.to_string(),
                    }
                }
            }
        } else {
            crate::metrics::record_action("warn");
            CommandOutcome::Warned {
                target: target.user,
                reason,
                count: added.count,
                limit: self.warns.limit(),
            }
        }
    }

    /// `/unwarn @user|id`, or as a reply.
    pub async fn handle_unwarn(&self, msg: &MessageEvent) -> CommandOutcome {
        if let Some(denied) = self.group_gate(msg) {
            return denied;
        }
        let args: Vec<&str> = msg.text.split_whitespace().collect();
        let Some(target) = resolve_target(self.client.as_ref(), msg, &args).await else {
            return CommandOutcome::NotFound {
                usage: Usage::Unwarn,
            };
        };
        if let Some(denied) = self.admin_gate(msg).await {
            return denied;
        }

        let count = self.warns.remove(msg.chat.id, target.user.id);
        CommandOutcome::WarnRemoved {
            target: target.user,
            count,
            limit: self.warns.limit(),
        }
    }

    /// `/clearwarns @user|id`, or as a reply.
    pub async fn handle_clearwarns(&self, msg: &MessageEvent) -> CommandOutcome {
        if let Some(denied) = self.group_gate(msg) {
            return denied;
        }
        let args: Vec<&str> = msg.text.split_whitespace().collect();
        let Some(target) = resolve_target(self.client.as_ref(), msg, &args).await else {
            return CommandOutcome::NotFound {
                usage: Usage::ClearWarns,
            };
        };
        if let Some(denied) = self.admin_gate(msg).await {
            return denied;
        }

        self.warns.clear(msg.chat.id, target.user.id);
        CommandOutcome::WarnsCleared {
            target: target.user,
        }
    }

    /// `/warns [@user|id]` — open to everyone, defaults to the invoker.
    pub async fn handle_warns(&self, msg: &MessageEvent) -> CommandOutcome {
        if let Some(denied) = self.group_gate(msg) {
            return denied;
        }
        let args: Vec<&str> = msg.text.split_whitespace().collect();
        let target = match resolve_target(self.client.as_ref(), msg, &args).await {
            Some(target) => target.user,
            None => msg.from.clone(),
        };

        CommandOutcome::WarnCount {
            count: self.warns.get(msg.chat.id, target.id),
            limit: self.warns.limit(),
            target,
        }
    }
}
