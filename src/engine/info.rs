//! Member info command.

use super::Engine;
use crate::outcome::CommandOutcome;
use crate::targets::resolve_target;
use crate::types::MessageEvent;

impl Engine {
    /// `/info [@user|id]` — open to everyone, defaults to the invoker.
    pub async fn handle_info(&self, msg: &MessageEvent) -> CommandOutcome {
        if let Some(denied) = self.group_gate(msg) {
            return denied;
        }
        let args: Vec<&str> = msg.text.split_whitespace().collect();
        let target = match resolve_target(self.client.as_ref(), msg, &args).await {
            Some(target) => target.user,
            None => msg.from.clone(),
        };

        match self.client.get_chat_role(msg.chat.id, target.id).await {
            Ok(role) => CommandOutcome::MemberInfo {
                warns: self.warns.get(msg.chat.id, target.id),
                limit: self.warns.limit(),
                target,
                role,
            },
            Err(error) => CommandOutcome::PlatformError {
                detail: error.to_string(),
            },
        }
    }
}
