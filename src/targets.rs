//! Target resolution for moderation commands.
//!
//! A command addresses either the author of the message it replies to, or
//! the user named by its first argument. The mode records which, because
//! it decides how many of the command's own tokens targeting consumed.

use crate::client::EnforcementClient;
use crate::types::{MessageEvent, User, UserId};
use tracing::debug;

/// How a target was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// Target is the author of the replied-to message; no arguments consumed.
    Reply,
    /// Target came from the first argument; one argument consumed.
    Argument,
}

impl TargetMode {
    /// Index of the first token that is not the command word or the target.
    pub fn reason_offset(&self) -> usize {
        match self {
            TargetMode::Reply => 1,
            TargetMode::Argument => 2,
        }
    }
}

/// A resolved command target.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub user: User,
    pub mode: TargetMode,
}

/// Parse a user id token, stripping one leading `@`.
pub fn parse_user_id(token: &str) -> Option<UserId> {
    let token = token.trim();
    let token = token.strip_prefix('@').unwrap_or(token);
    token.parse().ok()
}

/// Resolve the user a command addresses.
///
/// Reply context wins regardless of arguments; otherwise the first
/// argument is parsed as a user id and looked up through the enforcement
/// client. Parse and lookup failures resolve to `None` so the engine can
/// answer with a uniform "not found" outcome instead of an error.
pub async fn resolve_target(
    client: &dyn EnforcementClient,
    msg: &MessageEvent,
    args: &[&str],
) -> Option<Target> {
    if let Some(author) = &msg.reply_to {
        return Some(Target {
            user: author.clone(),
            mode: TargetMode::Reply,
        });
    }

    let token = args.get(1)?;
    let user_id = parse_user_id(token)?;
    match client.lookup_member(msg.chat.id, user_id).await {
        Ok(user) => Some(Target {
            user,
            mode: TargetMode::Argument,
        }),
        Err(error) => {
            debug!(chat = %msg.chat.id, target = %user_id, error = %error, "target lookup failed");
            None
        }
    }
}
