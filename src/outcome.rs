//! Structured command outcomes.
//!
//! Outcomes are the engine's entire output: the presentation layer renders
//! them as reply text and the embedder never sees a policy decision any
//! other way. Predictable failures (bad usage, denied authority, unknown
//! target, platform errors) are outcome variants, not errors.

use crate::types::{Role, User, UserId};
use chrono::Duration;

/// Why a command was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The command only works in group chats.
    NotGroup,
    /// The invoker lacks moderation authority.
    NotAuthorized,
    /// The target is an owner, administrator, or global operator.
    TargetProtected,
}

/// Which command a usage hint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    Ban,
    Unban,
    Mute,
    Unmute,
    Warn,
    Unwarn,
    ClearWarns,
    Kick,
    SetRules,
    SetWelcome,
}

/// What the engine decided for one command or membership event.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// Member banned; `None` duration means permanent.
    Banned {
        target: User,
        reason: Option<String>,
        duration: Option<Duration>,
    },
    Unbanned {
        user_id: UserId,
    },
    Muted {
        target: User,
        reason: Option<String>,
        duration: Duration,
    },
    Unmuted {
        target: User,
    },
    Warned {
        target: User,
        reason: Option<String>,
        count: u8,
        limit: u8,
    },
    /// Warn ceiling reached: ban issued and counter cleared.
    Escalated {
        target: User,
        count: u8,
    },
    WarnRemoved {
        target: User,
        count: u8,
        limit: u8,
    },
    WarnsCleared {
        target: User,
    },
    WarnCount {
        target: User,
        count: u8,
        limit: u8,
    },
    Kicked {
        target: User,
    },
    MemberInfo {
        target: User,
        role: Role,
        warns: u8,
        limit: u8,
    },
    RulesSet,
    Rules {
        text: Option<String>,
    },
    WelcomeSet,
    WelcomeDeleted,
    Denied(DenyReason),
    /// No target could be resolved; carries the command's usage hint.
    NotFound {
        usage: Usage,
    },
    InvalidArgument {
        usage: Usage,
    },
    /// An enforcement call failed; local state already committed stays.
    PlatformError {
        detail: String,
    },
    /// The bot itself joined a chat.
    Greeting,
    /// A member joined a chat with a configured welcome template.
    Welcome {
        text: String,
    },
    Help,
}
