//! chatwarden - chat-group moderation policy engine.
//!
//! Turns inbound chat-group events (slash commands, membership changes)
//! into moderation decisions: ban, mute, kick, warn with automatic
//! escalation on a warn ceiling, plus per-chat rules text and welcome
//! templates. The engine owns policy only. The embedding daemon supplies
//! the platform transport through [`client::EnforcementClient`], feeds
//! updates into [`dispatch::Dispatcher`], and delivers rendered replies
//! through [`dispatch::ReplySink`].

pub mod authority;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod duration;
pub mod engine;
pub mod metrics;
pub mod outcome;
pub mod render;
pub mod state;
pub mod targets;
pub mod types;

pub use authority::AuthorityChecker;
pub use client::{ClientError, EnforcementClient, PermissionSet};
pub use config::{Config, ConfigError, ModerationConfig};
pub use dispatch::{Dispatcher, ReplySink};
pub use engine::Engine;
pub use outcome::{CommandOutcome, DenyReason, Usage};
pub use types::{ChatId, ChatInfo, ChatKind, MessageEvent, Role, Update, User, UserId};
