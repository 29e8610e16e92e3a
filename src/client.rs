//! Enforcement-client capability interface.
//!
//! The engine never talks to the platform directly. Role queries, member
//! lookups, and the ban/restrict calls all go through this narrow trait;
//! the embedding daemon implements it over the platform SDK.

use crate::types::{ChatId, Role, User, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors surfaced by the enforcement client.
///
/// `NotFound` and `Platform` are distinct because the authority checks
/// react differently to "the chat does not know this member" than to a
/// transient platform failure.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error("member not found")]
    NotFound,

    #[error("platform error: {detail}")]
    Platform { detail: String },
}

impl ClientError {
    pub fn platform(detail: impl Into<String>) -> Self {
        Self::Platform {
            detail: detail.into(),
        }
    }
}

/// Message permissions applied by a restrict call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionSet {
    pub can_send_messages: bool,
    pub can_send_media: bool,
    pub can_send_other: bool,
    pub can_add_previews: bool,
}

impl PermissionSet {
    /// Everything off: the mute permission set.
    pub fn muted() -> Self {
        Self {
            can_send_messages: false,
            can_send_media: false,
            can_send_other: false,
            can_add_previews: false,
        }
    }

    /// Everything on: lifts a restriction.
    pub fn unrestricted() -> Self {
        Self {
            can_send_messages: true,
            can_send_media: true,
            can_send_other: true,
            can_add_previews: true,
        }
    }
}

/// Capabilities the policy engine requires from the platform adapter.
#[async_trait]
pub trait EnforcementClient: Send + Sync {
    /// Query the role a chat reports for a user.
    async fn get_chat_role(&self, chat: ChatId, user: UserId) -> Result<Role, ClientError>;

    /// Ban a member, until a deadline or permanently.
    async fn ban(
        &self,
        chat: ChatId,
        user: UserId,
        until: Option<DateTime<Utc>>,
    ) -> Result<(), ClientError>;

    /// Lift a ban. With `only_if_banned`, a no-op for members in good standing.
    async fn unban(
        &self,
        chat: ChatId,
        user: UserId,
        only_if_banned: bool,
    ) -> Result<(), ClientError>;

    /// Replace a member's permission set, until a deadline or indefinitely.
    async fn restrict(
        &self,
        chat: ChatId,
        user: UserId,
        perms: PermissionSet,
        until: Option<DateTime<Utc>>,
    ) -> Result<(), ClientError>;

    /// Resolve a member by id.
    async fn lookup_member(&self, chat: ChatId, user: UserId) -> Result<User, ClientError>;

    /// The bot's own user id, for detecting its own join event.
    fn self_id(&self) -> UserId;
}
