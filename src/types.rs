//! Core identifiers and event types shared across the engine.

/// Platform chat identifier.
pub type ChatId = i64;

/// Platform user identifier.
pub type UserId = i64;

/// Membership role a chat reports for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Owner,
    Administrator,
    Member,
    Restricted,
    Left,
    Banned,
}

impl Role {
    /// Owners and administrators are exempt from moderation and may issue it.
    pub fn is_privileged(&self) -> bool {
        matches!(self, Role::Owner | Role::Administrator)
    }

    /// Human-readable label for info replies.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Administrator => "administrator",
            Role::Member => "member",
            Role::Restricted => "restricted",
            Role::Left => "left",
            Role::Banned => "banned",
        }
    }
}

/// What kind of conversation an update came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
}

impl ChatKind {
    /// Moderation commands only make sense in group contexts.
    pub fn is_group(&self) -> bool {
        !matches!(self, ChatKind::Private)
    }
}

/// A platform user as the enforcement client reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub username: Option<String>,
}

/// The chat an update originated in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatInfo {
    pub id: ChatId,
    pub kind: ChatKind,
    pub title: Option<String>,
}

/// An inbound message, already decoded by the transport layer.
#[derive(Debug, Clone)]
pub struct MessageEvent {
    pub chat: ChatInfo,
    pub from: User,
    pub text: String,
    /// Author of the message this one replies to, if any.
    pub reply_to: Option<User>,
}

/// One platform update, as the transport layer hands it to the dispatcher.
#[derive(Debug, Clone)]
pub enum Update {
    /// A message was posted.
    Message(MessageEvent),
    /// A user joined the chat.
    MemberJoined { chat: ChatInfo, user: User },
}
