//! Integration test common infrastructure.
//!
//! Provides a scriptable in-memory enforcement client, a recording reply
//! sink, and builders for chats, users, and message events.

#![allow(dead_code)]

use async_trait::async_trait;
use chatwarden::client::{ClientError, EnforcementClient, PermissionSet};
use chatwarden::config::Config;
use chatwarden::dispatch::ReplySink;
use chatwarden::engine::Engine;
use chatwarden::types::{ChatId, ChatInfo, ChatKind, MessageEvent, Role, User, UserId};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::{Arc, Mutex, Once};

/// The bot's own user id in all fixtures.
pub const BOT_ID: UserId = 999_000;

/// One recorded enforcement call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Ban {
        chat: ChatId,
        user: UserId,
        permanent: bool,
    },
    Unban {
        chat: ChatId,
        user: UserId,
        only_if_banned: bool,
    },
    Restrict {
        chat: ChatId,
        user: UserId,
        muted: bool,
        has_deadline: bool,
    },
}

/// Scriptable in-memory enforcement client.
#[derive(Default)]
pub struct MockClient {
    pub roles: DashMap<(ChatId, UserId), Role>,
    pub members: DashMap<(ChatId, UserId), User>,
    pub calls: Mutex<Vec<Call>>,
    fail_bans: bool,
    fail_role_lookups: bool,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a member with a role, resolvable by lookup.
    pub fn with_member(self, chat: ChatId, user: &User, role: Role) -> Self {
        self.roles.insert((chat, user.id), role);
        self.members.insert((chat, user.id), user.clone());
        self
    }

    /// Make every ban call fail with a platform error.
    pub fn failing_bans(mut self) -> Self {
        self.fail_bans = true;
        self
    }

    /// Make every role lookup fail with a platform error.
    pub fn failing_role_lookups(mut self) -> Self {
        self.fail_role_lookups = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

#[async_trait]
impl EnforcementClient for MockClient {
    async fn get_chat_role(&self, chat: ChatId, user: UserId) -> Result<Role, ClientError> {
        if self.fail_role_lookups {
            return Err(ClientError::platform("role lookup unavailable"));
        }
        self.roles
            .get(&(chat, user))
            .map(|r| *r)
            .ok_or(ClientError::NotFound)
    }

    async fn ban(
        &self,
        chat: ChatId,
        user: UserId,
        until: Option<DateTime<Utc>>,
    ) -> Result<(), ClientError> {
        self.record(Call::Ban {
            chat,
            user,
            permanent: until.is_none(),
        });
        if self.fail_bans {
            return Err(ClientError::platform("ban rejected"));
        }
        Ok(())
    }

    async fn unban(
        &self,
        chat: ChatId,
        user: UserId,
        only_if_banned: bool,
    ) -> Result<(), ClientError> {
        self.record(Call::Unban {
            chat,
            user,
            only_if_banned,
        });
        Ok(())
    }

    async fn restrict(
        &self,
        chat: ChatId,
        user: UserId,
        perms: PermissionSet,
        until: Option<DateTime<Utc>>,
    ) -> Result<(), ClientError> {
        self.record(Call::Restrict {
            chat,
            user,
            muted: !perms.can_send_messages,
            has_deadline: until.is_some(),
        });
        Ok(())
    }

    async fn lookup_member(&self, chat: ChatId, user: UserId) -> Result<User, ClientError> {
        self.members
            .get(&(chat, user))
            .map(|u| u.value().clone())
            .ok_or(ClientError::NotFound)
    }

    fn self_id(&self) -> UserId {
        BOT_ID
    }
}

/// Reply sink that records everything it is asked to deliver.
#[derive(Default)]
pub struct RecordingSink {
    pub replies: Mutex<Vec<(ChatId, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replies(&self) -> Vec<(ChatId, String)> {
        self.replies.lock().expect("replies lock").clone()
    }
}

#[async_trait]
impl ReplySink for RecordingSink {
    async fn reply(&self, chat: ChatId, text: &str) -> Result<(), ClientError> {
        self.replies
            .lock()
            .expect("replies lock")
            .push((chat, text.to_string()));
        Ok(())
    }
}

pub fn group_chat(id: ChatId) -> ChatInfo {
    ChatInfo {
        id,
        kind: ChatKind::Supergroup,
        title: Some("Test".to_string()),
    }
}

pub fn private_chat(id: ChatId) -> ChatInfo {
    ChatInfo {
        id,
        kind: ChatKind::Private,
        title: None,
    }
}

pub fn user(id: UserId, name: &str) -> User {
    User {
        id,
        first_name: name.to_string(),
        username: None,
    }
}

pub fn message(chat: &ChatInfo, from: &User, text: &str) -> MessageEvent {
    MessageEvent {
        chat: chat.clone(),
        from: from.clone(),
        text: text.to_string(),
        reply_to: None,
    }
}

pub fn reply_message(chat: &ChatInfo, from: &User, text: &str, reply_to: &User) -> MessageEvent {
    MessageEvent {
        reply_to: Some(reply_to.clone()),
        ..message(chat, from, text)
    }
}

/// Build an engine over the given client with default moderation config.
pub fn engine_with(client: Arc<MockClient>, operators: Vec<UserId>) -> Engine {
    let config = Config {
        operators,
        ..Config::default()
    };
    Engine::new(&config, client)
}

/// Initialize test logging once; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}
