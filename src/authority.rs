//! Authority checks for moderation commands.
//!
//! Global operators are authorized everywhere and protected everywhere;
//! everyone else is judged by the role the chat reports. The two
//! predicates react differently to lookup failures: granting authority
//! fails closed, while protecting a target fails open so a transient
//! lookup error cannot block moderation — a real failure surfaces when
//! the enforcement call itself is attempted.

use crate::client::EnforcementClient;
use crate::types::{ChatId, UserId};
use std::collections::HashSet;
use tracing::debug;

/// Decides who may moderate and who may be moderated.
#[derive(Debug)]
pub struct AuthorityChecker {
    /// Process-wide operator identities, fixed at startup.
    operators: HashSet<UserId>,
}

impl AuthorityChecker {
    pub fn new(operators: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            operators: operators.into_iter().collect(),
        }
    }

    /// Is this user a global operator?
    pub fn is_operator(&self, user: UserId) -> bool {
        self.operators.contains(&user)
    }

    /// May this user issue moderation commands in this chat?
    pub async fn is_authorized(
        &self,
        client: &dyn EnforcementClient,
        chat: ChatId,
        user: UserId,
    ) -> bool {
        if self.operators.contains(&user) {
            return true;
        }
        match client.get_chat_role(chat, user).await {
            Ok(role) => role.is_privileged(),
            Err(error) => {
                debug!(chat = %chat, user = %user, error = %error, "role lookup failed, refusing authority");
                false
            }
        }
    }

    /// May this user be the object of ban/mute/kick/warn?
    ///
    /// Operators and privileged roles are protected; a failed role lookup
    /// treats the target as restrictable.
    pub async fn is_restrictable(
        &self,
        client: &dyn EnforcementClient,
        chat: ChatId,
        user: UserId,
    ) -> bool {
        if self.operators.contains(&user) {
            return false;
        }
        match client.get_chat_role(chat, user).await {
            Ok(role) => !role.is_privileged(),
            Err(error) => {
                debug!(chat = %chat, user = %user, error = %error, "role lookup failed, treating target as restrictable");
                true
            }
        }
    }
}
