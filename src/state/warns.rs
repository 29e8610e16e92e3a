//! Warn counter state.
//!
//! Counts live in a sharded concurrent map keyed by (chat, user). The map
//! entry lock makes each read-modify-write atomic per key, with no global
//! critical section spanning unrelated chats.

use crate::types::{ChatId, UserId};
use dashmap::DashMap;

/// Result of a warn increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarnAdd {
    /// Count after the increment, clamped to the limit.
    pub count: u8,
    /// True only for the increment that moved the count onto the limit.
    ///
    /// This is the escalation trigger: under concurrent adds exactly one
    /// caller observes the crossing, and a clamped re-add at the limit
    /// reports false.
    pub crossed: bool,
}

/// Per-(chat, user) warn counters.
///
/// Counts stay in `[0, limit]`. Entries are created implicitly on first
/// write and reset to zero rather than deleted, so an unseen key and a
/// cleared key are indistinguishable.
#[derive(Debug)]
pub struct WarnStore {
    counts: DashMap<(ChatId, UserId), u8>,
    limit: u8,
}

impl WarnStore {
    pub fn new(limit: u8) -> Self {
        Self {
            counts: DashMap::new(),
            limit,
        }
    }

    /// The count that triggers escalation.
    pub fn limit(&self) -> u8 {
        self.limit
    }

    /// Increment the counter, clamped to the limit.
    pub fn add(&self, chat: ChatId, user: UserId) -> WarnAdd {
        let mut entry = self.counts.entry((chat, user)).or_insert(0);
        let before = *entry;
        if before < self.limit {
            *entry += 1;
        }
        WarnAdd {
            count: *entry,
            crossed: before < self.limit && *entry == self.limit,
        }
    }

    /// Decrement the counter, floored at zero. Returns the new count.
    pub fn remove(&self, chat: ChatId, user: UserId) -> u8 {
        let mut entry = self.counts.entry((chat, user)).or_insert(0);
        *entry = entry.saturating_sub(1);
        *entry
    }

    /// Reset the counter to zero.
    pub fn clear(&self, chat: ChatId, user: UserId) {
        self.counts.insert((chat, user), 0);
    }

    /// Current count; zero for keys never warned.
    pub fn get(&self, chat: ChatId, user: UserId) -> u8 {
        self.counts.get(&(chat, user)).map(|c| *c).unwrap_or(0)
    }
}
