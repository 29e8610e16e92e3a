//! In-memory moderation state.
//!
//! All state is per-key concurrent and process-local; persistence across
//! restarts is explicitly out of scope. A production deployment would put
//! a storage backend behind these same contracts.

mod chat_config;
mod warns;

pub use chat_config::{ChatConfigStore, render_welcome};
pub use warns::{WarnAdd, WarnStore};
