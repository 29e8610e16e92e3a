//! Update dispatch loop.
//!
//! Consumes the abstract update stream the transport layer produces,
//! routes each update into the engine on its own task, and delivers
//! rendered outcomes through the reply sink. A slow enforcement call in
//! one chat never delays another.

use crate::client::ClientError;
use crate::engine::Engine;
use crate::metrics;
use crate::outcome::CommandOutcome;
use crate::render;
use crate::types::{ChatId, Update};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Outbound reply channel the dispatcher renders outcomes into.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn reply(&self, chat: ChatId, text: &str) -> Result<(), ClientError>;
}

/// Routes updates into the engine and outcomes into the sink.
pub struct Dispatcher {
    engine: Arc<Engine>,
    sink: Arc<dyn ReplySink>,
}

impl Dispatcher {
    pub fn new(engine: Arc<Engine>, sink: Arc<dyn ReplySink>) -> Self {
        Self { engine, sink }
    }

    /// Consume updates until the channel closes, then drain in-flight
    /// handlers.
    pub async fn run(&self, mut updates: mpsc::Receiver<Update>) {
        let mut tasks = JoinSet::new();
        while let Some(update) = updates.recv().await {
            let engine = Arc::clone(&self.engine);
            let sink = Arc::clone(&self.sink);
            tasks.spawn(async move {
                if let Some((chat, outcome)) = handle_update(&engine, update).await {
                    let text = render::render(&outcome);
                    if let Err(error) = sink.reply(chat, &text).await {
                        warn!(chat = %chat, error = %error, "failed to deliver reply");
                    }
                }
            });
            // Reap handlers that already finished.
            while tasks.try_join_next().is_some() {}
        }
        while tasks.join_next().await.is_some() {}
    }
}

/// Route one update; returns the chat to answer in and the outcome, if any.
async fn handle_update(engine: &Engine, update: Update) -> Option<(ChatId, CommandOutcome)> {
    match update {
        Update::Message(msg) => {
            let command = command_word(&msg.text)?;
            let outcome = match command {
                "ban" => engine.handle_ban(&msg).await,
                "unban" => engine.handle_unban(&msg).await,
                "mute" => engine.handle_mute(&msg).await,
                "unmute" => engine.handle_unmute(&msg).await,
                "warn" => engine.handle_warn(&msg).await,
                "unwarn" => engine.handle_unwarn(&msg).await,
                "clearwarns" => engine.handle_clearwarns(&msg).await,
                "warns" => engine.handle_warns(&msg).await,
                "kick" => engine.handle_kick(&msg).await,
                "info" => engine.handle_info(&msg).await,
                "setrules" => engine.handle_setrules(&msg).await,
                "rules" => engine.handle_rules(&msg),
                "setwelcome" => engine.handle_setwelcome(&msg).await,
                "delwelcome" => engine.handle_delwelcome(&msg).await,
                "help" => engine.handle_help(),
                other => {
                    // A moderation bot must not answer every slash message
                    // in a busy group.
                    debug!(command = other, "ignoring unknown command");
                    return None;
                }
            };
            metrics::record_command(command);
            Some((msg.chat.id, outcome))
        }
        Update::MemberJoined { chat, user } => engine
            .handle_member_joined(&chat, &user)
            .await
            .map(|outcome| (chat.id, outcome)),
    }
}

/// Extract the command word from message text: `/ban@modbot reason` → `ban`.
fn command_word(text: &str) -> Option<&str> {
    let first = text.split_whitespace().next()?;
    let command = first.strip_prefix('/')?;
    let command = command.split('@').next().unwrap_or(command);
    if command.is_empty() { None } else { Some(command) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_command_words() {
        assert_eq!(command_word("/ban 42 spam"), Some("ban"));
        assert_eq!(command_word("/rules"), Some("rules"));
        assert_eq!(command_word("/warn@modbot 42"), Some("warn"));
    }

    #[test]
    fn ignores_non_commands() {
        assert_eq!(command_word("hello there"), None);
        assert_eq!(command_word(""), None);
        assert_eq!(command_word("/"), None);
        assert_eq!(command_word("/@modbot"), None);
    }
}
