//! Prometheus metrics for the moderation engine.
//!
//! The embedding daemon calls [`init`] once at startup and exposes
//! [`registry`] however it serves metrics. Recording is a no-op until
//! `init` has run, so library tests need no metrics setup.

use prometheus::{IntCounterVec, Opts, Registry};
use std::sync::OnceLock;

/// Global registry all engine metrics register against.
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::new)
}

/// Commands processed, by command word.
pub static COMMANDS: OnceLock<IntCounterVec> = OnceLock::new();

/// Moderation actions taken, by action.
pub static ACTIONS: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize and register all metrics. Call once at startup.
pub fn init() {
    let r = registry();

    macro_rules! register {
        ($metric:ident, $init:expr) => {
            let m = $init.expect(concat!(stringify!($metric), " creation failed"));
            if let Err(e) = r.register(Box::new(m.clone())) {
                tracing::warn!(error = %e, concat!("Failed to register metric ", stringify!($metric)));
            }
            let _ = $metric.set(m);
        };
    }

    register!(
        COMMANDS,
        IntCounterVec::new(
            Opts::new(
                "moderation_commands_total",
                "Moderation commands processed by command word"
            ),
            &["command"]
        )
    );
    register!(
        ACTIONS,
        IntCounterVec::new(
            Opts::new(
                "moderation_actions_total",
                "Moderation actions taken by kind"
            ),
            &["action"]
        )
    );
}

/// Count a processed command.
pub fn record_command(command: &str) {
    if let Some(counter) = COMMANDS.get() {
        counter.with_label_values(&[command]).inc();
    }
}

/// Count a moderation action that actually went through.
pub fn record_action(action: &str) {
    if let Some(counter) = ACTIONS.get() {
        counter.with_label_values(&[action]).inc();
    }
}
