//! Reply rendering.
//!
//! Turns structured outcomes into plain reply text in a single locale.
//! Markup, formatting entities, and localization belong to the embedding
//! daemon; nothing here is load-bearing for policy.

use crate::duration::format_duration;
use crate::outcome::{CommandOutcome, DenyReason, Usage};
use crate::types::User;

/// Render a user for reply text: name plus handle or numeric id.
pub fn format_user(user: &User) -> String {
    match &user.username {
        Some(name) => format!("{} (@{})", user.first_name, name),
        None => format!("{} [id {}]", user.first_name, user.id),
    }
}

fn reason_text(reason: &Option<String>) -> &str {
    reason.as_deref().unwrap_or("not given")
}

fn usage_text(usage: Usage) -> &'static str {
    match usage {
        Usage::Ban => "Reply with /ban [reason] [duration], or /ban <id> [reason] [duration]",
        Usage::Unban => "Use /unban <id>",
        Usage::Mute => "Reply with /mute [reason] [duration], or /mute <id> [reason] [duration]",
        Usage::Unmute => "Reply with /unmute, or /unmute <id>",
        Usage::Warn => "Reply with /warn [reason], or /warn <id> [reason]",
        Usage::Unwarn => "Reply with /unwarn, or /unwarn <id>",
        Usage::ClearWarns => "Reply with /clearwarns, or /clearwarns <id>",
        Usage::Kick => "Reply with /kick, or /kick <id>",
        Usage::SetRules => "Use /setrules <text>",
        Usage::SetWelcome => "Use /setwelcome <text> ({user} = name, {chat} = chat title)",
    }
}

const HELP_TEXT: &str = "Moderation commands\n\
    \n\
    Bans:\n\
    /ban [reason] [duration] - as a reply, or /ban <id> [reason] [duration]\n\
    /unban <id>\n\
    \n\
    Mutes:\n\
    /mute [reason] [duration] - as a reply, or /mute <id> [reason] [duration]\n\
    /unmute - as a reply, or /unmute <id>\n\
    \n\
    Warnings:\n\
    /warn [reason] - as a reply, or /warn <id> [reason]\n\
    /unwarn, /clearwarns, /warns\n\
    \n\
    Other:\n\
    /kick, /info, /rules, /setrules, /setwelcome, /delwelcome\n\
    \n\
    Durations: 30m, 2h, 1d, 1w (bare number = minutes)";

/// Render an outcome as reply text.
pub fn render(outcome: &CommandOutcome) -> String {
    match outcome {
        CommandOutcome::Banned {
            target,
            reason,
            duration,
        } => {
            let term = match duration {
                Some(d) => format_duration(*d),
                None => "permanent".to_string(),
            };
            format!(
                "User banned\n{}\nReason: {}\nTerm: {}",
                format_user(target),
                reason_text(reason),
                term
            )
        }
        CommandOutcome::Unbanned { user_id } => format!("User {} unbanned", user_id),
        CommandOutcome::Muted {
            target,
            reason,
            duration,
        } => format!(
            "User muted\n{}\nReason: {}\nTerm: {}",
            format_user(target),
            reason_text(reason),
            format_duration(*duration)
        ),
        CommandOutcome::Unmuted { target } => format!("{} unmuted", format_user(target)),
        CommandOutcome::Warned {
            target,
            reason,
            count,
            limit,
        } => format!(
            "Warning issued\n{}\nReason: {}\nWarns: {}/{}",
            format_user(target),
            reason_text(reason),
            count,
            limit
        ),
        CommandOutcome::Escalated { target, count } => format!(
            "User banned\n{}\nReason: {}/{} warnings",
            format_user(target),
            count,
            count
        ),
        CommandOutcome::WarnRemoved {
            target,
            count,
            limit,
        } => format!(
            "Warning removed\n{}\nRemaining: {}/{}",
            format_user(target),
            count,
            limit
        ),
        CommandOutcome::WarnsCleared { target } => {
            format!("All warnings cleared for {}", format_user(target))
        }
        CommandOutcome::WarnCount {
            target,
            count,
            limit,
        } => format!("{} has {}/{} warnings", format_user(target), count, limit),
        CommandOutcome::Kicked { target } => format!("{} kicked", format_user(target)),
        CommandOutcome::MemberInfo {
            target,
            role,
            warns,
            limit,
        } => {
            let username = target
                .username
                .as_deref()
                .map(|name| format!("@{}", name))
                .unwrap_or_else(|| "none".to_string());
            format!(
                "Member info\nid: {}\nname: {}\nusername: {}\nstatus: {}\nwarns: {}/{}",
                target.id, target.first_name, username, role.label(), warns, limit
            )
        }
        CommandOutcome::RulesSet => "Rules updated".to_string(),
        CommandOutcome::Rules { text } => match text {
            Some(text) => format!("Chat rules\n\n{}", text),
            None => "No rules configured".to_string(),
        },
        CommandOutcome::WelcomeSet => "Welcome message set".to_string(),
        CommandOutcome::WelcomeDeleted => "Welcome message removed".to_string(),
        CommandOutcome::Denied(reason) => match reason {
            DenyReason::NotGroup => "This command only works in group chats".to_string(),
            DenyReason::NotAuthorized => "Administrator rights required".to_string(),
            DenyReason::TargetProtected => "Administrators cannot be targeted".to_string(),
        },
        CommandOutcome::NotFound { usage } => {
            format!("User not found\n{}", usage_text(*usage))
        }
        CommandOutcome::InvalidArgument { usage } => format!("Usage: {}", usage_text(*usage)),
        CommandOutcome::PlatformError { detail } => format!("Platform error: {}", detail),
        CommandOutcome::Greeting => {
            "Hello! I am a moderation bot. Grant me admin rights, then see /help".to_string()
        }
        CommandOutcome::Welcome { text } => text.clone(),
        CommandOutcome::Help => HELP_TEXT.to_string(),
    }
}
