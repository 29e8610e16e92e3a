//! Integration tests for the warn lifecycle: counting, escalation,
//! escalation failure, and the query commands.

mod common;

use chatwarden::outcome::CommandOutcome;
use chatwarden::types::Role;
use common::{Call, MockClient, engine_with, group_chat, message, reply_message, user};
use std::sync::Arc;

const CHAT: i64 = -100_600;

#[tokio::test]
async fn third_warn_escalates_and_clears() {
    common::init_tracing();
    let admin = user(1, "Admin");
    let target = user(42, "Troll");
    let client = Arc::new(
        MockClient::new()
            .with_member(CHAT, &admin, Role::Administrator)
            .with_member(CHAT, &target, Role::Member),
    );
    let engine = engine_with(Arc::clone(&client), vec![]);
    let chat = group_chat(CHAT);

    let first = engine
        .handle_warn(&message(&chat, &admin, "/warn @42 spam"))
        .await;
    assert_eq!(
        first,
        CommandOutcome::Warned {
            target: target.clone(),
            reason: Some("spam".to_string()),
            count: 1,
            limit: 3,
        }
    );

    let second = engine
        .handle_warn(&message(&chat, &admin, "/warn @42 again"))
        .await;
    assert_eq!(
        second,
        CommandOutcome::Warned {
            target: target.clone(),
            reason: Some("again".to_string()),
            count: 2,
            limit: 3,
        }
    );

    let third = engine
        .handle_warn(&message(&chat, &admin, "/warn @42 enough"))
        .await;
    assert_eq!(
        third,
        CommandOutcome::Escalated {
            target: target.clone(),
            count: 3,
        }
    );
    assert_eq!(
        client.calls(),
        vec![Call::Ban {
            chat: CHAT,
            user: 42,
            permanent: true
        }]
    );

    // The counter was cleared by the escalation.
    let count = engine
        .handle_warns(&message(&chat, &admin, "/warns @42"))
        .await;
    assert_eq!(
        count,
        CommandOutcome::WarnCount {
            target: target.clone(),
            count: 0,
            limit: 3,
        }
    );
}

#[tokio::test]
async fn failed_escalation_ban_keeps_the_count() {
    let admin = user(1, "Admin");
    let target = user(42, "Troll");
    let client = Arc::new(
        MockClient::new()
            .with_member(CHAT, &admin, Role::Administrator)
            .with_member(CHAT, &target, Role::Member)
            .failing_bans(),
    );
    let engine = engine_with(Arc::clone(&client), vec![]);
    let chat = group_chat(CHAT);

    for _ in 0..2 {
        engine
            .handle_warn(&message(&chat, &admin, "/warn @42"))
            .await;
    }
    let third = engine
        .handle_warn(&message(&chat, &admin, "/warn @42"))
        .await;
    assert_eq!(
        third,
        CommandOutcome::PlatformError {
            detail: "platform error: ban rejected".to_string()
        }
    );

    // Unlike the success path, the counter is not cleared.
    let count = engine
        .handle_warns(&message(&chat, &admin, "/warns @42"))
        .await;
    assert_eq!(
        count,
        CommandOutcome::WarnCount {
            target: target.clone(),
            count: 3,
            limit: 3,
        }
    );
}

#[tokio::test]
async fn warn_reason_joins_the_remaining_tokens() {
    let admin = user(1, "Admin");
    let target = user(2, "Troll");
    let client = Arc::new(
        MockClient::new()
            .with_member(CHAT, &admin, Role::Administrator)
            .with_member(CHAT, &target, Role::Member),
    );
    let engine = engine_with(Arc::clone(&client), vec![]);
    let chat = group_chat(CHAT);

    let msg = reply_message(&chat, &admin, "/warn posting spam links", &target);
    let outcome = engine.handle_warn(&msg).await;
    assert_eq!(
        outcome,
        CommandOutcome::Warned {
            target: target.clone(),
            reason: Some("posting spam links".to_string()),
            count: 1,
            limit: 3,
        }
    );
}

#[tokio::test]
async fn unwarn_decrements_and_floors_at_zero() {
    let admin = user(1, "Admin");
    let target = user(2, "Troll");
    let client = Arc::new(
        MockClient::new()
            .with_member(CHAT, &admin, Role::Administrator)
            .with_member(CHAT, &target, Role::Member),
    );
    let engine = engine_with(Arc::clone(&client), vec![]);
    let chat = group_chat(CHAT);

    // Never-warned target: removal stays at zero.
    let msg = reply_message(&chat, &admin, "/unwarn", &target);
    let outcome = engine.handle_unwarn(&msg).await;
    assert_eq!(
        outcome,
        CommandOutcome::WarnRemoved {
            target: target.clone(),
            count: 0,
            limit: 3,
        }
    );

    engine.handle_warn(&message(&chat, &admin, "/warn @2")).await;
    let outcome = engine
        .handle_unwarn(&message(&chat, &admin, "/unwarn @2"))
        .await;
    assert_eq!(
        outcome,
        CommandOutcome::WarnRemoved {
            target: target.clone(),
            count: 0,
            limit: 3,
        }
    );
}

#[tokio::test]
async fn clearwarns_resets_the_counter() {
    let admin = user(1, "Admin");
    let target = user(2, "Troll");
    let client = Arc::new(
        MockClient::new()
            .with_member(CHAT, &admin, Role::Administrator)
            .with_member(CHAT, &target, Role::Member),
    );
    let engine = engine_with(Arc::clone(&client), vec![]);
    let chat = group_chat(CHAT);

    for _ in 0..2 {
        engine.handle_warn(&message(&chat, &admin, "/warn @2")).await;
    }
    let outcome = engine
        .handle_clearwarns(&message(&chat, &admin, "/clearwarns @2"))
        .await;
    assert_eq!(
        outcome,
        CommandOutcome::WarnsCleared {
            target: target.clone()
        }
    );

    let count = engine
        .handle_warns(&message(&chat, &admin, "/warns @2"))
        .await;
    assert_eq!(
        count,
        CommandOutcome::WarnCount {
            target: target.clone(),
            count: 0,
            limit: 3,
        }
    );
}

#[tokio::test]
async fn warns_defaults_to_the_invoker() {
    let member = user(5, "Plain");
    let client = Arc::new(MockClient::new().with_member(CHAT, &member, Role::Member));
    let engine = engine_with(Arc::clone(&client), vec![]);
    let chat = group_chat(CHAT);

    // No reply, no argument, and no admin rights needed.
    let outcome = engine.handle_warns(&message(&chat, &member, "/warns")).await;
    assert_eq!(
        outcome,
        CommandOutcome::WarnCount {
            target: member.clone(),
            count: 0,
            limit: 3,
        }
    );
}

#[tokio::test]
async fn warn_counters_are_per_chat() {
    let admin = user(1, "Admin");
    let target = user(2, "Troll");
    let other_chat: i64 = -100_601;
    let client = Arc::new(
        MockClient::new()
            .with_member(CHAT, &admin, Role::Administrator)
            .with_member(CHAT, &target, Role::Member)
            .with_member(other_chat, &admin, Role::Administrator)
            .with_member(other_chat, &target, Role::Member),
    );
    let engine = engine_with(Arc::clone(&client), vec![]);

    engine
        .handle_warn(&message(&group_chat(CHAT), &admin, "/warn @2"))
        .await;

    let count = engine
        .handle_warns(&message(&group_chat(other_chat), &admin, "/warns @2"))
        .await;
    assert_eq!(
        count,
        CommandOutcome::WarnCount {
            target: target.clone(),
            count: 0,
            limit: 3,
        }
    );
}
