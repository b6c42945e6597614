//! Unit tests for `LiveHub`.
//!
//! These tests exercise the per-user channel registry directly, without
//! any HTTP upgrades. They verify subscribe/deregister semantics, per-user
//! delivery, dead-channel pruning, and empty-entry garbage collection.

use axum::extract::ws::Message;
use jobhunter_api::ws::{LiveEvent, LiveHub};

/// Read the next text frame as parsed JSON.
async fn next_json(rx: &mut tokio::sync::mpsc::UnboundedReceiver<Message>) -> serde_json::Value {
    match rx.recv().await.expect("channel should yield a message") {
        Message::Text(text) => serde_json::from_str(&text).expect("frame should be JSON"),
        other => panic!("Expected text frame, got: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test: subscribe queues a ping event first
// ---------------------------------------------------------------------------

#[tokio::test]
async fn subscribe_emits_ping_first() {
    let hub = LiveHub::new();

    let (_id, mut rx) = hub.subscribe(7).await;

    let ping = next_json(&mut rx).await;
    assert_eq!(ping["event"], "ping");
    assert_eq!(ping["data"], "ok");
}

// ---------------------------------------------------------------------------
// Test: one user, two channels -- both receive a send
// ---------------------------------------------------------------------------

#[tokio::test]
async fn send_reaches_every_channel_of_the_user() {
    let hub = LiveHub::new();

    let (_id1, mut rx1) = hub.subscribe(7).await;
    let (_id2, mut rx2) = hub.subscribe(7).await;
    assert_eq!(hub.channel_count(7).await, 2);

    // Skip the pings.
    next_json(&mut rx1).await;
    next_json(&mut rx2).await;

    let event = LiveEvent::resume_status(serde_json::json!({"resumeId": 42}));
    let delivered = hub.send_to_user(7, event.to_message()).await;
    assert_eq!(delivered, 2);

    let got1 = next_json(&mut rx1).await;
    let got2 = next_json(&mut rx2).await;
    assert_eq!(got1["event"], "resumeStatus");
    assert_eq!(got1["data"]["resumeId"], 42);
    assert_eq!(got1, got2);
}

// ---------------------------------------------------------------------------
// Test: send to a user with no channels is a silent no-op
// ---------------------------------------------------------------------------

#[tokio::test]
async fn send_to_unknown_user_is_a_noop() {
    let hub = LiveHub::new();

    let delivered = hub
        .send_to_user(999, LiveEvent::ping().to_message())
        .await;

    assert_eq!(delivered, 0);
    assert_eq!(hub.user_count().await, 0);
}

// ---------------------------------------------------------------------------
// Test: deregistering one channel leaves the other receiving
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deregistering_one_channel_keeps_the_other_live() {
    let hub = LiveHub::new();

    let (id1, mut rx1) = hub.subscribe(7).await;
    let (_id2, mut rx2) = hub.subscribe(7).await;
    next_json(&mut rx1).await;
    next_json(&mut rx2).await;

    hub.deregister(7, id1).await;
    assert_eq!(hub.channel_count(7).await, 1);

    let delivered = hub
        .send_to_user(7, LiveEvent::resume_status(serde_json::json!({})).to_message())
        .await;
    assert_eq!(delivered, 1);

    let got = next_json(&mut rx2).await;
    assert_eq!(got["event"], "resumeStatus");
    // The deregistered channel got nothing beyond its ping.
    assert!(rx1.try_recv().is_err());
}

// ---------------------------------------------------------------------------
// Test: a channel whose receiver is gone is pruned on the next send
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dead_channel_is_pruned_on_send() {
    let hub = LiveHub::new();

    let (_id1, rx1) = hub.subscribe(7).await;
    let (_id2, mut rx2) = hub.subscribe(7).await;
    next_json(&mut rx2).await;

    // Simulate a client that vanished without a Close frame.
    drop(rx1);

    let delivered = hub
        .send_to_user(7, LiveEvent::resume_status(serde_json::json!({})).to_message())
        .await;
    assert_eq!(delivered, 1);
    assert_eq!(hub.channel_count(7).await, 1);

    // A second send does not attempt the pruned channel.
    let delivered = hub
        .send_to_user(7, LiveEvent::resume_status(serde_json::json!({})).to_message())
        .await;
    assert_eq!(delivered, 1);
}

// ---------------------------------------------------------------------------
// Test: when the last channel dies the user entry is removed
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_user_entry_is_garbage_collected() {
    let hub = LiveHub::new();

    let (_id, rx) = hub.subscribe(7).await;
    assert_eq!(hub.user_count().await, 1);
    drop(rx);

    let delivered = hub.send_to_user(7, LiveEvent::ping().to_message()).await;
    assert_eq!(delivered, 0);
    assert_eq!(hub.user_count().await, 0);
    assert_eq!(hub.channel_count(7).await, 0);
}

// ---------------------------------------------------------------------------
// Test: deregistering the last channel removes the user entry
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deregistering_last_channel_removes_entry() {
    let hub = LiveHub::new();

    let (id, _rx) = hub.subscribe(7).await;
    assert_eq!(hub.user_count().await, 1);

    hub.deregister(7, id).await;

    assert_eq!(hub.user_count().await, 0);
    assert_eq!(hub.channel_count(7).await, 0);
}

// ---------------------------------------------------------------------------
// Test: channels of different users are independent
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sends_are_scoped_to_one_user() {
    let hub = LiveHub::new();

    let (_id1, mut rx1) = hub.subscribe(7).await;
    let (_id2, mut rx2) = hub.subscribe(8).await;
    next_json(&mut rx1).await;
    next_json(&mut rx2).await;

    hub.send_to_user(7, LiveEvent::resume_status(serde_json::json!({})).to_message())
        .await;

    assert_eq!(next_json(&mut rx1).await["event"], "resumeStatus");
    assert!(rx2.try_recv().is_err());
}

// ---------------------------------------------------------------------------
// Test: shutdown_all sends Close and clears the registry
// ---------------------------------------------------------------------------

#[tokio::test]
async fn shutdown_all_sends_close_and_clears() {
    let hub = LiveHub::new();

    let (_id1, mut rx1) = hub.subscribe(7).await;
    let (_id2, mut rx2) = hub.subscribe(8).await;
    next_json(&mut rx1).await;
    next_json(&mut rx2).await;

    hub.shutdown_all().await;
    assert_eq!(hub.user_count().await, 0);

    let msg1 = rx1.recv().await.expect("rx1 should receive Close");
    assert!(matches!(msg1, Message::Close(None)), "got: {msg1:?}");
    let msg2 = rx2.recv().await.expect("rx2 should receive Close");
    assert!(matches!(msg2, Message::Close(None)), "got: {msg2:?}");

    // After Close, the channels are closed for good.
    assert!(rx1.recv().await.is_none());
}
