use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::ws::Message;
use jobhunter_core::types::DbId;
use tokio::sync::{mpsc, Mutex, RwLock};
use uuid::Uuid;

/// Channel sender half for pushing messages to one connection.
pub type LiveSender = mpsc::UnboundedSender<Message>;

// ---------------------------------------------------------------------------
// LiveEvent
// ---------------------------------------------------------------------------

/// Named event envelope pushed to subscribers.
///
/// Serialized as `{"event": ..., "data": ...}` so clients dispatch on the
/// event name.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LiveEvent {
    pub event: &'static str,
    pub data: serde_json::Value,
}

impl LiveEvent {
    /// Liveness acknowledgement sent right after subscribing.
    pub fn ping() -> Self {
        Self {
            event: "ping",
            data: serde_json::Value::String("ok".into()),
        }
    }

    /// A resume status change.
    pub fn resume_status(data: serde_json::Value) -> Self {
        Self {
            event: "resumeStatus",
            data,
        }
    }

    /// Encode as a WebSocket text frame.
    ///
    /// Serializing a static name plus an already-built `Value` cannot fail.
    pub fn to_message(&self) -> Message {
        Message::Text(serde_json::to_string(self).unwrap_or_default().into())
    }
}

// ---------------------------------------------------------------------------
// LiveHub
// ---------------------------------------------------------------------------

/// One registered connection.
struct LiveChannel {
    id: Uuid,
    sender: LiveSender,
}

/// Per-user registry of open push channels.
///
/// A user may hold several channels at once (multiple tabs/devices). The
/// outer map is write-locked only to insert or garbage-collect a user
/// entry; sends and prunes synchronize on that user's own entry, so a slow
/// or dying connection for one user never serializes delivery to another.
///
/// Lock order is always map before entry, and the map lock is released
/// before an entry lock is held across work, so the two levels cannot
/// deadlock.
pub struct LiveHub {
    users: RwLock<HashMap<DbId, Arc<Mutex<Vec<LiveChannel>>>>>,
}

impl LiveHub {
    /// Create a new, empty hub.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new channel for `user_id`.
    ///
    /// Returns the channel id (needed to deregister) and the receiver half
    /// to forward to the socket sink. A `ping` event is queued immediately
    /// so intermediaries see traffic on an otherwise idle connection. The
    /// channel itself never expires; it lives until the connection closes
    /// or errors.
    pub async fn subscribe(&self, user_id: DbId) -> (Uuid, mpsc::UnboundedReceiver<Message>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = Uuid::new_v4();

        // The receiver is alive in our hands, so the ping cannot fail.
        let _ = tx.send(LiveEvent::ping().to_message());

        let entry = {
            let mut users = self.users.write().await;
            Arc::clone(users.entry(user_id).or_default())
        };
        entry.lock().await.push(LiveChannel { id, sender: tx });

        (id, rx)
    }

    /// Push a message to every channel registered for `user_id`, in
    /// registration order.
    ///
    /// Channels whose receiver is gone are pruned during the pass, and an
    /// entry left empty is removed so the map does not accumulate users who
    /// are no longer connected. A user with no entry is a silent no-op.
    /// Returns the number of channels the message reached.
    pub async fn send_to_user(&self, user_id: DbId, message: Message) -> usize {
        let entry = {
            let users = self.users.read().await;
            match users.get(&user_id) {
                Some(entry) => Arc::clone(entry),
                None => return 0,
            }
        };

        let delivered = {
            let mut channels = entry.lock().await;
            let before = channels.len();
            channels.retain(|ch| ch.sender.send(message.clone()).is_ok());
            let dropped = before - channels.len();
            if dropped > 0 {
                tracing::debug!(user_id, dropped, "Pruned dead live channels");
            }
            channels.len()
        };

        if delivered == 0 {
            self.remove_if_empty(user_id).await;
        }
        delivered
    }

    /// Drop one channel, removing the user's entry if it was the last.
    pub async fn deregister(&self, user_id: DbId, channel_id: Uuid) {
        let entry = {
            let users = self.users.read().await;
            match users.get(&user_id) {
                Some(entry) => Arc::clone(entry),
                None => return,
            }
        };

        let now_empty = {
            let mut channels = entry.lock().await;
            channels.retain(|ch| ch.id != channel_id);
            channels.is_empty()
        };

        if now_empty {
            self.remove_if_empty(user_id).await;
        }
    }

    /// Remove the user's map entry unless a concurrent subscribe
    /// repopulated it between the emptiness check and this call.
    async fn remove_if_empty(&self, user_id: DbId) {
        let mut users = self.users.write().await;
        let empty = match users.get(&user_id) {
            Some(entry) => entry.lock().await.is_empty(),
            None => return,
        };
        if empty {
            users.remove(&user_id);
        }
    }

    /// Number of users with at least one registered channel.
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    /// Number of registered channels for one user.
    pub async fn channel_count(&self, user_id: DbId) -> usize {
        let entry = {
            let users = self.users.read().await;
            match users.get(&user_id) {
                Some(entry) => Arc::clone(entry),
                None => return 0,
            }
        };
        let count = entry.lock().await.len();
        count
    }

    /// Send a Close frame to every channel, then clear the registry.
    ///
    /// Used during graceful shutdown to notify all clients before the
    /// server stops accepting new connections.
    pub async fn shutdown_all(&self) {
        let mut users = self.users.write().await;
        let mut count = 0;
        for entry in users.values() {
            let channels = entry.lock().await;
            for ch in channels.iter() {
                let _ = ch.sender.send(Message::Close(None));
                count += 1;
            }
        }
        users.clear();
        tracing::info!(count, "Closed all live channels");
    }
}

impl Default for LiveHub {
    fn default() -> Self {
        Self::new()
    }
}
