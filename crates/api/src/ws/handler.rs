use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use jobhunter_core::types::DbId;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::ws::hub::LiveHub;

/// HTTP handler that upgrades the connection to WebSocket.
///
/// The subscription is bound to the authenticated user; after the upgrade
/// the connection is registered with [`LiveHub`] and receives the `ping`
/// event followed by any `resumeStatus` events for that user.
pub async fn subscribe_handler(
    auth: AuthUser,
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state.live_hub, auth.user_id))
}

/// Manage a single subscriber connection after upgrade.
///
/// Splits the socket into a sink (outbound) and stream (inbound), then:
///   1. Registers the connection with the hub.
///   2. Spawns a sender task that forwards queued events to the sink.
///   3. Drains inbound frames on the current task until close or error.
///   4. Deregisters on disconnect.
///
/// There is no idle timeout; the channel lives until the client goes away.
async fn handle_socket(socket: WebSocket, hub: Arc<LiveHub>, user_id: DbId) {
    let (channel_id, mut rx) = hub.subscribe(user_id).await;
    tracing::info!(user_id, channel_id = %channel_id, "Live subscriber connected");

    let (mut sink, mut stream) = socket.split();

    // Sender task: forward queued messages to the WebSocket sink.
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sink.send(msg).await.is_err() {
                break;
            }
        }
    });

    // Receiver loop: subscribers only listen, so inbound frames are drained
    // purely to observe disconnects.
    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(user_id, error = %e, "Live channel receive error");
                break;
            }
        }
    }

    hub.deregister(user_id, channel_id).await;
    send_task.abort();
    tracing::info!(user_id, channel_id = %channel_id, "Live subscriber disconnected");
}
