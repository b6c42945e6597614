//! Real-time push over WebSocket.
//!
//! [`LiveHub`] keeps the per-user registry of open channels; the handler
//! upgrades authenticated HTTP requests and bridges socket I/O to the hub.

mod handler;
pub mod hub;

pub use handler::subscribe_handler;
pub use hub::{LiveEvent, LiveHub};
