//! Status-change notification fan-out and the durable store seam.

pub mod fanout;
pub mod store;

pub use fanout::NotificationFanout;
pub use store::{NotificationStore, PgNotificationStore};
