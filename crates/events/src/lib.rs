//! Outbound delivery infrastructure.
//!
//! - [`EmailConfig`] / [`EmailDelivery`] — SMTP transport backed by
//!   `lettre`; left unconfigured, email delivery is disabled entirely.
//! - [`Mailer`] / [`spawn_mail_worker`] — bounded fire-and-forget mail
//!   queue with per-job failure isolation.
//! - [`templates`] — named HTML email templates rendered from a JSON model.

pub mod delivery;
pub mod mailer;
pub mod templates;

pub use delivery::email::{EmailConfig, EmailDelivery, EmailError};
pub use mailer::{spawn_mail_worker, EmailJob, Mailer};
