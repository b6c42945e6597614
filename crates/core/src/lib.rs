//! Domain types and pure logic for the JobHunter backend.
//!
//! This crate has no I/O: it holds the shared id/timestamp aliases, the
//! domain error enum, role constants, and the resume review domain (status
//! enum, destination-state field policy, and the rendering helpers shared
//! by the notification channels).

pub mod error;
pub mod resume;
pub mod roles;
pub mod types;
