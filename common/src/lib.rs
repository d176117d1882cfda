//! # Breach Common
//!
//! Types shared by every crate in the workspace:
//!
//! * [`target`]: the closed set of corporate networks a client can be bound to.
//! * [`schema`]: the capability contract a (Root, Entry) pair must satisfy.
//! * [`error`]: the error taxonomy surfaced by the clients.
//! * [`config`]: run configuration for the simulated uplink and the terminal.
//! * [`log`]: thin logging macros over `tracing`.

pub mod config;
pub mod error;
pub mod log;
pub mod schema;
pub mod target;
