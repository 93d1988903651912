//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`api`] — [`ScriptedApi`](api::ScriptedApi), a canned
//!   [`ReviewApi`](crate::api::ReviewApi) implementation.
//! - [`notifier`] — `RecordingNotifier` and `FailingNotifier` doubles.
//! - [`payload`] — Builders for canonical API payloads.

pub mod api;
pub mod notifier;
pub mod payload;

pub use api::ScriptedApi;
pub use notifier::{FailingNotifier, RecordingNotifier};
