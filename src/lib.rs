//! Reviewbot - Homework review status watcher.
//!
//! Polls the Practicum homework-review API on a fixed interval and relays
//! human-readable verdict notifications to a Telegram chat.
//!
//! # Architecture
//!
//! One poll cycle runs fetch → validate → translate → notify:
//!
//! - [`api`] - Review API client ([`api::ReviewApi`] trait + reqwest
//!   implementation) and response shape validation
//! - [`domain`] - Verdict table and status-to-message translation
//! - [`notifier`] - Notification trait with a Telegram backend
//!   (requires the `telegram` feature)
//! - [`app`] - The poll loop driver and the per-cycle logic
//! - [`config`] - Settings file, environment secrets, logging setup
//! - [`error`] - Error types for the crate
//!
//! The cycle logic lives in [`app::run_cycle`], a plain async function over
//! the [`api::ReviewApi`] and [`notifier::Notifier`] seams, so it is
//! testable without network access or real time.
//!
//! # Features
//!
//! - `telegram` - Enable the Telegram notification backend (default)
//! - `testkit` - Expose test doubles for integration tests

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod notifier;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
