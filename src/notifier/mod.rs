//! Notification backends.
//!
//! Delivery is best-effort: the poll loop sends through [`notify`], which
//! logs a failed delivery and swallows it. A broken notifier must never
//! crash the loop or mask the error that triggered the notification.

#[cfg(feature = "telegram")]
mod telegram;

#[cfg(feature = "telegram")]
pub use telegram::TelegramNotifier;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::error::NotifyError;

/// Trait for notification backends.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a text message to the configured destination.
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// Best-effort delivery: log the outcome, swallow failures.
pub async fn notify(notifier: &dyn Notifier, text: &str) {
    match notifier.send(text).await {
        Ok(()) => debug!("Send message: OK"),
        Err(e) => error!(error = %e, "Send message: FAIL"),
    }
}

/// A no-op notifier for tests or when notifications are disabled.
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn send(&self, _text: &str) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// A notifier that only logs messages via tracing.
///
/// Used as the delivery path when the `telegram` feature is compiled out.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        tracing::info!(message = %text, "Notification");
        Ok(())
    }
}
