//! App orchestration: the poll loop driver and the per-cycle logic.
//!
//! The cycle is an explicit function over the [`ReviewApi`] and
//! [`Notifier`] seams. [`run_cycle`] never returns an error: anything
//! raised inside a cycle is logged, converted into a best-effort failure
//! notification, and the loop moves on to the next cycle. The driver owns
//! the sleep; it has no terminal state under normal operation.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error, info};

use crate::api::{check_response, ReviewApi, ReviewClient};
use crate::config::Config;
use crate::domain::parse_status;
use crate::error::Result;
use crate::notifier::{notify, Notifier};
#[cfg(not(feature = "telegram"))]
use crate::notifier::LogNotifier;
#[cfg(feature = "telegram")]
use crate::notifier::TelegramNotifier;

/// Main application struct.
pub struct App;

impl App {
    /// Run the poll loop until the process is terminated.
    ///
    /// Credentials must already have been validated; this only wires up the
    /// client and notifier and drives [`run_cycle`] on the configured
    /// interval.
    pub async fn run(config: Config) -> Result<()> {
        let api = ReviewClient::new(
            config.settings.api.endpoint.clone(),
            config.secrets.practicum_token.clone(),
        );

        #[cfg(feature = "telegram")]
        let notifier = TelegramNotifier::new(&config.secrets);
        #[cfg(not(feature = "telegram"))]
        let notifier = LogNotifier;

        let interval = Duration::from_secs(config.settings.api.poll_interval_secs);
        let mut cursor = chrono::Utc::now().timestamp();

        info!(
            interval_secs = interval.as_secs(),
            cursor, "Poll loop starting"
        );

        loop {
            cursor = run_cycle(&api, &notifier, cursor).await;
            tokio::time::sleep(interval).await;
        }
    }
}

/// Run one poll cycle and return the cursor for the next one.
///
/// Errors from fetch, validation, or translation are caught here, at the
/// cycle boundary: they are logged and relayed as a failure notification,
/// and the previous cursor is retained.
pub async fn run_cycle(api: &dyn ReviewApi, notifier: &dyn Notifier, cursor: i64) -> i64 {
    match poll_once(api, notifier, cursor).await {
        Ok(next_cursor) => next_cursor,
        Err(e) => {
            error!(error = %e, "Poll cycle failed");
            notify(notifier, &format!("Homework bot failure: {e}")).await;
            cursor
        }
    }
}

/// The fallible part of a cycle: fetch → validate → translate → notify.
async fn poll_once(api: &dyn ReviewApi, notifier: &dyn Notifier, cursor: i64) -> Result<i64> {
    let payload = api.fetch(cursor).await?;
    let homeworks = check_response(&payload)?;
    debug!(count = homeworks.len(), "Check response: OK");

    // Only the first record is translated; the API returns the most recent
    // update at index 0.
    if let Some(record) = homeworks.first() {
        let message = parse_status(record)?;
        notify(notifier, &message).await;
    } else {
        debug!("New homework status: NO");
    }

    Ok(payload
        .get("current_date")
        .and_then(Value::as_i64)
        .unwrap_or(cursor))
}
