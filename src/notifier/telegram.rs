//! Telegram notification backend.
//!
//! Requires the `telegram` feature to be enabled.

use async_trait::async_trait;
use teloxide::prelude::*;
use tracing::info;

use super::Notifier;
use crate::config::Secrets;
use crate::error::NotifyError;

/// Notifier that sends plain-text messages to a fixed Telegram chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    pub fn new(secrets: &Secrets) -> Self {
        info!(chat_id = secrets.telegram_chat_id, "Telegram notifier ready");
        Self {
            bot: Bot::new(&secrets.telegram_token),
            chat_id: ChatId(secrets.telegram_chat_id),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        self.bot
            .send_message(self.chat_id, text)
            .await
            .map(|_| ())
            .map_err(|e| NotifyError::Delivery(e.to_string()))
    }
}
