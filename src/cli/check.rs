//! Handlers for the `check` subcommands.

use std::path::Path;

use crate::cli::output;
use crate::config::{mask, Secrets, Settings};
use crate::error::Result;
use crate::notifier::Notifier;

/// Validate the settings file and credential presence.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let settings = Settings::load_or_default(&config_path)?;
    let secrets = Secrets::from_env()?;

    output::section("Configuration Check");
    output::field("Endpoint", &settings.api.endpoint);
    output::field("Interval", format!("{}s", settings.api.poll_interval_secs));
    output::field("Log level", &settings.logging.level);
    output::field("API token", mask(&secrets.practicum_token));
    output::field("Bot token", mask(&secrets.telegram_token));
    output::field("Chat ID", secrets.telegram_chat_id);
    output::ok("Configuration valid");

    Ok(())
}

/// Send a test message through the configured notifier.
pub async fn execute_telegram<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let _settings = Settings::load_or_default(&config_path)?;
    let secrets = Secrets::from_env()?;

    output::section("Telegram Check");
    output::field("Bot token", mask(&secrets.telegram_token));
    output::field("Chat ID", secrets.telegram_chat_id);

    #[cfg(feature = "telegram")]
    {
        let notifier = crate::notifier::TelegramNotifier::new(&secrets);
        notifier
            .send("Reviewbot test message. Configuration validated.")
            .await?;
        output::ok("Telegram test message sent");
        println!("  Check Telegram for the message.");
    }

    #[cfg(not(feature = "telegram"))]
    {
        let notifier = crate::notifier::LogNotifier;
        notifier
            .send("Reviewbot test message. Configuration validated.")
            .await?;
        output::ok("Logged test message (built without the telegram feature)");
    }

    Ok(())
}
