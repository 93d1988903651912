//! Handler for the `run` command.

use tokio::signal;
use tracing::{debug, error, info};

use crate::app::App;
use crate::cli::RunArgs;
use crate::config::{Config, Secrets, Settings};
use crate::error::Result;

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut settings = Settings::load_or_default(&args.config)?;

    // Apply CLI overrides
    if let Some(ref level) = args.log_level {
        settings.logging.level = level.clone();
    }
    if args.json_logs {
        settings.logging.format = "json".to_string();
    }
    if let Some(interval) = args.interval {
        settings.api.poll_interval_secs = interval;
    }

    settings.init_logging();

    // The credential check runs exactly once; a missing variable is fatal
    // and never retried.
    let secrets = match Secrets::from_env() {
        Ok(secrets) => {
            debug!("Environment variables: OK");
            secrets
        }
        Err(e) => {
            error!(error = %e, "Environment variables: FAIL");
            return Err(e.into());
        }
    };

    info!("reviewbot starting");

    let config = Config { settings, secrets };

    tokio::select! {
        result = App::run(config) => {
            if let Err(e) = result {
                error!(error = %e, "Fatal error");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("reviewbot stopped");
    Ok(())
}
