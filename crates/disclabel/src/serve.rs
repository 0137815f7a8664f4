// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `disclabel serve` command implementation.
//!
//! Sets up logging, connects the Discord bot, and runs until a shutdown
//! signal arrives or the gateway fails.

use disclabel_config::DiscLabelConfig;
use disclabel_core::DiscLabelError;
use disclabel_discord::DiscordLabeler;
use tracing::{error, info, warn};

use crate::shutdown;

/// Runs the `disclabel serve` command.
pub async fn run_serve(config: DiscLabelConfig) -> Result<(), DiscLabelError> {
    init_tracing(config.effective_log_level());

    let data_root = &config.label.data_root;
    info!(
        data_root = %data_root.display(),
        webhook = %config.discord.webhook_name,
        debug = config.debug,
        "starting disclabel"
    );
    if !data_root.is_dir() {
        warn!(
            data_root = %data_root.display(),
            "data root is not a directory, every label will be rejected until it exists"
        );
    }

    let bot = DiscordLabeler::new(&config)?;
    let cancel = shutdown::install_signal_handler();

    match bot.run(cancel.clone()).await {
        Ok(()) => {
            info!("disclabel stopped");
            Ok(())
        }
        Err(e) if cancel.is_cancelled() => {
            warn!(error = %e, "Discord client reported an error during shutdown");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Discord client failed");
            Err(e)
        }
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("disclabel={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
