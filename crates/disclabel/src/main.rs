// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! disclabel - labels archived discs from Discord replies.
//!
//! This is the binary entry point for the disclabel bot.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod serve;
mod shutdown;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// disclabel - labels archived discs from Discord replies.
#[derive(Parser, Debug)]
#[command(name = "disclabel", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Connect to Discord and label replies (default).
    Serve,
    /// Print the effective configuration with secrets redacted.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let path = cli.config.as_deref();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let config = match disclabel_config::load_and_validate(path) {
                Ok(config) => config,
                Err(errors) => {
                    disclabel_config::render_errors(&errors);
                    std::process::exit(1);
                }
            };

            if let Err(e) = serve::run_serve(config).await {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Commands::Config => {
            let config = match disclabel_config::load(path) {
                Ok(config) => config,
                Err(errors) => {
                    disclabel_config::render_errors(&errors);
                    std::process::exit(1);
                }
            };

            match toml::to_string_pretty(&config.redacted()) {
                Ok(rendered) => print!("{rendered}"),
                Err(e) => {
                    eprintln!("error: failed to render config: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
