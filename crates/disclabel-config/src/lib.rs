// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for disclabel.
//!
//! Provides TOML configuration parsing with strict validation (`deny_unknown_fields`),
//! XDG file hierarchy lookup, environment variable overrides (`DATA_ROOT`,
//! `DISCORD_BOT_TOKEN`, `DEBUG`, `DISCLABEL_*`), and miette diagnostics with
//! typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use disclabel_config::load_and_validate;
//!
//! let config = load_and_validate(None).expect("config errors");
//! println!("data root: {}", config.label.data_root.display());
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::load_config_from_str;
pub use model::DiscLabelConfig;

/// Load configuration without validating it.
///
/// With `path`, that file is used instead of the XDG hierarchy. Figment
/// errors are converted into diagnostics with source spans.
pub fn load(path: Option<&Path>) -> Result<DiscLabelConfig, Vec<ConfigError>> {
    loader::build_figment(path)
        .extract::<DiscLabelConfig>()
        .map_err(|err| {
            let sources = collect_toml_sources(path);
            diagnostic::figment_to_config_errors(err, &sources)
        })
}

/// Load configuration and validate it.
///
/// Validation errors are returned together.
pub fn load_and_validate(path: Option<&Path>) -> Result<DiscLabelConfig, Vec<ConfigError>> {
    let config = load(path)?;
    validation::validate_config(&config)?;
    Ok(config)
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<DiscLabelConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Read the TOML files that may have contributed to the config, for error spans.
fn collect_toml_sources(explicit: Option<&Path>) -> Vec<(String, String)> {
    let candidates: Vec<std::path::PathBuf> = match explicit {
        Some(path) => vec![path.to_path_buf()],
        None => [
            Some(loader::SYSTEM_CONFIG_PATH.into()),
            loader::user_config_path(),
            std::env::current_dir()
                .ok()
                .map(|d| d.join(loader::LOCAL_CONFIG_FILE)),
        ]
        .into_iter()
        .flatten()
        .collect(),
    };

    candidates
        .into_iter()
        .filter_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            tracing::trace!(path = %path.display(), "read config source for diagnostics");
            Some((path.display().to_string(), content))
        })
        .collect()
}
