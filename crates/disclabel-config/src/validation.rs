// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates constraints serde attributes cannot express: the bot token is
//! present, the data root is usable, the log level is recognised.

use crate::diagnostic::ConfigError;
use crate::model::DiscLabelConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &DiscLabelConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config
        .discord
        .bot_token
        .as_deref()
        .is_none_or(|t| t.trim().is_empty())
    {
        errors.push(ConfigError::Required {
            key: "discord.bot_token".to_string(),
            env: "DISCORD_BOT_TOKEN".to_string(),
        });
    }

    if config.label.data_root.as_os_str().is_empty() {
        errors.push(ConfigError::Validation {
            message: "label.data_root must not be empty".to_string(),
        });
    }

    if config.discord.webhook_name.is_empty() {
        errors.push(ConfigError::Validation {
            message: "discord.webhook_name must not be empty".to_string(),
        });
    }

    let level = config.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log_level `{}` is not one of {}",
                config.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
