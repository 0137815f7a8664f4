// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for disclabel.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Author name the notification webhook posts under.
pub const DEFAULT_WEBHOOK_NAME: &str = "CD Archiver";

/// Top-level disclabel configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DiscLabelConfig {
    /// Verbose diagnostic logging. Accepts `true`, `1`, or `yes` (any case).
    #[serde(default, deserialize_with = "flag::deserialize")]
    pub debug: bool,

    /// Logging level used when `debug` is off (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Discord bot settings.
    #[serde(default)]
    pub discord: DiscordConfig,

    /// Label output settings.
    #[serde(default)]
    pub label: LabelConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl DiscLabelConfig {
    /// The effective log level: `debug` when the debug flag is set.
    pub fn effective_log_level(&self) -> &str {
        if self.debug { "debug" } else { &self.log_level }
    }

    /// A copy safe to print: the bot token is replaced by a placeholder.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.discord.bot_token.is_some() {
            copy.discord.bot_token = Some("<redacted>".to_string());
        }
        copy
    }
}

/// Discord bot configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DiscordConfig {
    /// Discord bot token. Required to start the bot.
    #[serde(default)]
    pub bot_token: Option<String>,

    /// Exact author name of the webhook whose notifications are labeled.
    #[serde(default = "default_webhook_name")]
    pub webhook_name: String,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            webhook_name: default_webhook_name(),
        }
    }
}

fn default_webhook_name() -> String {
    DEFAULT_WEBHOOK_NAME.to_string()
}

/// Where label files are written.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LabelConfig {
    /// Base directory that extracted notification paths are resolved against.
    #[serde(default = "default_data_root")]
    pub data_root: PathBuf,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
        }
    }
}

fn default_data_root() -> PathBuf {
    PathBuf::from("/data")
}

/// Lenient boolean parsing for the `debug` flag.
///
/// Environment values arrive as booleans, integers, or free text depending on
/// how figment parses them; only `true`, `1`, and `yes` count as on.
pub mod flag {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Int(i64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    /// Returns `true` for `true`, `1`, or `yes`, compared case-insensitively.
    pub fn is_truthy(value: &str) -> bool {
        matches!(value.to_ascii_lowercase().as_str(), "true" | "1" | "yes")
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawFlag::deserialize(deserializer)? {
            RawFlag::Bool(b) => b,
            RawFlag::Int(n) => n == 1,
            RawFlag::Text(s) => is_truthy(&s),
            RawFlag::Other(_) => false,
        })
    }
}
