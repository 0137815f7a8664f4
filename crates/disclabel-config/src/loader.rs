// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./disclabel.toml` > `~/.config/disclabel/disclabel.toml`
//! > `/etc/disclabel/disclabel.toml`, with environment variable overrides.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::DiscLabelConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/disclabel/disclabel.toml";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "disclabel.toml";

/// The per-user config file under the XDG config directory, if one can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("disclabel").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from a TOML string only (no files, no environment).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<DiscLabelConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DiscLabelConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Build the Figment used for config loading.
///
/// With `explicit`, that file replaces the XDG hierarchy. Environment
/// variables are merged last in both cases.
pub fn build_figment(explicit: Option<&Path>) -> Figment {
    let figment = Figment::new().merge(Serialized::defaults(DiscLabelConfig::default()));

    let figment = match explicit {
        Some(path) => figment.merge(Toml::file(path)),
        None => figment
            .merge(Toml::file(SYSTEM_CONFIG_PATH))
            .merge(Toml::file(user_config_path().unwrap_or_default()))
            .merge(Toml::file(LOCAL_CONFIG_FILE)),
    };

    merge_bare_env(figment).merge(prefixed_env_provider())
}

/// The unprefixed variables deployments set, with the config key each one fills.
const BARE_ENV_VARS: &[(&str, &str)] = &[
    ("DATA_ROOT", "label.data_root"),
    ("DISCORD_BOT_TOKEN", "discord.bot_token"),
    ("DEBUG", "debug"),
];

/// Merges the bare variables as raw strings.
///
/// `Env` would parse `2024` as an integer and trim ` yes`; these values are
/// used exactly as set.
fn merge_bare_env(figment: Figment) -> Figment {
    BARE_ENV_VARS
        .iter()
        .fold(figment, |figment, (var, key)| match std::env::var(var) {
            Ok(value) => figment.merge(Serialized::default(key, value)),
            Err(_) => figment,
        })
}

/// `DISCLABEL_*` variables, mapped section-to-dot with explicit rules.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that
/// `DISCLABEL_DISCORD_WEBHOOK_NAME` maps to `discord.webhook_name`,
/// not `discord.webhook.name`.
fn prefixed_env_provider() -> Env {
    Env::prefixed("DISCLABEL_").map(|key| {
        let key_str = key.as_str().to_ascii_lowercase();
        let mapped = if key_str == "webhook_name" {
            "discord.webhook_name".to_string()
        } else {
            key_str
                .replacen("discord_", "discord.", 1)
                .replacen("label_", "label.", 1)
        };
        mapped.into()
    })
}
