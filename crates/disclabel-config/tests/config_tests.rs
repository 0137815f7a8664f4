// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the disclabel configuration system.

use std::path::PathBuf;

use disclabel_config::diagnostic::ConfigError;
use disclabel_config::model::{DEFAULT_WEBHOOK_NAME, DiscLabelConfig};
use disclabel_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes() {
    let toml = r#"
debug = true
log_level = "warn"

[discord]
bot_token = "abc.def.ghi"
webhook_name = "CD Archiver"

[label]
data_root = "/srv/discs"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert!(config.debug);
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.discord.bot_token.as_deref(), Some("abc.def.ghi"));
    assert_eq!(config.discord.webhook_name, "CD Archiver");
    assert_eq!(config.label.data_root, PathBuf::from("/srv/discs"));
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert!(!config.debug);
    assert_eq!(config.log_level, "info");
    assert!(config.discord.bot_token.is_none());
    assert_eq!(config.discord.webhook_name, DEFAULT_WEBHOOK_NAME);
    assert_eq!(config.label.data_root, PathBuf::from("/data"));
}

/// Defaults match the deployment contract: `/data`, debug off, `CD Archiver`.
#[test]
fn serialized_defaults_are_sensible() {
    let config = DiscLabelConfig::default();
    assert_eq!(config.label.data_root, PathBuf::from("/data"));
    assert!(!config.debug);
    assert_eq!(config.discord.webhook_name, "CD Archiver");
}

/// Dotted keys override like env vars do after mapping.
#[test]
fn dotted_override_sets_bot_token() {
    use figment::{Figment, providers::Serialized};

    let config: DiscLabelConfig = Figment::new()
        .merge(Serialized::defaults(DiscLabelConfig::default()))
        .merge(("discord.bot_token", "xyz-from-env"))
        .merge(("label.data_root", "/tmp/discs"))
        .extract()
        .expect("should set keys via dot notation");

    assert_eq!(config.discord.bot_token.as_deref(), Some("xyz-from-env"));
    assert_eq!(config.label.data_root, PathBuf::from("/tmp/discs"));
}

/// Missing config files are silently skipped.
#[test]
fn missing_config_files_silently_skipped() {
    let config = disclabel_config::load(Some(std::path::Path::new(
        "/nonexistent/path/disclabel.toml",
    )))
    .expect("missing file should be silently skipped");
    assert_eq!(config.discord.webhook_name, DEFAULT_WEBHOOK_NAME);
}

/// Unknown field in [label] is rejected.
#[test]
fn unknown_field_in_label_produces_error() {
    let toml = r#"
[label]
data_rot = "/data"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("data_rot"),
        "error should mention the unknown field, got: {err_str}"
    );
}

/// Unknown top-level section is rejected.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[logging]
level = "debug"
"#;

    let err = load_config_from_str(toml).expect_err("unknown section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("logging"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Unknown key produces a diagnostic with suggestion and valid keys.
#[test]
fn diagnostic_unknown_key_has_suggestion() {
    let toml = r#"
[discord]
bot_token = "abc"
webhok_name = "CD Archiver"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    let found = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "webhok_name"
                && suggestion.as_deref() == Some("webhook_name")
                && valid_keys.contains("bot_token")
        })
    });
    assert!(found, "expected UnknownKey for webhok_name, got: {errors:?}");
}

/// Wrong value type is reported as an invalid type.
#[test]
fn diagnostic_invalid_type() {
    let toml = r#"
[discord]
webhook_name = 42
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject invalid type");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { key, .. } if key.contains("webhook_name"))),
        "expected InvalidType, got: {errors:?}"
    );
}

/// A config without a bot token fails validation with the env var named.
#[test]
fn missing_token_is_required_error() {
    let errors = load_and_validate_str("").expect_err("token is required");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "DISCORD_BOT_TOKEN not set");
}

/// A complete config validates.
#[test]
fn load_and_validate_valid_toml() {
    let toml = r#"
[discord]
bot_token = "abc.def.ghi"
"#;

    let config = load_and_validate_str(toml).expect("valid TOML should validate");
    assert_eq!(config.discord.bot_token.as_deref(), Some("abc.def.ghi"));
}

/// ConfigError renders through miette's graphical handler.
#[test]
fn config_error_renders_with_miette() {
    use miette::{Diagnostic, GraphicalReportHandler};

    let error = ConfigError::UnknownKey {
        key: "data_rot".to_string(),
        suggestion: Some("data_root".to_string()),
        valid_keys: "data_root".to_string(),
        span: None,
        src: None,
    };

    assert!(error.code().is_some());
    let help = error.help().expect("should have help").to_string();
    assert!(help.contains("did you mean `data_root`"), "got: {help}");

    let mut buf = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut buf, &error)
        .expect("should render without error");
    assert!(buf.contains("data_rot"));
}

/// An explicit config file is read, merged with env, and validated.
#[test]
fn explicit_path_loads_and_validates() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
[label]
data_root = "/srv/discs"
"#,
        )?;
        jail.set_env("DISCORD_BOT_TOKEN", "from-env");

        let path = jail.directory().join("custom.toml");
        let config = disclabel_config::load_and_validate(Some(&path)).expect("should validate");
        assert_eq!(config.label.data_root, PathBuf::from("/srv/discs"));
        assert_eq!(config.discord.bot_token.as_deref(), Some("from-env"));
        Ok(())
    });
}

/// `load` skips validation, so a blank token is not an error there.
#[test]
fn load_without_token_skips_validation() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "debug = \"yes\"\n")?;
        jail.set_env("DISCORD_BOT_TOKEN", "  ");

        let path = jail.directory().join("custom.toml");
        let config = disclabel_config::load(Some(&path)).expect("should load");
        assert!(config.debug);
        assert!(config.discord.bot_token.as_deref().is_some_and(|t| t.trim().is_empty()));

        let errors = disclabel_config::load_and_validate(Some(&path)).expect_err("token required");
        assert!(errors.iter().any(|e| matches!(e, ConfigError::Required { .. })));
        Ok(())
    });
}
