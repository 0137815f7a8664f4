// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Path extraction from archiver notifications.
//!
//! Notifications carry the disc directory as `**Path:** <token>`, either in
//! the message body or in the first embed's description. Older notifications
//! only carry it as the embed footer text.

use std::sync::LazyLock;

use disclabel_core::Embed;
use regex::Regex;

static PATH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Path:\*\*\s+(\S+)").expect("path pattern is valid"));

/// Where in the notification a path token was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    Content,
    EmbedDescription,
    EmbedFooter,
}

/// Finds the first `**Path:** <token>` in `text`.
pub fn match_path(text: &str) -> Option<&str> {
    PATH_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extracts the path token from a notification's content and embeds.
///
/// Priority: a `**Path:**` match in `content`, then in the first embed's
/// description, then the first embed's trimmed footer text taken verbatim.
pub fn extract_path(content: &str, embeds: &[Embed]) -> Option<String> {
    extract_path_with_source(content, embeds).map(|(token, _)| token)
}

/// Like [`extract_path`], also reporting which field the token came from.
pub fn extract_path_with_source(content: &str, embeds: &[Embed]) -> Option<(String, PathSource)> {
    if let Some(token) = match_path(content) {
        return Some((token.to_string(), PathSource::Content));
    }

    let embed = embeds.first()?;

    if let Some(token) = embed.description.as_deref().and_then(match_path) {
        return Some((token.to_string(), PathSource::EmbedDescription));
    }

    embed
        .footer
        .as_deref()
        .map(str::trim)
        .filter(|footer| !footer.is_empty())
        .map(|footer| (footer.to_string(), PathSource::EmbedFooter))
}
