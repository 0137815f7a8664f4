// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for disclabel.
//!
//! This crate provides the error type, the message types, and the
//! [`ChatConnector`] trait that the reply handler and the Discord adapter
//! share.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::DiscLabelError;
pub use traits::ChatConnector;
pub use types::{Author, Embed, InboundMessage, MessageRef, Reaction, ReferencedMessage};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_variants_render() {
        let config = DiscLabelError::Config("DISCORD_BOT_TOKEN not set".into());
        assert_eq!(
            config.to_string(),
            "configuration error: DISCORD_BOT_TOKEN not set"
        );

        let channel = DiscLabelError::channel("fetch failed", std::io::Error::other("gone"));
        assert_eq!(channel.to_string(), "channel error: fetch failed");
        match channel {
            DiscLabelError::Channel { source, .. } => assert!(source.is_some()),
            other => panic!("expected Channel, got {other:?}"),
        }
    }

    #[test]
    fn reaction_glyphs() {
        use std::str::FromStr;

        assert_eq!(Reaction::Success.glyph(), "✅");
        assert_eq!(Reaction::Failure.glyph(), "❌");

        for reaction in [Reaction::Success, Reaction::Failure] {
            assert_eq!(reaction.to_string(), reaction.glyph());
            let parsed = Reaction::from_str(reaction.glyph()).expect("should parse back");
            assert_eq!(parsed, reaction);
        }
    }

    #[test]
    fn referenced_webhook_marker() {
        let mut referenced = ReferencedMessage {
            id: MessageRef::new("10", "19"),
            author_name: "CD Archiver".into(),
            webhook_id: None,
            content: String::new(),
            embeds: vec![],
        };
        assert!(!referenced.is_webhook());

        referenced.webhook_id = Some("555".into());
        assert!(referenced.is_webhook());
    }

    #[test]
    fn connector_trait_is_object_safe() {
        fn _assert_object(_: &dyn ChatConnector) {}
    }
}
