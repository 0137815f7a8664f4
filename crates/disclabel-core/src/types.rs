// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform-agnostic message types exchanged between a chat connector and
//! the reply handler.

use strum::{Display, EnumString};

/// Locates a single message: the channel it lives in and its id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageRef {
    pub channel_id: String,
    pub message_id: String,
}

impl MessageRef {
    pub fn new(channel_id: impl Into<String>, message_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            message_id: message_id.into(),
        }
    }
}

/// The account that posted an inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub name: String,
}

/// A message delivered by the connector for handling.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    /// Where this message lives; reactions and replies target it.
    pub id: MessageRef,
    pub author: Author,
    /// `true` when the author is the bot account itself.
    pub from_self: bool,
    /// Raw text content, untrimmed.
    pub content: String,
    /// The message this one replies to, if any.
    pub reference: Option<MessageRef>,
}

/// A rich-content block attached to a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Embed {
    pub description: Option<String>,
    /// Footer text, if the embed has a footer.
    pub footer: Option<String>,
}

/// A message fetched by id because an inbound message replied to it.
#[derive(Debug, Clone)]
pub struct ReferencedMessage {
    pub id: MessageRef,
    /// Display name of the author. For webhook posts this is the webhook name.
    pub author_name: String,
    /// Set when the message was posted by a webhook.
    pub webhook_id: Option<String>,
    pub content: String,
    pub embeds: Vec<Embed>,
}

impl ReferencedMessage {
    pub fn is_webhook(&self) -> bool {
        self.webhook_id.is_some()
    }
}

/// Outcome marker attached to an inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Reaction {
    #[strum(serialize = "✅")]
    Success,
    #[strum(serialize = "❌")]
    Failure,
}

impl Reaction {
    /// The unicode glyph sent to the chat service.
    pub fn glyph(self) -> &'static str {
        match self {
            Reaction::Success => "✅",
            Reaction::Failure => "❌",
        }
    }
}
