// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion between serenity models and the platform-agnostic core types.

use disclabel_core::{Author, DiscLabelError, Embed, InboundMessage, MessageRef, ReferencedMessage};
use serenity::all::{ChannelId, Message, MessageId, UserId};

/// Converts a gateway message into an [`InboundMessage`].
///
/// `own_id` is the bot's user id once known; messages it authored are
/// flagged `from_self`. The replied-to message is looked up in the channel
/// the reply was posted in; a reference without a message id (e.g. a channel
/// follow notice) is treated as no reference.
pub fn to_inbound(msg: &Message, own_id: Option<UserId>) -> InboundMessage {
    let reference = msg
        .message_reference
        .as_ref()
        .and_then(|r| r.message_id)
        .map(|message_id| MessageRef::new(msg.channel_id.to_string(), message_id.to_string()));

    InboundMessage {
        id: MessageRef::new(msg.channel_id.to_string(), msg.id.to_string()),
        author: Author {
            id: msg.author.id.to_string(),
            name: msg.author.name.clone(),
        },
        from_self: own_id.is_some_and(|id| id == msg.author.id),
        content: msg.content.clone(),
        reference,
    }
}

/// Converts a fetched message into a [`ReferencedMessage`].
pub fn to_referenced(msg: &Message) -> ReferencedMessage {
    ReferencedMessage {
        id: MessageRef::new(msg.channel_id.to_string(), msg.id.to_string()),
        author_name: msg.author.name.clone(),
        webhook_id: msg.webhook_id.map(|id| id.to_string()),
        content: msg.content.clone(),
        embeds: msg
            .embeds
            .iter()
            .map(|embed| Embed {
                description: embed.description.clone(),
                footer: embed.footer.as_ref().map(|f| f.text.clone()),
            })
            .collect(),
    }
}

/// Parses a Discord snowflake. Zero is rejected since serenity ids are non-zero.
pub fn parse_snowflake(kind: &str, value: &str) -> Result<u64, DiscLabelError> {
    match value.parse::<u64>() {
        Ok(0) => Err(DiscLabelError::Channel {
            message: format!("invalid {kind} id: 0"),
            source: None,
        }),
        Ok(id) => Ok(id),
        Err(e) => Err(DiscLabelError::channel(format!("invalid {kind} id `{value}`"), e)),
    }
}

/// Resolves a [`MessageRef`] into serenity ids.
pub fn to_ids(target: &MessageRef) -> Result<(ChannelId, MessageId), DiscLabelError> {
    let channel = parse_snowflake("channel", &target.channel_id)?;
    let message = parse_snowflake("message", &target.message_id)?;
    Ok((ChannelId::new(channel), MessageId::new(message)))
}
