// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message builders for handler tests.

use disclabel_core::{Author, Embed, InboundMessage, MessageRef, ReferencedMessage};

/// Channel every fixture message lives in.
pub const CHANNEL_ID: &str = "700000000000000001";

/// Id of the notification built by [`notification`].
pub const NOTIFICATION_ID: &str = "800000000000000001";

/// Author name the archiver webhook posts as.
pub const ARCHIVER_NAME: &str = "CD Archiver";

/// A webhook notification from the archiver with the given content.
pub fn notification(content: &str) -> ReferencedMessage {
    ReferencedMessage {
        id: MessageRef::new(CHANNEL_ID, NOTIFICATION_ID),
        author_name: ARCHIVER_NAME.to_string(),
        webhook_id: Some("900000000000000001".to_string()),
        content: content.to_string(),
        embeds: Vec::new(),
    }
}

/// An archiver notification whose only payload is one embed.
pub fn embed_notification(description: Option<&str>, footer: Option<&str>) -> ReferencedMessage {
    let mut msg = notification("");
    msg.embeds.push(Embed {
        description: description.map(str::to_string),
        footer: footer.map(str::to_string),
    });
    msg
}

/// A message from a human user replying to `target`.
pub fn reply_to(target: &ReferencedMessage, text: &str) -> InboundMessage {
    InboundMessage {
        id: MessageRef::new(target.id.channel_id.clone(), "800000000000000002"),
        author: Author {
            id: "600000000000000001".to_string(),
            name: "alice".to_string(),
        },
        from_self: false,
        content: text.to_string(),
        reference: Some(target.id.clone()),
    }
}

/// A message that is not a reply.
pub fn plain_message(text: &str) -> InboundMessage {
    InboundMessage {
        id: MessageRef::new(CHANNEL_ID, "800000000000000003"),
        author: Author {
            id: "600000000000000001".to_string(),
            name: "alice".to_string(),
        },
        from_self: false,
        content: text.to_string(),
        reference: None,
    }
}
