// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`ChatConnector`] over the Discord HTTP API.

use async_trait::async_trait;
use disclabel_core::{ChatConnector, DiscLabelError, MessageRef, Reaction, ReferencedMessage};
use serenity::all::{Context, CreateMessage, ReactionType};

use crate::convert;

/// Connector bound to the serenity context of one gateway event.
pub struct SerenityConnector {
    ctx: Context,
}

impl SerenityConnector {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl ChatConnector for SerenityConnector {
    fn name(&self) -> &str {
        "discord"
    }

    async fn fetch_message(&self, target: &MessageRef) -> Result<ReferencedMessage, DiscLabelError> {
        let (channel_id, message_id) = convert::to_ids(target)?;
        let msg = channel_id
            .message(&self.ctx, message_id)
            .await
            .map_err(|e| DiscLabelError::channel(format!("failed to fetch message {message_id}"), e))?;
        Ok(convert::to_referenced(&msg))
    }

    async fn add_reaction(
        &self,
        target: &MessageRef,
        reaction: Reaction,
    ) -> Result<(), DiscLabelError> {
        let (channel_id, message_id) = convert::to_ids(target)?;
        channel_id
            .create_reaction(
                &self.ctx,
                message_id,
                ReactionType::Unicode(reaction.glyph().to_string()),
            )
            .await
            .map_err(|e| DiscLabelError::channel(format!("failed to add reaction {reaction}"), e))
    }

    async fn reply(&self, target: &MessageRef, text: &str) -> Result<(), DiscLabelError> {
        let (channel_id, message_id) = convert::to_ids(target)?;
        let builder = CreateMessage::new()
            .content(text)
            .reference_message((channel_id, message_id));
        channel_id
            .send_message(&self.ctx, builder)
            .await
            .map_err(|e| DiscLabelError::channel("failed to send reply", e))?;
        Ok(())
    }
}
