// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Connector trait for the chat service the handler runs against (Discord, mocks).

use async_trait::async_trait;

use crate::error::DiscLabelError;
use crate::types::{MessageRef, Reaction, ReferencedMessage};

/// Outbound primitives the reply handler needs from a chat service.
///
/// Implementations wrap a chat client library. Every method may fail; the
/// handler decides per call whether a failure is silent or user-visible.
#[async_trait]
pub trait ChatConnector: Send + Sync {
    /// Returns the human-readable name of this connector.
    fn name(&self) -> &str;

    /// Fetches a message by id from its channel history.
    async fn fetch_message(&self, target: &MessageRef) -> Result<ReferencedMessage, DiscLabelError>;

    /// Adds a reaction to a message.
    async fn add_reaction(&self, target: &MessageRef, reaction: Reaction)
    -> Result<(), DiscLabelError>;

    /// Sends a text reply referencing a message.
    async fn reply(&self, target: &MessageRef, text: &str) -> Result<(), DiscLabelError>;
}
