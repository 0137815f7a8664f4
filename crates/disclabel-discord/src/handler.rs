// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! serenity event handler that feeds gateway messages to the reply handler.

use std::sync::{Arc, OnceLock};

use disclabel_labeler::{Outcome, ReplyHandler};
use serenity::all::{Context, EventHandler, Message, Ready, UserId};
use serenity::async_trait;
use tracing::{debug, info};

use crate::connector::SerenityConnector;
use crate::convert;

/// Handler for Discord gateway events.
pub struct LabelEventHandler {
    replies: Arc<ReplyHandler>,
    own_id: OnceLock<UserId>,
}

impl LabelEventHandler {
    pub fn new(replies: Arc<ReplyHandler>) -> Self {
        Self {
            replies,
            own_id: OnceLock::new(),
        }
    }

    /// The bot's user id, known after the `ready` event.
    pub fn own_id(&self) -> Option<UserId> {
        self.own_id.get().copied()
    }
}

#[async_trait]
impl EventHandler for LabelEventHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        let _ = self.own_id.set(ready.user.id);
        info!(
            bot_name = %ready.user.name,
            guilds = ready.guilds.len(),
            "bot ready"
        );
        info!(data_root = %self.replies.data_root().display(), "labeling under data root");
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let inbound = convert::to_inbound(&msg, self.own_id());
        let connector = SerenityConnector::new(ctx);

        match self.replies.handle(&connector, &inbound).await {
            Outcome::Ignored(reason) => debug!(reason = ?reason, "message ignored"),
            Outcome::Labeled { token, .. } => debug!(path = %token, "reply labeled"),
            Outcome::Failed(failure) => debug!(error = %failure, "reply rejected"),
        }
    }
}
