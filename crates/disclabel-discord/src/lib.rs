// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Discord adapter for disclabel.
//!
//! Connects to the Discord gateway via serenity, turns message events into
//! [`disclabel_core::InboundMessage`]s, and answers through a
//! [`disclabel_core::ChatConnector`] backed by the Discord HTTP API.

pub mod connector;
pub mod convert;
pub mod handler;

use std::sync::Arc;

use disclabel_config::DiscLabelConfig;
use disclabel_core::DiscLabelError;
use disclabel_labeler::ReplyHandler;
use serenity::Client;
use serenity::all::GatewayIntents;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

pub use connector::SerenityConnector;
pub use handler::LabelEventHandler;

/// Discord bot that labels replies to archiver notifications.
pub struct DiscordLabeler {
    token: String,
    replies: Arc<ReplyHandler>,
}

impl DiscordLabeler {
    /// Creates the bot from configuration.
    ///
    /// Requires `config.discord.bot_token` to be set and non-empty.
    pub fn new(config: &DiscLabelConfig) -> Result<Self, DiscLabelError> {
        let token = config
            .discord
            .bot_token
            .as_deref()
            .map(str::trim)
            .ok_or_else(|| DiscLabelError::Config("DISCORD_BOT_TOKEN not set".into()))?;

        if token.is_empty() {
            return Err(DiscLabelError::Config(
                "DISCORD_BOT_TOKEN cannot be empty".into(),
            ));
        }

        Ok(Self {
            token: token.to_string(),
            replies: Arc::new(ReplyHandler::from_config(config)),
        })
    }

    /// Gateway intents the bot needs: guild and DM messages with their content.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }

    /// Returns the reply handler shared by all events.
    pub fn reply_handler(&self) -> &Arc<ReplyHandler> {
        &self.replies
    }

    /// Connects to the gateway and handles events until `shutdown` fires or
    /// the client stops with an error.
    pub async fn run(self, shutdown: CancellationToken) -> Result<(), DiscLabelError> {
        let handler = LabelEventHandler::new(self.replies.clone());
        let mut client = Client::builder(&self.token, Self::intents())
            .event_handler(handler)
            .await
            .map_err(|e| DiscLabelError::channel("failed to build Discord client", e))?;

        let shard_manager = client.shard_manager.clone();
        tokio::spawn(async move {
            shutdown.cancelled().await;
            debug!("shutting down Discord shards");
            shard_manager.shutdown_all().await;
        });

        info!("connecting to Discord gateway");
        client
            .start()
            .await
            .map_err(|e| DiscLabelError::channel("Discord client stopped", e))
    }
}
