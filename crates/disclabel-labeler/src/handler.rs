// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The reply handler: decides whether an inbound message is a reply to an
//! archiver notification and, if so, writes its text as the disc label.
//!
//! Checks run in order and stop at the first that fails. Everything before
//! path extraction is a silent no-op; everything after it is reported back
//! to the user with a reaction and, on failure, a reply.

use std::path::PathBuf;

use disclabel_config::DiscLabelConfig;
use disclabel_core::{ChatConnector, InboundMessage, MessageRef, Reaction};
use tracing::{debug, error, info, warn};

use crate::error::LabelFailure;
use crate::extract::extract_path_with_source;
use crate::label;

/// Why a message was ignored without any user-visible signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Posted by the bot itself.
    OwnMessage,
    NotAReply,
    /// The replied-to message could not be fetched.
    FetchFailed,
    /// The replied-to message was not posted by a webhook.
    NotWebhook,
    /// Posted by a webhook under a different name.
    WrongWebhook { author: String },
}

/// Result of handling one inbound message.
#[derive(Debug)]
pub enum Outcome {
    Ignored(IgnoreReason),
    /// `label.txt` was written.
    Labeled { token: String, path: PathBuf },
    /// A failure was reported to the user.
    Failed(LabelFailure),
}

impl Outcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored(_))
    }
}

/// Handles replies to archiver notifications.
///
/// Holds only read-only settings, so one instance can serve every event.
#[derive(Debug, Clone)]
pub struct ReplyHandler {
    data_root: PathBuf,
    webhook_name: String,
}

impl ReplyHandler {
    pub fn new(data_root: impl Into<PathBuf>, webhook_name: impl Into<String>) -> Self {
        Self {
            data_root: data_root.into(),
            webhook_name: webhook_name.into(),
        }
    }

    pub fn from_config(config: &DiscLabelConfig) -> Self {
        Self::new(
            config.label.data_root.clone(),
            config.discord.webhook_name.clone(),
        )
    }

    pub fn data_root(&self) -> &std::path::Path {
        &self.data_root
    }

    /// Runs the decision sequence for one inbound message.
    ///
    /// Never returns an error: connector and filesystem failures are either
    /// ignored silently or turned into a failure reaction plus reply.
    pub async fn handle(&self, connector: &dyn ChatConnector, msg: &InboundMessage) -> Outcome {
        debug!(
            author = %msg.author.name,
            content = preview(&msg.content, 50),
            "message received"
        );

        if msg.from_self {
            debug!("ignoring own message");
            return Outcome::Ignored(IgnoreReason::OwnMessage);
        }

        let Some(reference) = msg.reference.as_ref() else {
            debug!("not a reply, ignoring");
            return Outcome::Ignored(IgnoreReason::NotAReply);
        };
        debug!(message_id = %reference.message_id, "reply detected");

        let notification = match connector.fetch_message(reference).await {
            Ok(notification) => notification,
            Err(e) => {
                debug!(error = %e, "failed to fetch replied-to message");
                return Outcome::Ignored(IgnoreReason::FetchFailed);
            }
        };
        debug!(
            author = %notification.author_name,
            webhook_id = ?notification.webhook_id,
            "fetched replied-to message"
        );

        if !notification.is_webhook() {
            debug!("replied-to message is not from a webhook, ignoring");
            return Outcome::Ignored(IgnoreReason::NotWebhook);
        }

        if notification.author_name != self.webhook_name {
            debug!(
                author = %notification.author_name,
                "replied-to message is from another webhook, ignoring"
            );
            return Outcome::Ignored(IgnoreReason::WrongWebhook {
                author: notification.author_name,
            });
        }

        debug!(
            content = preview(&notification.content, 100),
            embeds = notification.embeds.len(),
            "processing reply to archiver notification"
        );

        let Some((token, source)) =
            extract_path_with_source(&notification.content, &notification.embeds)
        else {
            debug!("path not found in notification");
            return self.fail(connector, &msg.id, LabelFailure::PathNotFound).await;
        };
        debug!(path = %token, source = ?source, "extracted path");

        let dir = match label::target_dir(&self.data_root, &token).await {
            Ok(dir) => dir,
            Err(failure) => return self.fail(connector, &msg.id, failure).await,
        };
        debug!("directory exists, writing label");

        match label::write_label(&dir, &msg.content).await {
            Ok(path) => {
                react(connector, &msg.id, Reaction::Success).await;
                info!(path = %path.display(), label = msg.content.trim(), "wrote label");
                Outcome::Labeled { token, path }
            }
            Err(failure) => {
                error!(error = %failure, "label write failed");
                self.fail(connector, &msg.id, failure).await
            }
        }
    }

    /// Reports a failure: failure reaction, then a reply with the failure text.
    async fn fail(
        &self,
        connector: &dyn ChatConnector,
        target: &MessageRef,
        failure: LabelFailure,
    ) -> Outcome {
        react(connector, target, Reaction::Failure).await;
        if let Err(e) = connector.reply(target, &failure.to_string()).await {
            warn!(connector = connector.name(), error = %e, "failed to send reply");
        }
        Outcome::Failed(failure)
    }
}

async fn react(connector: &dyn ChatConnector, target: &MessageRef, reaction: Reaction) {
    if let Err(e) = connector.add_reaction(target, reaction).await {
        warn!(
            connector = connector.name(),
            reaction = %reaction,
            error = %e,
            "failed to add reaction"
        );
    }
}

/// The first `max` characters of `text`.
fn preview(text: &str, max: usize) -> &str {
    text.char_indices()
        .nth(max)
        .map_or(text, |(end, _)| &text[..end])
}
