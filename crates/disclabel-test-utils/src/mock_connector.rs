// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock chat connector for deterministic testing.
//!
//! `MockConnector` implements `ChatConnector` with a preloaded message
//! history and captured reactions and replies for assertion in tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use disclabel_core::{ChatConnector, DiscLabelError, MessageRef, Reaction, ReferencedMessage};

/// A mock chat service for testing.
///
/// - **history**: messages added via `insert_message()` are returned by
///   `fetch_message()`; unknown ids fail like a deleted message would
/// - **reactions** / **replies**: everything the handler sends is captured
pub struct MockConnector {
    history: Mutex<HashMap<MessageRef, ReferencedMessage>>,
    reactions: Mutex<Vec<(MessageRef, Reaction)>>,
    replies: Mutex<Vec<(MessageRef, String)>>,
    fetches: AtomicUsize,
    fail_reactions: AtomicBool,
    fail_replies: AtomicBool,
}

impl MockConnector {
    /// Create a new mock connector with empty history.
    pub fn new() -> Self {
        Self {
            history: Mutex::new(HashMap::new()),
            reactions: Mutex::new(Vec::new()),
            replies: Mutex::new(Vec::new()),
            fetches: AtomicUsize::new(0),
            fail_reactions: AtomicBool::new(false),
            fail_replies: AtomicBool::new(false),
        }
    }

    /// Make a message fetchable by its id.
    pub async fn insert_message(&self, msg: ReferencedMessage) {
        self.history.lock().await.insert(msg.id.clone(), msg);
    }

    /// All reactions added, in order.
    pub async fn reactions(&self) -> Vec<(MessageRef, Reaction)> {
        self.reactions.lock().await.clone()
    }

    /// All replies sent, in order.
    pub async fn replies(&self) -> Vec<(MessageRef, String)> {
        self.replies.lock().await.clone()
    }

    /// Number of `fetch_message` calls made.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Make subsequent `add_reaction` calls fail.
    pub fn fail_reactions(&self, fail: bool) {
        self.fail_reactions.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent `reply` calls fail.
    pub fn fail_replies(&self, fail: bool) {
        self.fail_replies.store(fail, Ordering::SeqCst);
    }

    /// Clear captured reactions and replies.
    pub async fn clear_sent(&self) {
        self.reactions.lock().await.clear();
        self.replies.lock().await.clear();
    }
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

fn rejected(what: &str) -> DiscLabelError {
    DiscLabelError::Channel {
        message: format!("mock connector rejected {what}"),
        source: None,
    }
}

#[async_trait]
impl ChatConnector for MockConnector {
    fn name(&self) -> &str {
        "mock-connector"
    }

    async fn fetch_message(&self, target: &MessageRef) -> Result<ReferencedMessage, DiscLabelError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.history
            .lock()
            .await
            .get(target)
            .cloned()
            .ok_or_else(|| DiscLabelError::Channel {
                message: format!("Unknown Message {}", target.message_id),
                source: None,
            })
    }

    async fn add_reaction(
        &self,
        target: &MessageRef,
        reaction: Reaction,
    ) -> Result<(), DiscLabelError> {
        if self.fail_reactions.load(Ordering::SeqCst) {
            return Err(rejected("reaction"));
        }
        self.reactions.lock().await.push((target.clone(), reaction));
        Ok(())
    }

    async fn reply(&self, target: &MessageRef, text: &str) -> Result<(), DiscLabelError> {
        if self.fail_replies.load(Ordering::SeqCst) {
            return Err(rejected("reply"));
        }
        self.replies
            .lock()
            .await
            .push((target.clone(), text.to_string()));
        Ok(())
    }
}
