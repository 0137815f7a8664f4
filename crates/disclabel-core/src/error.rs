// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared by the disclabel crates.

use thiserror::Error;

/// The primary error type returned by connector operations and startup code.
#[derive(Debug, Error)]
pub enum DiscLabelError {
    /// Configuration errors (missing token, unusable data root).
    #[error("configuration error: {0}")]
    Config(String),

    /// Chat connector errors (fetch failure, rejected reaction, gateway failure).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl DiscLabelError {
    /// Builds a [`DiscLabelError::Channel`] wrapping an underlying error.
    pub fn channel<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Channel {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
