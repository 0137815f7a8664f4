// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for disclabel integration tests.
//!
//! Provides a mock connector and message fixtures for fast, deterministic,
//! CI-runnable tests without a Discord connection.
//!
//! # Components
//!
//! - [`MockConnector`] - Mock chat service with fetchable history and captured reactions/replies
//! - [`fixtures`] - Builders for archiver notifications and user replies

pub mod fixtures;
pub mod mock_connector;

pub use mock_connector::MockConnector;
