// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions at the seam between disclabel and the chat service.
//!
//! Traits use `#[async_trait]` so they can be used as trait objects.

pub mod connector;

pub use connector::ChatConnector;
