// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Labels archived discs from chat replies.
//!
//! When a user replies to a `CD Archiver` webhook notification, the
//! [`ReplyHandler`] pulls the disc directory out of the notification and
//! writes the reply text to `label.txt` inside it. The handler talks to the
//! chat service only through [`disclabel_core::ChatConnector`], so it runs the
//! same against Discord and against the test mock.

pub mod error;
pub mod extract;
pub mod handler;
pub mod label;

pub use error::LabelFailure;
pub use extract::{PathSource, extract_path};
pub use handler::{IgnoreReason, Outcome, ReplyHandler};
pub use label::LABEL_FILE_NAME;
