// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::PathBuf;

use thiserror::Error;

/// A user-visible failure. The `Display` text is the reply sent to the user.
#[derive(Debug, Error)]
pub enum LabelFailure {
    /// No path token in content, embed description, or embed footer.
    #[error("Couldn't find path in notification")]
    PathNotFound,

    /// `<root>/<token>` is not an existing directory.
    #[error("Directory not found: {token}")]
    DirectoryMissing { token: String },

    /// Writing `label.txt` failed.
    #[error("Failed to write label: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
