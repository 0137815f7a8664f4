// SPDX-FileCopyrightText: 2026 Disclabel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Target directory resolution and label file writes.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::LabelFailure;

/// Name of the file written into each labeled directory.
pub const LABEL_FILE_NAME: &str = "label.txt";

/// Joins `token` onto `root`.
///
/// Returns `None` for tokens that could leave `root`: absolute paths,
/// parent-directory components, or prefixes. A `..` that would stay inside
/// `root` (`disc/../disc2`) is rejected too.
pub fn join_under_root(root: &Path, token: &str) -> Option<PathBuf> {
    let relative = Path::new(token);
    let contained = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    contained.then(|| root.join(relative))
}

/// Resolves `token` under `root` and checks that it is an existing directory.
pub async fn target_dir(root: &Path, token: &str) -> Result<PathBuf, LabelFailure> {
    let missing = || LabelFailure::DirectoryMissing {
        token: token.to_string(),
    };

    let dir = join_under_root(root, token).ok_or_else(missing)?;
    debug!(full_path = %dir.display(), "resolved target directory");

    match tokio::fs::metadata(&dir).await {
        Ok(meta) if meta.is_dir() => Ok(dir),
        Ok(_) => {
            debug!(full_path = %dir.display(), "target exists but is not a directory");
            Err(missing())
        }
        Err(e) => {
            debug!(full_path = %dir.display(), error = %e, "target directory does not exist");
            Err(missing())
        }
    }
}

/// Writes the trimmed `text` to `<dir>/label.txt`, replacing any existing file.
///
/// Returns the path written.
pub async fn write_label(dir: &Path, text: &str) -> Result<PathBuf, LabelFailure> {
    let path = dir.join(LABEL_FILE_NAME);
    match tokio::fs::write(&path, text.trim()).await {
        Ok(()) => Ok(path),
        Err(source) => Err(LabelFailure::WriteFailed { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_keeps_relative_tokens() {
        let root = Path::new("/data");
        assert_eq!(
            join_under_root(root, "abc123_DISC"),
            Some(PathBuf::from("/data/abc123_DISC"))
        );
        assert_eq!(
            join_under_root(root, "2024/box-3/disc_1"),
            Some(PathBuf::from("/data/2024/box-3/disc_1"))
        );
        assert_eq!(
            join_under_root(root, "./disc"),
            Some(PathBuf::from("/data/./disc"))
        );
    }

    #[test]
    fn join_rejects_escapes() {
        let root = Path::new("/data");
        assert_eq!(join_under_root(root, "/etc"), None);
        assert_eq!(join_under_root(root, "../etc"), None);
        assert_eq!(join_under_root(root, "disc/../../etc"), None);
        assert_eq!(join_under_root(root, "disc/../disc2"), None);
    }

    #[tokio::test]
    async fn target_dir_requires_existing_directory() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("abc123_DISC")).unwrap();
        std::fs::write(root.path().join("plain-file"), "x").unwrap();

        let dir = target_dir(root.path(), "abc123_DISC").await.unwrap();
        assert_eq!(dir, root.path().join("abc123_DISC"));

        for token in ["missing", "plain-file", "../outside"] {
            match target_dir(root.path(), token).await {
                Err(LabelFailure::DirectoryMissing { token: t }) => assert_eq!(t, token),
                other => panic!("expected DirectoryMissing for {token}, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn write_label_trims_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();

        let path = write_label(dir.path(), "  first label \n").await.unwrap();
        assert_eq!(path, dir.path().join(LABEL_FILE_NAME));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first label");

        write_label(dir.path(), "second").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[tokio::test]
    async fn write_label_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(LABEL_FILE_NAME)).unwrap();

        let err = write_label(dir.path(), "label").await.unwrap_err();
        assert!(matches!(err, LabelFailure::WriteFailed { .. }));
        assert!(err.to_string().starts_with("Failed to write label: "));
    }
}
