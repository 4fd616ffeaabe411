// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local, SecondsFormat};
use log::debug;
use tabled::Tabled;

use crate::{error::Result, metadata};

/// A key pair found in the SSH directory, identified by its public key file.
#[derive(Clone, Debug, Tabled)]
pub(crate) struct Key {
    #[tabled(rename = "Key")]
    pub(crate) name: String,
    #[tabled(skip)]
    pub(crate) path: PathBuf,
    /// Last modification of the public key file, used as the creation time.
    #[tabled(rename = "Created", display_with = "format_time")]
    pub(crate) modified: DateTime<Local>,
    #[tabled(rename = "Comment", display_with = "format_comment")]
    pub(crate) comment: Option<String>,
}

pub(crate) fn format_time(time: &DateTime<Local>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub(crate) fn format_comment(comment: &Option<String>) -> String {
    comment.clone().unwrap_or_default()
}

/// Lists the public keys in `dir` in directory order.
pub(crate) fn scan(dir: &Path) -> Result<Vec<Key>> {
    let mut keys = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name
            .to_str()
            .and_then(|name| name.strip_suffix(metadata::PUBLIC_KEY_EXTENSION))
        else {
            continue;
        };

        let path = entry.path();
        let file_metadata = fs::metadata(&path)?;
        if !file_metadata.is_file() {
            continue;
        }

        let comment = comment_of(&String::from_utf8_lossy(&fs::read(&path)?));
        debug!("Found public key {}", path.display());
        keys.push(Key {
            name: name.to_owned(),
            modified: file_metadata.modified()?.into(),
            comment,
            path,
        });
    }
    Ok(keys)
}

/// Sorts keys by name for display.
pub(crate) fn sorted(mut keys: Vec<Key>) -> Vec<Key> {
    keys.sort_by(|a, b| a.name.cmp(&b.name));
    keys
}

pub(crate) fn comment_of(text: &str) -> Option<String> {
    text.lines()
        .find_map(|line| line.strip_prefix(metadata::COMMENT_PREFIX))
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn comment_line_is_found() {
        let text = "---- BEGIN SSH2 PUBLIC KEY ----\nComment: work laptop\nComment: second\nAAAA\n";
        assert_eq!(comment_of(text).as_deref(), Some("work laptop"));
    }

    #[test]
    fn comment_prefix_must_match_exactly() {
        assert_eq!(comment_of("ssh-ed25519 AAAA user@host\n  Comment: indented\n"), None);
    }

    #[test]
    fn scan_finds_public_keys_only() -> Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("id_a"), "private")?;
        fs::write(dir.path().join("id_a.pub"), "ssh-ed25519 AAAA\nComment: alpha\n")?;
        fs::write(dir.path().join("id_b.pub"), "ssh-rsa AAAA\n")?;
        fs::write(dir.path().join("config"), "Host a\n")?;
        fs::create_dir(dir.path().join("nested.pub"))?;

        let keys = sorted(scan(dir.path())?);
        let summary = keys
            .iter()
            .map(|key| (key.name.as_str(), key.comment.as_deref()))
            .collect::<Vec<_>>();
        assert_eq!(summary, vec![("id_a", Some("alpha")), ("id_b", None)]);
        assert_eq!(keys[0].path, dir.path().join("id_a.pub"));
        Ok(())
    }

    #[test]
    fn scan_tolerates_binary_public_keys() -> Result<()> {
        let dir = TempDir::new()?;
        let mut contents = b"\xff\xfe not text\n".to_vec();
        contents.extend_from_slice(b"Comment: still found\n");
        fs::write(dir.path().join("id_odd.pub"), contents)?;

        let keys = scan(dir.path())?;
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].comment.as_deref(), Some("still found"));
        Ok(())
    }

    #[test]
    fn scan_of_missing_directory_fails() {
        assert!(scan(Path::new("/nonexistent/sshkeymanager/.ssh")).is_err());
    }
}
