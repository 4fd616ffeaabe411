// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    ffi::OsStr,
    fmt,
    path::{Path, PathBuf},
    process,
};

use chrono::Utc;
use clap::ValueEnum;
use inflector::Inflector as _;
use log::{debug, info};

use crate::{
    error::{self, Result},
    metadata,
    prompt::Prompt,
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum KeyType {
    #[default]
    Ed25519,
    Rsa,
    Ecdsa,
    Dsa,
}

impl KeyType {
    const MENU: [(Self, &'static str); 4] = [
        (Self::Ed25519, "best"),
        (Self::Rsa, "better"),
        (Self::Ecdsa, "good"),
        (Self::Dsa, "bad"),
    ];

    /// The algorithm name understood by the key generation program.
    pub(crate) const fn algorithm(self) -> &'static str {
        match self {
            Self::Ed25519 => "ed25519",
            Self::Rsa => "rsa",
            Self::Ecdsa => "ecdsa",
            Self::Dsa => "dsa",
        }
    }

    fn menu() -> Vec<String> {
        Self::MENU
            .iter()
            .map(|(key_type, rating)| format!("{} ({rating})", key_type.algorithm()))
            .collect()
    }

    fn from_menu_index(index: usize) -> Self {
        Self::MENU
            .get(index)
            .map_or_else(Self::default, |(key_type, _)| *key_type)
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.algorithm().to_title_case())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Request {
    pub(crate) key_type: KeyType,
    pub(crate) name: String,
    pub(crate) comment: String,
}

impl Request {
    pub(crate) fn default_name() -> String {
        format!("id_ed25519_{}", Utc::now().timestamp())
    }

    /// Asks for whatever was not already decided on the command line.
    pub(crate) fn interactive(
        prompt: &mut impl Prompt,
        key_type: Option<KeyType>,
        name: Option<String>,
        comment: Option<String>,
    ) -> Result<Self> {
        prompt.say(&format!(
            "Let's generate a new SSH key with {}.",
            *metadata::PROGRAM_DISPLAY_NAME
        ))?;
        prompt.say("You will be asked for some information to help configure the key.")?;

        let key_type = match key_type {
            Some(key_type) => key_type,
            None => KeyType::from_menu_index(prompt.select(
                "Choose a key type:",
                &KeyType::menu(),
                0,
            )?),
        };

        let name = match name {
            Some(name) => name,
            None => {
                let default = Self::default_name();
                Some(prompt.text("Key name:", Some(&default))?)
                    .filter(|name| !name.is_empty())
                    .unwrap_or(default)
            }
        };

        let comment = match comment {
            Some(comment) => comment,
            None => prompt.text("Comment:", None)?,
        };

        Ok(Self {
            key_type,
            name,
            comment,
        })
    }

    pub(crate) fn key_path(&self, ssh_dir: &Path) -> PathBuf {
        ssh_dir.join(&self.name)
    }

    /// Builds the key generation command. Its standard streams are inherited
    /// so it can ask for a passphrase itself.
    pub(crate) fn command<S: AsRef<OsStr>>(
        &self,
        program: S,
        rounds: u32,
        ssh_dir: &Path,
    ) -> process::Command {
        let mut command = process::Command::new(program);
        _ = command
            .arg("-o")
            .arg("-a")
            .arg(rounds.to_string())
            .arg("-t")
            .arg(self.key_type.algorithm())
            .arg("-f")
            .arg(self.key_path(ssh_dir))
            .arg("-C")
            .arg(&self.comment)
            .stdin(process::Stdio::inherit())
            .stdout(process::Stdio::inherit())
            .stderr(process::Stdio::inherit());
        command
    }

    pub(crate) fn run<S: AsRef<OsStr>>(&self, program: S, rounds: u32, ssh_dir: &Path) -> Result<()> {
        let mut command = self.command(program, rounds, ssh_dir);
        debug!(
            "Running {} for {}",
            Path::new(command.get_program()).display(),
            self.key_path(ssh_dir).display()
        );
        let status = command.status()?;
        if !status.success() {
            return Err(error::Error::KeyGen(status));
        }
        info!("Generated {} key {}", self.key_type, self.name);
        Ok(())
    }
}
