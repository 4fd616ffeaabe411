// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    env,
    path::{Component, Path, PathBuf},
};

use directories::BaseDirs;
use log::debug;

use crate::{
    error::{self, Result},
    metadata,
};

/// The parts of the process environment that key and config paths are
/// resolved against.
#[derive(Clone, Debug)]
pub(crate) struct Environment {
    home: PathBuf,
    cwd: PathBuf,
    ssh_dir: PathBuf,
}

impl Environment {
    pub(crate) fn new<H: Into<PathBuf>, C: Into<PathBuf>>(home: H, cwd: C) -> Self {
        let home = home.into();
        Self {
            ssh_dir: home.join(metadata::SSH_DIR),
            home,
            cwd: cwd.into(),
        }
    }

    pub(crate) fn from_process(ssh_dir: Option<PathBuf>) -> Result<Self> {
        let home = BaseDirs::new()
            .ok_or(error::Environment::HomeDirectory)?
            .home_dir()
            .to_owned();
        let cwd = env::current_dir().map_err(error::Environment::WorkingDirectory)?;

        let mut environment = Self::new(home, cwd);
        if let Some(dir) = ssh_dir {
            environment.ssh_dir = environment.absolutize(&dir);
        }
        debug!("Using SSH directory {}", environment.ssh_dir.display());
        Ok(environment)
    }

    pub(crate) fn ssh_dir(&self) -> &Path {
        &self.ssh_dir
    }

    pub(crate) fn config_path(&self) -> PathBuf {
        self.ssh_dir.join(metadata::CONFIG_FILE)
    }

    /// Expands a leading `~` to the home directory and makes anything else
    /// absolute with respect to the working directory. The result is cleaned
    /// lexically.
    pub(crate) fn expand_path(&self, path: &str) -> String {
        let expanded = match path.strip_prefix('~') {
            Some(rest) => clean(&self.home.join(rest.trim_start_matches(['/', '\\']))),
            None => self.absolutize(Path::new(path)),
        };
        expanded.to_string_lossy().into_owned()
    }

    /// Resolves a key argument to the path of its private key file.
    pub(crate) fn key_path(&self, key: &str) -> PathBuf {
        clean(&self.ssh_dir.join(key))
    }

    fn absolutize(&self, path: &Path) -> PathBuf {
        clean(&self.cwd.join(path))
    }
}

/// Removes `.` components, resolves `..` against the preceding component and
/// drops redundant separators without touching the filesystem. `..` at the
/// root stays at the root.
fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    _ = cleaned.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::CurDir | Component::ParentDir) | None => {
                    cleaned.push(component);
                }
            },
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                cleaned.push(component);
            }
        }
    }
    cleaned
}
