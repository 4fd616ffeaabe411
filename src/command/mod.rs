// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use crate::{config::Config, environment::Environment, error::Result, storage::Storage};

pub(crate) mod audit;
pub(crate) mod config;
pub(crate) mod delete;
pub(crate) mod generate;
pub(crate) mod list;
pub(crate) mod map;
pub(crate) mod unmap;
pub(crate) mod unused;

/// Everything a command needs from outside the process.
pub(crate) struct Context {
    pub(crate) env: Environment,
    pub(crate) storage: Box<dyn Storage>,
    pub(crate) keygen_program: PathBuf,
}

impl Context {
    pub(crate) fn load_config(&self) -> Result<Config> {
        Config::load(&self.storage, &self.env)
    }

    pub(crate) fn save_config(&mut self, config: &Config) -> Result<()> {
        config.save(&mut self.storage)
    }
}

pub(crate) trait Command {
    fn execute(self, ctx: &mut Context) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{fs, path::Path};

    use tempfile::TempDir;

    use super::Context;
    use crate::{environment::Environment, error::Result, storage};

    /// A context rooted in a temporary home directory with an empty `.ssh`.
    pub(crate) fn context() -> Result<(TempDir, Context)> {
        let home = TempDir::new()?;
        let env = Environment::new(home.path(), home.path());
        fs::create_dir_all(env.ssh_dir())?;
        let ctx = Context {
            storage: Box::new(storage::File::new(env.config_path())),
            env,
            keygen_program: "ssh-keygen".into(),
        };
        Ok((home, ctx))
    }

    pub(crate) fn write_key_pair(ssh_dir: &Path, name: &str, comment: &str) -> Result<()> {
        fs::write(ssh_dir.join(name), "private")?;
        fs::write(
            ssh_dir.join(format!("{name}.pub")),
            format!("ssh-ed25519 AAAA\nComment: {comment}\n"),
        )?;
        Ok(())
    }
}
