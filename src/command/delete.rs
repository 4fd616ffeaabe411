// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{fs, path::PathBuf};

use clap::Parser;
use log::info;

use crate::{error::Result, metadata};

use super::Context;

/// Delete an SSH key pair and remove it from any mappings in the SSH
/// configuration.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The private key file, either an absolute path or a name in the SSH
    /// directory.
    #[clap()]
    key: String,
}

impl super::Command for Command {
    fn execute(self, ctx: &mut Context) -> Result<()> {
        let private = ctx.env.key_path(&self.key);
        let mut public = private.clone().into_os_string();
        public.push(metadata::PUBLIC_KEY_EXTENSION);
        let public = PathBuf::from(public);

        // Both halves must exist. A failure removing the public key leaves the
        // private key already deleted.
        fs::remove_file(&private)?;
        fs::remove_file(&public)?;

        let mut config = ctx.load_config()?;
        for host in config.forget(&private.to_string_lossy()) {
            info!("Removed {} from host {}", private.display(), host);
        }
        ctx.save_config(&config)?;

        println!("Deleted key {}", self.key);
        Ok(())
    }
}
