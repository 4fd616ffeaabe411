// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;

use crate::error::{self, Result};

use super::Context;

/// Remove a mapping of an SSH key from a host in the SSH configuration.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The identity file to remove, either as written in the configuration or
    /// as a `~` or relative path that expands to it.
    #[clap()]
    key: String,

    /// The host to remove the key from.
    #[clap()]
    host: String,
}

impl super::Command for Command {
    fn execute(self, ctx: &mut Context) -> Result<()> {
        let mut config = ctx.load_config()?;
        if !config.unmap(&self.key, &self.host, &ctx.env) {
            return Err(error::UserInput::NotMapped {
                key: self.key,
                host: self.host,
            }
            .into());
        }
        ctx.save_config(&config)?;

        println!("Unmapped key {} from host {}", self.key, self.host);
        Ok(())
    }
}
