// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use log::info;

use crate::error::Result;

use super::Context;

/// Map an SSH key to a host in the SSH configuration. A host can only have
/// one key mapped at a time.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The identity file to use for the host, stored as given.
    #[clap()]
    key: String,

    /// The host to map the key to.
    #[clap()]
    host: String,
}

impl super::Command for Command {
    fn execute(self, ctx: &mut Context) -> Result<()> {
        let mut config = ctx.load_config()?;
        config.map(&self.key, &self.host)?;
        ctx.save_config(&config)?;

        info!("Host {} now uses {}", self.host, self.key);
        println!("Mapped key {} to host {}", self.key, self.host);
        Ok(())
    }
}
