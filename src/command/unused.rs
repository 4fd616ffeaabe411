// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use tabled::{settings::Style, Table};

use crate::{audit, error::Result, keys};

use super::Context;

/// List the SSH keys that are not mapped to any host.
#[derive(Debug, Parser)]
pub(crate) struct Command {}

impl Command {
    fn render(&self, ctx: &Context) -> Result<String> {
        let keys = keys::sorted(keys::scan(ctx.env.ssh_dir())?);
        let config = ctx.load_config()?;

        let unused = audit::unused(&keys, &config);
        if unused.is_empty() {
            return Ok(String::new());
        }
        Ok(format!("{}\n", Table::new(unused).with(Style::rounded())))
    }
}

impl super::Command for Command {
    fn execute(self, ctx: &mut Context) -> Result<()> {
        print!("{}", self.render(ctx)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{command::testing, storage::Storage as _};

    #[test]
    fn only_unmapped_keys_are_listed() -> Result<()> {
        let (_home, mut ctx) = testing::context()?;
        testing::write_key_pair(ctx.env.ssh_dir(), "id_alpha", "mapped")?;
        testing::write_key_pair(ctx.env.ssh_dir(), "id_beta", "spare")?;
        ctx.storage.update("Host h
  IdentityFile ~/.ssh/id_alpha
")?;

        let output = Command {}.render(&ctx)?;
        assert!(output.contains("id_beta"));
        assert!(!output.contains("id_alpha"));
        Ok(())
    }

    #[test]
    fn nothing_is_listed_when_every_key_is_mapped() -> Result<()> {
        let (_home, mut ctx) = testing::context()?;
        testing::write_key_pair(ctx.env.ssh_dir(), "id_alpha", "mapped")?;
        ctx.storage.update("Host h
  IdentityFile ~/.ssh/id_alpha
")?;
        assert_eq!(Command {}.render(&ctx)?, "");
        Ok(())
    }
}
