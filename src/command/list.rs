// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use tabled::{settings::Style, Table};

use crate::{error::Result, keys};

use super::Context;

/// List the SSH keys in the SSH directory, with their creation dates and
/// comments.
#[derive(Debug, Parser)]
pub(crate) struct Command {}

impl Command {
    fn render(&self, ctx: &Context) -> Result<String> {
        let keys = keys::sorted(keys::scan(ctx.env.ssh_dir())?);
        if keys.is_empty() {
            return Ok(String::new());
        }
        Ok(format!("{}\n", Table::new(keys).with(Style::rounded())))
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
    use crate::command::testing;

    #[test]
    fn lists_keys_sorted_with_comments() -> Result<()> {
        let (_home, ctx) = testing::context()?;
        testing::write_key_pair(ctx.env.ssh_dir(), "id_zulu", "last one")?;
        testing::write_key_pair(ctx.env.ssh_dir(), "id_alpha", "first one")?;

        let output = Command {}.render(&ctx)?;
        let alpha = output.find("id_alpha");
        let zulu = output.find("id_zulu");
        assert!(alpha.is_some() && zulu.is_some() && alpha < zulu);
        assert!(output.contains("first one"));
        assert!(output.contains("last one"));
        Ok(())
    }

    #[test]
    fn empty_directory_lists_nothing() -> Result<()> {
        let (_home, ctx) = testing::context()?;
        assert_eq!(Command {}.render(&ctx)?, "");
        Ok(())
    }
}
