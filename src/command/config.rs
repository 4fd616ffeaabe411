// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use clap::Parser;
use tabled::{settings::Style, Table, Tabled};

use crate::{config::Config, error::Result, storage::Storage as _};

use super::Context;

/// Show the SSH client configuration, including the mappings of keys to
/// hosts.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// Show the parsed host mappings as a table instead of the file as it is.
    #[arg(long)]
    table: bool,
}

#[derive(Tabled)]
struct Row<'config> {
    #[tabled(rename = "Host")]
    host: &'config str,
    #[tabled(rename = "Identity Files")]
    paths: String,
}

impl super::Command for Command {
    fn execute(self, ctx: &mut Context) -> Result<()> {
        let text = ctx.storage.get()?.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", ctx.env.config_path().display()),
            )
        })?;

        if self.table {
            let config = Config::parse(&text, &ctx.env)?;
            let rows = config.hosts().map(|(host, paths)| Row {
                host,
                paths: paths.join("\n"),
            });
            println!("{}", Table::new(rows).with(Style::rounded()));
        } else {
            println!("{text}");
        }
        Ok(())
    }
}
