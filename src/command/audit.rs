// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Write as _;

use chrono::{DateTime, Local};
use clap::Parser;
use tabled::{settings::Style, Table, Tabled};

use crate::{
    audit,
    error::Result,
    keys::{self, Key},
};

use super::Context;

/// Audit the SSH keys and configuration: key ages, unused keys and keys
/// mapped to multiple hosts.
#[derive(Debug, Parser)]
pub(crate) struct Command {}

#[derive(Tabled)]
struct KeyRow<'key> {
    #[tabled(rename = "Key")]
    name: &'key str,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Age")]
    age: String,
    #[tabled(rename = "In Use")]
    in_use: bool,
    #[tabled(rename = "Comment")]
    comment: &'key str,
}

impl<'key> KeyRow<'key> {
    fn new(key: &'key Key, in_use: bool, now: &DateTime<Local>) -> Self {
        Self {
            name: &key.name,
            created: keys::format_time(&key.modified),
            age: audit::describe_age(&key.modified, now),
            in_use,
            comment: key.comment.as_deref().unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct MappingRow {
    #[tabled(rename = "Key")]
    path: String,
    #[tabled(rename = "Mapped to Hosts")]
    hosts: String,
}

impl Command {
    fn render(&self, ctx: &Context, now: &DateTime<Local>) -> Result<String> {
        let keys = keys::sorted(keys::scan(ctx.env.ssh_dir())?);
        let config = ctx.load_config()?;

        // Writing to a String cannot fail.
        let mut out = String::new();
        _ = writeln!(out, "SSH Key Audit");
        _ = writeln!(out, "=============");

        _ = writeln!(out, "\n--- Keys ---");
        if keys.is_empty() {
            _ = writeln!(out, "No keys found");
        } else {
            let rows = keys
                .iter()
                .map(|key| KeyRow::new(key, audit::is_used(key, &config), now));
            _ = writeln!(out, "{}", Table::new(rows).with(Style::rounded()));
        }

        _ = writeln!(out, "\n--- Unused Keys ---");
        let unused = audit::unused(&keys, &config);
        if unused.is_empty() {
            _ = writeln!(out, "No unused keys found");
        } else {
            _ = writeln!(out, "{}", Table::new(unused).with(Style::rounded()));
        }

        _ = writeln!(out, "\n--- Multiple Mappings ---");
        let mappings = audit::multiple_mappings(&config);
        if mappings.is_empty() {
            _ = writeln!(out, "No keys with multiple mappings found");
        } else {
            let rows = mappings.into_iter().map(|(path, hosts)| MappingRow {
                path,
                hosts: hosts.join(", "),
            });
            _ = writeln!(out, "{}", Table::new(rows).with(Style::rounded()));
        }
        Ok(out)
    }
}

impl super::Command for Command {
    fn execute(self, ctx: &mut Context) -> Result<()> {
        print!("{}", self.render(ctx, &Local::now())?);
        Ok(())
    }
}
