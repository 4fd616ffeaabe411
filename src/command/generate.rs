// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::fs;

use clap::Parser;

use crate::{
    error::Result,
    keygen::{KeyType, Request},
    metadata,
    prompt::Inquire,
};

use super::Context;

/// Generate a new SSH key using a guided interactive process.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The type of key to generate. Asked for if not given.
    #[arg(long = "type", short = 't', value_enum)]
    key_type: Option<KeyType>,

    /// The file name of the new key in the SSH directory. Asked for if not
    /// given.
    #[arg(long, short)]
    name: Option<String>,

    /// The comment to embed in the key. Asked for if not given.
    #[arg(long, short)]
    comment: Option<String>,

    /// The number of key derivation rounds used to protect the private key.
    #[arg(long, default_value_t = metadata::DEFAULT_KDF_ROUNDS)]
    rounds: u32,
}

impl super::Command for Command {
    fn execute(self, ctx: &mut Context) -> Result<()> {
        let request = Request::interactive(
            &mut Inquire,
            self.key_type,
            self.name,
            self.comment,
        )?;

        fs::create_dir_all(ctx.env.ssh_dir())?;
        request.run(&ctx.keygen_program, self.rounds, ctx.env.ssh_dir())?;

        println!("Generated key {}", request.name);
        Ok(())
    }
}
