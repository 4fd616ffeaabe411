// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
#![deny(elided_lifetimes_in_paths)]
#![warn(
    rust_2018_idioms,
    future_incompatible,
    unused,
    unused_lifetimes,
    unused_qualifications,
    unused_results,
    anonymous_parameters,
    deprecated_in_future,
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::unseparated_literal_suffix,
    clippy::decimal_literal_representation,
    clippy::single_char_lifetime_names,
    clippy::fallible_impl_from,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::wildcard_enum_match_arm,
    clippy::deref_by_slicing,
    clippy::default_numeric_fallback,
    clippy::shadow_reuse,
    clippy::clone_on_ref_ptr,
    clippy::todo,
    clippy::string_add,
    clippy::use_debug
)]
#![cfg_attr(not(test), warn(clippy::panic_in_result_fn))]

mod audit;
mod command;
mod config;
mod environment;
mod error;
mod keygen;
mod keys;
mod metadata;
mod prompt;
mod storage;

use std::{path::PathBuf, process};

use clap::{CommandFactory as _, Parser, Subcommand};
use command::{Command as _, Context};
use environment::Environment;
use error::Result;
use log::{error, warn};

#[derive(Debug, Subcommand)]
enum Command {
    List(command::list::Command),
    Config(command::config::Command),
    Unused(command::unused::Command),
    Map(command::map::Command),
    Unmap(command::unmap::Command),
    Generate(command::generate::Command),
    Delete(command::delete::Command),
    Audit(command::audit::Command),
}

impl command::Command for Command {
    fn execute(self, ctx: &mut Context) -> Result<()> {
        match self {
            Self::List(cmd) => cmd.execute(ctx),
            Self::Config(cmd) => cmd.execute(ctx),
            Self::Unused(cmd) => cmd.execute(ctx),
            Self::Map(cmd) => cmd.execute(ctx),
            Self::Unmap(cmd) => cmd.execute(ctx),
            Self::Generate(cmd) => cmd.execute(ctx),
            Self::Delete(cmd) => cmd.execute(ctx),
            Self::Audit(cmd) => cmd.execute(ctx),
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The directory holding the SSH keys and the SSH client configuration.
    /// Defaults to `.ssh` in the home directory.
    #[arg(long, global = true, env = "SSHKM_SSH_DIR", value_hint = clap::ValueHint::DirPath)]
    ssh_dir: Option<PathBuf>,

    /// The program used to generate new keys. It must accept the same
    /// arguments as OpenSSH's ssh-keygen.
    #[arg(
        long,
        global = true,
        env = "SSHKM_KEYGEN_PROGRAM",
        default_value = metadata::DEFAULT_KEYGEN_PROGRAM,
        value_hint = clap::ValueHint::ExecutablePath
    )]
    keygen_program: PathBuf,

    #[clap(subcommand)]
    command: Option<Command>,
}

fn run(args: Args) -> Result<()> {
    let Some(command) = args.command else {
        Args::command().print_help()?;
        return Ok(());
    };

    let env = Environment::from_process(args.ssh_dir)?;
    let mut ctx = Context {
        storage: Box::new(storage::File::new(env.config_path())),
        env,
        keygen_program: args.keygen_program,
    };

    command::Command::execute(command, &mut ctx)
}

fn main() {
    let logger_env = env_logger::Env::new()
        .filter_or("SSHKM_LOG", "warn")
        .write_style("SSHKM_LOG_STYLE");
    env_logger::Builder::from_env(logger_env).init();

    let code = exit_code(run(Args::parse()));
    if code != 0 {
        process::exit(code);
    }
}

/// Reports the outcome of a command and decides the process exit code.
fn exit_code(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) if e.is_fatal() => {
            error!("We encountered an error: {}", e);
            e.exit_code()
        }
        Err(e) => {
            warn!("{}", e);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::error::{Error, UserInput};

    #[test]
    fn arguments_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn map_requires_key_and_host() {
        let err = Args::try_parse_from(["sshkeymanager", "map", "id_a"]).err();
        assert_eq!(
            err.map(|e| e.kind()),
            Some(clap::error::ErrorKind::MissingRequiredArgument)
        );
    }

    #[test]
    fn bare_invocation_shows_help() {
        assert!(matches!(
            Args::try_parse_from(["sshkeymanager"]),
            Ok(Args { command: None, .. })
        ));
    }

    #[test]
    fn notices_exit_successfully() {
        assert_eq!(exit_code(Ok(())), 0);
        assert_eq!(
            exit_code(Err(Error::from(UserInput::AlreadyMapped {
                host: "box".to_owned(),
            }))),
            0
        );
        assert_eq!(
            exit_code(Err(Error::from(io::Error::from(io::ErrorKind::NotFound)))),
            1
        );
    }

    #[test]
    fn unknown_subcommands_are_rejected() {
        assert!(Args::try_parse_from(["sshkeymanager", "rotate"]).is_err());
    }

    #[test]
    fn generate_accepts_answers_up_front() {
        let args = Args::try_parse_from([
            "sshkeymanager",
            "--ssh-dir",
            "/tmp/keys",
            "generate",
            "--type",
            "rsa",
            "--name",
            "id_ci",
        ]);
        assert!(matches!(
            args,
            Ok(Args {
                command: Some(Command::Generate(_)),
                ..
            })
        ));
    }
}
