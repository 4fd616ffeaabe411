// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{io, process::ExitStatus, result};

use inquire::InquireError;
use thiserror::Error;

pub(crate) type Result<T, E = Error> = result::Result<T, E>;

#[derive(Error, Debug)]
pub(crate) enum Error {
    #[error("IO operation failed: {0}")]
    Io(#[from] io::Error),
    #[error("environment error: {0}")]
    Environment(#[from] Environment),
    #[error("{0}")]
    UserInput(#[from] UserInput),
    #[error("malformed SSH configuration on line {line}: {reason}")]
    MalformedConfig { line: usize, reason: &'static str },
    #[error("key generation program exited unsuccessfully ({0})")]
    KeyGen(ExitStatus),
    #[error("interactive prompt failed: {0}")]
    Prompt(InquireError),
    #[error("operation cancelled")]
    Cancelled,
}

impl From<InquireError> for Error {
    fn from(value: InquireError) -> Self {
        // LINT: Deliberate fall-through that should catch future cases added to
        // the enum.
        #[allow(
            clippy::wildcard_enum_match_arm,
            clippy::match_wildcard_for_single_variants
        )]
        match value {
            InquireError::OperationCanceled | InquireError::OperationInterrupted => Self::Cancelled,
            InquireError::IO(e) => Self::Io(e),
            _ => Self::Prompt(value),
        }
    }
}

impl Error {
    /// Whether the command that produced this error should terminate the
    /// process. Non-fatal errors are notices for the user.
    pub(crate) const fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::UserInput(UserInput::AlreadyMapped { .. } | UserInput::NotMapped { .. })
        )
    }

    /// The process exit code for this kind of error. Usage errors detected
    /// while parsing arguments exit with 2 on their own.
    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::UserInput(UserInput::AlreadyMapped { .. } | UserInput::NotMapped { .. }) => 0,
            Self::Environment(_) => 3,
            Self::MalformedConfig { .. } => 4,
            Self::KeyGen(_) => 5,
            Self::Prompt(_) => 6,
            Self::Cancelled => 130,
        }
    }
}

#[derive(Error, Debug)]
pub(crate) enum Environment {
    #[error("could not determine the home directory of the current user")]
    HomeDirectory,
    #[error("could not determine the current working directory: {0}")]
    WorkingDirectory(io::Error),
}

#[derive(Error, Debug)]
pub(crate) enum UserInput {
    #[error("The host {host} already has a key mapped. Please unmap the current key before mapping a new one.")]
    AlreadyMapped { host: String },
    #[error("The key {key} is not mapped to host {host}.")]
    NotMapped { key: String, host: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_are_not_fatal() {
        let err = Error::from(UserInput::AlreadyMapped {
            host: "example".to_owned(),
        });
        assert!(!err.is_fatal());
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn error_kinds_have_distinct_exit_codes() {
        let codes = [
            Error::from(io::Error::from(io::ErrorKind::NotFound)).exit_code(),
            Error::from(Environment::HomeDirectory).exit_code(),
            Error::MalformedConfig {
                line: 1,
                reason: "test",
            }
            .exit_code(),
        ];
        assert_eq!(codes, [1, 3, 4]);
    }

    #[test]
    fn prompt_errors_are_classified() {
        assert!(matches!(
            Error::from(InquireError::OperationCanceled),
            Error::Cancelled
        ));
        assert!(matches!(
            Error::from(InquireError::IO(io::Error::from(io::ErrorKind::BrokenPipe))),
            Error::Io(_)
        ));
        let not_a_tty = Error::from(InquireError::NotTTY);
        assert!(matches!(not_a_tty, Error::Prompt(_)));
        assert_eq!(not_a_tty.exit_code(), 6);
    }
}
