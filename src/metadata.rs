// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use inflector::Inflector;
use once_cell::sync::Lazy;

pub(crate) const SSH_DIR: &str = ".ssh";
pub(crate) const CONFIG_FILE: &str = "config";
pub(crate) const PUBLIC_KEY_EXTENSION: &str = ".pub";
pub(crate) const COMMENT_PREFIX: &str = "Comment: ";

pub(crate) const DEFAULT_KEYGEN_PROGRAM: &str = "ssh-keygen";
pub(crate) const DEFAULT_KDF_ROUNDS: u32 = 100;

pub(crate) static PROGRAM_NAME: Lazy<String> =
    Lazy::new(|| option_env!("CARGO_PKG_NAME").unwrap_or("sshkeymanager").to_owned());
pub(crate) static PROGRAM_DISPLAY_NAME: Lazy<String> = Lazy::new(|| PROGRAM_NAME.to_title_case());
