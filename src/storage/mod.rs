// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

mod file;
#[cfg(test)]
mod memory;

use crate::error::Result;

pub(crate) use file::File;
#[cfg(test)]
pub(crate) use memory::Memory;

/// Whole-document text storage for the SSH client configuration.
pub(crate) trait Storage {
    /// Returns `None` if nothing has been stored yet.
    fn get(&self) -> Result<Option<String>>;
    fn update(&mut self, contents: &str) -> Result<()>;
}

impl<T: Storage + ?Sized> Storage for Box<T> {
    fn get(&self) -> Result<Option<String>> {
        (**self).get()
    }

    fn update(&mut self, contents: &str) -> Result<()> {
        (**self).update(contents)
    }
}
