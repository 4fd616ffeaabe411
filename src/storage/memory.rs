// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::Result;

use super::Storage;

#[derive(Default)]
pub(crate) struct Memory {
    data: Option<String>,
}

impl Memory {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_contents(contents: &str) -> Self {
        Self {
            data: Some(contents.to_owned()),
        }
    }
}

impl Storage for Memory {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.data.clone())
    }

    fn update(&mut self, contents: &str) -> Result<()> {
        self.data = Some(contents.to_owned());
        Ok(())
    }
}
