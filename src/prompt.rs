// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use inquire::{Select, Text};

use crate::error::Result;

pub(crate) trait Prompt {
    fn say(&mut self, message: &str) -> Result<()>;

    /// Returns the index of the chosen option. `default` is preselected.
    fn select(&mut self, message: &str, options: &[String], default: usize) -> Result<usize>;

    /// Returns the answer without surrounding whitespace, or `default` when
    /// the answer is empty.
    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String>;
}

/// Interactive questions on the terminal.
pub(crate) struct Inquire;

impl Prompt for Inquire {
    fn say(&mut self, message: &str) -> Result<()> {
        println!("{message}");
        Ok(())
    }

    fn select(&mut self, message: &str, options: &[String], default: usize) -> Result<usize> {
        Ok(Select::new(message, options.to_vec())
            .with_starting_cursor(default)
            .raw_prompt()?
            .index)
    }

    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        let mut text = Text::new(message);
        if let Some(value) = default {
            text = text.with_default(value);
        }
        Ok(text.prompt()?.trim().to_owned())
    }
}
