// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

//! The host to identity file mapping kept in the SSH client configuration.
//!
//! Only `Host` and `IdentityFile` lines are understood. Everything else in the
//! file is dropped when the configuration is written back, and hosts are
//! always written in ascending order.

use std::{
    collections::{btree_map, BTreeMap},
    fmt::Write as _,
};

use log::debug;

use crate::{
    environment::Environment,
    error::{self, Result},
    storage::Storage,
};

const HOST_PREFIX: &str = "Host ";
const IDENTITY_FILE_PREFIX: &str = "IdentityFile ";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Config {
    hosts: BTreeMap<String, Vec<String>>,
}

impl Config {
    pub(crate) fn parse(text: &str, env: &Environment) -> Result<Self> {
        let mut hosts = BTreeMap::<String, Vec<String>>::new();
        let mut current: Option<String> = None;

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if let Some(host) = line.strip_prefix(HOST_PREFIX) {
                let host = host.trim().to_owned();
                // A repeated host starts over, like a map assignment would.
                _ = hosts.insert(host.clone(), Vec::new());
                current = Some(host);
            } else if let Some(path) = line.strip_prefix(IDENTITY_FILE_PREFIX) {
                let host = current.as_ref().ok_or(error::Error::MalformedConfig {
                    line: index + 1,
                    reason: "IdentityFile appears before any Host",
                })?;
                hosts
                    .entry(host.clone())
                    .or_default()
                    .push(env.expand_path(path.trim()));
            }
        }

        debug!("Parsed {} host entries", hosts.len());
        Ok(Self { hosts })
    }

    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        for (index, (host, paths)) in self.hosts.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            // Writing to a String cannot fail.
            _ = writeln!(out, "{HOST_PREFIX}{host}");
            for path in paths {
                _ = writeln!(out, "  {IDENTITY_FILE_PREFIX}{path}");
            }
        }
        out
    }

    pub(crate) fn load(storage: &impl Storage, env: &Environment) -> Result<Self> {
        storage
            .get()?
            .map_or_else(|| Ok(Self::default()), |text| Self::parse(&text, env))
    }

    pub(crate) fn save(&self, storage: &mut impl Storage) -> Result<()> {
        storage.update(&self.render())
    }

    pub(crate) fn hosts(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.hosts.iter()
    }

    #[cfg(test)]
    pub(crate) fn keys_for(&self, host: &str) -> Option<&[String]> {
        self.hosts.get(host).map(Vec::as_slice)
    }

    /// Associates a key with a host that has no key yet. The key is stored as
    /// given.
    pub(crate) fn map(&mut self, key: &str, host: &str) -> Result<()> {
        let paths = self.hosts.entry(host.to_owned()).or_default();
        if !paths.is_empty() {
            return Err(error::UserInput::AlreadyMapped {
                host: host.to_owned(),
            }
            .into());
        }
        paths.push(key.to_owned());
        Ok(())
    }

    /// Removes the first entry under `host` that is either exactly `key` or
    /// its expansion. Returns whether anything was removed.
    pub(crate) fn unmap(&mut self, key: &str, host: &str, env: &Environment) -> bool {
        let Some(paths) = self.hosts.get_mut(host) else {
            return false;
        };
        let expanded = env.expand_path(key);
        match paths
            .iter()
            .position(|path| path == key || *path == expanded)
        {
            Some(index) => {
                _ = paths.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes the first reference to `path` from every host, dropping hosts
    /// that lose their last key this way. Returns the affected hosts.
    pub(crate) fn forget(&mut self, path: &str) -> Vec<String> {
        let mut affected = Vec::new();
        self.hosts.retain(|host, paths| {
            match paths.iter().position(|candidate| candidate == path) {
                Some(index) => {
                    _ = paths.remove(index);
                    affected.push(host.clone());
                    !paths.is_empty()
                }
                None => true,
            }
        });
        affected
    }
}
