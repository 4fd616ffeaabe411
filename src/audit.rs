// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{collections::BTreeMap, path::Path};

use chrono::{DateTime, Local};

use crate::{config::Config, keys::Key, metadata};

/// Whether any host refers to the private half of `key`. Config entries are
/// compared by file name against the public key's file name without `.pub`.
pub(crate) fn is_used(key: &Key, config: &Config) -> bool {
    let Some(public) = key.path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    let base = public
        .strip_suffix(metadata::PUBLIC_KEY_EXTENSION)
        .unwrap_or(public);

    config.hosts().flat_map(|(_, paths)| paths).any(|path| {
        Path::new(path)
            .file_name()
            .is_some_and(|name| name.to_str() == Some(base))
    })
}

pub(crate) fn unused<'keys>(keys: &'keys [Key], config: &Config) -> Vec<&'keys Key> {
    keys.iter().filter(|key| !is_used(key, config)).collect()
}

/// Key paths referenced by more than one host, with the referring hosts in
/// the order they were encountered.
pub(crate) fn multiple_mappings(config: &Config) -> BTreeMap<String, Vec<String>> {
    let mut mappings = BTreeMap::<String, Vec<String>>::new();
    for (host, paths) in config.hosts() {
        for path in paths {
            mappings.entry(path.clone()).or_default().push(host.clone());
        }
    }
    mappings.retain(|_, hosts| hosts.len() > 1);
    mappings
}

pub(crate) fn describe_age(modified: &DateTime<Local>, now: &DateTime<Local>) -> String {
    // LINT: Key ages are displayed with one decimal place, so the precision
    // lost converting seconds to a float is irrelevant.
    #[allow(clippy::cast_precision_loss)]
    let hours = now.signed_duration_since(*modified).num_seconds() as f64 / 3600.0;
    if hours < 24.0 {
        format!("{hours:.1} hours ago")
    } else {
        format!("{:.1} days ago", hours / 24.0)
    }
}
