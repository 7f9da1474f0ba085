// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment source snapshots.
//!
//! # Architecture
//!
//! ```text
//! EnvSource (copy-on-write Arc<BTreeMap<EnvKey, String>>)
//! Sources: from_process(), from_map(), FromIterator, empty()
//! Ops: get (absent => ""), with (copy-on-write), len/is_empty
//! ```
//!
//! - **Immutable snapshot**: later changes to the process environment are not seen
//! - **Case-insensitive on Windows**
//! - **Cheap clones**: clones share data until `with` modifies one of them

mod key;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::sync::Arc;

use key::EnvKey;

/// An immutable snapshot of environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: Arc<BTreeMap<EnvKey, String>>,
}

impl EnvSource {
    /// Creates an empty source.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Captures the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    #[must_use]
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Creates a source from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        vars.into_iter().collect()
    }

    /// Returns the raw value of `name`, or `""` when it is not set.
    ///
    /// Empty and absent variables are indistinguishable by design of the
    /// resolution rules: both mean "not set".
    #[must_use]
    pub fn get(&self, name: &str) -> &str {
        self.vars
            .get(&EnvKey::new(name))
            .map_or("", String::as_str)
    }

    /// Returns a copy of this source with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.vars).insert(EnvKey::new(name), value.into());
        self
    }

    /// Returns an iterator over the variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: Arc::new(
                iter.into_iter()
                    .map(|(k, v)| (EnvKey::new(k), v.into()))
                    .collect(),
            ),
        }
    }
}
