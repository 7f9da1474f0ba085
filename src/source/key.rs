// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variable name keys.
//!
//! ```text
//! EnvKey: case-insensitive on Windows (PATH == Path == path), exact elsewhere
//! ```

use std::cmp::Ordering;

/// An environment variable name, compared the way the platform does.
#[derive(Debug, Clone, Eq)]
pub(super) struct EnvKey(String);

impl EnvKey {
    pub(super) fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> Ordering {
        if cfg!(windows) {
            self.0
                .to_ascii_lowercase()
                .cmp(&other.0.to_ascii_lowercase())
        } else {
            self.0.cmp(&other.0)
        }
    }
}
