// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! POSIX shell quoting for example and default values.

/// Quotes `value` so it can be pasted into a POSIX shell as one word.
///
/// Values made only of unambiguous characters are returned unchanged.
#[must_use]
pub fn quote(value: &str) -> String {
    if value.is_empty() {
        return "''".to_string();
    }

    let is_safe = value.chars().all(|c| {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-')
    });
    if is_safe {
        return value.to_string();
    }

    format!("'{}'", value.replace('\'', r#"'"'"'"#))
}
