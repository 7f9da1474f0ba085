// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Human and machine readable summaries of resolved variables.
//!
//! ```text
//! ❯  NAME  description  [ <schema> ] = default  ✗ set to 'raw', cause
//!    NAME  description    <schema>              ✓ set to 'raw'
//!    NAME  description  [ a | b ] = a           ✓ using default value
//!    NAME  description  [ <schema> ]            • undefined
//! ```
//!
//! Sensitive variables never have their value or default echoed; both are
//! replaced by `[hidden]`.

mod quote;


use comfy_table::{ContentArrangement, Table, presets};
use serde::Serialize;

use crate::error::Error;
use crate::maybe::Maybe;
use crate::variable::{Resolution, Variable, VariableResult};

pub use quote::quote;

const ATTENTION: &str = "❯";
const INVALID: &str = "✗";
const NEUTRAL: &str = "•";
const VALID: &str = "✓";
const HIDDEN: &str = "[hidden]";

/// Renders a borderless, column-aligned table with one row per variable.
#[must_use]
pub fn render_summary(results: &[VariableResult]) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled);

    for VariableResult { variable, result } in results {
        let marker = if result.is_err() { ATTENTION } else { "" };
        let info = variable.info();
        table.add_row(vec![
            marker.to_string(),
            info.name().to_string(),
            info.description().to_string(),
            render_schema(variable),
            render_result(variable, result),
        ]);
    }

    let last = table.column_count().saturating_sub(1);
    for (index, column) in table.column_iter_mut().enumerate() {
        column.set_padding((0, if index == last { 0 } else { 2 }));
    }

    table
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the schema column: optionality brackets, type, and default.
#[must_use]
pub fn render_schema(variable: &Variable) -> String {
    let info = variable.info();
    let rendered = info.schema().render();
    let (open, close) = if info.is_optional() {
        ('[', ']')
    } else {
        (' ', ' ')
    };

    let default = match info.default() {
        Maybe::Defined(Some(_)) if info.is_sensitive() => format!(" = {HIDDEN}"),
        Maybe::Defined(Some(value)) => format!(" = {}", quote(value)),
        _ => String::new(),
    };

    format!("{open} {rendered} {close}{default}")
        .trim_end()
        .to_string()
}

/// Renders the result column.
#[must_use]
pub fn render_result(variable: &Variable, result: &Resolution) -> String {
    let status = Status::of(result);
    format!("{} {}", status.symbol(), describe(variable, result))
}

fn describe(variable: &Variable, result: &Resolution) -> String {
    let is_sensitive = variable.info().is_sensitive();
    match result {
        Err(Error::Validation { cause, .. }) if is_sensitive => format!("set to {HIDDEN}, {cause}"),
        Err(Error::Validation { value, cause, .. }) => format!("set to {}, {cause}", quote(value)),
        Err(Error::Undefined { .. }) | Ok(None) => "undefined".to_string(),
        Err(other) => other.to_string(),
        Ok(Some(value)) if value.is_default() => "using default value".to_string(),
        Ok(Some(_)) if is_sensitive => format!("set to {HIDDEN}"),
        Ok(Some(value)) => format!("set to {}", quote(value.verbatim())),
    }
}

/// Resolution status of one variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Valid,
    Default,
    Undefined,
    Invalid,
}

impl Status {
    #[must_use]
    pub fn of(result: &Resolution) -> Self {
        match result {
            Err(_) => Self::Invalid,
            Ok(None) => Self::Undefined,
            Ok(Some(value)) if value.is_default() => Self::Default,
            Ok(Some(_)) => Self::Valid,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Valid | Self::Default => VALID,
            Self::Undefined => NEUTRAL,
            Self::Invalid => INVALID,
        }
    }
}

/// One variable in the machine readable report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub name: String,
    pub description: String,
    pub schema: String,
    pub optional: bool,
    pub sensitive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    pub status: Status,
    pub message: String,
}

impl ReportEntry {
    #[must_use]
    pub fn new(result: &VariableResult) -> Self {
        let VariableResult { variable, result } = result;
        let info = variable.info();
        let default = if info.is_sensitive() {
            None
        } else {
            info.default().present().cloned()
        };

        Self {
            name: info.name().to_string(),
            description: info.description().to_string(),
            schema: info.schema().render(),
            optional: info.is_optional(),
            sensitive: info.is_sensitive(),
            default,
            status: Status::of(result),
            message: describe(variable, result),
        }
    }
}

/// Builds the machine readable report.
#[must_use]
pub fn report(results: &[VariableResult]) -> Vec<ReportEntry> {
    results.iter().map(ReportEntry::new).collect()
}

/// Renders the machine readable report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(results: &[VariableResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&report(results))
}
