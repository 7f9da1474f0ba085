// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options.
//!
//! ```text
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (defaults to --log-level)
//! --log-file FILE   ← Optional log file
//! --set NAME=VALUE  ← Overrides a variable (can repeat)
//! --clear-env       ← Ignore the process environment
//!
//! Source: (process env | empty) + --set overrides
//! ```

use std::path::PathBuf;

use clap::Args;

use crate::logging::{LogConfig, LogLevel};
use crate::source::EnvSource;

/// Global options.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Sets a variable, such as 'PORT=8080'. Takes precedence over the
    /// process environment. Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment, action = clap::ArgAction::Append)]
    pub assignments: Vec<(String, String)>,

    /// Ignores the process environment; only --set values are visible.
    #[arg(long = "clear-env")]
    pub clear_env: bool,
}

impl GlobalOptions {
    /// Logging configuration for these options.
    #[must_use]
    pub fn to_log_config(&self) -> LogConfig {
        let console_level = self
            .log_level
            .and_then(|level| LogLevel::new(level).ok())
            .unwrap_or(LogLevel::WARN);

        // file_log_level falls back to log_level if not specified
        let file_level = self
            .file_log_level
            .and_then(|level| LogLevel::new(level).ok())
            .unwrap_or(console_level);

        LogConfig::builder()
            .with_console_level(console_level)
            .with_file_level(file_level)
            .maybe_with_log_file(self.log_file.as_ref().map(|p| p.display().to_string()))
            .build()
    }

    /// The environment the demo validates.
    #[must_use]
    pub fn to_source(&self) -> EnvSource {
        let base = if self.clear_env {
            EnvSource::empty()
        } else {
            EnvSource::from_process()
        };
        self.assignments
            .iter()
            .fold(base, |source, (name, value)| source.with(name, value))
    }
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got {raw:?}")),
    }
}
