// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI of the `envdecl-demo` binary using clap derive.
//!
//! ```text
//! envdecl-demo [global options] [--format text|json]
//!
//! text  invalid --> default handler (stderr table, exit 1)
//! json  invalid --> JSON report on stdout, exit 1
//! valid         --> resolved values on stdout, exit 0
//! ```

pub mod global;


use clap::{Parser, ValueEnum};

use crate::cli::global::GlobalOptions;

/// Typed environment variable declarations, demonstrated.
#[derive(Debug, Parser)]
#[command(
    name = "envdecl-demo",
    author,
    version,
    about = "Validates the environment of a sample service",
    long_about = "envdecl Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Declares the variables of a sample service, validates all of\n\
                  them at once, and either prints the resolved values or a\n\
                  summary of every problem found.",
    after_help = "VARIABLES:\n\n\
                  CDN_URL, DEBUG, EARTH_ATOM_COUNT, GRPC_TIMEOUT, LOG_LEVEL, PORT,\n\
                  READ_DSN, REDIS_PRIMARY_SERVICE_HOST, REDIS_PRIMARY_SERVICE_PORT,\n\
                  SAMPLE_RATIO, SESSION_KEY, WEIGHT"
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Output format for the result.
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable table.
    #[default]
    Text,
    /// Machine readable report.
    Json,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
