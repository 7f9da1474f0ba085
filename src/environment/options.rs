// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Initialization options and the invalid-environment policy.
//!
//! ```text
//! InitializeOptions::new()
//!   .with_source(EnvSource)     default: EnvSource::from_process()
//!   .on_invalid(|args| ...)     default: DefaultHandler::run()
//!
//! InvalidEnvironment { results, default_handler }
//!   default_handler.summary()        -> String
//!   default_handler.write_summary(w) -> io::Result<()>
//!   default_handler.run()            -> ! (stderr + exit 1)
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::report::render_summary;
use crate::source::EnvSource;
use crate::variable::VariableResult;

/// Exit status used by the default handler.
pub const EXIT_CODE: i32 = 1;

/// Caller-supplied handler for an invalid environment.
pub type InvalidHandler<'h> = Box<dyn FnOnce(InvalidEnvironment<'_>) + 'h>;

/// Options for [`Environment::initialize`](super::Environment::initialize).
#[derive(Default)]
pub struct InitializeOptions<'h> {
    source: Option<EnvSource>,
    on_invalid: Option<InvalidHandler<'h>>,
}

impl<'h> InitializeOptions<'h> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads variables from `source` instead of the process environment.
    #[must_use]
    pub fn with_source(mut self, source: EnvSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Replaces the default print-and-exit behaviour.
    #[must_use]
    pub fn on_invalid(mut self, handler: impl FnOnce(InvalidEnvironment<'_>) + 'h) -> Self {
        self.on_invalid = Some(Box::new(handler));
        self
    }

    pub(super) fn into_parts(self) -> (Option<EnvSource>, Option<InvalidHandler<'h>>) {
        (self.source, self.on_invalid)
    }
}

impl fmt::Debug for InitializeOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitializeOptions")
            .field("source", &self.source.as_ref().map(EnvSource::len))
            .field("on_invalid", &self.on_invalid.is_some())
            .finish()
    }
}

/// Arguments passed to a custom invalid-environment handler.
#[derive(Debug)]
pub struct InvalidEnvironment<'a> {
    /// Every declared variable with its result, sorted by name.
    pub results: &'a [VariableResult],
    /// The behaviour used when no custom handler is given.
    pub default_handler: DefaultHandler<'a>,
}

/// Prints a summary of all variables and terminates the process.
#[derive(Debug, Clone, Copy)]
pub struct DefaultHandler<'a> {
    results: &'a [VariableResult],
}

impl<'a> DefaultHandler<'a> {
    pub(super) const fn new(results: &'a [VariableResult]) -> Self {
        Self { results }
    }

    /// The text written to stderr by [`Self::run`].
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Environment Variables:\n\n{}\n", render_summary(self.results))
    }

    /// Writes the summary to `writer`.
    ///
    /// # Errors
    ///
    /// Returns any error from `writer`.
    pub fn write_summary(&self, writer: &mut impl Write) -> io::Result<()> {
        writer.write_all(self.summary().as_bytes())?;
        writer.flush()
    }

    /// Writes the summary to stderr and exits with [`EXIT_CODE`].
    pub fn run(self) -> ! {
        if let Err(e) = self.write_summary(&mut io::stderr().lock()) {
            tracing::error!(error = %e, "Failed to write environment summary");
        }
        std::process::exit(EXIT_CODE)
    }
}
