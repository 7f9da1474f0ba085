// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The variable registry and its two-phase lifecycle.
//!
//! ```text
//! Environment::new()
//!     |
//!     v
//! register*  ---- Finalized once initialized, Duplicate on name reuse
//!     |
//!     v
//! initialize(options)
//!     for name in sorted(variables):  result = variable.resolve(source)
//!     commit all results + mark initialized (one critical section)
//!     any error? --> on_invalid({ results, default_handler })
//!                    or DefaultHandler::run() (stderr table, exit 1)
//!     |
//!     v
//! result(variable)* ---- Uninitialized before initialize()
//!
//! reset() --> pristine state (test isolation only)
//! ```

mod options;


use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{Error, Result};
use crate::source::EnvSource;
use crate::variable::{Value, Variable, VariableInfo, VariableResult};

pub use options::{DefaultHandler, EXIT_CODE, InitializeOptions, InvalidEnvironment, InvalidHandler};

/// A registry of declared variables.
///
/// Clones share the same registry. Independent registries can coexist, which
/// keeps tests isolated from each other.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    is_initialized: bool,
    /// Keyed by name; iteration order is the reporting order.
    variables: BTreeMap<String, Arc<Variable>>,
    results: BTreeMap<String, VariableResult>,
}

impl State {
    fn admit(&self, name: &str) -> Result<()> {
        if self.is_initialized {
            return Err(Error::Finalized {
                name: name.to_string(),
            });
        }
        if self.variables.contains_key(name) {
            return Err(Error::Duplicate {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn insert(&mut self, variable: Variable) -> Arc<Variable> {
        let name = variable.name().to_string();
        tracing::trace!(variable = %name, "Registered variable");
        let variable = Arc::new(variable);
        self.variables.insert(name, Arc::clone(&variable));
        variable
    }
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds a variable to the registry.
    ///
    /// # Errors
    ///
    /// [`Error::Finalized`] after initialization, [`Error::Duplicate`] when a
    /// variable with the same name is already declared.
    pub fn register(&self, variable: Variable) -> Result<Arc<Variable>> {
        let mut state = self.lock();
        state.admit(variable.name())?;
        Ok(state.insert(variable))
    }

    /// Adds a group of variables to the registry, all or none.
    ///
    /// # Errors
    ///
    /// The first error [`Self::register`] would report for any member of the
    /// group, or [`Error::Duplicate`] when the group repeats a name. Nothing is
    /// registered on error.
    pub(crate) fn register_all<const N: usize>(
        &self,
        variables: [Variable; N],
    ) -> Result<[Arc<Variable>; N]> {
        let mut state = self.lock();
        for (index, variable) in variables.iter().enumerate() {
            state.admit(variable.name())?;
            if variables[..index]
                .iter()
                .any(|other| other.name() == variable.name())
            {
                return Err(Error::Duplicate {
                    name: variable.name().to_string(),
                });
            }
        }
        Ok(variables.map(|variable| state.insert(variable)))
    }

    /// Resolves every declared variable, once.
    ///
    /// Calling this again after the first pass does nothing. When any variable
    /// fails to resolve, the invalid-environment handler from `options` is
    /// called; without one, the default handler prints a summary to stderr and
    /// terminates the process with [`EXIT_CODE`].
    pub fn initialize(&self, options: InitializeOptions<'_>) {
        let (source, on_invalid) = options.into_parts();

        let results: Vec<VariableResult> = {
            let mut state = self.lock();
            if state.is_initialized {
                tracing::debug!("Environment already initialized");
                return;
            }

            let source = source.unwrap_or_else(EnvSource::from_process);
            let results: Vec<VariableResult> = state
                .variables
                .values()
                .map(|variable| {
                    let result = variable.resolve(&source);
                    tracing::debug!(
                        variable = %variable.name(),
                        valid = result.is_ok(),
                        "Resolved variable"
                    );
                    VariableResult {
                        variable: Arc::clone(variable),
                        result,
                    }
                })
                .collect();

            state.results = results
                .iter()
                .map(|result| (result.variable.name().to_string(), result.clone()))
                .collect();
            state.is_initialized = true;
            results
        };

        let invalid = results.iter().filter(|result| !result.is_valid()).count();
        if invalid == 0 {
            tracing::info!(variables = results.len(), "Environment initialized");
            return;
        }

        tracing::warn!(
            variables = results.len(),
            invalid,
            "Environment is invalid"
        );

        let default_handler = DefaultHandler::new(&results);
        match on_invalid {
            Some(handler) => handler(InvalidEnvironment {
                results: &results,
                default_handler,
            }),
            None => default_handler.run(),
        }
    }

    /// Returns the cached resolution of `variable`.
    ///
    /// # Errors
    ///
    /// [`Error::Uninitialized`] before [`Self::initialize`],
    /// [`Error::Unregistered`] for variables that are not part of this
    /// registry (for example after [`Self::reset`]), or the variable's own
    /// cached error.
    pub fn result(&self, variable: &Arc<Variable>) -> Result<Option<Value>> {
        let state = self.lock();
        let name = variable.name();

        if !state.is_initialized {
            return Err(Error::Uninitialized {
                name: name.to_string(),
            });
        }

        match state.results.get(name) {
            Some(cached) if Arc::ptr_eq(&cached.variable, variable) => cached.result.clone(),
            _ => Err(Error::Unregistered {
                name: name.to_string(),
            }),
        }
    }

    /// Restores the pristine, uninitialized, empty state.
    ///
    /// Declarations made before the reset stop resolving. Meant for test
    /// isolation, not for reconfiguring a running process.
    pub fn reset(&self) {
        *self.lock() = State::default();
        tracing::debug!("Environment reset");
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.lock().is_initialized
    }

    /// Information about every declared variable, sorted by name.
    #[must_use]
    pub fn variables(&self) -> Vec<VariableInfo> {
        self.lock()
            .variables
            .values()
            .map(|variable| variable.info().clone())
            .collect()
    }

    /// Cached results sorted by name; empty before initialization.
    #[must_use]
    pub fn results(&self) -> Vec<VariableResult> {
        self.lock().results.values().cloned().collect()
    }
}
