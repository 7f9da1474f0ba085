// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed declarations.
//!
//! ```text
//! env.integer("WEIGHT", "...")                  Declarator<Integer, Required>
//!    .range(1..=100)                            kind-specific options
//!    .default(10) | .optional()                 Required | Optional
//!    .sensitive(true)
//!    .declare()?                                Spec error, Finalized, Duplicate
//!        |
//!        v
//! Declaration<i64, Required>::value() -> Result<i64>
//! Declaration<i64, Optional>::value() -> Result<Option<i64>>
//! ```

pub mod binary;
pub mod boolean;
pub mod duration;
pub mod enumeration;
pub mod kubernetes;
pub mod numeric;
pub mod port;
pub mod string;
pub mod url;

#[cfg(test)]
mod tests;

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::environment::Environment;
use crate::error::{Error, Result, SpecError};
use crate::maybe::Maybe;
use crate::schema::Schema;
use crate::variable::{Example, Variable, VariableInfo};

/// A declarable type: its schema and documentation examples.
pub trait Kind {
    type Native: PartialEq + Clone + Send + Sync + 'static;

    /// Builds the schema, validating the kind's own options.
    ///
    /// # Errors
    ///
    /// Returns a [`SpecError`] when the options are inconsistent.
    fn schema(&self) -> std::result::Result<Schema<Self::Native>, SpecError>;

    /// Type-specific examples, excluding the default.
    fn examples(&self) -> Vec<Example>;
}

mod sealed {
    pub trait Sealed {}
}

/// Whether a declaration's value is guaranteed to be present.
pub trait Presence: sealed::Sealed {
    type Output<T>;

    /// Shapes a resolved value for [`Declaration::value`].
    ///
    /// # Errors
    ///
    /// [`Error::Undefined`] when a required value is missing.
    fn output<T>(value: Option<T>, name: &str) -> Result<Self::Output<T>>;
}

/// The value is always present: set explicitly or through a default.
#[derive(Debug, Clone, Copy)]
pub enum Required {}

/// The value may be absent.
#[derive(Debug, Clone, Copy)]
pub enum Optional {}

impl sealed::Sealed for Required {}
impl sealed::Sealed for Optional {}

impl Presence for Required {
    type Output<T> = T;

    fn output<T>(value: Option<T>, name: &str) -> Result<T> {
        value.ok_or_else(|| Error::Undefined {
            name: name.to_string(),
        })
    }
}

impl Presence for Optional {
    type Output<T> = Option<T>;

    fn output<T>(value: Option<T>, _name: &str) -> Result<Option<T>> {
        Ok(value)
    }
}

/// Collects the options of a declaration before it is registered.
#[must_use = "a variable is only declared once `declare` is called"]
pub struct Declarator<'e, K: Kind, P = Required> {
    env: &'e Environment,
    name: String,
    description: String,
    kind: K,
    default: Maybe<Option<K::Native>>,
    is_sensitive: bool,
    presence: PhantomData<P>,
}

impl<'e, K: Kind> Declarator<'e, K, Required> {
    pub(crate) fn new(
        env: &'e Environment,
        name: impl Into<String>,
        description: impl Into<String>,
        kind: K,
    ) -> Self {
        Self {
            env,
            name: name.into(),
            description: description.into(),
            kind,
            default: Maybe::Undefined,
            is_sensitive: false,
            presence: PhantomData,
        }
    }

    /// Value used when the variable is empty or unset.
    pub fn default(mut self, value: K::Native) -> Self {
        self.default = Maybe::Defined(Some(value));
        self
    }

    /// Resolves to `None` instead of failing when the variable is unset.
    ///
    /// A default set with [`Self::default`] is kept and still wins over `None`.
    pub fn optional(self) -> Declarator<'e, K, Optional> {
        let default = match self.default {
            Maybe::Defined(Some(value)) => Maybe::Defined(Some(value)),
            Maybe::Defined(None) | Maybe::Undefined => Maybe::Defined(None),
        };
        Declarator {
            env: self.env,
            name: self.name,
            description: self.description,
            kind: self.kind,
            default,
            is_sensitive: self.is_sensitive,
            presence: PhantomData,
        }
    }
}

impl<'e, K: Kind, P: Presence> Declarator<'e, K, P> {
    /// Keeps the value out of summaries and examples.
    pub fn sensitive(mut self, is_sensitive: bool) -> Self {
        self.is_sensitive = is_sensitive;
        self
    }

    /// Validates the options and registers the variable.
    ///
    /// # Errors
    ///
    /// [`Error::Spec`] for inconsistent options, [`Error::Finalized`] after
    /// initialization, [`Error::Duplicate`] when the name is taken.
    pub fn declare(self) -> Result<Declaration<K::Native, P>> {
        let (env, variable) = self.build()?;
        let variable = env.register(variable)?;
        Ok(Declaration::registered(env, variable))
    }

    /// Validates the options and builds the variable without registering it.
    fn build(self) -> Result<(&'e Environment, Variable)> {
        let schema = self
            .kind
            .schema()
            .map_err(|cause| Error::spec(&self.name, cause))?;
        if let Maybe::Defined(Some(value)) = &self.default {
            schema
                .check_default(value)
                .map_err(|cause| Error::spec(&self.name, cause))?;
        }

        let variable = Variable::new(
            &self.name,
            &self.description,
            schema,
            self.default,
            self.is_sensitive,
            self.kind.examples(),
        );
        Ok((self.env, variable))
    }
}

impl<K: Kind, P> fmt::Debug for Declarator<'_, K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Declarator")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("has_default", &self.default.is_defined())
            .field("is_sensitive", &self.is_sensitive)
            .finish_non_exhaustive()
    }
}

/// Handle to a declared variable.
pub struct Declaration<T, P = Required> {
    env: Environment,
    variable: Arc<Variable>,
    marker: PhantomData<fn() -> (T, P)>,
}

impl<T, P> Declaration<T, P>
where
    T: Clone + 'static,
    P: Presence,
{
    #[must_use]
    pub fn name(&self) -> &str {
        self.variable.name()
    }

    #[must_use]
    pub fn info(&self) -> &VariableInfo {
        self.variable.info()
    }

    /// Returns the resolved value.
    ///
    /// # Errors
    ///
    /// [`Error::Uninitialized`] before the environment is initialized, or the
    /// error this variable failed to resolve with.
    pub fn value(&self) -> Result<P::Output<T>> {
        let name = self.variable.name();
        let native = self
            .env
            .result(&self.variable)?
            .map(|value| {
                value
                    .native::<T>()
                    .cloned()
                    .ok_or_else(|| Error::Unregistered {
                        name: name.to_string(),
                    })
            })
            .transpose()?;
        P::output(native, name)
    }
}

impl<T, P> Declaration<T, P> {
    fn registered(env: &Environment, variable: Arc<Variable>) -> Self {
        Self {
            env: env.clone(),
            variable,
            marker: PhantomData,
        }
    }
}

impl<T, P> Clone for Declaration<T, P> {
    fn clone(&self) -> Self {
        Self {
            env: self.env.clone(),
            variable: Arc::clone(&self.variable),
            marker: PhantomData,
        }
    }
}

impl<T, P> fmt::Debug for Declaration<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Declaration")
            .field("variable", &self.variable)
            .finish_non_exhaustive()
    }
}
