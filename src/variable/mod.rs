// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Declared variables and their resolution.
//!
//! ```text
//! Variable (type-erased, shared as Arc<Variable>)
//!   info:   VariableInfo { name, description, schema, default, sensitive, examples }
//!   reader: Fn(&EnvSource) -> Resolution       (captures the typed Schema<T>)
//!
//! read(raw):
//!   raw != ""  --> schema.parse(raw) --> Some(Value)  | Validation error
//!   raw == ""  --> Defined(Some(d))  --> Some(Value { is_default })
//!              --> Defined(None)     --> None
//!              --> Undefined         --> Undefined error
//! ```


use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::Error;
use crate::maybe::Maybe;
use crate::schema::{Schema, SchemaSummary};
use crate::source::EnvSource;

/// Outcome of resolving one variable: a value, nothing (optional and unset),
/// or an error.
pub type Resolution = Result<Option<Value>, Error>;

type Reader = Box<dyn Fn(&EnvSource) -> Resolution + Send + Sync>;

/// A documented sample of a variable's textual form.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Example {
    pub canonical: String,
    pub description: String,
}

impl Example {
    pub fn new(canonical: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            canonical: canonical.into(),
            description: description.into(),
        }
    }
}

/// Everything about a variable that does not depend on its native type.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableInfo {
    name: String,
    description: String,
    schema: SchemaSummary,
    default: Maybe<Option<String>>,
    is_sensitive: bool,
    examples: Vec<Example>,
}

impl VariableInfo {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn schema(&self) -> &SchemaSummary {
        &self.schema
    }

    /// The declared default in canonical textual form.
    ///
    /// Renderers must not echo it when [`Self::is_sensitive`] is true.
    #[must_use]
    pub const fn default(&self) -> &Maybe<Option<String>> {
        &self.default
    }

    /// True when an unset variable resolves without error.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.default.is_defined()
    }

    #[must_use]
    pub const fn is_sensitive(&self) -> bool {
        self.is_sensitive
    }

    #[must_use]
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }
}

/// A declared environment variable.
pub struct Variable {
    info: VariableInfo,
    reader: Reader,
}

impl Variable {
    /// Builds a variable from a typed schema.
    ///
    /// A "(default)" example is placed in front of `examples` when a present
    /// default exists and the variable is not sensitive.
    pub(crate) fn new<T>(
        name: &str,
        description: &str,
        schema: Schema<T>,
        default: Maybe<Option<T>>,
        is_sensitive: bool,
        examples: Vec<Example>,
    ) -> Self
    where
        T: PartialEq + Clone + Send + Sync + 'static,
    {
        let marshaled_default = default
            .as_ref()
            .map(|value| value.as_ref().map(|v| schema.marshal(v)));

        let mut all_examples = Vec::with_capacity(examples.len() + 1);
        if !is_sensitive && let Some(canonical) = marshaled_default.clone().resolve().flatten() {
            all_examples.push(Example::new(canonical, "(default)"));
        }
        all_examples.extend(examples);

        let info = VariableInfo {
            name: name.to_string(),
            description: description.to_string(),
            schema: schema.summary(),
            default: marshaled_default,
            is_sensitive,
            examples: all_examples,
        };

        let owned_name = name.to_string();
        let reader: Reader = Box::new(move |source: &EnvSource| {
            read(&owned_name, &schema, &default, source.get(&owned_name))
        });

        Self { info, reader }
    }

    #[must_use]
    pub const fn info(&self) -> &VariableInfo {
        &self.info
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Reads and validates this variable from `source`.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for unparsable or out-of-constraint values,
    /// [`Error::Undefined`] for unset required variables.
    pub fn resolve(&self, source: &EnvSource) -> Resolution {
        (self.reader)(source)
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variable")
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

fn read<T>(name: &str, schema: &Schema<T>, default: &Maybe<Option<T>>, raw: &str) -> Resolution
where
    T: PartialEq + Clone + Send + Sync + 'static,
{
    if !raw.is_empty() {
        let native = schema.parse(raw).map_err(|cause| Error::Validation {
            name: name.to_string(),
            value: raw.to_string(),
            cause,
        })?;
        return Ok(Some(Value::new(native, raw.to_string(), false)));
    }

    match default {
        Maybe::Defined(Some(value)) => Ok(Some(Value::new(
            value.clone(),
            schema.marshal(value),
            true,
        ))),
        Maybe::Defined(None) => Ok(None),
        Maybe::Undefined => Err(Error::Undefined {
            name: name.to_string(),
        }),
    }
}

/// A successfully resolved value.
#[derive(Clone)]
pub struct Value {
    native: Arc<dyn Any + Send + Sync>,
    verbatim: String,
    is_default: bool,
}

impl Value {
    fn new<T: Send + Sync + 'static>(native: T, verbatim: String, is_default: bool) -> Self {
        Self {
            native: Arc::new(native),
            verbatim,
            is_default,
        }
    }

    /// The native value, if it has type `T`.
    #[must_use]
    pub fn native<T: 'static>(&self) -> Option<&T> {
        self.native.downcast_ref()
    }

    /// The text the value was read from (the marshaled default when defaulted).
    #[must_use]
    pub fn verbatim(&self) -> &str {
        &self.verbatim
    }

    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.is_default
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("is_default", &self.is_default)
            .finish_non_exhaustive()
    }
}

/// A variable paired with its cached resolution.
#[derive(Debug, Clone)]
pub struct VariableResult {
    pub variable: Arc<Variable>,
    pub result: Resolution,
}

impl VariableResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }
}
