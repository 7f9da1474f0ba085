// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Boolean declarations with configurable literals.
//!
//! ```text
//! default literals   true: ["true"]  false: ["false"]
//! custom literals    true: ["y", "yes"]  false: ["n", "no"]
//!
//! declare():  "" anywhere        --> SpecError::EmptyLiteral
//!             literal repeated   --> SpecError::ReusedLiteral
//! read:       unknown literal    --> expected "y", "yes", "n", or "no"
//! ```

use super::{Declarator, Kind, Presence};
use crate::environment::Environment;
use crate::error::{SpecError, ValueError};
use crate::schema::{EnumMember, EnumSchema, Schema};
use crate::variable::Example;

/// The literals accepted for each boolean value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanLiterals {
    true_literals: Vec<String>,
    false_literals: Vec<String>,
}

impl BooleanLiterals {
    pub fn new<T, F>(true_literals: T, false_literals: F) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            true_literals: true_literals.into_iter().map(Into::into).collect(),
            false_literals: false_literals.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn true_literals(&self) -> &[String] {
        &self.true_literals
    }

    #[must_use]
    pub fn false_literals(&self) -> &[String] {
        &self.false_literals
    }

    fn members(&self) -> Vec<EnumMember<bool>> {
        let truthy = self
            .true_literals
            .iter()
            .map(|literal| EnumMember::new(literal.as_str(), true, "true"));
        let falsy = self
            .false_literals
            .iter()
            .map(|literal| EnumMember::new(literal.as_str(), false, "false"));
        truthy.chain(falsy).collect()
    }
}

impl Default for BooleanLiterals {
    fn default() -> Self {
        Self::new(["true"], ["false"])
    }
}

/// A boolean read from a fixed set of literals.
#[derive(Debug, Clone, Default)]
pub struct Boolean {
    literals: BooleanLiterals,
}

impl Kind for Boolean {
    type Native = bool;

    fn schema(&self) -> Result<Schema<bool>, SpecError> {
        let schema = EnumSchema::new(self.literals.members())?
            .with_mismatch(|literals| ValueError::InvalidBoolean { literals });
        Ok(Schema::Enum(schema))
    }

    fn examples(&self) -> Vec<Example> {
        self.literals
            .members()
            .into_iter()
            .map(|member| Example::new(member.literal, member.description))
            .collect()
    }
}

impl<P: Presence> Declarator<'_, Boolean, P> {
    /// Replaces the accepted literals.
    pub fn literals(mut self, literals: BooleanLiterals) -> Self {
        self.kind.literals = literals;
        self
    }
}

impl Environment {
    /// Declares a boolean variable.
    pub fn boolean(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Declarator<'_, Boolean> {
        Declarator::new(self, name, description, Boolean::default())
    }
}
