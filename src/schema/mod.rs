// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Schemas: how a native type maps to and from its textual form.
//!
//! ```text
//! raw "8080"
//!    |
//!    v
//! Schema::parse
//!    Scalar: unmarshal --> constraint[0] --> constraint[1] --> ... --> T
//!    Enum:   literal lookup ------------------------------------> T
//!    first failure wins (ValueError)
//!
//! Schema::summary --> SchemaSummary::{Scalar <type>, Enum a | b | c}
//! ```

pub mod range;


use std::collections::BTreeSet;

use crate::error::{SpecError, ValueError};

/// A semantic check run after a value was unmarshalled.
pub type Constraint<T> = Box<dyn Fn(&T) -> Result<(), ValueError> + Send + Sync>;

/// Parses raw text into a native value.
pub type Unmarshal<T> = Box<dyn Fn(&str) -> Result<T, ValueError> + Send + Sync>;

/// Describes how a declared type is represented in the environment.
pub enum Schema<T> {
    Scalar(ScalarSchema<T>),
    Enum(EnumSchema<T>),
}

impl<T: PartialEq + Clone> Schema<T> {
    /// Unmarshals `raw` and runs every constraint in declaration order.
    ///
    /// # Errors
    ///
    /// Returns the unmarshal failure, or the first failing constraint.
    pub fn parse(&self, raw: &str) -> Result<T, ValueError> {
        match self {
            Self::Scalar(scalar) => scalar.parse(raw),
            Self::Enum(enumeration) => enumeration.parse(raw),
        }
    }

    /// Renders `value` in its canonical textual form.
    #[must_use]
    pub fn marshal(&self, value: &T) -> String {
        match self {
            Self::Scalar(scalar) => (scalar.marshal)(value),
            Self::Enum(enumeration) => enumeration
                .members
                .iter()
                .find(|member| member.value == *value)
                .map(|member| member.literal.clone())
                .unwrap_or_default(),
        }
    }

    /// Checks that a declared default can be represented.
    ///
    /// # Errors
    ///
    /// [`SpecError::NonMemberDefault`] when an enumeration default is not the
    /// value of any member.
    pub fn check_default(&self, value: &T) -> Result<(), SpecError> {
        match self {
            Self::Scalar(_) => Ok(()),
            Self::Enum(enumeration) => {
                if enumeration.members.iter().any(|member| member.value == *value) {
                    Ok(())
                } else {
                    Err(SpecError::NonMemberDefault)
                }
            }
        }
    }

    /// Type-erased description used for reporting.
    #[must_use]
    pub fn summary(&self) -> SchemaSummary {
        match self {
            Self::Scalar(scalar) => SchemaSummary::Scalar {
                type_name: scalar.type_name,
            },
            Self::Enum(enumeration) => SchemaSummary::Enum {
                members: enumeration
                    .members
                    .iter()
                    .map(|member| member.literal.clone())
                    .collect(),
            },
        }
    }
}

/// A schema for a type with an open set of literals.
pub struct ScalarSchema<T> {
    type_name: &'static str,
    marshal: fn(&T) -> String,
    unmarshal: Unmarshal<T>,
    constraints: Vec<Constraint<T>>,
}

impl<T> ScalarSchema<T> {
    pub fn new(
        type_name: &'static str,
        marshal: fn(&T) -> String,
        unmarshal: impl Fn(&str) -> Result<T, ValueError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            type_name,
            marshal,
            unmarshal: Box::new(unmarshal),
            constraints: Vec::new(),
        }
    }

    /// Appends a constraint; constraints run in the order they were added.
    #[must_use]
    pub fn with_constraint(
        mut self,
        constraint: impl Fn(&T) -> Result<(), ValueError> + Send + Sync + 'static,
    ) -> Self {
        self.constraints.push(Box::new(constraint));
        self
    }

    /// Appends an already boxed constraint.
    #[must_use]
    pub fn with_boxed_constraint(mut self, constraint: Constraint<T>) -> Self {
        self.constraints.push(constraint);
        self
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    fn parse(&self, raw: &str) -> Result<T, ValueError> {
        let value = (self.unmarshal)(raw)?;
        for constraint in &self.constraints {
            constraint(&value)?;
        }
        Ok(value)
    }
}

/// One member of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember<T> {
    pub literal: String,
    pub value: T,
    pub description: String,
}

impl<T> EnumMember<T> {
    pub fn new(literal: impl Into<String>, value: T, description: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            value,
            description: description.into(),
        }
    }
}

/// A schema for a closed set of literals.
pub struct EnumSchema<T> {
    members: Vec<EnumMember<T>>,
    mismatch: fn(Vec<String>) -> ValueError,
}

impl<T: PartialEq> EnumSchema<T> {
    /// Creates an enumeration schema, keeping member order.
    ///
    /// # Errors
    ///
    /// Returns a [`SpecError`] when there are no members, or a literal is empty
    /// or used more than once.
    pub fn new(members: Vec<EnumMember<T>>) -> Result<Self, SpecError> {
        if members.is_empty() {
            return Err(SpecError::NoMembers);
        }
        assert_literals(members.iter().map(|member| member.literal.as_str()))?;
        Ok(Self {
            members,
            mismatch: |members| ValueError::InvalidEnum { members },
        })
    }

    /// Replaces the error produced for unknown literals.
    #[must_use]
    pub fn with_mismatch(mut self, mismatch: fn(Vec<String>) -> ValueError) -> Self {
        self.mismatch = mismatch;
        self
    }

    #[must_use]
    pub fn members(&self) -> &[EnumMember<T>] {
        &self.members
    }

    fn parse(&self, raw: &str) -> Result<T, ValueError>
    where
        T: Clone,
    {
        self.members
            .iter()
            .find(|member| member.literal == raw)
            .map(|member| member.value.clone())
            .ok_or_else(|| {
                (self.mismatch)(
                    self.members
                        .iter()
                        .map(|member| member.literal.clone())
                        .collect(),
                )
            })
    }
}

/// Checks that literals are non-empty and pairwise distinct.
///
/// All literals are checked for emptiness before any is checked for reuse.
///
/// # Errors
///
/// [`SpecError::EmptyLiteral`] or [`SpecError::ReusedLiteral`].
pub fn assert_literals<'a>(literals: impl Iterator<Item = &'a str> + Clone) -> Result<(), SpecError> {
    if literals.clone().any(str::is_empty) {
        return Err(SpecError::EmptyLiteral);
    }

    let mut seen = BTreeSet::new();
    for literal in literals {
        if !seen.insert(literal) {
            return Err(SpecError::ReusedLiteral {
                literal: literal.to_string(),
            });
        }
    }
    Ok(())
}

/// Type-erased schema description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSummary {
    Scalar { type_name: &'static str },
    Enum { members: Vec<String> },
}

impl SchemaSummary {
    /// `<port number>` for scalars, `a | b | c` for enumerations.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Scalar { type_name } => format!("<{type_name}>"),
            Self::Enum { members } => members.join(" | "),
        }
    }
}
