// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                        Error
//!                          |
//!   +---------+------------+-----------+--------+-----------+
//!   |         |            |           |        |           |
//!   v         v            v           v        v           v
//! Finalized Uninitialized Undefined Validation Spec   Duplicate/Unregistered
//!  (misuse)  (misuse)    (collected) (collected)(misuse)    (misuse)
//!                                      |         |
//!                                 ValueError SpecError
//! ```
//!
//! Misuse errors are returned immediately from the API call that caused them.
//! `Undefined` and `Validation` are per-variable configuration problems and are
//! collected for every declared variable during a single initialization pass.
//!
//! Raw environment values never appear in an error's `Display` output. They
//! are carried as a field so the reporter can decide whether echoing them is
//! allowed (it is not for sensitive variables).

use thiserror::Error;

/// Result type using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A variable was declared after the environment was initialized.
    #[error("{name} can not be defined after the environment is initialized.")]
    Finalized { name: String },

    /// A value was read before the environment was initialized.
    #[error("{name} can not be read until the environment is initialized.")]
    Uninitialized { name: String },

    /// A required variable is empty or absent and has no default.
    #[error("{name} is undefined and does not have a default value.")]
    Undefined { name: String },

    /// A raw value failed to unmarshal or violated a constraint.
    #[error("value of {name} is invalid: {cause}")]
    Validation {
        name: String,
        value: String,
        #[source]
        cause: ValueError,
    },

    /// The options of a declaration are inconsistent.
    #[error("specification for {name} is invalid: {cause}")]
    Spec {
        name: String,
        #[source]
        cause: SpecError,
    },

    /// A variable with the same name is already declared.
    #[error("{name} can not be declared more than once.")]
    Duplicate { name: String },

    /// The declaration belongs to a registry that has since been reset.
    #[error("{name} is not declared in this environment.")]
    Unregistered { name: String },
}

impl Error {
    /// Name of the variable the error refers to.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Finalized { name }
            | Self::Uninitialized { name }
            | Self::Undefined { name }
            | Self::Validation { name, .. }
            | Self::Spec { name, .. }
            | Self::Duplicate { name }
            | Self::Unregistered { name } => name,
        }
    }

    /// Returns true for errors caused by the environment rather than by the
    /// way the API was used.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(self, Self::Undefined { .. } | Self::Validation { .. })
    }

    pub(crate) fn spec(name: &str, cause: SpecError) -> Self {
        Self::Spec {
            name: name.to_string(),
            cause,
        }
    }
}

// --- Declaration errors ---

/// Problems with the options passed to a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// A boolean or enumeration literal is the empty string.
    #[error("literals can not be an empty string.")]
    EmptyLiteral,

    /// The same literal appears more than once.
    #[error("literal {literal:?} can not be used multiple times.")]
    ReusedLiteral { literal: String },

    /// The range bounds do not admit any value.
    #[error("range {range} does not contain any values.")]
    EmptyRange { range: String },

    /// A floating point range bound is NaN.
    #[error("range bounds can not be NaN.")]
    NanBound,

    /// An enumeration was declared without members.
    #[error("enumerations must have at least one member.")]
    NoMembers,

    /// An enumeration default is not the value of any member.
    #[error("default value is not a member of the enumeration.")]
    NonMemberDefault,

    /// A composite declaration was given an unusable name part.
    #[error("{part} can not be an empty string.")]
    EmptyName { part: &'static str },
}

// --- Value errors ---

/// Why a raw environment value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The value is not one of the configured boolean literals.
    #[error("expected {}", disjunction(.literals))]
    InvalidBoolean { literals: Vec<String> },

    /// The value is not one of the enumeration members.
    #[error("expected {}", disjunction(.members))]
    InvalidEnum { members: Vec<String> },

    #[error("must be numeric")]
    NotNumeric,

    #[error("must be an integer")]
    NotInteger,

    #[error("must be a big integer")]
    NotBigInteger,

    #[error("must be an unsigned integer")]
    NotUnsigned,

    #[error("must not have leading zeros")]
    LeadingZeros,

    /// The value is outside the declared range.
    #[error("must be {expectation}")]
    OutOfRange { expectation: String },

    /// The value is not valid in the declared binary encoding.
    #[error("must be {encoding} encoded")]
    InvalidEncoding { encoding: &'static str },

    #[error("must be an ISO 8601 duration")]
    InvalidDuration,

    #[error("must be a URL")]
    InvalidUrl,

    /// The URL scheme is not in the allow-list.
    #[error("protocol must be {}", list_or(.protocols))]
    InvalidProtocol { protocols: Vec<String> },
}

/// Formats quoted alternatives as an English disjunction.
///
/// `["a"]` → `"a"`, `["a", "b"]` → `"a" or "b"`, `["a", "b", "c"]` → `"a", "b", or "c"`.
fn disjunction(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("{item:?}")).collect();
    list_or(&quoted)
}

fn list_or(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}
