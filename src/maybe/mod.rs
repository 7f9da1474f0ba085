// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Explicit presence container.
//!
//! ```text
//! Maybe<Option<T>> as a declared default:
//!   Undefined          no default, the variable is required
//!   Defined(Some(v))   default value v
//!   Defined(None)      the default is "absent", the variable is optional
//! ```

/// A value that is either explicitly defined or not given at all.
///
/// Unlike [`Option`], `Maybe<Option<T>>` can tell "no default given" apart from
/// "default given, and it is the absent value".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Maybe<T> {
    /// A value was given.
    Defined(T),
    /// Nothing was given.
    #[default]
    Undefined,
}

impl<T> Maybe<T> {
    #[must_use]
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }

    /// Converts `&Maybe<T>` into `Maybe<&T>`.
    #[must_use]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Defined(value) => Maybe::Defined(value),
            Self::Undefined => Maybe::Undefined,
        }
    }

    /// Applies `f` to a defined value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Self::Defined(value) => Maybe::Defined(f(value)),
            Self::Undefined => Maybe::Undefined,
        }
    }

    /// Collapses into an [`Option`], losing the distinction described above.
    #[must_use]
    pub fn resolve(self) -> Option<T> {
        match self {
            Self::Defined(value) => Some(value),
            Self::Undefined => None,
        }
    }
}

impl<T> Maybe<Option<T>> {
    /// Returns the default value when one was given and it is not absent.
    #[must_use]
    pub const fn present(&self) -> Option<&T> {
        match self {
            Self::Defined(Some(value)) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Self::Defined)
    }
}
