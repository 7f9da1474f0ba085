// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Numeric range constraints.
//!
//! ```text
//! 1..=10      "must be between 1 and 10"
//! 0..         "must be >= 0"
//! ..100       "must be < 100"
//! (Excluded(0), Included(1))  "must be > 0 and <= 1"
//! 10..=1      SpecError::EmptyRange "[10, 1]"
//! (Excluded(1), Excluded(2))  SpecError::EmptyRange "(1, 2)" for integers
//! ```

use std::fmt::Display;
use std::ops::{Bound, RangeBounds};

use super::Constraint;
use crate::error::{SpecError, ValueError};

/// Types that can be range checked.
pub trait Bounded: PartialOrd + Copy + Display + Send + Sync + 'static {
    fn is_nan(&self) -> bool {
        false
    }

    /// The next representable value, for discrete types only.
    fn successor(self) -> Option<Self> {
        None
    }
}

macro_rules! discrete {
    ($($ty:ty),*) => {
        $(impl Bounded for $ty {
            fn successor(self) -> Option<Self> {
                self.checked_add(1)
            }
        })*
    };
}

discrete!(i64, i128, u16);

impl Bounded for f64 {
    fn is_nan(&self) -> bool {
        f64::is_nan(*self)
    }
}

/// A validated pair of range bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<T> {
    lower: Bound<T>,
    upper: Bound<T>,
}

impl<T: Bounded> Range<T> {
    /// Validates `bounds`.
    ///
    /// # Errors
    ///
    /// [`SpecError::NanBound`] for NaN bounds and [`SpecError::EmptyRange`]
    /// when no value can satisfy both bounds.
    pub fn new(bounds: &impl RangeBounds<T>) -> Result<Self, SpecError> {
        let range = Self {
            lower: bounds.start_bound().cloned(),
            upper: bounds.end_bound().cloned(),
        };

        if [range.lower, range.upper].iter().any(|bound| match bound {
            Bound::Included(v) | Bound::Excluded(v) => v.is_nan(),
            Bound::Unbounded => false,
        }) {
            return Err(SpecError::NanBound);
        }

        let is_empty = match (range.lower, range.upper) {
            (Bound::Included(min), Bound::Included(max)) => min > max,
            (Bound::Excluded(min), Bound::Excluded(max)) => {
                min >= max || min.successor().is_some_and(|next| next >= max)
            }
            (Bound::Included(min), Bound::Excluded(max))
            | (Bound::Excluded(min), Bound::Included(max)) => min >= max,
            _ => false,
        };
        if is_empty {
            return Err(SpecError::EmptyRange {
                range: range.interval(),
            });
        }

        Ok(range)
    }

    /// Returns true when neither end is bounded.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        matches!((self.lower, self.upper), (Bound::Unbounded, Bound::Unbounded))
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        let above = match self.lower {
            Bound::Included(min) => *value >= min,
            Bound::Excluded(min) => *value > min,
            Bound::Unbounded => true,
        };
        let below = match self.upper {
            Bound::Included(max) => *value <= max,
            Bound::Excluded(max) => *value < max,
            Bound::Unbounded => true,
        };
        above && below
    }

    /// Human readable requirement, without the leading "must be".
    #[must_use]
    pub fn expectation(&self) -> String {
        let lower = match self.lower {
            Bound::Included(min) => Some(format!(">= {min}")),
            Bound::Excluded(min) => Some(format!("> {min}")),
            Bound::Unbounded => None,
        };
        let upper = match self.upper {
            Bound::Included(max) => Some(format!("<= {max}")),
            Bound::Excluded(max) => Some(format!("< {max}")),
            Bound::Unbounded => None,
        };

        match (self.lower, self.upper, lower, upper) {
            (Bound::Included(min), Bound::Included(max), _, _) => {
                format!("between {min} and {max}")
            }
            (_, _, Some(lower), Some(upper)) => format!("{lower} and {upper}"),
            (_, _, Some(only), None) | (_, _, None, Some(only)) => only,
            (_, _, None, None) => "any value".to_string(),
        }
    }

    /// Builds the constraint enforcing this range.
    #[must_use]
    pub fn constraint(self) -> Constraint<T> {
        Box::new(move |value: &T| {
            if self.contains(value) {
                Ok(())
            } else {
                Err(ValueError::OutOfRange {
                    expectation: self.expectation(),
                })
            }
        })
    }

    fn interval(&self) -> String {
        let open = match self.lower {
            Bound::Included(min) => format!("[{min}"),
            Bound::Excluded(min) => format!("({min}"),
            Bound::Unbounded => "(-inf".to_string(),
        };
        let close = match self.upper {
            Bound::Included(max) => format!("{max}]"),
            Bound::Excluded(max) => format!("{max})"),
            Bound::Unbounded => "inf)".to_string(),
        };
        format!("{open}, {close}")
    }
}
