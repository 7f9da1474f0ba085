// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network port number declarations.
//!
//! ```text
//! "8080"   --> 8080
//! "-1"     --> must be an unsigned integer
//! "08080"  --> must not have leading zeros
//! "0"      --> must be between 1 and 65535
//! "70000"  --> must be between 1 and 65535
//! ```

use super::{Declarator, Kind};
use crate::environment::Environment;
use crate::error::{SpecError, ValueError};
use crate::schema::range::Range;
use crate::schema::{ScalarSchema, Schema};
use crate::variable::Example;

/// A TCP or UDP port number between 1 and 65535.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortNumber;

impl Kind for PortNumber {
    type Native = u16;

    fn schema(&self) -> Result<Schema<u16>, SpecError> {
        let range = Range::new(&(1..=u16::MAX))?;
        let expectation = range.expectation();

        let unmarshal = move |raw: &str| {
            if !raw.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ValueError::NotUnsigned);
            }
            if raw != "0" && raw.starts_with('0') {
                return Err(ValueError::LeadingZeros);
            }
            raw.parse::<u16>().map_err(|_| ValueError::OutOfRange {
                expectation: expectation.clone(),
            })
        };

        Ok(Schema::Scalar(
            ScalarSchema::new("port number", u16::to_string, unmarshal)
                .with_boxed_constraint(range.constraint()),
        ))
    }

    fn examples(&self) -> Vec<Example> {
        vec![Example::new("12345", "a port number")]
    }
}

impl Environment {
    /// Declares a network port number variable.
    pub fn network_port_number(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Declarator<'_, PortNumber> {
        Declarator::new(self, name, description, PortNumber)
    }
}
