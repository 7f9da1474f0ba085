// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! String declarations.

use super::{Declarator, Kind};
use crate::environment::Environment;
use crate::error::SpecError;
use crate::schema::{ScalarSchema, Schema};
use crate::variable::Example;

/// Any non-empty text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

impl Kind for Text {
    type Native = String;

    fn schema(&self) -> Result<Schema<String>, SpecError> {
        Ok(Schema::Scalar(ScalarSchema::new(
            "string",
            String::clone,
            |raw: &str| Ok(raw.to_string()),
        )))
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new("conquistador", "any value"),
            Example::new("alabaster parakeet", "some values may need escaping"),
        ]
    }
}

impl Environment {
    /// Declares a string variable.
    pub fn string(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Declarator<'_, Text> {
        Declarator::new(self, name, description, Text)
    }
}
