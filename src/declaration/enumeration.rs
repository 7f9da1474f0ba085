// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Enumeration declarations.

use super::{Declarator, Kind};
use crate::environment::Environment;
use crate::error::SpecError;
use crate::schema::{EnumMember, EnumSchema, Schema};
use crate::variable::Example;

/// One of a closed set of literals, each mapped to a native value.
#[derive(Debug, Clone)]
pub struct Enumeration<T> {
    members: Vec<EnumMember<T>>,
}

impl<T> Kind for Enumeration<T>
where
    T: PartialEq + Clone + Send + Sync + 'static,
{
    type Native = T;

    fn schema(&self) -> Result<Schema<T>, SpecError> {
        Ok(Schema::Enum(EnumSchema::new(self.members.clone())?))
    }

    fn examples(&self) -> Vec<Example> {
        self.members
            .iter()
            .map(|member| Example::new(member.literal.as_str(), member.description.as_str()))
            .collect()
    }
}

impl Environment {
    /// Declares an enumeration variable.
    ///
    /// Members keep their order in summaries and error messages.
    pub fn enumeration<T>(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        members: Vec<EnumMember<T>>,
    ) -> Declarator<'_, Enumeration<T>>
    where
        T: PartialEq + Clone + Send + Sync + 'static,
    {
        Declarator::new(self, name, description, Enumeration { members })
    }
}
