// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! URL declarations.
//!
//! ```text
//! base = None                       "https://a.example/x"  --> https://a.example/x
//!                                   "x/y"                  --> must be a URL
//! base = https://a.example/api/     "v1/items"             --> https://a.example/api/v1/items
//! protocols = ["https:"]            "http://a.example/"    --> protocol must be https:
//! ```

use ::url::Url;

use super::{Declarator, Kind, Presence};
use crate::environment::Environment;
use crate::error::{SpecError, ValueError};
use crate::schema::{ScalarSchema, Schema};
use crate::variable::Example;

/// An absolute URL, optionally resolved against a base.
#[derive(Debug, Clone, Default)]
pub struct Link {
    base: Option<Url>,
    protocols: Vec<String>,
}

impl Kind for Link {
    type Native = Url;

    fn schema(&self) -> Result<Schema<Url>, SpecError> {
        let base = self.base.clone();
        let unmarshal = move |raw: &str| {
            let parsed = match &base {
                Some(base) => base.join(raw),
                None => Url::parse(raw),
            };
            parsed.map_err(|_| ValueError::InvalidUrl)
        };

        let mut schema = ScalarSchema::new("URL", Url::to_string, unmarshal);
        if !self.protocols.is_empty() {
            let protocols = self.protocols.clone();
            schema = schema.with_constraint(move |url: &Url| {
                let protocol = format!("{}:", url.scheme());
                if protocols.contains(&protocol) {
                    Ok(())
                } else {
                    Err(ValueError::InvalidProtocol {
                        protocols: protocols.clone(),
                    })
                }
            });
        }
        Ok(Schema::Scalar(schema))
    }

    fn examples(&self) -> Vec<Example> {
        let scheme = self
            .protocols
            .first()
            .map_or("https", |protocol| protocol.trim_end_matches(':'));
        let mut examples = vec![Example::new(
            format!("{scheme}://host.example.org/path/to/resource"),
            "an absolute URL",
        )];
        if self.base.is_some() {
            examples.push(Example::new(
                "path/to/resource",
                "a URL relative to the base URL",
            ));
        }
        examples
    }
}

impl<P: Presence> Declarator<'_, Link, P> {
    /// Resolves relative values against `base`.
    pub fn base(mut self, base: Url) -> Self {
        self.kind.base = Some(base);
        self
    }

    /// Restricts the accepted schemes, written as `"https:"` or `"https"`.
    pub fn protocols<I>(mut self, protocols: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.kind.protocols = protocols
            .into_iter()
            .map(|protocol| {
                let protocol = protocol.as_ref().to_ascii_lowercase();
                if protocol.ends_with(':') {
                    protocol
                } else {
                    format!("{protocol}:")
                }
            })
            .collect();
        self
    }
}

impl Environment {
    /// Declares a URL variable.
    pub fn url(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Declarator<'_, Link> {
        Declarator::new(self, name, description, Link::default())
    }
}
