// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Binary data declarations.

use std::fmt;

use base64::Engine;
use base64::engine::DecodePaddingMode;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};

use super::{Declarator, Kind, Presence};
use crate::environment::Environment;
use crate::error::{SpecError, ValueError};
use crate::schema::{ScalarSchema, Schema};
use crate::variable::Example;

/// URL-safe alphabet that accepts input with or without padding.
const URL_SAFE_INDIFFERENT: GeneralPurpose = GeneralPurpose::new(
    &base64::alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const SAMPLE: &[u8] = b"conquistador";

/// Text encoding of a binary value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    #[default]
    Base64,
    Base64Url,
    Hex,
}

impl Encoding {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base64 => "base64",
            Self::Base64Url => "base64url",
            Self::Hex => "hex",
        }
    }

    /// Encodes bytes in this encoding.
    #[must_use]
    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Self::Base64 => STANDARD.encode(bytes),
            Self::Base64Url => URL_SAFE_INDIFFERENT.encode(bytes),
            Self::Hex => hex::encode(bytes),
        }
    }

    /// Decodes text in this encoding.
    ///
    /// # Errors
    ///
    /// [`ValueError::InvalidEncoding`] when the text is malformed.
    pub fn decode(self, raw: &str) -> Result<Vec<u8>, ValueError> {
        let decoded = match self {
            Self::Base64 => STANDARD.decode(raw).ok(),
            Self::Base64Url => URL_SAFE_INDIFFERENT.decode(raw).ok(),
            Self::Hex => hex::decode(raw).ok(),
        };
        decoded.ok_or(ValueError::InvalidEncoding {
            encoding: self.as_str(),
        })
    }

    fn marshal(self) -> fn(&Vec<u8>) -> String {
        match self {
            Self::Base64 => |bytes| Self::Base64.encode(bytes),
            Self::Base64Url => |bytes| Self::Base64Url.encode(bytes),
            Self::Hex => |bytes| Self::Hex.encode(bytes),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw bytes carried in a text encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Binary {
    encoding: Encoding,
}

impl Kind for Binary {
    type Native = Vec<u8>;

    fn schema(&self) -> Result<Schema<Vec<u8>>, SpecError> {
        let encoding = self.encoding;
        let type_name = match encoding {
            Encoding::Base64 => "base64 data",
            Encoding::Base64Url => "base64url data",
            Encoding::Hex => "hex data",
        };
        Ok(Schema::Scalar(ScalarSchema::new(
            type_name,
            encoding.marshal(),
            move |raw: &str| encoding.decode(raw),
        )))
    }

    fn examples(&self) -> Vec<Example> {
        vec![Example::new(
            self.encoding.encode(SAMPLE),
            format!("{} encoded data", self.encoding),
        )]
    }
}

impl<P: Presence> Declarator<'_, Binary, P> {
    /// Selects the text encoding; defaults to standard base64.
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.kind.encoding = encoding;
        self
    }
}

impl Environment {
    /// Declares a binary variable.
    pub fn binary(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Declarator<'_, Binary> {
        Declarator::new(self, name, description, Binary::default())
    }
}
