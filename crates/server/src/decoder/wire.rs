// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Response body of the decoder service.
//!
//! The decoder emits Go-style field names (`Tokens`, `Hex`, `Text`, `More`).
//! The lower-case spellings are accepted too. Every field is optional on the
//! wire: a token missing a field is shown with that field empty rather than
//! dropping the whole response.

use crate::annotator::{Token, TokenSequence};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct DecodeResponse {
    #[serde(
        rename = "Tokens",
        alias = "tokens",
        default,
        deserialize_with = "lenient_tokens"
    )]
    pub tokens: Option<Vec<WireToken>>,
}

/// One element of `Tokens`. A field that is absent or not a string is `None`;
/// an element that is not an object has every field `None`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WireToken {
    pub hex: Option<String>,
    pub text: Option<String>,
    pub more: Option<String>,
}

fn lenient_tokens<'de, D>(deserializer: D) -> Result<Option<Vec<WireToken>>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    Ok(items.map(|items| items.iter().map(WireToken::from_value).collect()))
}

impl WireToken {
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str, alias: &str| {
            value
                .get(name)
                .or_else(|| value.get(alias))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Self {
            hex: field("Hex", "hex"),
            text: field("Text", "text"),
            more: field("More", "more"),
        }
    }

    fn is_complete(&self) -> bool {
        self.hex.is_some() && self.text.is_some() && self.more.is_some()
    }
}

impl From<WireToken> for Token {
    fn from(wire: WireToken) -> Self {
        Token {
            hex: wire.hex.unwrap_or_default(),
            label: wire.text.unwrap_or_default(),
            explanation: wire.more.unwrap_or_default(),
        }
    }
}

impl DecodeResponse {
    pub fn into_sequence(self) -> TokenSequence {
        let tokens = self.tokens.unwrap_or_default();

        let incomplete = tokens.iter().filter(|t| !t.is_complete()).count();
        if incomplete > 0 {
            tracing::debug!(
                incomplete,
                total = tokens.len(),
                "Decoder tokens with missing fields shown with empty values"
            );
        }

        tokens.into_iter().map(Token::from).collect()
    }
}
