// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Token annotation.
//!
//! A decoded transaction arrives as an ordered [`TokenSequence`]: one [`Token`]
//! per byte range, each with a short label and a long explanation. The
//! [`Annotator`] turns that sequence into an [`Annotation`], two parallel views
//! of the same tokens:
//!
//! - the compact view, the clickable hex strip
//! - the detail view, the explanation panel
//!
//! The element at index `i` of one view is linked to the element at index `i`
//! of the other through a [`LinkId`] derived only from `i`. Token content never
//! feeds into the identifier, so repeated labels or explanations stay
//! independently addressable and re-rendering the same sequence always yields
//! the same identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Prefix used for link identifiers unless configured otherwise.
pub const DEFAULT_LINK_PREFIX: &str = "help";

/// Spacer pixels reserved per token unless configured otherwise.
pub const DEFAULT_SPACER_UNIT: u32 = 10;

/// One semantically meaningful byte range of a decoded transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The byte range, hex encoded.
    pub hex: String,
    /// Short display name, e.g. "Nonce: 0".
    pub label: String,
    /// Free-form, possibly multi-line, description.
    pub explanation: String,
}

impl Token {
    pub fn new(
        hex: impl Into<String>,
        label: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            hex: hex.into(),
            label: label.into(),
            explanation: explanation.into(),
        }
    }

    /// Decode the byte range. A leading `0x` and surrounding whitespace are ignored.
    pub fn bytes(&self) -> Result<Vec<u8>, hex::FromHexError> {
        let trimmed = self.hex.trim();
        hex::decode(trimmed.strip_prefix("0x").unwrap_or(trimmed))
    }
}

#[derive(Debug, Error)]
#[error("Token {index} does not hold a valid hex byte range: {source}")]
pub struct ReconstructError {
    pub index: usize,
    #[source]
    pub source: hex::FromHexError,
}

/// Ordered tokens of one decoded transaction, in byte order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSequence(Vec<Token>);

impl TokenSequence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }

    /// Concatenate every token's byte range, in order, back into the raw transaction.
    pub fn reconstruct(&self) -> Result<Vec<u8>, ReconstructError> {
        let mut raw = Vec::new();
        for (index, token) in self.0.iter().enumerate() {
            let bytes = token
                .bytes()
                .map_err(|source| ReconstructError { index, source })?;
            raw.extend_from_slice(&bytes);
        }
        Ok(raw)
    }
}

impl From<Vec<Token>> for TokenSequence {
    fn from(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }
}

impl FromIterator<Token> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Identifier joining a compact element to its detail element, `<prefix>-<index>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LinkId(String);

impl LinkId {
    pub fn new(prefix: &str, index: usize) -> Self {
        Self(format!("{}-{}", prefix, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `#fragment` form used by anchors pointing at the detail element.
    pub fn fragment(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Entry of the hex strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactElement {
    pub index: usize,
    pub link: LinkId,
    pub hex: String,
    pub label: String,
}

/// Entry of the explanation panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailElement {
    pub index: usize,
    pub link: LinkId,
    pub label: String,
    pub explanation: String,
}

/// Render-ready pairing of a token sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub compact: Vec<CompactElement>,
    pub detail: Vec<DetailElement>,
    /// Height in pixels reserved between the hex strip and the explanation panel.
    pub spacer_height: u32,
}

impl Annotation {
    pub fn len(&self) -> usize {
        self.compact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compact.is_empty()
    }

    /// Follow a compact element to the explanation it links to.
    pub fn detail_for(&self, compact: &CompactElement) -> Option<&DetailElement> {
        self.detail
            .get(compact.index)
            .filter(|detail| detail.link == compact.link)
    }

    /// Follow a detail element back to its hex token.
    pub fn compact_for(&self, detail: &DetailElement) -> Option<&CompactElement> {
        self.compact
            .get(detail.index)
            .filter(|compact| compact.link == detail.link)
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&CompactElement, &DetailElement)> {
        self.compact.iter().zip(self.detail.iter())
    }
}

/// Builds [`Annotation`]s. Stateless apart from its settings, so one instance
/// can serve every render.
#[derive(Debug, Clone)]
pub struct Annotator {
    link_prefix: String,
    spacer_unit: u32,
}

impl Default for Annotator {
    fn default() -> Self {
        Self {
            link_prefix: DEFAULT_LINK_PREFIX.to_string(),
            spacer_unit: DEFAULT_SPACER_UNIT,
        }
    }
}

impl Annotator {
    pub fn new(link_prefix: impl Into<String>, spacer_unit: u32) -> Self {
        Self {
            link_prefix: link_prefix.into(),
            spacer_unit,
        }
    }

    pub fn from_config(config: &config::RenderConfig) -> Self {
        Self::new(config.link_prefix.clone(), config.spacer_unit)
    }

    pub fn with_prefix(mut self, link_prefix: impl Into<String>) -> Self {
        self.link_prefix = link_prefix.into();
        self
    }

    pub fn with_spacer_unit(mut self, spacer_unit: u32) -> Self {
        self.spacer_unit = spacer_unit;
        self
    }

    pub fn link_prefix(&self) -> &str {
        &self.link_prefix
    }

    pub fn link_id(&self, index: usize) -> LinkId {
        LinkId::new(&self.link_prefix, index)
    }

    /// Spacer height for `count` tokens. Saturates instead of overflowing.
    pub fn spacer_height(&self, count: usize) -> u32 {
        u32::try_from(count)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.spacer_unit)
    }

    pub fn annotate(&self, tokens: &TokenSequence) -> Annotation {
        let mut compact = Vec::with_capacity(tokens.len());
        let mut detail = Vec::with_capacity(tokens.len());

        for (index, token) in tokens.iter().enumerate() {
            let link = self.link_id(index);
            compact.push(CompactElement {
                index,
                link: link.clone(),
                hex: token.hex.clone(),
                label: token.label.clone(),
            });
            detail.push(DetailElement {
                index,
                link,
                label: token.label.clone(),
                explanation: token.explanation.clone(),
            });
        }

        Annotation {
            compact,
            detail,
            spacer_height: self.spacer_height(tokens.len()),
        }
    }
}
