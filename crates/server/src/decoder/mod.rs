// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Boundary to the upstream transaction decoder.
//!
//! The decoder is the only fallible collaborator of the annotator. Its
//! failures stop at [`fetch_tokens`], which always hands back a usable
//! (possibly empty) [`TokenSequence`].

mod error;
mod http;
mod wire;

pub use error::DecodeError;
pub use http::HttpDecoder;
pub use wire::{DecodeResponse, WireToken};

use crate::annotator::TokenSequence;
use async_trait::async_trait;

/// What to ask the decoder for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeRequest {
    /// Raw transaction hex or a transaction hash.
    pub tx: String,
    /// Ask for the long explanations and RLP length prefixes.
    pub verbose: bool,
}

impl DecodeRequest {
    pub fn new(tx: impl AsRef<str>, verbose: bool) -> Self {
        Self {
            tx: tx.as_ref().trim().to_string(),
            verbose,
        }
    }
}

#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn decode(&self, request: &DecodeRequest) -> Result<TokenSequence, DecodeError>;
}

/// Decode `request`, falling back to an empty sequence on any failure.
pub async fn fetch_tokens(source: &dyn TokenSource, request: &DecodeRequest) -> TokenSequence {
    match source.decode(request).await {
        Ok(tokens) => {
            tracing::debug!(
                tx = %request.tx,
                verbose = request.verbose,
                tokens = tokens.len(),
                "Decoded transaction"
            );
            tokens
        }
        Err(err) => {
            tracing::warn!(
                tx = %request.tx,
                verbose = request.verbose,
                error = %err,
                "Decoder unavailable, rendering empty annotation"
            );
            TokenSequence::empty()
        }
    }
}

/// Serves one fixed sequence for every request.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    tokens: TokenSequence,
}

impl FixtureSource {
    pub fn new(tokens: TokenSequence) -> Self {
        Self { tokens }
    }
}

#[async_trait]
impl TokenSource for FixtureSource {
    async fn decode(&self, _request: &DecodeRequest) -> Result<TokenSequence, DecodeError> {
        Ok(self.tokens.clone())
    }
}
