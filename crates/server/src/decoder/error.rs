// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

/// Ways the upstream decoder can fail to produce tokens.
///
/// None of these reach the page: [`super::fetch_tokens`] turns every one of
/// them into an empty token sequence.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Transaction reference cannot be empty")]
    EmptyReference,

    #[error("Decoder URL '{0}' cannot carry a path")]
    InvalidBaseUrl(String),

    #[error("Decoder unreachable: {0}")]
    Unavailable(#[from] reqwest::Error),

    #[error("Decoder responded with status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Decoder returned unparseable data: {0}")]
    Unparseable(#[from] serde_json::Error),
}
