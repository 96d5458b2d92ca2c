// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration from environment: {0}")]
    EnvError(#[from] envy::Error),

    #[error("Failed to load env file '{path}': {source}")]
    EnvFileError {
        path: String,
        #[source]
        source: dotenv::Error,
    },

    #[error("Decoder configuration error: {0}")]
    DecoderError(#[from] crate::decoder::DecoderError),

    #[error("Render configuration error: {0}")]
    RenderError(#[from] crate::render::RenderError),

    #[error("{0}")]
    ValidateError(String),
}
