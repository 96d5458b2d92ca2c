// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecoderError {
    #[error("Decoder URL cannot be empty")]
    EmptyUrl,

    #[error("Invalid decoder URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid decoder URL scheme '{0}'. Must be http:// or https://")]
    InvalidScheme(String),
}

/// Where the upstream transaction decoder lives and how to call it.
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Base URL of the decoder service
    ///
    /// Env: ESP_DECODER_URL
    /// Valid schemes: http://, https://
    /// Default: http://127.0.0.1:8080
    pub url: String,

    /// Per-request timeout in milliseconds, 0 disables it
    ///
    /// Env: ESP_DECODER_TIMEOUT_MS
    /// Default: 0
    pub timeout_ms: u64,

    /// Verbosity used when a request does not say
    ///
    /// Env: ESP_DECODER_VERBOSE
    /// Default: false
    pub verbose: bool,
}

pub(crate) fn default_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

impl DecoderConfig {
    pub(crate) fn validate(&self) -> Result<(), DecoderError> {
        self.parsed_url().map(|_| ())
    }

    /// The decoder base URL, parsed and scheme-checked.
    pub fn parsed_url(&self) -> Result<url::Url, DecoderError> {
        if self.url.is_empty() {
            return Err(DecoderError::EmptyUrl);
        }

        let parsed = url::Url::parse(&self.url).map_err(|source| DecoderError::InvalidUrl {
            url: self.url.clone(),
            source,
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            scheme => Err(DecoderError::InvalidScheme(scheme.to_string())),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_ms: 0,
            verbose: false,
        }
    }
}
