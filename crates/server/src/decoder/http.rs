// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{DecodeError, DecodeRequest, TokenSource, wire::DecodeResponse};
use crate::annotator::TokenSequence;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// [`TokenSource`] backed by the decoder service.
///
/// Issues `GET {base}/{tx}?verbose={true|false}` and reads the token list
/// from the JSON body.
#[derive(Debug, Clone)]
pub struct HttpDecoder {
    client: Client,
    base_url: Url,
}

impl HttpDecoder {
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn request_url(&self, request: &DecodeRequest) -> Result<Url, DecodeError> {
        if request.tx.is_empty() {
            return Err(DecodeError::EmptyReference);
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DecodeError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(&request.tx);
        url.query_pairs_mut()
            .append_pair("verbose", if request.verbose { "true" } else { "false" });

        Ok(url)
    }
}

#[async_trait]
impl TokenSource for HttpDecoder {
    async fn decode(&self, request: &DecodeRequest) -> Result<TokenSequence, DecodeError> {
        let url = self.request_url(request)?;
        tracing::debug!(url = %url, "Requesting decoded transaction");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DecodeError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: DecodeResponse = serde_json::from_str(&body)?;
        Ok(parsed.into_sequence())
    }
}
