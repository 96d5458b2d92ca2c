// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::common::{AnnotationQueryParams, annotate_tx};
use crate::annotator::{Annotation, TokenSequence};
use crate::extractors::JsonQuery;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

/// Response for GET /v1/annotations/{tx}
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationResponse {
    /// The transaction reference as requested.
    pub tx: String,
    pub verbose: bool,
    /// The tokens' byte ranges joined back into the raw transaction, `0x`
    /// prefixed. `None` when there are no tokens or a range is not valid hex.
    pub raw: Option<String>,
    #[serde(flatten)]
    pub annotation: Annotation,
}

fn raw_transaction(tokens: &TokenSequence) -> Option<String> {
    if tokens.is_empty() {
        return None;
    }
    match tokens.reconstruct() {
        Ok(raw) => Some(format!("0x{}", hex::encode(raw))),
        Err(err) => {
            tracing::debug!(error = %err, "Tokens do not reconstruct a transaction");
            None
        }
    }
}

/// Handler for GET /v1/annotations/{tx}
///
/// The annotation behind the `/tx/{tx}` page as JSON: `compact`, `detail`
/// and `spacerHeight`, plus the reconstructed raw transaction.
///
/// Query Parameters:
/// - verbose: boolean, defaults to the configured verbosity
pub async fn get_annotations(
    State(state): State<AppState>,
    Path(tx): Path<String>,
    JsonQuery(params): JsonQuery<AnnotationQueryParams>,
) -> Json<AnnotationResponse> {
    let verbose = params.verbose.unwrap_or(state.config.decoder.verbose);
    let (request, tokens, annotation) = annotate_tx(&state, &tx, verbose).await;

    Json(AnnotationResponse {
        tx: request.tx,
        verbose: request.verbose,
        raw: raw_transaction(&tokens),
        annotation,
    })
}
