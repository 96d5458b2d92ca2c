// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::common::{PageQueryParams, annotate_tx};
use crate::fixtures;
use crate::annotator::Annotation;
use crate::render::render_page;
use crate::state::AppState;
use axum::extract::{
    Path, Query, State,
    rejection::{PathRejection, QueryRejection},
};
use maud::Markup;

/// Longest transaction reference shown in a page title.
const TITLE_REF_LEN: usize = 18;

fn page_title(tx: &str) -> String {
    if tx.chars().count() > TITLE_REF_LEN {
        let short: String = tx.chars().take(TITLE_REF_LEN).collect();
        format!("ethsplain {}…", short)
    } else {
        format!("ethsplain {}", tx)
    }
}

/// Handler for GET /tx/{tx}
///
/// Renders the annotated hex dump of a transaction, given as raw hex or as a
/// transaction hash. Always 200: an unreadable path renders an empty page
/// without asking the decoder, an unreadable query string falls back to the
/// configured verbosity, and a decoder failure renders with no tokens.
///
/// Query Parameters:
/// - verbose: `true` for the long explanations and RLP length prefixes
pub async fn get_tx_page(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<PageQueryParams>, QueryRejection>,
) -> Markup {
    let Path(tx) = match path {
        Ok(path) => path,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable transaction reference");
            return render_page("ethsplain", &Annotation::default(), &state.post_render_hooks());
        }
    };

    let params = query.map(|Query(params)| params).unwrap_or_else(|rejection| {
        tracing::debug!(error = %rejection, "Ignoring unreadable page query");
        PageQueryParams::default()
    });
    let verbose = params.verbose_or(state.config.decoder.verbose);
    let (request, _, annotation) = annotate_tx(&state, &tx, verbose).await;

    render_page(
        &page_title(&request.tx),
        &annotation,
        &state.post_render_hooks(),
    )
}

/// Handler for GET /sample
///
/// The annotated page of a built-in ether transfer, no decoder involved.
pub async fn get_sample_page(State(state): State<AppState>) -> Markup {
    let annotation = state.annotator.annotate(&fixtures::transfer_tokens());
    render_page("ethsplain sample", &annotation, &state.post_render_hooks())
}
