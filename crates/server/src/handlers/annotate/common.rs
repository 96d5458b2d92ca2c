// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::annotator::{Annotation, TokenSequence};
use crate::decoder::{DecodeRequest, fetch_tokens};
use crate::state::AppState;
use serde::Deserialize;

/// Query parameters of the HTML pages.
///
/// Read leniently: only the literal `true` turns verbosity on, anything else
/// turns it off, and unknown parameters are ignored. A query string that
/// does not parse at all (e.g. a repeated key) is treated as empty.
#[derive(Debug, Default, Deserialize)]
pub struct PageQueryParams {
    pub verbose: Option<String>,
}

impl PageQueryParams {
    pub fn verbose_or(&self, default: bool) -> bool {
        match self.verbose.as_deref() {
            Some(value) => value == "true",
            None => default,
        }
    }
}

/// Query parameters of `/v1/annotations/{tx}`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnnotationQueryParams {
    pub verbose: Option<bool>,
}

/// Decode `tx` through the configured source and annotate the result.
/// Decoder failures come back as an empty sequence.
pub(crate) async fn annotate_tx(
    state: &AppState,
    tx: &str,
    verbose: bool,
) -> (DecodeRequest, TokenSequence, Annotation) {
    let request = DecodeRequest::new(tx, verbose);
    let tokens = fetch_tokens(state.source.as_ref(), &request).await;
    let annotation = state.annotator.annotate(&tokens);
    (request, tokens, annotation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_verbose_is_lenient() {
        let params = |v: Option<&str>| PageQueryParams {
            verbose: v.map(str::to_string),
        };

        assert!(params(Some("true")).verbose_or(false));
        assert!(!params(Some("false")).verbose_or(true));
        assert!(!params(Some("yes")).verbose_or(true));
        assert!(!params(Some("")).verbose_or(true));
        assert!(params(None).verbose_or(true));
        assert!(!params(None).verbose_or(false));
    }
}
