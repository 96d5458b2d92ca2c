// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, routing::get};

use crate::{
    handlers::annotate,
    routes::{API_VERSION, RegisterRoute, RouteRegistry},
    state::AppState,
};

/// HTML pages, served at the top level.
pub fn page_routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(
            registry,
            "",
            "/sample",
            "get",
            get(annotate::get_sample_page),
        )
        .route_registered(registry, "", "/tx/{tx}", "get", get(annotate::get_tx_page))
}

/// JSON endpoints, nested under [`API_VERSION`].
pub fn api_routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new().route_registered(
        registry,
        API_VERSION,
        "/annotations/{tx}",
        "get",
        get(annotate::get_annotations),
    )
}
