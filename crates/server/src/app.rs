// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, middleware};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    logging::http_logger_middleware,
    routes::{self, API_VERSION},
    state::AppState,
};

/// Build the router: pages at the top level, JSON endpoints under `/v1`.
pub fn create_app(state: AppState) -> Router {
    let registry = state.route_registry.clone();

    let api = Router::new()
        .merge(routes::health::routes(&registry))
        .merge(routes::version::routes(&registry))
        .merge(routes::annotate::api_routes(&registry));

    Router::new()
        .merge(routes::root::routes(&registry))
        .merge(routes::annotate::page_routes(&registry))
        .nest(API_VERSION, api)
        .layer(middleware::from_fn(http_logger_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
