// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Root endpoint handler.

use crate::state::AppState;
use axum::{Json, extract::State};
use serde_json::{Value, json};

/// Handler for GET /
///
/// Returns service metadata and a list of all available routes.
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "listen": state.config.express.listen_addr(),
        "decoder": state.config.decoder.url,
        "routes": state.route_registry.routes()
    }))
}
