// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Route registry for endpoint introspection.
//!
//! Routes are recorded as they are added to the router so the root endpoint
//! can list them.

use axum::{Router, routing::MethodRouter};
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// API version prefix for the JSON endpoints.
pub const API_VERSION: &str = "/v1";

/// Information about a registered route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    /// The path pattern (e.g., "/tx/{tx}")
    pub path: String,
    /// The HTTP method (e.g., "get")
    pub method: String,
}

/// A thread-safe registry of routes.
#[derive(Clone, Default)]
pub struct RouteRegistry(Arc<RwLock<Vec<RouteInfo>>>);

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, path: &str, method: &str) {
        if let Ok(mut routes) = self.0.write() {
            routes.push(RouteInfo {
                path: path.to_string(),
                method: method.to_string(),
            });
        }
    }

    pub fn routes(&self) -> Vec<RouteInfo> {
        self.0.read().map(|r| r.clone()).unwrap_or_default()
    }
}

/// Extension trait for registering routes with automatic registry tracking.
pub trait RegisterRoute<S: Clone + Send + Sync + 'static> {
    /// Register a route and track it in the registry.
    ///
    /// # Arguments
    /// * `registry` - The route registry to add the route to
    /// * `prefix` - Prepended to `path` in the registry only, for routers nested under it
    /// * `path` - The route path
    /// * `method` - The HTTP method (e.g., "get")
    /// * `handler` - The route handler
    fn route_registered(
        self,
        registry: &RouteRegistry,
        prefix: &str,
        path: &str,
        method: &str,
        handler: MethodRouter<S>,
    ) -> Self;
}

impl<S: Clone + Send + Sync + 'static> RegisterRoute<S> for Router<S> {
    fn route_registered(
        self,
        registry: &RouteRegistry,
        prefix: &str,
        path: &str,
        method: &str,
        handler: MethodRouter<S>,
    ) -> Self {
        registry.add(&format!("{}{}", prefix, path), method);
        self.route(path, handler)
    }
}
