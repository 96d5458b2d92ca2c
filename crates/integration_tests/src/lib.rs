// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod client;

pub use client::{ServiceResponse, TestClient};

/// Test configuration constants
pub mod constants {
    /// Maximum number of retries when waiting for the API to be ready (in seconds)
    pub const API_READY_TIMEOUT_SECONDS: u32 = 30;

    /// Base URL used when `API_URL` is not set
    pub const DEFAULT_API_URL: &str = "http://localhost:3000";
}

/// Base URL of the service under test, from `API_URL`.
pub fn api_url() -> String {
    std::env::var("API_URL").unwrap_or_else(|_| constants::DEFAULT_API_URL.to_string())
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
