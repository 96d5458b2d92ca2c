// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::{Context, Result};
use colored::Colorize;
use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;

/// Page and annotation requests wait on the decoder, so allow it some slack.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Readiness probes fail fast when nothing is listening.
const READY_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Client for a running ethsplain service.
#[derive(Clone)]
pub struct TestClient {
    base_url: String,
    client: Client,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub async fn get(&self, path: &str) -> Result<ServiceResponse> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.text().await.context("Failed to read body")?;

        Ok(ServiceResponse {
            url,
            status,
            content_type,
            body,
        })
    }

    pub async fn get_json(&self, path: &str) -> Result<(StatusCode, Value)> {
        let response = self.get(path).await?;
        Ok((response.status, response.json()?))
    }

    /// Poll `/v1/health` once a second until it answers 2xx.
    pub async fn wait_for_ready(&self, attempts: u32) -> Result<()> {
        let url = format!("{}/v1/health", self.base_url);
        println!("Waiting for ethsplain at {} ...", self.base_url.cyan());

        for attempt in 1..=attempts {
            let probe = self
                .client
                .get(&url)
                .timeout(READY_PROBE_TIMEOUT)
                .send()
                .await;

            match probe {
                Ok(response) if response.status().is_success() => {
                    println!("{} ready after {} attempt(s)", "ok:".green().bold(), attempt);
                    return Ok(());
                }
                Ok(response) => println!("  {}/{}: status {}", attempt, attempts, response.status()),
                Err(e) if e.is_connect() => println!("  {}/{}: connection refused", attempt, attempts),
                Err(e) => println!("  {}/{}: {}", attempt, attempts, e),
            }

            if attempt < attempts {
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }

        println!(
            "{} start the service with `cargo run --bin ethsplain`",
            "hint:".cyan().bold()
        );
        anyhow::bail!("{} not ready after {} attempts", self.base_url, attempts)
    }
}

#[derive(Debug)]
pub struct ServiceResponse {
    pub url: String,
    pub status: StatusCode,
    pub content_type: String,
    pub body: String,
}

impl ServiceResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn is_html(&self) -> bool {
        self.content_type.starts_with("text/html")
    }

    pub fn json(&self) -> Result<Value> {
        serde_json::from_str(&self.body).with_context(|| format!("{} did not return JSON", self.url))
    }
}
