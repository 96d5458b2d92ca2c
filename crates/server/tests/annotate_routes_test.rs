// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Router-level tests for the annotation pages and the JSON endpoint.
//!
//! Requests go through the full app built by `create_app`, with the decoder
//! replaced by in-process token sources.

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{StatusCode, header};
    use config::EthsplainConfig;
    use ethsplain::app::create_app;
    use ethsplain::decoder::{DecodeError, DecodeRequest, FixtureSource, TokenSource};
    use ethsplain::fixtures;
    use ethsplain::state::AppState;
    use ethsplain::{Token, TokenSequence};
    use http_body_util::BodyExt;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    // ========================================================================
    // Test helpers
    // ========================================================================

    /// Records every request and answers with the nonce/gas price pair.
    #[derive(Default)]
    struct RecordingSource {
        requests: Mutex<Vec<DecodeRequest>>,
    }

    #[async_trait]
    impl TokenSource for RecordingSource {
        async fn decode(&self, request: &DecodeRequest) -> Result<TokenSequence, DecodeError> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(TokenSequence::new(vec![
                Token::new("f9aa01", "Nonce", "Long explanation about nonces"),
                Token::new("85012a05f200", "GasPrice", "Long gas price explantion"),
            ]))
        }
    }

    struct DownSource;

    #[async_trait]
    impl TokenSource for DownSource {
        async fn decode(&self, _request: &DecodeRequest) -> Result<TokenSequence, DecodeError> {
            Err(DecodeError::UnexpectedStatus { status: 502 })
        }
    }

    fn app_with(config: EthsplainConfig, source: Arc<dyn TokenSource>) -> Router {
        create_app(AppState::with_source(config, source))
    }

    fn app(source: Arc<dyn TokenSource>) -> Router {
        app_with(EthsplainConfig::default(), source)
    }

    /// Send a GET request and return (status, content type, body).
    async fn get(app: Router, uri: &str) -> (StatusCode, String, String) {
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8_lossy(&body).to_string())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, _, body) = get(app, uri).await;
        let json = serde_json::from_str(&body).expect("Response should be valid JSON");
        (status, json)
    }

    // ========================================================================
    // Pages
    // ========================================================================

    #[tokio::test]
    async fn tx_page_links_tokens_to_explanations() {
        let (status, content_type, html) =
            get(app(Arc::new(RecordingSource::default())), "/tx/0xf86b80").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/html"));
        assert!(html.contains("helpref=\"help-0\""));
        assert!(html.contains("href=\"#help-1\""));
        assert!(html.contains("id=\"help-0\""));
        assert!(html.contains("id=\"help-1\""));
        assert!(html.contains("style=\"height: 20px\""));

        let nonce = html.find("Long explanation about nonces").unwrap();
        let gas = html.find("Long gas price explantion").unwrap();
        assert!(nonce < gas);
    }

    #[tokio::test]
    async fn tx_page_forwards_reference_and_verbosity() {
        let source = Arc::new(RecordingSource::default());
        let app = app(source.clone());

        get(app.clone(), "/tx/0xabc?verbose=true").await;
        get(app.clone(), "/tx/0xdef?verbose=yes").await;
        get(app, "/tx/0x123").await;

        let requests = source.requests.lock().unwrap().clone();
        assert_eq!(
            requests,
            vec![
                DecodeRequest::new("0xabc", true),
                DecodeRequest::new("0xdef", false),
                DecodeRequest::new("0x123", false),
            ]
        );
    }

    #[tokio::test]
    async fn configured_verbosity_is_the_default() {
        let source = Arc::new(RecordingSource::default());
        let mut config = EthsplainConfig::default();
        config.decoder.verbose = true;

        get(app_with(config, source.clone()), "/tx/0xabc").await;
        assert!(source.requests.lock().unwrap()[0].verbose);
    }

    #[tokio::test]
    async fn tx_page_renders_empty_when_decoder_is_down() {
        let (status, _, html) = get(app(Arc::new(DownSource)), "/tx/0xf86b80").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<div id=\"command\"></div>"));
        assert!(html.contains("<div id=\"help\"></div>"));
        assert!(html.contains("style=\"height: 0px\""));
    }

    #[tokio::test]
    async fn repeated_query_key_falls_back_to_configured_verbosity() {
        let source = Arc::new(RecordingSource::default());
        let (status, _, html) =
            get(app(source.clone()), "/tx/0xabc?verbose=true&verbose=false").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("helpref=\"help-0\""));
        assert_eq!(
            source.requests.lock().unwrap().clone(),
            vec![DecodeRequest::new("0xabc", false)]
        );

        let (status, _, html) =
            get(app(Arc::new(DownSource)), "/tx/0xabc?verbose=true&verbose=false").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<div id=\"command\"></div>"));
        assert!(html.contains("<div id=\"help\"></div>"));
    }

    #[tokio::test]
    async fn non_utf8_reference_renders_empty_page() {
        let source = Arc::new(RecordingSource::default());
        let (status, content_type, html) = get(app(source.clone()), "/tx/%FF%FE").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/html"));
        assert!(html.contains("<div id=\"command\"></div>"));
        assert!(html.contains("<div id=\"help\"></div>"));
        assert!(source.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn sample_page_uses_built_in_transfer() {
        let (status, _, html) = get(app(Arc::new(DownSource)), "/sample").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches("class=\"command0\"").count(), 10);
        assert!(html.contains("Gas Limit: 21000"));
        assert!(html.contains("<script>"));
    }

    #[tokio::test]
    async fn render_settings_come_from_config() {
        let mut config = EthsplainConfig::default();
        config.render.link_prefix = "link".to_string();
        config.render.spacer_unit = 4;
        config.render.init_function = String::new();

        let (_, _, html) = get(app_with(config, Arc::new(RecordingSource::default())), "/tx/0x01").await;

        assert!(html.contains("helpref=\"link-0\""));
        assert!(html.contains("id=\"link-1\""));
        assert!(html.contains("style=\"height: 8px\""));
        assert!(!html.contains("<script"));
    }

    // ========================================================================
    // JSON endpoint
    // ========================================================================

    #[tokio::test]
    async fn annotations_endpoint_returns_both_views() {
        let (status, json) = get_json(
            app(Arc::new(RecordingSource::default())),
            "/v1/annotations/0xf86b80?verbose=true",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["tx"], "0xf86b80");
        assert_eq!(json["verbose"], true);
        assert_eq!(json["raw"], "0xf9aa0185012a05f200");
        assert_eq!(json["spacerHeight"], 20);
        assert_eq!(json["compact"][0]["label"], "Nonce");
        assert_eq!(json["compact"][1]["label"], "GasPrice");
        assert_eq!(json["compact"][0]["link"], json["detail"][0]["link"]);
        assert_eq!(json["compact"][1]["link"], json["detail"][1]["link"]);
        assert_ne!(json["compact"][0]["link"], json["compact"][1]["link"]);
    }

    #[tokio::test]
    async fn annotations_endpoint_is_empty_when_decoder_is_down() {
        let (status, json) = get_json(app(Arc::new(DownSource)), "/v1/annotations/0x01").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["compact"], serde_json::json!([]));
        assert_eq!(json["detail"], serde_json::json!([]));
        assert_eq!(json["spacerHeight"], 0);
        assert!(json["raw"].is_null());
    }

    #[tokio::test]
    async fn annotations_endpoint_keeps_duplicates_apart() {
        let source = Arc::new(FixtureSource::new(fixtures::placeholder_tokens()));
        let (_, json) = get_json(app(source), "/v1/annotations/0x01").await;

        assert_eq!(json["compact"][6]["label"], "Signature V");
        assert_eq!(json["compact"][8]["label"], "Signature V");
        assert_eq!(json["compact"][6]["link"], "help-6");
        assert_eq!(json["compact"][8]["link"], "help-8");
        assert!(json["raw"].is_null());
    }

    #[tokio::test]
    async fn annotations_endpoint_rejects_unknown_params() {
        let (status, json) = get_json(
            app(Arc::new(RecordingSource::default())),
            "/v1/annotations/0x01?verbos=true",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }

    // ========================================================================
    // Service endpoints
    // ========================================================================

    #[tokio::test]
    async fn health_and_version() {
        let app = app(Arc::new(DownSource));

        let (status, health) = get_json(app.clone(), "/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(health["status"], "ok");

        let (status, version) = get_json(app, "/v1/version").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(version["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn root_lists_registered_routes() {
        let (status, json) = get_json(app(Arc::new(DownSource)), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["listen"], "127.0.0.1:3000");

        let paths: Vec<&str> = json["routes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["path"].as_str().unwrap())
            .collect();
        for expected in [
            "/",
            "/sample",
            "/tx/{tx}",
            "/v1/health",
            "/v1/version",
            "/v1/annotations/{tx}",
        ] {
            assert!(paths.contains(&expected), "missing route {}", expected);
        }
    }
}
