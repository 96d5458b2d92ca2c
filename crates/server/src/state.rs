// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::annotator::Annotator;
use crate::decoder::{HttpDecoder, TokenSource};
use crate::render::{InitScript, PostRenderHook};
use crate::routes::RouteRegistry;
use config::EthsplainConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: EthsplainConfig,
    pub source: Arc<dyn TokenSource>,
    pub annotator: Annotator,
    pub init_hook: Option<InitScript>,
    pub route_registry: RouteRegistry,
}

impl AppState {
    /// State backed by the decoder service named in `config`.
    pub fn new(config: EthsplainConfig) -> anyhow::Result<Self> {
        let decoder = HttpDecoder::new(config.decoder.parsed_url()?, config.decoder.timeout())?;
        Ok(Self::with_source(config, Arc::new(decoder)))
    }

    /// State with an arbitrary token source, e.g. a fixture.
    pub fn with_source(config: EthsplainConfig, source: Arc<dyn TokenSource>) -> Self {
        let annotator = Annotator::from_config(&config.render);
        let init_hook = config.render.init_hook().and_then(InitScript::new);

        Self {
            config,
            source,
            annotator,
            init_hook,
            route_registry: RouteRegistry::new(),
        }
    }

    pub fn post_render_hooks(&self) -> Vec<&dyn PostRenderHook> {
        self.init_hook
            .iter()
            .map(|hook| hook as &dyn PostRenderHook)
            .collect()
    }
}
