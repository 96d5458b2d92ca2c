// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod args;
mod decoder;
mod error;
mod express;
mod log;
mod render;

pub use args::Args;
pub use decoder::{DecoderConfig, DecoderError};
pub use error::ConfigError;
pub use express::ExpressConfig;
pub use log::LogConfig;
pub use render::{RenderConfig, RenderError, is_valid_js_identifier};

use serde::Deserialize;

/// Prefix shared by every environment variable the service reads.
pub const ENV_PREFIX: &str = "ESP_";

#[derive(Debug, Clone, Default)]
pub struct EthsplainConfig {
    pub express: ExpressConfig,
    pub log: LogConfig,
    pub decoder: DecoderConfig,
    pub render: RenderConfig,
}

/// Flat view of the environment; envy cannot fill nested structs.
#[derive(Debug, Deserialize)]
struct EnvConfig {
    #[serde(default = "express::default_bind_host")]
    express_bind_host: String,
    #[serde(default = "express::default_port")]
    express_port: u16,

    #[serde(default = "log::default_level")]
    log_level: String,
    #[serde(default)]
    log_json: bool,
    #[serde(default)]
    log_strip_ansi: bool,
    #[serde(default)]
    log_write: bool,
    #[serde(default = "log::default_write_path")]
    log_write_path: String,
    #[serde(default = "log::default_write_max_file_size")]
    log_write_max_file_size: u64,
    #[serde(default = "log::default_write_max_files")]
    log_write_max_files: usize,

    #[serde(default = "decoder::default_url")]
    decoder_url: String,
    #[serde(default)]
    decoder_timeout_ms: u64,
    #[serde(default)]
    decoder_verbose: bool,

    #[serde(default = "render::default_link_prefix")]
    render_link_prefix: String,
    #[serde(default = "render::default_spacer_unit")]
    render_spacer_unit: u32,
    #[serde(default = "render::default_init_function")]
    render_init_function: String,
}

impl From<EnvConfig> for EthsplainConfig {
    fn from(env: EnvConfig) -> Self {
        Self {
            express: ExpressConfig {
                bind_host: env.express_bind_host,
                port: env.express_port,
            },
            log: LogConfig {
                level: env.log_level,
                json: env.log_json,
                strip_ansi: env.log_strip_ansi,
                write: env.log_write,
                write_path: env.log_write_path,
                write_max_file_size: env.log_write_max_file_size,
                write_max_files: env.log_write_max_files,
            },
            decoder: DecoderConfig {
                url: env.decoder_url,
                timeout_ms: env.decoder_timeout_ms,
                verbose: env.decoder_verbose,
            },
            render: RenderConfig {
                link_prefix: env.render_link_prefix,
                spacer_unit: env.render_spacer_unit,
                init_function: env.render_init_function,
            },
        }
    }
}

impl EthsplainConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Build and validate the config from `(name, value)` pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env: EnvConfig = envy::prefixed(ENV_PREFIX).from_iter(vars)?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.express.validate()?;
        self.log.validate()?;
        self.decoder.validate()?;
        self.render.validate()?;
        Ok(())
    }
}
