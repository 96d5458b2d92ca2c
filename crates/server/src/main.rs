// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use config::{Args, EthsplainConfig};
use ethsplain::{app, logging, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    args.load_env_file()?;

    let config = EthsplainConfig::from_env()?;
    let _log_guard = logging::init(logging::LoggingConfig::from(&config.log))?;

    let listen_addr = config.express.listen_addr();
    tracing::info!("Log level: {}", config.log.level);
    tracing::info!("Decoder URL: {}", config.decoder.url);

    let state = AppState::new(config)?;
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(listen_addr.as_str()).await?;
    tracing::info!("Starting server on {}", listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
