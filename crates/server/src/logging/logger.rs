// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use rolling_file::*;
use std::path::PathBuf;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to create log directory or file appender: {0}")]
    IoError(#[from] std::io::Error),
}

/// Configuration for logging initialization
pub struct LoggingConfig<'a> {
    pub level: &'a str,
    pub json_format: bool,
    pub strip_ansi: bool,
    pub write_to_file: bool,
    pub write_path: &'a str,
    pub write_max_file_size: u64,
    pub write_max_files: usize,
}

impl<'a> From<&'a config::LogConfig> for LoggingConfig<'a> {
    fn from(log: &'a config::LogConfig) -> Self {
        Self {
            level: &log.level,
            json_format: log.json,
            strip_ansi: log.strip_ansi,
            write_to_file: log.write,
            write_path: &log.write_path,
            write_max_file_size: log.write_max_file_size,
            write_max_files: log.write_max_files,
        }
    }
}

/// Translate a configured level into an `EnvFilter` directive.
///
/// `http` is not a tracing level: it keeps everything at `info` and turns on
/// the request logger, which emits successful requests at `debug`.
pub fn filter_directive(level: &str) -> &str {
    if level == "http" { "info,http=debug" } else { level }
}

/// Initialize tracing/logging with the specified configuration
///
/// When file output is enabled the returned guard flushes the background
/// writer on drop; keep it alive for the lifetime of the program.
///
/// # Examples
/// ```no_run
/// use ethsplain::logging::{self, LoggingConfig};
///
/// let _guard = logging::init(LoggingConfig {
///     level: "debug",
///     json_format: false,
///     strip_ansi: false,
///     write_to_file: false,
///     write_path: "./logs",
///     write_max_file_size: 5242880,
///     write_max_files: 5,
/// })?;
/// # Ok::<(), ethsplain::logging::LoggingError>(())
/// ```
///
/// # Log Rotation
/// When a log file reaches `write_max_file_size`, it is rotated:
/// - Current: logs.log
/// - After rotation: logs.log.1, logs.log.2, etc.
/// - Keeps up to `write_max_files` files including the current one
pub fn init(config: LoggingConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter = EnvFilter::try_new(filter_directive(config.level)).map_err(|source| {
        LoggingError::InvalidLogLevel {
            level: config.level.to_string(),
            source,
        }
    })?;

    let registry = tracing_subscriber::registry();

    if !config.write_to_file {
        if config.json_format {
            registry.with(filter).with(fmt::layer().json()).init();
        } else {
            let fmt_layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(!config.strip_ansi);

            registry.with(filter).with(fmt_layer).init();
        }
        return Ok(None);
    }

    std::fs::create_dir_all(config.write_path)?;

    let log_file_path = PathBuf::from(config.write_path).join("logs.log");
    // write_max_files counts the current file too
    let rotated_files_count = config.write_max_files.saturating_sub(1);
    let file_appender = BasicRollingFileAppender::new(
        log_file_path,
        RollingConditionBasic::new().max_size(config.write_max_file_size),
        rotated_files_count,
    )?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    if config.json_format {
        let console_layer = fmt::layer().json();
        let file_layer = fmt::layer().json().with_writer(non_blocking);

        registry
            .with(filter)
            .with(console_layer)
            .with(file_layer)
            .init();
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!config.strip_ansi);

        let file_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false) // Never use ANSI in files
            .with_writer(non_blocking);

        registry
            .with(filter)
            .with(console_layer)
            .with(file_layer)
            .init();
    }

    Ok(Some(guard))
}
