// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use clap::Parser;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to .env file (e.g., .env.mainnet)
    #[arg(short, long, default_value = ".env")]
    pub env_file: String,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Load the env file into the process environment.
    ///
    /// A missing file is only an error when it was asked for explicitly;
    /// the default `.env` is optional.
    pub fn load_env_file(&self) -> Result<(), ConfigError> {
        let path = Path::new(&self.env_file);
        if !path.exists() && self.env_file == ".env" {
            return Ok(());
        }

        dotenv::from_path(path)
            .map(|_| ())
            .map_err(|source| ConfigError::EnvFileError {
                path: self.env_file.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_default_env_file() {
        let args = Args::parse_from(["ethsplain"]);
        assert_eq!(args.env_file, ".env");
    }

    #[test]
    fn test_missing_explicit_env_file_is_error() {
        let args = Args::parse_from(["ethsplain", "--env-file", "/nonexistent/.env.mainnet"]);
        assert!(args.load_env_file().is_err());
    }

    #[test]
    #[serial]
    fn test_env_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ESP_TEST_ARGS_MARKER=loaded").unwrap();

        let path = file.path().to_string_lossy().to_string();
        let args = Args::parse_from(["ethsplain", "-e", path.as_str()]);
        args.load_env_file().unwrap();

        assert_eq!(std::env::var("ESP_TEST_ARGS_MARKER").unwrap(), "loaded");
    }
}
