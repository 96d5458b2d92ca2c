// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use std::net::IpAddr;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct ExpressConfig {
    /// Address to bind the HTTP server to
    ///
    /// Env: ESP_EXPRESS_BIND_HOST
    /// Default: 127.0.0.1
    pub bind_host: String,

    /// Port to bind the HTTP server to
    ///
    /// Env: ESP_EXPRESS_PORT
    /// Default: 3000
    pub port: u16,
}

pub(crate) fn default_bind_host() -> String {
    "127.0.0.1".to_string()
}

pub(crate) fn default_port() -> u16 {
    3000
}

/// Validates that a string is a valid host (IP address or hostname)
fn is_valid_host(host: &str) -> bool {
    if IpAddr::from_str(host).is_ok() {
        return true;
    }

    // RFC 1123 hostname
    if host.is_empty() || host.len() > 253 {
        return false;
    }

    host.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}

impl ExpressConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::ValidateError(
                "Express port cannot be 0".to_string(),
            ));
        }

        if !is_valid_host(&self.bind_host) {
            return Err(ConfigError::ValidateError(format!(
                "Invalid bind host '{}'",
                self.bind_host
            )));
        }

        Ok(())
    }

    /// `host:port` string the listener binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}

impl Default for ExpressConfig {
    fn default() -> Self {
        Self {
            bind_host: default_bind_host(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_express_config() {
        let config = ExpressConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_host, "127.0.0.1");
        assert_eq!(config.listen_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_validate_port_zero() {
        let config = ExpressConfig {
            port: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_port_valid() {
        let config = ExpressConfig {
            port: 8000,
            ..Default::default()
        };
        assert!(config.validate().is_ok())
    }

    #[test]
    fn test_validate_hosts() {
        for host in ["0.0.0.0", "::1", "localhost", "ethsplain.internal"] {
            let config = ExpressConfig {
                bind_host: host.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "Host {} should be valid", host);
        }

        for host in ["", "-bad.host", "under_score"] {
            let config = ExpressConfig {
                bind_host: host.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "Host {} should be invalid", host);
        }
    }
}
