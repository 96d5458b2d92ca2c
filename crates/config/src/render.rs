// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(
        "Invalid link prefix '{0}': must start with [a-zA-Z] and contain only [a-zA-Z0-9_-]"
    )]
    InvalidLinkPrefix(String),

    #[error("Spacer unit must be greater than 0")]
    ZeroSpacerUnit,

    #[error("Invalid init function name '{0}': must be a plain JavaScript identifier")]
    InvalidInitFunction(String),
}

/// Settings for the annotated transaction page.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Prefix of the link identifiers joining hex tokens to their explanations
    ///
    /// Env: ESP_RENDER_LINK_PREFIX
    /// Default: help
    pub link_prefix: String,

    /// Pixels of spacer reserved per token below the hex strip
    ///
    /// Env: ESP_RENDER_SPACER_UNIT
    /// Default: 10
    pub spacer_unit: u32,

    /// Global routine the page calls once the annotation is on screen.
    /// Empty disables the hook.
    ///
    /// Env: ESP_RENDER_INIT_FUNCTION
    /// Default: init
    pub init_function: String,
}

pub(crate) fn default_link_prefix() -> String {
    "help".to_string()
}

pub(crate) fn default_spacer_unit() -> u32 {
    10
}

pub(crate) fn default_init_function() -> String {
    "init".to_string()
}

/// Identifiers are used verbatim as HTML ids and in `#fragment` links.
fn is_valid_link_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Whether `name` can be called as `window.<name>()` without quoting.
pub fn is_valid_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

impl RenderConfig {
    pub(crate) fn validate(&self) -> Result<(), RenderError> {
        if !is_valid_link_prefix(&self.link_prefix) {
            return Err(RenderError::InvalidLinkPrefix(self.link_prefix.clone()));
        }

        if self.spacer_unit == 0 {
            return Err(RenderError::ZeroSpacerUnit);
        }

        if !self.init_function.is_empty() && !is_valid_js_identifier(&self.init_function) {
            return Err(RenderError::InvalidInitFunction(self.init_function.clone()));
        }

        Ok(())
    }

    /// The init routine to call after render, if the hook is enabled.
    pub fn init_hook(&self) -> Option<&str> {
        (!self.init_function.is_empty()).then_some(self.init_function.as_str())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            link_prefix: default_link_prefix(),
            spacer_unit: default_spacer_unit(),
            init_function: default_init_function(),
        }
    }
}
