// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::annotator::Annotation;
use config::is_valid_js_identifier;
use maud::{Markup, PreEscaped, html};

/// Markup appended to the page once the annotation is in the body.
///
/// Runs after the hex strip and the explanation panel are committed, so
/// anything it emits can rely on every link target being present.
pub trait PostRenderHook: Send + Sync {
    fn after_commit(&self, annotation: &Annotation) -> Markup;
}

/// Calls a global page routine (the pointer overlay's `init`) after load,
/// if the page defines it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitScript {
    function: String,
}

impl InitScript {
    /// `None` unless `function` is a plain JavaScript identifier.
    pub fn new(function: &str) -> Option<Self> {
        is_valid_js_identifier(function).then(|| Self {
            function: function.to_string(),
        })
    }

    pub fn function(&self) -> &str {
        &self.function
    }
}

impl PostRenderHook for InitScript {
    fn after_commit(&self, _annotation: &Annotation) -> Markup {
        let script = format!(
            "window.addEventListener(\"load\", function () {{ if (typeof window.{0} === \"function\") {{ window.{0}(); }} }});",
            self.function
        );
        html! {
            script { (PreEscaped(script)) }
        }
    }
}
