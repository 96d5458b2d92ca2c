// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::PostRenderHook;
use crate::annotator::Annotation;
use maud::{DOCTYPE, Markup, html};

/// The annotated hex dump: the clickable hex strip, the spacer and the
/// explanation panel.
///
/// Each hex token carries `helpref="<link>"` and an anchor to `#<link>`;
/// each explanation is a `pre` with `id="<link>"`. The overlay script and the
/// stylesheet key off these names.
pub fn render_annotation(annotation: &Annotation) -> Markup {
    html! {
        svg id="canvas" {}
        div id="command" {
            @for compact in &annotation.compact {
                span.command0 helpref=(compact.link.as_str()) title=(compact.label) {
                    a href=(compact.link.fragment()) { (compact.hex) }
                }
            }
        }
        div style=(format!("height: {}px", annotation.spacer_height)) {}
        div id="help" {
            @for detail in &annotation.detail {
                pre.help-box.help-synopsis id=(detail.link.as_str()) {
                    (detail.label)
                    br;
                    (detail.explanation)
                }
            }
        }
    }
}

/// Full HTML document around [`render_annotation`]. Hooks run in order,
/// after the annotation markup.
pub fn render_page(title: &str, annotation: &Annotation, hooks: &[&dyn PostRenderHook]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body {
                (render_annotation(annotation))
                @for hook in hooks {
                    (hook.after_commit(annotation))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotator::{Annotator, Token, TokenSequence};
    use crate::fixtures;
    use crate::render::InitScript;

    struct Marker(&'static str);

    impl PostRenderHook for Marker {
        fn after_commit(&self, annotation: &Annotation) -> Markup {
            html! { i.marker data-name=(self.0) data-count=(annotation.len()) {} }
        }
    }

    #[test]
    fn test_every_helpref_has_one_target() {
        let annotation = Annotator::default().annotate(&fixtures::placeholder_tokens());
        let html = render_annotation(&annotation).into_string();

        for compact in &annotation.compact {
            let link = compact.link.as_str();
            assert_eq!(html.matches(&format!("helpref=\"{}\"", link)).count(), 1);
            assert_eq!(html.matches(&format!("href=\"#{}\"", link)).count(), 1);
            assert_eq!(html.matches(&format!("id=\"{}\"", link)).count(), 1);
        }
        assert_eq!(html.matches("<pre ").count(), annotation.len());
        assert_eq!(html.matches("class=\"command0\"").count(), annotation.len());
    }

    #[test]
    fn test_spacer_height() {
        let annotation = Annotator::default().annotate(&fixtures::transfer_tokens());
        let html = render_annotation(&annotation).into_string();
        assert!(html.contains("style=\"height: 100px\""));
    }

    #[test]
    fn test_empty_annotation_renders_empty_panels() {
        let html = render_annotation(&Annotation::default()).into_string();
        assert!(html.contains("<div id=\"command\"></div>"));
        assert!(html.contains("<div id=\"help\"></div>"));
        assert!(html.contains("style=\"height: 0px\""));
    }

    #[test]
    fn test_text_is_escaped() {
        let tokens = TokenSequence::new(vec![Token::new(
            "80",
            "Data: <script>",
            "a \"quoted\" & <b>bold</b>\nsecond line",
        )]);
        let html = render_annotation(&Annotator::default().annotate(&tokens)).into_string();

        assert!(!html.contains("<script>"));
        assert!(html.contains("Data: &lt;script&gt;"));
        assert!(html.contains("&amp; &lt;b&gt;bold&lt;/b&gt;\nsecond line"));
        assert!(html.contains("title=\"Data: &lt;script&gt;\""));
    }

    #[test]
    fn test_detail_holds_label_then_explanation() {
        let tokens = TokenSequence::new(vec![Token::new("80", "Nonce: 0", "")]);
        let html = render_annotation(&Annotator::default().annotate(&tokens)).into_string();
        assert!(html.contains("id=\"help-0\""));
        assert!(html.contains(">Nonce: 0<br></pre>"));
    }

    #[test]
    fn test_page_runs_hooks_after_help_panel() {
        let annotation = Annotator::default().annotate(&fixtures::transfer_tokens());
        let init = InitScript::new("init").unwrap();
        let first = Marker("first");
        let second = Marker("second");
        let hooks: [&dyn PostRenderHook; 3] = [&first, &init, &second];

        let html = render_page("ethsplain", &annotation, &hooks).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>ethsplain</title>"));

        let help = html.find("<div id=\"help\">").unwrap();
        let first_at = html.find("data-name=\"first\"").unwrap();
        let script_at = html.find("<script>").unwrap();
        let second_at = html.find("data-name=\"second\"").unwrap();
        assert!(help < first_at && first_at < script_at && script_at < second_at);
        assert!(html.contains("data-count=\"10\""));
    }

    #[test]
    fn test_page_without_hooks_has_no_script() {
        let html = render_page("ethsplain", &Annotation::default(), &[]).into_string();
        assert!(!html.contains("<script"));
    }
}
