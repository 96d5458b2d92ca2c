// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod annotator;
pub mod app;
pub mod decoder;
pub mod extractors;
pub mod fixtures;
pub mod handlers;
pub mod logging;
pub mod render;
pub mod routes;
pub mod state;

pub use annotator::{
    Annotation, Annotator, CompactElement, DetailElement, LinkId, Token, TokenSequence,
};
