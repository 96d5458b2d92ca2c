// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod common;
mod get_annotations;
mod get_pages;

pub use common::{AnnotationQueryParams, PageQueryParams};
pub use get_annotations::{AnnotationResponse, get_annotations};
pub use get_pages::{get_sample_page, get_tx_page};
