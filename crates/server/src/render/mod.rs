// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod hooks;
mod page;

pub use hooks::{InitScript, PostRenderHook};
pub use page::{render_annotation, render_page};
