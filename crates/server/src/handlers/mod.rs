// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod annotate;
pub mod health;
pub mod root;
pub mod version;
