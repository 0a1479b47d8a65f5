// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation and watching Gateways.

pub mod apply;
pub mod client;
pub mod watch;

pub use apply::apply_gateway;
pub use client::create_client;
pub use watch::{handle_event, watch_gateways, watch_once, Backoff, EventOutcome};
