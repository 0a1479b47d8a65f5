// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod gateway;

pub use gateway::{Gateway, GatewayList, GatewaySpec, Port, Protocol, Server, TlsMode, TlsOptions};
