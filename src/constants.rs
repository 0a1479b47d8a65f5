// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Field manager used for server-side apply patches
pub const FIELD_MANAGER: &str = "gateway-client";

/// Watch loop configuration
pub mod watch {
    /// Initial retry interval in seconds after a failed watch pass
    pub const RETRY_INTERVAL_SECS: u64 = 5;
    /// Maximum retry interval in seconds (exponential backoff cap)
    pub const RETRY_MAX_INTERVAL_SECS: u64 = 60;
    /// Default server-side watch timeout, must stay below 295
    pub const DEFAULT_TIMEOUT_SECS: u32 = 290;
    /// HTTP status the API server uses when a resource version is too old
    pub const GONE: u16 = 410;
}
