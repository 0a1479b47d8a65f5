// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! List-then-watch loop reporting Gateway changes

use crate::client::Gateways;
use crate::config::Config;
use crate::constants::watch::{GONE, RETRY_INTERVAL_SECS, RETRY_MAX_INTERVAL_SECS};
use crate::error::{GatewayClientError, Result};
use crate::types::gateway::Gateway;
use futures::TryStreamExt;
use kube::api::WatchEvent;
use kube::ResourceExt;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

/// What the watch loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Continue,
    /// The resource version expired, list again before watching
    Relist,
}

/// Exponential backoff between failed watch passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    interval: u64,
}

impl Backoff {
    pub fn new() -> Self {
        Self {
            interval: RETRY_INTERVAL_SECS,
        }
    }

    /// Delay to wait now, doubling the following one up to the cap
    pub fn next_delay(&mut self) -> Duration {
        let delay = Duration::from_secs(self.interval);
        self.interval = (self.interval * 2).min(RETRY_MAX_INTERVAL_SECS);
        delay
    }

    pub fn reset(&mut self) {
        self.interval = RETRY_INTERVAL_SECS;
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new()
    }
}

/// Watch the gateways forever, reconnecting with exponential backoff on failure.
pub async fn watch_gateways(gateways: &Gateways, config: &Config) -> Result<()> {
    let mut resource_version = None;
    let mut backoff = Backoff::new();

    loop {
        match watch_once(gateways, config, &mut resource_version).await {
            Ok(()) => backoff.reset(),
            Err(e) => {
                let delay = backoff.next_delay();
                warn!(
                    "Watching gateways in {} failed: {}, retrying in {} seconds...",
                    gateways.namespace(),
                    e,
                    delay.as_secs()
                );
                // Relist on the next pass
                resource_version = None;
                sleep(delay).await;
            }
        }
    }
}

/// Run a single watch pass, listing first when no resource version is known.
///
/// Returns once the server closes the stream or the resource version expires.
#[instrument(skip(gateways, config, resource_version), fields(namespace = %gateways.namespace()))]
pub async fn watch_once(
    gateways: &Gateways,
    config: &Config,
    resource_version: &mut Option<String>,
) -> Result<()> {
    let version = match resource_version.as_ref() {
        Some(version) => version.clone(),
        None => {
            let list = gateways.list(&config.list_params()).await?;
            info!("Found {} gateways", list.items.len());
            for gateway in &list.items {
                info!("Gateway {} hosts={:?}", gateway.name_any(), gateway.hosts());
            }
            let version = list
                .metadata
                .resource_version
                .unwrap_or_else(|| "0".to_string());
            *resource_version = Some(version.clone());
            version
        }
    };

    let mut events = gateways.watch(&config.watch_params(), &version).await?;
    while let Some(event) = events.try_next().await? {
        if handle_event(event, resource_version)? == EventOutcome::Relist {
            info!("Resource version expired, relisting gateways");
            return Ok(());
        }
    }

    debug!("Watch closed by server");
    Ok(())
}

/// Log a watch event and advance the tracked resource version
pub fn handle_event(
    event: WatchEvent<Gateway>,
    resource_version: &mut Option<String>,
) -> Result<EventOutcome> {
    match event {
        WatchEvent::Added(gateway) => {
            info!("Gateway {} added", gateway.name_any());
            *resource_version = gateway.resource_version();
        }
        WatchEvent::Modified(gateway) => {
            info!("Gateway {} modified", gateway.name_any());
            *resource_version = gateway.resource_version();
        }
        WatchEvent::Deleted(gateway) => {
            info!("Gateway {} deleted", gateway.name_any());
            *resource_version = gateway.resource_version();
        }
        WatchEvent::Bookmark(bookmark) => {
            debug!("Bookmark at {}", bookmark.metadata.resource_version);
            *resource_version = Some(bookmark.metadata.resource_version);
        }
        WatchEvent::Error(err) if err.code == GONE => {
            *resource_version = None;
            return Ok(EventOutcome::Relist);
        }
        WatchEvent::Error(err) => {
            return Err(GatewayClientError::WatchError(format!(
                "{} ({}): {}",
                err.reason, err.code, err.message
            )));
        }
    }
    Ok(EventOutcome::Continue)
}
