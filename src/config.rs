// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::watch::DEFAULT_TIMEOUT_SECS;
use anyhow::{bail, Context, Result};
use kube::api::{ListParams, WatchParams};
use std::env;

/// Client configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace whose Gateways are listed and watched
    pub namespace: String,
    /// Optional label selector applied to list and watch calls
    pub label_selector: Option<String>,
    /// Kubeconfig context to use instead of the inferred one
    pub context: Option<String>,
    pub watch_timeout_secs: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let namespace = lookup("GATEWAY_NAMESPACE")
            .filter(|ns| !ns.is_empty())
            .context("GATEWAY_NAMESPACE environment variable not set")?;
        let label_selector = lookup("GATEWAY_LABEL_SELECTOR").filter(|s| !s.is_empty());
        let context = lookup("KUBE_CONTEXT").filter(|c| !c.is_empty());

        let watch_timeout_secs = match lookup("WATCH_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("WATCH_TIMEOUT_SECS is not a number: {}", raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if watch_timeout_secs == 0 || watch_timeout_secs >= 295 {
            bail!(
                "WATCH_TIMEOUT_SECS must be between 1 and 294, got {}",
                watch_timeout_secs
            );
        }

        Ok(Config {
            namespace,
            label_selector,
            context,
            watch_timeout_secs,
        })
    }

    /// List parameters carrying the configured selector
    pub fn list_params(&self) -> ListParams {
        match &self.label_selector {
            Some(selector) => ListParams::default().labels(selector),
            None => ListParams::default(),
        }
    }

    /// Watch parameters carrying the configured selector and timeout
    pub fn watch_params(&self) -> WatchParams {
        let wp = WatchParams::default().timeout(self.watch_timeout_secs);
        match &self.label_selector {
            Some(selector) => wp.labels(selector),
            None => wp,
        }
    }
}
