// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation

use crate::config::Config;
use crate::error::{GatewayClientError, Result};
use kube::{config::KubeConfigOptions, Client, Config as KConfig};
use tracing::{debug, instrument};

/// Create a Kubernetes client, honouring an explicit kubeconfig context when configured
#[instrument(skip(config), fields(context = ?config.context))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let kube_config = match &config.context {
        Some(context) => {
            debug!("Loading kubeconfig context {}", context);
            let options = KubeConfigOptions {
                context: Some(context.clone()),
                ..Default::default()
            };
            KConfig::from_kubeconfig(&options).await.map_err(|e| {
                GatewayClientError::KubeconfigError(format!(
                    "Failed to load context {}: {}",
                    context, e
                ))
            })?
        }
        None => KConfig::infer()
            .await
            .map_err(|e| GatewayClientError::KubeconfigError(format!("Failed to infer config: {}", e)))?,
    };

    debug!("Using cluster {}", kube_config.cluster_url);

    Client::try_from(kube_config)
        .map_err(|e| GatewayClientError::KubeconfigError(format!("Failed to create client: {}", e)))
}
