// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Context, Result};
use kube::{CustomResourceExt, ResourceExt};
use tracing::{info, warn};

use gateway_client::config::Config;
use gateway_client::kubernetes::{apply_gateway, create_client, watch_gateways};
use gateway_client::{Gateway, GatewaysGetter, NetworkingV1alpha3Client};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let command = std::env::args().nth(1).unwrap_or_else(|| "watch".to_string());

    // Printing the CRD needs no cluster
    if command == "crd" {
        print!("{}", serde_yaml::to_string(&Gateway::crd())?);
        return Ok(());
    }

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: namespace={}, label_selector={:?}",
        config.namespace, config.label_selector
    );

    // Create Kubernetes client
    let client = create_client(&config).await?;
    info!("Connected to Kubernetes cluster");

    let gateways = NetworkingV1alpha3Client::new(client).gateways(&config.namespace);

    match command.as_str() {
        "list" => {
            let list = gateways.list(&config.list_params()).await?;
            for gateway in &list.items {
                println!("{}\t{}", gateway.name_any(), gateway.hosts().join(","));
            }
        }
        "apply" => {
            let Some(path) = std::env::args().nth(2) else {
                bail!("usage: gateway-client apply <manifest.yaml>");
            };
            let manifest = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read manifest {}", path))?;
            let gateway: Gateway = serde_yaml::from_str(&manifest)
                .with_context(|| format!("Failed to parse Gateway manifest {}", path))?;
            let applied = apply_gateway(&gateways, &gateway).await?;
            println!("{}\t{}", applied.name_any(), applied.resource_version().unwrap_or_default());
        }
        "watch" => {
            info!("Watching gateways in namespace {}", config.namespace);
            watch_gateways(&gateways, &config).await?;

            // The watch loop reconnects forever
            warn!("Gateway watch stopped unexpectedly");
        }
        other => bail!("unknown command '{}', expected one of: watch, list, apply, crd", other),
    }

    Ok(())
}
