// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Server-side apply of Gateway manifests

use crate::client::Gateways;
use crate::constants::FIELD_MANAGER;
use crate::error::Result;
use crate::types::gateway::Gateway;
use kube::api::{ObjectMeta, Patch, PatchParams};
use kube::ResourceExt;
use tracing::{info, instrument};

/// Apply a gateway manifest into the accessor's namespace, taking ownership of its fields
#[instrument(skip(gateways, gateway), fields(gateway = %gateway.name_any(), namespace = %gateways.namespace()))]
pub async fn apply_gateway(gateways: &Gateways, gateway: &Gateway) -> Result<Gateway> {
    let name = gateway.name_any();
    let desired = create_apply_object(gateway, gateways.namespace());

    let pp = PatchParams::apply(FIELD_MANAGER).force();
    let applied = gateways
        .patch(&name, &pp, &Patch::Apply(&desired), &[])
        .await?;

    info!("Applied gateway {}/{}", gateways.namespace(), name);
    Ok(applied)
}

/// Strip server-populated metadata and pin the target namespace
fn create_apply_object(gateway: &Gateway, namespace: &str) -> Gateway {
    let mut desired = gateway.clone();
    desired.metadata = ObjectMeta {
        name: gateway.metadata.name.clone(),
        namespace: Some(namespace.to_string()),
        labels: gateway.metadata.labels.clone(),
        annotations: gateway.metadata.annotations.clone(),
        ..Default::default()
    };
    desired
}
