// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespaced accessor for Istio Gateway resources

use crate::types::gateway::{Gateway, GatewayList};
use futures::stream::BoxStream;
use futures::StreamExt;
use kube::api::{
    DeleteParams, GetParams, ListParams, Patch, PatchParams, PostParams, Request, WatchEvent,
    WatchParams,
};
use kube::{Client, Error, Resource, Result};
use serde::Serialize;
use tracing::debug;

/// Gateways in a single namespace.
///
/// Every method issues exactly one request through the shared client and
/// returns whatever the API server answered, without retries or wrapping.
#[derive(Clone)]
pub struct Gateways {
    client: Client,
    request: Request,
    namespace: String,
}

impl Gateways {
    pub fn new(client: Client, namespace: &str) -> Self {
        let url = Gateway::url_path(&(), Some(namespace));
        Self {
            client,
            request: Request::new(url),
            namespace: namespace.to_string(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Get a single gateway by name
    pub async fn get(&self, name: &str, gp: &GetParams) -> Result<Gateway> {
        debug!("GET gateway {}/{}", self.namespace, name);
        let mut req = self.request.get(name, gp).map_err(Error::BuildRequest)?;
        req.extensions_mut().insert("get");
        self.client.request::<Gateway>(req).await
    }

    /// List gateways matching the selectors in `lp`
    pub async fn list(&self, lp: &ListParams) -> Result<GatewayList> {
        debug!("LIST gateways in {}", self.namespace);
        let mut req = self.request.list(lp).map_err(Error::BuildRequest)?;
        req.extensions_mut().insert("list");
        self.client.request::<GatewayList>(req).await
    }

    /// Open a watch on the gateways starting at `resource_version`.
    ///
    /// The request always carries `watch=true`. The stream ends when the
    /// server closes the connection or the caller drops it.
    pub async fn watch(
        &self,
        wp: &WatchParams,
        resource_version: &str,
    ) -> Result<BoxStream<'static, Result<WatchEvent<Gateway>>>> {
        debug!(
            "WATCH gateways in {} from resourceVersion={}",
            self.namespace, resource_version
        );
        let mut req = self
            .request
            .watch(wp, resource_version)
            .map_err(Error::BuildRequest)?;
        req.extensions_mut().insert("watch");
        let events = self.client.request_events::<Gateway>(req).await?;
        Ok(events.boxed())
    }

    /// Create a gateway, returning the server's representation
    pub async fn create(&self, pp: &PostParams, gateway: &Gateway) -> Result<Gateway> {
        debug!(
            "CREATE gateway {}/{}",
            self.namespace,
            gateway.metadata.name.as_deref().unwrap_or_default()
        );
        let body = serde_json::to_vec(gateway).map_err(Error::SerdeError)?;
        let mut req = self.request.create(pp, body).map_err(Error::BuildRequest)?;
        req.extensions_mut().insert("create");
        self.client.request::<Gateway>(req).await
    }

    /// Replace the gateway named by `gateway.metadata.name`
    pub async fn update(&self, pp: &PostParams, gateway: &Gateway) -> Result<Gateway> {
        let name = gateway.metadata.name.as_deref().unwrap_or_default();
        debug!("UPDATE gateway {}/{}", self.namespace, name);
        let body = serde_json::to_vec(gateway).map_err(Error::SerdeError)?;
        let mut req = self
            .request
            .replace(name, pp, body)
            .map_err(Error::BuildRequest)?;
        req.extensions_mut().insert("replace");
        self.client.request::<Gateway>(req).await
    }

    /// Delete a gateway by name
    pub async fn delete(&self, name: &str, dp: &DeleteParams) -> Result<()> {
        debug!("DELETE gateway {}/{}", self.namespace, name);
        let mut req = self.request.delete(name, dp).map_err(Error::BuildRequest)?;
        req.extensions_mut().insert("delete");
        // The body is either the terminating object or a Status, neither is needed
        self.client.request_text(req).await?;
        Ok(())
    }

    /// Delete every gateway matching the selectors in `lp`
    pub async fn delete_collection(&self, dp: &DeleteParams, lp: &ListParams) -> Result<()> {
        debug!("DELETE gateway collection in {}", self.namespace);
        let mut req = self
            .request
            .delete_collection(dp, lp)
            .map_err(Error::BuildRequest)?;
        req.extensions_mut().insert("delete_collection");
        self.client.request_text(req).await?;
        Ok(())
    }

    /// Patch a gateway, or one of its subresources when `subresources` is non-empty.
    ///
    /// The content type follows the `Patch` variant.
    pub async fn patch<P: Serialize>(
        &self,
        name: &str,
        pp: &PatchParams,
        patch: &Patch<P>,
        subresources: &[&str],
    ) -> Result<Gateway> {
        debug!(
            "PATCH gateway {}/{} subresources={:?}",
            self.namespace, name, subresources
        );
        let req = if subresources.is_empty() {
            self.request.patch(name, pp, patch)
        } else {
            self.request
                .patch_subresource(&subresources.join("/"), name, pp, patch)
        };
        let mut req = req.map_err(Error::BuildRequest)?;
        req.extensions_mut().insert("patch");
        self.client.request::<Gateway>(req).await
    }
}
