// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed client for the networking.istio.io/v1alpha3 API group.

pub mod gateways;

pub use gateways::Gateways;

use kube::Client;

/// Hands out a [`Gateways`] accessor scoped to a namespace
pub trait GatewaysGetter {
    fn gateways(&self, namespace: &str) -> Gateways;
}

/// Client for the resources of networking.istio.io/v1alpha3
#[derive(Clone)]
pub struct NetworkingV1alpha3Client {
    client: Client,
}

impl NetworkingV1alpha3Client {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// The underlying REST client shared by all accessors
    pub fn rest_client(&self) -> &Client {
        &self.client
    }
}

impl GatewaysGetter for NetworkingV1alpha3Client {
    fn gateways(&self, namespace: &str) -> Gateways {
        Gateways::new(self.client.clone(), namespace)
    }
}

impl GatewaysGetter for Client {
    fn gateways(&self, namespace: &str) -> Gateways {
        Gateways::new(self.clone(), namespace)
    }
}
