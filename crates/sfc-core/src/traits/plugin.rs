// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The service plugin interface behind the SFC extension.

use async_trait::async_trait;
use uuid::Uuid;

use crate::context::{ListQuery, RequestContext};
use crate::error::SfcError;
use crate::types::{
    PortChain, PortChainCreate, PortChainUpdate, PortPair, PortPairCreate, PortPairGroup,
    PortPairGroupCreate, PortPairGroupUpdate, PortPairUpdate, SFC_EXT,
};

/// A service plugin that owns port pairs, port pair groups, and port chains.
///
/// Payloads reach the plugin already converted and validated against the
/// attribute map. The plugin is responsible for persistence and for the
/// cross-resource constraints: ingress and egress on the same host, unique
/// ingress/egress pairs, unique chain ids and flow classifiers across chains,
/// and refusing to delete resources that are still referenced.
///
/// `fields` arguments name the attributes the caller wants back; plugins may
/// ignore them since the API layer trims responses as well.
#[async_trait]
pub trait SfcPlugin: Send + Sync + 'static {
    fn plugin_name(&self) -> &str {
        SFC_EXT
    }

    fn plugin_type(&self) -> &str {
        SFC_EXT
    }

    fn plugin_description(&self) -> &str {
        "SFC service plugin for service chaining."
    }

    /// Extension aliases this plugin can serve.
    fn supported_extension_aliases(&self) -> Vec<String> {
        vec![SFC_EXT.to_string()]
    }

    // --- Port chains ---

    async fn create_port_chain(
        &self,
        context: &RequestContext,
        port_chain: PortChainCreate,
    ) -> Result<PortChain, SfcError>;

    async fn update_port_chain(
        &self,
        context: &RequestContext,
        id: Uuid,
        port_chain: PortChainUpdate,
    ) -> Result<PortChain, SfcError>;

    async fn delete_port_chain(&self, context: &RequestContext, id: Uuid) -> Result<(), SfcError>;

    async fn get_port_chains(
        &self,
        context: &RequestContext,
        query: &ListQuery,
    ) -> Result<Vec<PortChain>, SfcError>;

    async fn get_port_chain(
        &self,
        context: &RequestContext,
        id: Uuid,
        fields: Option<&[String]>,
    ) -> Result<PortChain, SfcError>;

    // --- Port pair groups ---

    async fn create_port_pair_group(
        &self,
        context: &RequestContext,
        port_pair_group: PortPairGroupCreate,
    ) -> Result<PortPairGroup, SfcError>;

    async fn update_port_pair_group(
        &self,
        context: &RequestContext,
        id: Uuid,
        port_pair_group: PortPairGroupUpdate,
    ) -> Result<PortPairGroup, SfcError>;

    async fn delete_port_pair_group(
        &self,
        context: &RequestContext,
        id: Uuid,
    ) -> Result<(), SfcError>;

    async fn get_port_pair_groups(
        &self,
        context: &RequestContext,
        query: &ListQuery,
    ) -> Result<Vec<PortPairGroup>, SfcError>;

    async fn get_port_pair_group(
        &self,
        context: &RequestContext,
        id: Uuid,
        fields: Option<&[String]>,
    ) -> Result<PortPairGroup, SfcError>;

    // --- Port pairs ---

    async fn create_port_pair(
        &self,
        context: &RequestContext,
        port_pair: PortPairCreate,
    ) -> Result<PortPair, SfcError>;

    async fn update_port_pair(
        &self,
        context: &RequestContext,
        id: Uuid,
        port_pair: PortPairUpdate,
    ) -> Result<PortPair, SfcError>;

    async fn delete_port_pair(&self, context: &RequestContext, id: Uuid) -> Result<(), SfcError>;

    async fn get_port_pairs(
        &self,
        context: &RequestContext,
        query: &ListQuery,
    ) -> Result<Vec<PortPair>, SfcError>;

    async fn get_port_pair(
        &self,
        context: &RequestContext,
        id: Uuid,
        fields: Option<&[String]>,
    ) -> Result<PortPair, SfcError>;
}
