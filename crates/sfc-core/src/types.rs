// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource kinds and typed representations for the SFC API.
//!
//! Representations mirror what the API shows for each collection. Create
//! payloads carry every POST-able attribute after defaults are applied;
//! update payloads carry only the attributes that may be changed with PUT.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Alias of the SFC extension and of the plugin type implementing it.
pub const SFC_EXT: &str = "sfc";

/// URL prefix under which the SFC collections are served.
pub const SFC_PREFIX: &str = "/sfc";

/// Largest chain id a port chain may request.
pub const MAX_CHAIN_ID: u16 = u16::MAX;

/// Maximum length of `name` attributes.
pub const NAME_FIELD_SIZE: usize = 255;

/// Maximum length of `description` attributes.
pub const DESCRIPTION_FIELD_SIZE: usize = 255;

/// Maximum length of `tenant_id` attributes.
pub const PROJECT_ID_FIELD_SIZE: usize = 255;

/// The three collections declared by the extension.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    PortPair,
    PortChain,
    PortPairGroup,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::PortPair, Resource::PortChain, Resource::PortPairGroup];

    /// Singular member name, also the key of request and response bodies.
    pub fn singular(self) -> &'static str {
        match self {
            Resource::PortPair => "port_pair",
            Resource::PortChain => "port_chain",
            Resource::PortPairGroup => "port_pair_group",
        }
    }

    /// Collection name as it appears in URLs and the attribute map.
    pub fn collection(self) -> &'static str {
        match self {
            Resource::PortPair => "port_pairs",
            Resource::PortChain => "port_chains",
            Resource::PortPairGroup => "port_pair_groups",
        }
    }

    pub fn from_collection(collection: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.collection() == collection)
    }
}

/// Correlation used to carry chain context in the data plane.
///
/// `mpls` is the only correlation a port chain accepts.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChainCorrelation {
    #[default]
    Mpls,
}

/// Packet fields a port pair group may hash on for load balancing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LbField {
    EthSrc,
    EthDst,
    IpSrc,
    IpDst,
    TcpSrc,
    TcpDst,
    UdpSrc,
    UdpDst,
}

/// Wire names of every supported [`LbField`], in declaration order.
pub const SUPPORTED_LB_FIELDS: [&str; 8] = [
    "eth_src", "eth_dst", "ip_src", "ip_dst", "tcp_src", "tcp_dst", "udp_src", "udp_dst",
];

/// Parameters of the service function attached to a port pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceFunctionParameters {
    /// Correlation the service function understands. Only `None` is accepted.
    #[serde(default)]
    pub correlation: Option<String>,
    /// Relative weight when the port pair is load balanced within a group.
    #[serde(default = "default_sf_weight")]
    pub weight: u64,
}

impl Default for ServiceFunctionParameters {
    fn default() -> Self {
        Self {
            correlation: None,
            weight: default_sf_weight(),
        }
    }
}

fn default_sf_weight() -> u64 {
    1
}

/// Parameters applying to a whole port chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainParameters {
    #[serde(default)]
    pub correlation: ChainCorrelation,
    /// Whether reverse traffic follows the chain backwards.
    #[serde(default)]
    pub symmetric: bool,
}

/// Parameters of a port pair group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortPairGroupParameters {
    #[serde(default)]
    pub lb_fields: Vec<LbField>,
}

/// The network attachment of one service function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortPair {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub tenant_id: String,
    pub ingress: Uuid,
    pub egress: Uuid,
    pub service_function_parameters: ServiceFunctionParameters,
}

/// A load-balanced set of equivalent port pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortPairGroup {
    pub id: Uuid,
    /// Numeric group identifier assigned by the plugin.
    pub group_id: Option<u32>,
    pub name: String,
    pub description: String,
    pub tenant_id: String,
    pub port_pairs: Vec<Uuid>,
    pub port_pair_group_parameters: PortPairGroupParameters,
}

/// An ordered sequence of port pair groups and the traffic that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortChain {
    pub id: Uuid,
    /// Requested chain id; 0 asks the plugin to allocate one.
    pub chain_id: u16,
    pub name: String,
    pub description: String,
    pub tenant_id: String,
    pub port_pair_groups: Vec<Uuid>,
    pub flow_classifiers: Vec<Uuid>,
    pub chain_parameters: ChainParameters,
}

/// Create payload for a port pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortPairCreate {
    pub name: String,
    pub description: String,
    pub tenant_id: String,
    pub ingress: Uuid,
    pub egress: Uuid,
    pub service_function_parameters: ServiceFunctionParameters,
}

impl PortPairCreate {
    pub fn into_port_pair(self, id: Uuid) -> PortPair {
        PortPair {
            id,
            name: self.name,
            description: self.description,
            tenant_id: self.tenant_id,
            ingress: self.ingress,
            egress: self.egress,
            service_function_parameters: self.service_function_parameters,
        }
    }
}

/// Update payload for a port pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortPairUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl PortPair {
    pub fn apply(&mut self, update: PortPairUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
    }
}

/// Create payload for a port pair group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortPairGroupCreate {
    pub name: String,
    pub description: String,
    pub tenant_id: String,
    pub port_pairs: Vec<Uuid>,
    pub port_pair_group_parameters: PortPairGroupParameters,
}

impl PortPairGroupCreate {
    pub fn into_port_pair_group(self, id: Uuid, group_id: Option<u32>) -> PortPairGroup {
        PortPairGroup {
            id,
            group_id,
            name: self.name,
            description: self.description,
            tenant_id: self.tenant_id,
            port_pairs: self.port_pairs,
            port_pair_group_parameters: self.port_pair_group_parameters,
        }
    }
}

/// Update payload for a port pair group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortPairGroupUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub port_pairs: Option<Vec<Uuid>>,
}

impl PortPairGroup {
    pub fn apply(&mut self, update: PortPairGroupUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(port_pairs) = update.port_pairs {
            self.port_pairs = port_pairs;
        }
    }
}

/// Create payload for a port chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortChainCreate {
    pub chain_id: u16,
    pub name: String,
    pub description: String,
    pub tenant_id: String,
    pub port_pair_groups: Vec<Uuid>,
    pub flow_classifiers: Vec<Uuid>,
    pub chain_parameters: ChainParameters,
}

impl PortChainCreate {
    pub fn into_port_chain(self, id: Uuid) -> PortChain {
        PortChain {
            id,
            chain_id: self.chain_id,
            name: self.name,
            description: self.description,
            tenant_id: self.tenant_id,
            port_pair_groups: self.port_pair_groups,
            flow_classifiers: self.flow_classifiers,
            chain_parameters: self.chain_parameters,
        }
    }
}

/// Update payload for a port chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortChainUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub port_pair_groups: Option<Vec<Uuid>>,
    pub flow_classifiers: Option<Vec<Uuid>>,
}

impl PortChain {
    pub fn apply(&mut self, update: PortChainUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(groups) = update.port_pair_groups {
            self.port_pair_groups = groups;
        }
        if let Some(classifiers) = update.flow_classifiers {
            self.flow_classifiers = classifiers;
        }
    }
}
