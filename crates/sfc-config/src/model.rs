// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the SFC extension.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so misspelled keys are
//! reported instead of silently ignored.

use serde::{Deserialize, Serialize};
use sfc_core::Resource;

/// Top-level SFC configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SfcConfig {
    /// Per-tenant resource quotas.
    #[serde(default)]
    pub quotas: QuotaConfig,

    /// Where extension descriptors are looked up.
    #[serde(default)]
    pub extensions: ExtensionsConfig,
}

/// Maximum number of each SFC resource per tenant. Negative means unlimited.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QuotaConfig {
    /// Maximum number of port chains per tenant.
    #[serde(default = "default_quota_port_chain")]
    pub quota_port_chain: i64,

    /// Maximum number of port pair groups per tenant.
    #[serde(default = "default_quota_port_pair_group")]
    pub quota_port_pair_group: i64,

    /// Maximum number of port pairs per tenant.
    #[serde(default = "default_quota_port_pair")]
    pub quota_port_pair: i64,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            quota_port_chain: default_quota_port_chain(),
            quota_port_pair_group: default_quota_port_pair_group(),
            quota_port_pair: default_quota_port_pair(),
        }
    }
}

fn default_quota_port_chain() -> i64 {
    10
}

fn default_quota_port_pair_group() -> i64 {
    10
}

fn default_quota_port_pair() -> i64 {
    100
}

/// An interpreted quota value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaLimit {
    Unlimited,
    Limited(u64),
}

impl QuotaLimit {
    pub fn from_raw(raw: i64) -> Self {
        u64::try_from(raw).map_or(QuotaLimit::Unlimited, QuotaLimit::Limited)
    }

    /// Whether a tenant holding `in_use` resources may create `requested` more.
    pub fn allows(self, in_use: u64, requested: u64) -> bool {
        match self {
            QuotaLimit::Unlimited => true,
            QuotaLimit::Limited(max) => in_use.saturating_add(requested) <= max,
        }
    }
}

impl QuotaConfig {
    /// Name of the quota option governing `resource`.
    pub fn option_name(resource: Resource) -> &'static str {
        match resource {
            Resource::PortChain => "quota_port_chain",
            Resource::PortPairGroup => "quota_port_pair_group",
            Resource::PortPair => "quota_port_pair",
        }
    }

    pub fn raw_limit(&self, resource: Resource) -> i64 {
        match resource {
            Resource::PortChain => self.quota_port_chain,
            Resource::PortPairGroup => self.quota_port_pair_group,
            Resource::PortPair => self.quota_port_pair,
        }
    }

    pub fn limit_for(&self, resource: Resource) -> QuotaLimit {
        QuotaLimit::from_raw(self.raw_limit(resource))
    }
}

/// Extension lookup settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExtensionsConfig {
    /// Additional directories searched for extension descriptors.
    #[serde(default)]
    pub paths: Vec<String>,
}
