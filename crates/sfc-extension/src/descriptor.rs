// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extension descriptors and the SFC extension itself.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use sfc_api::{ResourceAttributeMap, resource_attribute_map};
use sfc_core::{SFC_EXT, SFC_PREFIX, SfcError};
use tracing::debug;

use crate::resource::{ResourceInfo, build_plural_mappings, build_resource_info};

/// API version whose attribute map the SFC extension extends.
pub const API_VERSION: &str = "2.0";

/// Metadata and resources of an API extension.
pub trait ExtensionDescriptor: Send + Sync {
    /// Human readable name.
    fn name(&self) -> &str;

    /// Short alias, used as the registry key.
    fn alias(&self) -> &str;

    fn description(&self) -> &str;

    /// Last update as an RFC 3339 timestamp.
    fn updated(&self) -> &str;

    /// Parsed form of [`updated`](Self::updated).
    fn updated_at(&self) -> Result<DateTime<FixedOffset>, SfcError> {
        DateTime::parse_from_rfc3339(self.updated()).map_err(|e| {
            SfcError::Internal(format!(
                "extension `{}` has an invalid updated timestamp: {e}",
                self.alias()
            ))
        })
    }

    /// Plugin type a loaded plugin must have to serve this extension.
    fn plugin_interface(&self) -> Option<&str> {
        None
    }

    /// Collections this extension adds.
    fn resources(&self) -> Vec<ResourceInfo> {
        Vec::new()
    }

    /// Attributes this extension adds for the given API version.
    fn extended_resources(&self, _version: &str) -> ResourceAttributeMap {
        BTreeMap::new()
    }

    /// Pull attributes other extensions added to this extension's collections.
    fn update_attributes_map(&mut self, _extended: &ResourceAttributeMap) {}
}

/// The service function chaining extension.
#[derive(Debug, Clone)]
pub struct Sfc {
    attributes: ResourceAttributeMap,
}

impl Sfc {
    pub fn new() -> Self {
        Self {
            attributes: resource_attribute_map().clone(),
        }
    }

    /// Attribute map as currently extended.
    pub fn attributes(&self) -> &ResourceAttributeMap {
        &self.attributes
    }
}

impl Default for Sfc {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtensionDescriptor for Sfc {
    fn name(&self) -> &str {
        "Service Function Chaining"
    }

    fn alias(&self) -> &str {
        SFC_EXT
    }

    fn description(&self) -> &str {
        "Service Function Chain extension."
    }

    fn updated(&self) -> &str {
        "2015-10-05T10:00:00-00:00"
    }

    fn plugin_interface(&self) -> Option<&str> {
        Some(SFC_EXT)
    }

    fn resources(&self) -> Vec<ResourceInfo> {
        let mut plural_mappings = build_plural_mappings(&BTreeMap::new(), &self.attributes);
        plural_mappings.insert("sfcs".to_string(), "sfc".to_string());
        build_resource_info(&plural_mappings, &self.attributes, SFC_PREFIX, true)
    }

    fn extended_resources(&self, version: &str) -> ResourceAttributeMap {
        if version == API_VERSION {
            self.attributes.clone()
        } else {
            BTreeMap::new()
        }
    }

    fn update_attributes_map(&mut self, extended: &ResourceAttributeMap) {
        for (collection, attrs) in self.attributes.iter_mut() {
            let Some(extra) = extended.get(collection) else {
                continue;
            };
            for (name, spec) in extra {
                attrs.insert(name.clone(), spec.clone());
            }
            debug!(collection = %collection, count = extra.len(), "merged extended attributes");
        }
    }
}
