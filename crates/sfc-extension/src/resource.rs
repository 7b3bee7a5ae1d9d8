// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource descriptions exposed by an extension.

use std::collections::BTreeMap;

use serde::Serialize;
use sfc_api::{AttributeMap, ResourceAttributeMap};

/// One REST collection contributed by an extension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceInfo {
    /// Plural collection name, e.g. `port_chains`.
    pub collection: String,
    /// Member name, e.g. `port_chain`.
    pub singular: String,
    /// URL prefix the collection is mounted under.
    pub path_prefix: String,
    #[serde(skip)]
    pub attributes: AttributeMap,
    /// Whether a per-tenant quota is registered for the collection.
    pub register_quota: bool,
    pub allow_bulk: bool,
}

impl ResourceInfo {
    /// Collection URL, e.g. `/sfc/port_chains`.
    pub fn collection_path(&self) -> String {
        format!("{}/{}", self.path_prefix, self.collection)
    }

    /// Member URL for the given id.
    pub fn member_path(&self, id: &str) -> String {
        format!("{}/{}/{}", self.path_prefix, self.collection, id)
    }

    /// Name of the quota option, if the collection registers one.
    pub fn quota_option(&self) -> Option<String> {
        self.register_quota.then(|| format!("quota_{}", self.singular))
    }
}

/// Map every collection to its member name.
///
/// Entries in `special` win; otherwise the trailing `s` is dropped.
pub fn build_plural_mappings(
    special: &BTreeMap<String, String>,
    resource_map: &ResourceAttributeMap,
) -> BTreeMap<String, String> {
    resource_map
        .keys()
        .map(|plural| {
            let singular = special
                .get(plural)
                .cloned()
                .unwrap_or_else(|| singularize(plural));
            (plural.clone(), singular)
        })
        .collect()
}

/// Build one `ResourceInfo` per collection in `resource_map`.
pub fn build_resource_info(
    plural_mappings: &BTreeMap<String, String>,
    resource_map: &ResourceAttributeMap,
    path_prefix: &str,
    register_quota: bool,
) -> Vec<ResourceInfo> {
    resource_map
        .iter()
        .map(|(collection, attributes)| ResourceInfo {
            collection: collection.clone(),
            singular: plural_mappings
                .get(collection)
                .cloned()
                .unwrap_or_else(|| singularize(collection)),
            path_prefix: path_prefix.to_string(),
            attributes: attributes.clone(),
            register_quota,
            allow_bulk: false,
        })
        .collect()
}

fn singularize(plural: &str) -> String {
    plural.strip_suffix('s').unwrap_or(plural).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfc_api::resource_attribute_map;

    #[test]
    fn plural_mappings_drop_trailing_s() {
        let mappings = build_plural_mappings(&BTreeMap::new(), resource_attribute_map());
        assert_eq!(mappings["port_pairs"], "port_pair");
        assert_eq!(mappings["port_pair_groups"], "port_pair_group");
        assert_eq!(mappings["port_chains"], "port_chain");
    }

    #[test]
    fn special_mappings_take_precedence() {
        let special = BTreeMap::from([("port_chains".to_string(), "chain".to_string())]);
        let mappings = build_plural_mappings(&special, resource_attribute_map());
        assert_eq!(mappings["port_chains"], "chain");
    }

    #[test]
    fn resource_info_paths() {
        let mappings = build_plural_mappings(&BTreeMap::new(), resource_attribute_map());
        let infos = build_resource_info(&mappings, resource_attribute_map(), "/sfc", true);
        let chains = infos
            .iter()
            .find(|r| r.collection == "port_chains")
            .unwrap();
        assert_eq!(chains.collection_path(), "/sfc/port_chains");
        assert_eq!(chains.member_path("abc"), "/sfc/port_chains/abc");
        assert_eq!(chains.quota_option().as_deref(), Some("quota_port_chain"));
        assert!(chains.attributes.contains_key("chain_parameters"));
    }

    #[test]
    fn no_quota_option_without_registration() {
        let infos = build_resource_info(&BTreeMap::new(), resource_attribute_map(), "/sfc", false);
        assert!(infos.iter().all(|r| r.quota_option().is_none()));
    }
}
