// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry of API extensions.
//!
//! The `ExtensionRegistry` stores `ExtensionEntry` records keyed by alias.
//! Only enabled extensions contribute resources and attributes.

use std::collections::HashMap;

use sfc_api::ResourceAttributeMap;
use sfc_core::{SfcError, SfcPlugin};
use tracing::{info, warn};

use crate::descriptor::ExtensionDescriptor;
use crate::resource::ResourceInfo;

/// Status of an extension in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionStatus {
    Enabled,
    Disabled,
}

impl std::fmt::Display for ExtensionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtensionStatus::Enabled => write!(f, "enabled"),
            ExtensionStatus::Disabled => write!(f, "disabled"),
        }
    }
}

/// A single entry in the extension registry.
pub struct ExtensionEntry {
    pub descriptor: Box<dyn ExtensionDescriptor>,
    pub status: ExtensionStatus,
}

impl std::fmt::Debug for ExtensionEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionEntry")
            .field("alias", &self.descriptor.alias())
            .field("status", &self.status)
            .finish()
    }
}

/// Registry of API extensions keyed by alias.
#[derive(Debug)]
pub struct ExtensionRegistry {
    entries: HashMap<String, ExtensionEntry>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register an extension with status `Enabled`.
    pub fn register(&mut self, descriptor: Box<dyn ExtensionDescriptor>) -> Result<(), SfcError> {
        self.register_with_status(descriptor, ExtensionStatus::Enabled)
    }

    /// Register an extension with an explicit status.
    ///
    /// Fails if the alias is already taken.
    pub fn register_with_status(
        &mut self,
        descriptor: Box<dyn ExtensionDescriptor>,
        status: ExtensionStatus,
    ) -> Result<(), SfcError> {
        let alias = descriptor.alias().to_string();
        if self.entries.contains_key(&alias) {
            warn!(alias = %alias, "rejecting duplicate extension alias");
            return Err(SfcError::Config(format!(
                "extension alias `{alias}` is already registered"
            )));
        }
        info!(alias = %alias, name = descriptor.name(), %status, "registered extension");
        self.entries
            .insert(alias, ExtensionEntry { descriptor, status });
        Ok(())
    }

    pub fn get(&self, alias: &str) -> Option<&ExtensionEntry> {
        self.entries.get(alias)
    }

    /// List all entries, sorted by alias.
    pub fn list_all(&self) -> Vec<&ExtensionEntry> {
        let mut entries: Vec<&ExtensionEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.descriptor.alias().cmp(b.descriptor.alias()));
        entries
    }

    /// Toggle an extension's status.
    pub fn set_enabled(&mut self, alias: &str, enabled: bool) -> Result<(), SfcError> {
        let entry = self
            .entries
            .get_mut(alias)
            .ok_or_else(|| SfcError::Config(format!("unknown extension `{alias}`")))?;
        entry.status = if enabled {
            ExtensionStatus::Enabled
        } else {
            ExtensionStatus::Disabled
        };
        Ok(())
    }

    /// Check that `plugin` can serve the extension registered under `alias`.
    ///
    /// The plugin must advertise the alias and, when the extension names a
    /// plugin interface, be of that plugin type.
    pub fn check_plugin(&self, alias: &str, plugin: &dyn SfcPlugin) -> Result<(), SfcError> {
        let entry = self
            .entries
            .get(alias)
            .ok_or_else(|| SfcError::Config(format!("unknown extension `{alias}`")))?;

        if !plugin.supported_extension_aliases().iter().any(|a| a == alias) {
            warn!(alias, plugin = %plugin.plugin_name(), "extension not supported by plugin");
            return Err(SfcError::Config(format!(
                "extension `{alias}` is not supported by plugin `{}`",
                plugin.plugin_name()
            )));
        }

        if let Some(interface) = entry
            .descriptor
            .plugin_interface()
            .filter(|interface| *interface != plugin.plugin_type())
        {
            warn!(alias, interface, plugin_type = %plugin.plugin_type(), "plugin interface mismatch");
            return Err(SfcError::Config(format!(
                "extension `{alias}` requires a `{interface}` plugin, got `{}`",
                plugin.plugin_type()
            )));
        }

        Ok(())
    }

    /// Merge the attributes of every enabled extension into `attr_map`, then
    /// let each enabled extension pull in what the others contributed.
    pub fn extend_resources(&mut self, version: &str, attr_map: &mut ResourceAttributeMap) {
        for entry in self.enabled() {
            for (collection, attrs) in entry.descriptor.extended_resources(version) {
                attr_map.entry(collection).or_default().extend(attrs);
            }
        }
        for entry in self
            .entries
            .values_mut()
            .filter(|e| e.status == ExtensionStatus::Enabled)
        {
            entry.descriptor.update_attributes_map(attr_map);
        }
    }

    /// Collections contributed by enabled extensions, sorted by alias.
    pub fn resources(&self) -> Vec<ResourceInfo> {
        let mut enabled = self.enabled();
        enabled.sort_by(|a, b| a.descriptor.alias().cmp(b.descriptor.alias()));
        enabled
            .into_iter()
            .flat_map(|e| e.descriptor.resources())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn enabled(&self) -> Vec<&ExtensionEntry> {
        self.entries
            .values()
            .filter(|e| e.status == ExtensionStatus::Enabled)
            .collect()
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Sfc;

    struct Stub(&'static str);

    impl ExtensionDescriptor for Stub {
        fn name(&self) -> &str {
            "Stub"
        }
        fn alias(&self) -> &str {
            self.0
        }
        fn description(&self) -> &str {
            "stub extension"
        }
        fn updated(&self) -> &str {
            "2016-01-01T00:00:00Z"
        }
    }

    #[test]
    fn register_and_get() {
        let mut registry = ExtensionRegistry::new();
        registry.register(Box::new(Sfc::new())).unwrap();

        let entry = registry.get("sfc").unwrap();
        assert_eq!(entry.descriptor.name(), "Service Function Chaining");
        assert_eq!(entry.status, ExtensionStatus::Enabled);
    }

    #[test]
    fn duplicate_alias_is_rejected() {
        let mut registry = ExtensionRegistry::new();
        registry.register(Box::new(Sfc::new())).unwrap();
        let err = registry.register(Box::new(Stub("sfc"))).unwrap_err();
        assert!(err.to_string().contains("already registered"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn set_enabled_toggles_status() {
        let mut registry = ExtensionRegistry::new();
        registry.register(Box::new(Sfc::new())).unwrap();

        registry.set_enabled("sfc", false).unwrap();
        assert_eq!(registry.get("sfc").unwrap().status, ExtensionStatus::Disabled);
        assert!(registry.resources().is_empty());

        registry.set_enabled("sfc", true).unwrap();
        assert_eq!(registry.resources().len(), 3);
    }

    #[test]
    fn set_enabled_unknown_alias_fails() {
        let mut registry = ExtensionRegistry::new();
        assert!(registry.set_enabled("nope", true).is_err());
    }

    #[test]
    fn list_all_is_sorted() {
        let mut registry = ExtensionRegistry::new();
        registry.register(Box::new(Stub("zeta"))).unwrap();
        registry.register(Box::new(Sfc::new())).unwrap();
        registry.register(Box::new(Stub("alpha"))).unwrap();

        let aliases: Vec<_> = registry
            .list_all()
            .iter()
            .map(|e| e.descriptor.alias().to_string())
            .collect();
        assert_eq!(aliases, vec!["alpha", "sfc", "zeta"]);
    }

    #[test]
    fn extend_resources_skips_disabled() {
        let mut registry = ExtensionRegistry::new();
        registry
            .register_with_status(Box::new(Sfc::new()), ExtensionStatus::Disabled)
            .unwrap();
        let mut attr_map = ResourceAttributeMap::new();
        registry.extend_resources("2.0", &mut attr_map);
        assert!(attr_map.is_empty());
    }
}
