// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use std::collections::HashSet;

use sfc_core::Resource;
use tracing::debug;

use crate::diagnostic::ConfigError;
use crate::model::{QuotaConfig, QuotaLimit, SfcConfig};

/// Validate a deserialized configuration.
///
/// Collects every problem instead of stopping at the first one.
pub fn validate_config(config: &SfcConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for (i, path) in config.extensions.paths.iter().enumerate() {
        if path.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("extensions.paths[{i}] must not be empty"),
            });
        } else if !seen.insert(path.trim()) {
            errors.push(ConfigError::Validation {
                message: format!("duplicate extension path `{path}` in extensions.paths"),
            });
        }
    }

    for resource in Resource::ALL {
        if config.quotas.limit_for(resource) == QuotaLimit::Unlimited {
            debug!(
                option = QuotaConfig::option_name(resource),
                "quota is negative, {} are unlimited",
                resource.collection()
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&SfcConfig::default()).is_ok());
    }

    #[test]
    fn negative_quotas_are_valid() {
        let mut config = SfcConfig::default();
        config.quotas.quota_port_chain = -1;
        config.quotas.quota_port_pair = -50;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_and_duplicate_paths_are_all_reported() {
        let mut config = SfcConfig::default();
        config.extensions.paths = vec![
            "/opt/sfc".to_string(),
            " ".to_string(),
            "/opt/sfc".to_string(),
        ];
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("paths[1]"))
        ));
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("duplicate"))
        ));
    }
}
