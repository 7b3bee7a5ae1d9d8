// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the SFC extension.
//!
//! Holds the per-tenant quota options (`quota_port_chain`,
//! `quota_port_pair_group`, `quota_port_pair`; negative means unlimited) and
//! the extension search paths. Configuration is layered TOML with `SFC_`
//! environment overrides and strict key checking.
//!
//! # Usage
//!
//! ```no_run
//! use sfc_config::load_and_validate;
//! use sfc_core::Resource;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("port chains per tenant: {:?}", config.quotas.limit_for(Resource::PortChain));
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::ConfigError;
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{ExtensionsConfig, QuotaConfig, QuotaLimit, SfcConfig};

use sfc_core::SfcError;

/// Load configuration from the standard hierarchy and validate it.
pub fn load_and_validate() -> Result<SfcConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err, &collect_toml_sources())),
    }
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<SfcConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Collapse diagnostics into a single `SfcError::Config`.
pub fn into_sfc_error(errors: Vec<ConfigError>) -> SfcError {
    let joined = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    SfcError::Config(joined)
}

/// Read the TOML files of the hierarchy so diagnostics can point into them.
fn collect_toml_sources() -> Vec<(String, String)> {
    let mut sources = Vec::new();

    if let Ok(content) = std::fs::read_to_string(loader::LOCAL_CONFIG_PATH) {
        let path = std::env::current_dir()
            .map(|d| d.join(loader::LOCAL_CONFIG_PATH).display().to_string())
            .unwrap_or_else(|_| loader::LOCAL_CONFIG_PATH.to_string());
        sources.push((path, content));
    }

    if let Some(path) = loader::user_config_path() {
        if let Ok(content) = std::fs::read_to_string(&path) {
            sources.push((path.display().to_string(), content));
        }
    }

    if let Ok(content) = std::fs::read_to_string(loader::SYSTEM_CONFIG_PATH) {
        sources.push((loader::SYSTEM_CONFIG_PATH.to_string(), content));
    }

    sources
}
