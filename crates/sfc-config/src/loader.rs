// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports `./sfc.toml` > `~/.config/sfc/sfc.toml` > `/etc/sfc/sfc.toml`
//! with environment variable overrides via the `SFC_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::SfcConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/sfc/sfc.toml";

/// Configuration file in the working directory.
pub const LOCAL_CONFIG_PATH: &str = "sfc.toml";

/// Per-user configuration file under the XDG config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("sfc/sfc.toml"))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/sfc/sfc.toml`
/// 3. `~/.config/sfc/sfc.toml`
/// 4. `./sfc.toml`
/// 5. `SFC_*` environment variables
pub fn load_config() -> Result<SfcConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<SfcConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SfcConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SfcConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SfcConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(SfcConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_PATH))
        .merge(env_provider())
}

/// Environment provider mapping `SFC_<SECTION>_<KEY>` to `<section>.<key>`.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `SFC_QUOTAS_QUOTA_PORT_CHAIN` must become
/// `quotas.quota_port_chain`.
fn env_provider() -> Env {
    Env::prefixed("SFC_").map(|key| {
        key.as_str()
            .replacen("quotas_", "quotas.", 1)
            .replacen("extensions_", "extensions.", 1)
            .into()
    })
}
