// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! API extension plumbing for service function chaining.
//!
//! - [`Sfc`] describes the `sfc` extension: identity, the three collections
//!   it mounts under `/sfc`, and the attributes it adds to API v2.0.
//! - [`ExtensionRegistry`] holds extensions by alias and checks them against
//!   the loaded plugin.

pub mod descriptor;
pub mod registry;
pub mod resource;

pub use descriptor::{API_VERSION, ExtensionDescriptor, Sfc};
pub use registry::{ExtensionEntry, ExtensionRegistry, ExtensionStatus};
pub use resource::{ResourceInfo, build_plural_mappings, build_resource_info};
