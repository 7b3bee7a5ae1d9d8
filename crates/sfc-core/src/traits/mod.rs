// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions implemented by SFC service plugins.
//!
//! Traits use `#[async_trait]` so plugins can be held as trait objects.

pub mod plugin;

pub use plugin::SfcPlugin;
