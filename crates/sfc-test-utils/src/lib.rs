// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for SFC integration tests.
//!
//! - [`MockSfcPlugin`] - in-memory plugin implementing [`sfc_core::SfcPlugin`]

pub mod mock_plugin;

pub use mock_plugin::MockSfcPlugin;
