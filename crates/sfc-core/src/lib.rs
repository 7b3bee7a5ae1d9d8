// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the SFC API extension.
//!
//! This crate provides the error taxonomy, the typed resource model, and the
//! [`SfcPlugin`] trait that backend service plugins implement. Schema
//! handling lives in `sfc-api`; the extension descriptor in `sfc-extension`.

pub mod context;
pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use context::{ListQuery, RequestContext, SortDirection};
pub use error::{ApiErrorKind, ApiFault, SfcError};
pub use traits::SfcPlugin;
pub use types::{
    ChainCorrelation, ChainParameters, LbField, PortChain, PortChainCreate, PortChainUpdate,
    PortPair, PortPairCreate, PortPairGroup, PortPairGroupCreate, PortPairGroupParameters,
    PortPairGroupUpdate, PortPairUpdate, Resource, ServiceFunctionParameters, MAX_CHAIN_ID,
    SFC_EXT, SFC_PREFIX, SUPPORTED_LB_FIELDS,
};
