// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! REST resource schema of the SFC extension.
//!
//! Provides the attribute maps of `port_pairs`, `port_pair_groups`, and
//! `port_chains`, the validators and converters they reference, and the
//! request preparation that turns a submitted body into a typed payload for
//! an [`sfc_core::SfcPlugin`].
//!
//! # Usage
//!
//! ```no_run
//! use sfc_api::parse_body;
//! use sfc_core::{PortChainCreate, RequestContext};
//!
//! let ctx = RequestContext::new("tenant-a");
//! let body = serde_json::json!({"port_chain": {
//!     "port_pair_groups": ["6b1c9b0e-2f8c-4bd3-9cd5-c0b4ed22fc4d"],
//! }});
//! let payload: PortChainCreate = parse_body(&ctx, &body).expect("valid body");
//! assert!(!payload.chain_parameters.symmetric);
//! ```

pub mod attributes;
pub mod body;
pub mod converters;
pub mod fields;
pub mod normalize;
pub mod query;
pub mod validators;

pub use attributes::{
    AttrDefault, AttributeMap, AttributeSpec, ResourceAttributeMap, attributes_for,
    resource_attribute_map,
};
pub use body::{ResourcePayload, parse_body, prepare_request_body};
pub use converters::{ConversionError, Converter};
pub use fields::{visible_fields, visible_list};
pub use query::apply_list_query;
pub use validators::{DictField, Validator};
