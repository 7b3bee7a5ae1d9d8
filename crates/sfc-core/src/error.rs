// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the SFC API extension.
//!
//! Every variant maps one-to-one onto an API fault with a fixed message
//! template. Errors are terminal for the request that raised them.

use serde::Serialize;
use strum::IntoStaticStr;
use thiserror::Error;
use uuid::Uuid;

/// Class of an API fault, which decides the HTTP status it is reported with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ApiErrorKind {
    NotFound,
    InUse,
    InvalidInput,
    BadRequest,
    Internal,
}

impl ApiErrorKind {
    /// HTTP status code reported for this kind of fault.
    pub fn status_code(self) -> u16 {
        match self {
            ApiErrorKind::NotFound => 404,
            ApiErrorKind::InUse => 409,
            ApiErrorKind::InvalidInput | ApiErrorKind::BadRequest => 400,
            ApiErrorKind::Internal => 500,
        }
    }
}

/// The error type returned by plugin operations and request preparation.
#[derive(Debug, Error, IntoStaticStr)]
pub enum SfcError {
    // --- Port chain ---
    #[error("Port Chain {id} not found.")]
    PortChainNotFound { id: Uuid },

    #[error("Port Chain {id} no available chain id.")]
    PortChainUnavailableChainId { id: Uuid },

    #[error("Flow Classifier {fc_id} conflicts with Flow Classifier {pc_fc_id} in port chain {pc_id}.")]
    PortChainFlowClassifierInConflict {
        fc_id: Uuid,
        pc_fc_id: Uuid,
        pc_id: Uuid,
    },

    #[error("Chain id {chain_id} conflicts with Chain id in port chain {pc_id}.")]
    PortChainChainIdInConflict { chain_id: u16, pc_id: Uuid },

    #[error("Port Pair Group is not specified in Port Chain.")]
    PortPairGroupNotSpecified,

    #[error(
        "Port Pair Group(s) {} in use by Port Chain {port_chain}.",
        join_ids(.port_pair_groups)
    )]
    InvalidPortPairGroups {
        port_pair_groups: Vec<Uuid>,
        port_chain: Uuid,
    },

    // --- Port pair ---
    #[error("Port Pair port {id} not found.")]
    PortPairPortNotFound { id: Uuid },

    #[error("Port Pair ingress port {ingress} and egress port {egress} not in the same host.")]
    PortPairIngressEgressDifferentHost { ingress: Uuid, egress: Uuid },

    #[error("Port Pair ingress port {ingress} does not belong to a host.")]
    PortPairIngressNoHost { ingress: Uuid },

    #[error("Port Pair egress port {egress} does not belong to a host.")]
    PortPairEgressNoHost { egress: Uuid },

    #[error(
        "Port Pair with ingress port {ingress} and egress port {egress} is already used by another Port Pair {id}."
    )]
    PortPairIngressEgressInUse {
        ingress: Uuid,
        egress: Uuid,
        id: Uuid,
    },

    #[error("Port Pair {id} not found.")]
    PortPairNotFound { id: Uuid },

    #[error("Port Pair {id} in use.")]
    PortPairInUse { id: Uuid },

    // --- Port pair group ---
    #[error("Port Pair Group {id} not found.")]
    PortPairGroupNotFound { id: Uuid },

    #[error("Port Pair Group {id} in use.")]
    PortPairGroupInUse { id: Uuid },

    // --- Request shape ---
    /// An attribute failed conversion or validation.
    #[error("Invalid input for {attribute}. Reason: {reason}.")]
    InvalidAttribute {
        resource: &'static str,
        attribute: String,
        reason: String,
    },

    /// A create request omitted an attribute that has no default.
    #[error("Failed to parse request. Required attribute '{attribute}' not specified")]
    MissingAttribute { attribute: String },

    /// The attribute exists but may not be set with this method.
    #[error("Attribute '{attribute}' not allowed in {method}")]
    AttributeNotAllowed {
        attribute: String,
        method: &'static str,
    },

    #[error("Unrecognized attribute(s) '{attributes}'")]
    UnrecognizedAttribute { attributes: String },

    #[error("Unable to find '{resource}' in request body")]
    MissingResourceBody { resource: &'static str },

    #[error(
        "Specifying 'tenant_id' other than the authenticated tenant in request requires admin privileges"
    )]
    TenantMismatch,

    /// Configuration errors (invalid TOML, bad quota values, duplicate paths).
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SfcError {
    /// The fault class this error is reported as.
    pub fn kind(&self) -> ApiErrorKind {
        use SfcError::*;
        match self {
            PortChainNotFound { .. }
            | PortPairPortNotFound { .. }
            | PortPairNotFound { .. }
            | PortPairGroupNotFound { .. } => ApiErrorKind::NotFound,

            InvalidPortPairGroups { .. } | PortPairInUse { .. } | PortPairGroupInUse { .. } => {
                ApiErrorKind::InUse
            }

            PortChainUnavailableChainId { .. }
            | PortChainFlowClassifierInConflict { .. }
            | PortChainChainIdInConflict { .. }
            | PortPairGroupNotSpecified
            | PortPairIngressEgressDifferentHost { .. }
            | PortPairIngressNoHost { .. }
            | PortPairEgressNoHost { .. }
            | PortPairIngressEgressInUse { .. }
            | InvalidAttribute { .. } => ApiErrorKind::InvalidInput,

            MissingAttribute { .. }
            | AttributeNotAllowed { .. }
            | UnrecognizedAttribute { .. }
            | MissingResourceBody { .. }
            | TenantMismatch => ApiErrorKind::BadRequest,

            Config(_) | Internal(_) => ApiErrorKind::Internal,
        }
    }

    /// HTTP status code this error is reported with.
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Variant name, used as the fault type in API responses.
    pub fn error_type(&self) -> &'static str {
        self.into()
    }

    /// Build the API fault body for this error.
    pub fn to_fault(&self) -> ApiFault {
        ApiFault {
            error_type: self.error_type(),
            kind: self.kind(),
            message: self.to_string(),
            status: self.status_code(),
        }
    }
}

/// Serializable fault handed to the host's REST layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiFault {
    #[serde(rename = "type")]
    pub error_type: &'static str,
    pub kind: ApiErrorKind,
    pub message: String,
    #[serde(skip)]
    pub status: u16,
}

fn join_ids(ids: &[Uuid]) -> String {
    ids.iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_errors_map_to_404() {
        let err = SfcError::PortChainNotFound { id: Uuid::nil() };
        assert_eq!(err.kind(), ApiErrorKind::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(
            err.to_string(),
            "Port Chain 00000000-0000-0000-0000-000000000000 not found."
        );
    }

    #[test]
    fn in_use_errors_map_to_409() {
        let err = SfcError::PortPairGroupInUse { id: Uuid::nil() };
        assert_eq!(err.status_code(), 409);
        assert_eq!(SfcError::PortPairInUse { id: Uuid::nil() }.kind(), ApiErrorKind::InUse);
    }

    #[test]
    fn group_not_specified_is_invalid_input() {
        let err = SfcError::PortPairGroupNotSpecified;
        assert_eq!(err.kind(), ApiErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "Port Pair Group is not specified in Port Chain.");
    }

    #[test]
    fn invalid_port_pair_groups_lists_every_group() {
        let a = Uuid::from_u128(1);
        let b = Uuid::from_u128(2);
        let err = SfcError::InvalidPortPairGroups {
            port_pair_groups: vec![a, b],
            port_chain: Uuid::from_u128(3),
        };
        let msg = err.to_string();
        assert!(msg.contains(&format!("{a}, {b}")));
        assert!(msg.ends_with(&format!("in use by Port Chain {}.", Uuid::from_u128(3))));
    }

    #[test]
    fn different_host_message_is_spaced() {
        let err = SfcError::PortPairIngressEgressDifferentHost {
            ingress: Uuid::from_u128(1),
            egress: Uuid::from_u128(2),
        };
        assert!(err.to_string().contains(" and egress port "));
    }

    #[test]
    fn fault_carries_variant_name() {
        let fault = SfcError::PortPairNotFound { id: Uuid::nil() }.to_fault();
        assert_eq!(fault.error_type, "PortPairNotFound");
        assert_eq!(fault.status, 404);

        let json = serde_json::to_value(&fault).unwrap();
        assert_eq!(json["type"], "PortPairNotFound");
        assert_eq!(json["kind"], "NotFound");
        assert!(json.get("status").is_none());
    }

    #[test]
    fn request_shape_errors_are_bad_requests() {
        let err = SfcError::AttributeNotAllowed {
            attribute: "id".into(),
            method: "POST",
        };
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "Attribute 'id' not allowed in POST");
        assert_eq!(SfcError::TenantMismatch.kind(), ApiErrorKind::BadRequest);
    }
}
