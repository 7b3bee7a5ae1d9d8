// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for request preparation across the three collections.

use proptest::prelude::*;
use serde_json::json;
use sfc_api::{parse_body, prepare_request_body};
use sfc_core::{
    ChainCorrelation, LbField, PortChainCreate, PortChainUpdate, PortPairCreate,
    PortPairGroupCreate, RequestContext, Resource, SfcError,
};
use tracing_test::traced_test;

const GROUP: &str = "6b1c9b0e-2f8c-4bd3-9cd5-c0b4ed22fc4d";
const CLASSIFIER: &str = "0f3b2a52-6c71-4c1e-8a8e-6a1e9d7d3c11";
const PORT_IN: &str = "3d5b4c1a-9e2f-4f7a-b6c8-1a2b3c4d5e6f";
const PORT_OUT: &str = "7e8f9a0b-1c2d-4e3f-8a9b-0c1d2e3f4a5b";

fn ctx() -> RequestContext {
    RequestContext::new("tenant-a")
}

/// An `lb_fields` entry outside the supported names is rejected.
#[test]
fn unsupported_lb_field_is_rejected() {
    let body = json!({"port_pair_group": {
        "port_pair_group_parameters": {"lb_fields": ["ip_src", "vlan_id"]},
    }});
    let err = parse_body::<PortPairGroupCreate>(&ctx(), &body).unwrap_err();
    match err {
        SfcError::InvalidAttribute { attribute, reason, .. } => {
            assert_eq!(attribute, "port_pair_group_parameters");
            assert_eq!(reason, "Illegal values in a list: vlan_id");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn every_supported_lb_field_is_accepted() {
    let body = json!({"port_pair_group": {
        "port_pair_group_parameters": {"lb_fields": sfc_core::SUPPORTED_LB_FIELDS},
    }});
    let payload: PortPairGroupCreate = parse_body(&ctx(), &body).unwrap();
    assert_eq!(payload.port_pair_group_parameters.lb_fields.len(), 8);
    assert_eq!(payload.port_pair_group_parameters.lb_fields[0], LbField::EthSrc);
    assert!(payload.port_pairs.is_empty());
}

/// Chain ids outside [0, 65535] are rejected.
#[test]
fn chain_id_out_of_range_is_rejected() {
    for chain_id in [json!(-1), json!(65536), json!("70000")] {
        let body = json!({"port_chain": {"port_pair_groups": [GROUP], "chain_id": chain_id}});
        let err = parse_body::<PortChainCreate>(&ctx(), &body).unwrap_err();
        assert!(
            matches!(&err, SfcError::InvalidAttribute { attribute, .. } if attribute == "chain_id"),
            "chain id {chain_id} gave {err}"
        );
    }
}

#[test]
fn chain_id_accepts_numeric_strings() {
    let body = json!({"port_chain": {"port_pair_groups": [GROUP], "chain_id": "65535"}});
    let payload: PortChainCreate = parse_body(&ctx(), &body).unwrap();
    assert_eq!(payload.chain_id, 65535);
}

proptest! {
    #[test]
    fn chain_id_bounds(chain_id in -200_000i64..200_000) {
        let body = json!({"port_chain": {"port_pair_groups": [GROUP], "chain_id": chain_id}});
        let result = parse_body::<PortChainCreate>(&ctx(), &body);
        if (0..=65535).contains(&chain_id) {
            prop_assert_eq!(i64::from(result.unwrap().chain_id), chain_id);
        } else {
            prop_assert!(result.is_err());
        }
    }
}

/// Omitting port pair groups on chain creation raises the not-specified error.
#[test]
fn missing_port_pair_groups_is_not_specified() {
    let body = json!({"port_chain": {"name": "pc"}});
    let err = parse_body::<PortChainCreate>(&ctx(), &body).unwrap_err();
    assert!(matches!(err, SfcError::PortPairGroupNotSpecified));
    assert_eq!(err.status_code(), 400);
}

#[test]
fn empty_port_pair_groups_on_update_is_not_specified() {
    let body = json!({"port_chain": {"port_pair_groups": []}});
    let err = parse_body::<PortChainUpdate>(&ctx(), &body).unwrap_err();
    assert!(matches!(err, SfcError::PortPairGroupNotSpecified));
}

/// Omitted chain parameters resolve to mpls correlation, not symmetric.
#[test]
fn chain_parameters_default() {
    let body = json!({"port_chain": {"port_pair_groups": GROUP}});
    let payload: PortChainCreate = parse_body(&ctx(), &body).unwrap();
    assert_eq!(payload.chain_parameters.correlation, ChainCorrelation::Mpls);
    assert!(!payload.chain_parameters.symmetric);
    assert_eq!(payload.chain_id, 0);
    assert!(payload.flow_classifiers.is_empty());
    assert_eq!(payload.port_pair_groups.len(), 1);
    assert_eq!(payload.tenant_id, "tenant-a");
}

#[test]
fn chain_parameters_symmetric_is_converted() {
    let body = json!({"port_chain": {
        "port_pair_groups": [GROUP],
        "flow_classifiers": [CLASSIFIER],
        "chain_parameters": {"symmetric": "True"},
    }});
    let payload: PortChainCreate = parse_body(&ctx(), &body).unwrap();
    assert!(payload.chain_parameters.symmetric);
    assert_eq!(payload.flow_classifiers.len(), 1);
}

#[test]
fn chain_correlation_other_than_mpls_is_rejected() {
    let body = json!({"port_chain": {
        "port_pair_groups": [GROUP],
        "chain_parameters": {"correlation": "nsh"},
    }});
    let err = parse_body::<PortChainCreate>(&ctx(), &body).unwrap_err();
    assert!(err.to_string().contains(r#"'nsh' is not in ["mpls"]"#));
}

/// Omitted service function parameters resolve to no correlation, weight 1.
#[test]
fn service_function_parameters_default() {
    let body = json!({"port_pair": {"ingress": PORT_IN, "egress": PORT_OUT}});
    let payload: PortPairCreate = parse_body(&ctx(), &body).unwrap();
    assert_eq!(payload.service_function_parameters.correlation, None);
    assert_eq!(payload.service_function_parameters.weight, 1);
}

#[test]
fn service_function_correlation_must_be_null() {
    let body = json!({"port_pair": {
        "ingress": PORT_IN,
        "egress": PORT_OUT,
        "service_function_parameters": {"correlation": "mpls"},
    }});
    let err = parse_body::<PortPairCreate>(&ctx(), &body).unwrap_err();
    assert!(matches!(
        &err,
        SfcError::InvalidAttribute { attribute, .. } if attribute == "service_function_parameters"
    ));
}

#[test]
fn negative_weight_is_rejected() {
    let body = json!({"port_pair": {
        "ingress": PORT_IN,
        "egress": PORT_OUT,
        "service_function_parameters": {"weight": -2},
    }});
    let err = parse_body::<PortPairCreate>(&ctx(), &body).unwrap_err();
    assert!(err.to_string().contains("should be non-negative"));
}

#[test]
fn large_weights_are_accepted() {
    for weight in [json!(4_294_967_296_u64), json!(i64::MAX), json!("4294967296")] {
        let body = json!({"port_pair": {
            "ingress": PORT_IN,
            "egress": PORT_OUT,
            "service_function_parameters": {"weight": weight},
        }});
        let payload: PortPairCreate = parse_body(&ctx(), &body).unwrap();
        assert!(payload.service_function_parameters.weight >= 4_294_967_296);
    }
}

#[test]
fn weight_beyond_integer_range_is_invalid_input() {
    let body = json!({"port_pair": {
        "ingress": PORT_IN,
        "egress": PORT_OUT,
        "service_function_parameters": {"weight": "99999999999999999999"},
    }});
    let err = parse_body::<PortPairCreate>(&ctx(), &body).unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[test]
fn duplicate_flow_classifiers_are_rejected() {
    let body = json!({"port_chain": {
        "port_pair_groups": [GROUP],
        "flow_classifiers": [CLASSIFIER, CLASSIFIER],
    }});
    let err = parse_body::<PortChainCreate>(&ctx(), &body).unwrap_err();
    assert!(err.to_string().contains("Duplicate items in the list"));
}

#[test]
fn chain_parameters_cannot_be_updated() {
    let body = json!({"port_chain": {"chain_parameters": {"symmetric": true}}});
    let err = prepare_request_body(&ctx(), Resource::PortChain, &body, false).unwrap_err();
    assert!(matches!(err, SfcError::AttributeNotAllowed { method: "PUT", .. }));
}

#[traced_test]
#[test]
fn preparation_is_logged() {
    let body = json!({"port_chain": {"port_pair_groups": [GROUP]}});
    prepare_request_body(&ctx(), Resource::PortChain, &body, true).unwrap();
    assert!(logs_contain("prepared request body"));
    assert!(logs_contain("chain_parameters omitted, using defaults"));
}
