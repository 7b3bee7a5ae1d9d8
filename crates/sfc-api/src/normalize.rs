// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Defaults and normalization of the structured SFC attributes.

use serde_json::{Value, json};
use sfc_core::SfcError;
use tracing::debug;

use crate::converters::convert_to_list;

pub const DEFAULT_CHAIN_CORRELATION: &str = "mpls";
pub const DEFAULT_CHAIN_SYMMETRY: bool = false;
pub const DEFAULT_SF_WEIGHT: i64 = 1;

/// `{"correlation": "mpls", "symmetric": false}`
pub fn default_chain_parameters() -> Value {
    json!({
        "correlation": DEFAULT_CHAIN_CORRELATION,
        "symmetric": DEFAULT_CHAIN_SYMMETRY,
    })
}

/// `{"correlation": null, "weight": 1}`
pub fn default_sf_parameters() -> Value {
    json!({
        "correlation": null,
        "weight": DEFAULT_SF_WEIGHT,
    })
}

/// `{"lb_fields": []}`
pub fn default_ppg_parameters() -> Value {
    json!({ "lb_fields": [] })
}

/// Values treated as "not given": null, false, zero, and empty strings, lists, or objects.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Fill keys missing from an object with the ones from `defaults`.
fn fill_missing(mut value: Value, defaults: Value) -> Value {
    if let (Some(map), Value::Object(defaults)) = (value.as_object_mut(), defaults) {
        for (key, default) in defaults {
            map.entry(key).or_insert(default);
        }
    }
    value
}

/// Port chains must name at least one port pair group.
pub fn normalize_port_pair_groups(value: Value) -> Result<Value, SfcError> {
    let groups = convert_to_list(value);
    if groups.as_array().is_none_or(Vec::is_empty) {
        return Err(SfcError::PortPairGroupNotSpecified);
    }
    Ok(groups)
}

pub fn normalize_chain_parameters(value: Value) -> Value {
    if is_empty(&value) {
        debug!("chain_parameters omitted, using defaults");
        return default_chain_parameters();
    }
    fill_missing(value, default_chain_parameters())
}

pub fn normalize_sf_parameters(value: Value) -> Value {
    if is_empty(&value) {
        debug!("service_function_parameters omitted, using defaults");
        return default_sf_parameters();
    }
    value
}

pub fn normalize_ppg_parameters(value: Value) -> Value {
    if is_empty(&value) {
        debug!("port_pair_group_parameters omitted, using defaults");
        return default_ppg_parameters();
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_parameters_default_when_omitted() {
        assert_eq!(normalize_chain_parameters(Value::Null), default_chain_parameters());
        assert_eq!(normalize_chain_parameters(json!({})), default_chain_parameters());
    }

    #[test]
    fn chain_parameters_fill_missing_keys() {
        assert_eq!(
            normalize_chain_parameters(json!({"symmetric": true})),
            json!({"correlation": "mpls", "symmetric": true})
        );
        assert_eq!(
            normalize_chain_parameters(json!({"correlation": "mpls"})),
            json!({"correlation": "mpls", "symmetric": false})
        );
    }

    #[test]
    fn sf_parameters_default_when_omitted() {
        assert_eq!(
            normalize_sf_parameters(Value::Null),
            json!({"correlation": null, "weight": 1})
        );
        assert_eq!(normalize_sf_parameters(json!({"weight": 3})), json!({"weight": 3}));
    }

    #[test]
    fn ppg_parameters_default_when_omitted() {
        assert_eq!(normalize_ppg_parameters(json!({})), json!({"lb_fields": []}));
        assert_eq!(
            normalize_ppg_parameters(json!({"lb_fields": ["ip_src"]})),
            json!({"lb_fields": ["ip_src"]})
        );
    }

    #[test]
    fn non_objects_pass_through_for_validation() {
        assert_eq!(normalize_chain_parameters(json!("x")), json!("x"));
    }

    #[test]
    fn port_pair_groups_must_not_be_empty() {
        assert!(matches!(
            normalize_port_pair_groups(Value::Null),
            Err(SfcError::PortPairGroupNotSpecified)
        ));
        assert!(matches!(
            normalize_port_pair_groups(json!([])),
            Err(SfcError::PortPairGroupNotSpecified)
        ));
        let id = "6b1c9b0e-2f8c-4bd3-9cd5-c0b4ed22fc4d";
        assert_eq!(normalize_port_pair_groups(json!(id)).unwrap(), json!([id]));
    }
}
