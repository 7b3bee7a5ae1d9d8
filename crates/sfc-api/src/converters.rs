// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Attribute converters.
//!
//! Converters run before validators and turn loosely typed request values
//! into the shape the validators and typed payloads expect.

use serde_json::Value;
use sfc_core::SfcError;
use thiserror::Error;

use crate::normalize;
use crate::validators::display;

/// Why a conversion failed.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The value has the wrong shape; the message is the reason.
    #[error("{0}")]
    Invalid(String),
    /// The value is well formed but refused with a dedicated API error.
    #[error(transparent)]
    Rejected(#[from] SfcError),
}

/// A conversion attached to an attribute or dictionary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converter {
    ToInt,
    ToBoolean,
    ToList,
    NoneToEmptyList,
    PortPairGroups,
    ChainParameters,
    SfParameters,
    PpgParameters,
}

impl Converter {
    pub fn convert(&self, value: Value) -> Result<Value, ConversionError> {
        match self {
            Converter::ToInt => convert_to_int(value).map_err(ConversionError::Invalid),
            Converter::ToBoolean => convert_to_boolean(value).map_err(ConversionError::Invalid),
            Converter::ToList => Ok(convert_to_list(value)),
            Converter::NoneToEmptyList => Ok(convert_none_to_empty_list(value)),
            Converter::PortPairGroups => Ok(normalize::normalize_port_pair_groups(value)?),
            Converter::ChainParameters => Ok(normalize::normalize_chain_parameters(value)),
            Converter::SfParameters => Ok(normalize::normalize_sf_parameters(value)),
            Converter::PpgParameters => Ok(normalize::normalize_ppg_parameters(value)),
        }
    }
}

/// Integers and integral strings become JSON integers.
pub fn convert_to_int(value: Value) -> Result<Value, String> {
    let converted = match &value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    converted
        .map(Value::from)
        .ok_or_else(|| format!("'{}' is not an integer", display(&value)))
}

/// Booleans, `"true"`/`"false"`, `"1"`/`"0"`, and 0/1 become JSON booleans.
pub fn convert_to_boolean(value: Value) -> Result<Value, String> {
    let converted = match &value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        _ => None,
    };
    converted
        .map(Value::Bool)
        .ok_or_else(|| format!("'{}' cannot be converted to boolean", display(&value)))
}

/// `null` becomes `[]`, lists pass through, anything else is wrapped.
pub fn convert_to_list(value: Value) -> Value {
    match value {
        Value::Null => Value::Array(Vec::new()),
        Value::Array(_) => value,
        other => Value::Array(vec![other]),
    }
}

pub fn convert_none_to_empty_list(value: Value) -> Value {
    match value {
        Value::Null => Value::Array(Vec::new()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn to_int_accepts_numbers_and_numeric_strings() {
        assert_eq!(convert_to_int(json!(5)).unwrap(), json!(5));
        assert_eq!(convert_to_int(json!(" 12 ")).unwrap(), json!(12));
        assert_eq!(convert_to_int(json!(3.0)).unwrap(), json!(3));
        assert_eq!(convert_to_int(json!("x")).unwrap_err(), "'x' is not an integer");
        assert!(convert_to_int(json!(1.5)).is_err());
        assert!(convert_to_int(json!(true)).is_err());
    }

    #[test]
    fn to_boolean_accepts_common_spellings() {
        assert_eq!(convert_to_boolean(json!("True")).unwrap(), json!(true));
        assert_eq!(convert_to_boolean(json!("0")).unwrap(), json!(false));
        assert_eq!(convert_to_boolean(json!(1)).unwrap(), json!(true));
        assert_eq!(convert_to_boolean(json!(false)).unwrap(), json!(false));
        assert_eq!(
            convert_to_boolean(json!("maybe")).unwrap_err(),
            "'maybe' cannot be converted to boolean"
        );
    }

    #[test]
    fn to_list_wraps_scalars() {
        assert_eq!(convert_to_list(Value::Null), json!([]));
        assert_eq!(convert_to_list(json!(["a"])), json!(["a"]));
        assert_eq!(convert_to_list(json!("a")), json!(["a"]));
    }

    #[test]
    fn none_to_empty_list_keeps_other_values() {
        assert_eq!(convert_none_to_empty_list(Value::Null), json!([]));
        assert_eq!(convert_none_to_empty_list(json!("a")), json!("a"));
    }

    #[test]
    fn port_pair_groups_converter_rejects_empty() {
        let err = Converter::PortPairGroups.convert(json!([])).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::Rejected(SfcError::PortPairGroupNotSpecified)
        ));
    }
}
