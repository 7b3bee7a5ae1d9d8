// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Attribute validators.
//!
//! Each validator inspects one JSON value and returns a human readable
//! reason on failure. The request preparation layer wraps the reason into
//! `SfcError::InvalidAttribute` together with the attribute name.

use serde_json::Value;
use uuid::Uuid;

use crate::converters::Converter;

/// A validation rule attached to an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum Validator {
    /// A string holding a UUID.
    Uuid,
    /// A string of at most `max_len` characters.
    String { max_len: usize },
    /// An integer within `[min, max]`.
    Range { min: i64, max: i64 },
    /// A list of UUID strings without duplicates.
    UuidList,
    /// One of a fixed set of values.
    Values(Vec<Value>),
    /// An integer that is zero or larger.
    NonNegative,
    /// A list whose elements all come from a fixed set of names.
    ListOfAllowedValues(&'static [&'static str]),
    /// An object with a fixed set of keys. Missing keys take their default,
    /// then each member is converted and validated.
    Dict(Vec<(&'static str, DictField)>),
}

/// Schema of one key inside a [`Validator::Dict`].
#[derive(Debug, Clone, PartialEq)]
pub struct DictField {
    /// Value the key takes when omitted.
    pub default: Value,
    pub converter: Option<Converter>,
    pub validator: Option<Validator>,
}

impl Validator {
    /// Validate `value`, converting dictionary members in place.
    pub fn validate(&self, value: &mut Value) -> Result<(), String> {
        match self {
            Validator::Uuid => validate_uuid(value),
            Validator::String { max_len } => validate_string(value, *max_len),
            Validator::Range { min, max } => validate_range(value, *min, *max),
            Validator::UuidList => validate_uuid_list(value),
            Validator::Values(allowed) => validate_values(value, allowed),
            Validator::NonNegative => validate_non_negative(value),
            Validator::ListOfAllowedValues(allowed) => validate_list_of_allowed_values(value, allowed),
            Validator::Dict(spec) => validate_dict(value, spec),
        }
    }
}

/// Render a value the way it appears in error messages.
pub(crate) fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn validate_uuid(value: &Value) -> Result<(), String> {
    match value.as_str().map(Uuid::parse_str) {
        Some(Ok(_)) => Ok(()),
        _ => Err(format!("'{}' is not a valid UUID", display(value))),
    }
}

pub fn validate_string(value: &Value, max_len: usize) -> Result<(), String> {
    let Some(s) = value.as_str() else {
        return Err(format!("'{}' is not a valid string", display(value)));
    };
    if s.chars().count() > max_len {
        return Err(format!("'{s}' exceeds maximum length of {max_len}"));
    }
    Ok(())
}

fn as_integer(value: &Value) -> Result<i64, String> {
    value
        .as_i64()
        .ok_or_else(|| format!("'{}' is not an integer", display(value)))
}

pub fn validate_range(value: &Value, min: i64, max: i64) -> Result<(), String> {
    let n = as_integer(value)?;
    if n < min {
        return Err(format!("'{n}' is too small - must be at least '{min}'"));
    }
    if n > max {
        return Err(format!("'{n}' is too large - must be no larger than '{max}'"));
    }
    Ok(())
}

pub fn validate_non_negative(value: &Value) -> Result<(), String> {
    let n = as_integer(value)?;
    if n < 0 {
        return Err(format!("'{n}' should be non-negative"));
    }
    Ok(())
}

pub fn validate_values(value: &Value, allowed: &[Value]) -> Result<(), String> {
    if allowed.contains(value) {
        Ok(())
    } else {
        Err(format!(
            "'{}' is not in {}",
            display(value),
            Value::Array(allowed.to_vec())
        ))
    }
}

pub fn validate_uuid_list(value: &Value) -> Result<(), String> {
    let Some(items) = value.as_array() else {
        return Err(format!("'{}' is not a list", display(value)));
    };
    for item in items {
        validate_uuid(item)?;
    }

    let mut seen = Vec::with_capacity(items.len());
    let mut duplicates = Vec::new();
    for item in items {
        let s = display(item);
        if seen.contains(&s) {
            if !duplicates.contains(&s) {
                duplicates.push(s);
            }
        } else {
            seen.push(s);
        }
    }
    if !duplicates.is_empty() {
        return Err(format!("Duplicate items in the list: '{}'", duplicates.join(", ")));
    }
    Ok(())
}

pub fn validate_list_of_allowed_values(value: &Value, allowed: &[&str]) -> Result<(), String> {
    let Some(items) = value.as_array() else {
        return Err(format!("'{}' is not a list", display(value)));
    };
    let mut illegal: Vec<String> = Vec::new();
    for item in items {
        let legal = item.as_str().is_some_and(|s| allowed.contains(&s));
        let shown = display(item);
        if !legal && !illegal.contains(&shown) {
            illegal.push(shown);
        }
    }
    if illegal.is_empty() {
        Ok(())
    } else {
        Err(format!("Illegal values in a list: {}", illegal.join(", ")))
    }
}

pub fn validate_dict(value: &mut Value, spec: &[(&'static str, DictField)]) -> Result<(), String> {
    let shown = display(value);
    let Some(map) = value.as_object_mut() else {
        return Err(format!("'{shown}' is not a dictionary"));
    };

    let mut unexpected: Vec<&str> = map
        .keys()
        .map(String::as_str)
        .filter(|k| !spec.iter().any(|(name, _)| name == k))
        .collect();
    if !unexpected.is_empty() {
        unexpected.sort_unstable();
        return Err(format!("Unexpected keys supplied: {}", unexpected.join(", ")));
    }

    for (key, field) in spec {
        let member = map
            .entry(key.to_string())
            .or_insert_with(|| field.default.clone());
        if let Some(converter) = &field.converter {
            let converted = converter
                .convert(member.take())
                .map_err(|e| e.to_string())?;
            *member = converted;
        }
        if let Some(validator) = &field.validator {
            validator.validate(member)?;
        }
    }
    Ok(())
}
