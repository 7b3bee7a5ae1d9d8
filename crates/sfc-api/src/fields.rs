// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response shaping: only visible attributes, optionally only requested ones.

use serde::Serialize;
use serde_json::{Map, Value};
use sfc_core::{ListQuery, Resource, SfcError};

use crate::attributes::attributes_for;

/// Serialize `representation` and keep the attributes a caller may see.
///
/// With `fields`, the result is further limited to the named attributes;
/// unknown names are ignored.
pub fn visible_fields<T: Serialize>(
    resource: Resource,
    representation: &T,
    fields: Option<&[String]>,
) -> Result<Map<String, Value>, SfcError> {
    let spec = attributes_for(resource);
    let value = serde_json::to_value(representation)
        .map_err(|e| SfcError::Internal(format!("cannot serialize {resource}: {e}")))?;
    let Value::Object(map) = value else {
        return Err(SfcError::Internal(format!("{resource} did not serialize to an object")));
    };

    Ok(map
        .into_iter()
        .filter(|(name, _)| spec.get(name).is_some_and(|attr| attr.is_visible))
        .filter(|(name, _)| fields.is_none_or(|wanted| wanted.iter().any(|w| w == name)))
        .collect())
}

/// Shape each item of a list response, keeping the fields `query` selects.
pub fn visible_list<T: Serialize>(
    resource: Resource,
    items: &[T],
    query: &ListQuery,
) -> Result<Vec<Map<String, Value>>, SfcError> {
    items
        .iter()
        .map(|item| visible_fields(resource, item, query.fields.as_deref()))
        .collect()
}
