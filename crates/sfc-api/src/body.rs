// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request body preparation against the attribute map.
//!
//! A request body is an object holding the singular resource name, e.g.
//! `{"port_chain": {...}}`. Preparation rejects unknown or forbidden
//! attributes, fills defaults on create, then converts and validates every
//! present attribute.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use sfc_core::{
    PortChainCreate, PortChainUpdate, PortPairCreate, PortPairGroupCreate, PortPairGroupUpdate,
    PortPairUpdate, RequestContext, Resource, SfcError,
};
use tracing::debug;

use crate::attributes::{AttrDefault, attributes_for};
use crate::converters::ConversionError;

/// A typed payload produced from a prepared request body.
pub trait ResourcePayload: DeserializeOwned {
    const RESOURCE: Resource;
    const IS_CREATE: bool;
}

impl ResourcePayload for PortPairCreate {
    const RESOURCE: Resource = Resource::PortPair;
    const IS_CREATE: bool = true;
}

impl ResourcePayload for PortPairUpdate {
    const RESOURCE: Resource = Resource::PortPair;
    const IS_CREATE: bool = false;
}

impl ResourcePayload for PortPairGroupCreate {
    const RESOURCE: Resource = Resource::PortPairGroup;
    const IS_CREATE: bool = true;
}

impl ResourcePayload for PortPairGroupUpdate {
    const RESOURCE: Resource = Resource::PortPairGroup;
    const IS_CREATE: bool = false;
}

impl ResourcePayload for PortChainCreate {
    const RESOURCE: Resource = Resource::PortChain;
    const IS_CREATE: bool = true;
}

impl ResourcePayload for PortChainUpdate {
    const RESOURCE: Resource = Resource::PortChain;
    const IS_CREATE: bool = false;
}

/// Prepare a create (`is_create`) or update request body.
///
/// Returns the attributes of the resource, converted and validated. On
/// create the result holds every POST-able attribute.
pub fn prepare_request_body(
    context: &RequestContext,
    resource: Resource,
    body: &Value,
    is_create: bool,
) -> Result<Map<String, Value>, SfcError> {
    let singular = resource.singular();
    let mut attrs = body
        .get(singular)
        .and_then(Value::as_object)
        .cloned()
        .ok_or(SfcError::MissingResourceBody { resource: singular })?;
    let spec = attributes_for(resource);

    let mut unknown: Vec<&str> = attrs
        .keys()
        .map(String::as_str)
        .filter(|name| !spec.contains_key(*name))
        .collect();
    if !unknown.is_empty() {
        unknown.sort_unstable();
        return Err(SfcError::UnrecognizedAttribute {
            attributes: unknown.join(", "),
        });
    }

    let method = if is_create { "POST" } else { "PUT" };
    for name in attrs.keys() {
        let attr = &spec[name];
        let allowed = if is_create { attr.allow_post } else { attr.allow_put };
        if !allowed {
            return Err(SfcError::AttributeNotAllowed {
                attribute: name.clone(),
                method,
            });
        }
    }

    if is_create {
        fill_tenant(context, &mut attrs)?;
        for (name, attr) in spec.iter().filter(|(_, a)| a.allow_post) {
            if attrs.contains_key(name) {
                continue;
            }
            match &attr.default {
                AttrDefault::Value(default) => {
                    attrs.insert(name.clone(), default.clone());
                }
                AttrDefault::NotSpecified => {
                    return Err(SfcError::MissingAttribute {
                        attribute: name.clone(),
                    });
                }
            }
        }
    }

    for (name, attr) in spec {
        let Some(value) = attrs.get_mut(name) else {
            continue;
        };
        if let Some(converter) = &attr.converter {
            *value = converter.convert(value.take()).map_err(|e| match e {
                ConversionError::Invalid(reason) => SfcError::InvalidAttribute {
                    resource: singular,
                    attribute: name.clone(),
                    reason,
                },
                ConversionError::Rejected(err) => err,
            })?;
        }
        if let Some(validator) = &attr.validator {
            validator
                .validate(value)
                .map_err(|reason| SfcError::InvalidAttribute {
                    resource: singular,
                    attribute: name.clone(),
                    reason,
                })?;
        }
    }

    debug!(
        request_id = %context.request_id,
        resource = singular,
        method,
        attributes = attrs.len(),
        "prepared request body"
    );
    Ok(attrs)
}

/// Callers act on their own tenant unless they are admins.
fn fill_tenant(context: &RequestContext, attrs: &mut Map<String, Value>) -> Result<(), SfcError> {
    match attrs.get("tenant_id") {
        None | Some(Value::Null) => {
            attrs.insert(
                "tenant_id".to_string(),
                Value::String(context.tenant_id.clone()),
            );
        }
        Some(Value::String(tenant)) if tenant != &context.tenant_id && !context.is_admin => {
            return Err(SfcError::TenantMismatch);
        }
        Some(_) => {}
    }
    Ok(())
}

/// Prepare a request body and deserialize it into its typed payload.
pub fn parse_body<T: ResourcePayload>(context: &RequestContext, body: &Value) -> Result<T, SfcError> {
    let attrs = prepare_request_body(context, T::RESOURCE, body, T::IS_CREATE)?;
    serde_json::from_value(Value::Object(attrs)).map_err(|e| {
        SfcError::Internal(format!(
            "prepared {} body does not match its payload: {e}",
            T::RESOURCE
        ))
    })
}
