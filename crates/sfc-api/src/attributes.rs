// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The resource attribute map of the SFC extension.
//!
//! For every collection the map lists its attributes together with whether
//! they may be set on create (POST) or update (PUT), whether they are shown
//! in responses, their default, and the converter and validator applied to
//! submitted values.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde_json::{Value, json};
use sfc_core::types::{
    DESCRIPTION_FIELD_SIZE, MAX_CHAIN_ID, NAME_FIELD_SIZE, PROJECT_ID_FIELD_SIZE,
    SUPPORTED_LB_FIELDS,
};
use sfc_core::Resource;

use crate::converters::Converter;
use crate::normalize::{
    DEFAULT_CHAIN_CORRELATION, DEFAULT_CHAIN_SYMMETRY, DEFAULT_SF_WEIGHT,
};
use crate::validators::{DictField, Validator};

/// What a create request gets when an attribute is omitted.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrDefault {
    /// No default: the attribute must be supplied on create.
    NotSpecified,
    Value(Value),
}

/// Schema of a single attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSpec {
    pub allow_post: bool,
    pub allow_put: bool,
    pub is_visible: bool,
    pub default: AttrDefault,
    pub converter: Option<Converter>,
    pub validator: Option<Validator>,
    pub primary_key: bool,
    /// Policy checks need the attribute even when the caller omits it.
    pub required_by_policy: bool,
}

impl AttributeSpec {
    /// A visible attribute that can be neither posted nor updated.
    pub fn read_only() -> Self {
        Self {
            allow_post: false,
            allow_put: false,
            is_visible: true,
            default: AttrDefault::NotSpecified,
            converter: None,
            validator: None,
            primary_key: false,
            required_by_policy: false,
        }
    }

    /// A visible attribute settable on create only.
    pub fn post_only() -> Self {
        Self {
            allow_post: true,
            ..Self::read_only()
        }
    }

    /// A visible attribute settable on create and update.
    pub fn mutable() -> Self {
        Self {
            allow_post: true,
            allow_put: true,
            ..Self::read_only()
        }
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default = AttrDefault::Value(value);
        self
    }

    pub fn convert(mut self, converter: Converter) -> Self {
        self.converter = Some(converter);
        self
    }

    pub fn validate(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn required_by_policy(mut self) -> Self {
        self.required_by_policy = true;
        self
    }
}

/// Attributes of one collection, keyed by attribute name.
pub type AttributeMap = BTreeMap<String, AttributeSpec>;

/// Attribute maps keyed by collection name.
pub type ResourceAttributeMap = BTreeMap<String, AttributeMap>;

static RESOURCE_ATTRIBUTE_MAP: LazyLock<ResourceAttributeMap> = LazyLock::new(|| {
    Resource::ALL
        .into_iter()
        .map(|r| (r.collection().to_string(), build_attributes(r)))
        .collect()
});

/// The attribute map of every SFC collection.
pub fn resource_attribute_map() -> &'static ResourceAttributeMap {
    &RESOURCE_ATTRIBUTE_MAP
}

/// The attribute map of one collection.
pub fn attributes_for(resource: Resource) -> &'static AttributeMap {
    // Every resource is inserted when the map is built.
    &RESOURCE_ATTRIBUTE_MAP[resource.collection()]
}

fn build_attributes(resource: Resource) -> AttributeMap {
    let mut attrs = common_attributes();
    let specific = match resource {
        Resource::PortPair => port_pair_attributes(),
        Resource::PortChain => port_chain_attributes(),
        Resource::PortPairGroup => port_pair_group_attributes(),
    };
    attrs.extend(specific);
    attrs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

fn common_attributes() -> Vec<(&'static str, AttributeSpec)> {
    vec![
        (
            "id",
            AttributeSpec::read_only()
                .validate(Validator::Uuid)
                .primary_key(),
        ),
        (
            "name",
            AttributeSpec::mutable()
                .default_value(json!(""))
                .validate(Validator::String { max_len: NAME_FIELD_SIZE }),
        ),
        (
            "description",
            AttributeSpec::mutable()
                .default_value(json!(""))
                .validate(Validator::String { max_len: DESCRIPTION_FIELD_SIZE }),
        ),
        (
            "tenant_id",
            AttributeSpec::post_only()
                .validate(Validator::String { max_len: PROJECT_ID_FIELD_SIZE })
                .required_by_policy(),
        ),
    ]
}

fn port_pair_attributes() -> Vec<(&'static str, AttributeSpec)> {
    vec![
        ("ingress", AttributeSpec::post_only().validate(Validator::Uuid)),
        ("egress", AttributeSpec::post_only().validate(Validator::Uuid)),
        (
            "service_function_parameters",
            AttributeSpec::post_only()
                .default_value(Value::Null)
                .convert(Converter::SfParameters)
                .validate(Validator::Dict(vec![
                    (
                        "correlation",
                        DictField {
                            default: Value::Null,
                            converter: None,
                            validator: Some(Validator::Values(vec![Value::Null])),
                        },
                    ),
                    (
                        "weight",
                        DictField {
                            default: json!(DEFAULT_SF_WEIGHT),
                            converter: Some(Converter::ToInt),
                            validator: Some(Validator::NonNegative),
                        },
                    ),
                ])),
        ),
    ]
}

fn port_chain_attributes() -> Vec<(&'static str, AttributeSpec)> {
    vec![
        (
            "chain_id",
            AttributeSpec::post_only()
                .default_value(json!(0))
                .convert(Converter::ToInt)
                .validate(Validator::Range {
                    min: 0,
                    max: i64::from(MAX_CHAIN_ID),
                }),
        ),
        (
            // Defaulting to null lets the normalizer report the missing groups.
            "port_pair_groups",
            AttributeSpec::mutable()
                .default_value(Value::Null)
                .convert(Converter::PortPairGroups)
                .validate(Validator::UuidList),
        ),
        (
            "flow_classifiers",
            AttributeSpec::mutable()
                .default_value(Value::Null)
                .convert(Converter::ToList)
                .validate(Validator::UuidList),
        ),
        (
            "chain_parameters",
            AttributeSpec::post_only()
                .default_value(Value::Null)
                .convert(Converter::ChainParameters)
                .validate(Validator::Dict(vec![
                    (
                        "correlation",
                        DictField {
                            default: json!(DEFAULT_CHAIN_CORRELATION),
                            converter: None,
                            validator: Some(Validator::Values(vec![json!(
                                DEFAULT_CHAIN_CORRELATION
                            )])),
                        },
                    ),
                    (
                        "symmetric",
                        DictField {
                            default: json!(DEFAULT_CHAIN_SYMMETRY),
                            converter: Some(Converter::ToBoolean),
                            validator: None,
                        },
                    ),
                ])),
        ),
    ]
}

fn port_pair_group_attributes() -> Vec<(&'static str, AttributeSpec)> {
    vec![
        ("group_id", AttributeSpec::read_only()),
        (
            "port_pairs",
            AttributeSpec::mutable()
                .default_value(Value::Null)
                .convert(Converter::NoneToEmptyList)
                .validate(Validator::UuidList),
        ),
        (
            "port_pair_group_parameters",
            AttributeSpec::post_only()
                .default_value(Value::Null)
                .convert(Converter::PpgParameters)
                .validate(Validator::Dict(vec![(
                    "lb_fields",
                    DictField {
                        default: json!([]),
                        converter: None,
                        validator: Some(Validator::ListOfAllowedValues(&SUPPORTED_LB_FIELDS)),
                    },
                )])),
        ),
    ]
}
