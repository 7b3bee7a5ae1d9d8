// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request context and list parameters passed to plugin operations.

use std::collections::BTreeMap;

use serde_json::Value;
use uuid::Uuid;

/// Identity of the caller on whose behalf an operation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Tenant (project) the request is scoped to.
    pub tenant_id: String,
    pub user_id: Option<String>,
    /// Admin callers may act on other tenants' resources.
    pub is_admin: bool,
    /// Correlation id for logs.
    pub request_id: String,
}

impl RequestContext {
    /// Context for a regular tenant user.
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            user_id: None,
            is_admin: false,
            request_id: format!("req-{}", Uuid::new_v4()),
        }
    }

    /// Context carrying admin privileges.
    pub fn admin(tenant_id: impl Into<String>) -> Self {
        Self {
            is_admin: true,
            ..Self::new(tenant_id)
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

/// Sort direction of one sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Filtering, field selection, sorting, and pagination of a list request.
///
/// Filters map an attribute name to the values it may take; a resource
/// matches when every filtered attribute holds one of its values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub filters: BTreeMap<String, Vec<String>>,
    pub fields: Option<Vec<String>>,
    pub sorts: Vec<(String, SortDirection)>,
    pub limit: Option<usize>,
    /// Id of the last resource of the previous page.
    pub marker: Option<Uuid>,
    pub page_reverse: bool,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters
            .entry(attribute.into())
            .or_default()
            .push(value.into());
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn sort(mut self, attribute: impl Into<String>, direction: SortDirection) -> Self {
        self.sorts.push((attribute.into(), direction));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn marker(mut self, marker: Uuid) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn reversed(mut self) -> Self {
        self.page_reverse = true;
        self
    }

    /// Check a serialized representation against the filters.
    ///
    /// Scalars compare by their string form; list attributes match when any
    /// element matches. A filter on an attribute the representation lacks
    /// never matches.
    pub fn matches(&self, representation: &Value) -> bool {
        self.filters.iter().all(|(attribute, wanted)| {
            match representation.get(attribute) {
                Some(Value::Array(items)) => items
                    .iter()
                    .any(|item| wanted.iter().any(|w| scalar_eq(item, w))),
                Some(value) => wanted.iter().any(|w| scalar_eq(value, w)),
                None => false,
            }
        })
    }
}

fn scalar_eq(value: &Value, wanted: &str) -> bool {
    match value {
        Value::String(s) => s == wanted,
        Value::Null => wanted.is_empty(),
        Value::Bool(b) => wanted.eq_ignore_ascii_case(&b.to_string()),
        Value::Number(n) => n.to_string() == wanted,
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn admin_context_keeps_tenant() {
        let ctx = RequestContext::admin("t1").with_user("u1");
        assert!(ctx.is_admin);
        assert_eq!(ctx.tenant_id, "t1");
        assert_eq!(ctx.user_id.as_deref(), Some("u1"));
        assert!(ctx.request_id.starts_with("req-"));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(ListQuery::new().matches(&json!({"name": "x"})));
    }

    #[test]
    fn filters_match_scalars_and_lists() {
        let repr = json!({
            "name": "chain1",
            "chain_id": 7,
            "flow_classifiers": ["fc1", "fc2"],
        });
        assert!(ListQuery::new().filter("name", "chain1").matches(&repr));
        assert!(ListQuery::new().filter("chain_id", "7").matches(&repr));
        assert!(ListQuery::new().filter("flow_classifiers", "fc2").matches(&repr));
        assert!(!ListQuery::new().filter("name", "other").matches(&repr));
        assert!(!ListQuery::new().filter("missing", "x").matches(&repr));
    }

    #[test]
    fn multiple_values_for_one_attribute_are_alternatives() {
        let repr = json!({"name": "b"});
        let query = ListQuery::new().filter("name", "a").filter("name", "b");
        assert!(query.matches(&repr));
    }

    #[test]
    fn builder_sets_paging() {
        let marker = Uuid::from_u128(9);
        let q = ListQuery::new()
            .fields(["id", "name"])
            .sort("name", SortDirection::Desc)
            .limit(2)
            .marker(marker)
            .reversed();
        assert_eq!(q.fields.as_deref(), Some(&["id".to_string(), "name".to_string()][..]));
        assert_eq!(q.sorts, vec![("name".to_string(), SortDirection::Desc)]);
        assert_eq!(q.limit, Some(2));
        assert_eq!(q.marker, Some(marker));
        assert!(q.page_reverse);
    }
}
