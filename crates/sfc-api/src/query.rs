// SPDX-FileCopyrightText: 2026 Networking SFC Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filtering, sorting, and marker pagination of resource lists.
//!
//! Plugins that keep resources in memory, or that fetch more than a page
//! from their backend, can hand the result to [`apply_list_query`].

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;
use sfc_core::{ListQuery, Resource, SfcError, SortDirection};
use uuid::Uuid;

/// Filter, sort, and page `items` according to `query`.
///
/// Sorting always ends on `id` so pages are stable. With `page_reverse`
/// the page is taken walking backwards from the marker and returned in
/// forward order.
pub fn apply_list_query<T, F>(
    resource: Resource,
    items: Vec<T>,
    query: &ListQuery,
    id_of: F,
) -> Result<Vec<T>, SfcError>
where
    T: Serialize,
    F: Fn(&T) -> Uuid,
{
    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        let repr = serde_json::to_value(&item)
            .map_err(|e| SfcError::Internal(format!("cannot serialize {resource}: {e}")))?;
        if query.matches(&repr) {
            rows.push((repr, item));
        }
    }

    let mut sorts = query.sorts.clone();
    if !sorts.iter().any(|(key, _)| key == "id") {
        sorts.push(("id".to_string(), SortDirection::Asc));
    }
    rows.sort_by(|(a, _), (b, _)| {
        sorts
            .iter()
            .map(|(key, direction)| {
                let ord = compare(a.get(key), b.get(key));
                let ord = if *direction == SortDirection::Desc { ord.reverse() } else { ord };
                if query.page_reverse { ord.reverse() } else { ord }
            })
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    });

    let start = match query.marker {
        Some(marker) => {
            let pos = rows
                .iter()
                .position(|(_, item)| id_of(item) == marker)
                .ok_or_else(|| SfcError::InvalidAttribute {
                    resource: resource.singular(),
                    attribute: "marker".to_string(),
                    reason: format!("marker {marker} not found"),
                })?;
            pos + 1
        }
        None => 0,
    };

    let mut page: Vec<T> = rows
        .into_iter()
        .skip(start)
        .take(query.limit.unwrap_or(usize::MAX))
        .map(|(_, item)| item)
        .collect();
    if query.page_reverse {
        page.reverse();
    }
    Ok(page)
}

fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a, b) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Null, _) => Ordering::Less,
            (_, Value::Null) => Ordering::Greater,
            (Value::Number(x), Value::Number(y)) => x
                .as_f64()
                .partial_cmp(&y.as_f64())
                .unwrap_or(Ordering::Equal),
            (Value::String(x), Value::String(y)) => x.cmp(y),
            (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
            (x, y) => x.to_string().cmp(&y.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize)]
    struct Row {
        id: Uuid,
        name: String,
        chain_id: u16,
    }

    fn rows() -> Vec<Row> {
        (1..=5)
            .map(|i| Row {
                id: Uuid::from_u128(i),
                name: format!("pc{}", 6 - i),
                chain_id: (i % 2) as u16,
            })
            .collect()
    }

    fn ids(rows: &[Row]) -> Vec<u128> {
        rows.iter().map(|r| r.id.as_u128()).collect()
    }

    fn run(query: &ListQuery) -> Vec<Row> {
        apply_list_query(Resource::PortChain, rows(), query, |r| r.id).unwrap()
    }

    #[test]
    fn default_order_is_by_id() {
        assert_eq!(ids(&run(&ListQuery::new())), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn filters_then_sorts() {
        let q = ListQuery::new()
            .filter("chain_id", "1")
            .sort("name", SortDirection::Asc);
        assert_eq!(ids(&run(&q)), vec![5, 3, 1]);
    }

    #[test]
    fn marker_and_limit_page_forward() {
        let q = ListQuery::new().limit(2).marker(Uuid::from_u128(2));
        assert_eq!(ids(&run(&q)), vec![3, 4]);
    }

    #[test]
    fn reverse_pages_walk_backwards() {
        let q = ListQuery::new().limit(2).marker(Uuid::from_u128(4)).reversed();
        assert_eq!(ids(&run(&q)), vec![2, 3]);
    }

    #[test]
    fn unknown_marker_is_invalid() {
        let q = ListQuery::new().marker(Uuid::from_u128(99));
        let err = apply_list_query(Resource::PortChain, rows(), &q, |r| r.id).unwrap_err();
        assert!(err.to_string().contains("marker"));
    }
}
