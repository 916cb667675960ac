//! Search and pagination over a loaded collection

use serde::Serialize;

use super::params::PageRequest;
use crate::store::Item;

/// One page of a (possibly filtered) collection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
    /// Matching items before pagination
    pub total_items: usize,
    pub items: Vec<Item>,
}

/// Filter `items` by name and cut out the requested page.
pub fn run_query(items: Vec<Item>, request: &PageRequest) -> QueryResult {
    let filtered: Vec<Item> = match request.search.as_deref() {
        Some(term) => items
            .into_iter()
            .filter(|item| item.name_contains(term))
            .collect(),
        None => items,
    };

    let total_items = filtered.len();
    let start = request.page.saturating_sub(1).saturating_mul(request.limit);

    let items = filtered
        .into_iter()
        .skip(start)
        .take(request.limit)
        .collect();

    QueryResult {
        page: request.page,
        limit: request.limit,
        total_pages: total_items.div_ceil(request.limit),
        total_items,
        items,
    }
}
