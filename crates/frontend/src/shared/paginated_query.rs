//! Paginated list queries bound to the URL filters.
//!
//! Variables are rebuilt from the query string on every change; a result is
//! cached per variables set, and a response that arrives after its variables
//! were superseded is dropped.

use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::{
    active_page, build_variables, cache_key, page_reset, settled_totals, Paginated, Pagination,
};
use contracts::shared::query_state::QueryState;
use contracts::shared::url_filters::{FilterConfig, FilterState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;

use super::url_filters::{use_url_filters, UrlFilters};

pub struct PaginatedQuery<T: Send + Sync + 'static> {
    pub filters: UrlFilters,
    pub result: RwSignal<QueryState<Paginated<T>>>,
    pub pagination: Memo<Pagination>,
    pub variables: Memo<Value>,
    refetch_tick: RwSignal<u32>,
    cache: StoredValue<HashMap<String, Paginated<T>>, LocalStorage>,
}

impl<T: Send + Sync + 'static> Clone for PaginatedQuery<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for PaginatedQuery<T> {}

impl<T: Clone + Send + Sync + 'static> PaginatedQuery<T> {
    /// Rows of the current page, empty while loading or on error
    pub fn rows(&self) -> Vec<T> {
        self.result
            .with(|r| r.data().map(|p| p.results.clone()))
            .unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.result.with(QueryState::is_loading)
    }

    pub fn error(&self) -> Option<ApiError> {
        self.result.with(|r| r.error().cloned())
    }

    pub fn set_page(&self, page: u32) {
        self.filters.set_page(page);
    }

    /// Forget cached pages and fetch the current one again (after a mutation).
    pub fn refetch(&self) {
        self.cache.update_value(|c| c.clear());
        self.refetch_tick.update(|n| *n = n.wrapping_add(1));
    }
}

/// Bind a list fetch to the URL filters of `config`.
///
/// `defaults` are merged under the filters; `limit` and `page` are always set.
pub fn use_paginated_query<T, F, Fut>(
    config: &'static FilterConfig,
    defaults: Value,
    fetch: F,
) -> PaginatedQuery<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(Value) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<Paginated<T>, ApiError>> + 'static,
{
    let filters = use_url_filters(config);
    let result = RwSignal::new(QueryState::<Paginated<T>>::Loading);
    let totals = RwSignal::new(None::<(u32, u32)>);
    let refetch_tick = RwSignal::new(0u32);
    let cache = StoredValue::new_local(HashMap::<String, Paginated<T>>::new());
    let generation = StoredValue::new(0u64);

    let page = Memo::new(move |_| filters.params.with(active_page));
    let variables = Memo::new(move |_| build_variables(&defaults, &filters.state.get(), page.get()));
    let pagination = Memo::new(move |_| Pagination::derive(page.get(), totals.get()));

    // Fetch whenever the variables change
    Effect::new(move |_| {
        let vars = variables.get();
        refetch_tick.track();

        let key = cache_key(&vars);
        if let Some(hit) = cache.with_value(|c| c.get(&key).cloned()) {
            generation.update_value(|g| *g += 1);
            totals.set(Some(hit.totals()));
            result.set(QueryState::Success(hit));
            return;
        }

        generation.update_value(|g| *g += 1);
        let current = generation.get_value();
        result.set(QueryState::Loading);
        log::debug!("Fetching list with {}", key);

        let fetch = fetch.clone();
        spawn_local(async move {
            let outcome = fetch(vars).await;
            // Superseded by newer variables or the page is gone
            if generation.try_get_value() != Some(current) {
                log::debug!("Dropping stale response for {}", key);
                return;
            }
            totals.set(settled_totals(&outcome));
            match outcome {
                Ok(page) => {
                    cache.update_value(|c| {
                        c.insert(key, page.clone());
                    });
                    result.set(QueryState::Success(page));
                }
                Err(e) => {
                    log::warn!("List fetch failed: {}", e);
                    result.set(QueryState::Error(e));
                }
            }
        });
    });

    // Back to page 1 whenever a filter other than the page changed
    Effect::new(move |previous: Option<FilterState>| {
        let current = filters.state.get();
        if let Some(next) = page_reset(previous.as_ref(), &current, &filters.params.get_untracked()) {
            filters.replace_query(&next);
        }
        current
    });

    PaginatedQuery {
        filters,
        result,
        pagination,
        variables,
        refetch_tick,
        cache,
    }
}
