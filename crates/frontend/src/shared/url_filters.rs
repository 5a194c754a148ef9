//! List filters kept in the URL query string.
//!
//! The query string is the only copy of a list page's filter state: the hook
//! reads it through the router location and writes it back with a `replace`
//! navigation, so no page keeps a private mutable copy.

use contracts::shared::pagination::with_page;
use contracts::shared::throttle::{KeyedThrottle, SEARCH_THROTTLE_MS};
use contracts::shared::url_filters::{
    apply_filter, parse, FilterConfig, FilterState, FilterValue, QueryParams,
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct UrlFilters {
    /// Decoded query string
    pub params: Memo<QueryParams>,
    /// Typed values of the configured keys
    pub state: Memo<FilterState>,
    pathname: Memo<String>,
    navigate: StoredValue<Rc<dyn Fn(&str)>, LocalStorage>,
    throttle: StoredValue<KeyedThrottle<String, Option<FilterValue>>, LocalStorage>,
}

pub fn use_url_filters(config: &'static FilterConfig) -> UrlFilters {
    let location = use_location();
    let search = location.search;
    let pathname = location.pathname;

    let params = Memo::new(move |_| QueryParams::parse(&search.get()));
    let state = Memo::new(move |_| parse(config, &params.get()));

    let navigate = use_navigate();
    let navigate: Rc<dyn Fn(&str)> = Rc::new(move |url: &str| {
        navigate(
            url,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        )
    });

    UrlFilters {
        params,
        state,
        pathname,
        navigate: StoredValue::new_local(navigate),
        throttle: StoredValue::new_local(KeyedThrottle::new()),
    }
}

impl UrlFilters {
    pub fn get(&self, key: &str) -> Option<FilterValue> {
        self.state.with(|s| s.get(key).cloned())
    }

    pub fn text(&self, key: &str) -> String {
        self.state
            .with(|s| s.get(key).and_then(|v| v.as_text()).map(str::to_string))
            .unwrap_or_default()
    }

    pub fn texts(&self, key: &str) -> Vec<String> {
        self.state
            .with(|s| s.get(key).map(|v| v.as_texts().to_vec()))
            .unwrap_or_default()
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        self.state.with(|s| s.get(key).and_then(FilterValue::as_int))
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.state.with(|s| s.get(key).and_then(FilterValue::as_bool))
    }

    /// Replace the URL with `params` (no new history entry).
    pub fn replace_query(&self, params: &QueryParams) {
        let url = format!("{}{}", self.pathname.get_untracked(), params.to_search());
        self.navigate.with_value(|navigate| navigate(&url));
    }

    /// Write one filter. `None`, empty text and empty lists remove the parameter.
    pub fn set_filter(&self, key: &str, value: Option<FilterValue>) {
        let next = apply_filter(&self.params.get_untracked(), key, value.as_ref());
        self.replace_query(&next);
    }

    /// Like [`set_filter`](Self::set_filter), at most once per window and
    /// key; the last value of the window is the one written.
    pub fn set_search_throttled(&self, key: &str, value: Option<FilterValue>) {
        let key = key.to_string();
        let arm = self
            .throttle
            .try_update_value(|t| t.push(key.clone(), value))
            .unwrap_or(false);
        if !arm {
            return;
        }

        let this = *self;
        Timeout::new(SEARCH_THROTTLE_MS, move || {
            // None when the page was left before the window closed
            if let Some(Some(value)) = this.throttle.try_update_value(|t| t.flush(&key)) {
                this.set_filter(&key, value);
            }
        })
        .forget();
    }

    /// A throttled write to `key` is waiting for its window to close
    pub fn search_pending(&self, key: &str) -> bool {
        self.throttle
            .try_with_value(|t| t.is_armed(&key.to_string()))
            .unwrap_or(false)
    }

    pub fn set_page(&self, page: u32) {
        let next = with_page(&self.params.get_untracked(), page);
        self.replace_query(&next);
    }

    /// Drop every filter and the page
    pub fn clear(&self) {
        self.replace_query(&QueryParams::default());
    }
}
