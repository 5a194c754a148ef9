//! Page bookkeeping for list queries.
//!
//! The page number lives in the query string next to the filters, under
//! [`PAGE_KEY`]. Variables sent to the API merge the caller's defaults, the
//! filter state, the fixed [`PAGE_SIZE`] and the active page.

use super::url_filters::{FilterState, QueryParams};
use serde::Deserialize;
use serde_json::{Map, Value};

pub const PAGE_SIZE: u32 = 20;
pub const PAGE_KEY: &str = "page";
pub const LIMIT_KEY: &str = "limit";

/// One page of results as reported by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    pub count: u32,
    pub no_pages: u32,
}

impl<T> Paginated<T> {
    pub fn totals(&self) -> (u32, u32) {
        (self.count, self.no_pages)
    }
}

/// Totals to show once a fetch has settled. A failure clears them so the
/// controls don't offer pages of a result that is no longer on screen.
pub fn settled_totals<T, E>(outcome: &Result<Paginated<T>, E>) -> Option<(u32, u32)> {
    outcome.as_ref().ok().map(Paginated::totals)
}

/// Derived pagination attributes. Totals and flags stay `None` until a
/// result has arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub active_page: u32,
    pub limit: u32,
    pub count: Option<u32>,
    pub no_pages: Option<u32>,
    pub has_next_page: Option<bool>,
    pub has_previous_page: Option<bool>,
}

impl Pagination {
    /// `totals` is `(count, no_pages)` from the last successful fetch.
    pub fn derive(active_page: u32, totals: Option<(u32, u32)>) -> Self {
        let active_page = active_page.max(1);
        match totals {
            Some((count, no_pages)) => Self {
                active_page,
                limit: PAGE_SIZE,
                count: Some(count),
                no_pages: Some(no_pages),
                has_next_page: Some(active_page < no_pages),
                has_previous_page: Some(active_page > 1),
            },
            None => Self {
                active_page,
                limit: PAGE_SIZE,
                count: None,
                no_pages: None,
                has_next_page: None,
                has_previous_page: None,
            },
        }
    }

    pub fn can_go_next(&self) -> bool {
        self.has_next_page.unwrap_or(false)
    }

    pub fn can_go_previous(&self) -> bool {
        self.has_previous_page.unwrap_or(false)
    }
}

/// Active page from the query string; absent, unparsable or < 1 means 1.
pub fn active_page(params: &QueryParams) -> u32 {
    params
        .get(PAGE_KEY)
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|page| *page >= 1)
        .map(|page| page.min(u32::MAX as i64) as u32)
        .unwrap_or(1)
}

/// Merge defaults, filters, limit and page into one variables object.
/// Later sources win on key clashes.
pub fn build_variables(defaults: &Value, filters: &FilterState, page: u32) -> Value {
    let mut vars = match defaults {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    for (key, value) in filters {
        if key == PAGE_KEY {
            continue;
        }
        if let Ok(json) = serde_json::to_value(value) {
            vars.insert(key.clone(), json);
        }
    }
    vars.insert(LIMIT_KEY.to_string(), Value::from(PAGE_SIZE));
    vars.insert(PAGE_KEY.to_string(), Value::from(page.max(1)));
    Value::Object(vars)
}

/// Stable cache key for a variables object: object keys are sorted at every
/// depth so insertion order never matters.
pub fn cache_key(variables: &Value) -> String {
    let mut out = String::new();
    write_canonical(variables, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String((*key).clone()).to_string());
                out.push(':');
                write_canonical(&map[key.as_str()], out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        other => out.push_str(&other.to_string()),
    }
}

/// Whether anything but the page differs between two filter snapshots.
pub fn filters_changed(previous: &FilterState, current: &FilterState) -> bool {
    let strip = |state: &FilterState| {
        state
            .iter()
            .filter(|(k, _)| k.as_str() != PAGE_KEY)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<FilterState>()
    };
    strip(previous) != strip(current)
}

/// Query string to navigate to after a render, if the page must go back to 1.
///
/// `previous` is the snapshot taken on the previous render (`None` on the
/// first one). Returns `None` when nothing needs to change.
pub fn page_reset(
    previous: Option<&FilterState>,
    current: &FilterState,
    params: &QueryParams,
) -> Option<QueryParams> {
    let previous = previous?;
    if !filters_changed(previous, current) || params.get(PAGE_KEY).is_none() {
        return None;
    }
    let mut next = params.clone();
    next.set(PAGE_KEY, None);
    Some(next)
}

/// Query string for moving to `page`. Page 1 is stored as no parameter.
pub fn with_page(params: &QueryParams, page: u32) -> QueryParams {
    let mut next = params.clone();
    if page <= 1 {
        next.set(PAGE_KEY, None);
    } else {
        next.set(PAGE_KEY, Some(page.to_string()));
    }
    next
}

/// Query string for a CSV export of the list currently shown.
///
/// Built from the parsed filter state, so unknown keys and values the list
/// ignored are not sent. Scalar defaults (e.g. the ordering) come first and
/// filters win on clashes. The page is never included.
pub fn export_params(defaults: &Value, filters: &FilterState) -> QueryParams {
    let mut params = QueryParams::default();
    if let Value::Object(map) = defaults {
        for (key, value) in map {
            let raw = match value {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            };
            params.set(key, raw);
        }
    }
    for (key, value) in filters {
        params.set(key, value.to_param());
    }
    params.set(PAGE_KEY, None);
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::url_filters::{parse, FilterConfig, FilterField, FilterKind, FilterValue};
    use serde_json::json;

    const CONFIG: FilterConfig = FilterConfig::new(&[
        FilterField::new("query", FilterKind::Text),
        FilterField::new("status", FilterKind::MultipleText),
    ]);

    #[test]
    fn test_active_page_defaults() {
        assert_eq!(active_page(&QueryParams::parse("")), 1);
        assert_eq!(active_page(&QueryParams::parse("?page=0")), 1);
        assert_eq!(active_page(&QueryParams::parse("?page=-3")), 1);
        assert_eq!(active_page(&QueryParams::parse("?page=abc")), 1);
        assert_eq!(active_page(&QueryParams::parse("?page=5")), 5);
    }

    #[test]
    fn test_derive_flags() {
        let before = Pagination::derive(1, None);
        assert_eq!(before.has_next_page, None);
        assert_eq!(before.has_previous_page, None);
        assert!(!before.can_go_next());

        let first = Pagination::derive(1, Some((45, 3)));
        assert_eq!(first.has_next_page, Some(true));
        assert_eq!(first.has_previous_page, Some(false));

        let middle = Pagination::derive(2, Some((45, 3)));
        assert_eq!(middle.has_next_page, Some(true));
        assert_eq!(middle.has_previous_page, Some(true));

        let last = Pagination::derive(3, Some((45, 3)));
        assert_eq!(last.has_next_page, Some(false));
        assert_eq!(last.has_previous_page, Some(true));
        assert_eq!(last.count, Some(45));
        assert_eq!(last.limit, 20);
    }

    #[test]
    fn test_build_variables_merges_in_order() {
        let mut filters = FilterState::new();
        filters.insert("query".into(), FilterValue::Text("ana".into()));
        filters.insert("status".into(), FilterValue::MultipleText(vec!["PAID".into()]));
        let vars = build_variables(&json!({ "office": 2, "query": "ignored", "limit": 99 }), &filters, 3);
        assert_eq!(
            vars,
            json!({ "office": 2, "query": "ana", "status": ["PAID"], "limit": 20, "page": 3 })
        );
    }

    #[test]
    fn test_cache_key_ignores_key_order() {
        let a = json!({ "b": 1, "a": { "y": [1, 2], "x": "z" } });
        let b = json!({ "a": { "x": "z", "y": [1, 2] }, "b": 1 });
        assert_eq!(cache_key(&a), cache_key(&b));
        assert_ne!(cache_key(&a), cache_key(&json!({ "b": 2, "a": { "x": "z", "y": [1, 2] } })));
    }

    #[test]
    fn test_filter_change_resets_page() {
        let before = QueryParams::parse("?query=ana&page=4");
        let after = QueryParams::parse("?query=anal&page=4");
        let prev = parse(&CONFIG, &before);
        let current = parse(&CONFIG, &after);
        let next = page_reset(Some(&prev), &current, &after).expect("page must reset");
        assert_eq!(active_page(&next), 1);
        assert_eq!(next.get("query"), Some("anal"));
    }

    #[test]
    fn test_page_change_alone_keeps_filters() {
        let before = QueryParams::parse("?query=ana&status=PAID");
        let after = with_page(&before, 2);
        let prev = parse(&CONFIG, &before);
        let current = parse(&CONFIG, &after);
        assert!(page_reset(Some(&prev), &current, &after).is_none());
        assert_eq!(after.get("query"), Some("ana"));
        assert_eq!(after.get("status"), Some("PAID"));
        assert_eq!(active_page(&after), 2);
    }

    #[test]
    fn test_first_render_never_resets() {
        let params = QueryParams::parse("?query=ana&page=3");
        let current = parse(&CONFIG, &params);
        assert!(page_reset(None, &current, &params).is_none());
    }

    #[test]
    fn test_paginated_decoding() {
        let page: Paginated<u32> =
            serde_json::from_value(json!({ "results": [1, 2], "count": 2, "noPages": 1 })).unwrap();
        assert_eq!(page.totals(), (2, 1));
        assert_eq!(page.results, vec![1, 2]);
    }

    #[test]
    fn test_export_params_follow_parsed_filters() {
        const EXPORTED: FilterConfig = FilterConfig::new(&[
            FilterField::new("number", FilterKind::Int),
            FilterField::new("status", FilterKind::MultipleText),
            FilterField::new("paid", FilterKind::Bool),
        ]);
        let params = QueryParams::parse("?number=abc&paid=1&status=PAID,ACTIVE&utm=x&page=3");
        let state = parse(&EXPORTED, &params);
        let export = export_params(&json!({ "ordering": "-contract_start" }), &state);
        assert_eq!(export.get("status"), Some("PAID,ACTIVE"));
        assert_eq!(export.get("ordering"), Some("-contract_start"));
        assert_eq!(export.get("number"), None);
        assert_eq!(export.get("paid"), None);
        assert_eq!(export.get("utm"), None);
        assert_eq!(export.get(PAGE_KEY), None);
    }

    #[test]
    fn test_export_params_keep_false_and_zero() {
        const FLAGS: FilterConfig = FilterConfig::new(&[
            FilterField::new("number", FilterKind::Int),
            FilterField::new("paid", FilterKind::Bool),
        ]);
        let state = parse(&FLAGS, &QueryParams::parse("?number=0&paid=false"));
        let export = export_params(&Value::Null, &state);
        assert_eq!(export.to_search(), "?number=0&paid=false");
    }

    #[test]
    fn test_failed_fetch_clears_navigation() {
        let ok: Result<Paginated<u8>, ()> = Ok(Paginated {
            results: vec![],
            count: 45,
            no_pages: 3,
        });
        let after_ok = Pagination::derive(2, settled_totals(&ok));
        assert_eq!(after_ok.has_next_page, Some(true));

        let failed: Result<Paginated<u8>, ()> = Err(());
        let after_error = Pagination::derive(2, settled_totals(&failed));
        assert_eq!(after_error.has_next_page, None);
        assert_eq!(after_error.count, None);
        assert!(!after_error.can_go_next());
    }
}
