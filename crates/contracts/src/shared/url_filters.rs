//! Typed list filters stored in the URL query string.
//!
//! The query string is the only place filter state lives. [`parse`] reads a
//! [`FilterState`] out of it according to a page's [`FilterConfig`], and
//! [`apply_filter`] writes a single value back, producing the next query
//! string. Both are pure: the same input always gives the same output.

use serde::Serialize;
use std::collections::BTreeMap;

/// Value kind a filter key is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Text,
    Int,
    Bool,
    MultipleText,
    MultipleInt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterField {
    pub key: &'static str,
    pub kind: FilterKind,
}

impl FilterField {
    pub const fn new(key: &'static str, kind: FilterKind) -> Self {
        Self { key, kind }
    }
}

/// Declared set of filters for one list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    fields: &'static [FilterField],
}

impl FilterConfig {
    pub const fn new(fields: &'static [FilterField]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [FilterField] {
        self.fields
    }

    pub fn kind_of(&self, key: &str) -> Option<FilterKind> {
        self.fields.iter().find(|f| f.key == key).map(|f| f.kind)
    }
}

/// A parsed filter value.
///
/// Serializes untagged so it can be dropped straight into GraphQL variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    Text(String),
    Int(i64),
    Bool(bool),
    MultipleText(Vec<String>),
    MultipleInt(Vec<i64>),
}

impl FilterValue {
    /// Single-string form used in the query string.
    ///
    /// Returns `None` for values that are represented by removing the
    /// parameter: the empty string and empty lists.
    pub fn to_param(&self) -> Option<String> {
        match self {
            FilterValue::Text(s) if s.is_empty() => None,
            FilterValue::Text(s) => Some(s.clone()),
            FilterValue::Int(n) => Some(n.to_string()),
            FilterValue::Bool(b) => Some(b.to_string()),
            FilterValue::MultipleText(items) if items.is_empty() => None,
            FilterValue::MultipleText(items) => Some(items.join(",")),
            FilterValue::MultipleInt(items) if items.is_empty() => None,
            FilterValue::MultipleInt(items) => Some(
                items
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
        }
    }

    /// Parse a raw parameter according to `kind`.
    ///
    /// Empty input is always absent. An `Int` that is not a base-10 integer is
    /// treated as absent as well.
    pub fn from_param(kind: FilterKind, raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        match kind {
            FilterKind::Text => Some(FilterValue::Text(raw.to_string())),
            FilterKind::Int => raw.trim().parse::<i64>().ok().map(FilterValue::Int),
            FilterKind::Bool => match raw {
                "true" => Some(FilterValue::Bool(true)),
                "false" => Some(FilterValue::Bool(false)),
                _ => None,
            },
            FilterKind::MultipleText => Some(FilterValue::MultipleText(
                raw.split(',')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            )),
            FilterKind::MultipleInt => Some(FilterValue::MultipleInt(
                raw.split(',')
                    .filter_map(|s| s.trim().parse::<i64>().ok())
                    .collect(),
            )),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FilterValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FilterValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_texts(&self) -> &[String] {
        match self {
            FilterValue::MultipleText(items) => items,
            _ => &[],
        }
    }

    pub fn as_ints(&self) -> &[i64] {
        match self {
            FilterValue::MultipleInt(items) => items,
            _ => &[],
        }
    }
}

/// Filter key → parsed value. Absent keys are simply not present.
pub type FilterState = BTreeMap<String, FilterValue>;

/// Decoded query string, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Decode `?a=1&b=x%2Cy` (leading `?` optional). A repeated key keeps the
    /// last value; `+` decodes to a space.
    pub fn parse(search: &str) -> Self {
        let mut params = BTreeMap::new();
        for pair in search.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(raw_key);
            if key.is_empty() {
                continue;
            }
            params.insert(key, decode_component(raw_value));
        }
        Self(params)
    }

    /// Encode back to `?a=1&b=x%2Cy`, or an empty string when no parameters
    /// remain.
    pub fn to_search(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        let encoded = self
            .0
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", encoded)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Set or remove a parameter. An empty string removes it.
    pub fn set(&mut self, key: &str, value: Option<String>) {
        match value {
            Some(v) if !v.is_empty() => {
                self.0.insert(key.to_string(), v);
            }
            _ => {
                self.0.remove(key);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

/// Read every configured key out of the query string.
pub fn parse(config: &FilterConfig, params: &QueryParams) -> FilterState {
    config
        .fields()
        .iter()
        .filter_map(|field| {
            let raw = params.get(field.key)?;
            let value = FilterValue::from_param(field.kind, raw)?;
            Some((field.key.to_string(), value))
        })
        .collect()
}

/// Produce the query string that results from setting `key` to `value`.
///
/// `None`, the empty string and empty lists remove the parameter. Other
/// parameters are left untouched.
pub fn apply_filter(params: &QueryParams, key: &str, value: Option<&FilterValue>) -> QueryParams {
    let mut next = params.clone();
    next.set(key, value.and_then(FilterValue::to_param));
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: FilterConfig = FilterConfig::new(&[
        FilterField::new("query", FilterKind::Text),
        FilterField::new("office", FilterKind::Int),
        FilterField::new("paid", FilterKind::Bool),
        FilterField::new("status", FilterKind::MultipleText),
        FilterField::new("brands", FilterKind::MultipleInt),
    ]);

    fn state_of(search: &str) -> FilterState {
        parse(&CONFIG, &QueryParams::parse(search))
    }

    #[test]
    fn test_parse_all_kinds() {
        let state = state_of("?query=juan%20perez&office=3&paid=false&status=PENDING,PAID&brands=1,2");
        assert_eq!(state.get("query"), Some(&FilterValue::Text("juan perez".into())));
        assert_eq!(state.get("office"), Some(&FilterValue::Int(3)));
        assert_eq!(state.get("paid"), Some(&FilterValue::Bool(false)));
        assert_eq!(
            state.get("status"),
            Some(&FilterValue::MultipleText(vec!["PENDING".into(), "PAID".into()]))
        );
        assert_eq!(state.get("brands"), Some(&FilterValue::MultipleInt(vec![1, 2])));
    }

    #[test]
    fn test_absent_and_empty_are_omitted() {
        let state = state_of("?query=&office=&unknown=1");
        assert!(state.is_empty());
    }

    #[test]
    fn test_bool_accepts_only_literals() {
        assert!(state_of("?paid=1").get("paid").is_none());
        assert!(state_of("?paid=TRUE").get("paid").is_none());
        assert_eq!(state_of("?paid=true").get("paid"), Some(&FilterValue::Bool(true)));
    }

    #[test]
    fn test_multiple_drops_bad_segments() {
        let state = state_of("?status=,A,,B,&brands=1,x,3,");
        assert_eq!(
            state.get("status"),
            Some(&FilterValue::MultipleText(vec!["A".into(), "B".into()]))
        );
        assert_eq!(state.get("brands"), Some(&FilterValue::MultipleInt(vec![1, 3])));
    }

    #[test]
    fn test_non_numeric_int_is_absent() {
        assert!(state_of("?office=abc").get("office").is_none());
    }

    #[test]
    fn test_empty_values_remove_parameter() {
        let params = QueryParams::parse("?query=abc&status=A");
        let cleared = apply_filter(&params, "status", Some(&FilterValue::MultipleText(vec![])));
        assert_eq!(cleared.get("status"), None);
        let cleared = apply_filter(&cleared, "query", Some(&FilterValue::Text(String::new())));
        assert_eq!(cleared.get("query"), None);
        assert_eq!(cleared.to_search(), "");
    }

    #[test]
    fn test_set_keeps_other_parameters() {
        let params = QueryParams::parse("?page=4&query=abc");
        let next = apply_filter(&params, "office", Some(&FilterValue::Int(7)));
        assert_eq!(next.get("page"), Some("4"));
        assert_eq!(next.get("query"), Some("abc"));
        assert_eq!(next.get("office"), Some("7"));
    }

    #[test]
    fn test_round_trip_through_query_string() {
        let values = [
            ("query", FilterValue::Text("a,b & c".into())),
            ("office", FilterValue::Int(-2)),
            ("paid", FilterValue::Bool(false)),
            ("status", FilterValue::MultipleText(vec!["X".into(), "Y".into()])),
            ("brands", FilterValue::MultipleInt(vec![10, 20])),
        ];
        let mut params = QueryParams::default();
        for (key, value) in &values {
            params = apply_filter(&params, key, Some(value));
        }
        let reparsed = state_of(&params.to_search());
        for (key, value) in &values {
            assert_eq!(reparsed.get(*key), Some(value), "key {}", key);
        }
    }

    #[test]
    fn test_query_params_decoding() {
        let params = QueryParams::parse("a=1&a=2&b=x+y&c");
        assert_eq!(params.get("a"), Some("2"));
        assert_eq!(params.get("b"), Some("x y"));
        assert_eq!(params.get("c"), Some(""));
    }
}
