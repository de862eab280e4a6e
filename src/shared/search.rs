//! Search results and match ordering
//!
//! The backend answers a search with an array of `{"Match": "87.50%",
//! "sources": "https://..."}` objects. Older deployments sent the match as
//! a bare number, so both forms are accepted.

use std::cmp::Ordering;

use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Body of the search call.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    #[serde(rename = "text/URL")]
    pub query: String,
}

/// Raw match value as sent by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchValue {
    Number(f64),
    Text(String),
}

impl MatchValue {
    /// Numeric percentage, if the value can be read as one.
    pub fn percent(&self) -> Option<f64> {
        match self {
            MatchValue::Number(value) => Some(*value).filter(|v| v.is_finite()),
            MatchValue::Text(text) => text
                .trim()
                .trim_end_matches('%')
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite()),
        }
    }

    /// Text shown on the result card.
    pub fn display(&self) -> String {
        match self {
            MatchValue::Number(value) => format!("{value}"),
            MatchValue::Text(text) => text.clone(),
        }
    }
}

/// One ranked source for a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "Match", default)]
    pub match_value: Option<MatchValue>,
    #[serde(rename = "sources", default)]
    pub source_url: Option<String>,
}

impl SearchResult {
    pub fn percent(&self) -> Option<f64> {
        self.match_value.as_ref().and_then(MatchValue::percent)
    }

    /// Host name of the source, falling back to the raw string when it is
    /// not an absolute URL.
    pub fn source_host(&self) -> Option<String> {
        let raw = self.source_url.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        match Url::parse(raw) {
            Ok(url) => url.host_str().map(str::to_string).or_else(|| Some(raw.to_string())),
            Err(_) => Some(raw.to_string()),
        }
    }
}

/// Sort in place by descending match. The sort is stable and results
/// without a readable match go last, in their original order.
pub fn sort_by_match(results: &mut [SearchResult]) {
    results.sort_by(|a, b| match (a.percent(), b.percent()) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
