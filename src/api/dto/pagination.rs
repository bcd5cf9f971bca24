//! Pagination query parameters.

use crate::domain::pagination::Page;

/// Raw query string pairs in request order, repeated keys included.
pub type QueryPairs = Vec<(String, String)>;

/// `?start=&count=` query parameters for listing endpoints.
///
/// Values are kept as raw strings so that a non-numeric value is treated as
/// absent instead of rejecting the request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub start: Option<String>,
    pub count: Option<String>,
}

impl ListParams {
    /// Picks `start` and `count` out of decoded query pairs.
    ///
    /// When a key repeats, its first value is used. Unknown keys are ignored.
    pub fn from_pairs(pairs: QueryPairs) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "start" => &mut params.start,
                "count" => &mut params.count,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Converts the raw values into a clamped [`Page`].
    ///
    /// Each value is parsed on its own. Missing or non-numeric values become
    /// `0` before clamping, so an empty query yields `start=0, count=10`.
    pub fn into_page(self) -> Page {
        Page::clamped(parse_or_zero(self.start), parse_or_zero(self.count))
    }
}

fn parse_or_zero(raw: Option<String>) -> i64 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(0)
}
