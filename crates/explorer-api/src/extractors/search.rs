//! Search query string extractor.

use std::collections::HashMap;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_core::types::pagination::{DEFAULT_PAGE, PageRequest};

use crate::error::ApiError;
use crate::state::AppState;

/// Parsed `?q=&page=&limit=` parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub q: String,
    pub page: PageRequest,
}

impl SearchQuery {
    /// Parse raw query parameters.
    ///
    /// `q` is required and non-empty. `page` and `limit` are read from
    /// their leading digits (`2abc` is 2) and fall back to their defaults
    /// when absent, non-numeric or zero. Negative values are rejected.
    pub fn parse(params: &HashMap<String, String>, default_limit: u64) -> AppResult<Self> {
        let q = params.get("q").map(String::as_str).unwrap_or_default();
        if q.is_empty() {
            return Err(AppError::validation("Search query is required"));
        }

        let page = positive_or(params.get("page"), "page", DEFAULT_PAGE)?;
        let limit = positive_or(params.get("limit"), "limit", default_limit.max(1))?;

        Ok(Self {
            q: q.to_string(),
            page: PageRequest::new(page, limit)?,
        })
    }
}

fn positive_or(raw: Option<&String>, name: &str, default: u64) -> AppResult<u64> {
    match raw.and_then(|s| leading_int(s)) {
        Some((true, n)) if n > 0 => Err(AppError::validation(format!(
            "{name} must be greater than 0"
        ))),
        Some((false, n)) if n > 0 => Ok(n),
        _ => Ok(default),
    }
}

/// Reads the integer prefix of `raw` as `(negative, magnitude)`: optional
/// sign, then digits. Trailing text is ignored and the magnitude saturates.
fn leading_int(raw: &str) -> Option<(bool, u64)> {
    let s = raw.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    });
    Some((negative, magnitude))
}

impl FromRequestParts<AppState> for SearchQuery {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::validation(format!("Invalid query string: {e}")))?;
        Ok(Self::parse(&params, state.config.search.default_limit)?)
    }
}
