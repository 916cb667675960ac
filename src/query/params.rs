//! List query parameters
//!
//! `page` and `limit` arrive as raw strings. They are read the way
//! browsers' `parseInt` reads them: skip leading whitespace, take the
//! leading decimal digits, ignore the rest. Anything that yields no digits
//! or zero falls back to the default. Digit runs too large for `usize`
//! saturate to `usize::MAX`.

use std::num::IntErrorKind;

use serde::Deserialize;

/// Page used when none (or an unusable one) is supplied
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when none (or an unusable one) is supplied
pub const DEFAULT_LIMIT: usize = 10;

/// Raw query string parameters of `GET /items`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

/// Normalized list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Lowercased search term; `None` means no filtering
    pub search: Option<String>,
    /// 1-based page number
    pub page: usize,
    pub limit: usize,
}

impl PageRequest {
    pub fn new(search: Option<&str>, page: usize, limit: usize) -> Self {
        Self {
            search: search.filter(|s| !s.is_empty()).map(str::to_lowercase),
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn from_params(params: &ListParams) -> Self {
        Self::new(
            params.q.as_deref(),
            parse_positive(params.page.as_deref()).unwrap_or(DEFAULT_PAGE),
            parse_positive(params.limit.as_deref()).unwrap_or(DEFAULT_LIMIT),
        )
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// Parse the leading digits of `raw`, rejecting zero and saturating overflow.
fn parse_positive(raw: Option<&str>) -> Option<usize> {
    let trimmed = raw?.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    let value = match trimmed[..digits_end].parse::<usize>() {
        Ok(n) => n,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => usize::MAX,
        Err(_) => return None,
    };
    Some(value).filter(|n| *n > 0)
}
