//! Single-attribute extractors over a lower-cased listing title.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{
    BRAND_ALIASES, DEFAULT_SERIES, SERIES_PATTERNS, SIZE_PATTERNS, TYPE_ALIASES,
    UNIT_COUNT_MAX, UNIT_COUNT_MIN, UNIT_COUNT_PATTERNS, WEIGHT_BUCKETS, WEIGHT_RANGE_PATTERN,
};
use crate::models::{ProductSize, ProductType};

static SIZE_REGEXES: LazyLock<Vec<(ProductSize, Regex)>> = LazyLock::new(|| {
    SIZE_PATTERNS
        .iter()
        .map(|(size, pattern)| (*size, Regex::new(pattern).expect("invalid size pattern")))
        .collect()
});

static WEIGHT_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WEIGHT_RANGE_PATTERN).expect("invalid weight pattern"));

static UNIT_COUNT_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    UNIT_COUNT_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("invalid unit count pattern"))
        .collect()
});

/// Canonical brand of the first alias contained in the title.
pub fn extract_brand(title: &str) -> Option<&'static str> {
    BRAND_ALIASES
        .iter()
        .find(|(alias, _)| title.contains(alias))
        .map(|(_, brand)| *brand)
}

/// Size from an explicit size token, else from a weight range.
pub fn extract_size(title: &str) -> Option<ProductSize> {
    SIZE_REGEXES
        .iter()
        .find(|(_, re)| re.is_match(title))
        .map(|(size, _)| *size)
        .or_else(|| size_from_weight(title))
}

fn size_from_weight(title: &str) -> Option<ProductSize> {
    let caps = WEIGHT_RANGE.captures(title)?;
    let upper: u32 = caps[2].parse().ok()?;
    let size = WEIGHT_BUCKETS
        .iter()
        .find(|(max, _)| upper <= *max)
        .map(|(_, size)| *size)
        .unwrap_or(ProductSize::Xl);
    Some(size)
}

pub fn extract_type(title: &str) -> Option<ProductType> {
    TYPE_ALIASES
        .iter()
        .find(|(alias, _)| title.contains(alias))
        .map(|(_, ty)| *ty)
}

/// First count inside the sanity window, scanning patterns in order.
///
/// Out-of-window numbers are skipped, not clamped.
pub fn extract_unit_count(title: &str) -> Option<i64> {
    UNIT_COUNT_REGEXES
        .iter()
        .flat_map(|re| re.captures_iter(title))
        .filter_map(|caps| caps[1].parse::<i64>().ok())
        .find(|n| (UNIT_COUNT_MIN..=UNIT_COUNT_MAX).contains(n))
}

/// Product line for `brand`, or the generic fallback label.
pub fn extract_series(title: &str, brand: &str) -> String {
    SERIES_PATTERNS
        .iter()
        .find(|(b, _)| *b == brand)
        .and_then(|(_, lines)| lines.iter().find(|line| title.contains(*line)))
        .map(|line| line.to_string())
        .unwrap_or_else(|| DEFAULT_SERIES.to_string())
}
