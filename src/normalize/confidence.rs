//! Advisory confidence for a normalization.
//!
//! The score measures how literally the extracted attributes are written in
//! the title. Nothing in the normalizer rejects on it.

use crate::config::{
    CONFIDENCE_BASELINE, CONFIDENCE_BRAND, CONFIDENCE_SIZE, CONFIDENCE_TYPE,
    CONFIDENCE_UNIT_COUNT, UNIT_WORD,
};
use crate::models::{ProductSize, ProductType};

/// Score a lower-cased title against its extracted attributes.
pub fn score(
    title: &str,
    brand: &str,
    size: ProductSize,
    product_type: ProductType,
    unit_count: i64,
) -> f64 {
    let mut confidence = CONFIDENCE_BASELINE;

    if title.contains(&brand.to_lowercase()) {
        confidence += CONFIDENCE_BRAND;
    }
    if contains_ascii_token(title, &size.as_str().to_lowercase()) {
        confidence += CONFIDENCE_SIZE;
    }
    if title.contains(product_type.native_token()) {
        confidence += CONFIDENCE_TYPE;
    }
    if title.contains(&format!("{}{}", unit_count, UNIT_WORD)) {
        confidence += CONFIDENCE_UNIT_COUNT;
    }

    confidence.min(1.0)
}

/// `token` occurs with no ASCII letter directly before or after it.
fn contains_ascii_token(haystack: &str, token: &str) -> bool {
    haystack.match_indices(token).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + token.len()..].chars().next();
        !before.is_some_and(|c| c.is_ascii_alphabetic())
            && !after.is_some_and(|c| c.is_ascii_alphabetic())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_boundaries() {
        assert!(contains_ascii_token("テープ m 58枚", "m"));
        assert!(contains_ascii_token("mサイズ", "m"));
        assert!(!contains_ascii_token("moony", "m"));
        assert!(!contains_ascii_token("pampers", "s"));
        assert!(contains_ascii_token("size:xl", "xl"));
    }

    #[test]
    fn fully_literal_title_caps_at_one() {
        let c = score(
            "pampers テープ m 58枚",
            "Pampers",
            ProductSize::M,
            ProductType::Tape,
            58,
        );
        assert_eq!(c, 1.0);
    }

    #[test]
    fn localized_brand_alias_earns_no_brand_increment() {
        let c = score(
            "パンパース テープ m 58枚",
            "Pampers",
            ProductSize::M,
            ProductType::Tape,
            58,
        );
        assert!((c - 0.9).abs() < 1e-9);
    }
}
