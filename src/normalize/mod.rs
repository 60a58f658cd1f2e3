//! Listing-title normalizer.
//!
//! Turns a free-text title into a [`ProductDescriptor`]. A miss on any
//! required attribute (brand, size, type, unit count) yields `None`; the
//! normalizer never errors.

pub mod confidence;
pub mod extract;

use tracing::debug;

use crate::models::{Listing, ProductDescriptor};

/// Normalize a raw listing by its title.
pub fn normalize_offer(listing: &Listing) -> Option<ProductDescriptor> {
    normalize_title(&listing.title)
}

/// Extract a product descriptor from a free-text title.
///
/// Attributes are resolved in order (brand, size, type, unit count) and the
/// first miss short-circuits. The series falls back to a generic label and
/// never causes a miss.
pub fn normalize_title(raw_title: &str) -> Option<ProductDescriptor> {
    let title = raw_title.to_lowercase();

    let Some(brand) = extract::extract_brand(&title) else {
        debug!(title = raw_title, "brand not found");
        return None;
    };
    let Some(size) = extract::extract_size(&title) else {
        debug!(title = raw_title, "size not found");
        return None;
    };
    let Some(product_type) = extract::extract_type(&title) else {
        debug!(title = raw_title, "type not found");
        return None;
    };
    let Some(pack_count) = extract::extract_unit_count(&title) else {
        debug!(title = raw_title, "pack count not found");
        return None;
    };

    let series = extract::extract_series(&title, brand);
    let confidence = confidence::score(&title, brand, size, product_type, pack_count);

    Some(ProductDescriptor {
        brand: brand.to_string(),
        series,
        product_type,
        size,
        pack_count,
        confidence,
    })
}

/// The candidate with the strictly highest confidence.
///
/// Ties keep the earliest candidate. Empty input yields `None`.
pub fn select_best_normalization(candidates: &[ProductDescriptor]) -> Option<&ProductDescriptor> {
    candidates.iter().fold(None, |best, current| match best {
        Some(b) if current.confidence <= b.confidence => Some(b),
        _ => Some(current),
    })
}
