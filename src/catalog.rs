//! Batch normalization of raw listings into a product-keyed catalog.
//!
//! Each listing is normalized, paired with its numeric offer, and grouped
//! under the [`ProductKey`] it resolves to. Persistence is the caller's
//! concern; the catalog is a plain value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::LOW_CONFIDENCE_THRESHOLD;
use crate::models::{Listing, OfferRecord, ProductDescriptor, ProductKey};
use crate::normalize::normalize_offer;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: i64,
    pub title: String,
    pub source_url: Option<String>,
    pub product: ProductDescriptor,
    pub offer: OfferRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "reason", content = "confidence")]
pub enum RejectReason {
    /// A required attribute could not be extracted from the title.
    Unrecognized,
    /// Normalized, but below the caller's minimum confidence.
    BelowConfidence(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedListing {
    /// Position of the listing in the input.
    pub index: usize,
    pub title: String,
    pub reason: RejectReason,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
    /// Entry ids per product, in input order.
    pub products: BTreeMap<ProductKey, Vec<i64>>,
    pub rejected: Vec<RejectedListing>,
    /// Accepted entries scoring under the low-confidence threshold.
    pub low_confidence: usize,
}

impl Catalog {
    pub fn get(&self, id: i64) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries resolved to `key`, in input order.
    pub fn entries_for(&self, key: &ProductKey) -> Vec<&CatalogEntry> {
        self.products
            .get(key)
            .map(|ids| ids.iter().filter_map(|id| self.get(*id)).collect())
            .unwrap_or_default()
    }

    pub fn offers(&self) -> Vec<OfferRecord> {
        self.entries.iter().map(|e| e.offer.clone()).collect()
    }
}

// ---------------------------------------------------------------------------
// Building
// ---------------------------------------------------------------------------

/// Normalize `listings` into a catalog.
///
/// Entry ids are assigned 1-based in input order, so a later listing ranks
/// as newer. Listings that fail normalization, or score under
/// `min_confidence`, are recorded in `rejected` and get no id.
pub fn build_catalog(listings: &[Listing], min_confidence: f64) -> Catalog {
    let mut catalog = Catalog::default();

    for (index, listing) in listings.iter().enumerate() {
        let Some(product) = normalize_offer(listing) else {
            catalog.rejected.push(RejectedListing {
                index,
                title: listing.title.clone(),
                reason: RejectReason::Unrecognized,
            });
            continue;
        };

        if product.confidence < min_confidence {
            catalog.rejected.push(RejectedListing {
                index,
                title: listing.title.clone(),
                reason: RejectReason::BelowConfidence(product.confidence),
            });
            continue;
        }

        if product.confidence < LOW_CONFIDENCE_THRESHOLD {
            warn!(
                title = %listing.title,
                confidence = product.confidence,
                "low confidence normalization"
            );
            catalog.low_confidence += 1;
        }

        let id = catalog.entries.len() as i64 + 1;
        let offer = listing.to_offer(id, product.pack_count);
        catalog.products.entry(product.key()).or_default().push(id);
        catalog.entries.push(CatalogEntry {
            id,
            title: listing.title.clone(),
            source_url: listing.source_url.clone(),
            product,
            offer,
        });
    }

    catalog
}
