//! Filtered, sorted, paginated views over a [`Catalog`].
//!
//! Builder methods return `&mut Self` for chaining. Filters are exact
//! matches on the normalized product; subscription offers follow the
//! policy passed to [`OfferQuery::run`].
//!
//! # Example
//!
//! ```rust
//! use offer_engine::models::{ProductSize, SortKey};
//! use offer_engine::{build_catalog, OfferQuery, DEFAULT_CALC_POLICY};
//!
//! let catalog = build_catalog(&[], 0.0);
//! let page = OfferQuery::new()
//!     .brand("Merries")
//!     .size(ProductSize::M)
//!     .sort(SortKey::Cpp)
//!     .per(10)
//!     .run(&catalog, &DEFAULT_CALC_POLICY)
//!     .unwrap();
//! assert_eq!(page.meta.total, 0);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogEntry};
use crate::config::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::error::{OfferError, Result};
use crate::models::{
    CalcPolicy, CalculationResult, OfferRecord, ProductDescriptor, ProductSize, ProductType,
    SortKey,
};
use crate::pricing::evidence::generate_evidence;
use crate::pricing::ranking::rank_by;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedListing {
    pub id: i64,
    pub title: String,
    pub source_url: Option<String>,
    pub product: ProductDescriptor,
    pub offer: OfferRecord,
    pub calculation: CalculationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: usize,
    pub per: usize,
    /// Matching items before pagination.
    pub total: usize,
    pub calc_policy: CalcPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferPage {
    pub meta: PageMeta,
    pub items: Vec<RankedListing>,
}

// ---------------------------------------------------------------------------
// OfferQuery
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct OfferQuery {
    brand: Option<String>,
    size: Option<ProductSize>,
    product_type: Option<ProductType>,
    sort: SortKey,
    page: usize,
    per: usize,
    with_evidence: bool,
}

impl Default for OfferQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl OfferQuery {
    pub fn new() -> Self {
        Self {
            brand: None,
            size: None,
            product_type: None,
            sort: SortKey::Cpp,
            page: DEFAULT_PAGE,
            per: DEFAULT_PER_PAGE,
            with_evidence: false,
        }
    }

    /// Keep only products of this canonical brand.
    pub fn brand(&mut self, brand: &str) -> &mut Self {
        self.brand = Some(brand.to_string());
        self
    }

    pub fn size(&mut self, size: ProductSize) -> &mut Self {
        self.size = Some(size);
        self
    }

    pub fn product_type(&mut self, product_type: ProductType) -> &mut Self {
        self.product_type = Some(product_type);
        self
    }

    pub fn sort(&mut self, sort: SortKey) -> &mut Self {
        self.sort = sort;
        self
    }

    /// 1-based page number.
    pub fn page(&mut self, page: usize) -> &mut Self {
        self.page = page;
        self
    }

    pub fn per(&mut self, per: usize) -> &mut Self {
        self.per = per;
        self
    }

    /// Attach evidence text to the returned items.
    pub fn with_evidence(&mut self, with_evidence: bool) -> &mut Self {
        self.with_evidence = with_evidence;
        self
    }

    /// Filter, rank, and slice `catalog` under `policy`.
    ///
    /// Entries whose calculation fails are left out and do not count
    /// toward `meta.total`. A page past the end is empty, not an error.
    pub fn run(&self, catalog: &Catalog, policy: &CalcPolicy) -> Result<OfferPage> {
        if self.page == 0 {
            return Err(OfferError::InvalidArgument("page must be at least 1".into()));
        }
        if self.per == 0 {
            return Err(OfferError::InvalidArgument("per must be at least 1".into()));
        }
        policy.validate()?;

        let matching: Vec<&CatalogEntry> = catalog
            .entries
            .iter()
            .filter(|e| self.matches(&e.product))
            .collect();

        let ranked = rank_by(&matching, policy, self.sort, entry_offer);
        let total = ranked.len();

        let items = ranked
            .into_iter()
            .skip((self.page - 1).saturating_mul(self.per))
            .take(self.per)
            .map(|(entry, calculation)| RankedListing {
                id: entry.id,
                title: entry.title.clone(),
                source_url: entry.source_url.clone(),
                product: entry.product.clone(),
                offer: entry.offer.clone(),
                evidence: self
                    .with_evidence
                    .then(|| generate_evidence(&entry.offer, &calculation, policy)),
                calculation,
            })
            .collect();

        Ok(OfferPage {
            meta: PageMeta {
                page: self.page,
                per: self.per,
                total,
                calc_policy: *policy,
            },
            items,
        })
    }

    fn matches(&self, product: &ProductDescriptor) -> bool {
        self.brand.as_deref().map_or(true, |b| product.brand == b)
            && self.size.map_or(true, |s| product.size == s)
            && self.product_type.map_or(true, |t| product.product_type == t)
    }
}

fn entry_offer<'a>(entry: &'a &CatalogEntry) -> &'a OfferRecord {
    &entry.offer
}
