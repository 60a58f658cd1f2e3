//! Offer normalization and effective-cost ranking.
//!
//! Compares shopping offers for a single commodity category (diapers) across
//! stores by a normalized effective cost per unit rather than sticker price.
//! Two pure subsystems make up the core:
//!
//! - [`normalize`] turns a free-text listing title into a
//!   [`ProductDescriptor`](models::ProductDescriptor) with a confidence score.
//! - [`pricing`] computes effective totals and per-unit costs, ranks batches
//!   deterministically, and renders evidence text for each calculation.
//!
//! # Quick start
//!
//! ```
//! use offer_engine::models::{Listing, SortKey};
//! use offer_engine::OfferEngine;
//!
//! let engine = OfferEngine::builder().attach_evidence(true).build().unwrap();
//!
//! let mut listing = Listing::new("メリーズ さらさらエアスルー パンツ M 58枚", 1980);
//! listing.coupon = Some(200);
//! listing.points_percent = Some(5.0);
//!
//! let catalog = engine.catalog(&[listing]);
//! let ranked = engine.rank(&catalog.offers(), SortKey::Cpp);
//! assert_eq!(ranked[0].calculation.effective_total, 1780 - 89);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod offer_query;
pub mod pricing;

pub use catalog::{build_catalog, Catalog, CatalogEntry};
pub use config::{CONSERVATIVE_CALC_POLICY, DEFAULT_CALC_POLICY};
pub use error::{OfferError, Result, ValidationError};
pub use normalize::{normalize_offer, normalize_title, select_best_normalization};
pub use offer_query::{OfferPage, OfferQuery, PageMeta, RankedListing};
pub use pricing::{compute_effective, generate_evidence, process_offers};

use std::fmt;

use models::{
    CalcPolicy, CalculationResult, Listing, OfferRecord, ProductDescriptor, RankedOffer, SortKey,
};

// ---------------------------------------------------------------------------
// OfferEngineBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`OfferEngine`].
///
/// Use [`OfferEngine::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](OfferEngineBuilder::build).
pub struct OfferEngineBuilder {
    policy: CalcPolicy,
    attach_evidence: bool,
    min_confidence: f64,
}

impl Default for OfferEngineBuilder {
    fn default() -> Self {
        Self {
            policy: DEFAULT_CALC_POLICY,
            attach_evidence: false,
            min_confidence: 0.0,
        }
    }
}

impl OfferEngineBuilder {
    /// Set the calculation policy. Defaults to [`DEFAULT_CALC_POLICY`].
    pub fn policy(mut self, policy: CalcPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Attach evidence text to ranked offers. Defaults to `false`.
    pub fn attach_evidence(mut self, attach: bool) -> Self {
        self.attach_evidence = attach;
        self
    }

    /// Minimum normalization confidence for a listing to enter a catalog.
    ///
    /// Defaults to `0.0` (keep every successful normalization).
    pub fn min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Validate the configuration and build the engine.
    pub fn build(self) -> Result<OfferEngine> {
        self.policy.validate()?;
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(OfferError::InvalidArgument(format!(
                "min_confidence must be within [0, 1], got {}",
                self.min_confidence
            )));
        }
        Ok(OfferEngine {
            policy: self.policy,
            attach_evidence: self.attach_evidence,
            min_confidence: self.min_confidence,
        })
    }
}

// ---------------------------------------------------------------------------
// OfferEngine
// ---------------------------------------------------------------------------

/// Entry point bundling a validated [`CalcPolicy`] with ranking options.
///
/// Holds no mutable state; every method is a pure function of its inputs
/// and the configuration, so one engine can be shared across threads.
#[derive(Debug, Clone)]
pub struct OfferEngine {
    policy: CalcPolicy,
    attach_evidence: bool,
    min_confidence: f64,
}

impl OfferEngine {
    pub fn builder() -> OfferEngineBuilder {
        OfferEngineBuilder::default()
    }

    pub fn policy(&self) -> &CalcPolicy {
        &self.policy
    }

    // -- Normalizer --------------------------------------------------------

    /// Normalize one listing. `None` means the title could not be structured.
    pub fn normalize(&self, listing: &Listing) -> Option<ProductDescriptor> {
        normalize_offer(listing)
    }

    /// Normalize a batch of listings into a product-keyed catalog.
    pub fn catalog(&self, listings: &[Listing]) -> Catalog {
        build_catalog(listings, self.min_confidence)
    }

    // -- Calculator --------------------------------------------------------

    pub fn compute(
        &self,
        offer: &OfferRecord,
    ) -> std::result::Result<CalculationResult, ValidationError> {
        compute_effective(offer, &self.policy)
    }

    /// Rank offers, attaching evidence if the engine was built to.
    pub fn rank(&self, offers: &[OfferRecord], sort: SortKey) -> Vec<RankedOffer> {
        let ranked = process_offers(offers, &self.policy, sort);
        if self.attach_evidence {
            pricing::attach_evidence(ranked, &self.policy)
        } else {
            ranked
        }
    }

    pub fn evidence(&self, offer: &OfferRecord, calculation: &CalculationResult) -> String {
        generate_evidence(offer, calculation, &self.policy)
    }

    /// Run a catalog query under this engine's policy.
    ///
    /// Evidence is attached when either the engine or the query asks for it.
    pub fn search(&self, catalog: &Catalog, query: &OfferQuery) -> Result<OfferPage> {
        if self.attach_evidence {
            query.clone().with_evidence(true).run(catalog, &self.policy)
        } else {
            query.run(catalog, &self.policy)
        }
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for OfferEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OfferEngine(include_points={}, limited_point_factor={}, include_subscription={}, evidence={}, min_confidence={})",
            self.policy.include_points,
            self.policy.limited_point_factor,
            self.policy.include_subscription,
            self.attach_evidence,
            self.min_confidence
        )
    }
}
