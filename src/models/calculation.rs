use serde::{Deserialize, Serialize};

use super::offer::OfferRecord;

// ---------------------------------------------------------------------------
// CalculationResult — Derived cost figures for one offer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Subtotal the points percentage was applied to.
    pub base_amount: i64,
    /// Points value after fixed/percent resolution and the limited-point factor.
    pub points_yen: i64,
    pub effective_total: i64,
    /// `effective_total / unit_count`, not rounded.
    pub yen_per_sheet: f64,
}

// ---------------------------------------------------------------------------
// RankedOffer — An offer annotated with its calculation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedOffer {
    pub offer: OfferRecord,
    pub calculation: CalculationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}
