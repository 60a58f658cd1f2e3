//! Effective total and per-unit cost for a single offer.

use crate::error::ValidationError;
use crate::models::{CalcPolicy, CalculationResult, OfferRecord, PointsBase, PointsRule};

/// Compute the comparable cost of one offer under `policy`.
///
/// Points are resolved first (fixed amount, else `floor(base * pct / 100)`)
/// and then discounted with a second `floor(points * factor)`. The two floors
/// are applied in sequence; folding them into one multiply changes results
/// on boundary values.
///
/// The effective total always subtracts the real coupon and adds shipping;
/// `points_base` only picks the subtotal the percentage applies to.
///
/// # Errors
///
/// [`ValidationError`] when `unit_count <= 0`, `price < 0`, or `coupon < 0`.
/// Amounts whose sum leaves the `i64` range are reported against
/// `shipping` (subtotal) or `points` (final deduction).
pub fn compute_effective(
    offer: &OfferRecord,
    policy: &CalcPolicy,
) -> Result<CalculationResult, ValidationError> {
    validate(offer)?;

    let paid = (offer.price - offer.coupon)
        .checked_add(offer.shipping)
        .ok_or_else(|| ValidationError::new("shipping", offer.shipping))?;
    let base_amount = match offer.points_base {
        PointsBase::PostCoupon => paid,
        PointsBase::PreCoupon => offer
            .price
            .checked_add(offer.shipping)
            .ok_or_else(|| ValidationError::new("shipping", offer.shipping))?,
    };

    let points_yen = if policy.include_points {
        let raw = match offer.points {
            PointsRule::Fixed(amount) => amount,
            PointsRule::Percent(pct) if pct > 0.0 => {
                (base_amount as f64 * pct / 100.0).floor() as i64
            }
            _ => 0,
        };
        (raw as f64 * policy.limited_point_factor).floor() as i64
    } else {
        0
    };

    let effective_total = paid
        .checked_sub(points_yen)
        .ok_or_else(|| ValidationError::new("points", points_yen))?;

    Ok(CalculationResult {
        base_amount,
        points_yen,
        effective_total,
        yen_per_sheet: effective_total as f64 / offer.unit_count as f64,
    })
}

fn validate(offer: &OfferRecord) -> Result<(), ValidationError> {
    if offer.unit_count <= 0 {
        return Err(ValidationError::new("unitCount", offer.unit_count));
    }
    if offer.price < 0 {
        return Err(ValidationError::new("price", offer.price));
    }
    if offer.coupon < 0 {
        return Err(ValidationError::new("coupon", offer.coupon));
    }
    Ok(())
}
