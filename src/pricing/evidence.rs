//! Human-readable derivation of an effective cost.
//!
//! Clause order is fixed: price, coupon, shipping, points (with its source
//! and base), limited-point factor, result, divisor. A clause only appears
//! when its term is non-zero (or, for the factor, not 1).

use crate::models::{CalcPolicy, CalculationResult, OfferRecord, PointsBase, PointsRule};

/// Render the calculation trace for one offer.
///
/// ```
/// use offer_engine::models::{OfferRecord, PointsRule};
/// use offer_engine::pricing::{compute_effective, generate_evidence};
/// use offer_engine::DEFAULT_CALC_POLICY;
///
/// let mut offer = OfferRecord::new(1, 3980, 100);
/// offer.coupon = 500;
/// offer.points = PointsRule::Percent(5.0);
/// let calc = compute_effective(&offer, &DEFAULT_CALC_POLICY).unwrap();
/// assert_eq!(
///     generate_evidence(&offer, &calc, &DEFAULT_CALC_POLICY),
///     "価格: ¥3,980 - クーポン: ¥500 - ポイント還元: ¥174 (5%、クーポン適用後¥3,480が対象) = ¥3,306 (¥33.06/枚) ÷ 100枚"
/// );
/// ```
pub fn generate_evidence(
    offer: &OfferRecord,
    calculation: &CalculationResult,
    policy: &CalcPolicy,
) -> String {
    let mut evidence = format!("価格: ¥{}", yen(offer.price));
    if offer.coupon > 0 {
        evidence.push_str(&format!(" - クーポン: ¥{}", yen(offer.coupon)));
    }
    if offer.shipping > 0 {
        evidence.push_str(&format!(" + 送料: ¥{}", yen(offer.shipping)));
    }

    if policy.include_points && calculation.points_yen > 0 {
        evidence.push_str(&format!(" - ポイント還元: ¥{}", yen(calculation.points_yen)));
        match offer.points {
            PointsRule::Fixed(amount) => {
                evidence.push_str(&format!(" (固定{}円)", amount));
            }
            PointsRule::Percent(pct) => {
                let base = match offer.points_base {
                    PointsBase::PostCoupon => "クーポン適用後",
                    PointsBase::PreCoupon => "適用前",
                };
                evidence.push_str(&format!(
                    " ({}%、{}¥{}が対象)",
                    pct,
                    base,
                    yen(calculation.base_amount)
                ));
            }
            PointsRule::NoPoints => {}
        }

        if policy.limited_point_factor != 1.0 {
            evidence.push_str(&format!(
                " ※期間限定ポイント換算係数: {}",
                policy.limited_point_factor
            ));
        }
    }

    evidence.push_str(&format!(
        " = ¥{} (¥{}/枚)",
        yen(calculation.effective_total),
        per_unit(calculation.yen_per_sheet)
    ));
    evidence.push_str(&format!(" ÷ {}枚", offer.unit_count));

    evidence
}

/// Integer amount with comma thousands separators.
fn yen(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Two decimals, with an exact half rounded away from zero.
///
/// Only a value whose binary expansion lands exactly on a half hundredth
/// is a tie; `0.145` is stored below the half and still renders `0.14`.
fn per_unit(value: f64) -> String {
    match doubled_hundredths_tie(value) {
        Some(doubled) => {
            let hundredths = (doubled + 1) / 2;
            let sign = if value < 0.0 { "-" } else { "" };
            format!("{sign}{}.{:02}", hundredths / 100, hundredths % 100)
        }
        None => format!("{:.2}", value),
    }
}

/// `Some(q)` when `|value| * 200` is exactly the odd integer `q`.
fn doubled_hundredths_tie(value: f64) -> Option<u64> {
    let bits = value.abs().to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i64;
    if exponent == 0 || exponent == 0x7ff {
        return None;
    }
    let mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);
    // |value| == mantissa * 2^-shift
    let shift = 1075 - exponent;
    if shift <= 0 || shift >= 62 {
        return None;
    }
    let doubled = mantissa * 200;
    if doubled & ((1u64 << shift) - 1) != 0 {
        return None;
    }
    let q = doubled >> shift;
    (q % 2 == 1).then_some(q)
}

#[cfg(test)]
mod tests {
    use super::{per_unit, yen};

    #[test]
    fn per_unit_rounds_exact_halves_away_from_zero() {
        assert_eq!(per_unit(16.625), "16.63");
        assert_eq!(per_unit(0.125), "0.13");
        assert_eq!(per_unit(-16.625), "-16.63");
        assert_eq!(per_unit(2.5), "2.50");
    }

    #[test]
    fn per_unit_keeps_nearest_for_inexact_halves() {
        assert_eq!(per_unit(29.0 / 200.0), "0.14");
        assert_eq!(per_unit(33.06), "33.06");
        assert_eq!(per_unit(1730.0 / 38.0), "45.53");
        assert_eq!(per_unit(0.0), "0.00");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(yen(0), "0");
        assert_eq!(yen(999), "999");
        assert_eq!(yen(1000), "1,000");
        assert_eq!(yen(1234567), "1,234,567");
        assert_eq!(yen(-3480), "-3,480");
    }
}
