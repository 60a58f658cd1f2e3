//! Property tests for the calculator and ranking.

use offer_engine::models::{CalcPolicy, OfferRecord, PointsBase, PointsRule, SortKey};
use offer_engine::{compute_effective, process_offers};
use proptest::prelude::*;

fn arb_points() -> impl Strategy<Value = PointsRule> {
    prop_oneof![
        Just(PointsRule::NoPoints),
        (0i64..5_000).prop_map(PointsRule::Fixed),
        (0.0f64..20.0).prop_map(PointsRule::Percent),
    ]
}

fn arb_offer() -> impl Strategy<Value = OfferRecord> {
    (
        1i64..10_000,
        0i64..100_000,
        0i64..2_000,
        1i64..500,
        arb_points(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_flat_map(|(id, price, shipping, unit_count, points, pre, sub)| {
            (0..=price).prop_map(move |coupon| OfferRecord {
                id,
                price,
                coupon,
                shipping,
                unit_count,
                points,
                points_base: if pre {
                    PointsBase::PreCoupon
                } else {
                    PointsBase::PostCoupon
                },
                is_subscription: sub,
                tax_included: true,
            })
        })
}

fn arb_policy() -> impl Strategy<Value = CalcPolicy> {
    (any::<bool>(), 0.0f64..=1.0, any::<bool>()).prop_map(|(points, factor, sub)| CalcPolicy {
        include_points: points,
        limited_point_factor: factor,
        include_subscription: sub,
    })
}

proptest! {
    #[test]
    fn per_unit_cost_is_total_over_units(offer in arb_offer(), policy in arb_policy()) {
        let r = compute_effective(&offer, &policy).unwrap();
        prop_assert_eq!(r.yen_per_sheet, r.effective_total as f64 / offer.unit_count as f64);
    }

    #[test]
    fn computation_is_deterministic(offer in arb_offer(), policy in arb_policy()) {
        let a = compute_effective(&offer, &policy).unwrap();
        let b = compute_effective(&offer, &policy).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn larger_coupon_never_raises_total(
        offer in arb_offer(),
        policy in arb_policy(),
        extra in 0i64..1_000,
    ) {
        let bigger = OfferRecord { coupon: offer.coupon + extra, ..offer.clone() };
        let base = compute_effective(&offer, &policy).unwrap();
        let discounted = compute_effective(&bigger, &policy).unwrap();
        prop_assert!(discounted.effective_total <= base.effective_total);
    }

    #[test]
    fn excluding_points_ignores_points_fields(offer in arb_offer(), policy in arb_policy()) {
        let policy = CalcPolicy { include_points: false, ..policy };
        let r = compute_effective(&offer, &policy).unwrap();
        prop_assert_eq!(r.points_yen, 0);
        prop_assert_eq!(r.effective_total, offer.price - offer.coupon + offer.shipping);
    }

    #[test]
    fn cpp_ranking_is_sorted(
        offers in prop::collection::vec(arb_offer(), 0..20),
        policy in arb_policy(),
    ) {
        let ranked = process_offers(&offers, &policy, SortKey::Cpp);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].calculation.yen_per_sheet <= pair[1].calculation.yen_per_sheet);
        }
        if !policy.include_subscription {
            prop_assert!(ranked.iter().all(|r| !r.offer.is_subscription));
        }
    }
}
