//! Literal evidence text for the clause rules.

mod common;

use offer_engine::models::{CalcPolicy, OfferRecord, PointsBase, PointsRule};
use offer_engine::{
    compute_effective, generate_evidence, CONSERVATIVE_CALC_POLICY, DEFAULT_CALC_POLICY,
};

fn render(offer: &OfferRecord, policy: &CalcPolicy) -> String {
    let calc = compute_effective(offer, policy).unwrap();
    generate_evidence(offer, &calc, policy)
}

#[test]
fn percent_points_after_coupon() {
    assert_eq!(
        render(&common::base_offer(), &DEFAULT_CALC_POLICY),
        "価格: ¥3,980 - クーポン: ¥500 - ポイント還元: ¥174 (5%、クーポン適用後¥3,480が対象) = ¥3,306 (¥33.06/枚) ÷ 100枚"
    );
}

#[test]
fn percent_points_before_coupon() {
    let offer = OfferRecord {
        points_base: PointsBase::PreCoupon,
        ..common::base_offer()
    };
    assert_eq!(
        render(&offer, &DEFAULT_CALC_POLICY),
        "価格: ¥3,980 - クーポン: ¥500 - ポイント還元: ¥199 (5%、適用前¥3,980が対象) = ¥3,281 (¥32.81/枚) ÷ 100枚"
    );
}

#[test]
fn fixed_points_without_coupon() {
    let offer = OfferRecord {
        id: 5,
        price: 1880,
        coupon: 0,
        unit_count: 38,
        points: PointsRule::Fixed(150),
        ..common::base_offer()
    };
    assert_eq!(
        render(&offer, &DEFAULT_CALC_POLICY),
        "価格: ¥1,880 - ポイント還元: ¥150 (固定150円) = ¥1,730 (¥45.53/枚) ÷ 38枚"
    );
}

#[test]
fn shipping_clause_follows_coupon() {
    let offer = OfferRecord {
        price: 1750,
        coupon: 0,
        shipping: 350,
        unit_count: 84,
        points: PointsRule::Percent(2.0),
        points_base: PointsBase::PreCoupon,
        ..common::base_offer()
    };
    assert_eq!(
        render(&offer, &DEFAULT_CALC_POLICY),
        "価格: ¥1,750 + 送料: ¥350 - ポイント還元: ¥42 (2%、適用前¥2,100が対象) = ¥2,058 (¥24.50/枚) ÷ 84枚"
    );
}

#[test]
fn factor_annotation_only_when_not_one() {
    let text = render(&common::base_offer(), &CONSERVATIVE_CALC_POLICY);
    assert_eq!(
        text,
        "価格: ¥3,980 - クーポン: ¥500 - ポイント還元: ¥121 (5%、クーポン適用後¥3,480が対象) ※期間限定ポイント換算係数: 0.7 = ¥3,359 (¥33.59/枚) ÷ 100枚"
    );
    assert!(!render(&common::base_offer(), &DEFAULT_CALC_POLICY).contains("※"));
}

#[test]
fn excluded_points_leave_no_points_clause() {
    let policy = CalcPolicy {
        include_points: false,
        limited_point_factor: 0.5,
        ..DEFAULT_CALC_POLICY
    };
    assert_eq!(
        render(&common::base_offer(), &policy),
        "価格: ¥3,980 - クーポン: ¥500 = ¥3,480 (¥34.80/枚) ÷ 100枚"
    );
}

#[test]
fn zero_points_leave_no_points_clause() {
    let offer = OfferRecord {
        points: PointsRule::NoPoints,
        ..common::base_offer()
    };
    let text = render(&offer, &CONSERVATIVE_CALC_POLICY);
    assert!(!text.contains("ポイント還元"));
    assert!(!text.contains("係数"));
}

#[test]
fn fractional_percent_is_rendered_as_given() {
    let offer = OfferRecord {
        points: PointsRule::Percent(2.5),
        ..common::base_offer()
    };
    let text = render(&offer, &DEFAULT_CALC_POLICY);
    assert!(text.contains("ポイント還元: ¥87 (2.5%、クーポン適用後¥3,480が対象)"));
}

#[test]
fn per_unit_half_cent_rounds_up() {
    let offer = OfferRecord::new(1, 3325, 200);
    assert_eq!(
        render(&offer, &DEFAULT_CALC_POLICY),
        "価格: ¥3,325 = ¥3,325 (¥16.63/枚) ÷ 200枚"
    );
}

#[test]
fn per_unit_below_half_cent_rounds_down() {
    // 29 / 200 is stored just under 0.145.
    let offer = OfferRecord::new(1, 29, 200);
    assert!(render(&offer, &DEFAULT_CALC_POLICY).contains("(¥0.14/枚)"));
}
