//! Shared fixtures for the offer-engine integration tests.
//!
//! `base_offer()` is the reference offer (3980 yen, 500 coupon, 100 units,
//! 5% points after coupon). `sample_listings()` mirrors a small store feed
//! with one listing per brand, one of them a subscription.

#![allow(dead_code)]

use offer_engine::models::{Listing, OfferRecord, PointsBase, PointsRule};

pub fn base_offer() -> OfferRecord {
    OfferRecord {
        id: 1,
        price: 3980,
        coupon: 500,
        shipping: 0,
        unit_count: 100,
        points: PointsRule::Percent(5.0),
        points_base: PointsBase::PostCoupon,
        is_subscription: false,
        tax_included: true,
    }
}

pub fn offer(id: i64, price: i64, unit_count: i64) -> OfferRecord {
    OfferRecord {
        id,
        price,
        unit_count,
        ..base_offer()
    }
}

/// Five listings, in this order:
///
/// 1. Pampers NB tape, 88 units, 1% points            -> 1565 total
/// 2. Merries M pants, 58 units, 200 coupon, 5%        -> 1691 total
/// 3. Moony S tape, 84 units, 350 shipping, 2% pre     -> 2058 total
/// 4. Pampers L pants, 44 units, subscription, 3%      -> 1504 total
/// 5. GooN XL pants, 38 units, 150 fixed points        -> 1730 total
pub fn sample_listings() -> Vec<Listing> {
    vec![
        Listing {
            points_percent: Some(1.0),
            source_url: Some("https://shop.example/pampers-nb".into()),
            ..Listing::new("パンパース 肌へのいちばん テープ 新生児 88枚", 1580)
        },
        Listing {
            coupon: Some(200),
            points_percent: Some(5.0),
            ..Listing::new("メリーズ さらさらエアスルー パンツ M 58枚", 1980)
        },
        Listing {
            shipping: Some(350),
            points_percent: Some(2.0),
            points_base: PointsBase::PreCoupon,
            ..Listing::new("ムーニー エアフィット テープ S 84枚", 1750)
        },
        Listing {
            coupon: Some(100),
            points_percent: Some(3.0),
            is_subscription: Some(true),
            ..Listing::new("パンパース さらさらパンツ L 44枚 定期便", 1650)
        },
        Listing {
            points_fixed: Some(150),
            ..Listing::new("グーン まっさらさら パンツ XL 38枚", 1880)
        },
    ]
}

pub fn ids<T>(items: &[T], id_of: impl Fn(&T) -> i64) -> Vec<i64> {
    items.iter().map(id_of).collect()
}
