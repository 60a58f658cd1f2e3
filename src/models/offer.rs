use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PointsBase — Subtotal a percentage points rate applies to
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PointsBase {
    PreCoupon,
    #[default]
    PostCoupon,
}

// ---------------------------------------------------------------------------
// PointsRule — How a listing awards loyalty points
// ---------------------------------------------------------------------------

/// Loyalty points attached to an offer.
///
/// A fixed amount always wins over a percentage; [`PointsRule::from_fields`]
/// applies that precedence when converting from the loose optional pair
/// collectors usually hand over.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "camelCase")]
pub enum PointsRule {
    #[default]
    NoPoints,
    /// Absolute point value in currency units.
    Fixed(i64),
    /// Percentage of the points base.
    Percent(f64),
}

impl PointsRule {
    pub fn from_fields(points_percent: Option<f64>, points_fixed: Option<i64>) -> Self {
        match (points_fixed, points_percent) {
            (Some(fixed), _) => PointsRule::Fixed(fixed),
            (None, Some(pct)) if pct > 0.0 => PointsRule::Percent(pct),
            _ => PointsRule::NoPoints,
        }
    }
}

// ---------------------------------------------------------------------------
// OfferRecord — One seller's numeric offer at a point in time
// ---------------------------------------------------------------------------

/// Numeric input to the effective-cost calculator.
///
/// Amounts are in the smallest currency unit. `id` doubles as an
/// ingestion-order proxy: a higher id is treated as more recent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferRecord {
    pub id: i64,
    pub price: i64,
    #[serde(default)]
    pub coupon: i64,
    #[serde(default)]
    pub shipping: i64,
    pub unit_count: i64,
    #[serde(default)]
    pub points: PointsRule,
    #[serde(default)]
    pub points_base: PointsBase,
    #[serde(default)]
    pub is_subscription: bool,
    #[serde(default = "default_tax_included")]
    pub tax_included: bool,
}

fn default_tax_included() -> bool {
    true
}

impl OfferRecord {
    /// An offer with no coupon, shipping, or points.
    pub fn new(id: i64, price: i64, unit_count: i64) -> Self {
        Self {
            id,
            price,
            coupon: 0,
            shipping: 0,
            unit_count,
            points: PointsRule::NoPoints,
            points_base: PointsBase::PostCoupon,
            is_subscription: false,
            tax_included: true,
        }
    }

    /// Whether any field that feeds the effective cost differs from `other`.
    ///
    /// Shipping and flags are not compared; collectors re-fetch those with
    /// every listing anyway.
    pub fn has_price_changes(&self, other: &OfferRecord) -> bool {
        self.price != other.price || self.coupon != other.coupon || self.points != other.points
    }
}

// ---------------------------------------------------------------------------
// Listing — Raw collector output (free-text title plus best-effort numbers)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub title: String,
    pub price: i64,
    pub coupon: Option<i64>,
    pub shipping: Option<i64>,
    pub points_percent: Option<f64>,
    pub points_fixed: Option<i64>,
    #[serde(default)]
    pub points_base: PointsBase,
    pub is_subscription: Option<bool>,
    pub tax_included: Option<bool>,
    pub source_url: Option<String>,
}

impl Listing {
    pub fn new(title: &str, price: i64) -> Self {
        Self {
            title: title.to_string(),
            price,
            coupon: None,
            shipping: None,
            points_percent: None,
            points_fixed: None,
            points_base: PointsBase::PostCoupon,
            is_subscription: None,
            tax_included: None,
            source_url: None,
        }
    }

    /// Build the calculator input for this listing.
    ///
    /// `unit_count` comes from normalization; the title is the only place
    /// a raw listing carries it.
    pub fn to_offer(&self, id: i64, unit_count: i64) -> OfferRecord {
        OfferRecord {
            id,
            price: self.price,
            coupon: self.coupon.unwrap_or(0),
            shipping: self.shipping.unwrap_or(0),
            unit_count,
            points: PointsRule::from_fields(self.points_percent, self.points_fixed),
            points_base: self.points_base,
            is_subscription: self.is_subscription.unwrap_or(false),
            tax_included: self.tax_included.unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_points_take_precedence() {
        assert_eq!(PointsRule::from_fields(Some(5.0), Some(200)), PointsRule::Fixed(200));
        assert_eq!(PointsRule::from_fields(Some(5.0), None), PointsRule::Percent(5.0));
        assert_eq!(PointsRule::from_fields(Some(0.0), None), PointsRule::NoPoints);
        assert_eq!(PointsRule::from_fields(None, None), PointsRule::NoPoints);
    }

    #[test]
    fn listing_defaults_missing_amounts() {
        let mut listing = Listing::new("メリーズ パンツ M 58枚", 1980);
        listing.points_percent = Some(5.0);
        let offer = listing.to_offer(7, 58);
        assert_eq!(offer.id, 7);
        assert_eq!(offer.coupon, 0);
        assert_eq!(offer.shipping, 0);
        assert!(!offer.is_subscription);
        assert!(offer.tax_included);
        assert_eq!(offer.points, PointsRule::Percent(5.0));
    }

    #[test]
    fn shipping_change_is_not_a_price_change() {
        let a = OfferRecord::new(1, 1000, 50);
        let mut b = a.clone();
        b.shipping = 300;
        assert!(!a.has_price_changes(&b));
        b.coupon = 100;
        assert!(a.has_price_changes(&b));
    }
}
