//! Static registries and tuning constants.
//!
//! Every table here is ordered and the order is significant: lookups walk
//! a table front to back and the first hit wins.

use crate::models::{CalcPolicy, ProductSize, ProductType};

// ---------------------------------------------------------------------------
// Calculation policy presets
// ---------------------------------------------------------------------------

/// Points counted at face value, subscription offers excluded.
pub const DEFAULT_CALC_POLICY: CalcPolicy = CalcPolicy {
    include_points: true,
    limited_point_factor: 1.0,
    include_subscription: false,
};

/// Limited-time points valued at 70%.
pub const CONSERVATIVE_CALC_POLICY: CalcPolicy = CalcPolicy {
    include_points: true,
    limited_point_factor: 0.7,
    include_subscription: false,
};

// ---------------------------------------------------------------------------
// Normalizer registries
// ---------------------------------------------------------------------------

/// Brand aliases (lower-cased) mapped to canonical brand names.
pub const BRAND_ALIASES: &[(&str, &str)] = &[
    ("パンパース", "Pampers"),
    ("pampers", "Pampers"),
    ("メリーズ", "Merries"),
    ("merries", "Merries"),
    ("ムーニー", "Moony"),
    ("moony", "Moony"),
    ("ユニチャーム", "Moony"),
    ("ゲンキ", "Genki"),
    ("genki", "Genki"),
    ("グーン", "GooN"),
    ("goon", "GooN"),
    ("大王製紙", "GooN"),
];

/// Size patterns, tried in order against the lower-cased title.
///
/// Single-letter tokens must not touch another ASCII letter. `XL` sits
/// before `L` so "extra large" never resolves to `L`.
pub const SIZE_PATTERNS: &[(ProductSize, &str)] = &[
    (ProductSize::Nb, r"新生児|newborn|(?:^|[^a-z])nb(?:[^a-z]|$)"),
    (
        ProductSize::Xl,
        r"(?:^|[^a-z])(?:xl|big)(?:[^a-z]|$)|extra\s*large|ビッグ",
    ),
    (ProductSize::S, r"(?:^|[^a-z])(?:s|small)(?:[^a-z]|$)"),
    (ProductSize::M, r"(?:^|[^a-z])(?:m|medium)(?:[^a-z]|$)"),
    (ProductSize::L, r"(?:^|[^a-z])(?:l|large)(?:[^a-z]|$)"),
];

/// A "low-high kg" weight span; capture 2 is the upper bound.
pub const WEIGHT_RANGE_PATTERN: &str = r"(\d+)\s*[-~〜～]\s*(\d+)\s*kg";

/// Upper weight bound (kg, inclusive) for each size class. Anything above
/// the last bucket is `XL`.
pub const WEIGHT_BUCKETS: &[(u32, ProductSize)] = &[
    (5, ProductSize::Nb),
    (8, ProductSize::S),
    (12, ProductSize::M),
    (17, ProductSize::L),
];

/// Packaging-type aliases. The two types share no token.
pub const TYPE_ALIASES: &[(&str, ProductType)] = &[
    ("テープ", ProductType::Tape),
    ("tape", ProductType::Tape),
    ("パンツ", ProductType::Pants),
    ("pants", ProductType::Pants),
    ("パンティ", ProductType::Pants),
    ("panty", ProductType::Pants),
];

/// Count + unit-word patterns; capture 1 is the count.
pub const UNIT_COUNT_PATTERNS: &[&str] = &[
    r"(\d+)\s*枚",
    r"(\d+)\s*個",
    r"(\d+)\s*count",
    r"(\d+)\s*pc",
];

/// Inclusive sanity window for an extracted unit count.
pub const UNIT_COUNT_MIN: i64 = 10;
pub const UNIT_COUNT_MAX: i64 = 300;

/// Product lines per canonical brand.
pub const SERIES_PATTERNS: &[(&str, &[&str])] = &[
    (
        "Pampers",
        &["肌へのいちばん", "はじめての肌へのいちばん", "さらさらパンツ", "コットンケア"],
    ),
    (
        "Merries",
        &["さらさらエアスルー", "ファーストプレミアム", "やわらかフィット"],
    ),
    ("Moony", &["エアフィット", "ナチュラルムーニー", "マンシリーズ"]),
    ("Genki", &["アンパンマン", "プレミアム"]),
    ("GooN", &["まっさらさら", "プラス"]),
];

/// Series label used when no product line matches.
pub const DEFAULT_SERIES: &str = "スタンダード";

// ---------------------------------------------------------------------------
// Confidence scoring
// ---------------------------------------------------------------------------

pub const CONFIDENCE_BASELINE: f64 = 0.5;
pub const CONFIDENCE_BRAND: f64 = 0.2;
pub const CONFIDENCE_SIZE: f64 = 0.15;
pub const CONFIDENCE_TYPE: f64 = 0.1;
pub const CONFIDENCE_UNIT_COUNT: f64 = 0.15;

/// Catalog entries scoring below this are kept but flagged.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Unit word used when checking that the count is written out literally.
pub const UNIT_WORD: &str = "枚";

// ---------------------------------------------------------------------------
// Paging
// ---------------------------------------------------------------------------

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 20;
