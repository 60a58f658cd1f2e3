use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OfferError, Result};

// ---------------------------------------------------------------------------
// CalcPolicy — Caller-supplied calculation switches
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcPolicy {
    pub include_points: bool,
    /// Multiplier in `[0, 1]` applied to computed points.
    #[serde(default = "default_limited_point_factor")]
    pub limited_point_factor: f64,
    #[serde(default)]
    pub include_subscription: bool,
}

fn default_limited_point_factor() -> f64 {
    1.0
}

impl Default for CalcPolicy {
    fn default() -> Self {
        crate::config::DEFAULT_CALC_POLICY
    }
}

impl CalcPolicy {
    /// Reject a policy the calculator cannot apply meaningfully.
    pub fn validate(&self) -> Result<()> {
        let f = self.limited_point_factor;
        if !f.is_finite() || !(0.0..=1.0).contains(&f) {
            return Err(OfferError::InvalidPolicy(format!(
                "limitedPointFactor must be within [0, 1], got {}",
                f
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SortKey
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Cost per unit, then total, then newest first.
    #[default]
    Cpp,
    /// Effective total, then newest first.
    Total,
    /// Newest first.
    Updated,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Cpp => "cpp",
            SortKey::Total => "total",
            SortKey::Updated => "updated",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = OfferError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cpp" => Ok(SortKey::Cpp),
            "total" => Ok(SortKey::Total),
            "updated" => Ok(SortKey::Updated),
            other => Err(OfferError::InvalidArgument(format!(
                "unknown sort key '{}'",
                other
            ))),
        }
    }
}
