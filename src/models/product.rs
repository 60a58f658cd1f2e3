use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ProductType / ProductSize
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductType {
    Tape,
    Pants,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Tape => "TAPE",
            ProductType::Pants => "PANTS",
        }
    }

    /// The native-language word listings use for this packaging style.
    pub fn native_token(&self) -> &'static str {
        match self {
            ProductType::Tape => "テープ",
            ProductType::Pants => "パンツ",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductSize {
    Nb,
    S,
    M,
    L,
    Xl,
}

impl ProductSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductSize::Nb => "NB",
            ProductSize::S => "S",
            ProductSize::M => "M",
            ProductSize::L => "L",
            ProductSize::Xl => "XL",
        }
    }
}

impl fmt::Display for ProductSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProductDescriptor — Normalizer output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDescriptor {
    pub brand: String,
    pub series: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub size: ProductSize,
    pub pack_count: i64,
    /// Advisory score in `[0, 1]`.
    pub confidence: f64,
}

impl ProductDescriptor {
    pub fn key(&self) -> ProductKey {
        ProductKey {
            brand: self.brand.clone(),
            series: self.series.clone(),
            product_type: self.product_type,
            size: self.size,
        }
    }
}

// ---------------------------------------------------------------------------
// ProductKey — Catalog identity of a product (pack count excluded)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductKey {
    pub brand: String,
    pub series: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub size: ProductSize,
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.brand, self.series, self.product_type, self.size
        )
    }
}
