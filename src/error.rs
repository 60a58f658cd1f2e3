/// A structurally invalid [`OfferRecord`](crate::models::OfferRecord) field.
///
/// Raised by the calculator before any arithmetic happens; no partial
/// result is ever produced alongside it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field}: {value}")]
pub struct ValidationError {
    pub field: &'static str,
    pub value: i64,
}

impl ValidationError {
    pub fn new(field: &'static str, value: i64) -> Self {
        Self { field, value }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OfferError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, OfferError>;
