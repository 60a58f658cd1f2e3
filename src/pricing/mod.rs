//! Effective-cost calculator.
//!
//! Pure functions over [`OfferRecord`](crate::models::OfferRecord) and
//! [`CalcPolicy`](crate::models::CalcPolicy); no state is kept between calls.

pub mod effective;
pub mod evidence;
pub mod ranking;

pub use effective::compute_effective;
pub use evidence::generate_evidence;
pub use ranking::{attach_evidence, compare_ranked, evaluate_offers, process_offers, Evaluation};
