//! Batch calculation and deterministic ordering of offers.

use std::cmp::Ordering;

use tracing::warn;

use super::effective::compute_effective;
use super::evidence::generate_evidence;
use crate::error::ValidationError;
use crate::models::{CalcPolicy, CalculationResult, OfferRecord, RankedOffer, SortKey};

/// Per-item calculation outcome, before failed items are dropped.
pub type Evaluation<'a, T> = (&'a T, Result<CalculationResult, ValidationError>);

/// Apply the subscription filter and compute every remaining offer.
///
/// Failures stay in the output as `Err`; nothing is dropped except
/// subscription offers the policy excludes.
pub fn evaluate_offers<'a>(
    offers: &'a [OfferRecord],
    policy: &CalcPolicy,
) -> Vec<Evaluation<'a, OfferRecord>> {
    evaluate_by(offers, policy, as_offer)
}

/// Compute, filter, and sort a batch of offers.
///
/// Offers whose calculation fails are logged and left out; the batch as a
/// whole never fails. Inputs are not modified. Evidence is not attached;
/// see [`attach_evidence`].
pub fn process_offers(
    offers: &[OfferRecord],
    policy: &CalcPolicy,
    sort: SortKey,
) -> Vec<RankedOffer> {
    rank_by(offers, policy, sort, as_offer)
        .into_iter()
        .map(|(offer, calculation)| RankedOffer {
            offer: offer.clone(),
            calculation,
            evidence: None,
        })
        .collect()
}

/// Fill in the evidence text of every ranked offer.
pub fn attach_evidence(mut ranked: Vec<RankedOffer>, policy: &CalcPolicy) -> Vec<RankedOffer> {
    for item in &mut ranked {
        item.evidence = Some(generate_evidence(&item.offer, &item.calculation, policy));
    }
    ranked
}

/// Ordering used by every ranked view.
///
/// `Cpp`: per-unit cost, then effective total, then higher id first.
/// `Total`: effective total, then higher id first.
/// `Updated`: higher id first.
pub fn compare_ranked(
    sort: SortKey,
    a: (&OfferRecord, &CalculationResult),
    b: (&OfferRecord, &CalculationResult),
) -> Ordering {
    let (a_offer, a_calc) = a;
    let (b_offer, b_calc) = b;
    let newest_first = b_offer.id.cmp(&a_offer.id);

    match sort {
        SortKey::Cpp => a_calc
            .yen_per_sheet
            .total_cmp(&b_calc.yen_per_sheet)
            .then(a_calc.effective_total.cmp(&b_calc.effective_total))
            .then(newest_first),
        SortKey::Total => a_calc
            .effective_total
            .cmp(&b_calc.effective_total)
            .then(newest_first),
        SortKey::Updated => newest_first,
    }
}

pub(crate) fn evaluate_by<'a, T, F>(
    items: &'a [T],
    policy: &CalcPolicy,
    offer_of: F,
) -> Vec<Evaluation<'a, T>>
where
    F: Fn(&T) -> &OfferRecord,
{
    items
        .iter()
        .filter(|item| policy.include_subscription || !offer_of(*item).is_subscription)
        .map(|item| (item, compute_effective(offer_of(item), policy)))
        .collect()
}

pub(crate) fn rank_by<'a, T, F>(
    items: &'a [T],
    policy: &CalcPolicy,
    sort: SortKey,
    offer_of: F,
) -> Vec<(&'a T, CalculationResult)>
where
    F: Fn(&T) -> &OfferRecord,
{
    let mut kept: Vec<(&T, CalculationResult)> = evaluate_by(items, policy, &offer_of)
        .into_iter()
        .filter_map(|(item, outcome)| match outcome {
            Ok(calculation) => Some((item, calculation)),
            Err(err) => {
                warn!(offer_id = offer_of(item).id, error = %err, "dropping offer from ranking");
                None
            }
        })
        .collect();

    kept.sort_by(|a, b| compare_ranked(sort, (offer_of(a.0), &a.1), (offer_of(b.0), &b.1)));
    kept
}

fn as_offer(offer: &OfferRecord) -> &OfferRecord {
    offer
}
