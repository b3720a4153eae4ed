//! Freight apportionment across invoice lines.
//!
//! Every degenerate input degrades to a defined split instead of failing:
//! unusable weights fall back to value, a zero-value invoice falls back to
//! an equal split, and a non-positive freight yields all zeros.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{FreightApportionmentPolicy, InvoiceLineItem};

/// The split that will actually run once fallbacks are resolved.
enum Plan {
    Zero,
    Equal,
    Weights { weights: Vec<Decimal>, total: Decimal },
    Values { total: Decimal },
}

/// Sum that reports overflow instead of panicking.
fn checked_total(values: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(value))
}

/// `part / total` of `freight`.
///
/// Multiplies first so exact splits stay exact, and divides first when the
/// intermediate product does not fit. Saturates if neither order fits.
fn proportional_share(part: Decimal, freight: Decimal, total: Decimal) -> Decimal {
    part.checked_mul(freight)
        .and_then(|product| product.checked_div(total))
        .or_else(|| {
            part.checked_div(total)
                .and_then(|ratio| ratio.checked_mul(freight))
        })
        .unwrap_or_else(|| {
            warn!(%part, %freight, %total, "Freight share out of range, saturating");
            if part.is_sign_negative() != total.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            }
        })
}

fn usable_weights(weights: Option<&[Option<Decimal>]>, item_count: usize) -> Option<Vec<Decimal>> {
    let weights = weights?;
    if weights.len() != item_count {
        return None;
    }
    weights.iter().copied().collect()
}

fn value_plan(items: &[InvoiceLineItem]) -> Plan {
    match checked_total(items.iter().map(|item| item.line_total)) {
        Some(total) if !total.is_zero() => Plan::Values { total },
        Some(_) => {
            debug!(item_count = items.len(), "Invoice value is zero, splitting freight equally");
            Plan::Equal
        }
        None => {
            warn!(item_count = items.len(), "Invoice value overflows, splitting freight equally");
            Plan::Equal
        }
    }
}

fn plan(
    items: &[InvoiceLineItem],
    total_freight: Decimal,
    policy: FreightApportionmentPolicy,
    weights: Option<&[Option<Decimal>]>,
) -> Plan {
    if items.is_empty() || total_freight <= Decimal::ZERO {
        return Plan::Zero;
    }

    match policy {
        FreightApportionmentPolicy::Equal => Plan::Equal,
        FreightApportionmentPolicy::ByWeight => match usable_weights(weights, items.len()) {
            Some(weights) => match checked_total(weights.iter().copied()) {
                Some(total) if !total.is_zero() => Plan::Weights { weights, total },
                _ => {
                    debug!("Weights sum to zero or overflow, apportioning freight by value");
                    value_plan(items)
                }
            },
            None => {
                debug!(
                    item_count = items.len(),
                    weight_count = weights.map(<[_]>::len),
                    "Weights missing or incomplete, apportioning freight by value"
                );
                value_plan(items)
            }
        },
        FreightApportionmentPolicy::ByValue => value_plan(items),
    }
}

/// Split `total_freight` across `items` and report the policy that ran.
///
/// Shares are in input order. When there is nothing to split (no items or no
/// freight) the requested policy is reported unchanged.
pub fn apportion_with_policy(
    items: &[InvoiceLineItem],
    total_freight: Decimal,
    policy: FreightApportionmentPolicy,
    weights: Option<&[Option<Decimal>]>,
) -> (FreightApportionmentPolicy, Vec<Decimal>) {
    match plan(items, total_freight, policy, weights) {
        Plan::Zero => (policy, vec![Decimal::ZERO; items.len()]),
        Plan::Equal => {
            let share = total_freight / Decimal::from(items.len());
            (FreightApportionmentPolicy::Equal, vec![share; items.len()])
        }
        Plan::Weights { weights, total } => (
            FreightApportionmentPolicy::ByWeight,
            weights
                .iter()
                .map(|weight| proportional_share(*weight, total_freight, total))
                .collect(),
        ),
        Plan::Values { total } => (
            FreightApportionmentPolicy::ByValue,
            items
                .iter()
                .map(|item| proportional_share(item.line_total, total_freight, total))
                .collect(),
        ),
    }
}

/// Split `total_freight` across `items`, one share per item in input order.
///
/// `weights` is only read by [`FreightApportionmentPolicy::ByWeight`] and must
/// be parallel to `items` with every entry present to be used.
pub fn apportion_freight(
    items: &[InvoiceLineItem],
    total_freight: Decimal,
    policy: FreightApportionmentPolicy,
    weights: Option<&[Option<Decimal>]>,
) -> Vec<Decimal> {
    apportion_with_policy(items, total_freight, policy, weights).1
}

/// The policy [`apportion_freight`] ends up applying for these inputs.
pub fn effective_policy(
    items: &[InvoiceLineItem],
    total_freight: Decimal,
    policy: FreightApportionmentPolicy,
    weights: Option<&[Option<Decimal>]>,
) -> FreightApportionmentPolicy {
    match plan(items, total_freight, policy, weights) {
        Plan::Zero => policy,
        Plan::Equal => FreightApportionmentPolicy::Equal,
        Plan::Weights { .. } => FreightApportionmentPolicy::ByWeight,
        Plan::Values { .. } => FreightApportionmentPolicy::ByValue,
    }
}
