//! Landed unit cost calculation.
//!
//! Unit cost = (product + IPI + ICMS-ST + freight) - (ICMS + PIS + COFINS credits),
//! every term per unit and the result floored at zero.

use rust_decimal::Decimal;
use tracing::warn;

use super::freight::apportion_freight;
use crate::models::{CostBreakdown, FreightApportionmentPolicy, InvoiceLineItem};

/// Line amount spread over the line's quantity; zero quantity counts as one unit.
///
/// Saturates when the quotient does not fit, as with a tiny fractional quantity.
fn per_unit(amount: Decimal, quantity: Decimal) -> Decimal {
    if quantity.is_zero() {
        return amount;
    }
    amount.checked_div(quantity).unwrap_or_else(|| {
        warn!(%amount, %quantity, "Per-unit amount out of range, saturating");
        if amount.is_sign_negative() != quantity.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

/// Cost breakdown of one line given its freight share and ICMS-ST, both line totals.
pub fn calculate_item_cost(
    item: &InvoiceLineItem,
    freight_for_line: Decimal,
    icms_st_for_line: Option<Decimal>,
) -> CostBreakdown {
    let qty = item.quantity;

    let mut breakdown = CostBreakdown {
        product_value_per_unit: item.unit_price,
        ipi_per_unit: per_unit(item.taxes.ipi, qty),
        icms_st_per_unit: per_unit(icms_st_for_line.unwrap_or(Decimal::ZERO), qty),
        freight_per_unit: per_unit(freight_for_line, qty),
        icms_credit_per_unit: per_unit(item.taxes.icms, qty),
        pis_credit_per_unit: per_unit(item.taxes.pis, qty),
        cofins_credit_per_unit: per_unit(item.taxes.cofins, qty),
        calculated_unit_cost: Decimal::ZERO,
    };
    breakdown.calculated_unit_cost =
        breakdown.additions().saturating_sub(breakdown.credits()).max(Decimal::ZERO);
    breakdown
}

/// Apportion freight over the whole batch, then cost every item with its share.
///
/// The result is index-aligned with `items`.
pub fn allocate_costs(
    items: &[InvoiceLineItem],
    total_freight: Decimal,
    policy: FreightApportionmentPolicy,
    weights: Option<&[Option<Decimal>]>,
) -> Vec<CostBreakdown> {
    let shares = apportion_freight(items, total_freight, policy, weights);

    items
        .iter()
        .zip(shares)
        .map(|(item, freight)| calculate_item_cost(item, freight, item.icms_st))
        .collect()
}

/// The items' own weights, in item order, for use with the weight policy.
pub fn item_weights(items: &[InvoiceLineItem]) -> Vec<Option<Decimal>> {
    items.iter().map(|item| item.weight).collect()
}
