//! Batch allocation runner: request document in, rounded report out.

use rust_decimal::RoundingStrategy;
use tracing::{info, instrument};

use super::costing::{calculate_item_cost, item_weights};
use super::freight::apportion_with_policy;
use super::metrics::{ALLOCATIONS_TOTAL, CLAMPED_TOTAL, ITEMS_TOTAL};
use crate::models::{
    CostAllocationReport, CostAllocationRequest, FreightApportionmentPolicy, ReportLine,
};

/// Cost every item of `request` and label the results for the caller.
///
/// `default_policy` applies when the request names none. Without explicit
/// weights the items' own weights are used.
#[instrument(
    skip_all,
    fields(item_count = request.items.len(), total_freight = %request.total_freight)
)]
pub fn build_report(
    request: &CostAllocationRequest,
    default_policy: FreightApportionmentPolicy,
    output_scale: u32,
) -> CostAllocationReport {
    let policy = request.policy.unwrap_or(default_policy);
    let weight_list = request
        .weights
        .clone()
        .unwrap_or_else(|| item_weights(&request.items));

    let items = &request.items;
    let freight = request.total_freight;
    let weights = Some(weight_list.as_slice());

    let (applied, shares) = apportion_with_policy(items, freight, policy, weights);
    let breakdowns: Vec<_> = items
        .iter()
        .zip(&shares)
        .map(|(item, share)| calculate_item_cost(item, *share, item.icms_st))
        .collect();

    let clamped = breakdowns.iter().filter(|b| b.is_clamped()).count();
    ALLOCATIONS_TOTAL
        .with_label_values(&[policy.as_str(), applied.as_str()])
        .inc();
    ITEMS_TOTAL.inc_by(items.len() as u64);
    CLAMPED_TOTAL.inc_by(clamped as u64);

    info!(
        requested = %policy,
        applied = %applied,
        clamped,
        "Cost allocation computed"
    );

    let lines = items
        .iter()
        .zip(shares)
        .zip(breakdowns)
        .map(|((item, share), breakdown)| ReportLine {
            code: item.code.clone(),
            description: item.description.clone(),
            freight_for_line: share
                .round_dp_with_strategy(output_scale, RoundingStrategy::MidpointAwayFromZero),
            breakdown: breakdown.rounded(output_scale),
        })
        .collect();

    CostAllocationReport {
        policy_requested: policy,
        policy_applied: applied,
        total_freight: freight,
        lines,
    }
}
