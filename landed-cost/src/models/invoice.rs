//! Allocation request and report documents for landed-cost.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CostBreakdown, FreightApportionmentPolicy, InvoiceLineItem};

/// Items of one purchase invoice plus the freight to spread over them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostAllocationRequest {
    pub items: Vec<InvoiceLineItem>,
    #[serde(default)]
    pub total_freight: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<FreightApportionmentPolicy>,
    /// Weights parallel to `items`; the items' own weights are used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<Option<Decimal>>>,
}

/// One reported line, labelled with the source item's identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub freight_for_line: Decimal,
    pub breakdown: CostBreakdown,
}

/// Result of a batch allocation, index-aligned with the request items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostAllocationReport {
    pub policy_requested: FreightApportionmentPolicy,
    pub policy_applied: FreightApportionmentPolicy,
    pub total_freight: Decimal,
    pub lines: Vec<ReportLine>,
}
