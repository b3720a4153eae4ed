//! Domain models for landed-cost.

mod breakdown;
mod invoice;
mod limit;
mod line_item;
mod policy;

pub use breakdown::CostBreakdown;
pub use invoice::{CostAllocationReport, CostAllocationRequest, ReportLine};
pub use limit::{
    purpose_label, MonthlyUsage, OrderLimitQuery, PurchaseOrderLimit, PurchaseOrderSummary,
    PurchasePurpose,
};
pub use line_item::{InvoiceLineItem, LineTaxes};
pub use policy::FreightApportionmentPolicy;
