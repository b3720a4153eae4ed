//! Shared fixtures for landed-cost integration tests.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use landed_cost::models::{
    InvoiceLineItem, LineTaxes, PurchaseOrderLimit, PurchaseOrderSummary, PurchasePurpose,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Tolerance for sums of repeating decimals.
pub fn epsilon() -> Decimal {
    dec!(0.000000000000001)
}

pub fn assert_close(actual: Decimal, expected: Decimal) {
    assert!(
        (actual - expected).abs() <= epsilon(),
        "expected {} to be within {} of {}",
        actual,
        epsilon(),
        expected
    );
}

/// Single-unit line whose declared total is `line_total`.
pub fn valued_item(line_total: Decimal) -> InvoiceLineItem {
    InvoiceLineItem::new(dec!(1), line_total, line_total)
}

pub fn valued_items(totals: &[Decimal]) -> Vec<InvoiceLineItem> {
    totals.iter().copied().map(valued_item).collect()
}

/// The NF-e line from the worked example: 2 units at 50 with IPI, ICMS, PIS and COFINS.
pub fn taxed_item() -> InvoiceLineItem {
    InvoiceLineItem::new(dec!(2), dec!(50), dec!(100)).with_taxes(LineTaxes {
        ipi: dec!(10),
        icms: dec!(18),
        pis: dec!(2),
        cofins: dec!(3),
    })
}

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub struct LimitFixture {
    pub company_id: Uuid,
    pub user_id: Uuid,
}

impl LimitFixture {
    pub fn new() -> Self {
        Self {
            company_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
        }
    }

    pub fn limit(
        &self,
        user: bool,
        purpose: Option<PurchasePurpose>,
        per_transaction: Option<Decimal>,
        monthly: Option<Decimal>,
    ) -> PurchaseOrderLimit {
        PurchaseOrderLimit {
            limit_id: Uuid::new_v4(),
            company_id: self.company_id,
            user_id: user.then_some(self.user_id),
            purpose,
            max_per_transaction: per_transaction,
            max_monthly_total: monthly,
            is_active: true,
        }
    }

    pub fn order(
        &self,
        created_by: Option<Uuid>,
        purpose: Option<PurchasePurpose>,
        total_value: Decimal,
        created_utc: DateTime<Utc>,
    ) -> PurchaseOrderSummary {
        PurchaseOrderSummary {
            order_id: Uuid::new_v4(),
            created_by,
            purpose,
            total_value,
            created_utc,
        }
    }
}
