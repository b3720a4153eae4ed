//! Purchase-order limit checks.
//!
//! Limits are scoped by company and optionally by user and purpose. The most
//! specific active limit wins; a zero or unset cap means "no cap".

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::metrics::LIMIT_CHECKS_TOTAL;
use crate::models::{
    purpose_label, MonthlyUsage, OrderLimitQuery, PurchaseOrderLimit, PurchaseOrderSummary,
    PurchasePurpose,
};

/// Why an order was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitViolation {
    #[error("Order value {order_value:.2} exceeds the per-transaction limit of {limit:.2} for {purpose_label}")]
    PerTransactionExceeded {
        order_value: Decimal,
        limit: Decimal,
        purpose_label: &'static str,
    },

    #[error("Monthly total for {purpose_label} ({projected_total:.2}) would exceed the limit of {limit:.2}. Available: {remaining:.2}")]
    MonthlyTotalExceeded {
        projected_total: Decimal,
        limit: Decimal,
        remaining: Decimal,
        purpose_label: &'static str,
    },
}

impl LimitViolation {
    fn outcome(&self) -> &'static str {
        match self {
            LimitViolation::PerTransactionExceeded { .. } => "per_transaction",
            LimitViolation::MonthlyTotalExceeded { .. } => "monthly_total",
        }
    }
}

/// Which stored orders count towards month-to-date spend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpendFilter {
    pub created_by: Option<Uuid>,
    pub purpose: Option<PurchasePurpose>,
    pub exclude_order: Option<Uuid>,
}

/// First instant of `now`'s month through 23:59:59 of its last day, UTC.
pub fn month_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let today = now.date_naive();
    let first = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(today);

    let start = first
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or(now);
    let end = last
        .and_hms_opt(23, 59, 59)
        .map(|dt| dt.and_utc())
        .unwrap_or(now);
    (start, end)
}

/// Sum of `total_value` over orders inside `window` (inclusive) matching `filter`.
pub fn monthly_spend(
    orders: &[PurchaseOrderSummary],
    window: (DateTime<Utc>, DateTime<Utc>),
    filter: &SpendFilter,
) -> Decimal {
    let (start, end) = window;
    orders
        .iter()
        .filter(|o| o.created_utc >= start && o.created_utc <= end)
        .filter(|o| filter.exclude_order != Some(o.order_id))
        .filter(|o| filter.created_by.map_or(true, |user| o.created_by == Some(user)))
        .filter(|o| filter.purpose.map_or(true, |purpose| o.purpose == Some(purpose)))
        .map(|o| o.total_value)
        .sum()
}

/// Purchase-order limit service.
#[derive(Debug, Clone)]
pub struct LimitService;

impl LimitService {
    /// The most specific active limit that applies to this user and purpose.
    ///
    /// Ties keep the earliest limit in `limits` order.
    pub fn select_applicable<'a>(
        limits: &'a [PurchaseOrderLimit],
        company_id: Uuid,
        user_id: Option<Uuid>,
        purpose: Option<PurchasePurpose>,
    ) -> Option<&'a PurchaseOrderLimit> {
        limits
            .iter()
            .filter(|l| l.is_active && l.company_id == company_id)
            .filter(|l| l.user_id.is_none() || l.user_id == user_id)
            .filter(|l| l.purpose.is_none() || l.purpose == purpose)
            .fold(None, |best: Option<&PurchaseOrderLimit>, candidate| match best {
                Some(b) if b.specificity() >= candidate.specificity() => Some(b),
                _ => Some(candidate),
            })
    }

    /// Check an order against the applicable limit.
    ///
    /// `orders` are the company's stored purchase orders; only those inside
    /// the month of `now` are counted.
    #[instrument(
        skip(limits, orders),
        fields(company_id = %query.company_id, order_value = %query.order_value)
    )]
    pub fn check_order(
        limits: &[PurchaseOrderLimit],
        query: &OrderLimitQuery,
        orders: &[PurchaseOrderSummary],
        now: DateTime<Utc>,
    ) -> Result<(), LimitViolation> {
        let result = Self::evaluate(limits, query, orders, now);

        let outcome = match &result {
            Ok(()) => "allowed",
            Err(violation) => {
                info!(error = %violation, "Purchase order refused by limit");
                violation.outcome()
            }
        };
        LIMIT_CHECKS_TOTAL.with_label_values(&[outcome]).inc();

        result
    }

    fn evaluate(
        limits: &[PurchaseOrderLimit],
        query: &OrderLimitQuery,
        orders: &[PurchaseOrderSummary],
        now: DateTime<Utc>,
    ) -> Result<(), LimitViolation> {
        let Some(limit) =
            Self::select_applicable(limits, query.company_id, query.user_id, query.purpose)
        else {
            debug!("No applicable purchase-order limit");
            return Ok(());
        };

        let label = purpose_label(query.purpose);

        if let Some(cap) = limit.per_transaction_cap() {
            if query.order_value > cap {
                return Err(LimitViolation::PerTransactionExceeded {
                    order_value: query.order_value,
                    limit: cap,
                    purpose_label: label,
                });
            }
        }

        if let Some(cap) = limit.monthly_cap() {
            let filter = SpendFilter {
                created_by: query.user_id.filter(|_| limit.user_id.is_some()),
                purpose: query.purpose.filter(|_| limit.purpose.is_some()),
                exclude_order: query.current_order_id,
            };
            let spent = monthly_spend(orders, month_window(now), &filter);
            let projected_total = spent + query.order_value;

            if projected_total > cap {
                return Err(LimitViolation::MonthlyTotalExceeded {
                    projected_total,
                    limit: cap,
                    remaining: (cap - spent).max(Decimal::ZERO),
                    purpose_label: label,
                });
            }
        }

        Ok(())
    }

    /// Month-to-date spend for a user and purpose, with the monthly cap of
    /// the most specific applicable limit.
    pub fn monthly_usage(
        limits: &[PurchaseOrderLimit],
        company_id: Uuid,
        user_id: Option<Uuid>,
        purpose: Option<PurchasePurpose>,
        orders: &[PurchaseOrderSummary],
        now: DateTime<Utc>,
    ) -> MonthlyUsage {
        let filter = SpendFilter {
            created_by: user_id,
            purpose,
            exclude_order: None,
        };
        let used = monthly_spend(orders, month_window(now), &filter);
        let limit = Self::select_applicable(limits, company_id, user_id, purpose)
            .and_then(PurchaseOrderLimit::monthly_cap);

        MonthlyUsage { used, limit }
    }
}
