//! Purchase-order limit models for landed-cost.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Declared use of a purchase order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchasePurpose {
    #[serde(rename = "estoque")]
    Stock,
    #[serde(rename = "os")]
    ServiceOrder,
    #[serde(rename = "ativo_fixo")]
    FixedAsset,
    #[serde(rename = "uso_consumo")]
    Consumption,
    #[serde(rename = "revenda")]
    Resale,
    #[serde(rename = "outros")]
    Other,
}

impl PurchasePurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchasePurpose::Stock => "estoque",
            PurchasePurpose::ServiceOrder => "os",
            PurchasePurpose::FixedAsset => "ativo_fixo",
            PurchasePurpose::Consumption => "uso_consumo",
            PurchasePurpose::Resale => "revenda",
            PurchasePurpose::Other => "outros",
        }
    }

    /// Parse a stored purpose code. Unknown codes yield `None`.
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "estoque" => Some(PurchasePurpose::Stock),
            "os" => Some(PurchasePurpose::ServiceOrder),
            "ativo_fixo" => Some(PurchasePurpose::FixedAsset),
            "uso_consumo" => Some(PurchasePurpose::Consumption),
            "revenda" => Some(PurchasePurpose::Resale),
            "outros" => Some(PurchasePurpose::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PurchasePurpose::Stock => "Estoque",
            PurchasePurpose::ServiceOrder => "Ordem de Serviço",
            PurchasePurpose::FixedAsset => "Ativo Fixo",
            PurchasePurpose::Consumption => "Uso e Consumo",
            PurchasePurpose::Resale => "Revenda",
            PurchasePurpose::Other => "Outros",
        }
    }
}

/// Label shown in violation messages; "Geral" when the order has no purpose.
pub fn purpose_label(purpose: Option<PurchasePurpose>) -> &'static str {
    purpose.map(|p| p.label()).unwrap_or("Geral")
}

/// Spending limit configured for a company, optionally scoped to a user and/or purpose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderLimit {
    pub limit_id: Uuid,
    pub company_id: Uuid,
    pub user_id: Option<Uuid>,
    pub purpose: Option<PurchasePurpose>,
    pub max_per_transaction: Option<Decimal>,
    pub max_monthly_total: Option<Decimal>,
    pub is_active: bool,
}

impl PurchaseOrderLimit {
    /// Specificity rank: user + purpose > user > purpose > global.
    pub fn specificity(&self) -> u8 {
        (if self.user_id.is_some() { 2 } else { 0 }) + u8::from(self.purpose.is_some())
    }

    /// Per-transaction cap, ignoring unset or zero values.
    pub fn per_transaction_cap(&self) -> Option<Decimal> {
        self.max_per_transaction.filter(|v| !v.is_zero())
    }

    /// Monthly cap, ignoring unset or zero values.
    pub fn monthly_cap(&self) -> Option<Decimal> {
        self.max_monthly_total.filter(|v| !v.is_zero())
    }
}

/// The slice of a stored purchase order the limit checks need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderSummary {
    pub order_id: Uuid,
    pub created_by: Option<Uuid>,
    pub purpose: Option<PurchasePurpose>,
    pub total_value: Decimal,
    pub created_utc: DateTime<Utc>,
}

/// An order about to be created or edited, checked against the company's limits.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLimitQuery {
    pub company_id: Uuid,
    pub user_id: Option<Uuid>,
    pub purpose: Option<PurchasePurpose>,
    pub order_value: Decimal,
    /// Set when editing, so the order's stored value is not counted twice.
    pub current_order_id: Option<Uuid>,
}

/// Month-to-date spend against the applicable monthly limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyUsage {
    pub used: Decimal,
    pub limit: Option<Decimal>,
}
