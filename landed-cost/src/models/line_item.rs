//! Invoice line item model for landed-cost.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Line-level tax amounts as stated on the NF-e item.
///
/// IPI adds to cost. ICMS, PIS and COFINS are creditable and subtract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineTaxes {
    pub ipi: Decimal,
    pub icms: Decimal,
    pub pis: Decimal,
    pub cofins: Decimal,
}

/// One product line of a purchase invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ncm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub unit_price: Decimal,
    #[serde(default)]
    pub line_total: Decimal,
    #[serde(default)]
    pub taxes: LineTaxes,
    /// ICMS-ST for the whole line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icms_st: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,
}

impl InvoiceLineItem {
    /// Line with quantity, unit price and declared total; no taxes.
    pub fn new(quantity: Decimal, unit_price: Decimal, line_total: Decimal) -> Self {
        Self {
            quantity,
            unit_price,
            line_total,
            ..Default::default()
        }
    }

    pub fn with_taxes(mut self, taxes: LineTaxes) -> Self {
        self.taxes = taxes;
        self
    }

    pub fn with_icms_st(mut self, icms_st: Decimal) -> Self {
        self.icms_st = Some(icms_st);
        self
    }

    pub fn with_weight(mut self, weight: Decimal) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_code(mut self, code: impl Into<String>, description: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self.description = Some(description.into());
        self
    }
}
