//! Per-unit cost breakdown model.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Landed cost of one invoice line, every component per single unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub product_value_per_unit: Decimal,
    pub ipi_per_unit: Decimal,
    pub icms_st_per_unit: Decimal,
    pub freight_per_unit: Decimal,
    pub icms_credit_per_unit: Decimal,
    pub pis_credit_per_unit: Decimal,
    pub cofins_credit_per_unit: Decimal,
    pub calculated_unit_cost: Decimal,
}

impl CostBreakdown {
    /// Sum of the components that raise cost, saturating at the `Decimal` range.
    pub fn additions(&self) -> Decimal {
        self.product_value_per_unit
            .saturating_add(self.ipi_per_unit)
            .saturating_add(self.icms_st_per_unit)
            .saturating_add(self.freight_per_unit)
    }

    /// Sum of the creditable taxes, saturating at the `Decimal` range.
    pub fn credits(&self) -> Decimal {
        self.icms_credit_per_unit
            .saturating_add(self.pis_credit_per_unit)
            .saturating_add(self.cofins_credit_per_unit)
    }

    /// True when credits exceeded additions and the cost was floored at zero.
    pub fn is_clamped(&self) -> bool {
        self.credits() > self.additions()
    }

    /// Copy with every field rounded half away from zero to `scale` places.
    pub fn rounded(&self, scale: u32) -> Self {
        let r =
            |v: Decimal| v.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
        Self {
            product_value_per_unit: r(self.product_value_per_unit),
            ipi_per_unit: r(self.ipi_per_unit),
            icms_st_per_unit: r(self.icms_st_per_unit),
            freight_per_unit: r(self.freight_per_unit),
            icms_credit_per_unit: r(self.icms_credit_per_unit),
            pis_credit_per_unit: r(self.pis_credit_per_unit),
            cofins_credit_per_unit: r(self.cofins_credit_per_unit),
            calculated_unit_cost: r(self.calculated_unit_cost),
        }
    }
}
