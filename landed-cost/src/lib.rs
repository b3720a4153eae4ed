//! Landed cost - per-unit purchase cost from NF-e line items, freight and taxes.

pub mod config;
pub mod models;
pub mod services;

pub use models::{CostBreakdown, FreightApportionmentPolicy, InvoiceLineItem, LineTaxes};
pub use services::{allocate_costs, apportion_freight, calculate_item_cost};
