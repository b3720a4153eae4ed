//! Configuration module for landed-cost.

use cost_core::config as core_config;
use cost_core::error::AppError;
use std::env;

use crate::models::FreightApportionmentPolicy;

#[derive(Debug, Clone)]
pub struct LandedCostConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub service_version: String,
}

impl LandedCostConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(Self {
            common,
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| "landed-cost".to_string()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
        })
    }

    /// Policy applied to requests that do not name one.
    pub fn default_policy(&self) -> FreightApportionmentPolicy {
        FreightApportionmentPolicy::from_string(&self.common.freight_policy)
    }

    pub fn output_scale(&self) -> u32 {
        self.common.output_scale
    }

    pub fn log_level(&self) -> &str {
        &self.common.log_level
    }
}
