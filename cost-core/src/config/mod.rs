use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Freight apportionment policy used when a request names none.
    #[serde(default = "default_freight_policy")]
    pub freight_policy: String,

    /// Decimal places kept in reported cost breakdowns.
    #[serde(default = "default_output_scale")]
    pub output_scale: u32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_freight_policy() -> String {
    "value".to_string()
}

fn default_output_scale() -> u32 {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            freight_policy: default_freight_policy(),
            output_scale: default_output_scale(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
