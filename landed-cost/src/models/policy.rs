//! Freight apportionment policy.

use serde::{Deserialize, Serialize};

/// How a single freight charge is spread across invoice lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FreightApportionmentPolicy {
    /// Proportional to each line's declared total.
    #[default]
    #[serde(rename = "value")]
    ByValue,
    /// Proportional to weight; falls back to `ByValue` when weights are unusable.
    #[serde(rename = "weight")]
    ByWeight,
    /// Same share for every line.
    #[serde(rename = "equal")]
    Equal,
}

impl FreightApportionmentPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FreightApportionmentPolicy::ByValue => "value",
            FreightApportionmentPolicy::ByWeight => "weight",
            FreightApportionmentPolicy::Equal => "equal",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "weight" => FreightApportionmentPolicy::ByWeight,
            "equal" => FreightApportionmentPolicy::Equal,
            _ => FreightApportionmentPolicy::ByValue,
        }
    }
}

impl std::fmt::Display for FreightApportionmentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
