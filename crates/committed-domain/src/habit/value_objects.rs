use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shared::DomainError;

/// How often a habit is meant to be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl TargetFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetFrequency::Daily => "daily",
            TargetFrequency::Weekly => "weekly",
            TargetFrequency::Monthly => "monthly",
        }
    }
}

impl FromStr for TargetFrequency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(TargetFrequency::Daily),
            "weekly" => Ok(TargetFrequency::Weekly),
            "monthly" => Ok(TargetFrequency::Monthly),
            other => Err(DomainError::Validation(format!(
                "Unknown target frequency: {} (expected daily, weekly or monthly)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for TargetFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
