use crate::foundation::error::{BlazeError, BlazeResult};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

const BUILTIN_JSON: &str = include_str!("../../assets/dashboard.json");

/// Risk tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Extreme,
    High,
    Moderate,
    Low,
}

/// One row of the risk-level grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskLevel {
    pub level: RiskTier,
    /// Background color utility token, e.g. `bg-red-500`.
    pub color_token: String,
    pub regions: Vec<String>,
    pub description: String,
}

impl RiskLevel {
    /// Matching text color token (`bg-red-500` -> `text-red-500`).
    pub fn text_color_token(&self) -> String {
        self.color_token.replacen("bg-", "text-", 1)
    }
}

/// Alert severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Moderate,
    Low,
}

impl Severity {
    /// Color token of the severity dot.
    pub fn indicator_color(self) -> &'static str {
        match self {
            Self::High => "bg-red-500",
            Self::Moderate => "bg-orange-500",
            Self::Low => "bg-yellow-500",
        }
    }
}

/// A recent alert card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Unique within a dataset.
    pub id: u32,
    pub location: String,
    /// Alert category, e.g. "Active Fire".
    pub kind: String,
    pub severity: Severity,
    /// Display string such as "2 hours ago".
    pub relative_time: String,
}

/// One chart sample.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub label: String,
    pub value: u32,
}

impl TimeSeriesPoint {
    pub fn new(label: impl Into<String>, value: u32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Everything the dashboard displays. Series order is chronological and preserved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub risk_levels: Vec<RiskLevel>,
    pub alerts: Vec<Alert>,
    pub fire_stats: Vec<TimeSeriesPoint>,
}

impl Dataset {
    /// The sample data embedded in the crate.
    pub fn builtin() -> BlazeResult<Self> {
        Self::from_json(BUILTIN_JSON)
    }

    /// Parse and validate a JSON dataset.
    pub fn from_json(json: &str) -> BlazeResult<Self> {
        let data: Self = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Load a JSON dataset from disk.
    pub fn from_path(path: &Path) -> BlazeResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read dataset '{}'", path.display()))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> BlazeResult<()> {
        for level in &self.risk_levels {
            if level.regions.is_empty() {
                return Err(BlazeError::validation(format!(
                    "risk level {:?} has no regions",
                    level.level
                )));
            }
            if level.regions.iter().any(|r| r.trim().is_empty()) {
                return Err(BlazeError::validation(format!(
                    "risk level {:?} has an empty region name",
                    level.level
                )));
            }
        }

        let mut ids = BTreeSet::new();
        for alert in &self.alerts {
            if !ids.insert(alert.id) {
                return Err(BlazeError::validation(format!(
                    "duplicate alert id {}",
                    alert.id
                )));
            }
            if alert.location.trim().is_empty() {
                return Err(BlazeError::validation(format!(
                    "alert {} has an empty location",
                    alert.id
                )));
            }
        }

        if let Some(i) = self.fire_stats.iter().position(|p| p.label.trim().is_empty()) {
            return Err(BlazeError::validation(format!(
                "fire_stats[{i}] has an empty label"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/dataset.rs"]
mod tests;
