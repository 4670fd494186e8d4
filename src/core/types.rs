use serde::Serialize;

use super::error::ProjectionError;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    Annually,
    Quarterly,
    Monthly,
    Daily,
}

impl CompoundingFrequency {
    pub const ALL: [CompoundingFrequency; 4] = [
        CompoundingFrequency::Annually,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Daily,
    ];

    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Daily => 365,
        }
    }

    pub fn from_periods(periods: u32) -> Result<Self, ProjectionError> {
        Self::ALL
            .into_iter()
            .find(|f| f.periods_per_year() == periods)
            .ok_or(ProjectionError::InvalidConfiguration { periods })
    }

    pub fn label(self) -> &'static str {
        match self {
            CompoundingFrequency::Annually => "Annually",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Daily => "Daily",
        }
    }
}

/// Parameters for one projection request. Monetary amounts are in currency
/// units, rates are percentages (7.5 means 7.5%).
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionInput {
    pub initial_investment: f64,
    pub monthly_contribution: f64,
    pub years: u32,
    pub annual_rate_percent: f64,
    pub rate_variance_percent: f64,
    pub compounding_periods_per_year: u32,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioPosition {
    Below,
    Central,
    Above,
}

impl ScenarioPosition {
    pub fn color(self) -> &'static str {
        match self {
            ScenarioPosition::Below => "#ff4b4b",
            ScenarioPosition::Central => "#0066cc",
            ScenarioPosition::Above => "#4b8aff",
        }
    }

    pub fn label(self, rate_percent: f64) -> String {
        match self {
            ScenarioPosition::Below => format!("Variance Below ({rate_percent:.2}%)"),
            ScenarioPosition::Central => format!("Future Value ({rate_percent:.2}%)"),
            ScenarioPosition::Above => format!("Variance Above ({rate_percent:.2}%)"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearValue {
    pub year: u32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub position: ScenarioPosition,
    pub rate_percent: f64,
    pub label: String,
    pub color: &'static str,
    pub values: Vec<YearValue>,
}

impl Scenario {
    pub fn final_value(&self) -> f64 {
        self.values.last().map(|p| p.value).unwrap_or(0.0)
    }
}

pub const CONTRIBUTIONS_LABEL: &str = "Total Contributions";
pub const CONTRIBUTIONS_COLOR: &str = "green";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub frequency: CompoundingFrequency,
    /// Ordered low-to-high by rate.
    pub scenarios: Vec<Scenario>,
    /// Principal-only accumulation, no growth.
    pub contributions: Vec<YearValue>,
}

impl ProjectionResult {
    pub fn years(&self) -> u32 {
        self.contributions.last().map(|p| p.year).unwrap_or(0)
    }

    pub fn central(&self) -> &Scenario {
        &self.scenarios[self.scenarios.len() / 2]
    }

    /// Central (or only) scenario at the final year.
    pub fn headline_value(&self) -> f64 {
        self.central().final_value()
    }
}
