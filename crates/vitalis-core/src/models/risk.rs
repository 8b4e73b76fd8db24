use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The diseases the engine estimates a ten-year risk for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Disease {
    #[serde(rename = "Heart Disease")]
    HeartDisease,
    #[serde(rename = "Type 2 Diabetes")]
    Type2Diabetes,
    #[serde(rename = "Cancer (Overall)")]
    Cancer,
}

impl Disease {
    pub const ALL: [Disease; 3] = [Disease::HeartDisease, Disease::Type2Diabetes, Disease::Cancer];

    /// Stable machine identifier (e.g. "heart_disease").
    pub fn key(self) -> &'static str {
        match self {
            Disease::HeartDisease => "heart_disease",
            Disease::Type2Diabetes => "diabetes",
            Disease::Cancer => "cancer",
        }
    }

    /// Display label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Disease::HeartDisease => "Heart Disease",
            Disease::Type2Diabetes => "Type 2 Diabetes",
            Disease::Cancer => "Cancer (Overall)",
        }
    }

    /// Upper bound of the reported ten-year risk, in percent.
    pub fn max_risk(self) -> f64 {
        match self {
            Disease::HeartDisease => 100.0,
            Disease::Type2Diabetes => 90.0,
            Disease::Cancer => 80.0,
        }
    }

    /// `(medium, high)` lower bounds, in percent.
    pub fn category_bounds(self) -> (f64, f64) {
        match self {
            Disease::HeartDisease => (7.5, 20.0),
            Disease::Type2Diabetes => (10.0, 25.0),
            Disease::Cancer => (5.0, 15.0),
        }
    }

    /// Categorize a ten-year risk. Bounds are exclusive on the low side, so a
    /// risk equal to a bound falls into the higher category.
    pub fn categorize(self, risk: f64) -> RiskCategory {
        let (medium, high) = self.category_bounds();
        if risk < medium {
            RiskCategory::Low
        } else if risk < high {
            RiskCategory::Medium
        } else {
            RiskCategory::High
        }
    }

    /// Clamp a raw risk into `[0, max_risk]`.
    pub fn clamp_risk(self, risk: f64) -> f64 {
        risk.clamp(0.0, self.max_risk())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

/// Ten-year risk estimate for a single disease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskResult {
    pub disease: Disease,
    /// Percentage in `[0, disease.max_risk()]`.
    pub ten_year_risk: f64,
    pub risk_category: RiskCategory,
    /// Published validation confidence of the algorithm (0–1), not data-derived.
    pub confidence: f64,
    pub algorithm: String,
    /// At most five, in evaluation order.
    pub key_risk_factors: Vec<String>,
    /// At most eight, in priority order, no duplicates.
    pub recommendations: Vec<String>,
}
