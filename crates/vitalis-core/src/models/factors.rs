use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Biological sex as used by the sex-specific calibration tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ExerciseFrequency {
    None,
    Light,
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AlcoholConsumption {
    None,
    Light,
    Moderate,
    Heavy,
}

/// Canonical, strongly typed risk factors consumed by every calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskFactors {
    pub age: u32,
    pub sex: Sex,
    /// Normalized ethnicity key, e.g. `african_american`.
    pub ethnicity: String,
    pub bmi: f64,
    pub systolic_bp: Option<f64>,
    pub total_cholesterol: Option<f64>,
    pub hdl_cholesterol: Option<f64>,
    pub smoking: bool,
    pub diabetes: bool,
    pub family_history_cvd: bool,
    pub family_history_diabetes: bool,
    pub family_history_cancer: bool,
    pub exercise: ExerciseFrequency,
    pub alcohol: AlcoholConsumption,
}

impl RiskFactors {
    /// BMI within the 18.5–24.9 band.
    pub fn has_healthy_bmi(&self) -> bool {
        (18.5..=24.9).contains(&self.bmi)
    }
}

impl Default for RiskFactors {
    fn default() -> Self {
        Self {
            age: 35,
            sex: Sex::Male,
            ethnicity: "caucasian".to_string(),
            bmi: 25.0,
            systolic_bp: None,
            total_cholesterol: None,
            hdl_cholesterol: None,
            smoking: false,
            diabetes: false,
            family_history_cvd: false,
            family_history_diabetes: false,
            family_history_cancer: false,
            exercise: ExerciseFrequency::Moderate,
            alcohol: AlcoholConsumption::Moderate,
        }
    }
}
