use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::life_expectancy::LifeExpectancyResult;
use super::risk::RiskResult;

/// Complete output of one assessment.
///
/// Contains no timestamps or identifiers, so identical input always yields an
/// identical value; callers that persist or transport it stamp their own
/// envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub cardiovascular: RiskResult,
    pub diabetes: RiskResult,
    pub cancer: RiskResult,
    /// Composite score in `[15, 95]`.
    pub health_score: u8,
    pub life_expectancy: LifeExpectancyResult,
    /// At most ten, no duplicates.
    pub recommendations: Vec<String>,
}

impl AssessmentResult {
    /// The three disease results in fixed order: heart, diabetes, cancer.
    pub fn risks(&self) -> [&RiskResult; 3] {
        [&self.cardiovascular, &self.diabetes, &self.cancer]
    }
}
