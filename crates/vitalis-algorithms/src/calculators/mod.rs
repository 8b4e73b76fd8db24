pub mod cancer;
pub mod cardiovascular;
pub mod diabetes;

use vitalis_core::models::risk::RiskResult;

/// The three ten-year risks, in percent, as consumed by the life-expectancy
/// model and the composite score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DiseaseRisks {
    pub cardiovascular: f64,
    pub diabetes: f64,
    pub cancer: f64,
}

impl DiseaseRisks {
    pub fn from_results(
        cardiovascular: &RiskResult,
        diabetes: &RiskResult,
        cancer: &RiskResult,
    ) -> Self {
        Self {
            cardiovascular: cardiovascular.ten_year_risk,
            diabetes: diabetes.ten_year_risk,
            cancer: cancer.ten_year_risk,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.cardiovascular, self.diabetes, self.cancer]
    }
}
