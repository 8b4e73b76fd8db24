use std::sync::Arc;

use vitalis_core::models::assessment::AssessmentResult;
use vitalis_core::models::attributes::UserAttributes;
use vitalis_core::models::factors::{ExerciseFrequency, RiskFactors};
use vitalis_core::models::risk::RiskResult;

use crate::calculators::cancer::CancerCalculator;
use crate::calculators::cardiovascular::CardiovascularCalculator;
use crate::calculators::diabetes::DiabetesCalculator;
use crate::calculators::DiseaseRisks;
use crate::calibration::Calibration;
use crate::error::AssessmentError;
use crate::{life_expectancy, normalize, score, RiskCalculator};

pub const MAX_RECOMMENDATIONS: usize = 10;

/// Inserted first for smokers when no merged entry already mentions it.
pub const QUIT_SMOKING: &str = "Quit smoking - single most important health improvement";
pub const QUIT_SMOKING_PHRASE: &str = "Quit smoking";
pub const START_WALKING: &str = "Start with 30 minutes of walking 5 days per week";

/// Runs a complete assessment. Holds only read-only calibration data, so a
/// single engine can be shared across threads and requests.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    calibration: Arc<Calibration>,
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new(Calibration::default())
    }
}

impl AssessmentEngine {
    pub fn new(calibration: Calibration) -> Self {
        Self {
            calibration: Arc::new(calibration),
        }
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Normalize raw attributes and assess them. Fails only for an invalid age.
    pub fn assess(&self, attrs: &UserAttributes) -> Result<AssessmentResult, AssessmentError> {
        let factors = normalize::normalize(attrs)?;
        Ok(self.assess_factors(&factors))
    }

    pub fn assess_factors(&self, factors: &RiskFactors) -> AssessmentResult {
        let calibration = self.calibration.as_ref();
        let cardiovascular = CardiovascularCalculator.calculate(factors, calibration);
        let diabetes = DiabetesCalculator.calculate(factors, calibration);
        let cancer = CancerCalculator.calculate(factors, calibration);

        let risks = DiseaseRisks::from_results(&cardiovascular, &diabetes, &cancer);
        let life_expectancy = life_expectancy::calculate(factors, &risks);
        let health_score =
            score::health_score(&risks, factors, life_expectancy.lifestyle_adjustment);
        let recommendations =
            merge_recommendations(&[&cardiovascular, &diabetes, &cancer], factors);

        tracing::info!(
            health_score,
            cardiovascular = cardiovascular.ten_year_risk,
            diabetes = diabetes.ten_year_risk,
            cancer = cancer.ten_year_risk,
            life_expectancy = life_expectancy.current_life_expectancy,
            "assessment complete"
        );

        AssessmentResult {
            cardiovascular,
            diabetes,
            cancer,
            health_score,
            life_expectancy,
            recommendations,
        }
    }
}

/// Merge per-disease recommendations into one prioritized list.
///
/// First-seen order, exact-string dedup, smoking cessation first for smokers,
/// then weight and exercise messages, capped at [`MAX_RECOMMENDATIONS`].
pub fn merge_recommendations(results: &[&RiskResult], factors: &RiskFactors) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    for rec in results.iter().flat_map(|r| &r.recommendations) {
        if !merged.contains(rec) {
            merged.push(rec.clone());
        }
    }

    if factors.smoking && !merged.iter().any(|r| r.contains(QUIT_SMOKING_PHRASE)) {
        merged.insert(0, QUIT_SMOKING.to_string());
    }

    if factors.bmi >= 30.0 {
        let weight = format!("Achieve healthy weight (current BMI: {:.1})", factors.bmi);
        if !merged.contains(&weight) {
            merged.push(weight);
        }
    }

    if factors.exercise == ExerciseFrequency::None && !merged.iter().any(|r| r == START_WALKING) {
        merged.push(START_WALKING.to_string());
    }

    merged.truncate(MAX_RECOMMENDATIONS);
    merged
}
