//! Composite health score.
//!
//! Starts from a base of 85, subtracts lifestyle penalties and weighted
//! disease risks, adds bonuses, and is clamped to `[MIN_SCORE, MAX_SCORE]`.
//! A second cap pulls the score down when diseases exceed
//! [`HIGH_RISK_THRESHOLD`].

use vitalis_core::models::factors::{AlcoholConsumption, ExerciseFrequency, RiskFactors};

use crate::calculators::DiseaseRisks;

pub const BASE_SCORE: f64 = 85.0;
pub const MIN_SCORE: i64 = 15;
pub const MAX_SCORE: i64 = 95;

/// Ten-year risk (%) above which a disease counts as high risk.
pub const HIGH_RISK_THRESHOLD: f64 = 20.0;
pub const CAP_ONE_HIGH_RISK: u8 = 65;
pub const CAP_MULTIPLE_HIGH_RISK: u8 = 45;

const CARDIOVASCULAR_WEIGHT: f64 = 0.6;
const DIABETES_WEIGHT: f64 = 0.5;
const CANCER_WEIGHT: f64 = 0.4;
const LIFE_EXPECTANCY_WEIGHT: f64 = 3.0;

/// Penalties and bonuses are independent: a factor can contribute to both
/// (e.g. a non-smoker with moderate exercise gets two bonuses).
pub fn health_score(
    risks: &DiseaseRisks,
    factors: &RiskFactors,
    lifestyle_adjustment: f64,
) -> u8 {
    let mut score = BASE_SCORE;

    if factors.smoking {
        score -= 25.0;
    }

    if factors.bmi >= 35.0 {
        score -= 15.0;
    } else if factors.bmi >= 30.0 {
        score -= 10.0;
    } else if factors.bmi < 18.5 {
        score -= 8.0;
    }

    match factors.exercise {
        ExerciseFrequency::None => score -= 15.0,
        ExerciseFrequency::Light => score -= 8.0,
        _ => {}
    }

    if factors.alcohol == AlcoholConsumption::Heavy {
        score -= 12.0;
    }

    score -= risks.cardiovascular * CARDIOVASCULAR_WEIGHT;
    score -= risks.diabetes * DIABETES_WEIGHT;
    score -= risks.cancer * CANCER_WEIGHT;

    if factors.age > 65 {
        score -= 5.0;
    } else if factors.age < 30 {
        score += 5.0;
    }

    for family_history in [
        factors.family_history_cvd,
        factors.family_history_diabetes,
        factors.family_history_cancer,
    ] {
        if family_history {
            score -= 3.0;
        }
    }

    match factors.exercise {
        ExerciseFrequency::Heavy => score += 8.0,
        ExerciseFrequency::Moderate => score += 5.0,
        _ => {}
    }
    if !factors.smoking {
        score += 5.0;
    }
    if factors.has_healthy_bmi() {
        score += 6.0;
    }
    match factors.alcohol {
        AlcoholConsumption::Moderate => score += 3.0,
        AlcoholConsumption::None => score += 2.0,
        _ => {}
    }

    score += lifestyle_adjustment * LIFE_EXPECTANCY_WEIGHT;

    let clamped = (score.trunc() as i64).clamp(MIN_SCORE, MAX_SCORE) as u8;
    apply_high_risk_cap(clamped, risks)
}

/// Number of diseases whose risk exceeds [`HIGH_RISK_THRESHOLD`].
pub fn high_risk_count(risks: &DiseaseRisks) -> usize {
    risks
        .as_array()
        .iter()
        .filter(|risk| **risk > HIGH_RISK_THRESHOLD)
        .count()
}

/// Can only lower the score.
fn apply_high_risk_cap(score: u8, risks: &DiseaseRisks) -> u8 {
    match high_risk_count(risks) {
        0 => score,
        1 => score.min(CAP_ONE_HIGH_RISK),
        _ => score.min(CAP_MULTIPLE_HIGH_RISK),
    }
}
