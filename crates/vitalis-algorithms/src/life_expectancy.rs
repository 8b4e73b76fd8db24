//! Life-expectancy estimate: an actuarial baseline adjusted for disease risk
//! and lifestyle, plus projected gains from specific changes.

use std::collections::BTreeMap;

use vitalis_core::models::factors::{AlcoholConsumption, ExerciseFrequency, RiskFactors, Sex};
use vitalis_core::models::life_expectancy::{Intervention, LifeExpectancyResult};

use crate::calculators::DiseaseRisks;

/// SSA period life table (2023), total expected age at each attained age.
const MALE_TABLE: [(u32, f64); 15] = [
    (20, 76.3),
    (25, 76.5),
    (30, 76.8),
    (35, 77.1),
    (40, 77.5),
    (45, 78.0),
    (50, 78.6),
    (55, 79.4),
    (60, 80.4),
    (65, 81.7),
    (70, 83.4),
    (75, 85.6),
    (80, 88.2),
    (85, 91.2),
    (90, 94.8),
];

const FEMALE_TABLE: [(u32, f64); 15] = [
    (20, 81.2),
    (25, 81.3),
    (30, 81.5),
    (35, 81.7),
    (40, 82.0),
    (45, 82.4),
    (50, 82.9),
    (55, 83.6),
    (60, 84.5),
    (65, 85.6),
    (70, 87.0),
    (75, 88.8),
    (80, 90.9),
    (85, 93.4),
    (90, 96.4),
];

/// Penalty tiers per disease: `(threshold, penalty)` from most to least
/// severe. Only the first tier whose threshold is exceeded applies.
const HEART_TIERS: [(f64, f64); 3] = [(20.0, -3.5), (10.0, -2.0), (5.0, -1.0)];
const DIABETES_TIERS: [(f64, f64); 3] = [(25.0, -2.8), (15.0, -1.5), (8.0, -0.8)];
const CANCER_TIERS: [(f64, f64); 3] = [(15.0, -2.2), (8.0, -1.2), (4.0, -0.6)];

const SMOKING_YEARS: f64 = 8.5;
const MAX_WEIGHT_LOSS_GAIN: f64 = 3.2;
const HEAVY_EXERCISE_YEARS: f64 = 2.8;
const LIGHT_EXERCISE_YEARS: f64 = 0.8;
const REDUCE_ALCOHOL_YEARS: f64 = 2.8;

/// Nearest-age lookup; ages outside the table resolve to its end points.
pub fn base_life_expectancy(age: u32, sex: Sex) -> f64 {
    let table = match sex {
        Sex::Male => &MALE_TABLE,
        Sex::Female => &FEMALE_TABLE,
    };
    table
        .iter()
        .min_by_key(|(table_age, _)| table_age.abs_diff(age))
        .map_or(table[0].1, |(_, years)| *years)
}

fn tier_penalty(risk: f64, tiers: &[(f64, f64)]) -> f64 {
    tiers
        .iter()
        .find(|(threshold, _)| risk > *threshold)
        .map_or(0.0, |(_, penalty)| *penalty)
}

pub fn risk_adjustment(risks: &DiseaseRisks) -> f64 {
    tier_penalty(risks.cardiovascular, &HEART_TIERS)
        + tier_penalty(risks.diabetes, &DIABETES_TIERS)
        + tier_penalty(risks.cancer, &CANCER_TIERS)
}

pub fn lifestyle_adjustment(factors: &RiskFactors) -> f64 {
    let mut adjustment = 0.0;

    if factors.smoking {
        adjustment -= SMOKING_YEARS;
    }

    if factors.bmi >= 35.0 {
        adjustment -= 3.2;
    } else if factors.bmi >= 30.0 {
        adjustment -= 1.8;
    } else if factors.bmi < 18.5 {
        adjustment -= 1.5;
    } else if factors.has_healthy_bmi() {
        adjustment += 1.2;
    }

    adjustment += match factors.exercise {
        ExerciseFrequency::Heavy => HEAVY_EXERCISE_YEARS,
        ExerciseFrequency::Moderate => 1.9,
        ExerciseFrequency::Light => LIGHT_EXERCISE_YEARS,
        ExerciseFrequency::None => -2.1,
    };

    match factors.alcohol {
        AlcoholConsumption::Heavy => adjustment -= 2.3,
        AlcoholConsumption::Moderate => adjustment += 0.5,
        _ => {}
    }

    adjustment
}

pub fn potential_gains(factors: &RiskFactors) -> BTreeMap<Intervention, f64> {
    let mut gains = BTreeMap::new();

    if factors.smoking {
        gains.insert(Intervention::QuitSmoking, SMOKING_YEARS);
    }
    if factors.bmi >= 30.0 {
        let gain = ((factors.bmi - 24.9) * 0.3).min(MAX_WEIGHT_LOSS_GAIN);
        gains.insert(Intervention::WeightLoss, round1(gain));
    }
    match factors.exercise {
        ExerciseFrequency::None => {
            gains.insert(Intervention::IncreaseExercise, HEAVY_EXERCISE_YEARS);
        }
        ExerciseFrequency::Light => {
            gains.insert(
                Intervention::IncreaseExercise,
                round1(HEAVY_EXERCISE_YEARS - LIGHT_EXERCISE_YEARS),
            );
        }
        _ => {}
    }
    if factors.alcohol == AlcoholConsumption::Heavy {
        gains.insert(Intervention::ReduceAlcohol, REDUCE_ALCOHOL_YEARS);
    }

    gains
}

pub fn calculate(factors: &RiskFactors, risks: &DiseaseRisks) -> LifeExpectancyResult {
    let base = base_life_expectancy(factors.age, factors.sex);
    let risk = risk_adjustment(risks);
    let lifestyle = lifestyle_adjustment(factors);
    let expectancy = base + risk + lifestyle;
    let remaining = (expectancy - f64::from(factors.age)).max(0.0);

    tracing::debug!(base, risk, lifestyle, expectancy, "life expectancy");

    LifeExpectancyResult {
        current_life_expectancy: round1(expectancy),
        base_life_expectancy: round1(base),
        risk_adjustment: round1(risk),
        lifestyle_adjustment: round1(lifestyle),
        years_remaining: round1(remaining),
        potential_gains: potential_gains(factors),
    }
}

/// Round to one decimal place for presentation.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
