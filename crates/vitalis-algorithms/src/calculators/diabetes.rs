use vitalis_core::models::factors::{ExerciseFrequency, RiskFactors, Sex};
use vitalis_core::models::risk::{Disease, RiskResult};

use crate::calibration::Calibration;
use crate::findings::Findings;
use crate::RiskCalculator;

/// ADA-style type 2 diabetes screening score. Points are summed from
/// independent thresholds and mapped to a ten-year risk.
pub struct DiabetesCalculator;

pub const MAX_POINTS: u32 = 14;

/// Ten-year risk (%) indexed by point score `0..=MAX_POINTS`.
pub const POINTS_TO_RISK: [f64; 15] = [
    1.0, 2.0, 3.0, 5.0, 8.0, 12.0, 18.0, 25.0, 33.0, 42.0, 52.0, 62.0, 72.0, 80.0, 85.0,
];

pub const MALE_ADJUSTMENT: f64 = 1.1;

pub fn points(factors: &RiskFactors, calibration: &Calibration) -> u32 {
    let mut points = 0;

    points += match factors.age {
        65.. => 3,
        45.. => 2,
        35.. => 1,
        _ => 0,
    };

    points += if factors.bmi >= 35.0 {
        3
    } else if factors.bmi >= 30.0 {
        2
    } else if factors.bmi >= 25.0 {
        1
    } else {
        0
    };

    if factors.family_history_diabetes {
        points += 3;
    }
    if calibration.is_diabetes_high_risk(&factors.ethnicity) {
        points += 2;
    }

    points += match factors.exercise {
        ExerciseFrequency::None => 2,
        ExerciseFrequency::Light => 1,
        _ => 0,
    };

    if factors.smoking {
        points += 1;
    }
    if measured_hypertension(factors) {
        points += 1;
    }

    points
}

/// Map a point score to a ten-year risk, before clamping.
pub fn points_to_risk(points: u32, sex: Sex) -> f64 {
    let base = POINTS_TO_RISK[points.min(MAX_POINTS) as usize];
    match sex {
        Sex::Male => base * MALE_ADJUSTMENT,
        Sex::Female => base,
    }
}

/// Only a measured reading counts here; the cardiovascular estimate does not.
fn measured_hypertension(factors: &RiskFactors) -> bool {
    factors.systolic_bp.is_some_and(|bp| bp > 140.0)
}

impl RiskCalculator for DiabetesCalculator {
    fn disease(&self) -> Disease {
        Disease::Type2Diabetes
    }

    fn algorithm(&self) -> &str {
        "ADA Diabetes Risk Calculator"
    }

    fn confidence(&self) -> f64 {
        0.92
    }

    fn calculate(&self, factors: &RiskFactors, calibration: &Calibration) -> RiskResult {
        let points = points(factors, calibration);
        let risk = self
            .disease()
            .clamp_risk(points_to_risk(points, factors.sex));

        tracing::debug!(points, risk, "diabetes risk");

        self.result(
            risk,
            key_factors(factors, calibration),
            recommendations(factors, risk),
        )
    }
}

fn key_factors(factors: &RiskFactors, calibration: &Calibration) -> Vec<String> {
    let mut found = Findings::key_factors();
    found.push_if(factors.bmi >= 30.0, "Obesity");
    found.push_if(factors.age >= 45, "Age");
    found.push_if(factors.family_history_diabetes, "Family history");
    found.push_if(
        factors.exercise == ExerciseFrequency::None,
        "Physical inactivity",
    );
    found.push_if(
        calibration.is_diabetes_high_risk(&factors.ethnicity),
        "High-risk ethnicity",
    );
    found.push_if(measured_hypertension(factors), "High blood pressure");
    found.into_vec()
}

fn recommendations(factors: &RiskFactors, risk: f64) -> Vec<String> {
    let mut recs = Findings::recommendations();

    if factors.bmi >= 25.0 {
        // Rough excess weight in pounds, capped at a 10 lb first goal.
        let pounds = ((factors.bmi - 24.9) * 2.2).min(10.0);
        recs.push(format!("Lose {pounds:.0}+ pounds through diet and exercise"));
    }
    recs.push_if(
        matches!(
            factors.exercise,
            ExerciseFrequency::None | ExerciseFrequency::Light
        ),
        "Aim for 150 minutes of moderate exercise weekly",
    );
    recs.extend([
        "Follow a low-glycemic, high-fiber diet",
        "Limit refined carbohydrates and added sugars",
        "Monitor blood glucose levels regularly",
    ]);
    if risk > 25.0 {
        recs.push("Discuss metformin therapy with your physician");
        recs.push("Consider diabetes prevention program enrollment");
    }
    recs.extend([
        "Maintain healthy sleep patterns (7-9 hours)",
        "Manage stress through mindfulness or counseling",
        "Get annual diabetes screening tests",
    ]);
    recs.into_vec()
}
