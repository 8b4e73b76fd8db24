use vitalis_algorithms::calculators::diabetes::{self, DiabetesCalculator};
use vitalis_algorithms::calibration::Calibration;
use vitalis_algorithms::RiskCalculator;
use vitalis_core::models::factors::{ExerciseFrequency, RiskFactors, Sex};
use vitalis_core::models::risk::{Disease, RiskCategory, RiskResult};

fn calculate(factors: &RiskFactors) -> RiskResult {
    DiabetesCalculator.calculate(factors, Calibration::builtin())
}

#[test]
fn points_accumulate_from_independent_thresholds() {
    let factors = RiskFactors {
        age: 50,
        sex: Sex::Female,
        ethnicity: "hispanic".to_string(),
        bmi: 27.0,
        systolic_bp: Some(150.0),
        exercise: ExerciseFrequency::Light,
        ..RiskFactors::default()
    };
    // age 2 + bmi 1 + ethnicity 2 + light exercise 1 + blood pressure 1
    assert_eq!(diabetes::points(&factors, Calibration::builtin()), 7);

    let result = calculate(&factors);
    assert_eq!(result.ten_year_risk, 25.0);
    assert_eq!(result.risk_category, RiskCategory::High);
    assert_eq!(
        result.key_risk_factors,
        vec!["Age", "High-risk ethnicity", "High blood pressure"]
    );
    assert_eq!(result.recommendations[0], "Lose 5+ pounds through diet and exercise");
    assert_eq!(result.disease, Disease::Type2Diabetes);
    assert_eq!(result.confidence, 0.92);
}

#[test]
fn male_adjustment_is_ten_percent() {
    assert!((diabetes::points_to_risk(1, Sex::Male) - 2.2).abs() < 1e-9);
    assert_eq!(diabetes::points_to_risk(1, Sex::Female), 2.0);
    assert!((diabetes::points_to_risk(10, Sex::Male) - 57.2).abs() < 1e-9);
}

#[test]
fn score_is_capped_at_fourteen_points() {
    assert_eq!(diabetes::points_to_risk(14, Sex::Female), 85.0);
    assert_eq!(diabetes::points_to_risk(20, Sex::Female), 85.0);
}

#[test]
fn risk_is_clamped_to_ninety() {
    let factors = RiskFactors {
        age: 70,
        sex: Sex::Male,
        ethnicity: "native_american".to_string(),
        bmi: 40.0,
        smoking: true,
        systolic_bp: Some(160.0),
        family_history_diabetes: true,
        exercise: ExerciseFrequency::None,
        ..RiskFactors::default()
    };
    assert_eq!(diabetes::points(&factors, Calibration::builtin()), 15);
    let result = calculate(&factors);
    assert_eq!(result.ten_year_risk, 90.0);
    assert_eq!(result.key_risk_factors.len(), 5);
    assert_eq!(result.recommendations.len(), 8);
    assert!(
        result
            .recommendations
            .contains(&"Discuss metformin therapy with your physician".to_string())
    );
}

#[test]
fn only_measured_blood_pressure_counts() {
    let without = RiskFactors::default();
    let with = RiskFactors {
        systolic_bp: Some(141.0),
        ..RiskFactors::default()
    };
    let borderline = RiskFactors {
        systolic_bp: Some(140.0),
        ..RiskFactors::default()
    };
    let calibration = Calibration::builtin();
    assert_eq!(
        diabetes::points(&with, calibration),
        diabetes::points(&without, calibration) + 1
    );
    assert_eq!(
        diabetes::points(&borderline, calibration),
        diabetes::points(&without, calibration)
    );
}

#[test]
fn low_risk_profile() {
    let factors = RiskFactors {
        age: 35,
        bmi: 24.5,
        ..RiskFactors::default()
    };
    let result = calculate(&factors);
    assert!((result.ten_year_risk - 2.2).abs() < 1e-9);
    assert_eq!(result.risk_category, RiskCategory::Low);
    assert!(result.key_risk_factors.is_empty());
    assert_eq!(
        result.recommendations,
        vec![
            "Follow a low-glycemic, high-fiber diet",
            "Limit refined carbohydrates and added sugars",
            "Monitor blood glucose levels regularly",
            "Maintain healthy sleep patterns (7-9 hours)",
            "Manage stress through mindfulness or counseling",
            "Get annual diabetes screening tests",
        ]
    );
}

#[test]
fn weight_loss_goal_is_capped_at_ten_pounds() {
    let factors = RiskFactors {
        bmi: 33.0,
        ..RiskFactors::default()
    };
    let result = calculate(&factors);
    assert_eq!(result.recommendations[0], "Lose 10+ pounds through diet and exercise");
}
