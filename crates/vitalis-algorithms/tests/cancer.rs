use vitalis_algorithms::calculators::cancer::{self, CancerCalculator};
use vitalis_algorithms::calibration::Calibration;
use vitalis_algorithms::RiskCalculator;
use vitalis_core::models::factors::{AlcoholConsumption, ExerciseFrequency, RiskFactors, Sex};
use vitalis_core::models::risk::{RiskCategory, RiskResult};

fn calculate(factors: &RiskFactors) -> RiskResult {
    CancerCalculator.calculate(factors, Calibration::builtin())
}

#[test]
fn baseline_follows_ten_year_bands() {
    assert_eq!(cancer::baseline_risk(19, Sex::Male), 0.5);
    assert_eq!(cancer::baseline_risk(20, Sex::Male), 0.5);
    assert_eq!(cancer::baseline_risk(29, Sex::Male), 0.5);
    assert_eq!(cancer::baseline_risk(30, Sex::Male), 1.2);
    assert_eq!(cancer::baseline_risk(55, Sex::Male), 8.7);
    assert_eq!(cancer::baseline_risk(89, Sex::Male), 32.8);
    assert_eq!(cancer::baseline_risk(90, Sex::Male), 35.0);
    assert_eq!(cancer::baseline_risk(110, Sex::Male), 35.0);

    assert_eq!(cancer::baseline_risk(25, Sex::Female), 0.6);
    assert_eq!(cancer::baseline_risk(65, Sex::Female), 13.6);
    assert_eq!(cancer::baseline_risk(85, Sex::Female), 28.9);
    assert_eq!(cancer::baseline_risk(95, Sex::Female), 35.0);
}

#[test]
fn modifiers_multiply_in_order() {
    let factors = RiskFactors {
        age: 45,
        sex: Sex::Female,
        ethnicity: "asian".to_string(),
        bmi: 31.0,
        alcohol: AlcoholConsumption::None,
        exercise: ExerciseFrequency::Heavy,
        ..RiskFactors::default()
    };
    assert!((cancer::risk_multiplier(&factors) - 1.15 * 0.8).abs() < 1e-12);

    let result = calculate(&factors);
    assert!((result.ten_year_risk - 3.0912).abs() < 1e-9);
    assert_eq!(result.risk_category, RiskCategory::Low);
    assert_eq!(result.key_risk_factors, vec!["Obesity"]);
}

#[test]
fn scenario_male_smoker_with_heavy_alcohol() {
    let factors = RiskFactors {
        age: 55,
        sex: Sex::Male,
        bmi: 31.0,
        smoking: true,
        alcohol: AlcoholConsumption::Heavy,
        exercise: ExerciseFrequency::None,
        ..RiskFactors::default()
    };
    let result = calculate(&factors);
    assert!((result.ten_year_risk - 42.021).abs() < 1e-9);
    assert_eq!(result.risk_category, RiskCategory::High);
    assert_eq!(
        result.key_risk_factors,
        vec!["Smoking", "Heavy alcohol use", "Obesity", "Physical inactivity"]
    );
    assert_eq!(
        result.recommendations[0],
        "Quit smoking - reduces cancer risk significantly"
    );
}

#[test]
fn ethnicity_adjustment_never_exceeds_cap() {
    let factors = RiskFactors {
        age: 72,
        sex: Sex::Female,
        ethnicity: "native_american".to_string(),
        bmi: 36.0,
        smoking: true,
        family_history_cancer: true,
        alcohol: AlcoholConsumption::Heavy,
        exercise: ExerciseFrequency::None,
        ..RiskFactors::default()
    };
    let result = calculate(&factors);
    assert_eq!(result.ten_year_risk, 80.0);
    assert_eq!(
        result.key_risk_factors,
        vec![
            "Smoking",
            "Advanced age",
            "Family history",
            "Heavy alcohol use",
            "Obesity"
        ]
    );
    assert_eq!(result.recommendations.len(), 8);
}

#[test]
fn enhanced_screening_only_above_fifteen_percent() {
    let factors = RiskFactors {
        age: 62,
        sex: Sex::Male,
        alcohol: AlcoholConsumption::None,
        exercise: ExerciseFrequency::Light,
        bmi: 22.0,
        ..RiskFactors::default()
    };
    let result = calculate(&factors);
    assert_eq!(result.ten_year_risk, 16.2);
    assert_eq!(
        result.recommendations.last().map(String::as_str),
        Some("Discuss enhanced screening protocols with oncologist")
    );
}
