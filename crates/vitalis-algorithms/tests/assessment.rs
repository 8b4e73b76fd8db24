use serde_json::json;
use vitalis_algorithms::assessment::{self, QUIT_SMOKING, START_WALKING};
use vitalis_algorithms::error::AssessmentError;
use vitalis_algorithms::{AssessmentEngine, all_calculators, get_calculator};
use vitalis_core::models::attributes::UserAttributes;
use vitalis_core::models::factors::{ExerciseFrequency, RiskFactors};
use vitalis_core::models::life_expectancy::Intervention;
use vitalis_core::models::risk::{Disease, RiskCategory, RiskResult};

fn attrs(value: serde_json::Value) -> UserAttributes {
    UserAttributes::from_value(value).unwrap()
}

fn healthy_adult() -> UserAttributes {
    attrs(json!({
        "age": 35,
        "sex": "male",
        "height_cm": 175,
        "weight_kg": 75,
        "ethnicity": "caucasian",
        "exercise_frequency": "3-4 times per week",
        "tobacco_use": "never",
        "alcohol_consumption": "moderate",
    }))
}

fn high_risk_adult() -> UserAttributes {
    attrs(json!({
        "age": 55,
        "sex": "male",
        "height_cm": 175,
        "weight_kg": 95,
        "tobacco_use": "yes",
        "exercise_frequency": "never",
        "alcohol_consumption": "daily",
        "family_history": ["Heart disease", "Diabetes"],
    }))
}

fn synthetic(disease: Disease, recommendations: &[&str]) -> RiskResult {
    RiskResult {
        disease,
        ten_year_risk: 1.0,
        risk_category: RiskCategory::Low,
        confidence: 0.9,
        algorithm: "test".to_string(),
        key_risk_factors: Vec::new(),
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
    }
}

#[test]
fn healthy_adult_assessment() {
    let result = AssessmentEngine::default().assess(&healthy_adult()).unwrap();

    assert!(result.cardiovascular.ten_year_risk < 0.05);
    assert_eq!(result.cardiovascular.risk_category, RiskCategory::Low);
    assert!((result.diabetes.ten_year_risk - 2.2).abs() < 1e-9);
    assert!((result.cancer.ten_year_risk - 1.188).abs() < 1e-9);
    assert!(result.risks().iter().all(|r| r.risk_category == RiskCategory::Low));
    assert_eq!(result.health_score, 95);

    let le = &result.life_expectancy;
    assert_eq!(le.current_life_expectancy, 80.7);
    assert_eq!(le.base_life_expectancy, 77.1);
    assert_eq!(le.risk_adjustment, 0.0);
    assert_eq!(le.lifestyle_adjustment, 3.6);
    assert_eq!(le.years_remaining, 45.7);
    assert!(le.potential_gains.is_empty());

    assert_eq!(
        result.recommendations,
        vec![
            "Follow Mediterranean or DASH diet pattern",
            "Limit alcohol consumption to moderate levels",
            "Manage stress through relaxation techniques",
            "Get adequate sleep (7-9 hours nightly)",
            "Schedule regular health screenings",
            "Follow a low-glycemic, high-fiber diet",
            "Limit refined carbohydrates and added sugars",
            "Monitor blood glucose levels regularly",
            "Maintain healthy sleep patterns (7-9 hours)",
            "Manage stress through mindfulness or counseling",
        ]
    );
}

#[test]
fn high_risk_adult_assessment() {
    let result = AssessmentEngine::default().assess(&high_risk_adult()).unwrap();

    assert_eq!(result.cardiovascular.ten_year_risk, 100.0);
    assert!((result.diabetes.ten_year_risk - 57.2).abs() < 1e-9);
    assert_eq!(
        result.diabetes.key_risk_factors,
        vec!["Obesity", "Age", "Family history", "Physical inactivity"]
    );
    assert!((result.cancer.ten_year_risk - 42.021).abs() < 1e-9);
    assert!(result.risks().iter().all(|r| r.risk_category == RiskCategory::High));
    assert_eq!(result.health_score, 15);

    let le = &result.life_expectancy;
    assert_eq!(le.current_life_expectancy, 56.2);
    assert_eq!(le.base_life_expectancy, 79.4);
    assert_eq!(le.risk_adjustment, -8.5);
    assert_eq!(le.lifestyle_adjustment, -14.7);
    assert_eq!(le.years_remaining, 1.2);
    assert_eq!(le.potential_gains[&Intervention::QuitSmoking], 8.5);
    assert_eq!(le.potential_gains[&Intervention::WeightLoss], 1.8);

    assert_eq!(
        result.recommendations,
        vec![
            "Quit smoking - reduces CVD risk by 50% within 1 year",
            "Achieve healthy weight (BMI 18.5-24.9) through diet and exercise",
            "Engage in 150 minutes of moderate aerobic activity weekly",
            "Consult cardiologist for comprehensive cardiovascular evaluation",
            "Follow Mediterranean or DASH diet pattern",
            "Limit alcohol consumption to moderate levels",
            "Manage stress through relaxation techniques",
            "Get adequate sleep (7-9 hours nightly)",
            "Lose 10+ pounds through diet and exercise",
            "Aim for 150 minutes of moderate exercise weekly",
        ]
    );
}

#[test]
fn empty_attributes_use_defaults() {
    let engine = AssessmentEngine::default();
    let from_empty = engine.assess(&UserAttributes::default()).unwrap();
    let from_factors = engine.assess_factors(&RiskFactors::default());
    assert_eq!(from_empty, from_factors);
}

#[test]
fn assessment_is_deterministic() {
    let engine = AssessmentEngine::default();
    let first = serde_json::to_value(engine.assess(&high_risk_adult()).unwrap()).unwrap();
    let second = serde_json::to_value(engine.assess(&high_risk_adult()).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn invalid_age_is_rejected() {
    let engine = AssessmentEngine::default();
    for age in [-1.0, 121.0, 500.0] {
        let err = engine.assess(&attrs(json!({ "age": age }))).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidAge { .. }));
    }
    assert!(engine.assess(&attrs(json!({ "age": 120 }))).is_ok());
    assert!(engine.assess(&attrs(json!({ "age": 0 }))).is_ok());
}

#[test]
fn merge_inserts_quit_smoking_first() {
    let factors = RiskFactors {
        smoking: true,
        ..RiskFactors::default()
    };
    let a = synthetic(Disease::HeartDisease, &["Eat vegetables", "Sleep well"]);
    let b = synthetic(Disease::Cancer, &["Sleep well", "Wear sunscreen"]);
    let merged = assessment::merge_recommendations(&[&a, &b], &factors);
    assert_eq!(
        merged,
        vec![QUIT_SMOKING, "Eat vegetables", "Sleep well", "Wear sunscreen"]
    );
}

#[test]
fn merge_keeps_existing_smoking_advice() {
    let factors = RiskFactors {
        smoking: true,
        ..RiskFactors::default()
    };
    let a = synthetic(Disease::HeartDisease, &["Eat vegetables", "Quit smoking today"]);
    let merged = assessment::merge_recommendations(&[&a], &factors);
    assert_eq!(merged, vec!["Eat vegetables", "Quit smoking today"]);
}

#[test]
fn merge_appends_weight_and_walking() {
    let factors = RiskFactors {
        bmi: 32.45,
        exercise: ExerciseFrequency::None,
        ..RiskFactors::default()
    };
    let a = synthetic(Disease::Type2Diabetes, &["Eat vegetables"]);
    let merged = assessment::merge_recommendations(&[&a], &factors);
    assert_eq!(merged.len(), 3);
    assert!(merged[1].starts_with("Achieve healthy weight (current BMI: 32."));
    assert_eq!(merged[2], START_WALKING);
}

#[test]
fn merge_caps_at_ten() {
    let many: Vec<String> = (0..8).map(|i| format!("Advice {i}")).collect();
    let more: Vec<String> = (5..12).map(|i| format!("Advice {i}")).collect();
    let a = synthetic(
        Disease::HeartDisease,
        &many.iter().map(String::as_str).collect::<Vec<_>>(),
    );
    let b = synthetic(
        Disease::Cancer,
        &more.iter().map(String::as_str).collect::<Vec<_>>(),
    );
    let merged = assessment::merge_recommendations(&[&a, &b], &RiskFactors::default());
    assert_eq!(merged.len(), assessment::MAX_RECOMMENDATIONS);
    assert_eq!(merged[0], "Advice 0");
    assert_eq!(merged[9], "Advice 9");
}

#[test]
fn registry_lists_calculators_in_reporting_order() {
    let ids: Vec<String> = all_calculators()
        .iter()
        .map(|c| c.id().to_string())
        .collect();
    assert_eq!(ids, vec!["heart_disease", "diabetes", "cancer"]);

    let cancer = get_calculator("cancer").unwrap();
    assert_eq!(cancer.name(), "Cancer (Overall)");
    assert_eq!(cancer.algorithm(), "NCI Cancer Risk Models");
    assert!(get_calculator("stroke").is_none());
}
