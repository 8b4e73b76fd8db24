use vitalis_algorithms::calculators::DiseaseRisks;
use vitalis_algorithms::score::{self, health_score};
use vitalis_core::models::factors::{AlcoholConsumption, ExerciseFrequency, RiskFactors, Sex};

fn healthy() -> RiskFactors {
    RiskFactors {
        age: 30,
        sex: Sex::Female,
        bmi: 22.0,
        ..RiskFactors::default()
    }
}

#[test]
fn healthy_profile_hits_the_ceiling() {
    assert_eq!(health_score(&DiseaseRisks::default(), &healthy(), 3.6), 95);
}

#[test]
fn one_high_risk_disease_caps_at_65() {
    let risks = DiseaseRisks {
        cardiovascular: 25.0,
        ..DiseaseRisks::default()
    };
    assert_eq!(health_score(&risks, &healthy(), 3.6), 65);
    assert_eq!(score::high_risk_count(&risks), 1);
}

#[test]
fn multiple_high_risk_diseases_cap_at_45() {
    let risks = DiseaseRisks {
        cardiovascular: 25.0,
        diabetes: 21.0,
        cancer: 0.0,
    };
    assert_eq!(health_score(&risks, &healthy(), 3.6), 45);
    assert_eq!(score::high_risk_count(&risks), 2);
}

#[test]
fn threshold_itself_is_not_high_risk() {
    let risks = DiseaseRisks {
        cardiovascular: 20.0,
        ..DiseaseRisks::default()
    };
    assert_eq!(score::high_risk_count(&risks), 0);
    assert_eq!(health_score(&risks, &healthy(), 3.6), 95);
    assert_eq!(health_score(&risks, &healthy(), 0.0), 92);
}

#[test]
fn fractional_score_is_truncated() {
    let factors = RiskFactors {
        smoking: true,
        ..RiskFactors::default()
    };
    let risks = DiseaseRisks {
        cardiovascular: 10.0,
        diabetes: 5.0,
        cancer: 2.5,
    };
    // 34.5 before truncation
    assert_eq!(health_score(&risks, &factors, -8.0), 34);
}

#[test]
fn floor_is_fifteen() {
    let factors = RiskFactors {
        age: 70,
        smoking: true,
        bmi: 40.0,
        family_history_cvd: true,
        family_history_diabetes: true,
        family_history_cancer: true,
        exercise: ExerciseFrequency::None,
        alcohol: AlcoholConsumption::Heavy,
        ..RiskFactors::default()
    };
    let risks = DiseaseRisks {
        cardiovascular: 100.0,
        diabetes: 90.0,
        cancer: 80.0,
    };
    assert_eq!(health_score(&risks, &factors, -20.0), score::MIN_SCORE as u8);
}
