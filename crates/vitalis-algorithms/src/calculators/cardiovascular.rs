use vitalis_core::models::factors::{ExerciseFrequency, RiskFactors, Sex};
use vitalis_core::models::risk::{Disease, RiskResult};

use crate::calibration::Calibration;
use crate::findings::Findings;
use crate::RiskCalculator;

/// Framingham general cardiovascular risk profile (2008), untreated blood
/// pressure variant. Lab values the user did not supply are estimated from
/// demographics and lifestyle.
pub struct CardiovascularCalculator;

/// Sex-specific Framingham coefficients. Each centered term is
/// `coeff * (value - mean)`.
#[derive(Debug, Clone, Copy)]
pub struct Coefficients {
    pub age: f64,
    pub age_mean: f64,
    pub cholesterol: f64,
    pub cholesterol_mean: f64,
    pub hdl: f64,
    pub hdl_mean: f64,
    pub systolic_bp: f64,
    pub systolic_bp_mean: f64,
    pub smoking: f64,
    pub diabetes: f64,
    pub baseline_survival: f64,
}

pub const MALE: Coefficients = Coefficients {
    age: 3.06117,
    age_mean: 61.0,
    cholesterol: 1.12370,
    cholesterol_mean: 180.0,
    hdl: -0.93263,
    hdl_mean: 46.0,
    systolic_bp: 1.93303,
    systolic_bp_mean: 125.0,
    smoking: 0.65451,
    diabetes: 0.57367,
    baseline_survival: 0.88936,
};

pub const FEMALE: Coefficients = Coefficients {
    age: 2.32888,
    age_mean: 61.0,
    cholesterol: 1.20904,
    cholesterol_mean: 180.0,
    hdl: -0.70833,
    hdl_mean: 55.0,
    systolic_bp: 2.76157,
    systolic_bp_mean: 125.0,
    smoking: 0.52873,
    diabetes: 0.69154,
    baseline_survival: 0.95012,
};

pub fn coefficients(sex: Sex) -> &'static Coefficients {
    match sex {
        Sex::Male => &MALE,
        Sex::Female => &FEMALE,
    }
}

/// Lab values actually fed into the score, measured or estimated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabValues {
    pub total_cholesterol: f64,
    pub hdl_cholesterol: f64,
    pub systolic_bp: f64,
}

impl LabValues {
    pub fn resolve(factors: &RiskFactors) -> Self {
        Self {
            total_cholesterol: factors
                .total_cholesterol
                .unwrap_or_else(|| estimate_cholesterol(factors)),
            hdl_cholesterol: factors
                .hdl_cholesterol
                .unwrap_or_else(|| estimate_hdl(factors)),
            systolic_bp: factors
                .systolic_bp
                .unwrap_or_else(|| estimate_systolic_bp(factors)),
        }
    }
}

pub fn estimate_cholesterol(factors: &RiskFactors) -> f64 {
    let mut base = 180.0;
    if factors.age > 50 {
        base += 20.0;
    }
    if factors.sex == Sex::Male {
        base += 10.0;
    }
    if factors.bmi > 30.0 {
        base += 15.0;
    }
    if factors.exercise == ExerciseFrequency::None {
        base += 10.0;
    }
    base
}

pub fn estimate_hdl(factors: &RiskFactors) -> f64 {
    let mut base: f64 = match factors.sex {
        Sex::Female => 50.0,
        Sex::Male => 40.0,
    };
    match factors.exercise {
        ExerciseFrequency::Heavy => base += 10.0,
        ExerciseFrequency::Moderate => base += 5.0,
        _ => {}
    }
    if factors.bmi > 30.0 {
        base -= 5.0;
    }
    if factors.smoking {
        base -= 5.0;
    }
    base.max(20.0)
}

/// Whole mmHg; the age term can contribute half units, which are dropped.
pub fn estimate_systolic_bp(factors: &RiskFactors) -> f64 {
    let mut base = 120.0;
    if factors.age > 50 {
        base += f64::from(factors.age - 50) * 0.5;
    }
    if factors.bmi > 30.0 {
        base += 10.0;
    }
    if factors.smoking {
        base += 5.0;
    }
    base.trunc()
}

/// Proportional-hazards linear predictor.
pub fn hazard_score(factors: &RiskFactors, labs: &LabValues) -> f64 {
    let c = coefficients(factors.sex);
    let mut score = c.age * (f64::from(factors.age) - c.age_mean)
        + c.cholesterol * (labs.total_cholesterol - c.cholesterol_mean)
        + c.hdl * (labs.hdl_cholesterol - c.hdl_mean)
        + c.systolic_bp * (labs.systolic_bp - c.systolic_bp_mean);
    if factors.smoking {
        score += c.smoking;
    }
    if factors.diabetes {
        score += c.diabetes;
    }
    score
}

/// `(1 - S0^exp(score)) * 100`, before ethnicity adjustment.
pub fn ten_year_risk(sex: Sex, score: f64) -> f64 {
    let survival = coefficients(sex).baseline_survival.powf(score.exp());
    (1.0 - survival) * 100.0
}

impl RiskCalculator for CardiovascularCalculator {
    fn disease(&self) -> Disease {
        Disease::HeartDisease
    }

    fn algorithm(&self) -> &str {
        "Framingham Risk Score (2008)"
    }

    fn confidence(&self) -> f64 {
        0.89
    }

    fn calculate(&self, factors: &RiskFactors, calibration: &Calibration) -> RiskResult {
        let labs = LabValues::resolve(factors);
        let score = hazard_score(factors, &labs);
        let multiplier = calibration.cardiovascular_multiplier(&factors.ethnicity, factors.sex);
        let risk = self
            .disease()
            .clamp_risk(ten_year_risk(factors.sex, score) * multiplier);

        tracing::debug!(score, multiplier, risk, "cardiovascular risk");

        let key_factors = key_factors(factors, &labs);
        let recommendations = recommendations(factors, risk, &key_factors);
        self.result(risk, key_factors, recommendations)
    }
}

fn key_factors(factors: &RiskFactors, labs: &LabValues) -> Vec<String> {
    let mut found = Findings::key_factors();
    found.push_if(factors.age > 65, "Advanced age");
    found.push_if(factors.smoking, "Smoking");
    found.push_if(factors.diabetes, "Diabetes");
    found.push_if(labs.total_cholesterol > 240.0, "High cholesterol");
    found.push_if(labs.hdl_cholesterol < 40.0, "Low HDL cholesterol");
    found.push_if(labs.systolic_bp > 140.0, "High blood pressure");
    found.push_if(factors.bmi > 30.0, "Obesity");
    found.push_if(factors.family_history_cvd, "Family history");
    found.push_if(
        factors.exercise == ExerciseFrequency::None,
        "Sedentary lifestyle",
    );
    found.into_vec()
}

fn recommendations(factors: &RiskFactors, risk: f64, key_factors: &[String]) -> Vec<String> {
    let flagged = |name: &str| key_factors.iter().any(|f| f == name);
    let mut recs = Findings::recommendations();

    recs.push_if(
        factors.smoking,
        "Quit smoking - reduces CVD risk by 50% within 1 year",
    );
    recs.push_if(
        factors.bmi > 30.0,
        "Achieve healthy weight (BMI 18.5-24.9) through diet and exercise",
    );
    recs.push_if(
        matches!(
            factors.exercise,
            ExerciseFrequency::None | ExerciseFrequency::Light
        ),
        "Engage in 150 minutes of moderate aerobic activity weekly",
    );
    recs.push_if(
        flagged("High cholesterol"),
        "Follow heart-healthy diet, consider statin therapy consultation",
    );
    recs.push_if(
        flagged("High blood pressure"),
        "Monitor blood pressure regularly, reduce sodium intake",
    );
    if risk > 20.0 {
        recs.push("Consult cardiologist for comprehensive cardiovascular evaluation");
    } else if risk > 7.5 {
        recs.push("Discuss aspirin therapy and statin use with your physician");
    }

    recs.extend([
        "Follow Mediterranean or DASH diet pattern",
        "Limit alcohol consumption to moderate levels",
        "Manage stress through relaxation techniques",
        "Get adequate sleep (7-9 hours nightly)",
        "Schedule regular health screenings",
    ]);
    recs.into_vec()
}
