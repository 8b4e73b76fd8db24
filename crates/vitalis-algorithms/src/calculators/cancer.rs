use vitalis_core::models::factors::{AlcoholConsumption, ExerciseFrequency, RiskFactors, Sex};
use vitalis_core::models::risk::{Disease, RiskResult};

use crate::calibration::Calibration;
use crate::findings::Findings;
use crate::RiskCalculator;

/// Overall cancer risk: SEER-style baseline incidence by age band and sex,
/// scaled by multiplicative lifestyle and history modifiers.
pub struct CancerCalculator;

/// Ten-year incidence (%) for the bands [20, 30), [30, 40) … [80, 90).
const MALE_BASELINE: [f64; 7] = [0.5, 1.2, 3.8, 8.7, 16.2, 25.1, 32.8];
const FEMALE_BASELINE: [f64; 7] = [0.6, 1.8, 4.2, 7.9, 13.6, 21.4, 28.9];

const FIRST_BAND_AGE: u32 = 20;
const BAND_WIDTH: u32 = 10;
/// Baseline for ages at or past the end of the table.
const TOP_BASELINE: f64 = 35.0;
/// Baseline for ages below the first band.
const YOUNG_BASELINE: f64 = 0.5;

pub fn baseline_risk(age: u32, sex: Sex) -> f64 {
    let table = match sex {
        Sex::Male => &MALE_BASELINE,
        Sex::Female => &FEMALE_BASELINE,
    };
    if age < FIRST_BAND_AGE {
        return YOUNG_BASELINE;
    }
    let band = ((age - FIRST_BAND_AGE) / BAND_WIDTH) as usize;
    table.get(band).copied().unwrap_or(TOP_BASELINE)
}

/// Product of the lifestyle and history modifiers, applied in fixed order.
pub fn risk_multiplier(factors: &RiskFactors) -> f64 {
    let mut multiplier = 1.0;

    if factors.smoking {
        multiplier *= 2.5;
    }
    if factors.family_history_cancer {
        multiplier *= 1.8;
    }

    match factors.alcohol {
        AlcoholConsumption::Heavy => multiplier *= 1.4,
        AlcoholConsumption::Moderate => multiplier *= 1.1,
        _ => {}
    }

    if factors.bmi >= 35.0 {
        multiplier *= 1.3;
    } else if factors.bmi >= 30.0 {
        multiplier *= 1.15;
    }

    match factors.exercise {
        ExerciseFrequency::Heavy => multiplier *= 0.8,
        ExerciseFrequency::Moderate => multiplier *= 0.9,
        ExerciseFrequency::None => multiplier *= 1.2,
        ExerciseFrequency::Light => {}
    }

    multiplier
}

impl RiskCalculator for CancerCalculator {
    fn disease(&self) -> Disease {
        Disease::Cancer
    }

    fn algorithm(&self) -> &str {
        "NCI Cancer Risk Models"
    }

    fn confidence(&self) -> f64 {
        0.82
    }

    fn calculate(&self, factors: &RiskFactors, calibration: &Calibration) -> RiskResult {
        let disease = self.disease();
        let baseline = baseline_risk(factors.age, factors.sex);
        let modified = disease.clamp_risk(baseline * risk_multiplier(factors));
        let ethnicity = calibration.cancer_multiplier(&factors.ethnicity);
        let risk = disease.clamp_risk(modified * ethnicity);

        tracing::debug!(baseline, ethnicity, risk, "cancer risk");

        self.result(risk, key_factors(factors), recommendations(factors, risk))
    }
}

fn key_factors(factors: &RiskFactors) -> Vec<String> {
    let mut found = Findings::key_factors();
    found.push_if(factors.smoking, "Smoking");
    found.push_if(factors.age > 65, "Advanced age");
    found.push_if(factors.family_history_cancer, "Family history");
    found.push_if(
        factors.alcohol == AlcoholConsumption::Heavy,
        "Heavy alcohol use",
    );
    found.push_if(factors.bmi >= 30.0, "Obesity");
    found.push_if(
        factors.exercise == ExerciseFrequency::None,
        "Physical inactivity",
    );
    found.into_vec()
}

fn recommendations(factors: &RiskFactors, risk: f64) -> Vec<String> {
    let mut recs = Findings::recommendations();

    recs.push_if(
        factors.smoking,
        "Quit smoking - reduces cancer risk significantly",
    );
    recs.extend([
        "Follow cancer screening guidelines for your age group",
        "Maintain a diet rich in fruits and vegetables",
        "Limit processed and red meat consumption",
    ]);
    recs.push_if(
        matches!(
            factors.alcohol,
            AlcoholConsumption::Moderate | AlcoholConsumption::Heavy
        ),
        "Limit alcohol consumption to reduce cancer risk",
    );
    recs.push_if(
        factors.bmi >= 25.0,
        "Maintain healthy weight through diet and exercise",
    );
    recs.extend([
        "Protect skin from UV radiation with sunscreen",
        "Stay physically active with regular exercise",
        "Consider genetic counseling if strong family history",
    ]);
    recs.push_if(
        risk > 15.0,
        "Discuss enhanced screening protocols with oncologist",
    );
    recs.into_vec()
}
