//! Normalization of raw [`UserAttributes`] into canonical [`RiskFactors`].
//!
//! Missing or unreadable values fall back to documented defaults. The only
//! rejected input is an age outside `[0, MAX_AGE]`.

use vitalis_core::models::attributes::UserAttributes;
use vitalis_core::models::factors::{AlcoholConsumption, ExerciseFrequency, RiskFactors, Sex};

use crate::error::AssessmentError;

pub const DEFAULT_AGE: u32 = 35;
pub const MAX_AGE: u32 = 120;
pub const DEFAULT_BMI: f64 = 25.0;
pub const DEFAULT_ETHNICITY: &str = "caucasian";

const EXERCISE_MAP: &[(&str, ExerciseFrequency)] = &[
    ("never", ExerciseFrequency::None),
    ("none", ExerciseFrequency::None),
    ("sedentary", ExerciseFrequency::None),
    ("rarely", ExerciseFrequency::Light),
    ("light", ExerciseFrequency::Light),
    ("1-2 times per week", ExerciseFrequency::Light),
    ("moderate", ExerciseFrequency::Moderate),
    ("3-4 times per week", ExerciseFrequency::Moderate),
    ("heavy", ExerciseFrequency::Heavy),
    ("5+ times per week", ExerciseFrequency::Heavy),
    ("daily", ExerciseFrequency::Heavy),
];

const ALCOHOL_MAP: &[(&str, AlcoholConsumption)] = &[
    ("never", AlcoholConsumption::None),
    ("none", AlcoholConsumption::None),
    ("rarely", AlcoholConsumption::Light),
    ("occasionally", AlcoholConsumption::Light),
    ("light", AlcoholConsumption::Light),
    ("weekly", AlcoholConsumption::Moderate),
    ("moderate", AlcoholConsumption::Moderate),
    ("daily", AlcoholConsumption::Heavy),
    ("multiple times daily", AlcoholConsumption::Heavy),
    ("heavy", AlcoholConsumption::Heavy),
];

const SEX_MAP: &[(&str, Sex)] = &[
    ("male", Sex::Male),
    ("m", Sex::Male),
    ("man", Sex::Male),
    ("female", Sex::Female),
    ("f", Sex::Female),
    ("woman", Sex::Female),
];

/// `tobacco_use` answers that mean the person currently smokes.
pub const CURRENT_SMOKER_ANSWERS: &[&str] =
    &["yes", "current", "daily", "occasionally", "smoker", "true"];

pub const CARDIOVASCULAR_KEYWORDS: &[&str] = &["heart", "cardiac"];
pub const DIABETES_KEYWORDS: &[&str] = &["diabetes"];
pub const CANCER_KEYWORDS: &[&str] = &["cancer"];

/// Condition flags found in a free-text history list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryFlags {
    pub cardiovascular: bool,
    pub diabetes: bool,
    pub cancer: bool,
}

impl HistoryFlags {
    /// Case-insensitive keyword containment over every entry.
    pub fn scan<S: AsRef<str>>(entries: &[S]) -> Self {
        let lowered: Vec<String> = entries
            .iter()
            .map(|e| e.as_ref().to_lowercase())
            .collect();
        let mentions = |keywords: &[&str]| {
            lowered
                .iter()
                .any(|entry| keywords.iter().any(|k| entry.contains(k)))
        };

        Self {
            cardiovascular: mentions(CARDIOVASCULAR_KEYWORDS),
            diabetes: mentions(DIABETES_KEYWORDS),
            cancer: mentions(CANCER_KEYWORDS),
        }
    }
}

pub fn normalize(attrs: &UserAttributes) -> Result<RiskFactors, AssessmentError> {
    let age = normalize_age(attrs.age)?;
    let diagnoses = HistoryFlags::scan(&attrs.past_diagnoses);
    let family = HistoryFlags::scan(&attrs.family_history);

    let factors = RiskFactors {
        age,
        sex: attrs.sex.as_deref().map_or(Sex::Male, parse_sex),
        ethnicity: attrs
            .ethnicity
            .as_deref()
            .map(ethnicity_key)
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| DEFAULT_ETHNICITY.to_string()),
        bmi: bmi(attrs.height_cm, attrs.weight_kg),
        systolic_bp: positive(attrs.systolic_bp),
        total_cholesterol: positive(attrs.total_cholesterol),
        hdl_cholesterol: positive(attrs.hdl_cholesterol),
        smoking: attrs.tobacco_use.as_deref().is_some_and(is_current_smoker),
        diabetes: diagnoses.diabetes,
        family_history_cvd: family.cardiovascular,
        family_history_diabetes: family.diabetes,
        family_history_cancer: family.cancer,
        exercise: attrs
            .exercise_frequency
            .as_deref()
            .map_or(ExerciseFrequency::Moderate, parse_exercise),
        alcohol: attrs
            .alcohol_consumption
            .as_deref()
            .map_or(AlcoholConsumption::Moderate, parse_alcohol),
    };

    tracing::debug!(
        age = factors.age,
        sex = ?factors.sex,
        bmi = factors.bmi,
        smoking = factors.smoking,
        exercise = ?factors.exercise,
        alcohol = ?factors.alcohol,
        "normalized risk factors"
    );

    Ok(factors)
}

fn normalize_age(age: Option<f64>) -> Result<u32, AssessmentError> {
    let Some(age) = age else {
        return Ok(DEFAULT_AGE);
    };
    if !(0.0..=f64::from(MAX_AGE)).contains(&age) {
        tracing::warn!(age, "rejecting out-of-range age");
        return Err(AssessmentError::InvalidAge { age });
    }
    Ok(age.trunc() as u32)
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// Lower-case, trim, and replace spaces with underscores.
pub fn ethnicity_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// Body-mass index from height in centimeters and weight in kilograms.
/// Absent or non-positive inputs yield [`DEFAULT_BMI`].
pub fn bmi(height_cm: Option<f64>, weight_kg: Option<f64>) -> f64 {
    match (height_cm, weight_kg) {
        (Some(h), Some(w)) if h > 0.0 && w > 0.0 => {
            let height_m = h / 100.0;
            w / (height_m * height_m)
        }
        _ => DEFAULT_BMI,
    }
}

fn lookup<T: Copy>(table: &[(&str, T)], raw: &str) -> Option<T> {
    let key = raw.trim().to_lowercase();
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

pub fn parse_exercise(raw: &str) -> ExerciseFrequency {
    lookup(EXERCISE_MAP, raw).unwrap_or(ExerciseFrequency::Moderate)
}

pub fn parse_alcohol(raw: &str) -> AlcoholConsumption {
    lookup(ALCOHOL_MAP, raw).unwrap_or(AlcoholConsumption::Moderate)
}

pub fn parse_sex(raw: &str) -> Sex {
    lookup(SEX_MAP, raw).unwrap_or(Sex::Male)
}

pub fn is_current_smoker(tobacco_use: &str) -> bool {
    let answer = tobacco_use.trim().to_lowercase();
    CURRENT_SMOKER_ANSWERS.contains(&answer.as_str())
}
