//! Deterministic narrative for prediction envelopes: the summary block and
//! the plain-language reasoning that accompany the numeric results.

use serde::Serialize;

use vitalis_core::models::assessment::AssessmentResult;
use vitalis_core::models::factors::{AlcoholConsumption, ExerciseFrequency, RiskFactors};
use vitalis_core::models::life_expectancy::Intervention;
use vitalis_core::models::risk::RiskCategory;

pub const IMMEDIATE_ACTIONS: usize = 3;
pub const LIFESTYLE_IMPROVEMENTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallAssessment {
    pub health_score: u8,
    /// Labels of diseases in the High category.
    pub primary_concerns: Vec<String>,
    pub positive_factors: Vec<String>,
    pub immediate_actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reasoning {
    pub health_score_reasoning: String,
    pub lifestyle_improvements: Vec<String>,
    pub personalized_insights: Vec<String>,
}

pub fn overall_assessment(result: &AssessmentResult, factors: &RiskFactors) -> OverallAssessment {
    OverallAssessment {
        health_score: result.health_score,
        primary_concerns: result
            .risks()
            .iter()
            .filter(|r| r.risk_category == RiskCategory::High)
            .map(|r| r.disease.label().to_string())
            .collect(),
        positive_factors: positive_factors(result, factors),
        immediate_actions: result
            .recommendations
            .iter()
            .take(IMMEDIATE_ACTIONS)
            .cloned()
            .collect(),
    }
}

pub fn positive_factors(result: &AssessmentResult, factors: &RiskFactors) -> Vec<String> {
    let mut found = Vec::new();
    if !factors.smoking {
        found.push("Non-smoker".to_string());
    }
    if factors.has_healthy_bmi() {
        found.push(format!("Healthy BMI ({:.1})", factors.bmi));
    }
    if matches!(
        factors.exercise,
        ExerciseFrequency::Moderate | ExerciseFrequency::Heavy
    ) {
        found.push("Regular physical activity".to_string());
    }
    if matches!(
        factors.alcohol,
        AlcoholConsumption::None | AlcoholConsumption::Light
    ) {
        found.push("Low alcohol intake".to_string());
    }
    for risk in result.risks() {
        if risk.risk_category == RiskCategory::Low {
            found.push(format!("Low {} risk", risk.disease.label()));
        }
    }
    found
}

pub fn reasoning(result: &AssessmentResult) -> Reasoning {
    let le = &result.life_expectancy;

    let mut insights = vec![
        "Complete medical assessment completed using validated clinical algorithms.".to_string(),
        format!(
            "Estimated life expectancy is {:.1} years, about {:.1} years from now.",
            le.current_life_expectancy, le.years_remaining
        ),
    ];
    if let Some((intervention, years)) = le
        .potential_gains
        .iter()
        .max_by(|a, b| a.1.total_cmp(b.1))
    {
        insights.push(format!(
            "{} could add up to {years:.1} years.",
            intervention_phrase(*intervention)
        ));
    }

    Reasoning {
        health_score_reasoning: format!(
            "Your health score of {}/100 is based on evidence-based medical algorithms \
             considering your age, lifestyle factors, and risk assessments.",
            result.health_score
        ),
        lifestyle_improvements: result
            .recommendations
            .iter()
            .take(LIFESTYLE_IMPROVEMENTS)
            .cloned()
            .collect(),
        personalized_insights: insights,
    }
}

fn intervention_phrase(intervention: Intervention) -> &'static str {
    match intervention {
        Intervention::QuitSmoking => "Quitting smoking",
        Intervention::WeightLoss => "Reaching a healthy weight",
        Intervention::IncreaseExercise => "Exercising regularly",
        Intervention::ReduceAlcohol => "Cutting back on alcohol",
    }
}
