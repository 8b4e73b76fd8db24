use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use vitalis_algorithms::normalize;
use vitalis_core::models::attributes::UserAttributes;
use vitalis_core::models::life_expectancy::LifeExpectancyResult;
use vitalis_core::models::risk::RiskResult;

use crate::error::ApiError;
use crate::narrative::{self, OverallAssessment, Reasoning};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PredictionRequest {
    /// Raw attributes. Absent, null, or an empty object uses [`sample_profile`].
    #[serde(default)]
    pub user_data: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct PredictionEnvelope {
    pub prediction_id: Uuid,
    pub predictions: Vec<RiskResult>,
    pub model_version: String,
    pub prediction_date: jiff::Timestamp,
    /// Disease key to algorithm confidence (0–1).
    pub confidence_scores: BTreeMap<String, f64>,
    pub overall_assessment: OverallAssessment,
    pub life_expectancy: LifeExpectancyResult,
    pub reasoning: Reasoning,
    pub comprehensive_recommendations: Vec<String>,
}

/// Profile assessed when a request carries no user data.
pub fn sample_profile() -> UserAttributes {
    UserAttributes {
        age: Some(35.0),
        sex: Some("male".to_string()),
        height_cm: Some(175.0),
        weight_kg: Some(75.0),
        ethnicity: Some("caucasian".to_string()),
        exercise_frequency: Some("3-4 times per week".to_string()),
        tobacco_use: Some("never".to_string()),
        alcohol_consumption: Some("moderate".to_string()),
        ..UserAttributes::default()
    }
}

pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<PredictionEnvelope>, ApiError> {
    let Json(request) = payload?;
    let attrs = match request.user_data {
        None | Some(Value::Null) => sample_profile(),
        Some(Value::Object(map)) if map.is_empty() => sample_profile(),
        Some(data) => UserAttributes::from_value(data)?,
    };

    let factors = normalize::normalize(&attrs)?;
    let result = state.engine.assess_factors(&factors);

    let prediction_id = Uuid::new_v4();
    tracing::info!(
        %prediction_id,
        health_score = result.health_score,
        "prediction generated"
    );

    let predictions: Vec<RiskResult> = result.risks().into_iter().cloned().collect();
    let confidence_scores = result
        .risks()
        .iter()
        .map(|r| (r.disease.key().to_string(), r.confidence))
        .collect();

    let overall_assessment = narrative::overall_assessment(&result, &factors);
    let reasoning = narrative::reasoning(&result);

    Ok(Json(PredictionEnvelope {
        prediction_id,
        predictions,
        model_version: state.model_version.clone(),
        prediction_date: jiff::Timestamp::now(),
        confidence_scores,
        overall_assessment,
        reasoning,
        life_expectancy: result.life_expectancy,
        comprehensive_recommendations: result.recommendations,
    }))
}
