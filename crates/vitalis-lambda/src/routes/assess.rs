use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use vitalis_core::models::assessment::AssessmentResult;
use vitalis_core::models::attributes::UserAttributes;

use crate::error::ApiError;
use crate::state::AppState;

/// Assess a raw attributes object. Unknown keys are ignored and malformed
/// fields fall back to defaults; only a non-object body or an invalid age
/// is rejected.
pub async fn assess(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AssessmentResult>, ApiError> {
    let Json(body) = payload?;
    let attrs = UserAttributes::from_value(body)?;
    let result = state.engine.assess(&attrs)?;
    Ok(Json(result))
}
