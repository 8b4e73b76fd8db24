use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use vitalis_algorithms::{all_calculators, get_calculator, RiskCalculator};

use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct CalculatorSummary {
    id: String,
    name: String,
    algorithm: String,
    confidence: f64,
    max_risk: f64,
}

impl CalculatorSummary {
    fn of(calculator: &dyn RiskCalculator) -> Self {
        Self {
            id: calculator.id().to_string(),
            name: calculator.name().to_string(),
            algorithm: calculator.algorithm().to_string(),
            confidence: calculator.confidence(),
            max_risk: calculator.disease().max_risk(),
        }
    }
}

pub async fn list_calculators() -> Json<Vec<CalculatorSummary>> {
    let calculators: Vec<CalculatorSummary> = all_calculators()
        .iter()
        .map(|c| CalculatorSummary::of(c.as_ref()))
        .collect();
    Json(calculators)
}

pub async fn get_calculator_detail(
    Path(id): Path<String>,
) -> Result<Json<CalculatorSummary>, ApiError> {
    let calculator = get_calculator(&id)
        .ok_or_else(|| ApiError::NotFound(format!("calculator not found: {id}")))?;

    Ok(Json(CalculatorSummary::of(calculator.as_ref())))
}
