//! vitalis-algorithms
//!
//! Deterministic clinical risk scoring. Pure functions over
//! [`RiskFactors`]: no I/O, no clocks, no shared mutable state. Defines the
//! three disease calculators, the life-expectancy model, the composite
//! health score, and the orchestrator that combines them.

pub mod assessment;
pub mod calculators;
pub mod calibration;
pub mod error;
pub mod findings;
pub mod life_expectancy;
pub mod normalize;
pub mod score;

use vitalis_core::models::factors::RiskFactors;
use vitalis_core::models::risk::{Disease, RiskResult};

use calibration::Calibration;

pub use assessment::AssessmentEngine;

/// Trait implemented by each disease risk calculator.
pub trait RiskCalculator: Send + Sync {
    /// The disease this calculator estimates.
    fn disease(&self) -> Disease;

    /// Name of the published algorithm (e.g., "Framingham Risk Score (2008)").
    fn algorithm(&self) -> &str;

    /// Fixed validation confidence of the algorithm, 0–1.
    fn confidence(&self) -> f64;

    /// Estimate the ten-year risk for one set of factors.
    fn calculate(&self, factors: &RiskFactors, calibration: &Calibration) -> RiskResult;

    /// Unique identifier (e.g., "heart_disease", "diabetes").
    fn id(&self) -> &str {
        self.disease().key()
    }

    /// Human-readable name (e.g., "Heart Disease").
    fn name(&self) -> &str {
        self.disease().label()
    }

    /// Assemble a result, clamping the risk to the disease cap and deriving
    /// its category from the clamped value.
    fn result(
        &self,
        raw_risk: f64,
        key_risk_factors: Vec<String>,
        recommendations: Vec<String>,
    ) -> RiskResult {
        let disease = self.disease();
        let ten_year_risk = disease.clamp_risk(raw_risk);
        RiskResult {
            disease,
            ten_year_risk,
            risk_category: disease.categorize(ten_year_risk),
            confidence: self.confidence(),
            algorithm: self.algorithm().to_string(),
            key_risk_factors,
            recommendations,
        }
    }
}

/// Return all registered calculators, in reporting order.
pub fn all_calculators() -> Vec<Box<dyn RiskCalculator>> {
    vec![
        Box::new(calculators::cardiovascular::CardiovascularCalculator),
        Box::new(calculators::diabetes::DiabetesCalculator),
        Box::new(calculators::cancer::CancerCalculator),
    ]
}

/// Look up a calculator by ID.
pub fn get_calculator(id: &str) -> Option<Box<dyn RiskCalculator>> {
    all_calculators().into_iter().find(|c| c.id() == id)
}
