use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A lifestyle change whose life-expectancy benefit is projected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Intervention {
    QuitSmoking,
    WeightLoss,
    IncreaseExercise,
    ReduceAlcohol,
}

/// Life-expectancy estimate. All values are years, rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LifeExpectancyResult {
    /// Base plus both adjustments. Not floored at the current age.
    pub current_life_expectancy: f64,
    pub base_life_expectancy: f64,
    /// Sum of disease-risk penalties; zero or negative.
    pub risk_adjustment: f64,
    pub lifestyle_adjustment: f64,
    /// `max(0, current_life_expectancy - age)`.
    pub years_remaining: f64,
    /// Only present for factors that are currently suboptimal.
    pub potential_gains: BTreeMap<Intervention, f64>,
}
