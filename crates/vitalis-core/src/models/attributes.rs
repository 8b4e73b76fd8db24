use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use super::lenient;
use crate::error::CoreError;

/// Self-reported profile data as submitted by a client, before normalization.
///
/// Every field is optional and deserialization never fails on a bad field
/// value; see [`lenient`] for the coercion rules. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct UserAttributes {
    #[serde(deserialize_with = "lenient::number")]
    #[ts(type = "number | string | null")]
    pub age: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub sex: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    #[ts(type = "number | string | null")]
    pub height_cm: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    #[ts(type = "number | string | null")]
    pub weight_kg: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub ethnicity: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub exercise_frequency: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    #[ts(type = "string | boolean | null")]
    pub tobacco_use: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub alcohol_consumption: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    #[ts(type = "number | string | null")]
    pub systolic_bp: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    #[ts(type = "number | string | null")]
    pub total_cholesterol: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    #[ts(type = "number | string | null")]
    pub hdl_cholesterol: Option<f64>,
    #[serde(deserialize_with = "lenient::text_list")]
    #[ts(type = "Array<string> | string")]
    pub past_diagnoses: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    #[ts(type = "Array<string> | string")]
    pub family_history: Vec<String>,
}

impl UserAttributes {
    /// Build attributes from an arbitrary JSON value.
    ///
    /// Only the top-level shape is checked: `null` yields an empty record and
    /// anything other than an object is rejected. Field values are coerced
    /// leniently.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => Err(CoreError::InvalidAttributes(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(value)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
