//! Ethnicity calibration tables.
//!
//! The multipliers encode published and estimated epidemiological
//! disparities. They are data, not logic: a deployment can replace them with
//! a JSON file without rebuilding.
//!
//! ```json
//! {
//!   "version": 1,
//!   "cardiovascular": { "african_american": { "male": 1.15, "female": 1.20 }, "asian": 0.85 },
//!   "cancer": { "asian": 0.8 },
//!   "diabetes_high_risk": ["hispanic", "asian"]
//! }
//! ```
//!
//! Keys are normalized ethnicity keys (see [`crate::normalize::ethnicity_key`]).
//! Ethnicities missing from a table get a multiplier of 1.0.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vitalis_core::models::factors::Sex;

use crate::normalize::ethnicity_key;

/// Newest calibration file layout this build understands.
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum CalibrationError {
    #[error("failed to read calibration file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("calibration parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(
        "calibration version {0} is newer than this build supports ({max})",
        max = CURRENT_VERSION
    )]
    UnsupportedVersion(u32),

    #[error("invalid {table} multiplier for '{ethnicity}': {value}")]
    InvalidMultiplier {
        table: &'static str,
        ethnicity: String,
        value: f64,
    },
}

/// A risk multiplier that is either shared by both sexes or sex-specific.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Multiplier {
    Uniform(f64),
    BySex { male: f64, female: f64 },
}

impl Multiplier {
    pub fn for_sex(self, sex: Sex) -> f64 {
        match self {
            Multiplier::Uniform(m) => m,
            Multiplier::BySex { male, female } => match sex {
                Sex::Male => male,
                Sex::Female => female,
            },
        }
    }

    fn values(self) -> [f64; 2] {
        match self {
            Multiplier::Uniform(m) => [m, m],
            Multiplier::BySex { male, female } => [male, female],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub cardiovascular: BTreeMap<String, Multiplier>,
    #[serde(default)]
    pub cancer: BTreeMap<String, f64>,
    /// Ethnicities that add points to the diabetes screening score.
    #[serde(default)]
    pub diabetes_high_risk: BTreeSet<String>,
}

static BUILTIN: LazyLock<Calibration> = LazyLock::new(|| {
    let cardiovascular = BTreeMap::from([
        (
            "african_american".to_string(),
            Multiplier::BySex {
                male: 1.15,
                female: 1.20,
            },
        ),
        ("hispanic".to_string(), Multiplier::Uniform(0.90)),
        ("asian".to_string(), Multiplier::Uniform(0.85)),
        ("native_american".to_string(), Multiplier::Uniform(1.25)),
        ("caucasian".to_string(), Multiplier::Uniform(1.0)),
    ]);

    let cancer = BTreeMap::from([
        ("african_american".to_string(), 1.1),
        ("caucasian".to_string(), 1.0),
        ("hispanic".to_string(), 0.9),
        ("asian".to_string(), 0.8),
        ("native_american".to_string(), 1.2),
    ]);

    let diabetes_high_risk = [
        "african_american",
        "hispanic",
        "native_american",
        "asian",
        "pacific_islander",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();

    Calibration {
        version: CURRENT_VERSION,
        cardiovascular,
        cancer,
        diabetes_high_risk,
    }
});

impl Default for Calibration {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl Calibration {
    /// The tables shipped with the engine.
    pub fn builtin() -> &'static Calibration {
        &BUILTIN
    }

    pub fn from_json_str(s: &str) -> Result<Self, CalibrationError> {
        let raw: Calibration = serde_json::from_str(s)?;
        raw.validated()
    }

    pub fn load(path: &Path) -> Result<Self, CalibrationError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CalibrationError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let calibration = Self::from_json_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            cardiovascular = calibration.cardiovascular.len(),
            cancer = calibration.cancer.len(),
            diabetes_high_risk = calibration.diabetes_high_risk.len(),
            "loaded calibration"
        );
        Ok(calibration)
    }

    /// Check version and multipliers, and normalize every key so lookups
    /// match normalized ethnicities regardless of how the file spelled them.
    fn validated(self) -> Result<Self, CalibrationError> {
        if self.version > CURRENT_VERSION {
            return Err(CalibrationError::UnsupportedVersion(self.version));
        }

        for (ethnicity, multiplier) in &self.cardiovascular {
            for value in multiplier.values() {
                check_multiplier("cardiovascular", ethnicity, value)?;
            }
        }
        for (ethnicity, value) in &self.cancer {
            check_multiplier("cancer", ethnicity, *value)?;
        }

        Ok(Calibration {
            version: CURRENT_VERSION,
            cardiovascular: self
                .cardiovascular
                .into_iter()
                .map(|(k, v)| (ethnicity_key(&k), v))
                .collect(),
            cancer: self
                .cancer
                .into_iter()
                .map(|(k, v)| (ethnicity_key(&k), v))
                .collect(),
            diabetes_high_risk: self
                .diabetes_high_risk
                .iter()
                .map(|k| ethnicity_key(k))
                .collect(),
        })
    }

    pub fn cardiovascular_multiplier(&self, ethnicity: &str, sex: Sex) -> f64 {
        self.cardiovascular
            .get(ethnicity)
            .map_or(1.0, |m| m.for_sex(sex))
    }

    pub fn cancer_multiplier(&self, ethnicity: &str) -> f64 {
        self.cancer.get(ethnicity).copied().unwrap_or(1.0)
    }

    pub fn is_diabetes_high_risk(&self, ethnicity: &str) -> bool {
        self.diabetes_high_risk.contains(ethnicity)
    }
}

fn check_multiplier(
    table: &'static str,
    ethnicity: &str,
    value: f64,
) -> Result<(), CalibrationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalibrationError::InvalidMultiplier {
            table,
            ethnicity: ethnicity.to_string(),
            value,
        })
    }
}
