use std::sync::Arc;

use vitalis_algorithms::calibration::Calibration;
use vitalis_algorithms::AssessmentEngine;

use crate::config::{Config, DEFAULT_MODEL_VERSION};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AssessmentEngine>,
    pub model_version: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            engine: Arc::new(AssessmentEngine::default()),
            model_version: DEFAULT_MODEL_VERSION.to_string(),
        }
    }
}

impl AppState {
    /// Loads the calibration file if one is configured. A bad file is a
    /// startup error, never a silent fallback to the built-in tables.
    pub fn from_config(config: &Config) -> eyre::Result<Self> {
        let calibration = match &config.calibration_path {
            Some(path) => Calibration::load(path)?,
            None => {
                tracing::info!("using built-in calibration");
                Calibration::default()
            }
        };

        Ok(Self {
            engine: Arc::new(AssessmentEngine::new(calibration)),
            model_version: config.model_version.clone(),
        })
    }
}
