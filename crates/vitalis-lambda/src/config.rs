use std::env;
use std::path::PathBuf;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub const DEFAULT_MODEL_VERSION: &str = "Evidence-Based Medical Algorithms v2.0";

/// Runtime settings, read once from the environment at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Calibration JSON to load instead of the built-in tables.
    pub calibration_path: Option<PathBuf>,
    /// `None` allows any origin.
    pub allowed_origins: Option<Vec<String>>,
    pub model_version: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        Self {
            calibration_path: var("VITALIS_CALIBRATION_PATH").map(PathBuf::from),
            allowed_origins: var("VITALIS_ALLOWED_ORIGINS").and_then(|v| parse_origins(&v)),
            model_version: var("VITALIS_MODEL_VERSION")
                .unwrap_or_else(|| DEFAULT_MODEL_VERSION.to_string()),
        }
    }

    pub fn cors_layer(&self) -> CorsLayer {
        let origin = match &self.allowed_origins {
            None => AllowOrigin::any(),
            Some(origins) => {
                let values: Vec<HeaderValue> = origins
                    .iter()
                    .filter_map(|o| match HeaderValue::from_str(o) {
                        Ok(value) => Some(value),
                        Err(_) => {
                            tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                            None
                        }
                    })
                    .collect();
                AllowOrigin::list(values)
            }
        };

        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Comma-separated list; a lone `*` means any origin.
fn parse_origins(raw: &str) -> Option<Vec<String>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        None
    } else {
        Some(origins)
    }
}
