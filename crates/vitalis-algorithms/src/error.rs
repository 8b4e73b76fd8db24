use thiserror::Error;
use vitalis_core::error::CoreError;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("age {age} is outside the supported range [0, {max}]", max = crate::normalize::MAX_AGE)]
    InvalidAge { age: f64 },

    #[error(transparent)]
    Attributes(#[from] CoreError),
}
