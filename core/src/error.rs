use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    #[error("Scenario {index} not found")]
    UnknownScenario { index: usize },

    #[error("Service {index} not found")]
    UnknownService { index: usize },

    #[error("Stage {index} not found")]
    UnknownStage { index: usize },

    #[error("{field}: expected {expected} entries, got {actual}")]
    ShapeMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;

/// Reject non-finite values and values outside `[min, max]`.
pub(crate) fn ensure_in_range(field: &str, value: f64, min: f64, max: f64) -> ModelResult<()> {
    if !value.is_finite() {
        return Err(ModelError::NotFinite { field: field.to_string() });
    }
    if value < min || value > max {
        return Err(ModelError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

pub(crate) fn ensure_len(field: &str, actual: usize, expected: usize) -> ModelResult<()> {
    if actual != expected {
        return Err(ModelError::ShapeMismatch {
            field: field.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}
