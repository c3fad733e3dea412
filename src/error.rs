use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifyError {
    /// The classifier artifact could not be loaded. Fatal at startup.
    #[error("Error loading model {path}: {reason}")]
    ModelLoad { path: String, reason: String },

    #[error("Could not decode image: {0}")]
    Decode(String),

    #[error("Input shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Error during prediction: {0}")]
    Inference(String),
}

impl ClassifyError {
    #[cfg(test)]
    pub fn is_fatal(&self) -> bool {
        matches!(self, ClassifyError::ModelLoad { .. })
    }
}
