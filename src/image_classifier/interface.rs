use crate::error::ClassifyError;
use crate::image_normalizer::tensor::ImageTensor;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLabel {
    LowRisk,
    HighRisk,
}

impl RiskLabel {
    pub fn from_is_low_risk(is_low_risk: bool) -> Self {
        if is_low_risk {
            RiskLabel::LowRisk
        } else {
            RiskLabel::HighRisk
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLabel::LowRisk => write!(f, "Low Risk"),
            RiskLabel::HighRisk => write!(f, "High Risk"),
        }
    }
}

/// Raw two-class output of the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub low_risk_score: f32,
    pub high_risk_score: f32,
}

impl Decision {
    pub fn new(low_risk_score: f32, high_risk_score: f32) -> Self {
        Self {
            low_risk_score,
            high_risk_score,
        }
    }

    /// Builds a decision from the model's output vector `[low, high]`.
    pub fn from_scores(scores: &[f32]) -> Result<Self, ClassifyError> {
        match scores {
            [low, high] => Ok(Self::new(*low, *high)),
            _ => Err(ClassifyError::Inference(format!(
                "Expected 2 scores, model returned {}",
                scores.len()
            ))),
        }
    }

    /// Strictly greater: a tie counts as high risk.
    pub fn is_low_risk(&self) -> bool {
        self.low_risk_score > self.high_risk_score
    }

    #[cfg(test)]
    pub fn label(&self) -> RiskLabel {
        RiskLabel::from_is_low_risk(self.is_low_risk())
    }
}

pub trait ImageClassifier {
    fn input_shape(&self) -> [usize; 4];
    fn classify(&self, tensor: &ImageTensor) -> Result<Decision, ClassifyError>;
}

pub fn ensure_input_shape(expected: [usize; 4], tensor: &ImageTensor) -> Result<(), ClassifyError> {
    if tensor.shape() != expected {
        return Err(ClassifyError::ShapeMismatch {
            expected: expected.to_vec(),
            actual: tensor.shape().to_vec(),
        });
    }
    Ok(())
}
