use crate::error::ClassifyError;
use crate::image_classifier::interface::{ensure_input_shape, Decision, ImageClassifier};
use crate::image_normalizer::tensor::ImageTensor;
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Stand-in for a real model. Scores are either fixed or derived from a
/// generator seeded with the tensor contents, so equal inputs give equal output.
pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    input_shape: [usize; 4],
    fixed_scores: Option<Decision>,
    failure: Option<ClassifyError>,
    calls: AtomicUsize,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, input_shape: [usize; 4]) -> Self {
        Self {
            logger: logger.with_namespace("classifier").with_namespace("fake"),
            input_shape,
            fixed_scores: None,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    #[cfg(test)]
    pub fn with_scores(self, low_risk_score: f32, high_risk_score: f32) -> Self {
        Self {
            fixed_scores: Some(Decision::new(low_risk_score, high_risk_score)),
            ..self
        }
    }

    #[cfg(test)]
    pub fn with_failure(self, failure: ClassifyError) -> Self {
        Self {
            failure: Some(failure),
            ..self
        }
    }

    #[cfg(test)]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn seeded_decision(tensor: &ImageTensor) -> Result<Decision, ClassifyError> {
        let mut hasher = DefaultHasher::new();
        tensor.shape().hash(&mut hasher);
        for value in tensor.as_slice() {
            value.to_bits().hash(&mut hasher);
        }

        let mut rng = StdRng::seed_from_u64(hasher.finish());
        let score_dist =
            Uniform::new(0.0f32, 1.0f32).map_err(|e| ClassifyError::Inference(e.to_string()))?;
        let low = score_dist.sample(&mut rng);

        Ok(Decision::new(low, 1.0 - low))
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn input_shape(&self) -> [usize; 4] {
        self.input_shape
    }

    fn classify(&self, tensor: &ImageTensor) -> Result<Decision, ClassifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let _ = self
            .logger
            .info(&format!("Classifying tensor {:?}", tensor.shape()));

        ensure_input_shape(self.input_shape, tensor)?;

        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }

        match self.fixed_scores {
            Some(decision) => Ok(decision),
            None => Self::seeded_decision(tensor),
        }
    }
}
