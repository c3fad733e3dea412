use crate::error::ClassifyError;
use crate::image_classifier::interface::{ensure_input_shape, Decision, ImageClassifier};
use crate::image_normalizer::tensor::ImageTensor;
use crate::library::logger::interface::Logger;
use std::path::Path;
use std::sync::Arc;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    input_shape: [usize; 4],
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    /// Loads and optimizes the model once. Any failure is a `ModelLoad` error.
    pub fn new(
        model_path: &Path,
        input_shape: [usize; 4],
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifyError> {
        let source = model_path.display().to_string();
        let model = tract_onnx::onnx()
            .model_for_path(model_path)
            .map_err(|e| model_load_error(&source, e))?;

        Self::from_model(model, &source, input_shape, logger)
    }

    /// Fixes the input fact of an already parsed ONNX graph and makes it runnable.
    pub fn from_model(
        model: InferenceModel,
        source: &str,
        input_shape: [usize; 4],
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifyError> {
        let logger = logger.with_namespace("classifier");
        let _ = logger.info(&format!("Loading model from {}", source));

        let model = into_plan(model, input_shape).map_err(|e| model_load_error(source, e))?;

        let _ = logger.info(&format!("Model loaded, input shape {:?}", input_shape));

        Ok(Self {
            model,
            input_shape,
            logger,
        })
    }
}

fn model_load_error(source: &str, error: TractError) -> ClassifyError {
    ClassifyError::ModelLoad {
        path: source.to_string(),
        reason: error.to_string(),
    }
}

fn into_plan(
    model: InferenceModel,
    input_shape: [usize; 4],
) -> TractResult<SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>> {
    model
        .with_input_fact(0, f32::fact(input_shape).into())?
        .into_optimized()?
        .into_runnable()
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn input_shape(&self) -> [usize; 4] {
        self.input_shape
    }

    fn classify(&self, tensor: &ImageTensor) -> Result<Decision, ClassifyError> {
        ensure_input_shape(self.input_shape, tensor)?;

        let input = tract_ndarray::Array4::from_shape_vec(
            (
                self.input_shape[0],
                self.input_shape[1],
                self.input_shape[2],
                self.input_shape[3],
            ),
            tensor.as_slice().to_vec(),
        )
        .map_err(|e| ClassifyError::Inference(e.to_string()))?
        .into_tensor();

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ClassifyError::Inference(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| ClassifyError::Inference("Model produced no output".to_string()))?
            .to_array_view::<f32>()
            .map_err(|e| ClassifyError::Inference(e.to_string()))?;

        let scores: Vec<f32> = output.iter().copied().collect();
        let decision = Decision::from_scores(&scores)?;

        let _ = self.logger.info(&format!("Scores: {:?}", decision));

        Ok(decision)
    }
}
