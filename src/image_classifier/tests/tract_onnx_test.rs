use crate::error::ClassifyError;
use crate::image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_normalizer::tensor::ImageTensor;
use crate::library::logger::impl_console::LoggerConsole;
use std::sync::Arc;
use tract_onnx::pb;
use tract_onnx::pb::tensor_shape_proto::{dimension, Dimension};
use tract_onnx::prelude::*;

const INPUT_SHAPE: [usize; 4] = [1, 50, 50, 3];

fn logger() -> Arc<LoggerConsole> {
    Arc::new(LoggerConsole::new(chrono::FixedOffset::east_opt(0).unwrap()))
}

fn value_info(name: &str, dims: &[i64]) -> pb::ValueInfoProto {
    pb::ValueInfoProto {
        name: name.to_string(),
        r#type: Some(pb::TypeProto {
            value: Some(pb::type_proto::Value::TensorType(pb::type_proto::Tensor {
                elem_type: pb::tensor_proto::DataType::Float as i32,
                shape: Some(pb::TensorShapeProto {
                    dim: dims
                        .iter()
                        .map(|d| Dimension {
                            value: Some(dimension::Value::DimValue(*d)),
                            ..Default::default()
                        })
                        .collect(),
                }),
            })),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn node(op_type: &str, inputs: &[&str], output: &str) -> pb::NodeProto {
    pb::NodeProto {
        input: inputs.iter().map(|i| i.to_string()).collect(),
        output: vec![output.to_string()],
        name: output.to_string(),
        op_type: op_type.to_string(),
        ..Default::default()
    }
}

/// input [1,50,50,3] -> Flatten -> MatMul [7500, outputs] -> Softmax.
/// Column 0 of the weights leans positive, every other column negative.
fn tiny_model(outputs: usize) -> InferenceModel {
    let features = INPUT_SHAPE.iter().product::<usize>();
    let weights: Vec<f32> = (0..features)
        .flat_map(|_| (0..outputs).map(|col| if col == 0 { 0.001 } else { -0.001 }))
        .collect();

    let proto = pb::ModelProto {
        ir_version: 7,
        opset_import: vec![pb::OperatorSetIdProto {
            domain: String::new(),
            version: 13,
        }],
        graph: Some(pb::GraphProto {
            name: "tiny".to_string(),
            node: vec![
                node("Flatten", &["input"], "flat"),
                node("MatMul", &["flat", "weights"], "logits"),
                node("Softmax", &["logits"], "output"),
            ],
            initializer: vec![pb::TensorProto {
                name: "weights".to_string(),
                dims: vec![features as i64, outputs as i64],
                data_type: pb::tensor_proto::DataType::Float as i32,
                float_data: weights,
                ..Default::default()
            }],
            input: vec![value_info(
                "input",
                &INPUT_SHAPE.map(|d| d as i64),
            )],
            output: vec![value_info("output", &[1, outputs as i64])],
            ..Default::default()
        }),
        ..Default::default()
    };

    tract_onnx::onnx().model_for_proto_model(&proto).unwrap()
}

fn classifier(outputs: usize) -> ImageClassifierTractOnnx {
    ImageClassifierTractOnnx::from_model(tiny_model(outputs), "tiny", INPUT_SHAPE, logger())
        .unwrap()
}

fn filled(shape: [usize; 4], value: f32) -> ImageTensor {
    ImageTensor::new(shape, vec![value; shape.iter().product()]).unwrap()
}

#[test]
fn test_missing_model_is_model_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.onnx");

    let result = ImageClassifierTractOnnx::new(&path, INPUT_SHAPE, logger());

    match result {
        Err(error) => {
            assert!(matches!(error, ClassifyError::ModelLoad { .. }));
            assert!(error.is_fatal());
        }
        Ok(_) => panic!("loading a missing model should fail"),
    }
}

#[test]
fn test_corrupt_model_is_model_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.onnx");
    std::fs::write(&path, b"definitely not protobuf \xff\xff\xff").unwrap();

    let result = ImageClassifierTractOnnx::new(&path, INPUT_SHAPE, logger());

    assert!(matches!(result, Err(ClassifyError::ModelLoad { .. })));
}

#[test]
fn test_classify_returns_two_scores() {
    let classifier = classifier(2);

    let decision = classifier.classify(&filled(INPUT_SHAPE, 0.5)).unwrap();

    assert!(decision.low_risk_score > decision.high_risk_score);
    assert!(decision.is_low_risk());
    let total = decision.low_risk_score + decision.high_risk_score;
    assert!((total - 1.0).abs() < 1e-4, "softmax scores sum to {}", total);
}

#[test]
fn test_classify_is_deterministic() {
    let classifier = classifier(2);
    let tensor = filled(INPUT_SHAPE, 0.5);

    let first = classifier.classify(&tensor).unwrap();
    let second = classifier.classify(&tensor).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_gray_tensor_is_shape_mismatch() {
    let classifier = classifier(2);

    let result = classifier.classify(&filled([1, 50, 50, 1], 0.5));

    assert_eq!(
        result,
        Err(ClassifyError::ShapeMismatch {
            expected: vec![1, 50, 50, 3],
            actual: vec![1, 50, 50, 1],
        })
    );
}

#[test]
fn test_three_scores_is_inference_error() {
    let classifier = classifier(3);

    let result = classifier.classify(&filled(INPUT_SHAPE, 0.5));

    assert!(matches!(result, Err(ClassifyError::Inference(_))));
}
