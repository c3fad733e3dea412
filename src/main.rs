use config::Config;
use image_classifier::impl_fake::ImageClassifierFake;
use image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use image_classifier::interface::ImageClassifier;
use image_validator::impl_image::ImageValidatorImage;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use session::main::Session;
use std::sync::Arc;

mod config;
mod error;
mod image_classifier;
mod image_normalizer;
mod image_validator;
mod library;
mod prediction_ledger;
mod session;
mod shell;
mod upload;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let use_fake_classifier = args.iter().any(|arg| arg == "--fake");

    let mut config = Config::default();
    if let Some(model_path) = args.iter().find(|arg| !arg.starts_with("--")) {
        config = config.with_model_path(model_path);
    }

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let image_classifier: Arc<dyn ImageClassifier + Send + Sync> = if use_fake_classifier {
        Arc::new(ImageClassifierFake::new(logger.clone(), config.input_shape()))
    } else {
        match ImageClassifierTractOnnx::new(&config.model_path, config.input_shape(), logger.clone())
        {
            Ok(classifier) => Arc::new(classifier),
            Err(e) => {
                let _ = logger.error(&e.to_string());
                return Err(e.into());
            }
        }
    };

    let image_validator = Arc::new(ImageValidatorImage::new(logger.clone()));

    let session = Session::new(
        config.clone(),
        logger.clone(),
        image_validator,
        image_classifier,
    );

    shell::impl_gui::run(config, logger, session)
}
