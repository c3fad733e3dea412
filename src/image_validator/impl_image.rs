use crate::image_validator::interface::ImageValidator;
use crate::library::logger::interface::Logger;
use image::ImageFormat;
use std::sync::Arc;

/// Sniffs the magic bytes, then decodes the whole image to verify it.
pub struct ImageValidatorImage {
    logger: Arc<dyn Logger + Send + Sync>,
    accepted_formats: Vec<ImageFormat>,
}

impl ImageValidatorImage {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("validator"),
            accepted_formats: vec![ImageFormat::Png, ImageFormat::Jpeg],
        }
    }

    fn verify(&self, bytes: &[u8]) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let format = image::guess_format(bytes)?;

        if !self.accepted_formats.contains(&format) {
            return Err(format!("Unsupported image format {:?}", format).into());
        }

        let decoded = image::load_from_memory_with_format(bytes, format)?;

        if decoded.width() == 0 || decoded.height() == 0 {
            return Err("Image has no pixels".into());
        }

        Ok(())
    }
}

impl ImageValidator for ImageValidatorImage {
    fn validate(&self, bytes: &[u8]) -> bool {
        match self.verify(bytes) {
            Ok(()) => true,
            Err(e) => {
                let _ = self.logger.info(&format!("Rejected upload: {}", e));
                false
            }
        }
    }
}
