use crate::image_validator::{impl_image::ImageValidatorImage, interface::ImageValidator};
use crate::library::logger::impl_console::LoggerConsole;
use crate::library::test_images;
use image::ImageFormat;
use std::sync::Arc;

fn validator() -> ImageValidatorImage {
    let logger = Arc::new(LoggerConsole::new(chrono::FixedOffset::east_opt(0).unwrap()));
    ImageValidatorImage::new(logger)
}

#[test]
fn test_accepts_jpeg_and_png() {
    let validator = validator();

    assert!(validator.validate(&test_images::rgb_jpeg(200, 200)));
    assert!(validator.validate(&test_images::rgb_png(31, 17)));
    assert!(validator.validate(&test_images::encode(
        &test_images::rgba(8, 8, [1, 2, 3, 4]),
        ImageFormat::Png
    )));
}

#[test]
fn test_rejects_text_renamed_as_png() {
    let validator = validator();

    assert!(!validator.validate(b"this is a plain text file, not a picture\n"));
}

#[test]
fn test_rejects_empty_input() {
    assert!(!validator().validate(&[]));
}

#[test]
fn test_rejects_truncated_png() {
    let bytes = test_images::rgb_png(64, 64);
    let truncated = &bytes[..bytes.len() / 2];

    assert!(!validator().validate(truncated));
}

#[test]
fn test_rejects_png_signature_with_garbage_body() {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(&[0u8; 64]);

    assert!(!validator().validate(&bytes));
}
