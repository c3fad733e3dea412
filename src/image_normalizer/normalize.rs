use crate::error::ClassifyError;
use crate::image_normalizer::tensor::ImageTensor;
use image::{imageops::FilterType, DynamicImage};

/// Decodes `bytes`, resizes to `width` x `height` and scales intensities to [0, 1].
///
/// The channel count of the decoded image is kept as is (gray stays 1, RGBA
/// stays 4); the classifier rejects shapes it was not built for. Images with
/// more than 8 bits per channel are reduced to 8 bits first.
pub fn normalize(bytes: &[u8], width: u32, height: u32) -> Result<ImageTensor, ClassifyError> {
    let image =
        image::load_from_memory(bytes).map_err(|e| ClassifyError::Decode(e.to_string()))?;

    image_to_tensor(&image, width, height)
}

pub fn image_to_tensor(
    image: &DynamicImage,
    width: u32,
    height: u32,
) -> Result<ImageTensor, ClassifyError> {
    let image = to_8bit(image);
    let resized = image.resize_exact(width, height, FilterType::CatmullRom);
    let channels = resized.color().channel_count() as usize;

    let data: Vec<f32> = resized
        .as_bytes()
        .iter()
        .map(|&value| value as f32 / 255.0)
        .collect();

    tensor_from_pixels([1, height as usize, width as usize, channels], data)
}

pub fn tensor_from_pixels(
    shape: [usize; 4],
    data: Vec<f32>,
) -> Result<ImageTensor, ClassifyError> {
    let len = data.len();

    ImageTensor::new(shape, data).ok_or_else(|| {
        ClassifyError::Inference(format!(
            "Pixel buffer of {} values does not fill shape {:?}",
            len, shape
        ))
    })
}

fn to_8bit(image: &DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageRgb8(_)
        | DynamicImage::ImageRgba8(_) => image.clone(),
        DynamicImage::ImageLuma16(_) => DynamicImage::ImageLuma8(image.to_luma8()),
        DynamicImage::ImageLumaA16(_) => DynamicImage::ImageLumaA8(image.to_luma_alpha8()),
        DynamicImage::ImageRgb16(_) | DynamicImage::ImageRgb32F(_) => {
            DynamicImage::ImageRgb8(image.to_rgb8())
        }
        _ => DynamicImage::ImageRgba8(image.to_rgba8()),
    }
}
