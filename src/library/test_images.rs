use image::{DynamicImage, ImageBuffer, ImageFormat, Luma, LumaA, Rgb, Rgba};
use std::io::Cursor;

pub fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, format).unwrap();
    bytes.into_inner()
}

pub fn rgb(width: u32, height: u32, pixel: [u8; 3]) -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_pixel(width, height, Rgb(pixel)))
}

pub fn rgba(width: u32, height: u32, pixel: [u8; 4]) -> DynamicImage {
    DynamicImage::ImageRgba8(ImageBuffer::from_pixel(width, height, Rgba(pixel)))
}

pub fn gray(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(ImageBuffer::from_pixel(width, height, Luma([value])))
}

pub fn gray_alpha(width: u32, height: u32, value: u8, alpha: u8) -> DynamicImage {
    DynamicImage::ImageLumaA8(ImageBuffer::from_pixel(width, height, LumaA([value, alpha])))
}

pub fn gradient_rgb(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }))
}

pub fn rgb_jpeg(width: u32, height: u32) -> Vec<u8> {
    encode(&gradient_rgb(width, height), ImageFormat::Jpeg)
}

pub fn rgb_png(width: u32, height: u32) -> Vec<u8> {
    encode(&gradient_rgb(width, height), ImageFormat::Png)
}
