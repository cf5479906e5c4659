//! Image preprocessing for NSFW classification.
//!
//! The model is a MobileNetV2 export with a fixed 224x224 NHWC input.
//! Preprocessing stretches the image to the target size (no letterboxing,
//! matching the original detector's loader) and normalizes pixels to [0, 1].

use std::path::Path;

use image::{imageops::FilterType, DynamicImage};
use ndarray::Array4;

use crate::error::Result;

/// Model input size as (height, width).
pub const INPUT_SIZE: (usize, usize) = (224, 224);

/// Open `path` as an image and discard the decoded handle.
///
/// This is the cheap sanity pass performed before the model is loaded, so
/// that an unreadable file fails fast without paying the model-load cost.
///
/// # Errors
///
/// Returns an error if the file cannot be decoded as an image.
pub fn check_image<P: AsRef<Path>>(path: P) -> Result<()> {
    let _ = image::open(path)?;
    Ok(())
}

/// Convert an image into the model's NHWC input tensor.
///
/// The image is stretched to `target_size` with bilinear filtering and
/// normalized to [0, 1].
///
/// # Arguments
///
/// * `image` - Input image.
/// * `target_size` - Target size as (height, width).
///
/// # Returns
///
/// A `[1, height, width, 3]` f32 tensor.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn image_to_tensor(image: &DynamicImage, target_size: (usize, usize)) -> Array4<f32> {
    let (height, width) = target_size;
    let resized = image
        .resize_exact(width as u32, height as u32, FilterType::Triangle)
        .to_rgb8();

    Array4::from_shape_fn((1, height, width, 3), |(_, y, x, c)| {
        f32::from(resized[(x as u32, y as u32)][c]) / 255.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn solid_image(width: u32, height: u32, rgb: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, image::Rgb(rgb)))
    }

    #[test]
    fn test_tensor_shape_is_nhwc() {
        let img = solid_image(64, 48, [10, 20, 30]);
        let tensor = image_to_tensor(&img, INPUT_SIZE);
        assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
    }

    #[test]
    fn test_tensor_values_normalized() {
        let img = solid_image(32, 32, [255, 0, 128]);
        let tensor = image_to_tensor(&img, (8, 8));

        assert!((tensor[[0, 4, 4, 0]] - 1.0).abs() < 1e-6);
        assert!(tensor[[0, 4, 4, 1]].abs() < 1e-6);
        assert!((tensor[[0, 4, 4, 2]] - 128.0 / 255.0).abs() < 1e-2);
    }

    #[test]
    fn test_non_square_input_is_stretched() {
        // A wide image still fills the full square tensor.
        let img = solid_image(200, 50, [100, 100, 100]);
        let tensor = image_to_tensor(&img, INPUT_SIZE);

        let expected = 100.0 / 255.0;
        assert!((tensor[[0, 0, 0, 0]] - expected).abs() < 1e-2);
        assert!((tensor[[0, 223, 223, 0]] - expected).abs() < 1e-2);
    }

    #[test]
    fn test_check_image_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_an_image.jpg");
        std::fs::write(&path, b"plain text, not an image").unwrap();

        assert!(check_image(&path).is_err());
    }

    #[test]
    fn test_check_image_accepts_valid_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("valid.png");
        solid_image(4, 4, [1, 2, 3]).save(&path).unwrap();

        assert!(check_image(&path).is_ok());
    }
}
