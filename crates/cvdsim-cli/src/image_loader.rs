//! PNG loading and saving as tightly packed RGBA8.

use std::path::Path;

use image::RgbaImage;

/// Load an image from disk and convert it to 8-bit RGBA.
///
/// Grayscale, RGB and 16-bit sources are converted; the sRGB encoding of the
/// stored values is taken as is.
pub fn load_rgba8(path: &Path) -> Result<RgbaImage, ImageLoadError> {
    let img = image::open(path).map_err(ImageLoadError::Decode)?;
    Ok(img.to_rgba8())
}

/// Write an RGBA8 image. The format follows the file extension.
pub fn save_rgba8(path: &Path, image: &RgbaImage) -> Result<(), ImageLoadError> {
    image.save(path).map_err(ImageLoadError::Encode)
}

/// Errors that can occur during image loading and saving.
#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
}
