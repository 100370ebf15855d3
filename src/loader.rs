use crate::{ConvertError, GrayscaleImage};
use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

/// ITU-R 601-2 luma in 16.16 fixed point, rounded.
pub fn luma_from_rgb(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

/// Whether the file extension names a raster format the decoder knows.
pub fn is_supported_image<P: AsRef<Path>>(path: P) -> bool {
    ImageFormat::from_path(path).is_ok()
}

/// Reduce a decoded image to 8-bit grayscale.
///
/// Gray images keep their intensities (16-bit samples are narrowed). Color
/// images go through [`luma_from_rgb`]; alpha is dropped, not composited.
pub fn to_grayscale(image: DynamicImage) -> GrayscaleImage {
    let (width, height) = (image.width(), image.height());
    let intensities = match image {
        DynamicImage::ImageLuma8(gray) => gray.into_raw(),
        DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_) => image.to_luma8().into_raw(),
        other => other
            .to_rgb8()
            .pixels()
            .map(|p| luma_from_rgb(p[0], p[1], p[2]))
            .collect(),
    };
    GrayscaleImage {
        width,
        height,
        intensities,
    }
}

/// Decode the image at `path` into 8-bit grayscale.
///
/// The format is detected from the file contents, falling back to the
/// extension.
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<GrayscaleImage, ConvertError> {
    let path = path.as_ref();
    let decode_err = |source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?;
    let image = reader.decode().map_err(decode_err)?;

    log::debug!(
        "Decoded '{}' ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(to_grayscale(image))
}
