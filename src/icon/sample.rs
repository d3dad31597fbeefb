use crate::error::{Error, Result};
use crate::model::Rgb;
use image::{DynamicImage, GenericImageView, ImageError, ImageReader};
use std::path::Path;
use tracing::debug;

pub(crate) fn sample_pixel(path: &Path, x: u32, y: u32) -> Result<Rgb> {
    let image = open_image(path)?;

    let (width, height) = image.dimensions();
    if x >= width || y >= height {
        return Err(Error::OutOfBounds {
            x,
            y,
            width,
            height,
        });
    }

    // get_pixel converts any color type down to 8-bit RGBA
    let rgb = Rgb::from(image.get_pixel(x, y));
    debug!(path = %path.display(), x, y, color = %rgb, "sampled pixel");
    Ok(rgb)
}

/// Format is sniffed from the file content, not the extension.
fn open_image(path: &Path) -> Result<DynamicImage> {
    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(ImageError::from)
        .and_then(|reader| reader.decode())
        .map_err(|source| Error::Image {
            path: path.to_path_buf(),
            source,
        })
}
