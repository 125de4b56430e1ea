//! Image loading utilities.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{DynamicImage, ImageError, ImageFormat, ImageReader, RgbaImage};

use crate::error::{Error, Result};

/// Load a PNG from disk as an 8-bit RGBA buffer.
///
/// The format is sniffed from the file header and falls back to PNG when the
/// header is not recognized. Content in another format fails as
/// [`ImageError::Unsupported`], since only the PNG codec is built in.
///
/// Every source layout (gray, gray+alpha, RGB, 16-bit, palette) is converted;
/// sources without an alpha channel become fully opaque.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a decodable PNG.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source: ImageError::IoError(source),
    })?;

    let load_error = |source: ImageError| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ImageReader::new(BufReader::new(file));
    reader.set_format(ImageFormat::Png);
    let img = reader
        .with_guessed_format()
        .map_err(|source| load_error(ImageError::IoError(source)))?
        .decode()
        .map_err(load_error)?;

    Ok(into_rgba(img))
}

fn into_rgba(img: DynamicImage) -> RgbaImage {
    match img {
        DynamicImage::ImageRgba8(rgba) => rgba,
        other => other.to_rgba8(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba};

    #[test]
    fn test_rgb_gets_opaque_alpha() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 2, Rgb([9, 8, 7])));
        let rgba = into_rgba(img);

        assert_eq!(rgba.dimensions(), (3, 2));
        assert!(rgba.pixels().all(|p| *p == Rgba([9, 8, 7, 255])));
    }

    #[test]
    fn test_gray_expands_to_rgba() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(1, 1, Luma([42])));
        assert_eq!(*into_rgba(img).get_pixel(0, 0), Rgba([42, 42, 42, 255]));
    }

    #[test]
    fn test_foreign_format_behind_png_name_is_unsupported() {
        let path = std::env::temp_dir().join(format!("pngfit-load-jpeg-{}.png", std::process::id()));
        std::fs::write(&path, b"\xFF\xD8\xFF\xE0\x00\x10JFIF\x00\x01").unwrap();

        let err = load_image(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            err,
            Error::ImageLoad {
                source: ImageError::Unsupported(_),
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = load_image("definitely/not/here.png").unwrap_err();
        assert!(matches!(err, Error::ImageLoad { .. }));
    }
}
