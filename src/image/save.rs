//! Image saving utilities.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageResult, RgbaImage};

use crate::error::{Error, Result};

/// How encoded bytes replace the original file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Overwrite the original path directly. An interrupted write can leave
    /// a truncated file behind.
    #[default]
    InPlace,
    /// Write a sibling `<name>.tmp` file, then rename it over the original.
    Atomic,
}

/// Encode `img` as an optimized PNG and write it to `path`.
///
/// Encoding happens entirely in memory first, so an encoder failure never
/// touches the file on disk.
///
/// # Errors
///
/// Returns an error if encoding fails or the bytes cannot be written.
pub fn save_image<P: AsRef<Path>>(img: &RgbaImage, path: P, mode: WriteMode) -> Result<()> {
    let path = path.as_ref();

    let bytes = encode_png(img).map_err(|source| Error::ImageSave {
        path: path.to_path_buf(),
        source,
    })?;

    match mode {
        WriteMode::InPlace => write_bytes(path, &bytes),
        WriteMode::Atomic => {
            let temp_path = temp_path_for(path);
            write_bytes(&temp_path, &bytes)?;

            fs::rename(&temp_path, path).map_err(|source| {
                let _ = fs::remove_file(&temp_path);
                Error::Write {
                    path: path.to_path_buf(),
                    source,
                }
            })
        }
    }
}

/// Encode with the slowest, smallest zlib setting and per-row adaptive filters.
fn encode_png(img: &RgbaImage) -> ImageResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, FilterType::Adaptive);
    img.write_with_encoder(encoder)?;
    Ok(buffer)
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pngfit-save-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_encoded_bytes_are_png() {
        let img = RgbaImage::from_pixel(16, 8, Rgba([1, 2, 3, 0]));
        let bytes = encode_png(&img).unwrap();

        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let temp = temp_path_for(Path::new("/some/dir/Logo.PNG"));
        assert_eq!(temp, PathBuf::from("/some/dir/Logo.PNG.tmp"));
    }

    #[test]
    fn test_in_place_overwrites() {
        let dir = scratch_dir("in-place");
        let path = dir.join("a.png");
        fs::write(&path, b"old contents").unwrap();

        let img = RgbaImage::new(4, 4);
        save_image(&img, &path, WriteMode::InPlace).unwrap();

        assert_eq!(image::open(&path).unwrap().to_rgba8().dimensions(), (4, 4));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_atomic_leaves_no_temp_file() {
        let dir = scratch_dir("atomic");
        let path = dir.join("b.png");
        fs::write(&path, b"old contents").unwrap();

        let img = RgbaImage::new(4, 4);
        save_image(&img, &path, WriteMode::Atomic).unwrap();

        assert!(!temp_path_for(&path).exists());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);
        assert_eq!(image::open(&path).unwrap().to_rgba8().dimensions(), (4, 4));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = scratch_dir("missing");
        let path = dir.join("nope").join("c.png");

        let err = save_image(&RgbaImage::new(1, 1), &path, WriteMode::InPlace).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
        fs::remove_dir_all(&dir).unwrap();
    }
}
