//! Aspect-preserving thumbnail geometry and centered compositing.

use image::{imageops, imageops::FilterType, Rgba, Rgba32FImage, RgbaImage};

use super::TargetSize;

/// Compute the size of a thumbnail that fits inside `bound`.
///
/// Images already inside the box keep their size; nothing is ever upscaled.
/// Otherwise one axis is pinned to the bound and the other is rounded to
/// whichever neighbouring integer keeps the aspect ratio closest to the
/// source. Both results are at least 1.
#[must_use]
pub fn fit_within(source: (u32, u32), bound: TargetSize) -> (u32, u32) {
    let (width, height) = source;
    if width <= bound.width && height <= bound.height {
        return source;
    }

    let aspect = f64::from(width) / f64::from(height);
    let bound_w = f64::from(bound.width);
    let bound_h = f64::from(bound.height);

    if bound_w / bound_h >= aspect {
        let fitted = round_aspect(bound_h * aspect, |n| (aspect - n / bound_h).abs());
        (fitted, bound.height)
    } else {
        let fitted = round_aspect(bound_w / aspect, |n| {
            if n == 0.0 {
                0.0
            } else {
                (aspect - bound_w / n).abs()
            }
        });
        (bound.width, fitted)
    }
}

/// Pick floor or ceil of `value`, whichever scores lower; ties go to floor.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_aspect(value: f64, score: impl Fn(f64) -> f64) -> u32 {
    let (low, high) = (value.floor(), value.ceil());
    let best = if score(high) < score(low) { high } else { low };
    // Safe: value never exceeds the bounding dimension, which is a u32
    (best as u32).max(1)
}

/// Offset that centers a `thumb`-sized image on a `target`-sized canvas.
///
/// Uses floor division, so odd leftovers put the extra pixel on the
/// right/bottom side.
#[must_use]
pub const fn center_offset(target: TargetSize, thumb: (u32, u32)) -> (u32, u32) {
    (
        target.width.saturating_sub(thumb.0) / 2,
        target.height.saturating_sub(thumb.1) / 2,
    )
}

/// Shrink `img` to fit inside `bound` using Lanczos3 resampling.
///
/// Filtering runs on premultiplied alpha, so the hidden colour of fully
/// transparent pixels never bleeds into visible edges. Returns the image
/// untouched when it already fits.
#[must_use]
pub fn thumbnail(img: RgbaImage, bound: TargetSize) -> RgbaImage {
    let source = img.dimensions();
    let (width, height) = fit_within(source, bound);
    if (width, height) == source {
        return img;
    }

    tracing::debug!(
        "Resampling {}x{} -> {width}x{height}",
        source.0,
        source.1
    );
    let resized = imageops::resize(&premultiply(&img), width, height, FilterType::Lanczos3);
    unpremultiply(&resized)
}

fn premultiply(img: &RgbaImage) -> Rgba32FImage {
    Rgba32FImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0.map(|c| f32::from(c) / 255.0);
        Rgba([r * a, g * a, b * a, a])
    })
}

fn unpremultiply(img: &Rgba32FImage) -> RgbaImage {
    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        let alpha = to_channel(a);
        if alpha == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([to_channel(r / a), to_channel(g / a), to_channel(b / a), alpha])
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(value: f32) -> u8 {
    // Safe: clamped to [0, 255] before casting
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Paste `thumb` onto a fresh fully transparent canvas of exactly `target`.
///
/// The canvas starts with every pixel at `(0, 0, 0, 0)`, so a straight copy is
/// equivalent to alpha-over compositing and keeps the source pixels exact.
#[must_use]
pub fn compose_centered(thumb: &RgbaImage, target: TargetSize) -> RgbaImage {
    let mut canvas = RgbaImage::new(target.width, target.height);
    let (x, y) = center_offset(target, thumb.dimensions());

    imageops::replace(&mut canvas, thumb, i64::from(x), i64::from(y));

    canvas
}
