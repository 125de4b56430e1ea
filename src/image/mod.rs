//! Image loading, geometry, and saving utilities.

mod fit;
mod load;
mod save;

use std::fmt;

pub use fit::{center_offset, compose_centered, fit_within, thumbnail};
pub use load::load_image;
pub use save::{save_image, WriteMode};

/// Bounding box every normalized image is padded to.
pub const DEFAULT_TARGET_SIZE: TargetSize = TargetSize::new(256, 256);

/// Output dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for TargetSize {
    fn default() -> Self {
        DEFAULT_TARGET_SIZE
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_256_square() {
        assert_eq!(TargetSize::default(), TargetSize::new(256, 256));
    }

    #[test]
    fn test_display() {
        assert_eq!(TargetSize::new(320, 200).to_string(), "320x200");
    }
}
