//! Source image softening for copy fills

use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Blur a source image by resampling through a reduced resolution
///
/// Downscales by `factor` with nearest-neighbor sampling, applies a
/// Gaussian blur of `sigma` at the reduced size, and scales back up to
/// the original dimensions with linear resampling. Running the blur on
/// the reduced image keeps its cost independent of source resolution
/// while the lossy round trip contributes most of the softening. The
/// reduced image is clamped to at least one pixel per side so small
/// sources survive.
pub fn soften(source: &RgbaImage, factor: u32, sigma: f32) -> RgbaImage {
    let (width, height) = source.dimensions();
    let factor = factor.max(1);

    let reduced = imageops::resize(
        source,
        (width / factor).max(1),
        (height / factor).max(1),
        FilterType::Nearest,
    );
    let blurred = imageops::blur(&reduced, sigma);

    imageops::resize(&blurred, width, height, FilterType::Triangle)
}

#[cfg(test)]
mod tests {
    use super::soften;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_soften_preserves_dimensions() {
        let source = RgbaImage::from_pixel(64, 48, Rgba([120, 40, 200, 255]));

        let softened = soften(&source, 4, 2.0);

        assert_eq!(softened.dimensions(), (64, 48));
    }

    #[test]
    fn test_soften_keeps_uniform_images_near_uniform() {
        // Resampling a constant image reproduces it up to rounding
        let color = Rgba([17, 170, 68, 255]);
        let source = RgbaImage::from_pixel(32, 32, color);

        let softened = soften(&source, 4, 2.0);

        for pixel in softened.pixels() {
            for (&expected, &actual) in color.0.iter().zip(pixel.0.iter()) {
                assert!((i16::from(expected) - i16::from(actual)).abs() <= 1);
            }
        }
    }

    #[test]
    fn test_soften_survives_sources_smaller_than_the_factor() {
        let source = RgbaImage::from_pixel(2, 3, Rgba([255, 255, 255, 255]));

        let softened = soften(&source, 4, 2.0);

        assert_eq!(softened.dimensions(), (2, 3));
    }

    #[test]
    fn test_zero_factor_is_clamped() {
        let source = RgbaImage::from_pixel(16, 16, Rgba([0, 0, 0, 255]));

        let softened = soften(&source, 0, 2.0);

        assert_eq!(softened.dimensions(), (16, 16));
    }
}
