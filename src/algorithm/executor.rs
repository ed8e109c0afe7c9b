//! Filter orchestration from decoded source to painted composition
//!
//! One filter owns the one random source for its lifetime; every
//! randomized decision in a pass, from split counts through fill choices,
//! draws from it in sequence. Two passes with the same seed and source
//! therefore paint identical canvases, and a batch run advances one
//! generator across all its files.

use crate::algorithm::partition::build_candidates;
use crate::algorithm::resolve::resolve;
use crate::io::configuration::{
    BLUR_SIGMA, MIN_SPLIT_COUNT, RESIZE_FACTOR, SPLIT_COUNT_SPREAD, SPLIT_PADDING, TILE_INSET,
};
use crate::io::error::Result;
use crate::io::image::{decode_bytes, encode_png};
use crate::render::compositor::{assign_fills, paint};
use crate::render::source::soften;
use crate::spatial::rect::Rect;
use image::RgbaImage;
use rand::{SeedableRng, rngs::StdRng};

/// Filter parameters controlling partition granularity and painting
#[derive(Clone, Copy, Debug)]
pub struct FilterConfig {
    /// Minimum distance from a rectangle edge at which a cut may land
    pub split_padding: i32,
    /// Lower bound for the number of split attempts per pass
    pub min_split_count: usize,
    /// Size of the uniform range added to the minimum split count
    pub split_count_spread: usize,
    /// Units shaved from every tile side so the border shows through
    pub tile_inset: i32,
    /// Gaussian blur strength applied to the softened source
    pub blur_sigma: f32,
    /// Downscale factor for the pre-blur resize pass
    pub resize_factor: u32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            split_padding: SPLIT_PADDING,
            min_split_count: MIN_SPLIT_COUNT,
            split_count_spread: SPLIT_COUNT_SPREAD,
            tile_inset: TILE_INSET,
            blur_sigma: BLUR_SIGMA,
            resize_factor: RESIZE_FACTOR,
        }
    }
}

/// Output of one filter pass
pub struct Composition {
    /// The painted canvas, same dimensions as the source
    pub canvas: RgbaImage,
    /// Number of tiles painted over the border background
    pub tile_count: usize,
}

/// Single-pass Mondrian filter with an owned random source
pub struct MondrianFilter {
    config: FilterConfig,
    rng: StdRng,
}

impl MondrianFilter {
    /// Create a filter with default parameters and an explicit seed
    pub fn new(seed: u64) -> Self {
        Self::with_config(FilterConfig::default(), seed)
    }

    /// Create a filter with explicit parameters and an explicit seed
    pub fn with_config(config: FilterConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Access the active configuration
    pub const fn config(&self) -> FilterConfig {
        self.config
    }

    /// Run one filter pass over a decoded source image
    ///
    /// Softens the source, carves its bounds into candidate rectangles,
    /// resolves them into a tiling, and paints the tiling over a
    /// border-colored canvas of the source's dimensions. Geometry is total
    /// and painting clamps to the canvas, so this stage cannot fail;
    /// malformed input is rejected earlier, at decode time.
    pub fn apply(&mut self, source: &RgbaImage) -> Composition {
        let (width, height) = source.dimensions();
        let softened = soften(source, self.config.resize_factor, self.config.blur_sigma);

        let bounds = Rect::from_dimensions(width, height);
        let candidates = build_candidates(
            bounds,
            self.config.split_padding,
            self.config.min_split_count,
            self.config.split_count_spread,
            &mut self.rng,
        );
        let tiling = resolve(candidates);
        let tile_count = tiling.len();

        let tiles = assign_fills(&tiling, &mut self.rng);
        let canvas = paint(&tiles, &softened, self.config.tile_inset);

        Composition { canvas, tile_count }
    }

    /// Run one filter pass over a complete encoded byte stream
    ///
    /// The input must hold an entire encoded image; the output is a
    /// complete PNG byte stream of identical dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if the input bytes cannot be decoded as an image
    /// or the painted canvas cannot be encoded.
    pub fn apply_bytes(&mut self, bytes: &[u8]) -> Result<Vec<u8>> {
        let source = decode_bytes(bytes)?.to_rgba8();
        let composition = self.apply(&source);
        encode_png(&composition.canvas)
    }
}
