//! Filter constants and output naming defaults

// Partition geometry
/// Minimum distance from a rectangle edge at which a cut may land
pub const SPLIT_PADDING: i32 = 100;
/// Lower bound for the number of split attempts per pass
pub const MIN_SPLIT_COUNT: usize = 15;
/// Size of the uniform range added to the minimum split count
pub const SPLIT_COUNT_SPREAD: usize = 30;

// Painting
/// Units shaved from every tile side so the border shows through
pub const TILE_INSET: i32 = 2;

// Source softening
/// Gaussian blur strength for the softened source
pub const BLUR_SIGMA: f32 = 2.0;
/// Downscale factor for the pre-blur resize pass
pub const RESIZE_FACTOR: u32 = 4;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mondrian";
