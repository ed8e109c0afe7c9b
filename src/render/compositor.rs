//! Tile fill assignment and canvas painting
//!
//! The canvas starts fully border colored; tiles are painted over it in
//! list order, each inside an inset copy of its region. Unpainted area,
//! whether a coverage gap or the inset margin around a tile, stays border
//! colored and reads as the black grout lines of the composition.

use crate::spatial::rect::Rect;
use image::{Rgba, RgbaImage};
use rand::{Rng, rngs::StdRng};

/// Border color showing through between painted tiles
pub const BORDER_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
/// Solid red tile fill
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
/// Solid blue tile fill
pub const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
/// Solid yellow tile fill
pub const YELLOW: Rgba<u8> = Rgba([255, 255, 0, 255]);
/// Solid white tile fill
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Fill painted into one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Solid red
    Red,
    /// Solid blue
    Blue,
    /// Solid yellow
    Yellow,
    /// Solid white
    White,
    /// The softened source image, sampled at the tile's own coordinates
    Copy,
}

impl Fill {
    /// Draw a fill with the mostly-white, occasionally-primary weighting
    ///
    /// Three in four draws take the plain branch, which yields white three
    /// times out of four and a source copy otherwise. The remaining draws
    /// pick uniformly from the four solid colors; copies never appear on
    /// that branch.
    pub fn sample(rng: &mut StdRng) -> Self {
        if rng.random_range(0..4) == 0 {
            match rng.random_range(0..4) {
                0 => Self::Red,
                1 => Self::Blue,
                2 => Self::Yellow,
                _ => Self::White,
            }
        } else if rng.random_range(0..4) == 0 {
            Self::Copy
        } else {
            Self::White
        }
    }

    /// The solid color for this fill, or `None` for source copies
    pub const fn solid_color(self) -> Option<Rgba<u8>> {
        match self {
            Self::Red => Some(RED),
            Self::Blue => Some(BLUE),
            Self::Yellow => Some(YELLOW),
            Self::White => Some(WHITE),
            Self::Copy => None,
        }
    }
}

/// A resolved rectangle paired with the fill it will be painted with
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    /// Region the tile covers, before insetting
    pub region: Rect,
    /// Fill painted into the inset region
    pub fill: Fill,
}

/// Pair every tiling rectangle with a freshly drawn fill
///
/// Tiles keep the resolver's output order, which is also painting order.
pub fn assign_fills(tiling: &[Rect], rng: &mut StdRng) -> Vec<Tile> {
    tiling
        .iter()
        .map(|&region| Tile {
            region,
            fill: Fill::sample(rng),
        })
        .collect()
}

/// Paint tiles over a border-colored canvas of the source's dimensions
///
/// Each tile's region is inset by `inset` on every side and clamped to
/// the canvas before painting; regions that collapse under the inset
/// paint nothing. Pixels are overwritten outright, so a duplicate tile
/// repaints the same area with its own fill and the last one wins.
pub fn paint(tiles: &[Tile], source: &RgbaImage, inset: i32) -> RgbaImage {
    let (width, height) = source.dimensions();
    let mut canvas = RgbaImage::from_pixel(width, height, BORDER_COLOR);
    let canvas_rect = Rect::from_dimensions(width, height);

    for tile in tiles {
        let region = tile.region.inset(inset).intersect(canvas_rect);
        if region.is_empty() {
            continue;
        }

        for y in region.min_y..region.max_y {
            for x in region.min_x..region.max_x {
                let pixel = tile
                    .fill
                    .solid_color()
                    .unwrap_or_else(|| *source.get_pixel(x as u32, y as u32));
                canvas.put_pixel(x as u32, y as u32, pixel);
            }
        }
    }

    canvas
}
