//! Mondrian-style image filter built on randomized rectangle partitioning
//!
//! The filter softens a source image, carves its bounds into a randomized
//! set of overlapping rectangles, resolves that set into a flat tiling,
//! and paints each tile with a solid color or a patch of the softened
//! source over a black border.

#![forbid(unsafe_code)]

/// Core partitioning algorithm including candidate generation, overlap resolution, and orchestration
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Tile fill assignment, canvas painting, and source softening
pub mod render;
/// Rectangle primitives and randomized splitting
pub mod spatial;

pub use io::error::{FilterError, Result};
