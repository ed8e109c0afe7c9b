//! Painting the resolved tiling onto a bordered canvas

/// Tile fill assignment and canvas painting
pub mod compositor;
/// Source image softening for copy fills
pub mod source;
