//! Spatial primitives shared by partition building and overlap resolution
//!
//! This module contains the rectangle-level functionality:
//! - The integer-bound rectangle value type and its predicates
//! - Randomized splitting of a rectangle into two exact pieces

/// Axis-aligned rectangle type and geometric predicates
pub mod rect;
/// Random rectangle splitting with padding constraints
pub mod split;

pub use rect::Rect;
