//! Candidate rectangle generation through repeated random splitting
//!
//! Splitting random existing pieces rather than bisecting evenly produces
//! irregular Mondrian-style proportions; two fixed structural halves
//! guarantee large-scale asymmetry even when random splitting stays
//! shallow. The result deliberately overlaps — resolution happens later.

use crate::spatial::rect::Rect;
use crate::spatial::split::split;
use rand::{Rng, rngs::StdRng};
use std::collections::HashSet;

/// Build the overlapping candidate set for one seed rectangle
///
/// Starts from the seed alone, performs between `min_splits` and
/// `min_splits + split_spread - 1` split attempts on randomly chosen
/// existing candidates (attempts on rectangles too small for `padding` are
/// skipped, so the realized split count may be lower), then appends the
/// seed's left and right halves and deduplicates. Candidates may overlap
/// each other freely; only exact duplicates collapse.
pub fn build_candidates(
    seed: Rect,
    padding: i32,
    min_splits: usize,
    split_spread: usize,
    rng: &mut StdRng,
) -> Vec<Rect> {
    let mid_x = seed.max_x / 2;
    let left_half = Rect::new(seed.min_x, seed.min_y, mid_x, seed.max_y);
    let right_half = Rect::new(mid_x, seed.min_y, seed.max_x, seed.max_y);

    let mut candidates = vec![seed];
    let num_splits = if split_spread > 0 {
        min_splits + rng.random_range(0..split_spread)
    } else {
        min_splits
    };

    for _ in 0..num_splits {
        let index = rng.random_range(0..candidates.len());
        if let Some(victim) = candidates.get(index).copied() {
            // Too-small victims are skipped outright, not retried
            if let Ok((first, second)) = split(victim, padding, rng) {
                candidates.push(first);
                candidates.push(second);
            }
        }
    }

    candidates.push(left_half);
    candidates.push(right_half);

    dedup_candidates(candidates)
}

/// Collapse identical bounds to their first occurrence
///
/// Empty rectangles are dropped here as well: a degenerate candidate would
/// otherwise survive resolution untouched and be painted as a zero-area
/// tile.
fn dedup_candidates(candidates: Vec<Rect>) -> Vec<Rect> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(candidates.len());

    for rect in candidates {
        if !rect.is_empty() && seen.insert(rect) {
            unique.push(rect);
        }
    }

    unique
}
