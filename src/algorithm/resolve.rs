//! Overlap resolution turning a candidate set into a flat tiling
//!
//! Two passes over the candidate list: first materialize the pairwise
//! intersections so every contested region exists as its own rectangle,
//! then discard every rectangle that still strictly overlaps something it
//! is not contained by. Survivors never overlap pairwise, though gaps
//! between them are expected and show through as border color when
//! painted.

use crate::spatial::rect::Rect;
use std::collections::HashSet;

/// Resolve candidates into a pairwise non-overlapping tiling
///
/// List order is preserved for survivors, and later becomes painting
/// order. Exact duplicates entering this pass leave it together: both
/// either survive or are discarded, since value-equal rectangles never
/// count as overlapping each other.
pub fn resolve(candidates: Vec<Rect>) -> Vec<Rect> {
    let mut pool = candidates;
    append_intersections(&mut pool);
    eliminate_overlaps(&pool)
}

/// Append each distinct non-empty pairwise intersection to the pool
///
/// Only the pairs present at entry are examined; appended intersections
/// are not re-paired against the list. One pass is enough in practice
/// because intersections of axis-aligned rectangles nest rather than
/// produce novel overlap.
fn append_intersections(pool: &mut Vec<Rect>) {
    let initial_len = pool.len();
    let mut seen: HashSet<Rect> = HashSet::new();

    for i in 0..initial_len {
        for j in (i + 1)..initial_len {
            let Some(first) = pool.get(i).copied() else {
                continue;
            };
            let Some(second) = pool.get(j).copied() else {
                continue;
            };

            let shared = first.intersect(second);
            if !shared.is_empty() && seen.insert(shared) {
                pool.push(shared);
            }
        }
    }
}

/// Keep each rectangle that overlaps nothing except its own containers
fn eliminate_overlaps(pool: &[Rect]) -> Vec<Rect> {
    pool.iter()
        .copied()
        .filter(|&rect| {
            !pool
                .iter()
                .any(|&other| rect.overlaps(other) && !other.contains(rect))
        })
        .collect()
}
