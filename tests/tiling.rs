//! Validates partition construction and overlap resolution over full canvases

use mondrify::algorithm::{partition::build_candidates, resolve::resolve};
use mondrify::spatial::Rect;
use rand::{SeedableRng, rngs::StdRng};
use std::collections::HashSet;

const PADDING: i32 = 100;
const MIN_SPLITS: usize = 15;
const SPLIT_SPREAD: usize = 30;

#[test]
fn test_candidates_include_canvas_and_structural_halves() {
    let bounds = Rect::from_dimensions(400, 400);
    let mut rng = StdRng::seed_from_u64(1);

    let candidates = build_candidates(bounds, PADDING, MIN_SPLITS, SPLIT_SPREAD, &mut rng);

    assert!(candidates.contains(&bounds));
    assert!(candidates.contains(&Rect::new(0, 0, 200, 400)));
    assert!(candidates.contains(&Rect::new(200, 0, 400, 400)));
}

#[test]
fn test_resolved_tiling_never_overlaps_across_seeds() {
    let bounds = Rect::from_dimensions(1920, 1080);

    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let candidates = build_candidates(bounds, PADDING, MIN_SPLITS, SPLIT_SPREAD, &mut rng);
        let tiling = resolve(candidates);

        assert!(!tiling.is_empty(), "seed {seed} produced an empty tiling");

        for (i, &first) in tiling.iter().enumerate() {
            for &second in tiling.iter().skip(i + 1) {
                assert!(
                    !first.overlaps(second),
                    "seed {seed}: {first:?} overlaps {second:?} in resolved tiling"
                );
            }
        }
    }
}

#[test]
fn test_resolved_tiling_stays_inside_the_canvas() {
    let bounds = Rect::from_dimensions(1280, 960);

    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        let candidates = build_candidates(bounds, PADDING, MIN_SPLITS, SPLIT_SPREAD, &mut rng);
        let tiling = resolve(candidates);

        for &tile in &tiling {
            assert!(bounds.contains(tile), "seed {seed}: {tile:?} escapes canvas");
            assert!(!tile.is_empty(), "seed {seed}: {tile:?} is degenerate");
        }
    }
}

#[test]
fn test_tiling_members_trace_back_to_candidates() {
    // Every surviving rectangle is either a candidate or the intersection
    // of two candidates; resolution invents no other geometry
    let bounds = Rect::from_dimensions(1280, 960);
    let mut rng = StdRng::seed_from_u64(21);

    let candidates = build_candidates(bounds, PADDING, MIN_SPLITS, SPLIT_SPREAD, &mut rng);
    let tiling = resolve(candidates.clone());

    for &tile in &tiling {
        let direct = candidates.contains(&tile);
        let derived = candidates.iter().enumerate().any(|(i, &first)| {
            candidates
                .iter()
                .skip(i + 1)
                .any(|&second| first.intersect(second) == tile)
        });

        assert!(direct || derived, "{tile:?} has no candidate origin");
    }
}

#[test]
fn test_resolution_preserves_its_own_output_as_a_set() {
    // Survivors of one pass neither eliminate each other nor produce new
    // distinct geometry on a second pass
    let bounds = Rect::from_dimensions(1600, 1200);
    let mut rng = StdRng::seed_from_u64(33);

    let candidates = build_candidates(bounds, PADDING, MIN_SPLITS, SPLIT_SPREAD, &mut rng);
    let tiling = resolve(candidates);
    let reresolved = resolve(tiling.clone());

    let first_pass: HashSet<Rect> = tiling.into_iter().collect();
    let second_pass: HashSet<Rect> = reresolved.into_iter().collect();

    assert_eq!(first_pass, second_pass);
}

#[test]
fn test_small_canvas_survives_the_pipeline() {
    // Splits cannot land at all below the padding threshold; the halves
    // still partition the canvas
    let bounds = Rect::from_dimensions(120, 90);
    let mut rng = StdRng::seed_from_u64(4);

    let candidates = build_candidates(bounds, PADDING, MIN_SPLITS, SPLIT_SPREAD, &mut rng);
    let tiling = resolve(candidates);

    let halves = [Rect::new(0, 0, 60, 90), Rect::new(60, 0, 120, 90)];
    for half in halves {
        assert!(tiling.contains(&half));
    }
    assert!(!tiling.contains(&bounds));
}
