//! Common test utilities and assertion helpers.
//!
//! Builders for item lists and checks for the placement invariants
//! (no overlap, frames inside the cross-axis bound, occupancy matches frames).
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::collections::HashSet;

use quilt_layout::layout::PlacedFrame;
use quilt_layout::{Direction, GridCell, ItemList, ItemMetadata};

/// Item list from (width, height) footprints.
pub fn items(footprints: &[(i32, i32)]) -> ItemList {
    footprints
        .iter()
        .map(|&(w, h)| ItemMetadata::new(w, h))
        .collect()
}

/// Deterministic pseudo-random footprints (xorshift) in `1..=max_side`.
pub fn scrambled_items(count: usize, max_side: i32, seed: u32) -> ItemList {
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        i32::try_from(state % 1000).unwrap()
    };
    (0..count)
        .map(|_| {
            let w = next() % max_side + 1;
            let h = next() % max_side + 1;
            ItemMetadata::new(w, h)
        })
        .collect()
}

/// A 16-column dashboard of mixed widgets.
pub fn widget_items() -> ItemList {
    items(&[
        (8, 4),
        (4, 4),
        (4, 2),
        (2, 2),
        (2, 2),
        (4, 1),
        (4, 1),
        (2, 4),
        (4, 4),
        (2, 4),
    ])
}

/// (column, row) origins of each frame.
pub fn origins(frames: &[PlacedFrame]) -> Vec<(u32, u32)> {
    frames.iter().map(|f| (f.cell.column, f.cell.row)).collect()
}

/// Panics if any two frames share a block; returns the union of covered blocks.
pub fn assert_no_overlap(frames: &[PlacedFrame]) -> HashSet<GridCell> {
    let mut seen = HashSet::new();
    for placed in frames {
        for cell in placed.cells() {
            assert!(
                seen.insert(cell),
                "item {} overlaps block ({}, {})",
                placed.index,
                cell.column,
                cell.row
            );
        }
    }
    seen
}

/// Panics if any frame extends past the cross-axis bound.
pub fn assert_within_bound(frames: &[PlacedFrame], direction: Direction, bound: u32) {
    for placed in frames {
        let (start, span) = match direction {
            Direction::Vertical => (placed.cell.column, placed.span.columns),
            Direction::Horizontal => (placed.cell.row, placed.span.rows),
        };
        assert!(
            start + span <= bound,
            "item {} spans {}..{} across a bound of {}",
            placed.index,
            start,
            start + span,
            bound
        );
    }
}
