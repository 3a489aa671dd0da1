//! Placement tests for quilt-layout
//!
//! First-fit ordering, gap filling, clamping and the overlap invariants,
//! exercised through the engine and occupancy tracker directly.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use std::collections::HashSet;

use common::{assert_no_overlap, assert_within_bound, items, origins, scrambled_items, widget_items};
use quilt_layout::layout::{PlacedFrame, PlacementEngine};
use quilt_layout::{Direction, GridCell, ItemList, ItemSource, Size};
use test_case::test_case;

fn place_all(
    list: &ItemList,
    direction: Direction,
    bound: u32,
) -> (PlacementEngine, Vec<PlacedFrame>) {
    let mut engine = PlacementEngine::new(direction, Size::new(100.0, 100.0), bound);
    let frames = (0..list.item_count())
        .map(|i| engine.place(i, &list.metadata_for_item(i)))
        .collect();
    (engine, frames)
}

#[test]
fn test_five_unit_items_in_three_columns() {
    let (_, frames) = place_all(&ItemList::uniform(5), Direction::Vertical, 3);
    assert_eq!(origins(&frames), vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1)]);
}

#[test]
fn test_unit_item_takes_gap_next_to_wide_item() {
    let (_, frames) = place_all(&items(&[(2, 1), (1, 1)]), Direction::Vertical, 3);
    assert_eq!(origins(&frames), vec![(0, 0), (2, 0)]);
}

#[test]
fn test_later_small_items_backfill_earlier_gaps() {
    // 2x2, then a 2x1 that cannot fit beside it, then 1x1s that can
    let (_, frames) = place_all(&items(&[(2, 2), (2, 1), (1, 1), (1, 1)]), Direction::Vertical, 3);
    assert_eq!(origins(&frames), vec![(0, 0), (0, 2), (2, 0), (2, 1)]);
}

#[test]
fn test_widget_dashboard_sixteen_columns() {
    let (engine, frames) = place_all(&widget_items(), Direction::Vertical, 16);
    assert_eq!(
        origins(&frames),
        vec![
            (0, 0),
            (8, 0),
            (12, 0),
            (12, 2),
            (14, 2),
            (0, 4),
            (4, 4),
            (8, 4),
            (10, 4),
            (14, 4),
        ]
    );
    assert_eq!(engine.content_extent(), 800.0);
    assert_no_overlap(&frames);
}

#[test]
fn test_horizontal_scan_goes_down_columns() {
    let (_, frames) = place_all(&items(&[(1, 2), (1, 1), (1, 1)]), Direction::Horizontal, 3);
    assert_eq!(origins(&frames), vec![(0, 0), (0, 2), (1, 0)]);
}

#[test]
fn test_horizontal_frames_in_pixels() {
    let mut engine = PlacementEngine::new(Direction::Horizontal, Size::new(50.0, 80.0), 2);
    let list = items(&[(1, 1), (1, 1), (2, 1)]);
    let frames: Vec<_> = (0..3).map(|i| engine.place(i, &list.metadata_for_item(i))).collect();
    assert_eq!(frames[2].cell, GridCell::new(1, 0));
    assert_eq!(frames[2].frame.x, 50.0);
    assert_eq!(frames[2].frame.width, 100.0);
    assert_eq!(frames[2].frame.height, 80.0);
    assert_eq!(engine.content_extent(), 150.0);
}

#[test_case(Direction::Vertical, 3 ; "vertical narrow")]
#[test_case(Direction::Vertical, 8 ; "vertical wide")]
#[test_case(Direction::Horizontal, 4 ; "horizontal")]
#[test_case(Direction::Vertical, 1 ; "single column")]
fn test_placement_soundness(direction: Direction, bound: u32) {
    for seed in [1u32, 7, 42, 1234] {
        let list = scrambled_items(200, 4, seed);
        let (engine, frames) = place_all(&list, direction, bound);

        let covered = assert_no_overlap(&frames);
        assert_within_bound(&frames, direction, bound);

        // Occupancy holds exactly the union of placed blocks
        let filled: HashSet<GridCell> = engine
            .occupancy()
            .filled_cells()
            .map(|cell| direction.to_grid_cell(cell))
            .collect();
        assert_eq!(filled, covered);
    }
}

#[test]
fn test_extent_never_decreases() {
    let list = scrambled_items(300, 5, 99);
    let mut engine = PlacementEngine::new(Direction::Vertical, Size::new(100.0, 100.0), 6);
    let mut last = 0.0;
    for i in 0..list.item_count() {
        engine.place(i, &list.metadata_for_item(i));
        let extent = engine.content_extent();
        assert!(extent >= last);
        last = extent;
    }
}

#[test_case(6, 2 ; "two wide in six")]
#[test_case(3, 5 ; "five wide in three")]
fn test_oversized_items_are_still_placed(bound: u32, width: i32) {
    let list = items(&[(width, 1), (1, 1), (width, 2)]);
    let (_, frames) = place_all(&list, Direction::Vertical, bound);
    assert_eq!(frames.len(), 3);
    assert_within_bound(&frames, Direction::Vertical, bound);
    assert_no_overlap(&frames);
}

#[test]
fn test_invalid_footprints_place_as_unit() {
    let (_, frames) = place_all(&items(&[(0, 0), (-3, 2), (2, 0)]), Direction::Vertical, 3);
    assert_eq!(origins(&frames), vec![(0, 0), (1, 0), (2, 0)]);
    assert!(frames.iter().all(|f| f.span.columns == 1 && f.span.rows == 1));
}

#[test]
fn test_reset_reproduces_layout() {
    let list = scrambled_items(50, 3, 5);
    let (mut engine, first) = place_all(&list, Direction::Vertical, 4);
    engine.reset();
    assert_eq!(engine.content_extent(), 0.0);
    let second: Vec<_> = (0..list.item_count())
        .map(|i| engine.place(i, &list.metadata_for_item(i)))
        .collect();
    assert_eq!(first, second);
}
