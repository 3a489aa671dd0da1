//! First-fit block placement.
//!
//! Items are placed strictly in index order. Each one takes the first origin,
//! in scan order from the occupancy cursor, where its whole block is open.
//! Vertical layouts scan columns left-to-right within a row, then advance
//! rows; horizontal layouts scan rows top-to-bottom within a column, then
//! advance columns.

use serde::Serialize;
use tracing::{trace, warn};

use super::occupancy::OccupancyTracker;
use crate::types::{Direction, GridCell, GridSpan, Insets, ItemMetadata, Rect, Size};

/// A laid-out item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedFrame {
    /// Item index
    pub index: usize,
    /// Top-left block of the item
    pub cell: GridCell,
    /// Blocks covered, after normalization and clamping
    pub span: GridSpan,
    /// Pixel rectangle with margins applied
    pub frame: Rect,
}

impl PlacedFrame {
    /// Every block covered by this item.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> {
        let GridCell { column, row } = self.cell;
        let GridSpan { columns, rows } = self.span;
        (row..row + rows)
            .flat_map(move |r| (column..column + columns).map(move |c| GridCell::new(c, r)))
    }
}

/// Places items into an [`OccupancyTracker`] and computes their pixel frames.
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    direction: Direction,
    block_size: Size,
    occupancy: OccupancyTracker,
}

impl PlacementEngine {
    pub fn new(direction: Direction, block_size: Size, cross_bound: u32) -> Self {
        Self {
            direction,
            block_size,
            occupancy: OccupancyTracker::new(cross_bound),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn block_size(&self) -> Size {
        self.block_size
    }

    pub fn cross_bound(&self) -> u32 {
        self.occupancy.cross_bound()
    }

    pub fn occupancy(&self) -> &OccupancyTracker {
        &self.occupancy
    }

    /// Forget every placement. The cross-axis bound is kept.
    pub fn reset(&mut self) {
        self.occupancy.reset();
    }

    /// Main-axis length in pixels covered by the items placed so far.
    /// Never decreases until [`reset`](Self::reset).
    pub fn content_extent(&self) -> f32 {
        self.occupancy.extent() as f32 * self.direction.main_of(self.block_size)
    }

    /// Pixel position along the main axis of the first open block.
    /// No later item can start before it.
    pub fn cursor_offset(&self) -> f32 {
        self.occupancy.cursor().main as f32 * self.direction.main_of(self.block_size)
    }

    /// Place one item. Callers must place indices in increasing order,
    /// because occupancy is cumulative.
    pub fn place(&mut self, index: usize, meta: &ItemMetadata) -> PlacedFrame {
        let span = self.resolve_span(index, meta);
        let axis_span = self.direction.to_axis_span(span);

        let origin = self.occupancy.first_fit(axis_span);
        self.occupancy.mark_filled(origin, axis_span);

        let cell = self.direction.to_grid_cell(origin);
        let frame = self.pixel_frame(cell, span, meta.margins);
        trace!(
            index,
            column = cell.column,
            row = cell.row,
            columns = span.columns,
            rows = span.rows,
            "placed item"
        );

        PlacedFrame {
            index,
            cell,
            span,
            frame,
        }
    }

    /// Normalize the footprint and clamp its cross-axis span to the bound.
    fn resolve_span(&self, index: usize, meta: &ItemMetadata) -> GridSpan {
        if !meta.footprint.is_valid() {
            warn!(
                index,
                width = meta.footprint.width,
                height = meta.footprint.height,
                "non-positive footprint, using 1x1"
            );
        }
        let span = meta.footprint.normalized();
        let mut axis = self.direction.to_axis_span(span);
        let bound = self.occupancy.cross_bound();
        if axis.cross > bound {
            warn!(index, requested = axis.cross, bound, "footprint wider than grid, clamping");
            axis.cross = bound;
        }
        self.direction.to_grid_span(axis)
    }

    /// Block rectangle of `span` at `cell`, inset by `margins`. The result
    /// always lies inside the block, collapsing to zero size when the
    /// margins meet.
    fn pixel_frame(&self, cell: GridCell, span: GridSpan, margins: Insets) -> Rect {
        let margins = margins.sanitized();
        let Size { width: bw, height: bh } = self.block_size;
        let (left, width) = inset_axis(span.columns as f32 * bw, margins.left, margins.right);
        let (top, height) = inset_axis(span.rows as f32 * bh, margins.top, margins.bottom);
        Rect {
            x: cell.column as f32 * bw + left,
            y: cell.row as f32 * bh + top,
            width,
            height,
        }
    }
}

/// Offset and length of a `length`-long run shrunk by `lead` and `trail`,
/// each clamped to what is left of the run.
fn inset_axis(length: f32, lead: f32, trail: f32) -> (f32, f32) {
    let lead = lead.min(length);
    let trail = trail.min(length - lead);
    (lead, length - lead - trail)
}
