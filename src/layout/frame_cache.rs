//! Computed frames keyed by item index, plus a block-to-item map for hit testing.

use std::collections::HashMap;

use super::placement::PlacedFrame;
use crate::error::{QuiltError, Result};
use crate::types::{GridCell, Point, Rect, Size};

/// How the cache is populated after a relayout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopulationMode {
    /// Frames are computed the first time an index (or a later one) is queried.
    #[default]
    Incremental,
    /// Every frame is computed during relayout.
    Eager,
}

/// Frames for items `0..len()`, always a contiguous prefix.
#[derive(Debug, Clone)]
pub struct FrameCache {
    mode: PopulationMode,
    block_size: Size,
    frames: Vec<PlacedFrame>,
    /// Owner of each covered block
    owners: HashMap<GridCell, usize>,
}

impl FrameCache {
    pub fn new(mode: PopulationMode, block_size: Size) -> Self {
        Self {
            mode,
            block_size,
            frames: Vec::new(),
            owners: HashMap::new(),
        }
    }

    pub fn mode(&self) -> PopulationMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame for `index`, or `None` if it has not been laid out yet.
    pub fn frame(&self, index: usize) -> Option<&PlacedFrame> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[PlacedFrame] {
        &self.frames
    }

    /// Append the next frame. Frames must arrive in index order; any other
    /// frame is rejected and the cache is left unchanged.
    pub fn insert(&mut self, placed: PlacedFrame) -> Result<()> {
        let expected = self.frames.len();
        if placed.index != expected {
            return Err(QuiltError::FrameOutOfOrder {
                index: placed.index,
                expected,
            });
        }
        for cell in placed.cells() {
            self.owners.insert(cell, placed.index);
        }
        self.frames.push(placed);
        Ok(())
    }

    /// Item whose frame contains `point`. Points in margins, gaps, or past
    /// the laid-out region miss.
    pub fn item_at(&self, point: Point) -> Option<usize> {
        let column = block_index(point.x, self.block_size.width)?;
        let row = block_index(point.y, self.block_size.height)?;
        let index = *self.owners.get(&GridCell::new(column, row))?;
        let placed = self.frames.get(index)?;
        placed.frame.contains(point).then_some(index)
    }

    /// Cached frames overlapping `rect`, in index order.
    pub fn frames_intersecting(&self, rect: Rect) -> impl Iterator<Item = &PlacedFrame> + '_ {
        self.frames
            .iter()
            .filter(move |placed| placed.frame.intersects(&rect))
    }

    pub fn clear(&mut self) {
        self.frames.clear();
        self.owners.clear();
    }
}

/// Block index containing `coord`, or `None` for negative / non-finite input.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn block_index(coord: f32, block: f32) -> Option<u32> {
    if !coord.is_finite() || coord < 0.0 || block <= 0.0 {
        return None;
    }
    let index = (coord / block).floor();
    if index > u32::MAX as f32 {
        return None;
    }
    Some(index as u32)
}
