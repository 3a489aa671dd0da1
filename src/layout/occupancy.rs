//! Block occupancy tracking.
//!
//! The grid has a fixed number of cells across (the cross axis) and grows
//! without bound along the scroll (main) axis. Cells past the tracked extent
//! are implicitly open. All coordinates here are axis-neutral; the placement
//! engine maps them to columns and rows.

use crate::types::{AxisCell, AxisSpan};

/// Dense grid of filled flags, stored main-major (one band of `cross_bound`
/// flags per main-axis coordinate).
#[derive(Debug, Clone)]
pub struct OccupancyTracker {
    cross_bound: u32,
    filled: Vec<bool>,
    /// Number of main-axis bands currently tracked
    extent: u32,
    /// First open cell in scan order. Every cell before it is filled.
    cursor: AxisCell,
}

impl OccupancyTracker {
    /// Create an empty tracker. A zero bound is raised to one.
    pub fn new(cross_bound: u32) -> Self {
        Self {
            cross_bound: cross_bound.max(1),
            filled: Vec::new(),
            extent: 0,
            cursor: AxisCell::default(),
        }
    }

    pub fn cross_bound(&self) -> u32 {
        self.cross_bound
    }

    /// Number of main-axis bands touched by any filled block.
    pub fn extent(&self) -> u32 {
        self.extent
    }

    /// First open cell in scan order.
    pub fn cursor(&self) -> AxisCell {
        self.cursor
    }

    /// Clear all state, keeping the cross-axis bound.
    pub fn reset(&mut self) {
        self.filled.clear();
        self.extent = 0;
        self.cursor = AxisCell::default();
    }

    fn slot(&self, cell: AxisCell) -> Option<usize> {
        if cell.cross >= self.cross_bound || cell.main >= self.extent {
            return None;
        }
        Some(cell.main as usize * self.cross_bound as usize + cell.cross as usize)
    }

    /// True iff the cell lies inside the cross-axis bound and is not filled.
    pub fn is_open(&self, cell: AxisCell) -> bool {
        if cell.cross >= self.cross_bound {
            return false;
        }
        match self.slot(cell) {
            Some(i) => !self.filled.get(i).copied().unwrap_or(false),
            None => true,
        }
    }

    /// True iff every cell of the block at `origin` is open and the block
    /// fits inside the cross-axis bound.
    pub fn can_place(&self, origin: AxisCell, span: AxisSpan) -> bool {
        if span.cross == 0 || span.main == 0 {
            return false;
        }
        let Some(cross_end) = origin.cross.checked_add(span.cross) else {
            return false;
        };
        if cross_end > self.cross_bound {
            return false;
        }
        // Bands past the extent are empty, no need to look at them
        let main_end = origin.main.saturating_add(span.main).min(self.extent);
        (origin.main..main_end).all(|main| {
            (origin.cross..cross_end).all(|cross| self.is_open(AxisCell { cross, main }))
        })
    }

    /// Mark every cell of the block filled, growing the tracked extent as needed.
    pub fn mark_filled(&mut self, origin: AxisCell, span: AxisSpan) {
        let cross_end = origin.cross.saturating_add(span.cross).min(self.cross_bound);
        let main_end = origin.main.saturating_add(span.main);
        self.grow_to(main_end);

        for main in origin.main..main_end {
            for cross in origin.cross..cross_end {
                if let Some(i) = self.slot(AxisCell { cross, main }) {
                    if let Some(flag) = self.filled.get_mut(i) {
                        *flag = true;
                    }
                }
            }
        }
        self.advance_cursor();
    }

    /// First origin in scan order where `span` fits.
    ///
    /// The cross span is clamped to the bound first, so a slot always exists
    /// (at worst the first band past the extent).
    pub fn first_fit(&self, span: AxisSpan) -> AxisCell {
        let span = AxisSpan {
            cross: span.cross.clamp(1, self.cross_bound),
            main: span.main.max(1),
        };
        let last_cross = self.cross_bound - span.cross;
        let mut candidate = self.cursor;
        loop {
            if candidate.cross > last_cross {
                candidate = AxisCell {
                    cross: 0,
                    main: candidate.main + 1,
                };
                continue;
            }
            if self.can_place(candidate, span) {
                return candidate;
            }
            candidate = self.next_in_scan(candidate);
        }
    }

    /// Iterate every filled cell.
    pub fn filled_cells(&self) -> impl Iterator<Item = AxisCell> + '_ {
        let bound = self.cross_bound;
        (0..self.extent).flat_map(move |main| {
            (0..bound)
                .map(move |cross| AxisCell { cross, main })
                .filter(move |cell| !self.is_open(*cell))
        })
    }

    fn next_in_scan(&self, cell: AxisCell) -> AxisCell {
        if cell.cross + 1 < self.cross_bound {
            AxisCell {
                cross: cell.cross + 1,
                main: cell.main,
            }
        } else {
            AxisCell {
                cross: 0,
                main: cell.main + 1,
            }
        }
    }

    fn grow_to(&mut self, bands: u32) {
        if bands > self.extent {
            self.extent = bands;
            self.filled
                .resize(bands as usize * self.cross_bound as usize, false);
        }
    }

    // Only moves forward: cells before the cursor stay filled until reset.
    fn advance_cursor(&mut self) {
        while !self.is_open(self.cursor) {
            self.cursor = self.next_in_scan(self.cursor);
        }
    }
}
