//! Layout configuration and growth direction.

use serde::{Deserialize, Serialize};

use super::geometry::{GridCell, GridSpan, Size};
use crate::error::{QuiltError, Result};

/// Default block edge length in pixels
pub const DEFAULT_BLOCK_PIXELS: f32 = 100.0;

/// Axis along which content grows (the scroll axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Fixed columns, rows grow downward
    #[default]
    Vertical,
    /// Fixed rows, columns grow rightward
    Horizontal,
}

/// A grid position expressed along (cross, main) axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AxisCell {
    pub cross: u32,
    pub main: u32,
}

/// A block span expressed along (cross, main) axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisSpan {
    pub cross: u32,
    pub main: u32,
}

impl Direction {
    pub fn to_axis_cell(self, cell: GridCell) -> AxisCell {
        match self {
            Direction::Vertical => AxisCell {
                cross: cell.column,
                main: cell.row,
            },
            Direction::Horizontal => AxisCell {
                cross: cell.row,
                main: cell.column,
            },
        }
    }

    pub fn to_grid_cell(self, cell: AxisCell) -> GridCell {
        match self {
            Direction::Vertical => GridCell::new(cell.cross, cell.main),
            Direction::Horizontal => GridCell::new(cell.main, cell.cross),
        }
    }

    pub fn to_axis_span(self, span: GridSpan) -> AxisSpan {
        match self {
            Direction::Vertical => AxisSpan {
                cross: span.columns,
                main: span.rows,
            },
            Direction::Horizontal => AxisSpan {
                cross: span.rows,
                main: span.columns,
            },
        }
    }

    pub fn to_grid_span(self, span: AxisSpan) -> GridSpan {
        match self {
            Direction::Vertical => GridSpan {
                columns: span.cross,
                rows: span.main,
            },
            Direction::Horizontal => GridSpan {
                columns: span.main,
                rows: span.cross,
            },
        }
    }

    /// Cross-axis component of a pixel size.
    pub fn cross_of(self, size: Size) -> f32 {
        match self {
            Direction::Vertical => size.width,
            Direction::Horizontal => size.height,
        }
    }

    /// Main-axis component of a pixel size.
    pub fn main_of(self, size: Size) -> f32 {
        match self {
            Direction::Vertical => size.height,
            Direction::Horizontal => size.width,
        }
    }

    /// Build a pixel size from (cross, main) lengths.
    pub fn size_from_axes(self, cross: f32, main: f32) -> Size {
        match self {
            Direction::Vertical => Size::new(cross, main),
            Direction::Horizontal => Size::new(main, cross),
        }
    }
}

/// Per-instance layout configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Pixel size of one block (default 100x100)
    pub block_size: Size,
    /// Growth direction (default vertical)
    pub direction: Direction,
    /// Place every item up front instead of on demand.
    /// Only worth it below roughly a thousand items.
    pub prelayout: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            block_size: Size::new(DEFAULT_BLOCK_PIXELS, DEFAULT_BLOCK_PIXELS),
            direction: Direction::Vertical,
            prelayout: false,
        }
    }
}

impl LayoutConfig {
    /// Reject block sizes the engine cannot divide by.
    pub fn validate(&self) -> Result<()> {
        if !self.block_size.is_positive() {
            return Err(QuiltError::InvalidConfig(format!(
                "block size must be finite and positive, got {}x{}",
                self.block_size.width, self.block_size.height
            )));
        }
        Ok(())
    }

    /// Number of blocks that fit across `breadth` pixels (floored, at least one).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cross_bound(&self, breadth: f32) -> u32 {
        let block = self.direction.cross_of(self.block_size);
        if !breadth.is_finite() || !block.is_finite() || block <= 0.0 {
            return 1;
        }
        let blocks = (breadth / block).floor().clamp(1.0, f32::from(u16::MAX));
        (blocks as u32).max(1)
    }
}
