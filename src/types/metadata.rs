//! Per-item metadata supplied by the host.

use serde::{Deserialize, Serialize};

use super::geometry::{GridSpan, Insets};

/// Requested item size in blocks.
///
/// Signed so that hosts can hand over whatever they computed; a non-positive
/// dimension is invalid and the whole footprint falls back to 1x1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    pub width: i32,
    pub height: i32,
}

impl Default for Footprint {
    fn default() -> Self {
        Self::UNIT
    }
}

impl Footprint {
    /// A single block.
    pub const UNIT: Footprint = Footprint {
        width: 1,
        height: 1,
    };

    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are at least one block.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Convert to an unsigned span, substituting 1x1 for invalid footprints.
    pub fn normalized(&self) -> GridSpan {
        match (u32::try_from(self.width), u32::try_from(self.height)) {
            (Ok(columns), Ok(rows)) if columns > 0 && rows > 0 => GridSpan { columns, rows },
            _ => GridSpan::default(),
        }
    }
}

/// Everything the engine needs to know about one item.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemMetadata {
    /// Size in blocks (default 1x1)
    pub footprint: Footprint,
    /// Insets inside the block area (default zero)
    pub margins: Insets,
}

impl ItemMetadata {
    /// Metadata with the given footprint and no margins.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            footprint: Footprint::new(width, height),
            margins: Insets::ZERO,
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }
}
