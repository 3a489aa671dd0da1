//! Quilt layout engine.
//!
//! This module handles:
//! - Tracking which grid blocks are filled as the grid grows along the scroll axis
//! - First-fit placement of variable-size items in index order
//! - Caching frames, with block-to-item lookup for hit testing
//! - Relayout on configuration or bounds changes, lazily or up front
//! - Viewport scroll state and visible-window queries

mod director;
mod frame_cache;
mod occupancy;
mod placement;
mod viewport;

pub use director::{LayoutDirector, LayoutState};
pub use frame_cache::{FrameCache, PopulationMode};
pub use occupancy::OccupancyTracker;
pub use placement::{PlacedFrame, PlacementEngine};
pub use viewport::Viewport;
