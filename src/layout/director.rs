//! Orchestration of placement, caching, and invalidation for one container.
//!
//! # Threading
//!
//! A director is driven synchronously from the host's layout pass. Queries
//! take `&mut self` because incremental mode places items on demand, so the
//! borrow checker already serializes them. Hosts that change their
//! [`ItemSource`] answers or the container breadth must call
//! [`LayoutDirector::invalidate`] (or the matching setter) before the next
//! query; answers that change mid-pass without that are not detected.

use serde::Serialize;
use tracing::{debug, warn};

use super::frame_cache::{FrameCache, PopulationMode};
use super::placement::{PlacedFrame, PlacementEngine};
use crate::error::{QuiltError, Result};
use crate::source::ItemSource;
use crate::types::{Direction, LayoutConfig, Point, Rect, Size};

/// Snapshot of the current layout parameters and progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutState {
    pub direction: Direction,
    pub block_size: Size,
    /// Blocks across the fixed axis
    pub cross_bound: u32,
    /// Main-axis pixel length of everything placed so far
    pub content_extent: f32,
    pub prelayout: bool,
    /// Number of items with a computed frame
    pub placed: usize,
}

/// Lays out items from an [`ItemSource`] into a quilt grid.
///
/// The source is held by value; pass `&T`, `Rc<T>` or `Arc<T>` to keep
/// ownership with the host.
pub struct LayoutDirector<S> {
    source: S,
    config: LayoutConfig,
    /// Container extent along the cross axis, in pixels
    breadth: f32,
    engine: PlacementEngine,
    cache: FrameCache,
    dirty: bool,
}

impl<S: ItemSource> LayoutDirector<S> {
    /// Director with the default configuration. Nothing is computed until the
    /// first query. A negative or non-finite breadth is treated as zero.
    pub fn new(source: S, breadth: f32) -> Self {
        let breadth = sanitize_breadth(breadth);
        let config = LayoutConfig::default();
        let (engine, cache) = empty_layout(&config, breadth);
        Self {
            source,
            config,
            breadth,
            engine,
            cache,
            dirty: true,
        }
    }

    /// Director with an explicit configuration.
    pub fn with_config(source: S, breadth: f32, config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        validate_breadth(breadth)?;
        let (engine, cache) = empty_layout(&config, breadth);
        Ok(Self {
            source,
            config,
            breadth,
            engine,
            cache,
            dirty: true,
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the source. The layout is invalidated, since the
    /// caller is presumably about to change it.
    pub fn source_mut(&mut self) -> &mut S {
        self.dirty = true;
        &mut self.source
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn breadth(&self) -> f32 {
        self.breadth
    }

    pub fn item_count(&self) -> usize {
        self.source.item_count()
    }

    /// Items with a computed frame in the current layout. Zero while a
    /// relayout is pending.
    pub fn placed_count(&self) -> usize {
        if self.dirty {
            0
        } else {
            self.cache.len()
        }
    }

    pub fn set_block_size(&mut self, block_size: Size) -> Result<()> {
        let candidate = LayoutConfig {
            block_size,
            ..self.config
        };
        candidate.validate()?;
        if candidate != self.config {
            self.config = candidate;
            self.dirty = true;
        }
        Ok(())
    }

    /// Change the growth direction. The breadth is kept, so hosts switching
    /// direction usually also call [`set_container_breadth`](Self::set_container_breadth).
    pub fn set_direction(&mut self, direction: Direction) {
        if direction != self.config.direction {
            self.config.direction = direction;
            self.dirty = true;
        }
    }

    pub fn set_prelayout(&mut self, prelayout: bool) {
        if prelayout != self.config.prelayout {
            self.config.prelayout = prelayout;
            self.dirty = true;
        }
    }

    /// Set the cross-axis container extent. Returns whether a relayout is now pending.
    pub fn set_container_breadth(&mut self, breadth: f32) -> Result<bool> {
        validate_breadth(breadth)?;
        if !self.breadth.is_finite() || (breadth - self.breadth).abs() > f32::EPSILON {
            self.breadth = breadth;
            self.dirty = true;
        }
        Ok(self.dirty)
    }

    /// Whether new container bounds change the cross-axis breadth. Changes
    /// along the scroll axis alone never need a relayout.
    pub fn should_invalidate_for_bounds(&self, bounds: Size) -> bool {
        let breadth = self.config.direction.cross_of(bounds);
        (breadth - self.breadth).abs() > f32::EPSILON
    }

    /// Force a full relayout on the next query.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Total content size: the breadth across, the placed extent along the scroll axis.
    pub fn preferred_content_size(&mut self) -> Size {
        let extent = self.content_extent();
        self.config.direction.size_from_axes(self.breadth, extent)
    }

    /// Main-axis pixel length of the placed items. Exact once every item is
    /// placed (always, in prelayout mode), otherwise grows as items are placed.
    pub fn content_extent(&mut self) -> f32 {
        self.ensure_layout();
        self.engine.content_extent()
    }

    /// Pixel frame for `index`, placing it (and every earlier item) if needed.
    pub fn frame_for_item(&mut self, index: usize) -> Result<Rect> {
        self.placed_frame(index).map(|placed| placed.frame)
    }

    /// Full placement record for `index`.
    pub fn placed_frame(&mut self, index: usize) -> Result<PlacedFrame> {
        let count = self.source.item_count();
        if index >= count {
            return Err(QuiltError::IndexOutOfRange { index, count });
        }
        self.ensure_layout();
        self.place_through(index)?;
        self.cache
            .frame(index)
            .copied()
            .ok_or(QuiltError::IndexOutOfRange { index, count })
    }

    /// Item under `point`, among the items placed so far.
    pub fn item_at_point(&mut self, point: Point) -> Option<usize> {
        self.ensure_layout();
        self.cache.item_at(point)
    }

    /// Items whose frames intersect `rect`. Places items as needed until no
    /// unplaced item could reach into `rect`.
    pub fn frames_in_rect(&mut self, rect: Rect) -> Vec<(usize, Rect)> {
        let far_edge = match self.config.direction {
            Direction::Vertical => rect.max_y(),
            Direction::Horizontal => rect.max_x(),
        };
        self.extend_to(far_edge);
        self.cache
            .frames_intersecting(rect)
            .map(|placed| (placed.index, placed.frame))
            .collect()
    }

    /// Place items until every item that could start before `main_offset`
    /// (pixels along the scroll axis) has a frame, or all items are placed.
    pub fn extend_to(&mut self, main_offset: f32) {
        self.ensure_layout();
        let count = self.source.item_count();
        while self.cache.len() < count && self.engine.cursor_offset() < main_offset {
            if let Err(err) = self.place_next() {
                warn!(%err, "placement stopped");
                break;
            }
        }
    }

    /// Place every item and return all frames.
    pub fn layout_all(&mut self) -> &[PlacedFrame] {
        self.ensure_layout();
        let count = self.source.item_count();
        if count > 0 {
            if let Err(err) = self.place_through(count - 1) {
                warn!(%err, "placement stopped");
            }
        }
        self.cache.frames()
    }

    pub fn state(&mut self) -> LayoutState {
        self.ensure_layout();
        LayoutState {
            direction: self.config.direction,
            block_size: self.config.block_size,
            cross_bound: self.engine.cross_bound(),
            content_extent: self.engine.content_extent(),
            prelayout: self.config.prelayout,
            placed: self.cache.len(),
        }
    }

    fn ensure_layout(&mut self) {
        if self.dirty {
            self.relayout();
        }
    }

    /// Rebuild from scratch. The new engine and cache are swapped in only
    /// once complete.
    fn relayout(&mut self) {
        let (mut engine, mut cache) = empty_layout(&self.config, self.breadth);
        let count = self.source.item_count();
        if cache.mode() == PopulationMode::Eager {
            for index in 0..count {
                let meta = self.source.metadata_for_item(index);
                if let Err(err) = cache.insert(engine.place(index, &meta)) {
                    warn!(%err, "prelayout stopped");
                    break;
                }
            }
        }
        debug!(
            cross_bound = engine.cross_bound(),
            mode = ?cache.mode(),
            items = count,
            placed = cache.len(),
            extent = engine.content_extent(),
            "relayout"
        );
        self.engine = engine;
        self.cache = cache;
        self.dirty = false;
    }

    fn place_through(&mut self, index: usize) -> Result<()> {
        while self.cache.len() <= index {
            self.place_next()?;
        }
        Ok(())
    }

    fn place_next(&mut self) -> Result<()> {
        let index = self.cache.len();
        let meta = self.source.metadata_for_item(index);
        self.cache.insert(self.engine.place(index, &meta))
    }
}

fn empty_layout(config: &LayoutConfig, breadth: f32) -> (PlacementEngine, FrameCache) {
    let mode = if config.prelayout {
        PopulationMode::Eager
    } else {
        PopulationMode::Incremental
    };
    let engine = PlacementEngine::new(
        config.direction,
        config.block_size,
        config.cross_bound(breadth),
    );
    (engine, FrameCache::new(mode, config.block_size))
}

fn sanitize_breadth(breadth: f32) -> f32 {
    if breadth.is_finite() && breadth >= 0.0 {
        breadth
    } else {
        warn!(breadth, "invalid container breadth, using 0");
        0.0
    }
}

fn validate_breadth(breadth: f32) -> Result<()> {
    if !breadth.is_finite() || breadth < 0.0 {
        return Err(QuiltError::InvalidConfig(format!(
            "container breadth must be finite and non-negative, got {breadth}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::source::ItemList;
    use crate::types::{GridCell, ItemMetadata};

    #[test]
    fn test_lazy_until_first_query() {
        let mut director = LayoutDirector::new(ItemList::uniform(10), 300.0);
        assert_eq!(director.placed_count(), 0);
        director.frame_for_item(4).unwrap();
        assert_eq!(director.placed_count(), 5);
    }

    #[test]
    fn test_prelayout_places_everything() {
        let config = LayoutConfig {
            prelayout: true,
            ..LayoutConfig::default()
        };
        let mut director =
            LayoutDirector::with_config(ItemList::uniform(7), 300.0, config).unwrap();
        assert_eq!(director.content_extent(), 300.0);
        assert_eq!(director.placed_count(), 7);
    }

    #[test]
    fn test_out_of_range_is_error() {
        let mut director = LayoutDirector::new(ItemList::uniform(3), 300.0);
        let err = director.frame_for_item(3).unwrap_err();
        assert!(matches!(err, QuiltError::IndexOutOfRange { index: 3, count: 3 }));
    }

    #[test]
    fn test_setters_only_dirty_on_change() {
        let mut director = LayoutDirector::new(ItemList::uniform(3), 300.0);
        director.frame_for_item(2).unwrap();
        director.set_direction(Direction::Vertical);
        director.set_prelayout(false);
        assert!(!director.set_container_breadth(300.0).unwrap());
        assert_eq!(director.placed_count(), 3);

        assert!(director.set_container_breadth(200.0).unwrap());
        assert_eq!(director.placed_count(), 0);
        let placed = director.placed_frame(2).unwrap();
        assert_eq!(placed.cell, GridCell::new(0, 1));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut director = LayoutDirector::new(ItemList::uniform(1), 300.0);
        assert!(director.set_block_size(Size::new(-1.0, 10.0)).is_err());
        assert!(director.set_container_breadth(f32::NAN).is_err());
        let config = LayoutConfig::default();
        assert!(LayoutDirector::with_config(ItemList::new(), -5.0, config).is_err());
    }

    #[test]
    fn test_non_finite_initial_breadth_recovers() {
        let mut director = LayoutDirector::new(ItemList::uniform(6), f32::NAN);
        assert_eq!(director.breadth(), 0.0);
        assert_eq!(director.state().cross_bound, 1);

        assert!(director.set_container_breadth(300.0).unwrap());
        assert_eq!(director.breadth(), 300.0);
        assert_eq!(director.state().cross_bound, 3);
        assert_eq!(director.layout_all().len(), 6);
        assert_eq!(director.preferred_content_size(), Size::new(300.0, 200.0));

        let mut director = LayoutDirector::new(ItemList::uniform(2), -40.0);
        assert_eq!(director.breadth(), 0.0);
        assert_eq!(director.frame_for_item(1).unwrap().y, 100.0);
    }

    #[test]
    fn test_should_invalidate_for_bounds() {
        let director = LayoutDirector::new(ItemList::uniform(1), 300.0);
        assert!(!director.should_invalidate_for_bounds(Size::new(300.0, 5000.0)));
        assert!(director.should_invalidate_for_bounds(Size::new(320.0, 600.0)));
    }

    #[test]
    fn test_source_mut_invalidates() {
        let mut director = LayoutDirector::new(ItemList::uniform(2), 300.0);
        assert_eq!(director.placed_frame(1).unwrap().cell, GridCell::new(1, 0));
        director.source_mut().insert(0, ItemMetadata::new(3, 1)).unwrap();
        assert_eq!(director.placed_frame(1).unwrap().cell, GridCell::new(0, 1));
    }

    #[test]
    fn test_state_snapshot() {
        let mut director = LayoutDirector::new(ItemList::uniform(4), 250.0);
        director.frame_for_item(3).unwrap();
        let state = director.state();
        assert_eq!(state.cross_bound, 2);
        assert_eq!(state.placed, 4);
        assert_eq!(state.content_extent, 200.0);
        assert!(!state.prelayout);
    }
}
