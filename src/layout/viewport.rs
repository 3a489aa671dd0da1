//! Viewport state for hosts that scroll a quilt layout.

use super::LayoutDirector;
use crate::source::ItemSource;
use crate::types::{Direction, Point, Rect, Size};

/// Viewport state - the visible window onto the content
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Horizontal scroll position in content coordinates
    pub scroll_x: f32,
    /// Vertical scroll position in content coordinates
    pub scroll_y: f32,
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl Viewport {
    /// Create a viewport scrolled to the origin
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width,
            height,
        }
    }

    /// Visible region in content coordinates
    pub fn visible_rect(&self) -> Rect {
        Rect::new(self.scroll_x, self.scroll_y, self.width, self.height)
    }

    /// Convert content coordinates to screen coordinates
    pub fn to_screen(&self, point: Point) -> Point {
        Point::new(point.x - self.scroll_x, point.y - self.scroll_y)
    }

    /// Convert screen coordinates to content coordinates
    pub fn to_content(&self, screen: Point) -> Point {
        Point::new(screen.x + self.scroll_x, screen.y + self.scroll_y)
    }

    /// Clamp scroll position so the viewport stays within `content`.
    pub fn clamp_scroll(&mut self, content: Size) {
        let max_x = (content.width - self.width).max(0.0);
        let max_y = (content.height - self.height).max(0.0);
        self.scroll_x = self.scroll_x.clamp(0.0, max_x);
        self.scroll_y = self.scroll_y.clamp(0.0, max_y);
    }

    /// Scroll by delta amounts
    pub fn scroll_by(&mut self, delta_x: f32, delta_y: f32, content: Size) {
        self.scroll_x += delta_x;
        self.scroll_y += delta_y;
        self.clamp_scroll(content);
    }

    /// Set absolute scroll position
    pub fn set_scroll(&mut self, x: f32, y: f32, content: Size) {
        self.scroll_x = x;
        self.scroll_y = y;
        self.clamp_scroll(content);
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Items intersecting the visible region, with frames in content coordinates.
    ///
    /// In incremental mode this also places items one viewport length past
    /// the visible edge, so the content size stays ahead of the scroll
    /// position and the next `scroll_by` is not clamped short.
    pub fn visible_items<S: ItemSource>(
        &self,
        director: &mut LayoutDirector<S>,
    ) -> Vec<(usize, Rect)> {
        let visible = self.visible_rect();
        let lookahead = match director.config().direction {
            Direction::Vertical => visible.max_y() + self.height,
            Direction::Horizontal => visible.max_x() + self.width,
        };
        director.extend_to(lookahead);
        director.frames_in_rect(visible)
    }

    /// Item under a screen-space point.
    pub fn item_at_screen<S: ItemSource>(
        &self,
        director: &mut LayoutDirector<S>,
        screen: Point,
    ) -> Option<usize> {
        director.item_at_point(self.to_content(screen))
    }
}
