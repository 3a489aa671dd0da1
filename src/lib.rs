//! quilt-layout - quilt grid layout for scrollable containers
//!
//! Places a stream of variable-size items into a gapless, non-overlapping
//! block grid that grows along one scroll axis:
//! - First-fit placement in reading order, so small items back-fill gaps
//! - Lazy (on demand) or eager (prelayout) frame computation
//! - Hit testing and visible-window queries
//! - Relayout on breadth, block size, or direction changes
//!
//! Rendering, scrolling physics and view recycling stay with the host.
//!
//! # Usage
//!
//! ```
//! use quilt_layout::layout::LayoutDirector;
//! use quilt_layout::source::ItemList;
//! use quilt_layout::types::{ItemMetadata, Point};
//!
//! let items: ItemList = vec![ItemMetadata::new(2, 1), ItemMetadata::default()].into();
//! let mut director = LayoutDirector::new(items, 300.0);
//!
//! let frame = director.frame_for_item(1)?;
//! assert_eq!((frame.x, frame.y), (200.0, 0.0));
//! assert_eq!(director.item_at_point(Point::new(250.0, 50.0)), Some(1));
//! # Ok::<(), quilt_layout::error::QuiltError>(())
//! ```

pub mod error;
pub mod layout;
pub mod source;
pub mod types;
pub mod wasm;

pub use error::{QuiltError, Result};
pub use layout::{LayoutDirector, PlacedFrame, Viewport};
pub use source::{ItemList, ItemSource};
pub use types::*;
pub use wasm::QuiltView;

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
