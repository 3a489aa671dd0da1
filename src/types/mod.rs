//! Data types shared by the layout engine and its hosts.

mod config;
mod geometry;
mod metadata;

pub use config::*;
pub use geometry::*;
pub use metadata::*;
