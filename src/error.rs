//! Structured error types for quilt-layout.
//!
//! Most bad input is corrected in place (footprints are normalized and
//! clamped, point misses return `None`). Only the cases below reach the caller.

/// All errors that can occur while configuring or querying a layout.
#[derive(Debug, thiserror::Error)]
pub enum QuiltError {
    /// Item index outside `[0, count)`.
    #[error("Item index {index} out of range (item count {count})")]
    IndexOutOfRange { index: usize, count: usize },

    /// Frame handed to a cache out of index order.
    #[error("Frame for item {index} arrived out of order (expected item {expected})")]
    FrameOutOfOrder { index: usize, expected: usize },

    /// Configuration value the engine cannot work with.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QuiltError>;

impl From<QuiltError> for wasm_bindgen::JsValue {
    fn from(e: QuiltError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
