//! The host-side data provider.
//!
//! A [`LayoutDirector`](crate::layout::LayoutDirector) pulls item count and
//! per-item metadata through [`ItemSource`]. Implement it on your own model, or
//! use [`ItemList`] when the metadata is already in memory.

use std::rc::Rc;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{QuiltError, Result};
use crate::types::ItemMetadata;

/// Supplies item count and metadata on demand.
///
/// Answers must not change during a layout pass. After changing them, call
/// [`LayoutDirector::invalidate`](crate::layout::LayoutDirector::invalidate).
pub trait ItemSource {
    /// Total number of items.
    fn item_count(&self) -> usize;

    /// Footprint and margins for `index`. Defaults to a 1x1 block with no margins.
    fn metadata_for_item(&self, index: usize) -> ItemMetadata {
        let _ = index;
        ItemMetadata::default()
    }
}

impl<T: ItemSource + ?Sized> ItemSource for &T {
    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn metadata_for_item(&self, index: usize) -> ItemMetadata {
        (**self).metadata_for_item(index)
    }
}

impl<T: ItemSource + ?Sized> ItemSource for Rc<T> {
    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn metadata_for_item(&self, index: usize) -> ItemMetadata {
        (**self).metadata_for_item(index)
    }
}

impl<T: ItemSource + ?Sized> ItemSource for Arc<T> {
    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn metadata_for_item(&self, index: usize) -> ItemMetadata {
        (**self).metadata_for_item(index)
    }
}

/// In-memory item metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList {
    items: Vec<ItemMetadata>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    /// `count` default (1x1, no margin) items.
    pub fn uniform(count: usize) -> Self {
        Self {
            items: vec![ItemMetadata::default(); count],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ItemMetadata> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[ItemMetadata] {
        &self.items
    }

    pub fn push(&mut self, meta: ItemMetadata) {
        self.items.push(meta);
    }

    /// Insert at `index` (which may equal `len()`).
    pub fn insert(&mut self, index: usize, meta: ItemMetadata) -> Result<()> {
        if index > self.items.len() {
            return Err(self.out_of_range(index));
        }
        self.items.insert(index, meta);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<ItemMetadata> {
        if index >= self.items.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.items.remove(index))
    }

    pub fn set(&mut self, index: usize, meta: ItemMetadata) -> Result<()> {
        let count = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(QuiltError::IndexOutOfRange { index, count })?;
        *slot = meta;
        Ok(())
    }

    /// Move the item at `from` so it ends up at `to` (drag-and-drop reorder).
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<()> {
        let count = self.items.len();
        if to >= count {
            return Err(self.out_of_range(to));
        }
        let moved = self.remove(from)?;
        self.items.insert(to, moved);
        Ok(())
    }

    fn out_of_range(&self, index: usize) -> QuiltError {
        QuiltError::IndexOutOfRange {
            index,
            count: self.items.len(),
        }
    }
}

impl From<Vec<ItemMetadata>> for ItemList {
    fn from(items: Vec<ItemMetadata>) -> Self {
        Self { items }
    }
}

impl FromIterator<ItemMetadata> for ItemList {
    fn from_iter<I: IntoIterator<Item = ItemMetadata>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl ItemSource for ItemList {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn metadata_for_item(&self, index: usize) -> ItemMetadata {
        self.items.get(index).copied().unwrap_or_default()
    }
}
