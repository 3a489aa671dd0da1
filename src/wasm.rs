//! JavaScript bindings.
//!
//! `QuiltView` owns its item list; the JS host pushes metadata in, then
//! queries frames while it renders.
//!
//! ```javascript
//! import init, { QuiltView } from 'quilt-layout';
//! await init();
//! const view = new QuiltView(container.clientWidth);
//! view.setItems([{ footprint: { width: 2, height: 2 } }, {}]);
//! const { width, height } = view.contentSize();
//! const frame = view.frameForItem(0);
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::layout::LayoutDirector;
use crate::source::{ItemList, ItemSource};
use crate::types::{Direction, Point, Rect, Size};

#[derive(Serialize)]
struct VisibleItem {
    index: usize,
    frame: Rect,
}

/// Quilt layout handle exported to JavaScript.
#[wasm_bindgen]
pub struct QuiltView {
    director: LayoutDirector<ItemList>,
}

#[wasm_bindgen]
impl QuiltView {
    /// Empty layout with default configuration for a container `breadth`
    /// pixels across.
    #[wasm_bindgen(constructor)]
    pub fn new(breadth: f32) -> Result<QuiltView, JsValue> {
        let mut director = LayoutDirector::new(ItemList::new(), 0.0);
        director.set_container_breadth(breadth)?;
        Ok(QuiltView { director })
    }

    /// Replace all item metadata with an array of `{ footprint, margins }` objects.
    #[wasm_bindgen(js_name = "setItems")]
    pub fn set_items(&mut self, items: JsValue) -> Result<(), JsValue> {
        let items: ItemList = serde_wasm_bindgen::from_value(items)?;
        *self.director.source_mut() = items;
        Ok(())
    }

    #[wasm_bindgen(js_name = "itemCount")]
    pub fn item_count(&self) -> usize {
        self.director.source().item_count()
    }

    /// Drag-and-drop reorder.
    #[wasm_bindgen(js_name = "moveItem")]
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), JsValue> {
        self.director.source_mut().move_item(from, to)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = "setBlockSize")]
    pub fn set_block_size(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.director.set_block_size(Size::new(width, height))?;
        Ok(())
    }

    #[wasm_bindgen(js_name = "setHorizontal")]
    pub fn set_horizontal(&mut self, horizontal: bool) {
        let direction = if horizontal {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };
        self.director.set_direction(direction);
    }

    #[wasm_bindgen(js_name = "setPrelayout")]
    pub fn set_prelayout(&mut self, prelayout: bool) {
        self.director.set_prelayout(prelayout);
    }

    /// Returns true when the change requires a relayout.
    #[wasm_bindgen(js_name = "setBreadth")]
    pub fn set_breadth(&mut self, breadth: f32) -> Result<bool, JsValue> {
        Ok(self.director.set_container_breadth(breadth)?)
    }

    #[wasm_bindgen]
    pub fn invalidate(&mut self) {
        self.director.invalidate();
    }

    /// `{ width, height }` of the scrollable content.
    #[wasm_bindgen(js_name = "contentSize")]
    pub fn content_size(&mut self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(
            &self.director.preferred_content_size(),
        )?)
    }

    /// `{ x, y, width, height }` for the item at `index`.
    #[wasm_bindgen(js_name = "frameForItem")]
    pub fn frame_for_item(&mut self, index: usize) -> Result<JsValue, JsValue> {
        let frame = self.director.frame_for_item(index)?;
        Ok(serde_wasm_bindgen::to_value(&frame)?)
    }

    #[wasm_bindgen(js_name = "itemAtPoint")]
    pub fn item_at_point(&mut self, x: f32, y: f32) -> Option<u32> {
        self.director
            .item_at_point(Point::new(x, y))
            .and_then(|index| u32::try_from(index).ok())
    }

    /// `[{ index, frame }]` for every item intersecting the rectangle.
    #[wasm_bindgen(js_name = "framesInRect")]
    pub fn frames_in_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<JsValue, JsValue> {
        let visible: Vec<VisibleItem> = self
            .director
            .frames_in_rect(Rect::new(x, y, width, height))
            .into_iter()
            .map(|(index, frame)| VisibleItem { index, frame })
            .collect();
        Ok(serde_wasm_bindgen::to_value(&visible)?)
    }
}
