//! List scrolling state
//!
//! A cursor plus a viewport offset for the scrollable lists (bundle rows,
//! picker rows). The offset follows the cursor so the selected row is always
//! visible.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    pub selected_index: usize,
    pub offset: usize,
    item_count: usize,
    viewport_height: usize,
}

impl ScrollState {
    pub fn new(item_count: usize, viewport_height: usize) -> Self {
        Self {
            selected_index: 0,
            offset: 0,
            item_count,
            viewport_height: viewport_height.max(1),
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Update the number of items, clamping the cursor back into range
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        if count == 0 {
            self.selected_index = 0;
            self.offset = 0;
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
        self.ensure_visible();
    }

    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height.max(1);
        self.ensure_visible();
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
        self.ensure_visible();
    }

    pub fn move_down(&mut self) {
        if self.item_count > 0 && self.selected_index + 1 < self.item_count {
            self.selected_index += 1;
        }
        self.ensure_visible();
    }

    pub fn select(&mut self, index: usize) {
        if self.item_count > 0 {
            self.selected_index = index.min(self.item_count - 1);
        }
        self.ensure_visible();
    }

    fn ensure_visible(&mut self) {
        if self.selected_index < self.offset {
            self.offset = self.selected_index;
        } else if self.selected_index >= self.offset + self.viewport_height {
            self.offset = self.selected_index + 1 - self.viewport_height;
        }
    }
}
