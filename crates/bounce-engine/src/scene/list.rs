use super::DrawCmd;

/// A single draw item: insertion index + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    /// Insertion index within the frame; paint order is ascending.
    pub order: u32,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `clear()` keeps allocated capacity, so a warmed list does not allocate per frame
///
/// Items are painted back-to-front in the order they were pushed; there is no
/// separate z-layer.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates commands in paint order without cloning them.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter().map(|item| &item.cmd)
    }

    /// Appends a draw command at the top of the stream.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { order, cmd });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Point, Rect};
    use crate::paint::Color;
    use crate::scene::DrawStyle;

    #[test]
    fn push_assigns_ascending_order() {
        let mut list = DrawList::new();
        list.push_solid_rect(Rect::new(0, 0, 1, 1), Color::RED);
        list.push_oval(Rect::new(0, 0, 2, 2), DrawStyle::Stroke, Color::BLACK);

        let orders: Vec<u32> = list.items().iter().map(|i| i.order).collect();
        assert_eq!(orders, vec![0, 1]);
        assert_eq!(list.commands().map(DrawCmd::name).collect::<Vec<_>>(), vec!["rect", "oval"]);
    }

    #[test]
    fn clear_resets_order() {
        let mut list = DrawList::new();
        list.push_solid_rect(Rect::new(0, 0, 1, 1), Color::RED);
        list.clear();
        assert!(list.is_empty());

        list.push_solid_rect(Rect::new(0, 0, 1, 1), Color::RED);
        assert_eq!(list.items()[0].order, 0);
    }

    #[test]
    fn degenerate_polygon_is_dropped() {
        let mut list = DrawList::new();
        list.push_polygon(&[Point::new(0, 0), Point::new(1, 1)], DrawStyle::Fill, Color::RED);
        assert!(list.is_empty());
    }
}
