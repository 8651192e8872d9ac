use crate::ItemMeasure;

/// Transient state of an in-progress drag.
///
/// Owned by [`crate::ReorderEngine`]; created on drag start and dropped on release or cancel.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession<K> {
    key: K,
    index: usize,
    measure: ItemMeasure,
    gesture_start_y: f64,
    scroll_at_start: f64,
    live_offset: f64,
    target: Option<usize>,
}

impl<K> DragSession<K> {
    pub(crate) fn new(
        key: K,
        index: usize,
        measure: ItemMeasure,
        gesture_start_y: f64,
        scroll_at_start: f64,
        live_offset: f64,
    ) -> Self {
        Self {
            key,
            index,
            measure,
            gesture_start_y,
            scroll_at_start,
            live_offset,
            target: None,
        }
    }

    /// Key of the dragged item.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Index the dragged item had when it was lifted.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Geometry of the dragged row when it was lifted.
    pub fn origin_measure(&self) -> &ItemMeasure {
        &self.measure
    }

    pub fn gesture_start_y(&self) -> f64 {
        self.gesture_start_y
    }

    pub fn scroll_at_start(&self) -> f64 {
        self.scroll_at_start
    }

    /// Offset of the lifted row from the top of the container.
    pub fn live_offset(&self) -> f64 {
        self.live_offset
    }

    /// Last resolved drop target, if any move was handled yet.
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// The index the item lands on if released now.
    pub fn resolved_target(&self) -> usize {
        self.target.unwrap_or(self.index)
    }

    pub(crate) fn set_gesture_start_y(&mut self, y0: f64) {
        self.gesture_start_y = y0;
    }

    pub(crate) fn set_live_offset(&mut self, offset: f64) {
        self.live_offset = offset;
    }

    pub(crate) fn set_target(&mut self, target: usize) {
        self.target = Some(target);
    }
}
