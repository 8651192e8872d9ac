use alloc::vec::Vec;

use crate::commit::commit_reorder;
use crate::geometry::GeometryCache;
use crate::resolver::{ResolveInput, probe_pixel, resolve_drop_slot};
use crate::session::DragSession;
use crate::spacer::SpacerController;
use crate::{
    Container, DragError, DropOutcome, ItemKey, ItemMeasure, LiftedRow, MoveEvent, MoveOutcome,
    RawMeasure, ReorderOptions, RowFlags, SpacerState,
};

/// The drag-and-reorder state machine.
///
/// The engine is `Idle` when [`session`](Self::session) is `None` and `Dragging` otherwise.
/// It holds no UI objects and never suspends: the adapter awaits measurements before calling
/// [`begin_drag`](Self::begin_drag), then feeds touch events in order.
///
/// All mutable drag state (geometry, session, spacer) lives behind `&mut self`, so a single
/// writer is enforced by ownership.
#[derive(Clone, Debug)]
pub struct ReorderEngine<T, K> {
    options: ReorderOptions<T, K>,
    items: Vec<T>,
    geometry: GeometryCache,
    visible: Vec<usize>,
    container: Option<Container>,
    scroll_offset: f64,
    session: Option<DragSession<K>>,
    spacer: SpacerController,
}

impl<T, K: ItemKey> ReorderEngine<T, K> {
    pub fn new(options: ReorderOptions<T, K>, items: Vec<T>) -> Self {
        rdebug!(count = items.len(), "ReorderEngine::new");
        Self {
            options,
            items,
            geometry: GeometryCache::new(),
            visible: Vec::new(),
            container: None,
            scroll_offset: 0.0,
            session: None,
            spacer: SpacerController::new(),
        }
    }

    pub fn options(&self) -> &ReorderOptions<T, K> {
        &self.options
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn key_of(&self, index: usize) -> Option<K> {
        self.items.get(index).map(|it| (self.options.get_item_key)(it))
    }

    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.items
            .iter()
            .position(|it| (self.options.get_item_key)(it) == *key)
    }

    /// Replaces the whole item sequence.
    ///
    /// Any drag in progress is dropped and all measurements are forgotten, since indexes no
    /// longer refer to the same rows.
    pub fn set_items(&mut self, items: Vec<T>) {
        rdebug!(
            prev = self.items.len(),
            next = items.len(),
            "ReorderEngine::set_items"
        );
        self.cancel_drag();
        self.geometry.reset();
        self.items = items;
    }

    pub fn geometry(&self) -> &GeometryCache {
        &self.geometry
    }

    /// Sets the indexes the rendering layer currently shows, in the order reported.
    pub fn set_visible_indices(&mut self, indices: impl IntoIterator<Item = usize>) {
        self.visible.clear();
        for index in indices {
            if !self.visible.contains(&index) {
                self.visible.push(index);
            }
        }
    }

    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// Visible rows still lacking a usable measurement.
    pub fn pending_measurements(&self) -> Vec<usize> {
        self.visible
            .iter()
            .copied()
            .filter(|&i| i < self.items.len() && !self.geometry.is_measured(i))
            .collect()
    }

    /// Records geometry for a row at the current scroll offset.
    ///
    /// An all-zero measurement is stored as "not measured" so the row is retried on the next
    /// visibility change. Returns `true` when the measurement was usable.
    pub fn record_measurement(&mut self, index: usize, raw: RawMeasure) -> bool {
        if index >= self.items.len() {
            rwarn!(
                index,
                count = self.items.len(),
                "record_measurement: index out of range"
            );
            return false;
        }
        self.geometry
            .record_measurement(index, ItemMeasure::from_raw(raw), self.scroll_offset)
    }

    pub fn set_container(&mut self, container: Container) {
        self.container = Some(container);
    }

    pub fn container(&self) -> Option<Container> {
        self.container
    }

    /// Reports the list's current scroll offset.
    pub fn on_scroll(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// User scrolling should be disabled while a drag is active.
    pub fn scroll_enabled(&self) -> bool {
        self.session.is_none()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession<K>> {
        self.session.as_ref()
    }

    pub fn spacer(&self) -> Option<SpacerState> {
        self.spacer.state()
    }

    pub fn row_flags(&self, index: usize) -> RowFlags {
        let mut flags = self.spacer.flags_for(index);
        flags.dragged = self.session.as_ref().is_some_and(|s| s.index() == index);
        flags
    }

    pub fn lifted_row(&self) -> Option<LiftedRow<K>> {
        let session = self.session.as_ref()?;
        let measure = session.origin_measure();
        Some(LiftedRow {
            key: session.key().clone(),
            index: session.index(),
            x: measure.x,
            width: measure.width,
            height: measure.height,
            y: session.live_offset(),
            scale: self.options.lifted_scale,
        })
    }

    /// Converts a screen Y into an offset inside the container, clamped to its bounds.
    pub fn offset_in_container(&self, screen_y: f64) -> f64 {
        let Some(container) = self.container else {
            return screen_y.max(0.0);
        };
        let offset = screen_y - container.page_y;
        if offset < 0.0 {
            0.0
        } else if offset > container.height {
            container.height
        } else {
            offset
        }
    }

    /// Picks up the row at `index`.
    ///
    /// Any previous drag is discarded first. The caller is expected to have awaited
    /// measurements of the visible rows; a row without usable geometry cannot be lifted.
    pub fn begin_drag(&mut self, index: usize, touch_page_y: f64) -> Result<(), DragError> {
        self.cancel_drag();

        let count = self.items.len();
        if index >= count {
            rwarn!(index, count, "begin_drag: stale drag reference");
            return Err(DragError::StaleDragReference { index, count });
        }
        let Some(measure) = self.geometry.measure(index).filter(|m| m.is_measured).copied()
        else {
            rwarn!(index, "begin_drag: row is not measured");
            return Err(DragError::UnmeasuredRow { index });
        };

        let key = (self.options.get_item_key)(&self.items[index]);
        let live_offset = self.offset_in_container(touch_page_y);
        rdebug!(index, key = ?key, live_offset, "begin_drag");
        self.session = Some(DragSession::new(
            key,
            index,
            measure,
            touch_page_y,
            self.scroll_offset,
            live_offset,
        ));
        Ok(())
    }

    /// Re-pins the lifted row under the touch without resolving a target.
    pub fn pin_to(&mut self, move_y: f64) -> Result<f64, DragError> {
        let live_offset = self.offset_in_container(move_y);
        let session = self.session.as_mut().ok_or(DragError::NotDragging)?;
        session.set_live_offset(live_offset);
        Ok(live_offset)
    }

    /// Handles one move event: updates the lifted row, resolves the drop target, moves the
    /// spacer and computes the auto-scroll request.
    pub fn drag_move(&mut self, event: MoveEvent) -> Result<MoveOutcome, DragError> {
        let live_offset = self.offset_in_container(event.move_y);
        let count = self.items.len();
        let scroll_offset = self.scroll_offset;
        let session = self.session.as_mut().ok_or(DragError::NotDragging)?;

        session.set_live_offset(live_offset);
        session.set_gesture_start_y(event.y0);

        let input = ResolveInput {
            probe: probe_pixel(
                session.origin_measure().page_y,
                scroll_offset,
                event.move_y,
                event.y0,
            ),
            screen_y: event.page_y,
            dy: event.dy,
        };
        let target =
            resolve_drop_slot(&self.geometry, &input, count).unwrap_or(session.index());
        session.set_target(target);

        let displacement = event.move_y - event.y0 + (scroll_offset - session.scroll_at_start());
        self.spacer.update(target, session.index(), displacement, count);

        let step = event.dy * self.options.auto_scroll_factor;
        let scroll_to = (step != 0.0 && step.is_finite()).then(|| (scroll_offset + step).max(0.0));

        rtrace!(probe = input.probe, target, live_offset, "drag_move");
        Ok(MoveOutcome {
            live_offset,
            target,
            scroll_to,
        })
    }

    /// Releases the drag.
    ///
    /// Dropping on the origin slot, or on a row that no longer exists, leaves the order as it
    /// was. Otherwise the item is moved and the owner is notified exactly once. Drag state is
    /// reset on every path.
    pub fn end_drag(&mut self) -> Result<DropOutcome, DragError> {
        let session = self.session.take().ok_or(DragError::NotDragging)?;
        self.spacer.clear();

        let target = session.resolved_target();
        if target == session.index() {
            rdebug!(index = target, "end_drag: released on origin");
            return Ok(DropOutcome::Unchanged);
        }
        let Some(target_key) = self.key_of(target) else {
            rwarn!(target, "end_drag: target row is gone");
            return Ok(DropOutcome::Unchanged);
        };

        let key_of = |it: &T| (self.options.get_item_key)(it);
        let Some((from, to)) = commit_reorder(&mut self.items, key_of, session.key(), &target_key)
        else {
            return Ok(DropOutcome::Unchanged);
        };

        rdebug!(from, to, "end_drag: reordered");
        if let Some(cb) = &self.options.on_reordered {
            cb(&self.items);
        }
        Ok(DropOutcome::Reordered { from, to })
    }

    /// Drops any drag in progress without touching the order.
    ///
    /// Returns `true` if a drag was active.
    pub fn cancel_drag(&mut self) -> bool {
        self.spacer.clear();
        self.session.take().is_some()
    }
}
