use reorderable::{
    Container, DragError, DropOutcome, ItemKey, LiftedRow, MoveEvent, MoveOutcome, ReorderEngine,
};

use crate::{
    Easing, Feedback, ListScroller, MeasureReport, NoFeedback, RowMeasurer, Tween,
    ensure_measured,
};

/// One frame of the lifted-row overlay.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiftFrame<K> {
    pub row: LiftedRow<K>,
    pub opacity: f32,
}

/// A framework-neutral controller that wires a [`ReorderEngine`] to its collaborators.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_visible_indices_changed` / `on_scroll` / `on_container_layout` as the list renders
/// - `on_drag_start` / `on_grant` / `on_move` / `on_end` for the touch lifecycle
/// - `tick(now_ms)` each frame to draw the lifted row
#[derive(Debug)]
pub struct DragController<T, K, M, S, F = NoFeedback> {
    engine: ReorderEngine<T, K>,
    measurer: M,
    scroller: S,
    feedback: F,
    lift_easing: Easing,
    lift: Option<Tween>,
}

impl<T, K, M, S, F> DragController<T, K, M, S, F>
where
    K: ItemKey,
    M: RowMeasurer,
    S: ListScroller,
    F: Feedback,
{
    pub fn new(engine: ReorderEngine<T, K>, measurer: M, scroller: S, feedback: F) -> Self {
        Self {
            engine,
            measurer,
            scroller,
            feedback,
            lift_easing: Easing::default(),
            lift: None,
        }
    }

    /// Sets the easing of the lift fade-in.
    pub fn with_lift_easing(mut self, easing: Easing) -> Self {
        self.lift_easing = easing;
        self
    }

    pub fn engine(&self) -> &ReorderEngine<T, K> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ReorderEngine<T, K> {
        &mut self.engine
    }

    pub fn into_engine(self) -> ReorderEngine<T, K> {
        self.engine
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    pub fn scroller(&self) -> &S {
        &self.scroller
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Whether the lift animation is still running.
    pub fn is_animating(&self) -> bool {
        self.lift.is_some()
    }

    /// Replaces the owner's data. Drops any drag and all cached geometry.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.lift = None;
        self.engine.set_items(items);
    }

    pub fn on_container_layout(&mut self, page_y: f64, height: f64) {
        self.engine.set_container(Container { page_y, height });
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.engine.on_scroll(offset);
    }

    /// Call this when the rendering layer reports a new set of visible rows.
    pub async fn on_visible_indices_changed(
        &mut self,
        indices: impl IntoIterator<Item = usize>,
    ) -> MeasureReport {
        self.engine.set_visible_indices(indices);
        ensure_measured(&mut self.engine, &self.measurer).await
    }

    /// Lifts the row at `index`.
    ///
    /// Waits for the visible rows to be measured first. A lift animation still running from a
    /// previous drag is stopped and that drag discarded.
    pub async fn on_drag_start(
        &mut self,
        index: usize,
        touch_page_y: f64,
        now_ms: u64,
    ) -> Result<(), DragError> {
        ensure_measured(&mut self.engine, &self.measurer).await;

        if self.lift.take().is_some() {
            adebug!("on_drag_start: preempting running lift");
            self.engine.cancel_drag();
        }
        self.engine.begin_drag(index, touch_page_y)?;

        let options = self.engine.options();
        let (haptic_ms, lift_ms) = (options.haptic_duration_ms, options.lift_duration_ms);
        self.feedback.vibrate(haptic_ms);
        self.lift = Some(Tween::new(0.0, 1.0, now_ms, lift_ms, self.lift_easing));
        Ok(())
    }

    /// Pins the lifted row under the touch when the gesture layer grants the pan.
    pub fn on_grant(&mut self, move_y: f64) -> Result<f64, DragError> {
        self.engine.pin_to(move_y)
    }

    /// Handles a move: updates the drag and applies auto-scroll to the list.
    pub fn on_move(&mut self, event: MoveEvent) -> Result<MoveOutcome, DragError> {
        let outcome = self.engine.drag_move(event)?;
        if let Some(offset) = outcome.scroll_to {
            atrace!(offset, "on_move: auto-scroll");
            self.scroller.scroll_to(offset);
        }
        Ok(outcome)
    }

    /// Releases the drag. Drag state and the lift animation are always reset.
    pub fn on_end(&mut self) -> Result<DropOutcome, DragError> {
        self.lift = None;
        self.engine.end_drag()
    }

    /// Cancels the drag without reordering.
    pub fn cancel(&mut self) -> bool {
        self.lift = None;
        self.engine.cancel_drag()
    }

    /// Advances the lift animation and returns the overlay to draw, if a drag is active.
    pub fn tick(&mut self, now_ms: u64) -> Option<LiftFrame<K>> {
        let row = self.engine.lifted_row()?;
        let opacity = match self.lift {
            Some(tween) => {
                let opacity = tween.sample(now_ms);
                if tween.is_done(now_ms) {
                    self.lift = None;
                }
                opacity
            }
            None => 1.0,
        };
        Some(LiftFrame { row, opacity })
    }
}
