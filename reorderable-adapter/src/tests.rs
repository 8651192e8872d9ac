use crate::*;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use futures::executor::block_on;
use reorderable::{DragError, DropOutcome, MoveEvent, RawMeasure, ReorderEngine, ReorderOptions};

#[derive(Default)]
struct FakeRows {
    rows: HashMap<usize, RawMeasure>,
    settles: Cell<usize>,
    calls: RefCell<Vec<usize>>,
}

impl FakeRows {
    fn uniform(count: usize, height: f64) -> Self {
        let rows = (0..count)
            .map(|i| {
                (
                    i,
                    RawMeasure {
                        width: 320.0,
                        height,
                        page_y: i as f64 * height,
                        ..RawMeasure::default()
                    },
                )
            })
            .collect();
        Self {
            rows,
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<usize> {
        self.calls.borrow().clone()
    }
}

impl RowMeasurer for FakeRows {
    async fn settle(&self) {
        self.settles.set(self.settles.get() + 1);
    }

    async fn measure(&self, index: usize) -> Option<RawMeasure> {
        self.calls.borrow_mut().push(index);
        self.rows.get(&index).copied()
    }
}

#[derive(Default)]
struct Recorder {
    offsets: Vec<f64>,
}

impl ListScroller for Recorder {
    fn scroll_to(&mut self, offset: f64) {
        self.offsets.push(offset);
    }
}

#[derive(Default)]
struct Buzz {
    pulses: Vec<u64>,
}

impl Feedback for Buzz {
    fn vibrate(&mut self, duration_ms: u64) {
        self.pulses.push(duration_ms);
    }
}

fn letters() -> Vec<&'static str> {
    vec!["A", "B", "C", "D", "E"]
}

fn engine() -> ReorderEngine<&'static str, &'static str> {
    ReorderEngine::new(ReorderOptions::new(|s: &&'static str| *s), letters())
}

fn controller() -> DragController<&'static str, &'static str, FakeRows, Recorder, Buzz> {
    let mut c = DragController::new(
        engine(),
        FakeRows::uniform(5, 100.0),
        Recorder::default(),
        Buzz::default(),
    );
    c.on_container_layout(0.0, 500.0);
    c
}

fn move_to(y0: f64, move_y: f64, dy: f64) -> MoveEvent {
    MoveEvent {
        page_y: move_y,
        dy,
        move_y,
        y0,
    }
}

#[test]
fn ensure_measured_measures_each_row_once() {
    let mut e = engine();
    let rows = FakeRows::uniform(5, 100.0);
    e.set_visible_indices([0, 1, 2]);

    let report = block_on(ensure_measured(&mut e, &rows));
    assert_eq!(
        report,
        MeasureReport {
            requested: 3,
            measured: 3,
            skipped: 0
        }
    );
    assert!(report.is_complete());
    assert_eq!(rows.settles.get(), 1);
    assert_eq!(rows.calls(), vec![0, 1, 2]);

    // Nothing pending: resolves immediately without waiting for layout.
    let report = block_on(ensure_measured(&mut e, &rows));
    assert_eq!(report, MeasureReport::default());
    assert_eq!(rows.settles.get(), 1);

    e.set_visible_indices([1, 2, 3, 4]);
    block_on(ensure_measured(&mut e, &rows));
    assert_eq!(rows.calls(), vec![0, 1, 2, 3, 4]);
    assert_eq!(rows.settles.get(), 2);
}

#[test]
fn unusable_rows_are_retried_on_the_next_pass() {
    let mut e = engine();
    let mut rows = FakeRows::uniform(3, 50.0);
    rows.rows.insert(1, RawMeasure::default());
    e.set_visible_indices(0..4);

    let report = block_on(ensure_measured(&mut e, &rows));
    // Row 3 has no view, row 1 reported zeros.
    assert_eq!(report.requested, 4);
    assert_eq!(report.measured, 2);
    assert_eq!(report.skipped, 2);
    assert!(!report.is_complete());
    assert_eq!(e.pending_measurements(), vec![1, 3]);

    rows.rows.insert(
        1,
        RawMeasure {
            height: 50.0,
            page_y: 50.0,
            ..RawMeasure::default()
        },
    );
    let report = block_on(ensure_measured(&mut e, &rows));
    assert_eq!(report.measured, 1);
    assert_eq!(rows.calls(), vec![0, 1, 2, 3, 1, 3]);
    assert_eq!(e.geometry().lookup(75), Some(1));
}

#[test]
fn replacing_items_forgets_measurements() {
    let mut c = controller();
    block_on(c.on_visible_indices_changed(0..5));
    assert_eq!(c.engine().geometry().measured_len(), 5);

    c.set_items(vec!["E", "D", "C", "B", "A"]);
    assert_eq!(c.engine().geometry().measured_len(), 0);
    let report = block_on(c.on_visible_indices_changed(0..5));
    assert_eq!(report.measured, 5);
    assert_eq!(c.measurer().calls().len(), 10);
}

#[test]
fn drag_start_waits_for_visible_rows() {
    let mut c = controller();
    c.engine_mut().set_visible_indices(0..5);
    assert!(c.engine().pending_measurements().len() == 5);

    block_on(c.on_drag_start(2, 250.0, 0)).unwrap();
    assert!(c.engine().is_dragging());
    assert!(c.engine().pending_measurements().is_empty());
    assert_eq!(c.feedback().pulses, vec![50]);
}

#[test]
fn full_drag_reorders_and_scrolls() {
    let mut c = controller();
    block_on(c.on_visible_indices_changed(0..5));

    block_on(c.on_drag_start(0, 50.0, 1_000)).unwrap();
    assert_eq!(c.on_grant(60.0), Ok(60.0));

    let out = c.on_move(move_to(50.0, 350.0, 300.0)).unwrap();
    assert_eq!(out.target, 3);
    assert_eq!(c.scroller().offsets, vec![30.0]);
    assert!(c.engine().row_flags(3).hovered_bottom);

    assert_eq!(c.on_end(), Ok(DropOutcome::Reordered { from: 0, to: 3 }));
    assert_eq!(c.engine().items(), &["B", "C", "D", "A", "E"]);
    assert!(!c.is_animating());
    assert!(c.tick(1_200).is_none());
}

#[test]
fn lift_fades_in_over_configured_duration() {
    let mut c = controller();
    block_on(c.on_visible_indices_changed(0..5));
    assert!(c.tick(0).is_none());

    block_on(c.on_drag_start(1, 150.0, 1_000)).unwrap();
    assert!(c.is_animating());

    let frame = c.tick(1_000).unwrap();
    assert_eq!(frame.opacity, 0.0);
    assert_eq!(frame.row.key, "B");
    assert_eq!(frame.row.y, 150.0);
    assert_eq!(frame.row.height, 100.0);

    // Eases in: a quarter of the way through is well under a quarter opacity.
    let frame = c.tick(1_025).unwrap();
    assert!((frame.opacity - 0.0625).abs() < 1e-6);

    let frame = c.tick(1_050).unwrap();
    assert!((frame.opacity - 0.5).abs() < 1e-6);

    let frame = c.tick(1_100).unwrap();
    assert_eq!(frame.opacity, 1.0);
    assert!(!c.is_animating());
    assert_eq!(c.tick(5_000).unwrap().opacity, 1.0);
}

#[test]
fn lift_easing_is_configurable() {
    let mut c = controller().with_lift_easing(Easing::Linear);
    block_on(c.on_visible_indices_changed(0..5));
    block_on(c.on_drag_start(0, 50.0, 0)).unwrap();
    assert!((c.tick(25).unwrap().opacity - 0.25).abs() < 1e-6);
}

#[test]
fn new_drag_preempts_running_lift() {
    let mut c = controller();
    block_on(c.on_visible_indices_changed(0..5));

    block_on(c.on_drag_start(0, 50.0, 0)).unwrap();
    c.on_move(move_to(50.0, 250.0, 200.0)).unwrap();
    assert!(c.engine().spacer().is_some());
    assert!(c.is_animating());

    block_on(c.on_drag_start(3, 350.0, 10)).unwrap();
    assert_eq!(c.engine().session().map(|s| s.index()), Some(3));
    assert_eq!(c.engine().spacer(), None);
    assert_eq!(c.tick(10).unwrap().opacity, 0.0);
    assert_eq!(c.feedback().pulses, vec![50, 50]);
}

#[test]
fn stale_drag_start_stays_idle() {
    let mut c = controller();
    block_on(c.on_visible_indices_changed(0..5));
    assert_eq!(
        block_on(c.on_drag_start(7, 10.0, 0)),
        Err(DragError::StaleDragReference { index: 7, count: 5 })
    );
    assert!(!c.engine().is_dragging());
    assert!(!c.is_animating());
    assert!(c.feedback().pulses.is_empty());
    assert_eq!(c.on_end(), Err(DragError::NotDragging));
}

#[test]
fn cancel_keeps_order() {
    let mut c = controller();
    block_on(c.on_visible_indices_changed(0..5));
    block_on(c.on_drag_start(1, 150.0, 0)).unwrap();
    c.on_move(move_to(150.0, 420.0, 270.0)).unwrap();

    assert!(c.cancel());
    assert!(!c.cancel());
    assert_eq!(c.engine().items(), letters().as_slice());
    assert_eq!(c.on_move(move_to(150.0, 0.0, -1.0)), Err(DragError::NotDragging));
}

#[test]
fn tween_samples_endpoints_and_easing() {
    let t = Tween::new(0.0, 1.0, 100, 0, Easing::EaseInOut);
    assert_eq!(t.duration_ms, 1);
    assert_eq!(t.sample(0), 0.0);
    assert_eq!(t.sample(101), 1.0);
    assert!(t.is_done(101));

    let t = Tween::new(1.0, 0.9, 0, 100, Easing::EaseInOut);
    assert_eq!(t.sample(0), 1.0);
    assert!((t.sample(50) - 0.95).abs() < 1e-6);
    assert!((t.sample(100) - 0.9).abs() < 1e-6);
    assert_eq!(Easing::Linear.sample(0.25), 0.25);
}
