// Example: drive a drag through the controller with fake collaborators.
use futures::executor::block_on;
use reorderable::{MoveEvent, RawMeasure, ReorderEngine, ReorderOptions};
use reorderable_adapter::{DragController, ListScroller, NoFeedback, RowMeasurer};

struct FixedRows {
    height: f64,
}

impl RowMeasurer for FixedRows {
    async fn settle(&self) {}

    async fn measure(&self, index: usize) -> Option<RawMeasure> {
        Some(RawMeasure {
            width: 320.0,
            height: self.height,
            page_y: index as f64 * self.height,
            ..RawMeasure::default()
        })
    }
}

struct PrintScroll;

impl ListScroller for PrintScroll {
    fn scroll_to(&mut self, offset: f64) {
        println!("scroll_to({offset})");
    }
}

fn main() {
    let engine = ReorderEngine::new(
        ReorderOptions::new(|s: &&str| s.to_string())
            .with_on_reordered(Some(|items: &[&str]| println!("owner received: {items:?}"))),
        vec!["inbox", "today", "later", "someday"],
    );
    let mut c = DragController::new(engine, FixedRows { height: 60.0 }, PrintScroll, NoFeedback);
    c.on_container_layout(0.0, 240.0);

    block_on(async {
        let report = c.on_visible_indices_changed(0..4).await;
        println!("measured: {report:?}");
        c.on_drag_start(3, 210.0, 0).await
    })
    .expect("row 3 is visible");

    for (now_ms, move_y) in [(16u64, 150.0), (32, 90.0), (48, 40.0)] {
        let out = c
            .on_move(MoveEvent {
                page_y: move_y,
                dy: move_y - 210.0,
                move_y,
                y0: 210.0,
            })
            .expect("dragging");
        let frame = c.tick(now_ms);
        println!(
            "t={now_ms}ms target={} opacity={:?}",
            out.target,
            frame.map(|f| f.opacity)
        );
    }
    println!("drop: {:?}", c.on_end());
}
