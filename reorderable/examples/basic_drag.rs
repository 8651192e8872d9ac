// Example: lift a row, drag it down three rows and drop it.
use reorderable::{Container, MoveEvent, RawMeasure, ReorderEngine, ReorderOptions};

fn main() {
    let items = vec!["milk", "eggs", "bread", "butter", "jam"];
    let mut e = ReorderEngine::new(
        ReorderOptions::new(|s: &&str| s.to_string())
            .with_on_reordered(Some(|items: &[&str]| println!("owner received: {items:?}"))),
        items,
    );

    // The rendering layer reports the container and each visible row once laid out.
    e.set_container(Container {
        page_y: 0.0,
        height: 400.0,
    });
    e.set_visible_indices(0..5);
    for i in e.pending_measurements() {
        e.record_measurement(
            i,
            RawMeasure {
                width: 320.0,
                height: 80.0,
                page_y: i as f64 * 80.0,
                ..RawMeasure::default()
            },
        );
    }

    e.begin_drag(0, 40.0).expect("row 0 is measured");
    for move_y in [80.0, 160.0, 250.0] {
        let out = e
            .drag_move(MoveEvent {
                page_y: move_y,
                dy: move_y - 40.0,
                move_y,
                y0: 40.0,
            })
            .expect("dragging");
        println!(
            "move_y={move_y}: target={} spacer={:?} scroll_to={:?}",
            out.target,
            e.spacer(),
            out.scroll_to
        );
    }
    println!("drop: {:?}", e.end_drag());
    println!("order: {:?}", e.items());
}
