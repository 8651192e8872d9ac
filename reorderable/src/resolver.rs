use crate::geometry::GeometryCache;
use crate::types::round_px;

/// Inputs for one drop-slot resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolveInput {
    /// Current top edge of the dragged row, in list space.
    pub probe: i64,
    /// Raw screen Y of the touch.
    pub screen_y: f64,
    /// Per-event vertical delta; its sign is the direction of travel.
    pub dy: f64,
}

/// Computes the dragged row's current top edge in list space.
///
/// `origin_page_y` is the screen Y of the row when it was lifted; the touch displacement since
/// gesture start moves it, and the scroll offset maps the result into list space.
pub fn probe_pixel(origin_page_y: f64, scroll_offset: f64, live_y: f64, gesture_start_y: f64) -> i64 {
    round_px(origin_page_y + scroll_offset + (live_y - gesture_start_y))
}

/// Maps a probe to the index the dragged item would land on.
///
/// Returns `None` only for an empty list. Rows far from the viewport are usually unmeasured,
/// so a probe that lands in a gap scans toward the row being moved into rather than the one
/// being left.
pub fn resolve_drop_slot(
    cache: &GeometryCache,
    input: &ResolveInput,
    count: usize,
) -> Option<usize> {
    let last = count.checked_sub(1)?;
    let ResolveInput { probe, screen_y, dy } = *input;

    if let Some(index) = cache.lookup(probe) {
        rtrace!(probe, index, "resolve_drop_slot: direct hit");
        return Some(index.min(last));
    }

    let (Some(min), Some(max)) = (cache.min_offset(), cache.max_offset()) else {
        // Nothing measured yet.
        return Some(if dy < 0.0 { 0 } else { last });
    };

    if screen_y < min as f64 {
        return Some(0);
    }
    if screen_y > max as f64 {
        return Some(last);
    }

    // `min` and `max` are stamped pixels, so a scan bounded by them always finds a row.
    let map = cache.pixel_map();
    let found = if dy > 0.0 && probe < max {
        map.first_at_or_after(probe, max)
    } else if dy < 0.0 && probe > min {
        map.last_at_or_before(probe, min)
    } else {
        None
    };
    if let Some((_, index)) = found {
        rtrace!(probe, index, "resolve_drop_slot: scanned gap");
        return Some(index.min(last));
    }

    Some(if dy < 0.0 { 0 } else { last })
}
