/// Geometry reported by the rendering layer for one row, as-is.
///
/// All values are absolute screen coordinates in logical pixels. An unmounted row typically
/// reports all zeros.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawMeasure {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub page_x: f64,
    pub page_y: f64,
}

/// Geometry of one rendered row at measurement time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemMeasure {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub page_x: f64,
    pub page_y: f64,
    /// `false` until at least one non-zero field was observed.
    pub is_measured: bool,
}

impl ItemMeasure {
    pub fn from_raw(raw: RawMeasure) -> Self {
        let RawMeasure {
            x,
            y,
            width,
            height,
            page_x,
            page_y,
        } = raw;
        let is_measured = [x, y, width, height, page_x, page_y]
            .iter()
            .any(|v| *v != 0.0 && !v.is_nan());
        Self {
            x,
            y,
            width,
            height,
            page_x,
            page_y,
            is_measured,
        }
    }

    /// Start of the row in list space (screen position shifted by the scroll offset).
    pub fn list_start(&self, scroll_offset: f64) -> f64 {
        self.page_y + scroll_offset
    }

    pub fn list_end(&self, scroll_offset: f64) -> f64 {
        self.list_start(scroll_offset) + self.height
    }
}

impl From<RawMeasure> for ItemMeasure {
    fn from(raw: RawMeasure) -> Self {
        Self::from_raw(raw)
    }
}

/// Which side of the hovered row shows the drop indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Top,
    Bottom,
}

/// The single row currently showing a "drop here" indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpacerState {
    pub target_index: usize,
    pub edge: Edge,
}

/// Per-row styling flags, derived from the drag session and the spacer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowFlags {
    pub dragged: bool,
    pub hovered_top: bool,
    pub hovered_bottom: bool,
}

/// A move event from the gesture layer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveEvent {
    /// Raw screen Y of the touch.
    pub page_y: f64,
    /// Vertical delta reported for this gesture.
    pub dy: f64,
    /// Latest screen Y of the gesture.
    pub move_y: f64,
    /// Screen Y where the gesture started.
    pub y0: f64,
}

/// On-screen position and size of the list container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container {
    pub page_y: f64,
    pub height: f64,
}

/// The overlay drawn for the lifted row while a drag is active.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiftedRow<K> {
    pub key: K,
    pub index: usize,
    pub x: f64,
    pub width: f64,
    pub height: f64,
    /// Offset from the top of the container.
    pub y: f64,
    pub scale: f32,
}

/// Result of handling one move event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveOutcome {
    /// Clamped offset of the lifted row relative to the container.
    pub live_offset: f64,
    /// Index the item would land on if released now.
    pub target: usize,
    /// Scroll offset the list should jump to, if auto-scroll moved it.
    pub scroll_to: Option<f64>,
}

/// Result of releasing a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// Released on the origin slot (or onto a row that disappeared); order untouched.
    Unchanged,
    /// The dragged item moved from `from` to `to`; the owner was notified.
    Reordered { from: usize, to: usize },
}

/// Rounds the way the layout layer does: half-way values go up.
pub(crate) fn round_px(v: f64) -> i64 {
    floor_px(v + 0.5)
}

pub(crate) fn floor_px(v: f64) -> i64 {
    let t = v as i64;
    if (t as f64) > v { t - 1 } else { t }
}
