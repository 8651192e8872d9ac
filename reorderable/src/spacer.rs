use crate::{Edge, RowFlags, SpacerState};

/// Tracks which row shows the drop indicator.
///
/// This is the only place hover state lives; per-row flags are derived from it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpacerController {
    last_target: Option<usize>,
    state: Option<SpacerState>,
}

impl SpacerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Option<SpacerState> {
        self.state
    }

    /// Moves the indicator to `target`.
    ///
    /// `displacement` is the gesture's net vertical travel since drag start, scroll included;
    /// a negative value shows the indicator on the top edge. No indicator is shown over the
    /// dragged row's own slot or over an index outside `0..count`.
    ///
    /// Returns `true` when the state changed.
    pub fn update(
        &mut self,
        target: usize,
        dragged_index: usize,
        displacement: f64,
        count: usize,
    ) -> bool {
        if self.last_target == Some(target) {
            return false;
        }
        self.last_target = Some(target);
        self.state = None;

        if target == dragged_index || target >= count {
            return true;
        }
        let edge = if displacement < 0.0 {
            Edge::Top
        } else {
            Edge::Bottom
        };
        self.state = Some(SpacerState {
            target_index: target,
            edge,
        });
        true
    }

    pub fn clear(&mut self) {
        self.last_target = None;
        self.state = None;
    }

    pub fn flags_for(&self, index: usize) -> RowFlags {
        match self.state {
            Some(SpacerState { target_index, edge }) if target_index == index => RowFlags {
                dragged: false,
                hovered_top: edge == Edge::Top,
                hovered_bottom: edge == Edge::Bottom,
            },
            _ => RowFlags::default(),
        }
    }
}
