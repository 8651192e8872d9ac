/// Reasons a gesture could not be applied.
///
/// Every variant leaves the engine idle with the item order untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DragError {
    /// The drag started on an index that is not in the current sequence, usually because the
    /// owner replaced the data while the gesture was in flight.
    #[error("drag started on index {index}, but the list has {count} items")]
    StaleDragReference { index: usize, count: usize },
    /// The picked-up row has no usable geometry.
    #[error("row {index} has not been measured")]
    UnmeasuredRow { index: usize },
    /// A move or release arrived without an active drag.
    #[error("no drag in progress")]
    NotDragging,
}
