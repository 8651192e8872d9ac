use alloc::vec::Vec;

/// Moves the item keyed `dragged` next to the item keyed `target`.
///
/// If the target sat below the dragged item it is inserted right after the target, otherwise
/// right before it, so the item lands where the indicator was shown. Returns the
/// `(from, to)` indexes, or `None` if either key is missing or both are the same item.
pub fn commit_reorder<T, K: PartialEq>(
    items: &mut Vec<T>,
    key_of: impl Fn(&T) -> K,
    dragged: &K,
    target: &K,
) -> Option<(usize, usize)> {
    if dragged == target {
        return None;
    }
    let from = items.iter().position(|it| key_of(it) == *dragged)?;
    let target_before = items.iter().position(|it| key_of(it) == *target)?;

    let item = items.remove(from);
    let Some(target_after) = items.iter().position(|it| key_of(it) == *target) else {
        items.insert(from, item);
        return None;
    };
    let to = if target_before > from {
        target_after + 1
    } else {
        target_after
    };
    items.insert(to, item);
    Some((from, to))
}
