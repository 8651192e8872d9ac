/// Identity of an item across reorders.
///
/// Keys are compared by value, never by reference, so regenerating the owner's sequence keeps
/// the dragged item trackable as long as the key extractor stays stable.
pub trait ItemKey: Clone + Eq + core::fmt::Debug {}
impl<K: Clone + Eq + core::fmt::Debug> ItemKey for K {}
