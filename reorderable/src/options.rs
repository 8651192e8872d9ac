use alloc::sync::Arc;

/// Extracts the stable key of an item.
pub type KeyExtractor<T, K> = Arc<dyn Fn(&T) -> K + Send + Sync>;

/// A callback fired once per completed reorder with the full new sequence.
pub type OnReorderedCallback<T> = Arc<dyn Fn(&[T]) + Send + Sync>;

/// Configuration for [`crate::ReorderEngine`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
pub struct ReorderOptions<T, K> {
    pub get_item_key: KeyExtractor<T, K>,

    /// Receives the new order after a drop that moved an item.
    pub on_reordered: Option<OnReorderedCallback<T>>,

    /// Auto-scroll applied per move event, as a fraction of the gesture's `dy`.
    pub auto_scroll_factor: f64,

    /// Scale of the lifted row overlay.
    pub lifted_scale: f32,

    /// Duration of the lift (fade-in) animation. Driven by the adapter.
    pub lift_duration_ms: u64,

    /// Length of the haptic pulse on lift. Driven by the adapter.
    pub haptic_duration_ms: u64,
}

impl<T, K> Clone for ReorderOptions<T, K> {
    fn clone(&self) -> Self {
        Self {
            get_item_key: Arc::clone(&self.get_item_key),
            on_reordered: self.on_reordered.clone(),
            auto_scroll_factor: self.auto_scroll_factor,
            lifted_scale: self.lifted_scale,
            lift_duration_ms: self.lift_duration_ms,
            haptic_duration_ms: self.haptic_duration_ms,
        }
    }
}

impl<T, K> ReorderOptions<T, K> {
    /// Creates options with the given key extractor and default tuning.
    pub fn new(get_item_key: impl Fn(&T) -> K + Send + Sync + 'static) -> Self {
        Self {
            get_item_key: Arc::new(get_item_key),
            on_reordered: None,
            auto_scroll_factor: 0.1,
            lifted_scale: 0.9,
            lift_duration_ms: 100,
            haptic_duration_ms: 50,
        }
    }

    pub fn with_on_reordered(
        mut self,
        on_reordered: Option<impl Fn(&[T]) + Send + Sync + 'static>,
    ) -> Self {
        self.on_reordered = on_reordered.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_auto_scroll_factor(mut self, factor: f64) -> Self {
        self.auto_scroll_factor = factor;
        self
    }

    pub fn with_lifted_scale(mut self, scale: f32) -> Self {
        self.lifted_scale = scale;
        self
    }

    pub fn with_lift_duration_ms(mut self, duration_ms: u64) -> Self {
        self.lift_duration_ms = duration_ms;
        self
    }

    pub fn with_haptic_duration_ms(mut self, duration_ms: u64) -> Self {
        self.haptic_duration_ms = duration_ms;
        self
    }
}

impl<T, K> core::fmt::Debug for ReorderOptions<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReorderOptions")
            .field("on_reordered", &self.on_reordered.is_some())
            .field("auto_scroll_factor", &self.auto_scroll_factor)
            .field("lifted_scale", &self.lifted_scale)
            .field("lift_duration_ms", &self.lift_duration_ms)
            .field("haptic_duration_ms", &self.haptic_duration_ms)
            .finish_non_exhaustive()
    }
}
