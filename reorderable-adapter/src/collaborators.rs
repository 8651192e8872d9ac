use core::future::Future;

use reorderable::RawMeasure;

/// Reads row geometry from the rendering layer.
pub trait RowMeasurer {
    /// Resolves once the rendering layer has finished laying out freshly mounted rows.
    ///
    /// Geometry read before layout settles comes back all-zero, so implementations usually
    /// wait a short fixed delay or one frame here.
    fn settle(&self) -> impl Future<Output = ()>;

    /// Measures the row at `index`.
    ///
    /// Returns `None` when the row has no mounted view to measure.
    fn measure(&self, index: usize) -> impl Future<Output = Option<RawMeasure>>;
}

/// Moves the underlying list.
pub trait ListScroller {
    fn scroll_to(&mut self, offset: f64);
}

/// Short tactile signal on lift.
pub trait Feedback {
    fn vibrate(&mut self, duration_ms: u64);
}

/// A [`Feedback`] that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFeedback;

impl Feedback for NoFeedback {
    fn vibrate(&mut self, _duration_ms: u64) {}
}
