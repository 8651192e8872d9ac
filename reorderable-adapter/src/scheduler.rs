use futures::future::join_all;
use reorderable::{ItemKey, ReorderEngine};

use crate::RowMeasurer;

/// Summary of one [`ensure_measured`] pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasureReport {
    /// Rows that lacked a usable measurement when the pass started.
    pub requested: usize,
    /// Rows that now have usable geometry.
    pub measured: usize,
    /// Rows that had no mounted view or reported all zeros; retried on the next pass.
    pub skipped: usize,
}

impl MeasureReport {
    pub fn is_complete(&self) -> bool {
        self.skipped == 0
    }
}

/// Measures every visible row that has no usable geometry yet, once.
///
/// Rows are measured together after a single [`RowMeasurer::settle`]. A row that comes back
/// unusable is not retried here; the next visibility change picks it up again. Rows that were
/// already measured are never measured twice.
pub async fn ensure_measured<T, K, M>(
    engine: &mut ReorderEngine<T, K>,
    measurer: &M,
) -> MeasureReport
where
    K: ItemKey,
    M: RowMeasurer,
{
    let pending = engine.pending_measurements();
    if pending.is_empty() {
        return MeasureReport::default();
    }

    adebug!(rows = pending.len(), "ensure_measured: batch");
    measurer.settle().await;
    let results = join_all(pending.iter().map(|&i| measurer.measure(i))).await;

    let mut report = MeasureReport {
        requested: pending.len(),
        ..MeasureReport::default()
    };
    for (index, raw) in pending.into_iter().zip(results) {
        let usable = raw.is_some_and(|raw| engine.record_measurement(index, raw));
        if usable {
            report.measured += 1;
        } else {
            report.skipped += 1;
        }
    }
    atrace!(
        measured = report.measured,
        skipped = report.skipped,
        "ensure_measured: done"
    );
    report
}
