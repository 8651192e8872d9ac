use alloc::collections::BTreeMap;

use crate::ItemMeasure;
use crate::types::{floor_px, round_px};

/// Sparse map from absolute list-space pixel to item index.
///
/// Every pixel of a measured row's `[start, end]` span maps to that row. Overlapping writes
/// overwrite in write order, so the most recent measurement wins a shared boundary pixel.
#[derive(Clone, Debug, Default)]
pub struct PixelIndexMap {
    pixels: BTreeMap<i64, usize>,
    min_offset: Option<i64>,
    max_offset: Option<i64>,
}

impl PixelIndexMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Smallest pixel ever stamped.
    pub fn min_offset(&self) -> Option<i64> {
        self.min_offset
    }

    /// Largest pixel ever stamped.
    pub fn max_offset(&self) -> Option<i64> {
        self.max_offset
    }

    pub fn lookup(&self, pixel: i64) -> Option<usize> {
        self.pixels.get(&pixel).copied()
    }

    /// Stamps `index` onto `[floor(start), round(end)]` and widens the observed bounds.
    pub fn stamp(&mut self, start: f64, end: f64, index: usize) {
        let min = floor_px(start);
        let max = round_px(end);
        self.min_offset = Some(self.min_offset.map_or(min, |cur| cur.min(min)));
        self.max_offset = Some(self.max_offset.map_or(max, |cur| cur.max(max)));
        for px in min..=max {
            self.pixels.insert(px, index);
        }
    }

    /// First mapped pixel at or after `from`, not going past `until`.
    pub fn first_at_or_after(&self, from: i64, until: i64) -> Option<(i64, usize)> {
        if from > until {
            return None;
        }
        self.pixels
            .range(from..=until)
            .next()
            .map(|(px, index)| (*px, *index))
    }

    /// Last mapped pixel at or before `from`, not going past `until`.
    pub fn last_at_or_before(&self, from: i64, until: i64) -> Option<(i64, usize)> {
        if from < until {
            return None;
        }
        self.pixels
            .range(until..=from)
            .next_back()
            .map(|(px, index)| (*px, *index))
    }

    pub fn clear(&mut self) {
        self.pixels.clear();
        self.min_offset = None;
        self.max_offset = None;
    }
}

/// Measured row geometry plus the pixel → index lookup built from it.
///
/// Entries are only ever inserted or overwritten. When the owner replaces the item sequence the
/// whole cache must be [`reset`](Self::reset), since indexes no longer refer to the same rows.
#[derive(Clone, Debug, Default)]
pub struct GeometryCache {
    measures: BTreeMap<usize, ItemMeasure>,
    pixels: PixelIndexMap,
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `measure` for `index`; usable measurements are also stamped into the pixel map.
    ///
    /// Returns `true` when the measurement was usable.
    pub fn record_measurement(
        &mut self,
        index: usize,
        measure: ItemMeasure,
        scroll_offset: f64,
    ) -> bool {
        self.measures.insert(index, measure);

        if !measure.is_measured {
            return false;
        }
        let start = measure.list_start(scroll_offset);
        let end = measure.list_end(scroll_offset);
        if !start.is_finite() || !end.is_finite() || end < start {
            rwarn!(index, start, end, "GeometryCache: unusable span");
            return false;
        }
        rtrace!(index, start, end, "GeometryCache::record_measurement");
        self.pixels.stamp(start, end, index);
        true
    }

    pub fn lookup(&self, pixel: i64) -> Option<usize> {
        self.pixels.lookup(pixel)
    }

    pub fn measure(&self, index: usize) -> Option<&ItemMeasure> {
        self.measures.get(&index)
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.measure(index).is_some_and(|m| m.is_measured)
    }

    /// Number of rows with a usable measurement.
    pub fn measured_len(&self) -> usize {
        self.measures.values().filter(|m| m.is_measured).count()
    }

    pub fn min_offset(&self) -> Option<i64> {
        self.pixels.min_offset()
    }

    pub fn max_offset(&self) -> Option<i64> {
        self.pixels.max_offset()
    }

    pub fn pixel_map(&self) -> &PixelIndexMap {
        &self.pixels
    }

    pub fn reset(&mut self) {
        self.measures.clear();
        self.pixels.clear();
    }
}
