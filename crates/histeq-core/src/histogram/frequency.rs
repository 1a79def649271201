use ndarray::Array2;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::consts::{HISTOGRAM_CHUNK_SIZE, INTENSITY_LEVELS, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{EqualizeError, Result};
use crate::frame::GrayFrame;

use super::cumulative::CumulativeTable;

/// Distinct intensity values of a frame and how often each occurs.
///
/// Values are unique and sorted ascending; `values` and `counts` are
/// parallel. Every count is at least one, and the counts sum to the pixel
/// count of the analyzed frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    values: Vec<u8>,
    counts: Vec<usize>,
}

impl FrequencyTable {
    /// Build a table from `(value, count)` pairs.
    ///
    /// Pairs must be strictly ascending by value with non-zero counts.
    pub fn from_pairs(pairs: &[(u8, usize)]) -> Result<Self> {
        if pairs.is_empty() {
            return Err(EqualizeError::EmptyBuffer);
        }
        for window in pairs.windows(2) {
            if window[0].0 >= window[1].0 {
                return Err(EqualizeError::InvalidShape(format!(
                    "intensity values not strictly ascending: {} then {}",
                    window[0].0, window[1].0
                )));
            }
        }
        if let Some(&(value, _)) = pairs.iter().find(|(_, c)| *c == 0) {
            return Err(EqualizeError::InvalidShape(format!(
                "intensity {value} listed with zero occurrences"
            )));
        }

        Ok(Self {
            values: pairs.iter().map(|&(v, _)| v).collect(),
            counts: pairs.iter().map(|&(_, c)| c).collect(),
        })
    }

    fn from_bins(bins: &[usize; INTENSITY_LEVELS]) -> Self {
        let (values, counts) = bins
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .map(|(v, &c)| (v as u8, c))
            .unzip();
        Self { values, counts }
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Iterate `(value, count)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.values.iter().copied().zip(self.counts.iter().copied())
    }

    /// Number of distinct intensity values (L).
    pub fn levels(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all counts (N).
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn min_value(&self) -> Option<u8> {
        self.values.first().copied()
    }

    pub fn max_value(&self) -> Option<u8> {
        self.values.last().copied()
    }

    /// Occurrence count of `value`, if present.
    pub fn count_of(&self, value: u8) -> Option<usize> {
        self.values
            .binary_search(&value)
            .ok()
            .map(|i| self.counts[i])
    }

    /// `(value, count / N)` pairs, for plotting.
    pub fn normalized(&self) -> Vec<(u8, f64)> {
        let total = self.total().max(1) as f64;
        self.iter().map(|(v, c)| (v, c as f64 / total)).collect()
    }

    /// Running sums of the counts.
    pub fn cumulative(&self) -> CumulativeTable {
        CumulativeTable::from_frequencies(self)
    }
}

/// Count the occurrences of every intensity present in `frame`.
///
/// Fails with `EmptyBuffer` for a frame with no pixels.
pub fn analyze(frame: &GrayFrame) -> Result<FrequencyTable> {
    if frame.is_empty() {
        return Err(EqualizeError::EmptyBuffer);
    }

    let bins = count_intensities(&frame.data);
    let table = FrequencyTable::from_bins(&bins);
    debug!(
        pixels = frame.pixel_count(),
        levels = table.levels(),
        "Frequency table computed"
    );
    Ok(table)
}

fn count_intensities(data: &Array2<u8>) -> [usize; INTENSITY_LEVELS] {
    match data.as_slice_memory_order() {
        Some(pixels) if pixels.len() >= PARALLEL_PIXEL_THRESHOLD => pixels
            .par_chunks(HISTOGRAM_CHUNK_SIZE)
            .fold(
                || [0usize; INTENSITY_LEVELS],
                |mut local, chunk| {
                    for &px in chunk {
                        local[px as usize] += 1;
                    }
                    local
                },
            )
            .reduce(
                || [0usize; INTENSITY_LEVELS],
                |mut a, b| {
                    for (acc, count) in a.iter_mut().zip(b.iter()) {
                        *acc += count;
                    }
                    a
                },
            ),
        _ => {
            let mut bins = [0usize; INTENSITY_LEVELS];
            for &px in data {
                bins[px as usize] += 1;
            }
            bins
        }
    }
}
