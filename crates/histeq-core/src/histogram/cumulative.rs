use serde::Serialize;

use crate::error::{EqualizeError, Result};

use super::frequency::FrequencyTable;

/// Running sum of a frequency table, parallel to its values.
///
/// Non-decreasing; the last entry equals the pixel count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CumulativeTable {
    values: Vec<u8>,
    cumulative: Vec<usize>,
}

impl CumulativeTable {
    pub fn from_frequencies(table: &FrequencyTable) -> Self {
        let cumulative = table
            .counts()
            .iter()
            .scan(0usize, |cum, &c| {
                *cum += c;
                Some(*cum)
            })
            .collect();
        Self {
            values: table.values().to_vec(),
            cumulative,
        }
    }

    /// Build a table from `(value, running_count)` pairs.
    ///
    /// Values must be strictly ascending and the running counts must never
    /// decrease.
    pub fn from_pairs(pairs: &[(u8, usize)]) -> Result<Self> {
        if pairs.is_empty() {
            return Err(EqualizeError::EmptyBuffer);
        }
        for window in pairs.windows(2) {
            let ((v0, c0), (v1, c1)) = (window[0], window[1]);
            if v0 >= v1 {
                return Err(EqualizeError::InvalidShape(format!(
                    "intensity values not strictly ascending: {v0} then {v1}"
                )));
            }
            if c1 < c0 {
                return Err(EqualizeError::InvalidShape(format!(
                    "cumulative count drops from {c0} to {c1} at intensity {v1}"
                )));
            }
        }

        Ok(Self {
            values: pairs.iter().map(|&(v, _)| v).collect(),
            cumulative: pairs.iter().map(|&(_, c)| c).collect(),
        })
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn cumulative(&self) -> &[usize] {
        &self.cumulative
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.values
            .iter()
            .copied()
            .zip(self.cumulative.iter().copied())
    }

    pub fn levels(&self) -> usize {
        self.values.len()
    }

    /// Final running count, i.e. the pixel count.
    pub fn total(&self) -> usize {
        self.cumulative.last().copied().unwrap_or(0)
    }

    pub fn is_monotonic(&self) -> bool {
        self.cumulative.windows(2).all(|w| w[0] <= w[1])
    }

    /// `(value, cum / N)` pairs: the empirical CDF.
    pub fn normalized(&self) -> Vec<(u8, f64)> {
        let total = self.total().max(1) as f64;
        self.iter().map(|(v, c)| (v, c as f64 / total)).collect()
    }

    /// End points of the diagonal a perfectly uniform distribution would
    /// follow: `(min_value, 0.0)` to `(max_value, 1.0)`.
    pub fn reference_line(&self) -> Option<[(f64, f64); 2]> {
        let min = *self.values.first()?;
        let max = *self.values.last()?;
        Some([(min as f64, 0.0), (max as f64, 1.0)])
    }
}
