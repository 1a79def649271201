use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::INTENSITY_LEVELS;
use crate::error::{EqualizeError, Result};
use crate::histogram::{CumulativeTable, FrequencyTable};

/// Rounding applied to `(L - 1) * cum / N` when building the transfer
/// function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferRounding {
    /// Round up.
    #[default]
    Ceil,
    /// Round half up.
    Nearest,
}

impl TransferRounding {
    /// Rounded `numerator / denominator` in exact integer arithmetic.
    fn divide(self, numerator: u64, denominator: u64) -> u64 {
        match self {
            Self::Ceil => numerator.div_ceil(denominator),
            Self::Nearest => (2 * numerator + denominator) / (2 * denominator),
        }
    }
}

impl std::fmt::Display for TransferRounding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ceil => write!(f, "Ceil"),
            Self::Nearest => write!(f, "Nearest"),
        }
    }
}

/// Old intensity -> new intensity lookup over the 8-bit domain.
///
/// Only values present in the source histogram have an entry; new values
/// lie in `[0, L - 1]` where L is the number of distinct source values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntensityMap {
    table: [Option<u8>; INTENSITY_LEVELS],
    levels: usize,
}

impl IntensityMap {
    /// Build the equalization transfer function from a frequency table.
    ///
    /// `total` is the pixel count N and must match the table's sum.
    pub fn from_frequencies(
        table: &FrequencyTable,
        total: usize,
        rounding: TransferRounding,
    ) -> Result<Self> {
        Self::from_cumulative(&table.cumulative(), total, rounding)
    }

    /// Build the equalization transfer function from running counts.
    ///
    /// Each value maps to `round((L - 1) * cum / N)` clamped to `[0, L - 1]`.
    pub fn from_cumulative(
        cumulative: &CumulativeTable,
        total: usize,
        rounding: TransferRounding,
    ) -> Result<Self> {
        if total == 0 || cumulative.levels() == 0 {
            return Err(EqualizeError::EmptyBuffer);
        }
        if cumulative.total() != total {
            return Err(EqualizeError::InvalidShape(format!(
                "histogram covers {} pixels but the buffer has {total}",
                cumulative.total()
            )));
        }

        let levels = cumulative.levels();
        let top = (levels - 1) as u64;
        let mut table = [None; INTENSITY_LEVELS];

        for (value, cum) in cumulative.iter() {
            let mapped = rounding.divide(top * cum as u64, total as u64).min(top);
            table[value as usize] = Some(mapped as u8);
        }

        debug!(levels, total, %rounding, "Intensity map built");
        Ok(Self { table, levels })
    }

    /// Mapped intensity for `value`, or `None` if it was absent from the
    /// source histogram.
    pub fn get(&self, value: u8) -> Option<u8> {
        self.table[value as usize]
    }

    /// Number of distinct source levels (L).
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Highest level any value maps to (`L - 1`).
    pub fn max_level(&self) -> u8 {
        (self.levels - 1) as u8
    }

    /// `(old, new)` pairs in ascending order of `old`.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.table
            .iter()
            .enumerate()
            .filter_map(|(old, new)| new.map(|n| (old as u8, n)))
    }
}

impl Serialize for IntensityMap {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}
