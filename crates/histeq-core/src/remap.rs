use tracing::debug;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{EqualizeError, Result};
use crate::frame::GrayFrame;
use crate::mapping::IntensityMap;

/// Replace every pixel with its mapped intensity, in place.
///
/// The whole frame is checked against `map` before any pixel is written, so
/// on `MissingMapping` the frame is left untouched. An empty frame fails
/// with `EmptyBuffer`.
pub fn remap(frame: &mut GrayFrame, map: &IntensityMap) -> Result<()> {
    if frame.is_empty() {
        return Err(EqualizeError::EmptyBuffer);
    }

    if let Some(((row, col), &value)) = frame
        .data
        .indexed_iter()
        .find(|(_, v)| map.get(**v).is_none())
    {
        return Err(EqualizeError::MissingMapping { value, row, col });
    }

    // Every pixel has an entry now; the fallback is never taken.
    let lookup = |v: u8| map.get(v).unwrap_or(v);
    if frame.pixel_count() >= PARALLEL_PIXEL_THRESHOLD {
        frame.data.par_mapv_inplace(lookup);
    } else {
        frame.data.mapv_inplace(lookup);
    }

    debug!(pixels = frame.pixel_count(), "Frame remapped");
    Ok(())
}
