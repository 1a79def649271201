use crate::consts::MAX_INTENSITY;
use crate::frame::GrayFrame;

/// Linearly rescale levels `[0, max_level]` to `[0, 255]`, in place.
///
/// A `max_level` of zero leaves the frame unchanged.
pub fn stretch_levels(frame: &mut GrayFrame, max_level: u8) {
    if max_level == 0 || max_level == MAX_INTENSITY {
        return;
    }
    let scale = MAX_INTENSITY as f32 / max_level as f32;
    frame
        .data
        .mapv_inplace(|v| (v.min(max_level) as f32 * scale).round() as u8);
}
