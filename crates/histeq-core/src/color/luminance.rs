use ndarray::{ArrayView1, Axis, Zip};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    COLOR_CHANNEL_COUNT, LUMINANCE_B, LUMINANCE_G, LUMINANCE_R, MAX_INTENSITY,
    PARALLEL_PIXEL_THRESHOLD,
};
use crate::error::{EqualizeError, Result};
use crate::frame::{ColorFrame, GrayFrame};

/// How a scaled luminance value is brought down to an 8-bit level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quantization {
    /// Drop the fractional part (matches `uint8(gray * 255)`).
    #[default]
    Truncate,
    /// Round half away from zero.
    Round,
}

impl Quantization {
    pub fn quantize(self, scaled: f32) -> u8 {
        let clamped = scaled.clamp(0.0, MAX_INTENSITY as f32);
        match self {
            Self::Truncate => clamped as u8,
            Self::Round => clamped.round() as u8,
        }
    }
}

impl std::fmt::Display for Quantization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Truncate => write!(f, "Truncate"),
            Self::Round => write!(f, "Round"),
        }
    }
}

/// Weighted luminance of normalized channels, still in [0.0, 1.0].
fn weighted_sum(r: f32, g: f32, b: f32) -> f32 {
    LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b
}

/// Convert an RGB frame to an 8-bit intensity frame.
///
/// Each output sample is `quantize((0.30*R + 0.59*G + 0.11*B) * 255)` with
/// the channels taken from `color` as-is (already normalized to [0.0, 1.0]).
///
/// Fails with `InvalidShape` unless the frame has exactly three channels and
/// with `OutOfRangeIntensity` if any channel lies outside [0.0, 1.0].
pub fn to_luminance(color: &ColorFrame, quantization: Quantization) -> Result<GrayFrame> {
    let (h, w, channels) = color.data.dim();
    if channels != COLOR_CHANNEL_COUNT {
        return Err(EqualizeError::InvalidShape(format!(
            "expected {COLOR_CHANNEL_COUNT} channels per pixel, got {channels}"
        )));
    }

    if let Some((i, v)) = color
        .data
        .iter()
        .enumerate()
        .find(|(_, v)| !(0.0..=1.0).contains(*v))
    {
        return Err(EqualizeError::OutOfRangeIntensity {
            value: *v as f64 * MAX_INTENSITY as f64,
            index: i / COLOR_CHANNEL_COUNT,
        });
    }

    let convert = |px: ArrayView1<f32>| {
        let y = weighted_sum(px[0], px[1], px[2]);
        quantization.quantize(y * MAX_INTENSITY as f32)
    };

    let pixels = Zip::from(color.data.lanes(Axis(2)));
    let data = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        pixels.par_map_collect(convert)
    } else {
        pixels.map_collect(convert)
    };

    debug!(height = h, width = w, ?quantization, "Converted color frame to luminance");
    Ok(GrayFrame::new(data))
}
