use ndarray::{Array2, Array3};
use num_traits::ToPrimitive;

use crate::consts::MAX_INTENSITY;
use crate::error::{EqualizeError, Result};

/// A single-channel 8-bit intensity image.
#[derive(Clone, Debug, PartialEq)]
pub struct GrayFrame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<u8>,
}

impl GrayFrame {
    pub fn new(data: Array2<u8>) -> Self {
        Self { data }
    }

    /// Build a frame from a row-major sample buffer.
    pub fn from_raw(height: usize, width: usize, pixels: Vec<u8>) -> Result<Self> {
        let len = pixels.len();
        let data = Array2::from_shape_vec((height, width), pixels).map_err(|_| {
            EqualizeError::InvalidShape(format!(
                "{len} samples do not fill a {height}x{width} buffer"
            ))
        })?;
        Ok(Self { data })
    }

    /// Build a frame from arbitrary numeric samples, rejecting anything that
    /// is not an integer in [0, 255].
    pub fn from_samples<T: ToPrimitive>(
        height: usize,
        width: usize,
        samples: &[T],
    ) -> Result<Self> {
        if samples.len() != height * width {
            return Err(EqualizeError::InvalidShape(format!(
                "{} samples do not fill a {height}x{width} buffer",
                samples.len()
            )));
        }

        let pixels = samples
            .iter()
            .enumerate()
            .map(|(index, s)| {
                let value = s.to_f64().unwrap_or(f64::NAN);
                if value.fract() != 0.0 || !(0.0..=MAX_INTENSITY as f64).contains(&value) {
                    return Err(EqualizeError::OutOfRangeIntensity { value, index });
                }
                Ok(value as u8)
            })
            .collect::<Result<Vec<u8>>>()?;

        Self::from_raw(height, width, pixels)
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Total number of pixels (H*W).
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Color image with interleaved channels normalized to [0.0, 1.0].
#[derive(Clone, Debug)]
pub struct ColorFrame {
    /// Channel data, shape = (height, width, channels)
    pub data: Array3<f32>,
}

impl ColorFrame {
    pub fn new(data: Array3<f32>) -> Self {
        Self { data }
    }

    /// Build a color frame from 8-bit samples, normalizing each channel by 255.
    pub fn from_rgb8(data: &Array3<u8>) -> Self {
        Self {
            data: data.mapv(|v| v as f32 / MAX_INTENSITY as f32),
        }
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }
}
