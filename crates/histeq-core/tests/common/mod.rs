#![allow(dead_code)]

use histeq_core::frame::{ColorFrame, GrayFrame};
use ndarray::{Array2, Array3};

/// The 2x2 frame [[10, 10], [20, 30]].
pub fn small_frame() -> GrayFrame {
    GrayFrame::new(ndarray::array![[10u8, 10], [20, 30]])
}

pub fn uniform_frame(h: usize, w: usize, value: u8) -> GrayFrame {
    GrayFrame::new(Array2::from_elem((h, w), value))
}

/// Frame whose pixels cycle through 0..=255 in row-major order.
pub fn ramp_frame(h: usize, w: usize) -> GrayFrame {
    GrayFrame::new(Array2::from_shape_fn((h, w), |(row, col)| {
        ((row * w + col) % 256) as u8
    }))
}

/// Low-contrast frame using only intensities 100..100+levels.
pub fn banded_frame(h: usize, w: usize, levels: usize) -> GrayFrame {
    GrayFrame::new(Array2::from_shape_fn((h, w), |(row, col)| {
        (100 + (row * w + col) % levels) as u8
    }))
}

/// Color frame filled with a single 8-bit RGB triple.
pub fn rgb8_frame(h: usize, w: usize, rgb: [u8; 3]) -> ColorFrame {
    let data = Array3::from_shape_fn((h, w, 3), |(_, _, c)| rgb[c]);
    ColorFrame::from_rgb8(&data)
}
