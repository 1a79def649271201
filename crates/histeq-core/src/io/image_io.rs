use std::path::Path;

use image::{GrayImage, ImageFormat, RgbImage};
use ndarray::Array3;

use crate::error::{EqualizeError, Result};
use crate::frame::{ColorFrame, GrayFrame};

/// Save a frame as 8-bit grayscale PNG.
pub fn save_gray_png(frame: &GrayFrame, path: &Path) -> Result<()> {
    to_gray_image(frame)?.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a frame as 8-bit grayscale TIFF.
pub fn save_gray_tiff(frame: &GrayFrame, path: &Path) -> Result<()> {
    to_gray_image(frame)?.save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Save frame, choosing format from file extension.
pub fn save_gray_image(frame: &GrayFrame, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tiff" | "tif") => save_gray_tiff(frame, path),
        Some("png") => save_gray_png(frame, path),
        _ => save_gray_png(frame, path),
    }
}

fn color_frame_from(rgb: RgbImage) -> Result<ColorFrame> {
    let (w, h) = rgb.dimensions();
    let data = Array3::from_shape_vec((h as usize, w as usize, 3), rgb.into_raw())
        .map_err(|e| EqualizeError::InvalidShape(e.to_string()))?;
    Ok(ColorFrame::from_rgb8(&data))
}

/// Decoded source image: single-channel files skip luminance conversion.
#[derive(Clone, Debug)]
pub enum SourceImage {
    Gray(GrayFrame),
    Color(ColorFrame),
}

/// Load an image file, keeping grayscale sources as 8-bit intensity frames.
pub fn load_image(path: &Path) -> Result<SourceImage> {
    let img = image::open(path)?;
    if img.color().has_color() {
        return Ok(SourceImage::Color(color_frame_from(img.to_rgb8())?));
    }
    let gray = img.to_luma8();
    let (w, h) = gray.dimensions();
    Ok(SourceImage::Gray(GrayFrame::from_raw(
        h as usize,
        w as usize,
        gray.into_raw(),
    )?))
}

fn to_gray_image(frame: &GrayFrame) -> Result<GrayImage> {
    let (h, w) = frame.data.dim();
    let pixels: Vec<u8> = frame.data.iter().copied().collect();
    GrayImage::from_raw(w as u32, h as u32, pixels).ok_or_else(|| {
        EqualizeError::InvalidShape(format!("cannot encode a {h}x{w} frame"))
    })
}
