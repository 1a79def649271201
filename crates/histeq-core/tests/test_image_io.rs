mod common;

use histeq_core::frame::GrayFrame;
use histeq_core::io::image_io::{
    load_image, save_gray_image, save_gray_png, save_gray_tiff, SourceImage,
};
use image::{Rgb, RgbImage};

use common::{ramp_frame, small_frame};

fn expect_gray(source: SourceImage) -> GrayFrame {
    match source {
        SourceImage::Gray(frame) => frame,
        SourceImage::Color(_) => panic!("expected a grayscale source"),
    }
}

#[test]
fn test_png_roundtrip_is_exact() {
    let frame = ramp_frame(16, 16);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ramp.png");

    save_gray_png(&frame, &path).unwrap();
    let loaded = expect_gray(load_image(&path).unwrap());
    assert_eq!(loaded, frame);
}

#[test]
fn test_tiff_roundtrip_is_exact() {
    let frame = small_frame();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.tiff");

    save_gray_tiff(&frame, &path).unwrap();
    let loaded = expect_gray(load_image(&path).unwrap());
    assert_eq!(loaded.data, frame.data);
}

#[test]
fn test_save_gray_image_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["a.png", "b.tif", "c.tiff"] {
        let path = dir.path().join(name);
        save_gray_image(&small_frame(), &path).unwrap();
        assert!(path.exists(), "{name} not written");
    }
}

#[test]
fn test_load_color_image_keeps_channels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rgb.png");
    let mut img = RgbImage::new(3, 2);
    img.put_pixel(2, 1, Rgb([255, 51, 0]));
    img.save(&path).unwrap();

    match load_image(&path).unwrap() {
        SourceImage::Color(color) => {
            assert_eq!(color.data.dim(), (2, 3, 3));
            assert!((color.data[[1, 2, 0]] - 1.0).abs() < 1e-6);
            assert!((color.data[[1, 2, 1]] - 0.2).abs() < 1e-6);
            assert_eq!(color.data[[0, 0, 0]], 0.0);
        }
        SourceImage::Gray(_) => panic!("expected a color source"),
    }
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_image(&dir.path().join("nope.png")).is_err());
}
