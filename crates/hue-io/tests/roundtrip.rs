//! File round trips through the format-dispatching entry points.

use hue_core::RgbaImage;
use hue_io::{Format, read, write, write_with_quality};

fn checker(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| {
        if (x / 4 + y / 4) % 2 == 0 {
            [240, 30, 30, 255]
        } else {
            [20, 20, 220, 0]
        }
    })
}

#[test]
fn png_file_roundtrip_is_exact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checker.png");
    let image = checker(32, 24);

    write(&path, &image).unwrap();
    assert_eq!(Format::detect(&path).unwrap(), Format::Png);
    assert_eq!(read(&path).unwrap(), image);
}

#[test]
fn jpeg_file_roundtrip_is_opaque() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flat.jpeg");
    let image = RgbaImage::filled(24, 16, [90, 160, 30, 40]);

    write_with_quality(&path, &image, Some(95)).unwrap();
    assert_eq!(Format::detect(&path).unwrap(), Format::Jpeg);

    let loaded = read(&path).unwrap();
    assert_eq!(loaded.dimensions(), (24, 16));
    assert!(loaded.pixels().all(|(_, _, px)| px[3] == 255));
}

#[test]
fn read_trusts_content_over_extension() {
    let dir = tempfile::tempdir().unwrap();
    let png_path = dir.path().join("real.png");
    let image = checker(8, 8);
    write(&png_path, &image).unwrap();

    let renamed = dir.path().join("renamed.jpg");
    std::fs::rename(&png_path, &renamed).unwrap();
    assert_eq!(read(&renamed).unwrap(), image);
}
