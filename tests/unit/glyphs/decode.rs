use std::io::Cursor;

use super::*;

fn png_bytes(img: &image::RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img.clone())
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_raster_png_keeps_straight_alpha() {
    let img = image::RgbaImage::from_raw(1, 1, vec![100u8, 50u8, 200u8, 128u8]).unwrap();
    let decoded = decode_raster(&png_bytes(&img)).unwrap();
    assert_eq!(decoded.dimensions(), (1, 1));
    assert_eq!(decoded.as_raw().as_slice(), &[100, 50, 200, 128]);
}

#[test]
fn decode_raster_rejects_garbage() {
    assert!(decode_raster(b"not an image").is_err());
}

#[test]
fn rasterize_svg_uses_intrinsic_size() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="6">
        <rect x="0" y="0" width="8" height="6" fill="#ff0000"/>
    </svg>"##;
    let img = rasterize_svg(svg).unwrap();
    assert_eq!(img.dimensions(), (8, 6));
    assert_eq!(img.get_pixel(4, 3).0, [255, 0, 0, 255]);
}

#[test]
fn rasterize_svg_rejects_bad_document() {
    assert!(rasterize_svg(b"<svg").is_err());
}

#[test]
fn unpremultiply_restores_colour() {
    let mut px = [64u8, 0, 128, 128, 10, 20, 30, 0, 1, 2, 3, 255];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..4], &[128, 0, 255, 128]);
    assert_eq!(&px[4..8], &[10, 20, 30, 0]);
    assert_eq!(&px[8..], &[1, 2, 3, 255]);
}

#[test]
fn load_glyph_file_reads_png_and_reports_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("A.png");
    let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 0, 255]));
    std::fs::write(&path, png_bytes(&img)).unwrap();

    assert_eq!(load_glyph_file(&path).unwrap(), img);

    let err = load_glyph_file(&dir.path().join("C.png")).unwrap_err();
    assert!(err.to_string().contains("C.png"));
}
