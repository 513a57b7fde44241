use super::*;
use crate::glyphs::registry::Glyph;

const BLACK: image::Rgba<u8> = image::Rgba([0, 0, 0, 255]);
const RED: image::Rgba<u8> = image::Rgba([255, 0, 0, 255]);
const WHITE: image::Rgba<u8> = image::Rgba([255, 255, 255, 255]);

fn glyphs_10() -> GlyphSet {
    GlyphSet::from_images([
        ('A', image::RgbaImage::from_pixel(10, 10, BLACK)),
        ('C', image::RgbaImage::from_pixel(10, 10, RED)),
        ('-', image::RgbaImage::from_pixel(10, 10, image::Rgba([0, 0, 255, 128]))),
    ])
}

#[test]
fn row_without_spacing_is_tightly_packed() {
    let row = render_row(&Record::new(">s1", "AC"), &glyphs_10(), 0).unwrap();
    assert_eq!(row.dimensions(), (20, 10));
    assert_eq!(*row.get_pixel(0, 0), BLACK);
    assert_eq!(*row.get_pixel(9, 9), BLACK);
    assert_eq!(*row.get_pixel(10, 0), RED);
    assert_eq!(*row.get_pixel(19, 9), RED);
}

#[test]
fn row_width_follows_spacing_formula() {
    let glyphs = glyphs_10();
    for (seq, hspacing, width) in [("A", 10, 10), ("ACA", 0, 30), ("ACA", 10, 50), ("AC-C", 3, 49)] {
        let row = render_row(&Record::new(">x", seq), &glyphs, hspacing).unwrap();
        assert_eq!(row.dimensions(), (width, 10), "{seq} with spacing {hspacing}");
    }
}

#[test]
fn spacing_gap_keeps_background() {
    let row = render_row(&Record::new(">x", "AC"), &glyphs_10(), 10).unwrap();
    assert_eq!(row.dimensions(), (30, 10));
    assert_eq!(*row.get_pixel(10, 5), WHITE);
    assert_eq!(*row.get_pixel(19, 5), WHITE);
    assert_eq!(*row.get_pixel(20, 5), RED);
}

#[test]
fn glyph_pixels_replace_background_including_alpha() {
    let row = render_row(&Record::new(">x", "-"), &glyphs_10(), 0).unwrap();
    assert_eq!(row.get_pixel(0, 0).0, [0, 0, 255, 128]);
}

#[test]
fn custom_background_fills_gaps() {
    let glyphs = glyphs_10();
    let renderer = RowRenderer::new(&glyphs, 5, Rgba8([1, 2, 3, 4])).unwrap();
    let row = renderer.render(&Record::new(">x", "AA")).unwrap();
    assert_eq!(row.get_pixel(12, 0).0, [1, 2, 3, 4]);
}

#[test]
fn empty_sequence_gives_zero_width_row() {
    let row = render_row(&Record::new(">x", ""), &glyphs_10(), 10).unwrap();
    assert_eq!(row.dimensions(), (0, 10));
}

#[test]
fn symbol_outside_alphabet_is_missing_glyph() {
    let err = render_row(&Record::new(">bad", "AZC"), &glyphs_10(), 0).unwrap_err();
    match err {
        GlyphGridError::MissingGlyph { symbol, label } => {
            assert_eq!(symbol, 'Z');
            assert_eq!(label, ">bad");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn absent_glyph_is_missing_glyph() {
    let mut glyphs = glyphs_10();
    glyphs.insert('D', Glyph::Absent);
    let err = render_row(&Record::new(">s", "AD"), &glyphs, 0).unwrap_err();
    assert!(matches!(err, GlyphGridError::MissingGlyph { symbol: 'D', .. }));
}

#[test]
fn mixed_glyph_sizes_fail_before_rendering() {
    let mut glyphs = glyphs_10();
    glyphs.insert('D', Glyph::Present(image::RgbaImage::new(8, 10)));
    let err = RowRenderer::new(&glyphs, 0, Rgba8::default()).unwrap_err();
    assert!(matches!(err, GlyphGridError::InconsistentGlyphSize { symbol: 'D', .. }));
}

#[test]
fn render_rows_preserves_order() {
    let records = vec![Record::new(">a", "ACA"), Record::new(">b", "AC")];
    let rows = render_rows(&records, &glyphs_10(), 0, Rgba8::default()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].dimensions(), (30, 10));
    assert_eq!(rows[1].dimensions(), (20, 10));
    assert_ne!(rows[0], rows[1]);
}

#[test]
fn rendering_is_deterministic() {
    let glyphs = glyphs_10();
    let record = Record::new(">x", "AC-CA");
    let a = render_row(&record, &glyphs, 4).unwrap();
    let b = render_row(&record, &glyphs, 4).unwrap();
    assert_eq!(a, b);
}

#[test]
fn row_size_matches_rendered_row() {
    let glyphs = glyphs_10();
    let renderer = RowRenderer::new(&glyphs, 3, Rgba8::default()).unwrap();
    assert_eq!(renderer.row_size(0).unwrap(), GlyphSize::new(0, 10));
    assert_eq!(renderer.row_size(4).unwrap(), GlyphSize::new(49, 10));
    let row = renderer.render(&Record::new(">x", "AC-C")).unwrap();
    assert_eq!(GlyphSize::of(&row), renderer.row_size(4).unwrap());
}
