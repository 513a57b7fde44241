use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GlyphGridError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GlyphGridError::malformed(">s1", "empty sequence")
            .to_string()
            .contains("malformed input in record '>s1'")
    );
    assert_eq!(
        GlyphGridError::EmptyComposition.to_string(),
        "cannot compose a canvas from zero rows"
    );
}

#[test]
fn missing_glyph_names_symbol_and_record() {
    let msg = GlyphGridError::missing_glyph('Z', ">seq_name1").to_string();
    assert!(msg.contains("'Z'"));
    assert!(msg.contains(">seq_name1"));
}

#[test]
fn inconsistent_size_reports_both_sizes() {
    let err = GlyphGridError::InconsistentGlyphSize {
        symbol: 'C',
        expected: GlyphSize::new(10, 10),
        found: GlyphSize::new(12, 10),
    };
    let msg = err.to_string();
    assert!(msg.contains("'C'"));
    assert!(msg.contains("12x10"));
    assert!(msg.contains("10x10"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GlyphGridError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
