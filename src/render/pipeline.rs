use std::path::Path;

use crate::{
    alphabet::Alphabet,
    config::RenderConfig,
    foundation::{core::GlyphSize, error::GlyphGridResult},
    glyphs::registry::GlyphSet,
    render::{compose::compose_rows, row::render_rows},
    sequence::{parse::read_records_file, record::Record},
};

/// Render parsed records into one aligned canvas.
///
/// Pipeline:
/// 1. [`render_rows`](crate::render_rows): one row per record, `config.hspacing` apart
/// 2. [`compose_rows`](crate::compose_rows): rows stacked `config.vspacing` apart
///
/// `glyphs` is used as given; resizing is the caller's choice (see [`prepare_glyphs`]).
/// Any missing glyph aborts the render; there is no partial output.
#[tracing::instrument(skip_all, fields(records = records.len()))]
pub fn render_alignment(
    records: &[Record],
    glyphs: &GlyphSet,
    config: &RenderConfig,
) -> GlyphGridResult<image::RgbaImage> {
    let rows = render_rows(records, glyphs, config.hspacing, config.background)?;
    let canvas = compose_rows(&rows, config.vspacing, config.background)?;
    tracing::info!(size = %GlyphSize::of(&canvas), "rendered alignment");
    Ok(canvas)
}

/// Load glyphs for `alphabet` from `glyph_dir` and apply `config.resize` if set.
pub fn prepare_glyphs(
    glyph_dir: &Path,
    alphabet: &Alphabet,
    config: &RenderConfig,
) -> GlyphGridResult<GlyphSet> {
    config.validate()?;
    let glyphs = GlyphSet::load_dir(glyph_dir, alphabet, config.extension());
    match config.resize {
        Some(size) => glyphs.resized(size, config.filter),
        None => Ok(glyphs),
    }
}

/// Full file-based pipeline: load glyphs, parse `input`, render.
///
/// Records are not format-checked here; call
/// [`check_records`](crate::check_records) first when malformed input should be rejected.
#[tracing::instrument(skip(alphabet, config))]
pub fn render_alignment_files(
    input: &Path,
    glyph_dir: &Path,
    alphabet: &Alphabet,
    config: &RenderConfig,
) -> GlyphGridResult<image::RgbaImage> {
    let glyphs = prepare_glyphs(glyph_dir, alphabet, config)?;
    let records = read_records_file(input)?;
    render_alignment(&records, &glyphs, config)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
