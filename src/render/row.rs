use crate::{
    foundation::{
        core::{GlyphSize, Rgba8, span_len},
        error::{GlyphGridError, GlyphGridResult},
    },
    glyphs::registry::GlyphSet,
    sequence::record::Record,
};

/// Renders records into single-row images with one glyph per symbol.
///
/// Construction checks that every present glyph shares one size, so rendering never has to
/// guess the cell size from an arbitrary entry.
#[derive(Clone, Debug)]
pub struct RowRenderer<'a> {
    glyphs: &'a GlyphSet,
    cell: Option<GlyphSize>,
    hspacing: u32,
    background: Rgba8,
}

impl<'a> RowRenderer<'a> {
    pub fn new(glyphs: &'a GlyphSet, hspacing: u32, background: Rgba8) -> GlyphGridResult<Self> {
        let cell = glyphs.uniform_size()?;
        Ok(Self {
            glyphs,
            cell,
            hspacing,
            background,
        })
    }

    /// Row dimensions for a sequence of `len` symbols.
    pub fn row_size(&self, len: usize) -> GlyphGridResult<GlyphSize> {
        let cell = self.cell.unwrap_or(GlyphSize::new(0, 0));
        Ok(GlyphSize::new(
            span_len(len, cell.width, self.hspacing)?,
            cell.height,
        ))
    }

    /// Render one record, placing glyphs left to right at `i * (glyph_width + hspacing)`.
    ///
    /// Every symbol is resolved before any pixel is written; the first one without a present
    /// glyph fails the whole row with [`GlyphGridError::MissingGlyph`].
    pub fn render(&self, record: &Record) -> GlyphGridResult<image::RgbaImage> {
        let glyphs = record
            .sequence()
            .chars()
            .map(|symbol| {
                self.glyphs
                    .image(symbol)
                    .ok_or_else(|| GlyphGridError::missing_glyph(symbol, record.label()))
            })
            .collect::<GlyphGridResult<Vec<_>>>()?;

        let size = self.row_size(glyphs.len())?;
        let mut row =
            image::RgbaImage::from_pixel(size.width, size.height, self.background.to_pixel());

        let step = i64::from(self.cell.map_or(0, |c| c.width)) + i64::from(self.hspacing);
        for (i, glyph) in glyphs.into_iter().enumerate() {
            image::imageops::replace(&mut row, glyph, i as i64 * step, 0);
        }

        tracing::debug!(
            label = record.label(),
            width = size.width,
            height = size.height,
            "rendered row"
        );
        Ok(row)
    }
}

/// Render one record on a white background. See [`RowRenderer::render`].
pub fn render_row(
    record: &Record,
    glyphs: &GlyphSet,
    hspacing: u32,
) -> GlyphGridResult<image::RgbaImage> {
    RowRenderer::new(glyphs, hspacing, Rgba8::default())?.render(record)
}

/// Render every record in order, one row image each.
pub fn render_rows(
    records: &[Record],
    glyphs: &GlyphSet,
    hspacing: u32,
    background: Rgba8,
) -> GlyphGridResult<Vec<image::RgbaImage>> {
    let renderer = RowRenderer::new(glyphs, hspacing, background)?;
    records.iter().map(|r| renderer.render(r)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/row.rs"]
mod tests;
