use crate::foundation::{
    core::{GlyphSize, Rgba8, span_len},
    error::{GlyphGridError, GlyphGridResult},
};

/// Widest row width and tallest row height.
fn max_dims(rows: &[image::RgbaImage]) -> GlyphGridResult<GlyphSize> {
    if rows.is_empty() {
        return Err(GlyphGridError::EmptyComposition);
    }
    Ok(rows.iter().fold(GlyphSize::new(0, 0), |acc, r| {
        GlyphSize::new(acc.width.max(r.width()), acc.height.max(r.height()))
    }))
}

fn stacked_size(rows: usize, cell: GlyphSize, vspacing: u32) -> GlyphGridResult<GlyphSize> {
    Ok(GlyphSize::new(cell.width, span_len(rows, cell.height, vspacing)?))
}

/// Canvas size for `rows` stacked with `vspacing` pixels between them.
///
/// Width is the widest row; height is `n * max_height + vspacing * (n - 1)`.
pub fn canvas_size(rows: &[image::RgbaImage], vspacing: u32) -> GlyphGridResult<GlyphSize> {
    stacked_size(rows.len(), max_dims(rows)?, vspacing)
}

/// Stack rows top to bottom into one canvas.
///
/// Row `i` is pasted at `(0, i * (max_height + vspacing))`; anything a row does not cover
/// keeps the background colour.
pub fn compose_rows(
    rows: &[image::RgbaImage],
    vspacing: u32,
    background: Rgba8,
) -> GlyphGridResult<image::RgbaImage> {
    let cell = max_dims(rows)?;
    let size = stacked_size(rows.len(), cell, vspacing)?;
    let mut canvas =
        image::RgbaImage::from_pixel(size.width, size.height, background.to_pixel());

    let step = i64::from(cell.height) + i64::from(vspacing);
    for (i, row) in rows.iter().enumerate() {
        image::imageops::replace(&mut canvas, row, 0, i as i64 * step);
    }

    tracing::debug!(rows = rows.len(), %size, "composed canvas");
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
