use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{GlyphGridError, GlyphGridResult};

/// Largest SVG glyph edge we are willing to rasterize.
const MAX_SVG_DIM: u32 = 16_384;

/// Read and decode one glyph file into straight RGBA8.
///
/// `.svg` files are rasterized at their intrinsic size; everything else goes through the
/// `image` decoders. The file handle is released before decoding starts.
pub fn load_glyph_file(path: &Path) -> GlyphGridResult<image::RgbaImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read glyph '{}'", path.display()))?;
    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    let decoded = if is_svg {
        rasterize_svg(&bytes)
    } else {
        decode_raster(&bytes)
    };
    decoded.map_err(|e| {
        GlyphGridError::Other(anyhow::anyhow!("decode glyph '{}': {e}", path.display()))
    })
}

/// Decode PNG/JPEG/... bytes into straight RGBA8.
pub fn decode_raster(bytes: &[u8]) -> GlyphGridResult<image::RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode glyph image from memory")?;
    Ok(dyn_img.to_rgba8())
}

/// Parse SVG bytes and rasterize them at the document's own size.
pub fn rasterize_svg(bytes: &[u8]) -> GlyphGridResult<image::RgbaImage> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;

    let size = tree.size();
    let to_px = |v: f32| -> GlyphGridResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(GlyphGridError::validation("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    };
    let width = to_px(size.width())?;
    let height = to_px(size.height())?;
    if width > MAX_SVG_DIM || height > MAX_SVG_DIM {
        return Err(GlyphGridError::validation(format!(
            "svg raster size too large: {width}x{height} (max {MAX_SVG_DIM}x{MAX_SVG_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| GlyphGridError::validation("failed to allocate svg pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let mut rgba = pixmap.data().to_vec();
    unpremultiply_rgba8_in_place(&mut rgba);
    image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| GlyphGridError::validation("svg pixmap has unexpected length"))
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyphs/decode.rs"]
mod tests;
