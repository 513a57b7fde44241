use std::{fmt, str::FromStr};

use crate::foundation::error::{GlyphGridError, GlyphGridResult};

/// First character of every record header line.
pub const HEADER_MARKER: char = '>';

/// Default horizontal spacing between glyphs, in pixels.
pub const DEFAULT_HSPACING: u32 = 10;

/// Default vertical spacing between rows, in pixels.
pub const DEFAULT_VSPACING: u32 = 10;

/// Width and height of a glyph or image in pixels.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct GlyphSize {
    pub width: u32,
    pub height: u32,
}

impl GlyphSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self { width, height }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for GlyphSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parses `WxH` (also accepts `W,H`).
impl FromStr for GlyphSize {
    type Err = GlyphGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (w, h) = s
            .split_once(['x', 'X', ','])
            .ok_or_else(|| GlyphGridError::validation(format!("size '{s}' must be WxH")))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|e| GlyphGridError::validation(format!("size '{s}': {e}")))
        };
        Ok(Self::new(parse(w)?, parse(h)?))
    }
}

/// Straight (non-premultiplied) RGBA8 colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8(pub [u8; 4]);

impl Rgba8 {
    pub const WHITE: Self = Self([255, 255, 255, 255]);

    pub fn to_pixel(self) -> image::Rgba<u8> {
        image::Rgba(self.0)
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Parses `RRGGBB` or `RRGGBBAA`, with or without a leading `#`.
impl FromStr for Rgba8 {
    type Err = GlyphGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(GlyphGridError::validation(format!(
                "colour '{s}' must be RRGGBB or RRGGBBAA"
            )));
        }
        let mut out = [255u8; 4];
        for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
            let pair = std::str::from_utf8(chunk)
                .map_err(|e| GlyphGridError::validation(format!("colour '{s}': {e}")))?;
            out[i] = u8::from_str_radix(pair, 16)
                .map_err(|e| GlyphGridError::validation(format!("colour '{s}': {e}")))?;
        }
        Ok(Self(out))
    }
}

/// Computes `count * cell + spacing * (count - 1)`, clamped to 0 for `count == 0`.
pub fn span_len(count: usize, cell: u32, spacing: u32) -> GlyphGridResult<u32> {
    if count == 0 {
        return Ok(0);
    }
    let count = count as u128;
    let total = count * u128::from(cell) + (count - 1) * u128::from(spacing);
    u32::try_from(total)
        .map_err(|_| GlyphGridError::validation(format!("image dimension overflow: {total}px")))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
