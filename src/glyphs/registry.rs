use std::{collections::BTreeMap, path::Path};

use crate::{
    alphabet::Alphabet,
    config::ResizeFilter,
    foundation::{
        core::GlyphSize,
        error::{GlyphGridError, GlyphGridResult},
    },
    glyphs::decode::load_glyph_file,
};

/// Glyph slot for one symbol: either a loaded bitmap or explicitly absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Present(image::RgbaImage),
    Absent,
}

impl Glyph {
    pub fn image(&self) -> Option<&image::RgbaImage> {
        match self {
            Self::Present(img) => Some(img),
            Self::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn size(&self) -> Option<GlyphSize> {
        self.image().map(GlyphSize::of)
    }
}

/// Per-symbol glyph mapping used for one render.
///
/// Iteration order is by symbol, so every operation over the set is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphSet {
    entries: BTreeMap<char, Glyph>,
}

impl GlyphSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set where every given symbol is present.
    pub fn from_images<I>(images: I) -> Self
    where
        I: IntoIterator<Item = (char, image::RgbaImage)>,
    {
        Self {
            entries: images
                .into_iter()
                .map(|(symbol, img)| (symbol, Glyph::Present(img)))
                .collect(),
        }
    }

    /// Load `<symbol>.<extension>` from `dir` for every symbol of `alphabet`.
    ///
    /// A missing or undecodable file marks that symbol [`Glyph::Absent`] instead of failing the
    /// load; rendering a sequence that uses it fails later with a missing-glyph error.
    #[tracing::instrument(skip(alphabet), fields(symbols = alphabet.len()))]
    pub fn load_dir(dir: &Path, alphabet: &Alphabet, extension: &str) -> Self {
        let extension = extension.trim_start_matches('.');
        let mut out = Self::new();
        for &symbol in alphabet.symbols() {
            let path = dir.join(format!("{symbol}.{extension}"));
            let glyph = match load_glyph_file(&path) {
                Ok(img) => Glyph::Present(img),
                Err(e) => {
                    tracing::debug!(%symbol, error = %e, "glyph unavailable, marking absent");
                    Glyph::Absent
                }
            };
            out.insert(symbol, glyph);
        }

        let present = out.present_symbols().count();
        if present == 0 {
            tracing::warn!(dir = %dir.display(), "no glyphs could be loaded");
        } else {
            tracing::debug!(present, absent = alphabet.len() - present, "loaded glyphs");
        }
        out
    }

    pub fn insert(&mut self, symbol: char, glyph: Glyph) {
        self.entries.insert(symbol, glyph);
    }

    pub fn get(&self, symbol: char) -> Option<&Glyph> {
        self.entries.get(&symbol)
    }

    /// The bitmap for `symbol`, or `None` when it is absent or not in the set at all.
    pub fn image(&self, symbol: char) -> Option<&image::RgbaImage> {
        self.get(symbol).and_then(Glyph::image)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &Glyph)> {
        self.entries.iter().map(|(&c, g)| (c, g))
    }

    pub fn present_symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.iter().filter(|(_, g)| g.is_present()).map(|(c, _)| c)
    }

    pub fn absent_symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.iter().filter(|(_, g)| !g.is_present()).map(|(c, _)| c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// New set with every present glyph scaled to exactly `size`; absent entries are dropped.
    ///
    /// Glyphs already at `size` are copied unchanged, so resizing twice to the same target
    /// equals resizing once.
    pub fn resized(&self, size: GlyphSize, filter: ResizeFilter) -> GlyphGridResult<Self> {
        if size.is_empty() {
            return Err(GlyphGridError::validation(format!(
                "resize target must be > 0 in both dimensions, got {size}"
            )));
        }
        let filter = filter.to_image_filter();
        let entries = self
            .iter()
            .filter_map(|(symbol, glyph)| {
                let img = glyph.image()?;
                let scaled = if GlyphSize::of(img) == size {
                    img.clone()
                } else {
                    image::imageops::resize(img, size.width, size.height, filter)
                };
                Some((symbol, Glyph::Present(scaled)))
            })
            .collect();
        Ok(Self { entries })
    }

    /// The shared size of every present glyph, or `None` if no glyph is present.
    ///
    /// Fails with [`GlyphGridError::InconsistentGlyphSize`] naming the first glyph (in symbol
    /// order) whose size differs from the first present one.
    pub fn uniform_size(&self) -> GlyphGridResult<Option<GlyphSize>> {
        let mut expected: Option<GlyphSize> = None;
        for (symbol, glyph) in self.iter() {
            let Some(found) = glyph.size() else {
                continue;
            };
            match expected {
                None => expected = Some(found),
                Some(expected) if expected != found => {
                    return Err(GlyphGridError::InconsistentGlyphSize {
                        symbol,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
        }
        Ok(expected)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyphs/registry.rs"]
mod tests;
