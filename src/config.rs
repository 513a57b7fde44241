//! Render configuration.
//!
//! [`RenderConfig`] is passed explicitly into the pipeline; nothing here is global. It can be
//! loaded from JSON, with every field optional.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::foundation::{
    core::{DEFAULT_HSPACING, DEFAULT_VSPACING, GlyphSize, Rgba8},
    error::{GlyphGridError, GlyphGridResult},
};

/// Resampling filter used when glyphs are resized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    #[default]
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ResizeFilter {
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        use image::imageops::FilterType;
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Spacing, sizing and colour options for one render.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Pixels between neighbouring glyphs in a row.
    pub hspacing: u32,
    /// Pixels between neighbouring rows.
    pub vspacing: u32,
    /// Rescale every glyph to this size before rendering; `None` keeps native sizes.
    pub resize: Option<GlyphSize>,
    pub filter: ResizeFilter,
    /// Fill colour for gaps between glyphs and rows.
    pub background: Rgba8,
    /// Glyph file extension, without the dot.
    pub glyph_extension: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            hspacing: DEFAULT_HSPACING,
            vspacing: DEFAULT_VSPACING,
            resize: None,
            filter: ResizeFilter::default(),
            background: Rgba8::default(),
            glyph_extension: "png".to_string(),
        }
    }
}

impl RenderConfig {
    /// Load a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> GlyphGridResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GlyphGridError::validation(format!("open render config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn from_reader<R: Read>(r: R) -> GlyphGridResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| GlyphGridError::validation(format!("parse render config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> GlyphGridResult<()> {
        if let Some(size) = self.resize
            && size.is_empty()
        {
            return Err(GlyphGridError::validation(format!(
                "resize target must be > 0 in both dimensions, got {size}"
            )));
        }
        let ext = self.glyph_extension.trim_start_matches('.');
        if ext.is_empty() || ext.contains(['/', '\\']) {
            return Err(GlyphGridError::validation(format!(
                "glyph_extension '{}' is not a file extension",
                self.glyph_extension
            )));
        }
        Ok(())
    }

    /// Extension with any leading dot removed.
    pub fn extension(&self) -> &str {
        self.glyph_extension.trim_start_matches('.')
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
