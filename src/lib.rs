//! glyphgrid renders a multiple-sequence alignment into a raster image.
//!
//! Every alphabet symbol is drawn with its own glyph image. Glyphs are laid out on a grid: one
//! row per sequence, one column per alignment position, with configurable spacing between
//! cells.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: alignment text -> [`Record`]s ([`parse_records`], [`read_records_file`])
//! 2. **Validate** (optional): [`check_records`] / [`is_well_formed`] against an [`Alphabet`]
//! 3. **Load glyphs**: directory -> [`GlyphSet`] ([`GlyphSet::load_dir`], [`GlyphSet::resized`])
//! 4. **Render rows**: one image per record ([`RowRenderer`])
//! 5. **Compose**: rows stacked into one canvas ([`compose_rows`])
//!
//! [`render_alignment`] runs steps 4-5; [`render_alignment_files`] runs the whole thing from
//! paths. Writing the canvas to disk is left to the caller.
//!
//! Parsing never fails on malformed text. Rendering fails fast: a symbol without a glyph,
//! glyphs of differing sizes, or an empty row list abort the render with a
//! [`GlyphGridError`] that names the offending symbol or record.
#![forbid(unsafe_code)]

pub mod alphabet;
pub mod config;
mod foundation;
pub mod glyphs;
pub mod render;
pub mod sequence;

pub use alphabet::{Alphabet, GAP_SYMBOL, PROTEIN_SYMBOLS};
pub use config::{RenderConfig, ResizeFilter};
pub use foundation::core::{
    DEFAULT_HSPACING, DEFAULT_VSPACING, GlyphSize, HEADER_MARKER, Rgba8, span_len,
};
pub use foundation::error::{GlyphGridError, GlyphGridResult};
pub use glyphs::decode::{decode_raster, load_glyph_file, rasterize_svg};
pub use glyphs::registry::{Glyph, GlyphSet};
pub use render::compose::{canvas_size, compose_rows};
pub use render::pipeline::{prepare_glyphs, render_alignment, render_alignment_files};
pub use render::row::{RowRenderer, render_row, render_rows};
pub use sequence::parse::{
    format_records, parse_lines, parse_records, read_records, read_records_file,
};
pub use sequence::record::Record;
pub use sequence::validate::{check_record, check_records, is_well_formed};
