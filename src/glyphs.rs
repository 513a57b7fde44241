//! Glyph loading: one bitmap per alphabet symbol.

pub mod decode;
pub mod registry;
