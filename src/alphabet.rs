//! Permissible sequence symbols.
//!
//! An [`Alphabet`] is plain configuration: it is built once and passed by reference into the
//! validator and the glyph registry, so renders with different alphabets never share state.

use std::fmt;

use crate::foundation::{
    core::HEADER_MARKER,
    error::{GlyphGridError, GlyphGridResult},
};

/// Amino-acid symbols plus the `-` gap symbol.
pub const PROTEIN_SYMBOLS: &str = "-ACDEFGHIKLMNPQRSTVWXY";

/// Symbol used for alignment gaps.
pub const GAP_SYMBOL: char = '-';

/// Fixed, ordered set of valid sequence symbols.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from the characters of `symbols`, keeping their order.
    ///
    /// Rejects empty sets, duplicates, whitespace and the header marker.
    pub fn new(symbols: &str) -> GlyphGridResult<Self> {
        let mut out = Vec::with_capacity(symbols.len());
        for c in symbols.chars() {
            if c.is_whitespace() || c.is_control() {
                return Err(GlyphGridError::validation(format!(
                    "alphabet symbol {c:?} must be printable and not whitespace"
                )));
            }
            if c == HEADER_MARKER {
                return Err(GlyphGridError::validation(format!(
                    "alphabet must not contain the header marker '{HEADER_MARKER}'"
                )));
            }
            if out.contains(&c) {
                return Err(GlyphGridError::validation(format!(
                    "alphabet symbol '{c}' appears more than once"
                )));
            }
            out.push(c);
        }
        if out.is_empty() {
            return Err(GlyphGridError::validation("alphabet must not be empty"));
        }
        Ok(Self { symbols: out })
    }

    /// The default protein alphabet, [`PROTEIN_SYMBOLS`].
    pub fn protein() -> Self {
        Self {
            symbols: PROTEIN_SYMBOLS.chars().collect(),
        }
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::protein()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/alphabet.rs"]
mod tests;
