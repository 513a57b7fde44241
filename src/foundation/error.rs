use crate::foundation::core::GlyphSize;

/// Convenience result type used across glyphgrid.
pub type GlyphGridResult<T> = Result<T, GlyphGridError>;

/// Error taxonomy for parsing, glyph loading and rendering.
#[derive(thiserror::Error, Debug)]
pub enum GlyphGridError {
    /// A record's label or sequence does not follow the expected grammar.
    #[error("malformed input in record '{label}': {reason}")]
    MalformedInput {
        /// Label of the offending record.
        label: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A sequence uses a symbol that has no usable glyph.
    #[error("missing glyph for symbol '{symbol}' in record '{label}'")]
    MissingGlyph {
        /// The symbol without a glyph.
        symbol: char,
        /// Label of the record being rendered.
        label: String,
    },

    /// Glyphs in one set do not share identical dimensions.
    #[error("inconsistent glyph size: glyph '{symbol}' is {found}, expected {expected}")]
    InconsistentGlyphSize {
        /// First symbol whose glyph differs from the reference size.
        symbol: char,
        /// Size of the reference glyph.
        expected: GlyphSize,
        /// Size of the offending glyph.
        found: GlyphSize,
    },

    /// The canvas composer was given zero rows.
    #[error("cannot compose a canvas from zero rows")]
    EmptyComposition,

    /// Invalid configuration or out-of-range dimensions.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlyphGridError {
    /// Build a [`GlyphGridError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlyphGridError::MalformedInput`] value.
    pub fn malformed(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`GlyphGridError::MissingGlyph`] value.
    pub fn missing_glyph(symbol: char, label: impl Into<String>) -> Self {
        Self::MissingGlyph {
            symbol,
            label: label.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
