use crate::{
    alphabet::Alphabet,
    foundation::{
        core::HEADER_MARKER,
        error::{GlyphGridError, GlyphGridResult},
    },
    sequence::record::Record,
};

/// Check every record against the label/alphabet grammar, stopping at the first violation.
///
/// A record passes when its label starts with the header marker and its sequence is one or
/// more symbols drawn from `alphabet`. The returned error names the offending record.
pub fn check_records(records: &[Record], alphabet: &Alphabet) -> GlyphGridResult<()> {
    records.iter().try_for_each(|r| check_record(r, alphabet))
}

/// Boolean form of [`check_records`]: `true` for an empty list or when every record passes.
pub fn is_well_formed(records: &[Record], alphabet: &Alphabet) -> bool {
    check_records(records, alphabet).is_ok()
}

pub fn check_record(record: &Record, alphabet: &Alphabet) -> GlyphGridResult<()> {
    if !record.label().starts_with(HEADER_MARKER) {
        return Err(GlyphGridError::malformed(
            record.label(),
            format!("label must start with '{HEADER_MARKER}'"),
        ));
    }
    if record.is_empty() {
        return Err(GlyphGridError::malformed(record.label(), "empty sequence"));
    }
    if let Some((pos, c)) = record
        .sequence()
        .chars()
        .enumerate()
        .find(|(_, c)| !alphabet.contains(*c))
    {
        return Err(GlyphGridError::malformed(
            record.label(),
            format!("symbol {c:?} at position {pos} is not in alphabet '{alphabet}'"),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/validate.rs"]
mod tests;
