use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::Context;

use crate::{
    foundation::{
        core::HEADER_MARKER,
        error::{GlyphGridError, GlyphGridResult},
    },
    sequence::record::Record,
};

/// Accumulator for the record currently being read.
///
/// `None` until the first header line is seen; text before it belongs to no record.
#[derive(Default)]
struct RecordBuilder {
    current: Option<(String, String)>,
    out: Vec<Record>,
}

impl RecordBuilder {
    fn push_line(&mut self, line: &str) {
        if line.starts_with(HEADER_MARKER) {
            self.flush();
            self.current = Some((line.trim_end().to_string(), String::new()));
        } else if let Some((_, seq)) = self.current.as_mut() {
            seq.push_str(line.trim());
        }
    }

    fn flush(&mut self) {
        if let Some((label, seq)) = self.current.take() {
            self.out.push(Record::new(label, seq));
        }
    }

    fn finish(mut self) -> Vec<Record> {
        self.flush();
        self.out
    }
}

/// Parse a stream of lines into records, in header order.
///
/// Never fails: headers followed directly by another header give records with an empty
/// sequence, and blank or whitespace-only lines contribute nothing.
pub fn parse_lines<I, S>(lines: I) -> Vec<Record>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = RecordBuilder::default();
    for line in lines {
        builder.push_line(line.as_ref());
    }
    builder.finish()
}

/// Parse in-memory alignment text.
pub fn parse_records(text: &str) -> Vec<Record> {
    parse_lines(text.lines())
}

/// Parse records from any buffered reader. Only IO failures are reported.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than rejected.
pub fn read_records<R: BufRead>(mut reader: R) -> GlyphGridResult<Vec<Record>> {
    let mut builder = RecordBuilder::default();
    let mut buf = Vec::new();
    for idx in 1u64.. {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("read alignment line {idx}"))?;
        if n == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        builder.push_line(line.trim_end_matches(['\n', '\r']));
    }
    Ok(builder.finish())
}

/// Parse records from a file. The handle is closed before returning.
#[tracing::instrument]
pub fn read_records_file(path: &Path) -> GlyphGridResult<Vec<Record>> {
    let f = File::open(path)
        .with_context(|| format!("open alignment '{}'", path.display()))
        .map_err(GlyphGridError::from)?;
    let records = read_records(BufReader::new(f))?;
    tracing::debug!(records = records.len(), "parsed alignment");
    Ok(records)
}

/// Serialize records back to header + sequence text, one line each.
pub fn format_records(records: &[Record]) -> String {
    let mut out = String::new();
    for r in records {
        out.push_str(r.label());
        out.push('\n');
        out.push_str(r.sequence());
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/parse.rs"]
mod tests;
