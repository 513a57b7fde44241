/// One labelled symbol sequence parsed from alignment text.
///
/// `label` keeps its leading header marker (`>seq_name1`); `sequence` is the concatenation of
/// every following non-header line with surrounding whitespace removed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    label: String,
    sequence: String,
}

impl Record {
    pub fn new(label: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sequence: sequence.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Number of symbols (not bytes) in the sequence.
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl<L: Into<String>, S: Into<String>> From<(L, S)> for Record {
    fn from((label, sequence): (L, S)) -> Self {
        Self::new(label, sequence)
    }
}
