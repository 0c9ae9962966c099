//! Sequence record data structure

/// A single sequence record: one header line and its sequence body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    /// Header line without the leading `>`
    pub header: String,
    /// First whitespace-delimited token of the header
    pub id: String,
    /// Sequence body with line breaks removed
    pub sequence: String,
}

impl SeqRecord {
    /// Create a record, deriving the id from the header.
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        let header = header.into();
        let id = header.split_whitespace().next().unwrap_or("").to_string();
        Self {
            header,
            id,
            sequence: sequence.into(),
        }
    }
}
