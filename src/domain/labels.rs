//! Label table loading and lookup.
//!
//! A label table maps class indices to human-readable names. Tables are
//! loaded from plain text files with one label per line, in class-index
//! order, which is the layout shipped alongside quantized MobileNet
//! checkpoints.

use crate::core::errors::ClassifyResult;
use std::path::Path;
use tracing::debug;

/// The name reported for a class index with no entry in the table.
pub const UNKNOWN_LABEL: &str = "unknown";

/// An ordered mapping from class index to label text.
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    labels: Vec<String>,
}

impl LabelTable {
    /// Loads a label table from a text file, one label per line.
    ///
    /// Line order defines class indices: the first line is class 0. Lines
    /// are taken verbatim, so blank lines produce empty labels rather than
    /// shifting the indices of later entries.
    pub fn from_file(path: impl AsRef<Path>) -> ClassifyResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let labels: Vec<String> = content.lines().map(|line| line.to_string()).collect();
        debug!(count = labels.len(), path = %path.display(), "loaded label table");
        Ok(LabelTable { labels })
    }

    /// Builds a label table from an iterator of label names.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LabelTable {
            labels: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the label for a class index, if the table covers it.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Returns the number of labels in the table.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the table has no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_labels_in_line_order() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "cat").unwrap();
        writeln!(file, "dog").unwrap();
        writeln!(file, "bird").unwrap();

        let table = LabelTable::from_file(file.path()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(0), Some("cat"));
        assert_eq!(table.get(1), Some("dog"));
        assert_eq!(table.get(2), Some("bird"));
        assert_eq!(table.get(3), None);
    }

    #[test]
    fn empty_file_yields_empty_table() {
        let file = NamedTempFile::new().unwrap();
        let table = LabelTable::from_file(file.path()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.get(0), None);
    }

    #[test]
    fn blank_lines_keep_their_index() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "cat").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "bird").unwrap();

        let table = LabelTable::from_file(file.path()).unwrap();
        assert_eq!(table.get(1), Some(""));
        assert_eq!(table.get(2), Some("bird"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(LabelTable::from_file("no_such_labels.txt").is_err());
    }

    #[test]
    fn from_lines_preserves_order() {
        let table = LabelTable::from_lines(["a", "b"]);
        assert_eq!(table.get(0), Some("a"));
        assert_eq!(table.get(1), Some("b"));
    }
}
