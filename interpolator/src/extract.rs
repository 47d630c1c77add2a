use indexmap::IndexMap;

use crate::re::LABELLED_ROW_REGEX;
use crate::statics::{LINE_BREAK, UPGRADE_PREVIEW_HEADING, UPGRADE_PREVIEW_MARKER};

/// Per-level values keyed by upgrade label, in the order the preview lists
/// them. Re-inserting a label overwrites its values but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpgradeTable(IndexMap<String, Vec<String>>);

impl UpgradeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects every row of every `UPGRADE PREVIEW:` entry in `description`.
    /// Rows with fewer than `min_values` columns are dropped.
    pub fn extract<S: AsRef<str>>(description: &[S], min_values: usize) -> Self {
        let mut table = Self::new();
        for entry in description.iter().map(|entry| entry.as_ref()) {
            if !entry.contains(UPGRADE_PREVIEW_MARKER) {
                continue;
            }
            for line in entry.split(LINE_BREAK) {
                match UpgradeRow::parse(line.trim(), min_values) {
                    Some(row) => table.insert(row.label, row.values),
                    None => {
                        #[cfg(feature = "trace")]
                        tracing::debug!(line, "skipped upgrade preview line");
                    }
                }
            }
        }
        table
    }

    pub fn insert<S: ToString>(&mut self, label: S, values: Vec<String>) {
        self.0.insert(label.to_string(), values);
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.0.get(label).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: ToString, V: ToString> FromIterator<(S, Vec<V>)> for UpgradeTable {
    fn from_iter<I: IntoIterator<Item = (S, Vec<V>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (label, values) in iter {
            table.insert(label, values.iter().map(ToString::to_string).collect());
        }
        table
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeRow {
    pub label: String,
    pub values: Vec<String>,
}

impl UpgradeRow {
    /// Tries the row layouts in turn: `Label: a/b/c`, `Multi Word Label a/b/c`
    /// and finally `Label a/b/c` split at the first space.
    pub fn parse(line: &str, min_values: usize) -> Option<Self> {
        if line.is_empty() || line.contains(UPGRADE_PREVIEW_HEADING) || !line.contains('/') {
            return None;
        }
        Self::from_colon_row(line, min_values)
            .or_else(|| Self::from_labelled_row(line, min_values))
            .or_else(|| Self::from_spaced_row(line, min_values))
    }

    fn from_colon_row(line: &str, min_values: usize) -> Option<Self> {
        let (label, values) = line.split_once(':')?;
        Self::build(label, values, min_values)
    }

    fn from_labelled_row(line: &str, min_values: usize) -> Option<Self> {
        let captures = LABELLED_ROW_REGEX.captures(line)?;
        Self::build(&captures[1], &captures[2], min_values)
    }

    fn from_spaced_row(line: &str, min_values: usize) -> Option<Self> {
        let (label, values) = line.split_once(' ').filter(|(label, _)| !label.is_empty())?;
        Self::build(label, values, min_values)
    }

    fn build(label: &str, values: &str, min_values: usize) -> Option<Self> {
        if !values.contains('/') {
            return None;
        }
        let values: Vec<String> = values.trim().split('/').map(|v| v.trim().to_string()).collect();
        if values.len() < min_values {
            return None;
        }
        Some(Self {
            label: label.trim().to_string(),
            values,
        })
    }
}
