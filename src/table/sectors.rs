//! Ordered sector labels for an input-output table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The ordered list of sector names. Row and column `i` of every table in
/// a request refer to `labels[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorSet {
    labels: Vec<String>,
}

impl SectorSet {
    pub fn new(labels: Vec<String>) -> Self {
        SectorSet { labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// First label that appears more than once, if any. Validation treats
    /// duplicates as a dimension error because indices stop being
    /// unambiguous.
    pub fn first_duplicate(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.labels
            .iter()
            .find(|label| !seen.insert(label.as_str()))
            .map(|label| label.as_str())
    }
}

impl From<Vec<String>> for SectorSet {
    fn from(labels: Vec<String>) -> Self {
        SectorSet::new(labels)
    }
}

impl<S: Into<String>> FromIterator<S> for SectorSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        SectorSet::new(iter.into_iter().map(Into::into).collect())
    }
}
