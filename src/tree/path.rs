//! Structural paths: root-to-node label sequences and their stored string form.

use crate::error::PathCodecError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved delimiter between labels in the stored form. Never appears in outline labels.
pub const LABEL_DELIMITER: char = '\u{1}';

/// Labels from the outline root down to a node, excluding the root itself.
///
/// Two nodes are "the same place" across rebuilds iff their label sequences are
/// equal. A path only has meaning relative to the outline of one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct StructuralPath {
    labels: Vec<String>,
}

impl StructuralPath {
    /// The empty path, naming the synthetic root.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// A new path one level deeper, leaving `self` untouched.
    pub fn child(&self, label: &str) -> Self {
        let mut labels = Vec::with_capacity(self.labels.len() + 1);
        labels.extend(self.labels.iter().cloned());
        labels.push(label.to_string());
        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn depth(&self) -> usize {
        self.labels.len()
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Stored form: labels joined by [`LABEL_DELIMITER`].
    pub fn encode(&self) -> String {
        let mut encoded = String::new();
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                encoded.push(LABEL_DELIMITER);
            }
            encoded.push_str(label);
        }
        encoded
    }

    /// Parse the stored form. A leading or trailing delimiter is tolerated.
    pub fn decode(encoded: &str) -> Result<Self, PathCodecError> {
        let trimmed = encoded.trim_matches(LABEL_DELIMITER);
        if trimmed.is_empty() {
            return Err(PathCodecError::Empty);
        }
        Ok(Self::from_labels(trimmed.split(LABEL_DELIMITER)))
    }
}

impl fmt::Display for StructuralPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join(" > "))
    }
}

impl From<StructuralPath> for String {
    fn from(path: StructuralPath) -> Self {
        path.encode()
    }
}

impl TryFrom<String> for StructuralPath {
    type Error = PathCodecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        StructuralPath::decode(&value)
    }
}
