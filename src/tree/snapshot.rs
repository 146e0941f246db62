//! Capture the expanded frontier of a live outline as a set of structural paths.

use super::node::OutlineTree;
use super::path::StructuralPath;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Paths of every node that was expanded and had children at capture time.
///
/// Behaves as a set: inserting a path already present is a no-op. Capture order
/// (pre-order) is kept so stored records stay stable across saves. Deserializing
/// goes through [`Snapshot::insert`], so stored duplicates collapse on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<StructuralPath>", into = "Vec<StructuralPath>")]
pub struct Snapshot {
    paths: Vec<StructuralPath>,
    seen: HashSet<StructuralPath>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the path was already recorded
    pub fn insert(&mut self, path: StructuralPath) -> bool {
        if !self.seen.insert(path.clone()) {
            return false;
        }
        self.paths.push(path);
        true
    }

    pub fn contains(&self, path: &StructuralPath) -> bool {
        self.seen.contains(path)
    }

    pub fn paths(&self) -> &[StructuralPath] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl FromIterator<StructuralPath> for Snapshot {
    fn from_iter<I: IntoIterator<Item = StructuralPath>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for path in iter {
            snapshot.insert(path);
        }
        snapshot
    }
}

impl From<Vec<StructuralPath>> for Snapshot {
    fn from(paths: Vec<StructuralPath>) -> Self {
        paths.into_iter().collect()
    }
}

impl From<Snapshot> for Vec<StructuralPath> {
    fn from(snapshot: Snapshot) -> Self {
        snapshot.paths
    }
}

/// Walk `tree` from its root and record every unfolded node that has children.
///
/// Folded subtrees are not descended into and leaves are skipped, so the walk
/// is bounded by the visible expanded frontier.
pub fn capture<T: OutlineTree + ?Sized>(tree: &T) -> Snapshot {
    expanded_under(tree, tree.root(), &StructuralPath::root())
        .into_iter()
        .collect()
}

fn expanded_under<T: OutlineTree + ?Sized>(
    tree: &T,
    parent: T::Node,
    prefix: &StructuralPath,
) -> Vec<StructuralPath> {
    let mut found = Vec::new();
    for (child, label) in tree.children(parent) {
        if !tree.has_children(child) || tree.is_folded(child) {
            continue;
        }
        let path = prefix.child(&label);
        let below = expanded_under(tree, child, &path);
        found.push(path);
        found.extend(below);
    }
    found
}
