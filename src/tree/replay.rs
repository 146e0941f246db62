//! Re-expand recorded paths on a freshly rebuilt, possibly reshaped outline.

use super::node::OutlineTree;
use super::path::StructuralPath;
use super::snapshot::Snapshot;
use thiserror::Error;
use tracing::debug;

/// Why a single path stopped short. Logged and absorbed, never returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
enum ReplayMiss {
    #[error("no children to search at depth {depth}")]
    NoChildren { depth: usize },
    #[error("no child labelled {label:?} at depth {depth}")]
    LabelMissing { depth: usize, label: String },
}

/// Expand every node named by `snapshot` that still exists in `tree`.
///
/// Paths are replayed independently. A path whose label is missing at some
/// depth stops there, keeping the expansions made above it; the other paths
/// are unaffected. Replaying onto an unchanged tree is idempotent.
pub fn replay<T: OutlineTree + ?Sized>(tree: &mut T, snapshot: &Snapshot) {
    let mut restored = 0usize;
    for path in snapshot.paths() {
        match replay_path(tree, path) {
            Ok(()) => restored += 1,
            Err(miss) => debug!(path = %path, %miss, "Abandoned structural path"),
        }
    }
    debug!(
        restored,
        abandoned = snapshot.len() - restored,
        "Replayed fold-state snapshot"
    );
}

fn replay_path<T: OutlineTree + ?Sized>(
    tree: &mut T,
    path: &StructuralPath,
) -> Result<(), ReplayMiss> {
    let mut current = tree.root();
    for (depth, label) in path.labels().iter().enumerate() {
        let children = tree.children(current);
        if children.is_empty() {
            return Err(ReplayMiss::NoChildren { depth });
        }
        let (next, _) = children
            .into_iter()
            .find(|(_, child_label)| child_label == label)
            .ok_or_else(|| ReplayMiss::LabelMissing {
                depth,
                label: label.clone(),
            })?;
        tree.expand(next);
        current = next;
    }
    Ok(())
}
