//! Codetree Keeper: Outline Fold-State Memory
//!
//! Remembers which nodes of a code outline were unfolded for each file, and
//! unfolds them again when the outline is rebuilt, whether after switching
//! files or after a restart. Outlines may drift between capture and replay;
//! restoration is best-effort per path.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod store;
pub mod tooling;
pub mod tree;
pub mod types;

pub use lifecycle::{DeferredCallback, EditorHost, LifecycleController, Scheduler, TreeEvent};
pub use store::persistence::FoldStatePersistence;
pub use store::FoldStateStore;
pub use tree::{capture, replay, OutlineTree, Snapshot, StructuralPath};
