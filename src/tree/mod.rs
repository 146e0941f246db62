//! Outline tree access: structural paths, capture, and replay.

pub mod node;
pub mod path;
pub mod replay;
pub mod snapshot;

pub use node::{MemoryOutline, NodeId, OutlineTree};
pub use path::{StructuralPath, LABEL_DELIMITER};
pub use replay::replay;
pub use snapshot::{capture, Snapshot};
