use codetree_keeper::OutlineTree;
use codetree_keeper::lifecycle::{DeferredCallback, EditorHost, Scheduler};
use codetree_keeper::tree::MemoryOutline;
use std::path::PathBuf;
use std::time::Duration;

/// Queues deferred callbacks so the test can fire them like a host timer would.
#[derive(Default)]
pub struct QueueScheduler {
    pub pending: Vec<DeferredCallback>,
}

impl Scheduler for QueueScheduler {
    fn schedule_once(&mut self, _delay: Duration, callback: DeferredCallback) {
        self.pending.push(callback);
    }
}

/// Editor with one outline pane that is rebuilt, folded, for every file.
pub struct Editor {
    pub file: Option<PathBuf>,
    pub outline: Option<MemoryOutline>,
}

impl Editor {
    pub fn new() -> Self {
        Self {
            file: None,
            outline: None,
        }
    }

    pub fn tree(&self) -> &MemoryOutline {
        self.outline.as_ref().expect("outline present")
    }

    pub fn unfold(&mut self, labels: &[&str]) {
        let outline = self.outline.as_mut().expect("outline present");
        for depth in 1..=labels.len() {
            let node = outline.find(&labels[..depth]).expect("node exists");
            outline.set_folded(node, false);
        }
    }

    pub fn is_unfolded(&self, labels: &[&str]) -> bool {
        let outline = self.tree();
        outline
            .find(labels)
            .map(|node| outline.is_expanded(node))
            .unwrap_or(false)
    }
}

impl EditorHost for Editor {
    type Tree = MemoryOutline;

    fn current_file(&self) -> Option<PathBuf> {
        self.file.clone()
    }

    fn outline(&mut self) -> Option<&mut MemoryOutline> {
        self.outline.as_mut()
    }
}

/// Outline of a small Python module
pub fn python_module() -> MemoryOutline {
    let mut outline = MemoryOutline::new();
    let root = outline.root();
    let command = outline.add(root, "Command");
    let init = outline.add(command, "__init__");
    outline.add(init, "self._unfolded");
    let on_state = outline.add(command, "on_state");
    outline.add(on_state, "callback_str");
    let helpers = outline.add(root, "helpers");
    outline.add(helpers, "fmt");
    outline.add(root, "LOG");
    outline
}

/// Outline of a small Rust module
pub fn rust_module() -> MemoryOutline {
    let mut outline = MemoryOutline::new();
    let root = outline.root();
    let store = outline.add(root, "impl Store");
    outline.add(store, "fn put");
    outline.add(store, "fn get");
    let tests = outline.add(root, "mod tests");
    outline.add(tests, "fn test_put");
    outline
}
