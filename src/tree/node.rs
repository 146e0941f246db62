//! Outline tree capabilities consumed from the host, and an in-memory outline.

/// Capability set the keeper needs from a live outline tree.
///
/// Node handles are only valid for the lifetime of the current tree build and
/// are never persisted.
pub trait OutlineTree {
    type Node: Copy;

    /// The synthetic root. It has no label and is never recorded.
    fn root(&self) -> Self::Node;

    /// Children of `node` in display order, with their current labels.
    fn children(&self, node: Self::Node) -> Vec<(Self::Node, String)>;

    fn is_folded(&self, node: Self::Node) -> bool;

    /// Request that `node` be shown expanded. Idempotent.
    fn expand(&mut self, node: Self::Node);

    fn has_children(&self, node: Self::Node) -> bool {
        !self.children(node).is_empty()
    }
}

/// Handle into a [`MemoryOutline`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct OutlineNode {
    label: String,
    children: Vec<NodeId>,
    folded: bool,
}

/// Arena-backed outline for hosts that build their tree in memory.
///
/// New nodes start folded, like a freshly filled code tree.
#[derive(Debug, Clone)]
pub struct MemoryOutline {
    nodes: Vec<OutlineNode>,
}

impl Default for MemoryOutline {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryOutline {
    pub fn new() -> Self {
        MemoryOutline {
            nodes: vec![OutlineNode {
                label: String::new(),
                children: Vec::new(),
                folded: false,
            }],
        }
    }

    /// Append a child under `parent` and return its handle
    pub fn add(&mut self, parent: NodeId, label: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(OutlineNode {
            label: label.to_string(),
            children: Vec::new(),
            folded: true,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn set_folded(&mut self, node: NodeId, folded: bool) {
        self.nodes[node.0].folded = folded;
    }

    pub fn label(&self, node: NodeId) -> &str {
        &self.nodes[node.0].label
    }

    pub fn is_expanded(&self, node: NodeId) -> bool {
        !self.nodes[node.0].folded
    }

    /// Find a node by its label sequence from the root
    pub fn find(&self, labels: &[&str]) -> Option<NodeId> {
        let mut current = self.root();
        for label in labels {
            current = *self.nodes[current.0]
                .children
                .iter()
                .find(|child| self.nodes[child.0].label == *label)?;
        }
        Some(current)
    }

    /// Fold every node. Models the host discarding view state on rebuild.
    pub fn fold_all(&mut self) {
        for node in self.nodes.iter_mut().skip(1) {
            node.folded = true;
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OutlineTree for MemoryOutline {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn children(&self, node: NodeId) -> Vec<(NodeId, String)> {
        self.nodes[node.0]
            .children
            .iter()
            .map(|child| (*child, self.nodes[child.0].label.clone()))
            .collect()
    }

    fn is_folded(&self, node: NodeId) -> bool {
        self.nodes[node.0].folded
    }

    fn expand(&mut self, node: NodeId) {
        self.nodes[node.0].folded = false;
    }

    fn has_children(&self, node: NodeId) -> bool {
        !self.nodes[node.0].children.is_empty()
    }
}
