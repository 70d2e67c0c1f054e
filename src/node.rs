/// A stable handle to a node in the tree's arena.
///
/// Handles stay valid until the node they name is pruned or merged away;
/// they are plain indices, so copying one never copies a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// A node of the compressed radix tree.
///
/// Every node except the root is reached through exactly one inbound edge,
/// whose label is stored on the node itself. The parent handle is a plain
/// back-reference for upward climbs during deletion; ownership always flows
/// downward through `children`.
#[derive(Debug, Clone)]
pub(crate) struct Node<V> {
    /// Label of the inbound edge. Empty only for the root.
    pub(crate) label: Box<[u8]>,
    /// Back-reference to the owning parent. `None` only for the root.
    pub(crate) parent: Option<NodeId>,
    /// Child handles, sorted by the first byte of each child's label.
    ///
    /// Sibling labels never share a first byte, and a label longer than one
    /// byte only ever occurs on a sole child, so the first byte is a unique
    /// sort key.
    pub(crate) children: Vec<NodeId>,
    /// The stored value. `Some` exactly when a key terminates here.
    pub(crate) value: Option<V>,
}

impl<V> Node<V> {
    /// Creates the root node: no inbound edge, no parent, no value.
    pub(crate) fn root() -> Self {
        Self {
            label: Box::default(),
            parent: None,
            children: Vec::new(),
            value: None,
        }
    }

    /// Creates a node hanging off `parent` via an edge labelled `label`.
    pub(crate) fn new(label: Box<[u8]>, parent: NodeId) -> Self {
        Self {
            label,
            parent: Some(parent),
            children: Vec::new(),
            value: None,
        }
    }

    /// Whether a key terminates at this node.
    pub(crate) const fn is_key(&self) -> bool {
        self.value.is_some()
    }

    /// Whether this node is a link in a mergeable chain: no key ends here
    /// and exactly one edge leaves here.
    pub(crate) fn is_chain_link(&self) -> bool {
        !self.is_key() && self.children.len() == 1
    }

    /// First byte of the inbound edge label.
    pub(crate) fn first_byte(&self) -> u8 {
        self.label[0]
    }
}
