//! The byte-level compressed radix tree.

use slab::Slab;

use crate::node::{Node, NodeId};

/// An ordered map from byte strings to values, backed by a compressed radix
/// tree.
///
/// Keys sharing a prefix share the path that spells it, and runs of nodes
/// with a single continuation are collapsed into one multi-byte edge, so the
/// node count stays proportional to the number of distinct branch points
/// rather than to the total key length. Iteration yields keys in
/// lexicographic byte order without any extra bookkeeping.
///
/// This is the byte-oriented core; [`RadixTreeMap`](crate::RadixTreeMap)
/// wraps it with typed keys.
///
/// # Examples
///
/// ```
/// use raxmap::RadixTree;
///
/// let mut tree = RadixTree::new();
/// tree.insert(b"romane", 1);
/// tree.insert(b"romanus", 2);
/// tree.insert(b"rubens", 3);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.get(b"romanus"), Some(&2));
/// assert_eq!(tree.get(b"roman"), None);
///
/// let keys: Vec<_> = tree.iter().map(|(key, _)| key).collect();
/// assert_eq!(keys, [b"romane".to_vec(), b"romanus".to_vec(), b"rubens".to_vec()]);
/// ```
#[derive(Clone)]
pub struct RadixTree<V> {
    pub(crate) nodes: Slab<Node<V>>,
    pub(crate) root: NodeId,
    pub(crate) len: usize,
}

impl<V> RadixTree<V> {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = Slab::new();
        let root = NodeId(nodes.insert(Node::root()));
        Self { nodes, root, len: 0 }
    }

    /// Returns the number of keys stored in the tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree stores no keys.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of non-root nodes currently allocated.
    ///
    /// Deleting a key releases every node that existed only for its sake, so
    /// this count shrinks back exactly when keys are removed in any order.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Returns a reference to the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &[u8]) -> Option<&V> {
        let walk = self.walk(key);
        if walk.matched != key.len() || walk.offset != 0 {
            return None;
        }
        self.node(walk.end).value.as_ref()
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &[u8]) -> Option<&mut V> {
        let walk = self.walk(key);
        if walk.matched != key.len() || walk.offset != 0 {
            return None;
        }
        self.node_mut(walk.end).value.as_mut()
    }

    /// Returns `true` if `key` is stored in the tree.
    #[must_use]
    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// Removes every key, leaving a bare root behind.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = NodeId(self.nodes.insert(Node::root()));
        self.len = 0;
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<V> {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<V> {
        &mut self.nodes[id.0]
    }

    pub(crate) fn alloc(&mut self, node: Node<V>) -> NodeId {
        NodeId(self.nodes.insert(node))
    }

    pub(crate) fn free(&mut self, id: NodeId) -> Node<V> {
        self.nodes.remove(id.0)
    }

    /// Whether the sole edge leaving this node carries more than one byte.
    pub(crate) fn is_compressed(&self, id: NodeId) -> bool {
        let node = self.node(id);
        node.children.len() == 1 && self.node(node.children[0]).label.len() > 1
    }

    /// The only child of a node known to have exactly one.
    pub(crate) fn sole_child(&self, id: NodeId) -> NodeId {
        debug_assert_eq!(self.node(id).children.len(), 1);
        self.node(id).children[0]
    }

    /// Finds the child whose edge label starts with `byte`.
    pub(crate) fn child_by_byte(&self, id: NodeId, byte: u8) -> Option<NodeId> {
        let children = &self.node(id).children;
        children
            .binary_search_by_key(&byte, |&child| self.node(child).first_byte())
            .ok()
            .map(|pos| children[pos])
    }

    /// Hooks `child` under `parent`, keeping the sibling list sorted by first
    /// label byte and fixing up the back-reference.
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        let byte = self.node(child).first_byte();
        let pos = match self
            .node(parent)
            .children
            .binary_search_by_key(&byte, |&sibling| self.node(sibling).first_byte())
        {
            Ok(_) => unreachable!("[bug] sibling edges must not share a first byte"),
            Err(pos) => pos,
        };
        self.node_mut(parent).children.insert(pos, child);
        self.node_mut(child).parent = Some(parent);
    }

    /// Unhooks `child` from `parent` without releasing it; the caller either
    /// reattaches or frees it.
    pub(crate) fn detach(&mut self, parent: NodeId, child: NodeId) {
        let Some(pos) = self.node(parent).children.iter().position(|&c| c == child) else {
            unreachable!("[bug] detached node is not a child of its parent");
        };
        self.node_mut(parent).children.remove(pos);
    }
}

impl<V> Default for RadixTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for RadixTree<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
