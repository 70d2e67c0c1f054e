use crate::{
    node::{Node, NodeId},
    tree::RadixTree,
};

impl<V> RadixTree<V> {
    /// Inserts a key-value pair into the tree, returning the value previously
    /// stored under the key, if any.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty. The root carries no key, so the empty byte
    /// string can never be a member of the tree.
    pub fn insert(&mut self, key: &[u8], value: V) -> Option<V> {
        assert!(!key.is_empty(), "key must not be empty");
        let walk = self.walk(key);
        if walk.matched == key.len() && walk.offset == 0 {
            // The whole key landed on an existing node; mark it.
            let prev = self.node_mut(walk.end).value.replace(value);
            if prev.is_none() {
                self.len += 1;
            }
            return prev;
        }
        let mut cur = walk.end;
        if self.is_compressed(cur) {
            if walk.matched == key.len() {
                // The key ends strictly inside the edge; the node created at
                // the cut is the one being inserted.
                self.split_edge_at_key_end(cur, walk.offset, value);
                self.len += 1;
                return None;
            }
            cur = self.split_edge(cur, walk.offset);
        }
        self.extend(cur, &key[walk.matched..], value);
        self.len += 1;
        None
    }

    /// Splits the compressed edge below `at`, whose first `offset` bytes
    /// matched the inserted key, so that the key's unmatched remainder can
    /// branch off. Returns the node the remainder must grow from.
    fn split_edge(&mut self, at: NodeId, offset: usize) -> NodeId {
        let child = self.sole_child(at);
        self.detach(at, child);
        let label = std::mem::take(&mut self.node_mut(child).label);
        // The matched part of the edge keeps hanging below `at`; when nothing
        // matched there is no prefix to hold and `at` itself is the fork.
        let fork = if offset == 0 {
            at
        } else {
            let prefix = self.alloc(Node::new(Box::from(&label[..offset]), at));
            self.attach(at, prefix);
            prefix
        };
        // The unmatched part of the edge turns into a single-byte edge out of
        // the fork, with any remaining bytes compressed below it again.
        if offset + 1 == label.len() {
            self.node_mut(child).label = Box::from(&label[offset..]);
            self.attach(fork, child);
        } else {
            let mid = self.alloc(Node::new(Box::from(&label[offset..=offset]), fork));
            self.attach(fork, mid);
            self.node_mut(child).label = Box::from(&label[offset + 1..]);
            self.attach(mid, child);
        }
        fork
    }

    /// Splits the compressed edge below `at` when the inserted key ran out
    /// `offset` bytes into it: the node at the cut becomes the key's node.
    fn split_edge_at_key_end(&mut self, at: NodeId, offset: usize, value: V) {
        let child = self.sole_child(at);
        self.detach(at, child);
        let label = std::mem::take(&mut self.node_mut(child).label);
        let cut = self.alloc(Node::new(Box::from(&label[..offset]), at));
        self.node_mut(cut).value = Some(value);
        self.attach(at, cut);
        self.node_mut(child).label = Box::from(&label[offset..]);
        self.attach(cut, child);
    }

    /// Grows the unmatched remainder of a key out of `from`: one single-byte
    /// edge if `from` already has children, then one compressed edge holding
    /// everything left over.
    fn extend(&mut self, from: NodeId, suffix: &[u8], value: V) {
        let mut cur = from;
        let mut consumed = 0;
        while consumed < suffix.len() {
            let rest = &suffix[consumed..];
            let step = if self.node(cur).children.is_empty() && rest.len() > 1 {
                rest.len()
            } else {
                1
            };
            let next = self.alloc(Node::new(Box::from(&rest[..step]), cur));
            self.attach(cur, next);
            cur = next;
            consumed += step;
        }
        self.node_mut(cur).value = Some(value);
    }
}
