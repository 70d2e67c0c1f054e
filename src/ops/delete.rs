use crate::{node::NodeId, tree::RadixTree};

impl<V> RadixTree<V> {
    /// Removes a key from the tree, returning the value stored under it.
    ///
    /// Returns [`None`] without touching the tree when the key is absent,
    /// including when it only names a prefix of stored keys or stops partway
    /// through a compressed edge.
    pub fn remove(&mut self, key: &[u8]) -> Option<V> {
        let walk = self.walk(key);
        if walk.matched != key.len() || walk.offset != 0 {
            return None;
        }
        let value = self.node_mut(walk.end).value.take()?;
        self.len -= 1;
        let mut cur = walk.end;
        if self.node(cur).children.is_empty() {
            cur = self.prune(cur);
        }
        if self.node(cur).is_chain_link() {
            self.compress_chain(cur);
        }
        Some(value)
    }

    /// Frees `cur` and every ancestor left childless and value-less by the
    /// removal, returning the first node the climb keeps.
    fn prune(&mut self, mut cur: NodeId) -> NodeId {
        while let Some(parent) = self.node(cur).parent {
            self.detach(parent, cur);
            self.free(cur);
            cur = parent;
            if self.node(cur).is_key() || !self.node(cur).children.is_empty() {
                break;
            }
        }
        cur
    }

    /// Merges the maximal run of value-less single-child nodes around `from`
    /// into one compressed edge.
    fn compress_chain(&mut self, from: NodeId) {
        let mut top = from;
        while let Some(parent) = self.node(top).parent {
            if !self.node(parent).is_chain_link() {
                break;
            }
            top = parent;
        }
        // A single-child node right above the run also takes part: the merged
        // edge replaces its outgoing edge too. That node is a key node or the
        // root, otherwise the climb would have included it.
        let start = match self.node(top).parent {
            Some(parent) if self.node(parent).children.len() == 1 => parent,
            _ => top,
        };
        let mut path = Vec::new();
        let mut edges = 0;
        if start != top {
            path.extend_from_slice(&self.node(top).label);
            edges += 1;
        }
        let mut cur = top;
        while self.node(cur).is_chain_link() {
            let child = self.sole_child(cur);
            path.extend_from_slice(&self.node(child).label);
            edges += 1;
            cur = child;
        }
        if edges <= 1 {
            return;
        }
        // Free the interior of the run and reattach its terminal node
        // directly below `start` under the concatenated label.
        let mut node = self.sole_child(start);
        while node != cur {
            let next = self.sole_child(node);
            self.free(node);
            node = next;
        }
        self.node_mut(start).children.clear();
        self.node_mut(cur).label = path.into_boxed_slice();
        self.attach(start, cur);
    }
}
