use crate::{ops::Walk, tree::RadixTree};

impl<V> RadixTree<V> {
    /// Descends from the root, matching as many bytes of `key` as the tree
    /// allows, and reports where the descent stopped.
    ///
    /// The walk ends either because the key is exhausted, because the current
    /// node has no child starting with the next key byte, or because matching
    /// stopped partway through a compressed edge. Only in the last case is the
    /// returned offset non-zero.
    pub(crate) fn walk(&self, key: &[u8]) -> Walk {
        let mut cur = self.root;
        let mut matched = 0;
        while !self.node(cur).children.is_empty() && matched < key.len() {
            if self.is_compressed(cur) {
                let child = self.sole_child(cur);
                let label = &self.node(child).label;
                let step = common_prefix_len(label, &key[matched..]);
                matched += step;
                if step < label.len() {
                    return Walk { end: cur, matched, offset: step };
                }
                cur = child;
            } else {
                let Some(child) = self.child_by_byte(cur, key[matched]) else {
                    return Walk { end: cur, matched, offset: 0 };
                };
                matched += 1;
                cur = child;
            }
        }
        Walk { end: cur, matched, offset: 0 }
    }
}

/// Returns the length of the common prefix between two byte slices.
pub(crate) fn common_prefix_len(lhs: &[u8], rhs: &[u8]) -> usize {
    lhs.iter().zip(rhs).take_while(|(x, y)| x == y).count()
}
