//! Ordered iteration over the tree.
//!
//! Both directions walk the tree with an explicit stack of nodes paired with
//! a cursor into their sorted edge lists, while a byte buffer accumulates the
//! labels along the current path. Ascending order visits a node's key before
//! descending into its children; descending order visits it after.

use crate::{node::NodeId, tree::RadixTree};

/// One level of an in-progress traversal.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    cursor: usize,
}

impl<V> RadixTree<V> {
    /// Returns an iterator over the entries of the tree in ascending
    /// lexicographic order of their keys.
    ///
    /// Every call starts an independent traversal from the root. The
    /// iterator borrows the tree, so the tree cannot be mutated while any
    /// traversal is in progress.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            tree: self,
            stack: vec![Frame { node: self.root, cursor: 0 }],
            path: Vec::new(),
        }
    }

    /// Returns an iterator over the entries of the tree in descending
    /// lexicographic order of their keys.
    #[must_use]
    pub fn iter_rev(&self) -> IterRev<'_, V> {
        let cursor = self.node(self.root).children.len();
        IterRev {
            tree: self,
            stack: vec![Frame { node: self.root, cursor }],
            path: Vec::new(),
        }
    }
}

/// An iterator over a tree's entries in ascending key order.
#[derive(Debug)]
pub struct Iter<'a, V> {
    tree: &'a RadixTree<V>,
    stack: Vec<Frame>,
    path: Vec<u8>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Vec<u8>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        loop {
            let frame = self.stack.last_mut()?;
            let node = tree.node(frame.node);
            if let Some(&child) = node.children.get(frame.cursor) {
                frame.cursor += 1;
                let entered = tree.node(child);
                self.path.extend_from_slice(&entered.label);
                self.stack.push(Frame { node: child, cursor: 0 });
                if let Some(value) = entered.value.as_ref() {
                    return Some((self.path.clone(), value));
                }
            } else {
                self.stack.pop();
                self.path.truncate(self.path.len() - node.label.len());
            }
        }
    }
}

/// An iterator over a tree's entries in descending key order.
#[derive(Debug)]
pub struct IterRev<'a, V> {
    tree: &'a RadixTree<V>,
    stack: Vec<Frame>,
    path: Vec<u8>,
}

impl<'a, V> Iterator for IterRev<'a, V> {
    type Item = (Vec<u8>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        loop {
            let frame = self.stack.last_mut()?;
            let node = tree.node(frame.node);
            if frame.cursor > 0 {
                frame.cursor -= 1;
                let child = node.children[frame.cursor];
                let entered = tree.node(child);
                self.path.extend_from_slice(&entered.label);
                self.stack.push(Frame { node: child, cursor: entered.children.len() });
            } else {
                self.stack.pop();
                let entry = node.value.as_ref().map(|value| (self.path.clone(), value));
                self.path.truncate(self.path.len() - node.label.len());
                if entry.is_some() {
                    return entry;
                }
            }
        }
    }
}

/// An owning iterator over a tree's entries in ascending key order.
#[derive(Debug)]
pub struct IntoIter<V> {
    tree: RadixTree<V>,
    stack: Vec<Frame>,
    path: Vec<u8>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (Vec<u8>, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let node_id = frame.node;
            let cursor = frame.cursor;
            if let Some(&child) = self.tree.node(node_id).children.get(cursor) {
                frame.cursor += 1;
                let label = &self.tree.node(child).label;
                self.path.extend_from_slice(label);
                self.stack.push(Frame { node: child, cursor: 0 });
                if let Some(value) = self.tree.node_mut(child).value.take() {
                    return Some((self.path.clone(), value));
                }
            } else {
                let label_len = self.tree.node(node_id).label.len();
                self.stack.pop();
                self.path.truncate(self.path.len() - label_len);
            }
        }
    }
}

impl<V> IntoIterator for RadixTree<V> {
    type Item = (Vec<u8>, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> IntoIter<V> {
        let root = Frame { node: self.root, cursor: 0 };
        IntoIter { tree: self, stack: vec![root], path: Vec::new() }
    }
}

impl<'a, V> IntoIterator for &'a RadixTree<V> {
    type Item = (Vec<u8>, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}
