//! The reference operations on a [`Tree`], written the way the textbook defines them: each call
//! handles one node and recurses into the subtree that may hold the answer.
//!
//! Recursion depth equals the height of the tree. For trees built by adding keys in sorted order
//! that is the number of keys, so prefer [`crate::iterative`] when the shape is not under your
//! control.

use std::cmp::Ordering;

use tracing::trace;

use crate::tree::{Key, Node, Tree};

impl Tree {
    /// Potentially finds the node holding the given key in this tree. If no node has the
    /// corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Tree;
    ///
    /// let tree = Tree::from_sorted(&[1, 2, 3]);
    ///
    /// assert_eq!(tree.contains(2).map(|n| n.key()), Some(2));
    /// assert!(tree.contains(42).is_none());
    /// ```
    pub fn contains(&self, key: Key) -> Option<&Node> {
        let node = self.root()?;
        match node.key.cmp(&key) {
            Ordering::Equal => Some(node),
            Ordering::Less => node.right.contains(key),
            Ordering::Greater => node.left.contains(key),
        }
    }

    /// Appends every key of this tree in the inclusive range `[min, max]` to `result`, in
    /// ascending order. Subtrees that can't hold a key in the range are never visited.
    ///
    /// If `min > max` nothing is appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Tree;
    ///
    /// let tree = Tree::from_sorted(&[1, 4, 5, 10, 12, 17, 19, 21, 29, 33, 37]);
    /// let mut result = Vec::new();
    /// tree.range_search(11, 30, &mut result);
    ///
    /// assert_eq!(result, vec![12, 17, 19, 21, 29]);
    /// ```
    pub fn range_search(&self, min: Key, max: Key, result: &mut Vec<Key>) {
        let Some(node) = self.root() else {
            return;
        };

        if node.key > min {
            node.left.range_search(min, max, result);
        }
        if min <= node.key && node.key <= max {
            result.push(node.key);
        }
        if node.key < max {
            node.right.range_search(min, max, result);
        }
    }

    /// Adds the key to this tree and returns the new node. If the key is already in the tree,
    /// nothing changes and `None` is returned.
    ///
    /// Adding to an empty tree makes the new node its root.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.add(1).map(|n| n.key()), Some(1));
    /// assert_eq!(tree.root().map(|n| n.key()), Some(1));
    ///
    /// // Duplicates are refused.
    /// assert!(tree.add(1).is_none());
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn add(&mut self, key: Key) -> Option<&Node> {
        match self.root {
            None => {
                trace!(key, "attaching new leaf");
                let node: &Node = self.root.insert(Box::new(Node::new(key)));
                Some(node)
            }
            Some(ref mut node) => match node.key.cmp(&key) {
                Ordering::Equal => {
                    trace!(key, "key already present");
                    None
                }
                Ordering::Less => node.right.add(key),
                Ordering::Greater => node.left.add(key),
            },
        }
    }

    /// Calls `visit` with every key in this tree in ascending order: left subtree, then the
    /// root, then the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [3, 1, 2] {
    ///     tree.add(key);
    /// }
    ///
    /// let mut keys = Vec::new();
    /// tree.walk(|key| keys.push(key));
    /// assert_eq!(keys, vec![1, 2, 3]);
    /// ```
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(Key),
    {
        self.walk_with(&mut visit);
    }

    fn walk_with<F>(&self, visit: &mut F)
    where
        F: FnMut(Key),
    {
        if let Some(node) = self.root() {
            node.left.walk_with(visit);
            visit(node.key);
            node.right.walk_with(visit);
        }
    }
}
