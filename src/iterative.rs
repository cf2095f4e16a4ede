//! The same operations as [`crate::recursive`], written with loops and explicit stacks so that
//! the call stack never grows with the height of the tree.
//!
//! The results are identical to the recursive versions, including which node `add` attaches a
//! new key under, so the two can be mixed freely on the same tree.
//!
//! # Examples
//!
//! ```
//! use intbst::{iterative, Tree};
//!
//! // Adding keys in ascending order makes a tree as tall as it has keys.
//! let mut tree = Tree::new();
//! for key in 0..10_000 {
//!     iterative::add(&mut tree, key);
//! }
//! assert_eq!(tree.height(), 10_000);
//!
//! assert!(iterative::contains(&tree, 9_999).is_some());
//!
//! let mut result = Vec::new();
//! iterative::range_search(&tree, 9_997, 20_000, &mut result);
//! assert_eq!(result, vec![9_997, 9_998, 9_999]);
//! ```

use std::cmp::Ordering;
use std::iter::FusedIterator;

use tracing::trace;

use crate::tree::{Key, Node, Tree};

/// Potentially finds the node holding the given key in `tree`. If no node has the corresponding
/// key, `None` is returned.
pub fn contains(tree: &Tree, key: Key) -> Option<&Node> {
    let mut current = tree.root();
    while let Some(node) = current {
        current = match node.key.cmp(&key) {
            Ordering::Equal => return Some(node),
            Ordering::Less => node.right.root(),
            Ordering::Greater => node.left.root(),
        };
    }
    None
}

/// Appends every key of `tree` in the inclusive range `[min, max]` to `result`, in ascending
/// order. See [`Tree::range`] for the lazy version.
pub fn range_search(tree: &Tree, min: Key, max: Key, result: &mut Vec<Key>) {
    result.extend(tree.range(min, max));
}

/// Adds the key to `tree` and returns the new node. If the key is already in the tree, nothing
/// changes and `None` is returned.
pub fn add(tree: &mut Tree, key: Key) -> Option<&Node> {
    let mut slot = &mut tree.root;
    while let Some(node) = slot {
        slot = match node.key.cmp(&key) {
            Ordering::Equal => {
                trace!(key, "key already present");
                return None;
            }
            Ordering::Less => &mut node.right.root,
            Ordering::Greater => &mut node.left.root,
        };
    }

    trace!(key, "attaching new leaf");
    let node: &Node = slot.insert(Box::new(Node::new(key)));
    Some(node)
}

/// Calls `visit` with every key in `tree` in ascending order.
pub fn walk<F>(tree: &Tree, mut visit: F)
where
    F: FnMut(Key),
{
    for key in tree {
        visit(key);
    }
}

impl Tree {
    /// Gets an iterator over the keys of this tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Tree;
    ///
    /// let tree: Tree = [5, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![1, 3, 5]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self);
        iter
    }

    /// Gets an iterator over the keys of this tree in the inclusive range `[min, max]`, in
    /// ascending order. Subtrees that can't hold a key in the range are never visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Tree;
    ///
    /// let tree = Tree::from_sorted(&[1, 4, 5, 10, 12, 17, 19, 21, 29, 33, 37]);
    ///
    /// assert_eq!(tree.range(11, 30).collect::<Vec<_>>(), vec![12, 17, 19, 21, 29]);
    /// assert_eq!(tree.range(30, 11).next(), None);
    /// ```
    pub fn range(&self, min: Key, max: Key) -> Range<'_> {
        let mut range = Range {
            stack: Vec::new(),
            min,
            max,
        };
        if min <= max {
            range.push_left_spine(self);
        }
        range
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = Key;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over the keys of a [`Tree`]. Created by [`Tree::iter`].
///
/// The stack holds the nodes whose key hasn't been yielded yet but whose left subtree is being
/// (or has been) visited.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut tree: &'a Tree) {
        while let Some(node) = tree.root() {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(node.key)
    }
}

impl FusedIterator for Iter<'_> {}

/// An in-order iterator over the keys of a [`Tree`] within an inclusive range. Created by
/// [`Tree::range`].
#[derive(Clone, Debug)]
pub struct Range<'a> {
    stack: Vec<&'a Node>,
    min: Key,
    max: Key,
}

impl<'a> Range<'a> {
    /// Like [`Iter::push_left_spine`] but stops descending at the first node whose left subtree
    /// only holds keys below `min`.
    fn push_left_spine(&mut self, mut tree: &'a Tree) {
        while let Some(node) = tree.root() {
            self.stack.push(node);
            if node.key <= self.min {
                break;
            }
            tree = &node.left;
        }
    }
}

impl<'a> Iterator for Range<'a> {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.stack.pop()?;
            if node.key < self.max {
                self.push_left_spine(&node.right);
            }
            if self.min <= node.key && node.key <= self.max {
                return Some(node.key);
            }
        }
    }
}

impl FusedIterator for Range<'_> {}
