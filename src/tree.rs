//! The data model shared by every operation: a [`Tree`] is an optional, owning handle to a root
//! [`Node`], and every `Node` owns a left and a right `Tree`. There is no separate "tree object":
//! a reference to a node's child `Tree` *is* the subtree rooted there.
//!
//! Nothing here recurses. Dropping, cloning, comparing and measuring a tree all use explicit
//! stacks so a tree shaped like a linked list can be as long as memory allows.
//!
//! # Examples
//!
//! ```
//! use intbst::Tree;
//!
//! let mut tree = Tree::new();
//! assert!(tree.is_empty());
//! assert_eq!(tree.height(), 0);
//!
//! tree.add(2);
//! tree.add(1);
//! tree.add(3);
//!
//! let root = tree.root().unwrap();
//! assert_eq!(root.key(), 2);
//! assert_eq!(root.left().root().map(|n| n.key()), Some(1));
//! assert_eq!(root.right().root().map(|n| n.key()), Some(3));
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.height(), 2);
//! ```

use std::fmt;

/// The type of every key stored in a [`Tree`].
pub type Key = i32;

/// A Binary Search Tree of unique [`Key`]s. An empty `Tree` is a valid tree with no nodes.
///
/// The tree never rebalances. See [`Tree::from_sorted`] for building a tree of minimal height.
#[derive(Default)]
pub struct Tree {
    pub(crate) root: Option<Box<Node>>,
}

/// A `Node` has a key and always has two children, although either may be an empty [`Tree`].
///
/// Every key in `left` is less than `key` and every key in `right` is greater than `key`.
pub struct Node {
    pub(crate) key: Key,
    pub(crate) left: Tree,
    pub(crate) right: Tree,
}

impl Node {
    /// Construct a new `Node` with the given `key` and no children.
    pub(crate) fn new(key: Key) -> Self {
        Self {
            key,
            left: Tree::new(),
            right: Tree::new(),
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> Key {
        self.key
    }

    /// The subtree holding the keys smaller than this node's key.
    pub fn left(&self) -> &Tree {
        &self.left
    }

    /// The subtree holding the keys greater than this node's key.
    pub fn right(&self) -> &Tree {
        &self.right
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Wraps an already built node as the root of a tree.
    pub(crate) fn with_root(node: Node) -> Self {
        Self {
            root: Some(Box::new(node)),
        }
    }

    /// The root node of this tree, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes in this tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Gets the height of this tree: how many levels are on the longest path from the root to a
    /// leaf. An empty tree has a height of 0 and a single node has a height of 1.
    pub fn height(&self) -> usize {
        let mut max_height = 0;
        let mut stack = Vec::new();
        stack.extend(self.root().map(|root| (root, 1)));

        while let Some((node, height)) = stack.pop() {
            max_height = max_height.max(height);
            stack.extend(node.left.root().map(|n| (n, height + 1)));
            stack.extend(node.right.root().map(|n| (n, height + 1)));
        }

        max_height
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        // Detach every child before its parent is freed so no `Drop` call ever nests.
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.root.take());
            stack.extend(node.right.root.take());
        }
    }
}

impl Clone for Tree {
    /// Copies the tree shape exactly, including trees that were built from unsorted input.
    fn clone(&self) -> Self {
        let mut cloned = Tree::new();
        {
            let mut stack = vec![(self, &mut cloned)];
            while let Some((source, target)) = stack.pop() {
                if let Some(node) = source.root() {
                    let copy = target.root.insert(Box::new(Node::new(node.key)));
                    let Node { left, right, .. } = &mut **copy;
                    stack.push((&node.left, left));
                    stack.push((&node.right, right));
                }
            }
        }
        cloned
    }
}

impl PartialEq for Tree {
    /// Two trees are equal when they have the same keys in the same shape.
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            match (a.root(), b.root()) {
                (None, None) => {}
                (Some(a), Some(b)) if a.key == b.key => {
                    stack.push((&a.left, &b.left));
                    stack.push((&a.right, &b.right));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Tree {}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left.root().map(Node::key))
            .field("right", &self.right.root().map(Node::key))
            .finish()
    }
}

/// Prints the keys in ascending order separated by single spaces.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = self.iter();
        if let Some(first) = keys.next() {
            write!(f, "{}", first)?;
            for key in keys {
                write!(f, " {}", key)?;
            }
        }
        Ok(())
    }
}
