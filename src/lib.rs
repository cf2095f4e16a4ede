//! An integer Binary Search Tree (BST), mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored keys. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores a key and will sometimes
//! have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)`. This tree never rebalances itself, so
//! inserting keys in ascending order produces a tree shaped like a linked list.
//! The only way to get an `O(lg N)` height is [`Tree::from_sorted`], which picks
//! the middle key of every subrange as the subtree root. BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree root,
//! then the right subtree.
//!
//! Every operation exists in two flavours:
//!
//! - [`recursive`]: methods on [`Tree`] that recurse once per level. This is the
//!   reference behaviour and reads like the textbook definition.
//! - [`iterative`]: loops and explicit stacks. Use these for trees that may be
//!   arbitrarily deep.
//!
//! # Examples
//!
//! ```
//! use intbst::Tree;
//!
//! let mut tree = Tree::from_sorted(&[1, 4, 5, 10, 12, 17, 19, 21, 29, 33, 37]);
//!
//! assert!(tree.add(3).is_some());
//! // Adding a key that is already present changes nothing.
//! assert!(tree.add(10).is_none());
//!
//! let mut found = Vec::new();
//! tree.range_search(11, 30, &mut found);
//! assert_eq!(found, vec![12, 17, 19, 21, 29]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod build;
pub mod error;
pub mod iterative;
pub mod recursive;
pub mod tree;


pub use error::{BuildError, BuildResult};
pub use iterative::{Iter, Range};
pub use tree::{Key, Node, Tree};
