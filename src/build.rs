//! Building whole trees at once.
//!
//! [`Tree::from_sorted`] is the only way to get a tree of minimal height: it picks the middle key
//! of every subrange as the root of the subtree for that range. The balance is a property of the
//! construction only. Later calls to `add` don't maintain it.

use std::cmp::Ordering;

use tracing::{debug, instrument};

use crate::error::{BuildError, BuildResult};
use crate::iterative;
use crate::tree::{Key, Node, Tree};

impl Tree {
    /// Builds a tree of minimal height, `ceil(log2(n + 1))`, holding exactly the given keys.
    ///
    /// `keys` must be sorted in ascending order without duplicates. This is trusted, not checked:
    /// the keys are placed by their position in the slice, so other input produces a tree that
    /// doesn't satisfy the search invariant (lookups may then miss keys that are present). Use
    /// [`Tree::try_from_sorted`] for input that isn't known to be sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Tree;
    ///
    /// let tree = Tree::from_sorted(&[1, 2, 3, 4, 5, 6, 7]);
    ///
    /// assert_eq!(tree.root().map(|n| n.key()), Some(4));
    /// assert_eq!(tree.height(), 3);
    /// assert_eq!(tree.to_string(), "1 2 3 4 5 6 7");
    /// ```
    #[instrument(level = "debug", skip(keys), fields(len = keys.len()))]
    pub fn from_sorted(keys: &[Key]) -> Self {
        build_balanced(keys)
    }

    /// Like [`Tree::from_sorted`] but first checks that `keys` is strictly ascending, returning
    /// the first offending position if not.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::{BuildError, Tree};
    ///
    /// assert!(Tree::try_from_sorted(&[1, 2, 3]).is_ok());
    /// assert_eq!(
    ///     Tree::try_from_sorted(&[1, 3, 2]),
    ///     Err(BuildError::Unsorted { index: 2, previous: 3, key: 2 })
    /// );
    /// assert_eq!(
    ///     Tree::try_from_sorted(&[1, 1]),
    ///     Err(BuildError::Duplicate { index: 1, key: 1 })
    /// );
    /// ```
    #[instrument(level = "debug", skip(keys), fields(len = keys.len()))]
    pub fn try_from_sorted(keys: &[Key]) -> BuildResult<Self> {
        check_sorted(keys)?;
        Ok(build_balanced(keys))
    }
}

/// Recursion depth is the height of the result, so this is safe for any slice length.
fn build_balanced(keys: &[Key]) -> Tree {
    if keys.is_empty() {
        return Tree::new();
    }

    // Lower middle for even lengths.
    let mid = (keys.len() - 1) / 2;
    let mut node = Node::new(keys[mid]);
    node.left = build_balanced(&keys[..mid]);
    node.right = build_balanced(&keys[mid + 1..]);
    Tree::with_root(node)
}

fn check_sorted(keys: &[Key]) -> BuildResult<()> {
    for (i, pair) in keys.windows(2).enumerate() {
        let (previous, key) = (pair[0], pair[1]);
        let index = i + 1;
        let err = match previous.cmp(&key) {
            Ordering::Less => continue,
            Ordering::Equal => BuildError::Duplicate { index, key },
            Ordering::Greater => BuildError::Unsorted {
                index,
                previous,
                key,
            },
        };
        debug!(%err, "rejecting input");
        return Err(err);
    }
    Ok(())
}

impl FromIterator<Key> for Tree {
    /// Adds the keys one at a time in iteration order. Duplicates are skipped.
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<Key> for Tree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            iterative::add(self, key);
        }
    }
}
