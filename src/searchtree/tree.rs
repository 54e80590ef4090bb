// Copyright (c) 2024 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

use super::node::{attach_all, clone_subtree, plant};
use super::{create_node, preorder, Key, Node, Preorder};

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A binary search tree owning its root node.
///
/// Copying, comparing and dropping a tree does not recurse, so degenerate
/// trees of any depth are fine. With the `serialize` feature a tree is
/// stored as its keys in preorder and rebuilt by inserting them.
///
/// # Example
///
/// ```
/// use rs_classics::searchtree::Tree;
///
/// let mut tree = Tree::with_root(5);
/// assert!(tree.insert(3));
/// assert!(tree.insert(8));
/// assert!(!tree.insert(3));
/// assert_eq!(tree.len(), 3);
/// assert!(tree.contains(8));
/// assert_eq!(tree.to_string(), "5 3 8");
/// ```
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(from = "Vec<Key>", into = "Vec<Key>"))]
#[derive(Default)]
pub struct Tree {
    root: Option<Box<Node>>,
    len: usize,
}

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Tree::default()
    }

    /// Create a tree consisting of a single node.
    pub fn with_root(key: Key) -> Self {
        Tree {
            root: Some(create_node(key)),
            len: 1,
        }
    }

    /// Return the root node, `None` for the empty tree.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a key.
    ///
    /// Return `true` if the key has been added and `false` if it was
    /// already contained in the tree.
    pub fn insert(&mut self, key: Key) -> bool {
        self.insert_node(create_node(key)) == 1
    }

    /// Insert an already allocated node.
    ///
    /// Keys already contained in the tree are dropped. If the node has
    /// children, they are detached and their keys are inserted one by one.
    /// Returns the number of keys added.
    pub fn insert_node(&mut self, node: Box<Node>) -> usize {
        let added = match self.root {
            Some(ref mut root) => attach_all(root, node),
            None => {
                tracing::trace!(key = node.key(), "key inserted as root");
                let (root, added) = plant(node);
                self.root = Some(root);
                added
            }
        };
        self.len += added;
        added
    }

    /// Return `true` if the tree contains `key`.
    pub fn contains(&self, key: Key) -> bool {
        let mut cur = self.root();
        while let Some(node) = cur {
            cur = match key.cmp(&node.key()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Return an iterator over the keys in preorder.
    pub fn preorder(&self) -> Preorder<'_> {
        preorder(self.root())
    }

    /// Return `true` if the search tree ordering holds at every node.
    pub fn is_search_tree(&self) -> bool {
        let mut stack: Vec<(&Node, Option<Key>, Option<Key>)> = vec![];
        stack.extend(self.root().map(|r| (r, None, None)));
        while let Some((node, lo, hi)) = stack.pop() {
            let k = node.key();
            if lo.map_or(false, |lo| k <= lo) || hi.map_or(false, |hi| k >= hi) {
                return false;
            }
            if let Some(l) = node.left() {
                stack.push((l, lo, Some(k)));
            }
            if let Some(r) = node.right() {
                stack.push((r, Some(k), hi));
            }
        }
        true
    }
}

impl Clone for Tree {
    fn clone(&self) -> Self {
        Tree {
            root: self.root().map(clone_subtree),
            len: self.len,
        }
    }
}

// Distinct keys in preorder determine a search tree.
impl PartialEq for Tree {
    fn eq(&self, other: &Tree) -> bool {
        self.len == other.len && self.preorder().eq(other.preorder())
    }
}

impl Eq for Tree {}

impl fmt::Debug for Tree {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Tree")
            .field("len", &self.len)
            .field("preorder", &self.preorder().collect::<Vec<_>>())
            .finish()
    }
}

impl From<Vec<Key>> for Tree {
    fn from(keys: Vec<Key>) -> Self {
        keys.into_iter().collect()
    }
}

impl From<Tree> for Vec<Key> {
    fn from(tree: Tree) -> Self {
        tree.preorder().collect()
    }
}

impl fmt::Display for Tree {
    /// Write the keys in preorder separated by spaces.
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for (i, key) in self.preorder().enumerate() {
            if i > 0 {
                write!(fmt, " ")?;
            }
            write!(fmt, "{}", key)?;
        }
        Ok(())
    }
}

impl Extend<Key> for Tree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl FromIterator<Key> for Tree {
    fn from_iter<I: IntoIterator<Item = Key>>(keys: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(keys);
        tree
    }
}
