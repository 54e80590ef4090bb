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

use std::cmp::Ordering;
use std::fmt;

/// The key type stored in a tree.
pub type Key = i64;

/// A node of a binary search tree.
///
/// The child links are only set by insertion, a node is never modified
/// afterwards. Dropping a node drops its subtrees without recursion.
pub struct Node {
    key: Key,
    pub(super) left: Option<Box<Node>>,
    pub(super) right: Option<Box<Node>>,
}

impl Node {
    /// Create a node without children.
    pub fn new(key: Key) -> Self {
        Node {
            key,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    /// Return the root of the left subtree.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// Return the root of the right subtree.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Return `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Detach both subtrees, left first.
    fn take_children(&mut self) -> impl Iterator<Item = Box<Node>> {
        self.left.take().into_iter().chain(self.right.take())
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.take_children().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_children());
        }
    }
}

impl fmt::Debug for Node {
    /// Only the keys of the direct children are shown.
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

/// Allocate a new node with the given key and no children.
pub fn create_node(key: Key) -> Box<Node> {
    Box::new(Node::new(key))
}

/// Insert `node` into the subtree rooted at `root`.
///
/// Returns the root of the resulting subtree. This is `node` itself if the
/// subtree was empty and `root` otherwise. If a node with the same key is
/// already contained in the subtree, `node` is dropped and the subtree is
/// returned unchanged.
///
/// Should `node` have children, they are detached and their keys are
/// inserted one by one in preorder.
///
/// # Example
///
/// ```
/// use rs_classics::searchtree::{create_node, insert};
///
/// let root = insert(None, create_node(2));
/// let root = insert(Some(root), create_node(1));
/// let root = insert(Some(root), create_node(3));
/// assert_eq!(root.key(), 2);
/// assert_eq!(root.left().map(|n| n.key()), Some(1));
/// assert_eq!(root.right().map(|n| n.key()), Some(3));
/// ```
pub fn insert(root: Option<Box<Node>>, node: Box<Node>) -> Box<Node> {
    match root {
        None => plant(node).0,
        Some(mut root) => {
            attach_all(&mut root, node);
            root
        }
    }
}

/// Make `node` the root of a new tree.
///
/// Returns the root and the number of keys in the tree.
pub(super) fn plant(mut node: Box<Node>) -> (Box<Node>, usize) {
    let children: Vec<_> = node.take_children().collect();
    let mut cnt = 1;
    for child in children {
        cnt += attach_all(&mut node, child);
    }
    (node, cnt)
}

/// Insert all keys of the subtree `node` below `root`.
///
/// Returns the number of keys actually added.
pub(super) fn attach_all(root: &mut Node, node: Box<Node>) -> usize {
    let mut pending = vec![node];
    let mut cnt = 0;
    while let Some(mut node) = pending.pop() {
        // right first, so the keys are inserted in preorder
        pending.extend(node.right.take());
        pending.extend(node.left.take());
        if attach(root, node) {
            cnt += 1;
        }
    }
    cnt
}

/// Attach the leaf `node` below `root`.
///
/// Returns `false` (and drops `node`) if the key is already present.
fn attach(root: &mut Node, node: Box<Node>) -> bool {
    debug_assert!(node.is_leaf());
    let mut cur = root;
    loop {
        let parent = cur.key;
        let slot = match node.key.cmp(&parent) {
            Ordering::Less => &mut cur.left,
            Ordering::Greater => &mut cur.right,
            Ordering::Equal => {
                tracing::trace!(key = node.key, "duplicate key discarded");
                return false;
            }
        };
        match slot {
            Some(child) => cur = &mut **child,
            None => {
                tracing::trace!(key = node.key, parent, "key inserted");
                *slot = Some(node);
                return true;
            }
        }
    }
}

/// Copy the subtree rooted at `root` without recursion.
pub(super) fn clone_subtree(root: &Node) -> Box<Node> {
    // visit node, right, left; reversed this is postorder
    let mut order = vec![];
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        order.push(node);
        stack.extend(node.left());
        stack.extend(node.right());
    }

    let mut built: Vec<Box<Node>> = Vec::with_capacity(order.len());
    for node in order.into_iter().rev() {
        let mut copy = create_node(node.key);
        if node.right.is_some() {
            copy.right = built.pop();
        }
        if node.left.is_some() {
            copy.left = built.pop();
        }
        built.push(copy);
    }
    // `order` is never empty, it starts with `root`
    built.pop().unwrap_or_else(|| create_node(root.key))
}

#[cfg(test)]
mod tests {
    use super::{attach_all, clone_subtree, create_node, insert, plant, Node};
    use crate::searchtree::preorder;

    fn keys(root: &Node) -> Vec<i64> {
        preorder(Some(root)).collect()
    }

    #[test]
    fn test_create_node() {
        let n = create_node(-7);
        assert_eq!(n.key(), -7);
        assert!(n.is_leaf());
        assert!(n.left().is_none());
        assert!(n.right().is_none());
    }

    #[test]
    fn test_insert_empty() {
        let root = insert(None, create_node(42));
        assert_eq!(root.key(), 42);
        assert!(root.is_leaf());
    }

    #[test]
    fn test_insert_sides() {
        let mut root = insert(None, create_node(10));
        for &k in &[5, 15, 3, 7, 12, 20] {
            root = insert(Some(root), create_node(k));
        }
        assert_eq!(root.key(), 10);

        let l = root.left().unwrap();
        let r = root.right().unwrap();
        assert_eq!(l.key(), 5);
        assert_eq!(r.key(), 15);
        assert_eq!(l.left().unwrap().key(), 3);
        assert_eq!(l.right().unwrap().key(), 7);
        assert_eq!(r.left().unwrap().key(), 12);
        assert_eq!(r.right().unwrap().key(), 20);
    }

    #[test]
    fn test_duplicate_discarded() {
        let mut root = Node::new(4);
        assert_eq!(attach_all(&mut root, create_node(2)), 1);
        assert_eq!(attach_all(&mut root, create_node(2)), 0);
        assert_eq!(attach_all(&mut root, create_node(4)), 0);
        assert_eq!(root.left().unwrap().key(), 2);
        assert!(root.left().unwrap().is_leaf());
        assert!(root.right().is_none());
    }

    #[test]
    fn test_insert_subtree_reorders_keys() {
        // 1 -> right 100, then grafted below 50
        let sub = insert(Some(create_node(1)), create_node(100));
        let root = insert(Some(create_node(50)), sub);
        assert_eq!(keys(&root), vec![50, 1, 100]);
        assert_eq!(root.left().unwrap().key(), 1);
        assert!(root.left().unwrap().is_leaf());
        assert_eq!(root.right().unwrap().key(), 100);
    }

    #[test]
    fn test_plant_subtree() {
        // an unordered subtree becomes a proper search tree
        let mut node = create_node(5);
        node.left = Some(create_node(9));
        node.right = Some(create_node(5));
        let (root, cnt) = plant(node);
        assert_eq!(cnt, 2);
        assert_eq!(keys(&root), vec![5, 9]);
        assert_eq!(root.right().unwrap().key(), 9);
    }

    #[test]
    fn test_clone_subtree() {
        let mut root = create_node(8);
        for &k in &[4, 12, 2, 6, 10, 14, 1] {
            root = insert(Some(root), create_node(k));
        }
        let copy = clone_subtree(&root);
        assert_eq!(keys(&copy), keys(&root));
        assert_eq!(copy.left().unwrap().left().unwrap().left().unwrap().key(), 1);
    }

    #[test]
    fn test_deep_path() {
        let mut root = create_node(0);
        for k in 1..200_000 {
            // grow the path directly, insertion would be quadratic
            let mut n = create_node(k);
            n.left = Some(root);
            root = n;
        }
        let copy = clone_subtree(&root);
        assert_eq!(copy.key(), 199_999);
        drop(root);
        drop(copy);
    }

    #[test]
    fn test_debug() {
        let root = insert(Some(create_node(2)), create_node(1));
        assert_eq!(format!("{:?}", root), "Node { key: 2, left: Some(1), right: None }");
    }
}
