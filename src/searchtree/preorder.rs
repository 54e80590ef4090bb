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

//! Preorder traversal.
//!
//! The traversal visits a node before its left subtree and the left subtree
//! before the right subtree. It is implemented as an iterator over the keys
//! that keeps the pending subtrees on an explicit stack, so arbitrarily deep
//! trees can be traversed.
//!
//! # Example
//!
//! ```
//! use rs_classics::searchtree::{preorder, Tree};
//!
//! let tree: Tree = vec![2, 1, 3].into_iter().collect();
//! let keys: Vec<_> = preorder(tree.root()).collect();
//! assert_eq!(keys, vec![2, 1, 3]);
//! ```

use super::{Key, Node};
use crate::collections::ItemStack;

use std::marker::PhantomData;

/// Start and return a preorder iterator using a `Vec` as stack.
///
/// The iterator is empty if `root` is `None`.
pub fn preorder(root: Option<&Node>) -> Preorder<'_> {
    preorder_with_data(root, Vec::new())
}

/// Start and return a preorder iterator with a user defined stack.
///
/// The stack is cleared before use and can be recovered with
/// [`Preorder::into_data`] to traverse further trees without reallocating.
///
/// # Example
///
/// ```
/// use rs_classics::searchtree::{preorder_with_data, Tree};
///
/// let a: Tree = vec![2, 1, 3].into_iter().collect();
/// let b: Tree = vec![7, 9].into_iter().collect();
///
/// let mut it = preorder_with_data(a.root(), Vec::with_capacity(16));
/// assert_eq!(it.by_ref().collect::<Vec<_>>(), vec![2, 1, 3]);
///
/// let stack = it.into_data();
/// let keys: Vec<_> = preorder_with_data(b.root(), stack).collect();
/// assert_eq!(keys, vec![7, 9]);
/// ```
pub fn preorder_with_data<'a, S>(root: Option<&'a Node>, data: S) -> Preorder<'a, S>
where
    S: ItemStack<&'a Node>,
{
    let mut stack = data;
    stack.clear();
    if let Some(root) = root {
        stack.push(root);
    }
    Preorder {
        stack,
        phantom: PhantomData,
    }
}

/// Iterator over the keys of a tree in preorder.
#[derive(Clone)]
pub struct Preorder<'a, S = Vec<&'a Node>>
where
    S: ItemStack<&'a Node>,
{
    stack: S,
    phantom: PhantomData<&'a Node>,
}

impl<'a, S> Iterator for Preorder<'a, S>
where
    S: ItemStack<&'a Node>,
{
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        let node = self.stack.pop()?;
        // right first, so the left subtree is popped next
        if let Some(r) = node.right() {
            self.stack.push(r);
        }
        if let Some(l) = node.left() {
            self.stack.push(l);
        }
        Some(node.key())
    }
}

impl<'a, S> Preorder<'a, S>
where
    S: ItemStack<&'a Node>,
{
    /// Return the stack used by the traversal.
    pub fn into_data(self) -> S {
        self.stack
    }
}

#[cfg(test)]
mod tests {
    use super::{preorder, preorder_with_data};
    use crate::searchtree::{create_node, insert, Tree};

    #[test]
    fn test_empty() {
        assert_eq!(preorder(None).next(), None);
    }

    #[test]
    fn test_order() {
        let mut root = None;
        for &k in &[5, 3, 8, 1, 4] {
            root = Some(insert(root, create_node(k)));
        }
        let keys: Vec<_> = preorder(root.as_deref()).collect();
        assert_eq!(keys, vec![5, 3, 1, 4, 8]);
    }

    #[test]
    fn test_restartable() {
        let tree: Tree = vec![10, 5, 1, 7, 15, 12].into_iter().collect();
        let first: Vec<_> = tree.preorder().collect();
        let second: Vec<_> = tree.preorder().collect();
        assert_eq!(first, vec![10, 5, 1, 7, 15, 12]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_borrowed_stack() {
        let tree: Tree = vec![2, 1, 3].into_iter().collect();
        let mut stack = vec![tree.root().unwrap(); 4];
        let keys: Vec<_> = preorder_with_data(tree.root(), &mut stack).collect();
        assert_eq!(keys, vec![2, 1, 3]);
        assert!(stack.is_empty());
    }
}
