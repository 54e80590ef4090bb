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

//! # Unbalanced binary search trees.
//!
//! A tree is a strict ownership hierarchy of [`Node`]s: every node owns its
//! (at most two) children and nothing else refers to them. For every node all
//! keys in its left subtree are smaller and all keys in its right subtree are
//! larger than its own key. Keys are unique, inserting a key that is already
//! present leaves the tree unchanged.
//!
//! The tree is not balanced, inserting sorted keys yields a path.
//!
//! # Example
//!
//! ```
//! use rs_classics::searchtree::{self, Tree};
//!
//! let tree: Tree = [5, 3, 8, 1, 4].iter().copied().collect();
//! assert_eq!(tree.preorder().collect::<Vec<_>>(), vec![5, 3, 1, 4, 8]);
//!
//! // The same tree built from explicitly created nodes.
//! let mut root = None;
//! for &key in &[5, 3, 8, 1, 4] {
//!     root = Some(searchtree::insert(root, searchtree::create_node(key)));
//! }
//! let keys: Vec<_> = searchtree::preorder(root.as_deref()).collect();
//! assert_eq!(keys, vec![5, 3, 1, 4, 8]);
//! ```

mod node;
pub use self::node::{create_node, insert, Key, Node};

mod tree;
pub use self::tree::Tree;

pub mod preorder;
pub use self::preorder::{preorder, preorder_with_data, Preorder};
