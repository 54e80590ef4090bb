// Copyright (c) 2015-2022, 2024 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![forbid(unsafe_code)]

//! A library of classic data structures and algorithms.
//!
//! - [`searchtree`]: unbalanced binary search trees with preorder traversal,
//! - [`shortestpath`]: all-pairs shortest paths on dense distance matrices.
//!
//! The two parts are independent of each other. Both are single threaded,
//! a tree or matrix can be moved between threads but must be accessed by
//! one of them at a time.

mod num {
    pub use num_traits as traits;
}

pub mod error;
pub use self::error::{Error, ErrorKind, Result};

pub mod collections;

// # Data structures

pub mod searchtree;
pub use self::searchtree::Tree;

// # Algorithms

pub mod shortestpath;
pub use self::shortestpath::DistanceMatrix;
