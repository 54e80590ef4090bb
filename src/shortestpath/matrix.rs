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

//! Dense square distance matrices.

use crate::error::{Error, Result};
use crate::num::traits::{Bounded, NumAssign};

#[cfg(feature = "serialize")]
use std::convert::TryFrom;
use std::ops::Index;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Weights with a default "no path" sentinel.
///
/// The sentinel is half the largest representable value, so the sum of two
/// finite distances never overflows.
pub trait Infinity: Copy {
    fn infinity() -> Self;
}

impl<W> Infinity for W
where
    W: NumAssign + Bounded + Copy,
{
    fn infinity() -> Self {
        W::max_value() / (W::one() + W::one())
    }
}

/// An `n x n` matrix of distances between vertices `0..n`.
///
/// Entry `(i, j)` is the length of the best known path from `i` to `j`.
/// Each matrix carries its own sentinel `infinity`: entries that are not
/// smaller than it (including `NaN` for floats) are stored as exactly
/// `infinity` and mean that there is no (known) path.
///
/// The sentinel must be chosen such that `infinity + infinity` does not
/// overflow `W`, the relaxation in
/// [`floydwarshall`][crate::shortestpath::floydwarshall] adds two finite
/// entries without checking. [`Infinity::infinity`] satisfies this.
///
/// With the `serialize` feature, deserialized matrices are checked like
/// matrices built from rows.
///
/// # Example
///
/// ```
/// use rs_classics::shortestpath::DistanceMatrix;
///
/// let inf = 1_000_000;
/// let m = DistanceMatrix::with_infinity(vec![vec![0, 4], vec![inf, 0]], inf).unwrap();
/// assert_eq!(m.size(), 2);
/// assert_eq!(m.get(0, 1), Some(4));
/// assert_eq!(m.get(1, 0), None);
/// assert_eq!(m[(1, 0)], inf);
///
/// assert!(DistanceMatrix::with_infinity(vec![vec![0, 1], vec![0]], inf).is_err());
/// ```
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serialize",
    serde(
        try_from = "RawMatrix<W>",
        bound(deserialize = "W: serde::Deserialize<'de> + NumAssign + PartialOrd + Copy")
    )
)]
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix<W> {
    pub(super) size: usize,
    pub(super) infinity: W,
    pub(super) data: Vec<W>,
}

impl<W> DistanceMatrix<W>
where
    W: NumAssign + PartialOrd + Copy,
{
    /// Create a matrix from rows using the default sentinel of `W`.
    ///
    /// Returns [`Error::NotSquare`] if some row does not have exactly as many
    /// entries as there are rows.
    pub fn new(rows: Vec<Vec<W>>) -> Result<Self>
    where
        W: Infinity,
    {
        Self::with_infinity(rows, W::infinity())
    }

    /// Create a matrix from rows with an explicit sentinel.
    ///
    /// `infinity + infinity` must not overflow `W`. This is not checked.
    pub fn with_infinity(rows: Vec<Vec<W>>, infinity: W) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != size {
                return Err(Error::NotSquare {
                    row,
                    len: r.len(),
                    size,
                });
            }
            data.extend(r.into_iter().map(|x| clamp(x, infinity)));
        }
        Ok(DistanceMatrix { size, infinity, data })
    }

    /// Create the matrix of direct distances of a directed graph.
    ///
    /// The graph has the vertices `0..n`, each edge is a triple `(u, v, w)`
    /// of source, sink and weight. Self-distances are zero unless lowered by
    /// a negative loop, of parallel edges the shortest one is kept.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_classics::shortestpath::DistanceMatrix;
    ///
    /// let m = DistanceMatrix::from_edges(3, vec![(0, 1, 5), (0, 1, 2), (1, 2, 1)], 1000).unwrap();
    /// assert_eq!(m.get(0, 1), Some(2));
    /// assert_eq!(m.get(1, 0), None);
    /// assert_eq!(m.get(2, 2), Some(0));
    /// ```
    pub fn from_edges<I>(n: usize, edges: I, infinity: W) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut m = Self::unconnected(n, infinity);
        for (u, v, w) in edges {
            m.check_vertex(u)?;
            m.check_vertex(v)?;
            m.lower(u, v, w);
        }
        Ok(m)
    }

    /// Create the matrix of direct distances of an undirected graph.
    ///
    /// Same as [`DistanceMatrix::from_edges`] but each edge can be used in
    /// both directions.
    pub fn from_undirected_edges<I>(n: usize, edges: I, infinity: W) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut m = Self::unconnected(n, infinity);
        for (u, v, w) in edges {
            m.check_vertex(u)?;
            m.check_vertex(v)?;
            m.lower(u, v, w);
            m.lower(v, u, w);
        }
        Ok(m)
    }

    fn unconnected(n: usize, infinity: W) -> Self {
        let mut data = vec![infinity; n * n];
        for i in 0..n {
            data[i * n + i] = W::zero();
        }
        DistanceMatrix { size: n, infinity, data }
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.size {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                vertex,
                size: self.size,
            })
        }
    }

    fn lower(&mut self, u: usize, v: usize, w: W) {
        let idx = u * self.size + v;
        if w < self.data[idx] {
            self.data[idx] = w;
        }
    }

    /// Return the number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the sentinel meaning "no path".
    pub fn infinity(&self) -> W {
        self.infinity
    }

    /// Return `true` if there is a known path from `i` to `j`.
    pub fn is_finite(&self, i: usize, j: usize) -> bool {
        self[(i, j)] < self.infinity
    }

    /// Return the distance from `i` to `j` or `None` if there is no path.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not a vertex.
    pub fn get(&self, i: usize, j: usize) -> Option<W> {
        let d = self[(i, j)];
        if d < self.infinity {
            Some(d)
        } else {
            None
        }
    }

    /// Set the distance from `i` to `j`.
    ///
    /// Values not smaller than the sentinel are stored as the sentinel.
    pub fn set(&mut self, i: usize, j: usize, w: W) {
        assert!(i < self.size && j < self.size, "vertex out of range");
        self.data[i * self.size + j] = clamp(w, self.infinity);
    }

    /// Return an iterator over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[W]> + '_ {
        // `chunks(0)` panics, the empty matrix has no rows anyway
        self.data.chunks(self.size.max(1))
    }

    /// Return the entries as a vector of rows.
    pub fn into_rows(self) -> Vec<Vec<W>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    /// Return `true` if `(i, j)` and `(j, i)` agree for all pairs.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (0..i).all(|j| self[(i, j)] == self[(j, i)]))
    }
}

impl<W> Index<(usize, usize)> for DistanceMatrix<W> {
    type Output = W;

    fn index(&self, (i, j): (usize, usize)) -> &W {
        assert!(i < self.size && j < self.size, "vertex out of range");
        &self.data[i * self.size + j]
    }
}

/// Unchecked serialized form of a [`DistanceMatrix`].
#[cfg(feature = "serialize")]
#[derive(Deserialize)]
struct RawMatrix<W> {
    size: usize,
    infinity: W,
    data: Vec<W>,
}

#[cfg(feature = "serialize")]
impl<W> TryFrom<RawMatrix<W>> for DistanceMatrix<W>
where
    W: NumAssign + PartialOrd + Copy,
{
    type Error = Error;

    fn try_from(raw: RawMatrix<W>) -> Result<Self> {
        let RawMatrix { size, infinity, data } = raw;
        if size.checked_mul(size) != Some(data.len()) {
            return Err(Error::WrongLength { len: data.len(), size });
        }
        let data = data.into_iter().map(|x| clamp(x, infinity)).collect();
        Ok(DistanceMatrix { size, infinity, data })
    }
}

fn clamp<W: PartialOrd>(x: W, infinity: W) -> W {
    if x < infinity {
        x
    } else {
        infinity
    }
}
