// Copyright (c) 2016, 2017, 2018, 2020, 2022, 2024 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! All-Pairs-Shortest-Path algorithm of Floyd and Warshall.
//!
//! The algorithm works in place on a [`DistanceMatrix`]. After the `k`-th
//! round every entry `(i, j)` is the length of a shortest path from `i` to
//! `j` that only uses the vertices `0..=k` as intermediate vertices. A
//! distance is only extended if both parts are finite, so unreachable pairs
//! keep the sentinel of the matrix.
//!
//! Negative edge weights are allowed. If the graph contains a cycle of
//! negative length the result is unspecified; no attempt is made to detect
//! such cycles. Integer distances must be small enough in magnitude that
//! sums of two of them do not overflow.
//!
//! The running time is `O(n^3)` and no memory besides the matrix (and the
//! predecessor table for [`all_pairs_with_paths`]) is used.

use super::DistanceMatrix;
#[cfg(feature = "serialize")]
use crate::error::Error;
use crate::error::Result;
use crate::num::traits::NumAssign;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};
#[cfg(feature = "serialize")]
use std::convert::TryFrom;

/// Solve the All-Pairs-Shortest-Path-Problem with the algorithm of
/// Floyd and Warshall.
///
/// The matrix must contain the direct distances on input and contains the
/// shortest path distances on output. Returns the same matrix.
///
/// # Example
/// ```
/// use rs_classics::shortestpath::{floydwarshall, DistanceMatrix};
///
/// let edges = vec![(0,1,6), (0,2,5),
///                  (1,2,7), (1,3,3), (1,4,-2),
///                  (2,3,-4), (3,4,8),
///                  (3,1,-1),
///                  (4,0,2), (4,3,7)];
/// let mut dist = DistanceMatrix::from_edges(5, edges, 1000).unwrap();
/// floydwarshall::all_pairs(&mut dist);
///
/// assert_eq!(dist.into_rows(), vec![vec![ 0, 0, 5, 1,-2],
///                                   vec![ 0, 0, 5, 1,-2],
///                                   vec![-5,-5, 0,-4,-7],
///                                   vec![-1,-1, 4, 0,-3],
///                                   vec![ 2, 2, 7, 3, 0]]);
/// ```
pub fn all_pairs<W>(dist: &mut DistanceMatrix<W>) -> &mut DistanceMatrix<W>
where
    W: NumAssign + PartialOrd + Copy,
{
    relax(dist, |_, _, _| {});
    dist
}

/// Run [`all_pairs`] on a matrix given as rows.
///
/// Entries not smaller than `infinity` mean "no edge". Returns
/// [`Error::NotSquare`][crate::error::Error::NotSquare] if the input is not a
/// square matrix.
///
/// # Example
/// ```
/// use rs_classics::shortestpath::floydwarshall;
///
/// let inf = 1e8;
/// let dist = floydwarshall::all_pairs_rows(vec![vec![0.0, 1.0, inf],
///                                               vec![1.0, 0.0, 1.0],
///                                               vec![inf, 1.0, 0.0]], inf).unwrap();
/// assert_eq!(dist[0][2], 2.0);
/// ```
pub fn all_pairs_rows<W>(rows: Vec<Vec<W>>, infinity: W) -> Result<Vec<Vec<W>>>
where
    W: NumAssign + PartialOrd + Copy,
{
    let mut dist = DistanceMatrix::with_infinity(rows, infinity)?;
    all_pairs(&mut dist);
    Ok(dist.into_rows())
}

/// Predecessors on the shortest paths computed by [`all_pairs_with_paths`].
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(try_from = "RawPaths"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paths {
    size: usize,
    pred: Vec<Option<usize>>,
}

#[cfg(feature = "serialize")]
#[derive(Deserialize)]
struct RawPaths {
    size: usize,
    pred: Vec<Option<usize>>,
}

#[cfg(feature = "serialize")]
impl TryFrom<RawPaths> for Paths {
    type Error = Error;

    fn try_from(raw: RawPaths) -> Result<Self> {
        let RawPaths { size, pred } = raw;
        if size.checked_mul(size) != Some(pred.len()) {
            return Err(Error::WrongLength { len: pred.len(), size });
        }
        if let Some(vertex) = pred.iter().flatten().copied().find(|&v| v >= size) {
            return Err(Error::VertexOutOfRange { vertex, size });
        }
        Ok(Paths { size, pred })
    }
}

impl Paths {
    /// Return the last vertex before `j` on a shortest path from `i` to `j`.
    ///
    /// This is `i` itself for `i == j`, `None` if there is no path.
    pub fn pred(&self, i: usize, j: usize) -> Option<usize> {
        assert!(i < self.size && j < self.size, "vertex out of range");
        self.pred[i * self.size + j]
    }

    /// Return the vertices of a shortest path from `i` to `j`.
    ///
    /// The path starts with `i` and ends with `j`. Returns `None` if there is
    /// no path from `i` to `j` or if the predecessors do not form a path, which
    /// may happen if there is a negative cycle.
    pub fn path(&self, i: usize, j: usize) -> Option<Vec<usize>> {
        let mut path = vec![j];
        let mut v = j;
        while v != i {
            v = self.pred(i, v)?;
            path.push(v);
            if path.len() > self.size {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Solve the All-Pairs-Shortest-Path-Problem and record the paths.
///
/// Same as [`all_pairs`] but additionally returns the predecessor of the last
/// vertex of each shortest path, from which the paths can be rebuilt.
///
/// # Example
/// ```
/// use rs_classics::shortestpath::{floydwarshall, DistanceMatrix};
///
/// let mut dist = DistanceMatrix::from_edges(4, vec![(0,1,3), (1,2,1), (0,2,10), (2,3,2)], 1000).unwrap();
/// let paths = floydwarshall::all_pairs_with_paths(&mut dist);
/// assert_eq!(dist.get(0, 3), Some(6));
/// assert_eq!(paths.path(0, 3), Some(vec![0, 1, 2, 3]));
/// assert_eq!(paths.path(3, 0), None);
/// ```
pub fn all_pairs_with_paths<W>(dist: &mut DistanceMatrix<W>) -> Paths
where
    W: NumAssign + PartialOrd + Copy,
{
    let n = dist.size;
    let mut pred = vec![None; n * n];
    for i in 0..n {
        for j in 0..n {
            if dist.is_finite(i, j) {
                pred[i * n + j] = Some(i);
            }
        }
    }

    relax(dist, |i, k, j| pred[i * n + j] = pred[k * n + j]);

    Paths { size: n, pred }
}

/// The relaxation loop.
///
/// `improved(i, k, j)` is called whenever the path from `i` to `j` is
/// shortened by routing it through `k`.
fn relax<W, F>(dist: &mut DistanceMatrix<W>, mut improved: F)
where
    W: NumAssign + PartialOrd + Copy,
    F: FnMut(usize, usize, usize),
{
    let n = dist.size;
    let inf = dist.infinity;
    let d = &mut dist.data;

    tracing::debug!(size = n, "floyd-warshall started");
    let mut cnt = 0usize;

    // k must be the outermost loop
    for k in 0..n {
        for i in 0..n {
            if i == k {
                continue;
            }
            let dist_ik = d[i * n + k];
            if !(dist_ik < inf) {
                continue;
            }
            for j in 0..n {
                if j == k {
                    continue;
                }
                let dist_kj = d[k * n + j];
                if dist_kj < inf && dist_ik + dist_kj < d[i * n + j] {
                    d[i * n + j] = dist_ik + dist_kj;
                    improved(i, k, j);
                    cnt += 1;
                }
            }
        }
    }

    tracing::debug!(size = n, improvements = cnt, "floyd-warshall finished");
}

#[cfg(test)]
mod tests {
    use super::{all_pairs, all_pairs_rows, all_pairs_with_paths};
    use crate::error::ErrorKind;
    use crate::shortestpath::DistanceMatrix;

    const INF: i32 = 1_000_000;

    #[test]
    fn test_empty_and_single() {
        let mut m = DistanceMatrix::<i32>::new(vec![]).unwrap();
        all_pairs(&mut m);
        assert_eq!(m.size(), 0);

        let mut m = DistanceMatrix::with_infinity(vec![vec![0]], INF).unwrap();
        all_pairs(&mut m);
        assert_eq!(m.get(0, 0), Some(0));
    }

    #[test]
    fn test_rows_rejects_non_square() {
        let err = all_pairs_rows(vec![vec![0, 1], vec![1, 0], vec![2, 2]], INF).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_sentinel_stable() {
        // 0 -> 1 -> 2, nothing leaves 2 and nothing enters 0
        let rows = all_pairs_rows(vec![vec![0, 1, INF], vec![INF, 0, 1], vec![INF, INF, 0]], INF).unwrap();
        assert_eq!(rows, vec![vec![0, 1, 2], vec![INF, 0, 1], vec![INF, INF, 0]]);
    }

    #[test]
    fn test_default_infinity_no_overflow() {
        let inf = <i64 as crate::shortestpath::Infinity>::infinity();
        let mut m = DistanceMatrix::new(vec![vec![0, inf, inf], vec![inf, 0, inf], vec![inf, inf, 0]]).unwrap();
        all_pairs(&mut m);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m.get(i, j), if i == j { Some(0) } else { None });
            }
        }
    }

    #[test]
    fn test_paths() {
        let mut m = DistanceMatrix::from_undirected_edges(5, vec![(0, 1, 1), (1, 2, 1), (2, 3, 1), (0, 3, 5)], INF).unwrap();
        let paths = all_pairs_with_paths(&mut m);
        assert_eq!(m.get(0, 3), Some(3));
        assert_eq!(paths.path(0, 3), Some(vec![0, 1, 2, 3]));
        assert_eq!(paths.path(3, 0), Some(vec![3, 2, 1, 0]));
        assert_eq!(paths.path(2, 2), Some(vec![2]));
        assert_eq!(paths.pred(0, 3), Some(2));
        assert_eq!(paths.path(0, 4), None);
        assert_eq!(paths.pred(4, 1), None);
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_paths_serde() {
        use crate::shortestpath::Paths;

        let mut m = DistanceMatrix::from_edges(3, vec![(0, 1, 1), (1, 2, 1)], INF).unwrap();
        let paths = all_pairs_with_paths(&mut m);
        let serialized = serde_json::to_string(&paths).unwrap();
        let p: Paths = serde_json::from_str(&serialized).unwrap();
        assert_eq!(p, paths);
        assert_eq!(p.path(0, 2), Some(vec![0, 1, 2]));

        assert!(serde_json::from_str::<Paths>(r#"{"size":2,"pred":[0,null,1]}"#).is_err());
        assert!(serde_json::from_str::<Paths>(r#"{"size":1,"pred":[5]}"#).is_err());
    }

    #[test]
    fn test_paths_match_distances() {
        let edges = vec![(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5), (3, 4, 3), (4, 0, 1)];
        let direct = DistanceMatrix::from_edges(5, edges.clone(), INF).unwrap();
        let mut m = direct.clone();
        let paths = all_pairs_with_paths(&mut m);
        for i in 0..5 {
            for j in 0..5 {
                let path = paths.path(i, j).unwrap();
                let len: i32 = path.windows(2).map(|e| direct[(e[0], e[1])]).sum();
                assert_eq!(Some(len), m.get(i, j));
            }
        }
    }
}
