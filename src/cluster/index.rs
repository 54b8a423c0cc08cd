//! Epsilon-neighborhood search.
//!
//! Both strategies return the same neighbors, in ascending index order, for
//! every query. The grid only changes how many distance tests are made.

use std::collections::HashMap;

use crate::point::Point;

/// Strategy used to answer epsilon-neighborhood queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeighborIndex {
    /// Test every pair: O(n) per query, O(n²) per run.
    #[default]
    BruteForce,
    /// Bucket points into a uniform grid and only test nearby cells.
    Grid,
}

/// A neighborhood searcher bound to one point slice and one radius.
pub(crate) enum Searcher<'a> {
    BruteForce {
        points: &'a [Point],
        eps: f64,
    },
    Grid {
        points: &'a [Point],
        eps: f64,
        cell_size: f64,
        cells: HashMap<(i64, i64), Vec<usize>>,
    },
}

impl<'a> Searcher<'a> {
    pub(crate) fn new(kind: NeighborIndex, points: &'a [Point], eps: f64) -> Self {
        match kind {
            NeighborIndex::BruteForce => Self::BruteForce { points, eps },
            NeighborIndex::Grid => {
                // Cells are twice eps wide so rounding in the cell computation
                // can never push a true neighbor outside the 3×3 block.
                let cell_size = 2.0 * eps;
                let mut cells: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
                for (idx, p) in points.iter().enumerate() {
                    cells.entry(cell_of(p, cell_size)).or_default().push(idx);
                }
                Self::Grid {
                    points,
                    eps,
                    cell_size,
                    cells,
                }
            }
        }
    }

    /// Indices `q != idx` with `distance(idx, q) <= eps`, ascending.
    pub(crate) fn neighbors(&self, idx: usize) -> Vec<usize> {
        match self {
            Self::BruteForce { points, eps } => {
                let point = &points[idx];
                points
                    .iter()
                    .enumerate()
                    .filter(|(other_idx, other)| {
                        *other_idx != idx && point.distance(other) <= *eps
                    })
                    .map(|(other_idx, _)| other_idx)
                    .collect()
            }
            Self::Grid {
                points,
                eps,
                cell_size,
                cells,
            } => {
                let point = &points[idx];
                let (cx, cy) = cell_of(point, *cell_size);
                let mut out = Vec::new();
                for gx in cx.saturating_sub(1)..=cx.saturating_add(1) {
                    for gy in cy.saturating_sub(1)..=cy.saturating_add(1) {
                        let Some(bucket) = cells.get(&(gx, gy)) else {
                            continue;
                        };
                        out.extend(bucket.iter().copied().filter(|&other_idx| {
                            other_idx != idx && point.distance(&points[other_idx]) <= *eps
                        }));
                    }
                }
                out.sort_unstable();
                out
            }
        }
    }
}

#[inline]
fn cell_of(p: &Point, cell_size: f64) -> (i64, i64) {
    (
        (p.x / cell_size).floor() as i64,
        (p.y / cell_size).floor() as i64,
    )
}
