//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points by neighborhood density. It discovers zones of
//! arbitrary shape, does not need the number of zones up front, and leaves
//! sparse outliers as noise.
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: maximum distance between two points to be neighbors.
//! - **MinPts**: minimum number of points within ε, the point itself
//!   included, for a point to be "core".
//! - **Core point**: has at least MinPts points within ε.
//! - **Border point**: within ε of a core point but not core itself.
//! - **Noise point**: neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. For each unvisited point P:
//!    - Find neighbors within ε
//!    - If P is not core, leave it unassigned (it may become a border point later)
//!    - Else start a new cluster and expand it breadth-first from P's neighbors
//!
//! 2. Expansion: for each queued point Q:
//!    - On first visit, if Q is core, queue all of Q's neighbors
//!    - If Q is not yet in any cluster, add it to this one
//!
//! 3. Noise is whatever no cluster claimed once every point has been visited.
//!
//! A border point reachable from two clusters stays in the first one that
//! reached it. Clusters only ever grow during a run.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) with [`NeighborIndex::BruteForce`]; close to O(n·k) with
//!   [`NeighborIndex::Grid`] when points are spread out.
//! - **Space**: O(n) for the visited and ownership arrays.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::index::{NeighborIndex, Searcher};
use super::result::ClusterResult;
use super::traits::Clustering;
use crate::error::{Error, Result};
use crate::point::Point;

/// DBSCAN clustering algorithm.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dbscan {
    /// Epsilon: maximum distance for neighborhood.
    eps: f64,
    /// Minimum points (self included) for core point classification.
    min_pts: usize,
    /// Neighborhood search strategy.
    index: NeighborIndex,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `eps` - Maximum distance between two points to be neighbors.
    /// * `min_pts` - Minimum number of points, the candidate included, to form a dense region.
    ///
    /// Parameters are checked when [`fit`](Clustering::fit) runs.
    pub fn new(eps: f64, min_pts: usize) -> Self {
        Self {
            eps,
            min_pts,
            index: NeighborIndex::default(),
        }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Set minimum points for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Set the neighborhood search strategy. Results do not depend on it.
    pub fn with_index(mut self, index: NeighborIndex) -> Self {
        self.index = index;
        self
    }

    /// Neighborhood radius.
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Core point threshold.
    pub fn min_pts(&self) -> usize {
        self.min_pts
    }

    fn validate(&self) -> Result<()> {
        if self.eps.is_nan() || self.eps <= 0.0 {
            return Err(Error::invalid("eps", "must be positive"));
        }
        if self.min_pts == 0 {
            return Err(Error::invalid("min_pts", "must be at least 1"));
        }
        Ok(())
    }

    /// `neighbors` excludes the point itself, so it counts for one more.
    #[inline]
    fn is_core(&self, neighbors: &[usize]) -> bool {
        neighbors.len() + 1 >= self.min_pts
    }

    /// Grow a new cluster from the core point `point_idx`.
    fn expand_cluster(
        &self,
        search: &Searcher<'_>,
        point_idx: usize,
        neighbors: Vec<usize>,
        cluster_id: usize,
        owner: &mut [Option<usize>],
        visited: &mut [bool],
    ) -> Vec<usize> {
        owner[point_idx] = Some(cluster_id);
        let mut members = vec![point_idx];

        // Duplicates are allowed in the queue; `visited` keeps each point
        // from being expanded twice.
        let mut queue: VecDeque<usize> = neighbors.into();

        while let Some(neighbor_idx) = queue.pop_front() {
            if !visited[neighbor_idx] {
                visited[neighbor_idx] = true;
                let neighbor_neighbors = search.neighbors(neighbor_idx);
                if self.is_core(&neighbor_neighbors) {
                    queue.extend(neighbor_neighbors);
                }
            }

            // Points visited earlier as provisional noise are claimed here as
            // border points. Points owned by an earlier cluster stay there.
            if owner[neighbor_idx].is_none() {
                owner[neighbor_idx] = Some(cluster_id);
                members.push(neighbor_idx);
            }
        }

        members
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(20.0, 4)
    }
}

impl Clustering for Dbscan {
    fn fit(&self, points: &[Point]) -> Result<ClusterResult> {
        self.validate()?;

        let n = points.len();
        let search = Searcher::new(self.index, points, self.eps);
        let mut visited = vec![false; n];
        let mut owner: Vec<Option<usize>> = vec![None; n];
        let mut clusters: Vec<Vec<usize>> = Vec::new();

        for point_idx in 0..n {
            if visited[point_idx] {
                continue;
            }
            visited[point_idx] = true;

            let neighbors = search.neighbors(point_idx);
            if !self.is_core(&neighbors) {
                continue;
            }

            let cluster_id = clusters.len();
            let members = self.expand_cluster(
                &search,
                point_idx,
                neighbors,
                cluster_id,
                &mut owner,
                &mut visited,
            );
            trace!(
                cluster = cluster_id,
                seed = point_idx,
                size = members.len(),
                "expanded cluster"
            );
            clusters.push(members);
        }

        let noise: Vec<usize> = owner
            .iter()
            .enumerate()
            .filter(|(_, o)| o.is_none())
            .map(|(idx, _)| idx)
            .collect();

        debug!(
            points = n,
            eps = self.eps,
            min_pts = self.min_pts,
            clusters = clusters.len(),
            noise = noise.len(),
            "dbscan finished"
        );

        Ok(ClusterResult { clusters, noise })
    }
}
