//! The partition produced by a clustering run.

use crate::error::{Error, Result};
use crate::point::Point;

/// Clusters plus noise, indexed positionally into the clustered point slice.
///
/// Every index in `0..n_points()` appears exactly once: either in one cluster
/// or in `noise`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterResult {
    /// Point indices per cluster, in the order clusters were discovered.
    pub clusters: Vec<Vec<usize>>,
    /// Indices not density-reachable from any core point, ascending.
    pub noise: Vec<usize>,
}

/// Aggregate geometry of one cluster, for legends and zone overlays.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneSummary {
    /// Position of the cluster in [`ClusterResult::clusters`].
    pub cluster: usize,
    /// Number of member points.
    pub size: usize,
    /// Mean of the member coordinates.
    pub centroid: Point,
    /// Largest member distance from the centroid.
    pub radius: f64,
}

impl ClusterResult {
    /// Number of clusters found.
    pub fn n_clusters(&self) -> usize {
        self.clusters.len()
    }

    /// Number of points the result covers.
    pub fn n_points(&self) -> usize {
        self.clusters.iter().map(Vec::len).sum::<usize>() + self.noise.len()
    }

    /// One label per point: `Some(cluster)` or `None` for noise.
    pub fn labels(&self) -> Vec<Option<usize>> {
        let mut labels = vec![None; self.n_points()];
        for (cluster_id, members) in self.clusters.iter().enumerate() {
            for &idx in members {
                labels[idx] = Some(cluster_id);
            }
        }
        labels
    }

    /// The cluster containing point `idx`, if any.
    pub fn cluster_of(&self, idx: usize) -> Option<usize> {
        self.clusters
            .iter()
            .position(|members| members.contains(&idx))
    }

    /// Whether point `idx` was left as noise.
    pub fn is_noise(&self, idx: usize) -> bool {
        self.noise.binary_search(&idx).is_ok()
    }

    /// Per-cluster centroid, size and radius.
    ///
    /// `points` must be the slice this result was computed from.
    pub fn summaries(&self, points: &[Point]) -> Result<Vec<ZoneSummary>> {
        if points.len() != self.n_points() {
            return Err(Error::PointCountMismatch {
                expected: self.n_points(),
                found: points.len(),
            });
        }

        Ok(self
            .clusters
            .iter()
            .enumerate()
            .map(|(cluster, members)| {
                let size = members.len();
                let (sx, sy) = members
                    .iter()
                    .fold((0.0, 0.0), |(sx, sy), &i| (sx + points[i].x, sy + points[i].y));
                let centroid = Point::new(sx / size as f64, sy / size as f64);
                let radius = members
                    .iter()
                    .map(|&i| centroid.distance(&points[i]))
                    .fold(0.0, f64::max);
                ZoneSummary {
                    cluster,
                    size,
                    centroid,
                    radius,
                }
            })
            .collect())
    }
}
