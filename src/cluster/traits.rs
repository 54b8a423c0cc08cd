use super::result::ClusterResult;
use crate::error::Result;
use crate::point::Point;

/// Common interface for hard clustering of planar points.
pub trait Clustering {
    /// Partition `points` into clusters and noise.
    fn fit(&self, points: &[Point]) -> Result<ClusterResult>;

    /// Fit and return one label per input point, `None` for noise.
    fn fit_predict(&self, points: &[Point]) -> Result<Vec<Option<usize>>> {
        Ok(self.fit(points)?.labels())
    }
}
