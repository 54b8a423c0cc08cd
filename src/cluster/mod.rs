//! Density-based zoning of planar points.
//!
//! ## DBSCAN
//!
//! Density-based clustering that discovers zones of arbitrary shape and
//! separates them from scattered outliers (noise). The number of zones is not
//! fixed in advance; it falls out of two parameters:
//!
//! - `eps`: neighborhood radius
//! - `min_pts`: how many points (the candidate included) must lie within
//!   `eps` for a point to seed or extend a zone
//!
//! Every point ends up in exactly one zone or in the noise set. Runs are
//! stateless: the same points and parameters give the same partition.
//!
//! ## Usage
//!
//! ```rust
//! use grove::cluster::{Clustering, Dbscan, NeighborIndex};
//! use grove::Point;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(50.0, 50.0),
//! ];
//!
//! let result = Dbscan::new(2.0, 2).fit(&points).unwrap();
//! assert_eq!(result.n_clusters(), 1);
//! assert_eq!(result.noise, vec![3]);
//!
//! // A grid index gives the same answer with fewer distance tests.
//! let gridded = Dbscan::new(2.0, 2)
//!     .with_index(NeighborIndex::Grid)
//!     .fit(&points)
//!     .unwrap();
//! assert_eq!(result, gridded);
//! ```

mod dbscan;
mod index;
mod result;
mod traits;

pub use dbscan::Dbscan;
pub use index::NeighborIndex;
pub use result::{ClusterResult, ZoneSummary};
pub use traits::Clustering;
