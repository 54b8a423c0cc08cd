//! Plantation zoning around a site.
//!
//! `grove` scatters synthetic plantation points around a fixed site and groups
//! them into density-based zones, separating dense stands from outliers.
//!
//! - [`generate`]: sector scatter around a [`Site`], with an injected random source
//! - [`cluster`]: DBSCAN over the generated (or any) [`Point`] set
//!
//! ```rust
//! use grove::{Clustering, Dbscan, SectorScatter, Site};
//!
//! let site = Site::default();
//! let points = SectorScatter::default()
//!     .generate_seeded(200, &site, Some(42))
//!     .unwrap();
//!
//! let result = Dbscan::new(15.0, 4).fit(&points).unwrap();
//! assert_eq!(result.n_points(), points.len());
//! ```

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod generate;
pub mod point;

pub use cluster::{ClusterResult, Clustering, Dbscan, NeighborIndex, ZoneSummary};
pub use error::{Error, Result};
pub use generate::SectorScatter;
pub use point::{Point, Site};
