//! Sector scatter: synthetic plantation points around a site.
//!
//! The plane around the [`Site`] is split into `sector_count` equal angular
//! sectors. Each sector draws one band distance outside the exclusion disc,
//! then places its share of points in a jittered annulus at that distance:
//!
//! ```text
//! d_i = min_radius + radius_offset + U(0, radius_spread)
//! r   = d_i + U(0, radius_jitter)
//! θ   = i/K · 2π + U(-1, 1) · angle_jitter_fraction · π/K
//! ```
//!
//! Points that land outside `[0, plane_size]²` are dropped, so a run can
//! return fewer points than requested.
//!
//! Output is sector-major, then in generation order. That order defines the
//! point indices used by the clustering engine.

use std::f64::consts::{PI, TAU};

use rand::prelude::*;
use tracing::debug;

use crate::error::{Error, Result};
use crate::point::{Point, Site};

/// Generation parameters for [`SectorScatter::generate`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SectorScatter {
    /// Number of angular sectors (K).
    pub sector_count: usize,
    /// Fixed outward push from the exclusion disc.
    pub radius_offset: f64,
    /// Width of the per-sector band distance draw.
    pub radius_spread: f64,
    /// Per-point radial jitter.
    pub radius_jitter: f64,
    /// Fraction of the sector half-width `π/K` used for angular jitter, in `[0, 1]`.
    pub angle_jitter_fraction: f64,
    /// Side length of the square plane; points outside `[0, plane_size]²` are dropped.
    pub plane_size: f64,
    /// Upper bound applied to the requested count.
    pub max_points: Option<usize>,
}

impl Default for SectorScatter {
    fn default() -> Self {
        Self {
            sector_count: 4,
            radius_offset: 40.0,
            radius_spread: 60.0,
            radius_jitter: 50.0,
            angle_jitter_fraction: 1.0,
            plane_size: 600.0,
            max_points: Some(500),
        }
    }
}

impl SectorScatter {
    /// Default parameters with `sector_count` sectors.
    pub fn new(sector_count: usize) -> Self {
        Self {
            sector_count,
            ..Self::default()
        }
    }

    /// Set the number of sectors.
    pub fn with_sector_count(mut self, sector_count: usize) -> Self {
        self.sector_count = sector_count;
        self
    }

    /// Set the radial offset, spread and jitter.
    pub fn with_radii(mut self, offset: f64, spread: f64, jitter: f64) -> Self {
        self.radius_offset = offset;
        self.radius_spread = spread;
        self.radius_jitter = jitter;
        self
    }

    /// Set the angular jitter fraction.
    pub fn with_angle_jitter_fraction(mut self, fraction: f64) -> Self {
        self.angle_jitter_fraction = fraction;
        self
    }

    /// Set the plane side length.
    pub fn with_plane_size(mut self, plane_size: f64) -> Self {
        self.plane_size = plane_size;
        self
    }

    /// Set (or clear) the cap on the requested count.
    pub fn with_max_points(mut self, max_points: Option<usize>) -> Self {
        self.max_points = max_points;
        self
    }

    /// Largest distance from the site center a generated point can have.
    pub fn max_radius(&self, site: &Site) -> f64 {
        site.min_radius + self.radius_offset + self.radius_spread + self.radius_jitter
    }

    fn validate(&self) -> Result<()> {
        if self.sector_count == 0 {
            return Err(Error::invalid("sector_count", "must be at least 1"));
        }
        for (name, value) in [
            ("radius_offset", self.radius_offset),
            ("radius_spread", self.radius_spread),
            ("radius_jitter", self.radius_jitter),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid(name, "must be finite and non-negative"));
            }
        }
        if !(0.0..=1.0).contains(&self.angle_jitter_fraction) {
            return Err(Error::invalid("angle_jitter_fraction", "must be in [0, 1]"));
        }
        if !self.plane_size.is_finite() || self.plane_size <= 0.0 {
            return Err(Error::invalid("plane_size", "must be finite and positive"));
        }
        Ok(())
    }

    fn in_plane(&self, p: &Point) -> bool {
        (0.0..=self.plane_size).contains(&p.x) && (0.0..=self.plane_size).contains(&p.y)
    }

    /// Scatter up to `desired_count` points around `site` using `rng`.
    ///
    /// A zero count yields an empty list. Configuration errors are reported
    /// before any randomness is consumed.
    pub fn generate<R: Rng>(
        &self,
        desired_count: usize,
        site: &Site,
        rng: &mut R,
    ) -> Result<Vec<Point>> {
        self.validate()?;
        site.validate()?;

        let count = match self.max_points {
            Some(cap) => desired_count.min(cap),
            None => desired_count,
        };
        let k = self.sector_count;
        let per_sector = count / k;
        let half_width = PI / k as f64 * self.angle_jitter_fraction;

        let mut points = Vec::with_capacity(per_sector * k);
        let mut discarded = 0usize;

        for i in 0..k {
            let base_angle = i as f64 / k as f64 * TAU;
            let band =
                site.min_radius + self.radius_offset + rng.random::<f64>() * self.radius_spread;

            for _ in 0..per_sector {
                let r = band + rng.random::<f64>() * self.radius_jitter;
                let theta = base_angle + (rng.random::<f64>() * 2.0 - 1.0) * half_width;
                let p = Point::new(
                    site.center.x + r * theta.cos(),
                    site.center.y + r * theta.sin(),
                );
                if self.in_plane(&p) {
                    points.push(p);
                } else {
                    discarded += 1;
                }
            }
        }

        debug!(
            requested = desired_count,
            sectors = k,
            produced = points.len(),
            discarded,
            "scattered plantation points"
        );
        Ok(points)
    }

    /// Like [`generate`](Self::generate), with a `StdRng` built from `seed`,
    /// or the thread-local generator when `seed` is `None`.
    pub fn generate_seeded(
        &self,
        desired_count: usize,
        site: &Site,
        seed: Option<u64>,
    ) -> Result<Vec<Point>> {
        let mut rng: Box<dyn RngCore> = match seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };
        self.generate(desired_count, site, &mut rng)
    }
}
