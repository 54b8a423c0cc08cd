//! Planar points and the site they are scattered around.

use crate::error::{Error, Result};

/// An immutable 2-D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    ///
    /// Every neighborhood test in the crate goes through this function, so the
    /// brute-force and grid searches agree on boundary cases.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// The fixed origin of a generation run: a center and the radius of the
/// disc around it that generated points never fall inside.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Site {
    /// Center of the site.
    pub center: Point,
    /// Radius of the exclusion disc.
    pub min_radius: f64,
}

impl Site {
    /// Create a site.
    pub fn new(center: impl Into<Point>, min_radius: f64) -> Self {
        Self {
            center: center.into(),
            min_radius,
        }
    }

    /// Set the center.
    pub fn with_center(mut self, center: impl Into<Point>) -> Self {
        self.center = center.into();
        self
    }

    /// Set the exclusion radius.
    pub fn with_min_radius(mut self, min_radius: f64) -> Self {
        self.min_radius = min_radius;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.min_radius.is_finite() || self.min_radius < 0.0 {
            return Err(Error::invalid("min_radius", "must be finite and non-negative"));
        }
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(Error::invalid("center", "must be finite"));
        }
        Ok(())
    }
}

impl Default for Site {
    /// The middle of a 600×600 plane with a 40-unit exclusion disc.
    fn default() -> Self {
        Self::new((300.0, 300.0), 40.0)
    }
}
