use glam::Vec3;

use super::CameraError;

/// Axis-aligned bounding box: min/max corner pair enclosing a model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Compute the bounding box of a point set. Returns `None` for an
    /// empty set.
    #[must_use]
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for p in iter {
            bounds.min = bounds.min.min(p);
            bounds.max = bounds.max.max(p);
        }
        Some(bounds)
    }

    /// Per-axis extents (`max - min`).
    #[must_use]
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Auto-framing parameters derived once per loaded model: the pivot the
/// camera orbits around and the distance scale it pulls back by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Framing {
    /// Bounding-box midpoint; the model is recentered here before rotating.
    pub center: Vec3,
    /// Largest single-axis extent of the bounding box (not a tight
    /// bounding-sphere radius).
    pub radius: f32,
}

impl Framing {
    /// Unit framing: origin pivot, radius 1. Used as the fallback when a
    /// model's bounds are degenerate.
    pub const UNIT: Self = Self {
        center: Vec3::ZERO,
        radius: 1.0,
    };

    /// Validate and build a framing from explicit center and radius.
    ///
    /// # Errors
    ///
    /// `CameraError::InvalidFraming` if the radius is non-finite or not
    /// strictly positive.
    pub fn new(center: Vec3, radius: f32) -> Result<Self, CameraError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(CameraError::InvalidFraming { radius });
        }
        Ok(Self { center, radius })
    }

    /// Derive framing from an axis-aligned bounding box.
    ///
    /// Center is the componentwise midpoint; radius is the largest
    /// single-axis extent (not the diagonal).
    ///
    /// # Errors
    ///
    /// `CameraError::DegenerateBounds` if any axis extent is negative or
    /// non-finite (malformed box), or if all extents are zero (a point
    /// model would break the view-distance formula).
    pub fn from_bounds(bounds: Aabb) -> Result<Self, CameraError> {
        let extents = bounds.extents();
        if !extents.is_finite() || extents.min_element() < 0.0 {
            return Err(CameraError::DegenerateBounds);
        }
        let radius = extents.max_element();
        if radius <= 0.0 {
            return Err(CameraError::DegenerateBounds);
        }
        let center = bounds.min + extents / 2.0;
        Ok(Self { center, radius })
    }
}

impl Default for Framing {
    fn default() -> Self {
        Self::UNIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_cube_framing() {
        let bounds = Aabb {
            min: Vec3::splat(-1.0),
            max: Vec3::splat(1.0),
        };
        let framing = Framing::from_bounds(bounds).unwrap();
        assert_eq!(framing.center, Vec3::ZERO);
        assert_eq!(framing.radius, 2.0);
    }

    #[test]
    fn radius_is_largest_axis_extent_not_diagonal() {
        let bounds = Aabb {
            min: Vec3::new(0.0, 0.0, 0.0),
            max: Vec3::new(4.0, 1.0, 2.0),
        };
        let framing = Framing::from_bounds(bounds).unwrap();
        assert_eq!(framing.radius, 4.0);
        assert_eq!(framing.center, Vec3::new(2.0, 0.5, 1.0));
    }

    #[test]
    fn point_bounds_are_degenerate() {
        let bounds = Aabb {
            min: Vec3::new(3.0, -2.0, 5.0),
            max: Vec3::new(3.0, -2.0, 5.0),
        };
        assert_eq!(
            Framing::from_bounds(bounds),
            Err(CameraError::DegenerateBounds)
        );
    }

    #[test]
    fn inverted_bounds_are_degenerate() {
        let bounds = Aabb {
            min: Vec3::new(1.0, 0.0, 0.0),
            max: Vec3::new(-1.0, 2.0, 2.0),
        };
        assert_eq!(
            Framing::from_bounds(bounds),
            Err(CameraError::DegenerateBounds)
        );
    }

    #[test]
    fn flat_box_still_frames() {
        // A zero extent on one axis is fine as long as another axis has
        // spread (e.g. a planar mesh).
        let bounds = Aabb {
            min: Vec3::new(-1.0, 0.0, -1.0),
            max: Vec3::new(1.0, 0.0, 1.0),
        };
        let framing = Framing::from_bounds(bounds).unwrap();
        assert_eq!(framing.radius, 2.0);
    }

    #[test]
    fn explicit_framing_rejects_bad_radius() {
        assert!(Framing::new(Vec3::ZERO, 0.0).is_err());
        assert!(Framing::new(Vec3::ZERO, -1.0).is_err());
        assert!(Framing::new(Vec3::ZERO, f32::NAN).is_err());
        assert!(Framing::new(Vec3::ZERO, f32::INFINITY).is_err());
        assert!(Framing::new(Vec3::ZERO, 2.5).is_ok());
    }

    #[test]
    fn from_points_covers_all_points() {
        let points = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.0, 0.5, 2.0),
            Vec3::new(0.0, 7.0, -1.0),
        ];
        let bounds = Aabb::from_points(points).unwrap();
        assert_eq!(bounds.min, Vec3::new(-4.0, 0.5, -1.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 7.0, 3.0));
        assert!(Aabb::from_points(std::iter::empty()).is_none());
    }
}
