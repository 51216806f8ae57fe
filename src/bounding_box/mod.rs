use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::misc::FloatingPoint;

/// An axis-aligned bounding box in 3D space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox<T: FloatingPoint> {
    min: Vector3<T>,
    max: Vector3<T>,
}

impl<T: FloatingPoint> BoundingBox<T> {
    /// Create a new bounding box from a minimum and maximum corner.
    /// The corners are reordered per axis if necessary.
    pub fn new(min: Vector3<T>, max: Vector3<T>) -> Self {
        let mut tmin = min;
        let mut tmax = max;
        for i in 0..3 {
            tmin[i] = min[i].min(max[i]);
            tmax[i] = max[i].max(min[i]);
        }
        Self {
            min: tmin,
            max: tmax,
        }
    }

    /// Create a new bounding box from point iterator.
    /// Returns `None` if the iterator is empty.
    ///
    /// # Examples
    /// ```
    /// use nalgebra::{Point3, Vector3};
    /// use airframe_morph::prelude::BoundingBox;
    ///
    /// let bb = BoundingBox::new_with_points([
    ///     Point3::new(0., 1., 2.),
    ///     Point3::new(-1., 3., 0.),
    /// ]).unwrap();
    /// assert_eq!(bb.size(), Vector3::new(1., 2., 2.));
    /// assert!(BoundingBox::<f64>::new_with_points([]).is_none());
    /// ```
    pub fn new_with_points<I: IntoIterator<Item = Point3<T>>>(iter: I) -> Option<Self> {
        let mut iter = iter.into_iter();
        let first = iter.next()?;
        let mut min = first.coords;
        let mut max = first.coords;

        for point in iter {
            for i in 0..3 {
                min[i] = min[i].min(point[i]);
                max[i] = max[i].max(point[i]);
            }
        }

        Some(Self { min, max })
    }

    pub fn min(&self) -> &Vector3<T> {
        &self.min
    }

    pub fn max(&self) -> &Vector3<T> {
        &self.max
    }

    pub fn center(&self) -> Vector3<T> {
        (self.min + self.max) / T::from_f64_constant(2.)
    }

    /// Extents along x, y and z.
    pub fn size(&self) -> Vector3<T> {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    use super::*;

    #[test]
    fn new_reorders_corners() {
        let bb = BoundingBox::new(Vector3::new(1., 0., 5.), Vector3::new(0., 2., 3_f64));
        assert_eq!(bb.min(), &Vector3::new(0., 0., 3.));
        assert_eq!(bb.max(), &Vector3::new(1., 2., 5.));
        assert_relative_eq!(bb.center(), Vector3::new(0.5, 1., 4.));
    }
}
