use nalgebra::{Point3, Vector3};

use super::FloatingPoint;

/// Linear blend between two scalars.
/// `theta = 0` returns `a`, `theta = 1` returns `b`, values outside `[0, 1]` extrapolate.
///
/// # Examples
/// ```
/// use airframe_morph::prelude::lerp;
/// assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
/// assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
/// assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
/// ```
pub fn lerp<T: FloatingPoint>(a: T, b: T, theta: T) -> T {
    (T::one() - theta) * a + theta * b
}

/// Blend two points coordinate by coordinate.
pub fn lerp_point<T: FloatingPoint>(a: &Point3<T>, b: &Point3<T>, theta: T) -> Point3<T> {
    Point3::new(
        lerp(a.x, b.x, theta),
        lerp(a.y, b.y, theta),
        lerp(a.z, b.z, theta),
    )
}

/// Blend two vectors coordinate by coordinate.
pub fn lerp_vector<T: FloatingPoint>(a: &Vector3<T>, b: &Vector3<T>, theta: T) -> Vector3<T> {
    Vector3::new(
        lerp(a.x, b.x, theta),
        lerp(a.y, b.y, theta),
        lerp(a.z, b.z, theta),
    )
}
