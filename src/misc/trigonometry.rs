use nalgebra::{Rotation3, Vector3};

use super::FloatingPoint;

/// Convert an angle in degrees to radians.
pub fn to_radians<T: FloatingPoint>(degrees: T) -> T {
    degrees * T::pi() / T::from_f64_constant(180.)
}

/// Build a rotation from `(x, y, z)` euler angles given in degrees.
pub fn rotation_from_degrees<T: FloatingPoint>(angles: &Vector3<T>) -> Rotation3<T> {
    Rotation3::from_euler_angles(
        to_radians(angles.x),
        to_radians(angles.y),
        to_radians(angles.z),
    )
}

/// Area of a circle whose circumference is `circumference`.
///
/// Used to turn a measured section outline into an area parameter.
/// This is exact for circular sections only; any other outline is approximated.
///
/// # Examples
/// ```
/// use airframe_morph::prelude::equivalent_circle_area;
/// use approx::assert_relative_eq;
/// let r = 0.5_f64;
/// let c = 2. * std::f64::consts::PI * r;
/// assert_relative_eq!(equivalent_circle_area(c), std::f64::consts::PI * r * r, epsilon = 1e-12);
/// ```
pub fn equivalent_circle_area<T: FloatingPoint>(circumference: T) -> T {
    T::from_f64_constant(0.25) * circumference * circumference / T::pi()
}

/// Perimeter of an ellipse with full axes `width` and `height` (Ramanujan's approximation).
/// Exact for circles.
pub fn ellipse_circumference<T: FloatingPoint>(width: T, height: T) -> T {
    let two = T::from_f64_constant(2.);
    let three = T::from_f64_constant(3.);
    let a = width.abs() / two;
    let b = height.abs() / two;
    T::pi() * (three * (a + b) - ((three * a + b) * (a + three * b)).sqrt())
}

/// Area of an ellipse with full axes `width` and `height`.
pub fn ellipse_area<T: FloatingPoint>(width: T, height: T) -> T {
    T::pi() * width.abs() * height.abs() / T::from_f64_constant(4.)
}
