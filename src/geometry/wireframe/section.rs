use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::{
    geometry::CrossSection,
    misc::{ellipse_area, ellipse_circumference, rotation_from_degrees, FloatingPoint},
};

/// Number of points sampled along a section outline.
/// A multiple of four, so the axis extremes of the ellipse are always sampled.
pub const OUTLINE_SAMPLES: usize = 16;

/// The plane a profile is drawn in, before the section rotation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfilePlane {
    /// Fuselage frames: width along y, height along z
    YZ,
    /// Airfoils: chord (width) along x, thickness (height) along z
    XZ,
}

/// An elliptic profile with a center, two axes and an orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireframeSection<T: FloatingPoint> {
    center: Point3<T>,
    width: T,
    height: T,
    rotation: Vector3<T>,
    plane: ProfilePlane,
}

impl<T: FloatingPoint> WireframeSection<T> {
    pub fn new(center: Point3<T>, width: T, height: T, plane: ProfilePlane) -> Self {
        Self {
            center,
            width,
            height,
            rotation: Vector3::zeros(),
            plane,
        }
    }

    pub fn plane(&self) -> ProfilePlane {
        self.plane
    }

    /// Sampled outline in the part frame.
    pub fn outline(&self) -> Vec<Point3<T>> {
        let two = T::from_f64_constant(2.);
        let a = self.width / two;
        let b = self.height / two;
        let rotation = rotation_from_degrees(&self.rotation);
        (0..OUTLINE_SAMPLES)
            .map(|i| {
                let phi = T::two_pi() * T::from_f64_constant(i as f64)
                    / T::from_f64_constant(OUTLINE_SAMPLES as f64);
                let (s, c) = phi.sin_cos();
                let local = match self.plane {
                    ProfilePlane::YZ => Vector3::new(T::zero(), a * c, b * s),
                    ProfilePlane::XZ => Vector3::new(a * c, T::zero(), b * s),
                };
                self.center + rotation * local
            })
            .collect()
    }

    /// No NaN or infinite coordinate, axis or angle
    pub fn is_finite(&self) -> bool {
        self.center.iter().all(|v| v.is_finite())
            && self.width.is_finite()
            && self.height.is_finite()
            && self.rotation.iter().all(|v| v.is_finite())
    }

    pub(crate) fn scale(&mut self, factor: T) {
        self.center.coords *= factor;
        self.width *= factor;
        self.height *= factor;
    }
}

impl<T: FloatingPoint> CrossSection<T> for WireframeSection<T> {
    fn center(&self) -> Point3<T> {
        self.center
    }

    fn set_center(&mut self, center: Point3<T>) {
        self.center = center;
    }

    fn width(&self) -> T {
        self.width
    }

    fn set_width(&mut self, width: T) {
        self.width = width;
    }

    fn height(&self) -> T {
        self.height
    }

    fn set_height(&mut self, height: T) {
        self.height = height;
    }

    fn area(&self) -> T {
        ellipse_area(self.width, self.height)
    }

    /// Scales both axes uniformly. A collapsed profile is reopened as a circle.
    fn set_area(&mut self, area: T) {
        let current = self.area();
        if current > T::zero() {
            let factor = (area / current).sqrt();
            self.width *= factor;
            self.height *= factor;
        } else {
            let diameter = (T::from_f64_constant(4.) * area / T::pi()).sqrt();
            self.width = diameter;
            self.height = diameter;
        }
    }

    fn circumference(&self) -> T {
        ellipse_circumference(self.width, self.height)
    }

    fn rotation(&self) -> Vector3<T> {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Vector3<T>) {
        self.rotation = rotation;
    }
}
