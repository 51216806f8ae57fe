use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::{
    bounding_box::BoundingBox,
    geometry::{CrossSection, SectionedPart, WingPart},
    misc::{rotation_from_degrees, to_radians, FloatingPoint},
};

use super::{ProfilePlane, WireframeLoft, WireframeSection, DEFAULT_SECTION_SPACING};

/// Default airfoil thickness relative to the chord (a NACA 0012 style profile).
const DEFAULT_THICKNESS_RATIO: f64 = 0.12;

/// Steepest sweep or dihedral the wireframe accepts, in degrees.
const MAX_SHEAR_ANGLE: f64 = 89.;

/// Wing made of elliptic airfoils spaced along y.
///
/// Section centers live in the wing frame with the root leading edge at the origin.
/// Sweep and dihedral shear the section centers, the wing rotation turns the whole
/// wing around its root, and symmetric wings are mirrored in the x-z plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireframeWing<T: FloatingPoint> {
    uid: String,
    sections: Vec<WireframeSection<T>>,
    root_leposition: Point3<T>,
    sweep: T,
    dihedral: T,
    rotation: Vector3<T>,
    symmetric: bool,
}

impl<T: FloatingPoint> WireframeWing<T> {
    /// Unit chord sections, one every [`DEFAULT_SECTION_SPACING`] along y.
    pub fn new(uid: &str, section_count: usize) -> Self {
        let spacing = T::from_f64_constant(DEFAULT_SECTION_SPACING);
        let sections = (0..section_count)
            .map(|i| {
                let y = spacing * T::from_f64_constant(i as f64);
                WireframeSection::new(
                    Point3::new(T::zero(), y, T::zero()),
                    T::one(),
                    T::from_f64_constant(DEFAULT_THICKNESS_RATIO),
                    ProfilePlane::XZ,
                )
            })
            .collect();
        Self {
            uid: uid.to_string(),
            sections,
            root_leposition: Point3::origin(),
            sweep: T::zero(),
            dihedral: T::zero(),
            rotation: Vector3::zeros(),
            symmetric: false,
        }
    }

    pub fn sections(&self) -> &[WireframeSection<T>] {
        &self.sections
    }

    pub fn sweep(&self) -> T {
        self.sweep
    }

    pub fn dihedral(&self) -> T {
        self.dihedral
    }

    pub fn rotation(&self) -> Vector3<T> {
        self.rotation
    }

    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    /// Span measured between the outermost section centers along y.
    pub fn half_span(&self) -> T {
        let ys = self.sections.iter().map(|s| s.center().y);
        match (ys.clone().reduce(|a, b| a.min(b)), ys.reduce(|a, b| a.max(b))) {
            (Some(min), Some(max)) => max - min,
            _ => T::zero(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.sections.iter().all(|s| s.is_finite())
            && self.root_leposition.iter().all(|v| v.is_finite())
            && self.sweep.is_finite()
            && self.dihedral.is_finite()
            && self.rotation.iter().all(|v| v.is_finite())
    }

    /// Section outlines in world coordinates.
    fn outlines(&self, mirrored: bool) -> Vec<Vec<Point3<T>>> {
        let tan_sweep = to_radians(self.sweep).tan();
        let tan_dihedral = to_radians(self.dihedral).tan();
        let rotation = rotation_from_degrees(&self.rotation);
        self.sections
            .iter()
            .map(|section| {
                let center = section.center();
                let shear =
                    Vector3::new(center.y * tan_sweep, T::zero(), center.y * tan_dihedral);
                section
                    .outline()
                    .into_iter()
                    .map(|p| {
                        let mut world = self.root_leposition + rotation * (p.coords + shear);
                        if mirrored {
                            world.y = -world.y;
                        }
                        world
                    })
                    .collect()
            })
            .collect()
    }
}

impl<T: FloatingPoint> SectionedPart<T> for WireframeWing<T> {
    type Section = WireframeSection<T>;
    type Loft = WireframeLoft<T>;

    fn uid(&self) -> &str {
        &self.uid
    }

    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn section(&self, index: usize) -> Option<&Self::Section> {
        self.sections.get(index)
    }

    fn section_mut(&mut self, index: usize) -> Option<&mut Self::Section> {
        self.sections.get_mut(index)
    }

    fn bounding_box(&self) -> anyhow::Result<BoundingBox<T>> {
        BoundingBox::new_with_points(self.outlines(false).into_iter().flatten())
            .ok_or_else(|| anyhow::anyhow!("Wing `{}` has no sections", self.uid))
    }

    fn loft(&self) -> anyhow::Result<Self::Loft> {
        WireframeLoft::try_new(&self.uid, false, self.sections.clone(), self.outlines(false))
    }
}

impl<T: FloatingPoint> WingPart<T> for WireframeWing<T> {
    fn root_leposition(&self) -> Point3<T> {
        self.root_leposition
    }

    fn set_root_leposition(&mut self, position: Point3<T>) {
        self.root_leposition = position;
    }

    fn scale(&mut self, factor: T) -> anyhow::Result<()> {
        anyhow::ensure!(
            factor > T::zero(),
            "Cannot scale wing `{}` by a non-positive factor",
            self.uid
        );
        self.sections.iter_mut().for_each(|s| s.scale(factor));
        Ok(())
    }

    fn set_half_span_keep_area(&mut self, half_span: T) -> anyhow::Result<()> {
        let current = self.half_span();
        anyhow::ensure!(
            current > T::default_epsilon(),
            "Wing `{}` has no span to stretch",
            self.uid
        );
        let factor = half_span / current;
        for section in self.sections.iter_mut() {
            let mut center = section.center();
            center.y *= factor;
            section.set_center(center);
            section.set_width(section.width() / factor);
        }
        Ok(())
    }

    fn set_sweep(&mut self, sweep: T) -> anyhow::Result<()> {
        anyhow::ensure!(
            sweep.abs() <= T::from_f64_constant(MAX_SHEAR_ANGLE),
            "Sweep of wing `{}` out of range",
            self.uid
        );
        self.sweep = sweep;
        Ok(())
    }

    fn set_dihedral(&mut self, dihedral: T) -> anyhow::Result<()> {
        anyhow::ensure!(
            dihedral.abs() <= T::from_f64_constant(MAX_SHEAR_ANGLE),
            "Dihedral of wing `{}` out of range",
            self.uid
        );
        self.dihedral = dihedral;
        Ok(())
    }

    fn set_rotation(&mut self, rotation: Vector3<T>) {
        self.rotation = rotation;
    }

    fn set_symmetric(&mut self, symmetric: bool) {
        self.symmetric = symmetric;
    }

    fn mirrored_loft(&self) -> anyhow::Result<Option<Self::Loft>> {
        if !self.symmetric {
            return Ok(None);
        }
        WireframeLoft::try_new(&self.uid, true, self.sections.clone(), self.outlines(true))
            .map(Some)
    }
}
