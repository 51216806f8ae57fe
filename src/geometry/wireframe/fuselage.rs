use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::{bounding_box::BoundingBox, geometry::SectionedPart, misc::FloatingPoint};

use super::{ProfilePlane, WireframeLoft, WireframeSection, DEFAULT_SECTION_SPACING};

/// Fuselage made of circular frames spaced along x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireframeFuselage<T: FloatingPoint> {
    uid: String,
    sections: Vec<WireframeSection<T>>,
}

impl<T: FloatingPoint> WireframeFuselage<T> {
    /// Unit-diameter circles, one every [`DEFAULT_SECTION_SPACING`] along x starting at the origin.
    pub fn new(uid: &str, section_count: usize) -> Self {
        let spacing = T::from_f64_constant(DEFAULT_SECTION_SPACING);
        let sections = (0..section_count)
            .map(|i| {
                let x = spacing * T::from_f64_constant(i as f64);
                WireframeSection::new(
                    Point3::new(x, T::zero(), T::zero()),
                    T::one(),
                    T::one(),
                    ProfilePlane::YZ,
                )
            })
            .collect();
        Self {
            uid: uid.to_string(),
            sections,
        }
    }

    pub fn sections(&self) -> &[WireframeSection<T>] {
        &self.sections
    }

    pub fn is_finite(&self) -> bool {
        self.sections.iter().all(|s| s.is_finite())
    }

    fn outlines(&self) -> Vec<Vec<Point3<T>>> {
        self.sections.iter().map(|s| s.outline()).collect()
    }
}

impl<T: FloatingPoint> SectionedPart<T> for WireframeFuselage<T> {
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
        BoundingBox::new_with_points(self.outlines().into_iter().flatten())
            .ok_or_else(|| anyhow::anyhow!("Fuselage `{}` has no sections", self.uid))
    }

    fn loft(&self) -> anyhow::Result<Self::Loft> {
        WireframeLoft::try_new(&self.uid, false, self.sections.clone(), self.outlines())
    }
}
