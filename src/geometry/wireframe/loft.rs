use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::{bounding_box::BoundingBox, misc::FloatingPoint};

use super::WireframeSection;

/// Displayable result of a wireframe part: its section outlines in world coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireframeLoft<T: FloatingPoint> {
    uid: String,
    mirrored: bool,
    /// Section parameters at the time the loft was built, in the part frame
    sections: Vec<WireframeSection<T>>,
    outlines: Vec<Vec<Point3<T>>>,
    bounding_box: BoundingBox<T>,
}

impl<T: FloatingPoint> WireframeLoft<T> {
    pub(crate) fn try_new(
        uid: &str,
        mirrored: bool,
        sections: Vec<WireframeSection<T>>,
        outlines: Vec<Vec<Point3<T>>>,
    ) -> anyhow::Result<Self> {
        let bounding_box = BoundingBox::new_with_points(outlines.iter().flatten().cloned())
            .ok_or_else(|| anyhow::anyhow!("Cannot loft `{}` without sections", uid))?;
        Ok(Self {
            uid: uid.to_string(),
            mirrored,
            sections,
            outlines,
            bounding_box,
        })
    }

    /// Uid of the part this loft was built from
    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    pub fn sections(&self) -> &[WireframeSection<T>] {
        &self.sections
    }

    pub fn outlines(&self) -> &[Vec<Point3<T>>] {
        &self.outlines
    }

    pub fn bounding_box(&self) -> &BoundingBox<T> {
        &self.bounding_box
    }
}
