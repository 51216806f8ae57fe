use std::collections::BTreeMap;

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::{
    error::MorphError,
    misc::{lerp, lerp_point, lerp_vector, FloatingPoint},
};

use super::{value::ValueReader, Component, ComponentParameters, ParameterValue};

/// Shape parameters of the main wing, including its winglet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainWingParameters<T: FloatingPoint> {
    /// Leading edge position of the root section
    pub root_leposition: Point3<T>,
    /// Uniform scale factor applied to the wing
    pub scale: T,
    pub half_span: T,
    /// Position of the second-to-last section between its neighbours (0: inner neighbour, 1: tip)
    pub section_2_rel_pos: T,
    pub root_width: T,
    pub root_height: T,
    pub tip_width: T,
    pub tip_height: T,
    /// Sweep angle in degrees
    pub sweep: T,
    /// Dihedral angle in degrees
    pub dihedral: T,
    /// Offset of the winglet section center from the section before it
    pub winglet_center_translation: Vector3<T>,
    /// Euler angles of the winglet section in degrees
    pub winglet_rotation: Vector3<T>,
    pub winglet_width: T,
}

impl<T: FloatingPoint> ComponentParameters<T> for MainWingParameters<T> {
    const COMPONENT: Component = Component::MainWing;
    const NAMES: &'static [&'static str] = &[
        "root_leposition",
        "scale",
        "half_span",
        "section_2_rel_pos",
        "root_width",
        "root_height",
        "tip_width",
        "tip_height",
        "sweep",
        "dihedral",
        "winglet_center_translation",
        "winglet_rotation",
        "winglet_width",
    ];

    fn interpolate(&self, other: &Self, theta: T) -> Self {
        Self {
            root_leposition: lerp_point(&self.root_leposition, &other.root_leposition, theta),
            scale: lerp(self.scale, other.scale, theta),
            half_span: lerp(self.half_span, other.half_span, theta),
            section_2_rel_pos: lerp(self.section_2_rel_pos, other.section_2_rel_pos, theta),
            root_width: lerp(self.root_width, other.root_width, theta),
            root_height: lerp(self.root_height, other.root_height, theta),
            tip_width: lerp(self.tip_width, other.tip_width, theta),
            tip_height: lerp(self.tip_height, other.tip_height, theta),
            sweep: lerp(self.sweep, other.sweep, theta),
            dihedral: lerp(self.dihedral, other.dihedral, theta),
            winglet_center_translation: lerp_vector(
                &self.winglet_center_translation,
                &other.winglet_center_translation,
                theta,
            ),
            winglet_rotation: lerp_vector(&self.winglet_rotation, &other.winglet_rotation, theta),
            winglet_width: lerp(self.winglet_width, other.winglet_width, theta),
        }
    }

    fn values(&self) -> Vec<(&'static str, ParameterValue<T>)> {
        vec![
            ("root_leposition", self.root_leposition.into()),
            ("scale", ParameterValue::Scalar(self.scale)),
            ("half_span", ParameterValue::Scalar(self.half_span)),
            ("section_2_rel_pos", ParameterValue::Scalar(self.section_2_rel_pos)),
            ("root_width", ParameterValue::Scalar(self.root_width)),
            ("root_height", ParameterValue::Scalar(self.root_height)),
            ("tip_width", ParameterValue::Scalar(self.tip_width)),
            ("tip_height", ParameterValue::Scalar(self.tip_height)),
            ("sweep", ParameterValue::Scalar(self.sweep)),
            ("dihedral", ParameterValue::Scalar(self.dihedral)),
            (
                "winglet_center_translation",
                self.winglet_center_translation.into(),
            ),
            ("winglet_rotation", self.winglet_rotation.into()),
            ("winglet_width", ParameterValue::Scalar(self.winglet_width)),
        ]
    }

    fn try_from_values(values: &BTreeMap<String, ParameterValue<T>>) -> Result<Self, MorphError> {
        let r = ValueReader::try_new(Self::COMPONENT, values, Self::NAMES)?;
        Ok(Self {
            root_leposition: r.point("root_leposition")?,
            scale: r.scalar("scale")?,
            half_span: r.scalar("half_span")?,
            section_2_rel_pos: r.scalar("section_2_rel_pos")?,
            root_width: r.scalar("root_width")?,
            root_height: r.scalar("root_height")?,
            tip_width: r.scalar("tip_width")?,
            tip_height: r.scalar("tip_height")?,
            sweep: r.scalar("sweep")?,
            dihedral: r.scalar("dihedral")?,
            winglet_center_translation: r.vector("winglet_center_translation")?,
            winglet_rotation: r.vector("winglet_rotation")?,
            winglet_width: r.scalar("winglet_width")?,
        })
    }
}
