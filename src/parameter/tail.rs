use std::collections::BTreeMap;

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::{
    error::MorphError,
    misc::{lerp, lerp_point, lerp_vector, FloatingPoint},
};

use super::{value::ValueReader, Component, ComponentParameters, ParameterValue};

/// Shape parameters of the horizontal tailplane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizontalTailParameters<T: FloatingPoint> {
    pub root_leposition: Point3<T>,
    /// Sweep angle in degrees
    pub sweep: T,
    /// Dihedral angle in degrees
    pub dihedral: T,
    pub tip_width: T,
    pub tip_height: T,
}

impl<T: FloatingPoint> ComponentParameters<T> for HorizontalTailParameters<T> {
    const COMPONENT: Component = Component::HorizontalTail;
    const NAMES: &'static [&'static str] = &[
        "root_leposition",
        "sweep",
        "dihedral",
        "tip_width",
        "tip_height",
    ];

    fn interpolate(&self, other: &Self, theta: T) -> Self {
        Self {
            root_leposition: lerp_point(&self.root_leposition, &other.root_leposition, theta),
            sweep: lerp(self.sweep, other.sweep, theta),
            dihedral: lerp(self.dihedral, other.dihedral, theta),
            tip_width: lerp(self.tip_width, other.tip_width, theta),
            tip_height: lerp(self.tip_height, other.tip_height, theta),
        }
    }

    fn values(&self) -> Vec<(&'static str, ParameterValue<T>)> {
        vec![
            ("root_leposition", self.root_leposition.into()),
            ("sweep", ParameterValue::Scalar(self.sweep)),
            ("dihedral", ParameterValue::Scalar(self.dihedral)),
            ("tip_width", ParameterValue::Scalar(self.tip_width)),
            ("tip_height", ParameterValue::Scalar(self.tip_height)),
        ]
    }

    fn try_from_values(values: &BTreeMap<String, ParameterValue<T>>) -> Result<Self, MorphError> {
        let r = ValueReader::try_new(Self::COMPONENT, values, Self::NAMES)?;
        Ok(Self {
            root_leposition: r.point("root_leposition")?,
            sweep: r.scalar("sweep")?,
            dihedral: r.scalar("dihedral")?,
            tip_width: r.scalar("tip_width")?,
            tip_height: r.scalar("tip_height")?,
        })
    }
}

/// Shape parameters of the vertical tailplane.
///
/// Same as the horizontal tail plus the rotation that stands the surface up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalTailParameters<T: FloatingPoint> {
    pub root_leposition: Point3<T>,
    /// Euler angles of the whole surface in degrees
    pub rotation: Vector3<T>,
    pub sweep: T,
    pub dihedral: T,
    pub tip_width: T,
    pub tip_height: T,
}

impl<T: FloatingPoint> ComponentParameters<T> for VerticalTailParameters<T> {
    const COMPONENT: Component = Component::VerticalTail;
    const NAMES: &'static [&'static str] = &[
        "root_leposition",
        "rotation",
        "sweep",
        "dihedral",
        "tip_width",
        "tip_height",
    ];

    fn interpolate(&self, other: &Self, theta: T) -> Self {
        Self {
            root_leposition: lerp_point(&self.root_leposition, &other.root_leposition, theta),
            rotation: lerp_vector(&self.rotation, &other.rotation, theta),
            sweep: lerp(self.sweep, other.sweep, theta),
            dihedral: lerp(self.dihedral, other.dihedral, theta),
            tip_width: lerp(self.tip_width, other.tip_width, theta),
            tip_height: lerp(self.tip_height, other.tip_height, theta),
        }
    }

    fn values(&self) -> Vec<(&'static str, ParameterValue<T>)> {
        vec![
            ("root_leposition", self.root_leposition.into()),
            ("rotation", self.rotation.into()),
            ("sweep", ParameterValue::Scalar(self.sweep)),
            ("dihedral", ParameterValue::Scalar(self.dihedral)),
            ("tip_width", ParameterValue::Scalar(self.tip_width)),
            ("tip_height", ParameterValue::Scalar(self.tip_height)),
        ]
    }

    fn try_from_values(values: &BTreeMap<String, ParameterValue<T>>) -> Result<Self, MorphError> {
        let r = ValueReader::try_new(Self::COMPONENT, values, Self::NAMES)?;
        Ok(Self {
            root_leposition: r.point("root_leposition")?,
            rotation: r.vector("rotation")?,
            sweep: r.scalar("sweep")?,
            dihedral: r.scalar("dihedral")?,
            tip_width: r.scalar("tip_width")?,
            tip_height: r.scalar("tip_height")?,
        })
    }
}
