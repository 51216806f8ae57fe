use std::collections::BTreeMap;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::{
    error::MorphError,
    misc::{lerp, lerp_point, FloatingPoint},
};

use super::{value::ValueReader, Component, ComponentParameters, ParameterValue};

/// Shape parameters of the fuselage.
///
/// The first four sections are addressed individually (nose, 2, 3, 4),
/// the last section is the tail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuselageParameters<T: FloatingPoint> {
    /// Overall length along x
    pub length: T,
    /// Height applied to every section before the individual sections are resized
    pub section_height: T,
    /// Width applied to every section before the individual sections are resized
    pub section_width: T,
    pub nose_center: Point3<T>,
    pub nose_area: T,
    pub section_2_center: Point3<T>,
    pub section_2_area: T,
    pub section_3_center: Point3<T>,
    pub section_3_area: T,
    pub section_4_center: Point3<T>,
    pub section_4_area: T,
    /// Upsweep of the tail section in degrees
    pub tail_angle: T,
    pub tail_center: Point3<T>,
    pub tail_width: T,
    pub tail_height: T,
}

impl<T: FloatingPoint> ComponentParameters<T> for FuselageParameters<T> {
    const COMPONENT: Component = Component::Fuselage;
    const NAMES: &'static [&'static str] = &[
        "length",
        "section_height",
        "section_width",
        "nose_center",
        "nose_area",
        "section_2_center",
        "section_2_area",
        "section_3_center",
        "section_3_area",
        "section_4_center",
        "section_4_area",
        "tail_angle",
        "tail_center",
        "tail_width",
        "tail_height",
    ];

    fn interpolate(&self, other: &Self, theta: T) -> Self {
        Self {
            length: lerp(self.length, other.length, theta),
            section_height: lerp(self.section_height, other.section_height, theta),
            section_width: lerp(self.section_width, other.section_width, theta),
            nose_center: lerp_point(&self.nose_center, &other.nose_center, theta),
            nose_area: lerp(self.nose_area, other.nose_area, theta),
            section_2_center: lerp_point(&self.section_2_center, &other.section_2_center, theta),
            section_2_area: lerp(self.section_2_area, other.section_2_area, theta),
            section_3_center: lerp_point(&self.section_3_center, &other.section_3_center, theta),
            section_3_area: lerp(self.section_3_area, other.section_3_area, theta),
            section_4_center: lerp_point(&self.section_4_center, &other.section_4_center, theta),
            section_4_area: lerp(self.section_4_area, other.section_4_area, theta),
            tail_angle: lerp(self.tail_angle, other.tail_angle, theta),
            tail_center: lerp_point(&self.tail_center, &other.tail_center, theta),
            tail_width: lerp(self.tail_width, other.tail_width, theta),
            tail_height: lerp(self.tail_height, other.tail_height, theta),
        }
    }

    fn values(&self) -> Vec<(&'static str, ParameterValue<T>)> {
        vec![
            ("length", ParameterValue::Scalar(self.length)),
            ("section_height", ParameterValue::Scalar(self.section_height)),
            ("section_width", ParameterValue::Scalar(self.section_width)),
            ("nose_center", self.nose_center.into()),
            ("nose_area", ParameterValue::Scalar(self.nose_area)),
            ("section_2_center", self.section_2_center.into()),
            ("section_2_area", ParameterValue::Scalar(self.section_2_area)),
            ("section_3_center", self.section_3_center.into()),
            ("section_3_area", ParameterValue::Scalar(self.section_3_area)),
            ("section_4_center", self.section_4_center.into()),
            ("section_4_area", ParameterValue::Scalar(self.section_4_area)),
            ("tail_angle", ParameterValue::Scalar(self.tail_angle)),
            ("tail_center", self.tail_center.into()),
            ("tail_width", ParameterValue::Scalar(self.tail_width)),
            ("tail_height", ParameterValue::Scalar(self.tail_height)),
        ]
    }

    fn try_from_values(values: &BTreeMap<String, ParameterValue<T>>) -> Result<Self, MorphError> {
        let r = ValueReader::try_new(Self::COMPONENT, values, Self::NAMES)?;
        Ok(Self {
            length: r.scalar("length")?,
            section_height: r.scalar("section_height")?,
            section_width: r.scalar("section_width")?,
            nose_center: r.point("nose_center")?,
            nose_area: r.scalar("nose_area")?,
            section_2_center: r.point("section_2_center")?,
            section_2_area: r.scalar("section_2_area")?,
            section_3_center: r.point("section_3_center")?,
            section_3_area: r.scalar("section_3_area")?,
            section_4_center: r.point("section_4_center")?,
            section_4_area: r.scalar("section_4_area")?,
            tail_angle: r.scalar("tail_angle")?,
            tail_center: r.point("tail_center")?,
            tail_width: r.scalar("tail_width")?,
            tail_height: r.scalar("tail_height")?,
        })
    }
}
