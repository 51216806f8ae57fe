use std::collections::BTreeMap;

use itertools::Itertools;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::{
    error::MorphError,
    misc::{lerp, lerp_point, FloatingPoint},
};

use super::Component;

/// The kind of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    Scalar,
    Point,
}

/// A single shape parameter: a scalar (length, angle in degrees, area, ratio) or a 3D point.
///
/// Serialized as a bare number or a `[x, y, z]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue<T: FloatingPoint> {
    Scalar(T),
    Point(Point3<T>),
}

impl<T: FloatingPoint> ParameterValue<T> {
    pub fn kind(&self) -> ParameterKind {
        match self {
            ParameterValue::Scalar(_) => ParameterKind::Scalar,
            ParameterValue::Point(_) => ParameterKind::Point,
        }
    }

    pub fn as_scalar(&self) -> Option<T> {
        match self {
            ParameterValue::Scalar(v) => Some(*v),
            ParameterValue::Point(_) => None,
        }
    }

    pub fn as_point(&self) -> Option<Point3<T>> {
        match self {
            ParameterValue::Scalar(_) => None,
            ParameterValue::Point(p) => Some(*p),
        }
    }

    /// Blend two values of the same kind.
    /// Returns `None` if the kinds differ.
    pub fn interpolate(&self, other: &Self, theta: T) -> Option<Self> {
        match (self, other) {
            (ParameterValue::Scalar(a), ParameterValue::Scalar(b)) => {
                Some(ParameterValue::Scalar(lerp(*a, *b, theta)))
            }
            (ParameterValue::Point(a), ParameterValue::Point(b)) => {
                Some(ParameterValue::Point(lerp_point(a, b, theta)))
            }
            _ => None,
        }
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for ParameterValue<T> {
    fn from(v: Vector3<T>) -> Self {
        ParameterValue::Point(Point3::from(v))
    }
}

impl<T: FloatingPoint> From<Point3<T>> for ParameterValue<T> {
    fn from(p: Point3<T>) -> Self {
        ParameterValue::Point(p)
    }
}

/// Typed access to the parameters of one component in a dynamic map.
pub(crate) struct ValueReader<'a, T: FloatingPoint> {
    component: Component,
    values: &'a BTreeMap<String, ParameterValue<T>>,
}

impl<'a, T: FloatingPoint> ValueReader<'a, T> {
    /// Fails if `values` holds a parameter not listed in `names`.
    pub(crate) fn try_new(
        component: Component,
        values: &'a BTreeMap<String, ParameterValue<T>>,
        names: &[&str],
    ) -> Result<Self, MorphError> {
        let unknown = values
            .keys()
            .filter(|key| !names.contains(&key.as_str()))
            .collect_vec();
        if !unknown.is_empty() {
            return Err(MorphError::schema_mismatch(
                component.name(),
                unknown.iter().join(", "),
                "unknown parameter",
            ));
        }
        Ok(Self { component, values })
    }

    fn get(&self, name: &str) -> Result<&ParameterValue<T>, MorphError> {
        self.values
            .get(name)
            .ok_or_else(|| MorphError::schema_mismatch(self.component.name(), name, "missing"))
    }

    pub(crate) fn scalar(&self, name: &str) -> Result<T, MorphError> {
        self.get(name)?.as_scalar().ok_or_else(|| {
            MorphError::schema_mismatch(self.component.name(), name, "expected a scalar")
        })
    }

    pub(crate) fn point(&self, name: &str) -> Result<Point3<T>, MorphError> {
        self.get(name)?.as_point().ok_or_else(|| {
            MorphError::schema_mismatch(self.component.name(), name, "expected a point")
        })
    }

    pub(crate) fn vector(&self, name: &str) -> Result<Vector3<T>, MorphError> {
        self.point(name).map(|p| p.coords)
    }
}
