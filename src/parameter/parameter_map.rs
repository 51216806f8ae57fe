use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{error::MorphError, misc::FloatingPoint};

use super::{
    Component, ComponentParameters, FuselageParameters, HorizontalTailParameters,
    MainWingParameters, ParameterSnapshot, ParameterValue, VerticalTailParameters,
};

type ComponentValues<T> = BTreeMap<String, ParameterValue<T>>;

/// Nested `component -> parameter -> value` mapping.
///
/// The dynamic counterpart of [`ParameterSnapshot`], used where parameter sets are read
/// from or written to documents. Interpolation checks that both maps share the same
/// schema before blending anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterMap<T: FloatingPoint> {
    components: BTreeMap<String, ComponentValues<T>>,
}

impl<T: FloatingPoint> Default for ParameterMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatingPoint> ParameterMap<T> {
    pub fn new() -> Self {
        Self {
            components: BTreeMap::new(),
        }
    }

    /// Insert a value, returning the previous one if any.
    pub fn insert(
        &mut self,
        component: impl Into<String>,
        parameter: impl Into<String>,
        value: ParameterValue<T>,
    ) -> Option<ParameterValue<T>> {
        self.components
            .entry(component.into())
            .or_default()
            .insert(parameter.into(), value)
    }

    pub fn get(&self, component: &str, parameter: &str) -> Option<&ParameterValue<T>> {
        self.components.get(component)?.get(parameter)
    }

    /// Remove a value, returning it if it was present.
    pub fn remove(&mut self, component: &str, parameter: &str) -> Option<ParameterValue<T>> {
        self.components.get_mut(component)?.remove(parameter)
    }

    /// Number of parameters over all components.
    pub fn parameter_count(&self) -> usize {
        self.components.values().map(|c| c.len()).sum()
    }

    /// Linearly interpolate between `self` and `other`.
    ///
    /// Fails with [`MorphError::SchemaMismatch`] if a component or parameter exists on
    /// one side only, or if a parameter is a scalar on one side and a point on the other.
    /// Nothing is returned in that case.
    ///
    /// # Examples
    /// ```
    /// use airframe_morph::prelude::*;
    ///
    /// let mut p0 = ParameterMap::new();
    /// p0.insert("fuselage", "length", ParameterValue::Scalar(4.0));
    /// let mut p1 = ParameterMap::new();
    /// p1.insert("fuselage", "length", ParameterValue::Scalar(6.0));
    ///
    /// let p = p0.interpolate(&p1, 0.5).unwrap();
    /// assert_eq!(p.get("fuselage", "length"), Some(&ParameterValue::Scalar(5.0)));
    ///
    /// p1.insert("fuselage", "tail_angle", ParameterValue::Scalar(20.0));
    /// assert!(matches!(
    ///     p0.interpolate(&p1, 0.5),
    ///     Err(MorphError::SchemaMismatch { .. })
    /// ));
    /// ```
    pub fn interpolate(&self, other: &Self, theta: T) -> Result<Self, MorphError> {
        // keys only present on the right side
        for (component, params) in &other.components {
            let Some(own) = self.components.get(component) else {
                return Err(MorphError::schema_mismatch(
                    component,
                    "*",
                    "component missing from the first parameter set",
                ));
            };
            if let Some(parameter) = params.keys().find(|k| !own.contains_key(*k)) {
                return Err(MorphError::schema_mismatch(
                    component,
                    parameter,
                    "parameter missing from the first parameter set",
                ));
            }
        }

        let components = self
            .components
            .iter()
            .map(|(component, params)| {
                let theirs = other.components.get(component).ok_or_else(|| {
                    MorphError::schema_mismatch(
                        component,
                        "*",
                        "component missing from the second parameter set",
                    )
                })?;
                let blended = params
                    .iter()
                    .map(|(parameter, value)| {
                        let target = theirs.get(parameter).ok_or_else(|| {
                            MorphError::schema_mismatch(
                                component,
                                parameter,
                                "parameter missing from the second parameter set",
                            )
                        })?;
                        let value = value.interpolate(target, theta).ok_or_else(|| {
                            MorphError::schema_mismatch(
                                component,
                                parameter,
                                format!(
                                    "cannot blend a {:?} with a {:?}",
                                    value.kind(),
                                    target.kind()
                                ),
                            )
                        })?;
                        Ok((parameter.clone(), value))
                    })
                    .collect::<Result<ComponentValues<T>, MorphError>>()?;
                Ok((component.clone(), blended))
            })
            .collect::<Result<BTreeMap<_, _>, MorphError>>()?;

        Ok(Self { components })
    }

    fn component<P: ComponentParameters<T>>(&self) -> Result<P, MorphError> {
        let name = P::COMPONENT.name();
        let values = self
            .components
            .get(name)
            .ok_or_else(|| MorphError::schema_mismatch(name, "*", "component missing"))?;
        P::try_from_values(values)
    }
}

impl<T: FloatingPoint> From<&ParameterSnapshot<T>> for ParameterMap<T> {
    fn from(snapshot: &ParameterSnapshot<T>) -> Self {
        let mut map = Self::new();
        for (component, parameter, value) in snapshot.entries() {
            map.insert(component.name(), parameter, value);
        }
        map
    }
}

impl<T: FloatingPoint> TryFrom<&ParameterMap<T>> for ParameterSnapshot<T> {
    type Error = MorphError;

    /// Validate a dynamic map against the fixed schema.
    fn try_from(map: &ParameterMap<T>) -> Result<Self, Self::Error> {
        if let Some(unknown) = map
            .components
            .keys()
            .find(|name| Component::from_name(name).is_none())
        {
            return Err(MorphError::schema_mismatch(
                unknown,
                "*",
                "unknown component",
            ));
        }
        Ok(Self {
            fuselage: map.component::<FuselageParameters<T>>()?,
            wing_main: map.component::<MainWingParameters<T>>()?,
            wing_htp: map.component::<HorizontalTailParameters<T>>()?,
            wing_vtp: map.component::<VerticalTailParameters<T>>()?,
        })
    }
}
