mod fuselage;
mod main_wing;
mod parameter_map;
mod tail;
mod value;

pub use fuselage::*;
pub use main_wing::*;
pub use parameter_map::*;
pub use tail::*;
pub use value::{ParameterKind, ParameterValue};

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{error::MorphError, misc::FloatingPoint};


/// The aircraft components whose shape is driven by parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Component {
    Fuselage,
    MainWing,
    HorizontalTail,
    VerticalTail,
}

impl Component {
    pub const ALL: [Component; 4] = [
        Component::Fuselage,
        Component::MainWing,
        Component::HorizontalTail,
        Component::VerticalTail,
    ];

    /// Component key in parameter maps, also the uid of the aircraft part it shapes.
    pub fn name(&self) -> &'static str {
        match self {
            Component::Fuselage => "fuselage",
            Component::MainWing => "wing_main",
            Component::HorizontalTail => "wing_htp",
            Component::VerticalTail => "wing_vtp",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fixed parameter schema of one component.
pub trait ComponentParameters<T: FloatingPoint>: Sized {
    const COMPONENT: Component;
    /// Parameter names in declaration order
    const NAMES: &'static [&'static str];

    /// Linear blend of every parameter, per coordinate for points.
    fn interpolate(&self, other: &Self, theta: T) -> Self;

    /// Parameter values keyed by name, in the order of [`ComponentParameters::NAMES`].
    fn values(&self) -> Vec<(&'static str, ParameterValue<T>)>;

    /// Read the parameters back from a dynamic map.
    /// Fails with [`MorphError::SchemaMismatch`] on missing, unknown or mistyped entries.
    fn try_from_values(values: &BTreeMap<String, ParameterValue<T>>) -> Result<Self, MorphError>;
}

/// One complete set of shape parameters for all tracked components at a single frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSnapshot<T: FloatingPoint> {
    pub fuselage: FuselageParameters<T>,
    pub wing_main: MainWingParameters<T>,
    pub wing_htp: HorizontalTailParameters<T>,
    pub wing_vtp: VerticalTailParameters<T>,
}

impl<T: FloatingPoint> ParameterSnapshot<T> {
    /// Linearly interpolate between `self` and `other`.
    ///
    /// `theta = 0` reproduces `self`, `theta = 1` reproduces `other`.
    /// Values outside `[0, 1]` are not guarded against and extrapolate.
    pub fn interpolate(&self, other: &Self, theta: T) -> Self {
        Self {
            fuselage: self.fuselage.interpolate(&other.fuselage, theta),
            wing_main: self.wing_main.interpolate(&other.wing_main, theta),
            wing_htp: self.wing_htp.interpolate(&other.wing_htp, theta),
            wing_vtp: self.wing_vtp.interpolate(&other.wing_vtp, theta),
        }
    }

    /// Iterate over `(component, parameter, value)` triples.
    pub fn entries(&self) -> impl Iterator<Item = (Component, &'static str, ParameterValue<T>)> {
        let components = [
            (Component::Fuselage, self.fuselage.values()),
            (Component::MainWing, self.wing_main.values()),
            (Component::HorizontalTail, self.wing_htp.values()),
            (Component::VerticalTail, self.wing_vtp.values()),
        ];
        components.into_iter().flat_map(|(component, values)| {
            values
                .into_iter()
                .map(move |(name, value)| (component, name, value))
        })
    }
}
