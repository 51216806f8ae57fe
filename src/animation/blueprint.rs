use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::{
    geometry::{AircraftModel, SectionedPart, WingPart},
    misc::FloatingPoint,
    parameter::Component,
};

/// One step of the topology build: a part created with default sections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PartBlueprint<T: FloatingPoint> {
    Fuselage {
        uid: String,
        section_count: usize,
    },
    Wing {
        uid: String,
        section_count: usize,
        symmetric: bool,
        root_leposition: Point3<T>,
    },
}

impl<T: FloatingPoint> PartBlueprint<T> {
    /// Tube fuselage, swept main wing and conventional tail.
    pub fn airliner() -> Vec<Self> {
        let point = |x: f64| Point3::new(T::from_f64_constant(x), T::zero(), T::zero());
        vec![
            PartBlueprint::Fuselage {
                uid: Component::Fuselage.name().to_string(),
                section_count: 5,
            },
            PartBlueprint::Wing {
                uid: Component::MainWing.name().to_string(),
                section_count: 3,
                symmetric: true,
                root_leposition: point(-2.),
            },
            PartBlueprint::Wing {
                uid: Component::HorizontalTail.name().to_string(),
                section_count: 2,
                symmetric: true,
                root_leposition: point(5.),
            },
            PartBlueprint::Wing {
                uid: Component::VerticalTail.name().to_string(),
                section_count: 2,
                symmetric: false,
                root_leposition: point(7.),
            },
        ]
    }

    pub fn uid(&self) -> &str {
        match self {
            PartBlueprint::Fuselage { uid, .. } => uid,
            PartBlueprint::Wing { uid, .. } => uid,
        }
    }

    /// Create the part in `aircraft`.
    pub fn build<A: AircraftModel<T>>(&self, aircraft: &mut A) -> anyhow::Result<()> {
        match self {
            PartBlueprint::Fuselage { uid, section_count } => {
                aircraft.create_fuselage(uid, *section_count)?;
            }
            PartBlueprint::Wing {
                uid,
                section_count,
                symmetric,
                root_leposition,
            } => {
                let wing = aircraft.create_wing(uid, *section_count)?;
                wing.set_symmetric(*symmetric);
                wing.set_root_leposition(*root_leposition);
            }
        }
        Ok(())
    }

    /// Lofts of the part as it currently is in `aircraft`, mirrored half included.
    pub fn lofts<A: AircraftModel<T>>(&self, aircraft: &A) -> anyhow::Result<Vec<A::Loft>> {
        match self {
            PartBlueprint::Fuselage { uid, .. } => {
                let fuselage = aircraft
                    .fuselage(uid)
                    .ok_or_else(|| anyhow::anyhow!("Fuselage `{}` was not built", uid))?;
                Ok(vec![fuselage.loft()?])
            }
            PartBlueprint::Wing { uid, .. } => {
                let wing = aircraft
                    .wing(uid)
                    .ok_or_else(|| anyhow::anyhow!("Wing `{}` was not built", uid))?;
                let mut lofts = vec![wing.loft()?];
                lofts.extend(wing.mirrored_loft()?);
                Ok(lofts)
            }
        }
    }
}
