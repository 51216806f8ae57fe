//! Apply parameter snapshots to the aircraft parts.

use std::marker::PhantomData;

use crate::{
    deduce::{ensure_sections, section, MIN_FUSELAGE_SECTIONS},
    error::MorphError,
    geometry::{AircraftModel, CrossSection, SectionedPart, WingPart},
    misc::{lerp, lerp_point, FloatingPoint},
    parameter::{
        Component, FuselageParameters, HorizontalTailParameters, MainWingParameters,
        ParameterSnapshot, VerticalTailParameters,
    },
};


/// Sections the main wing needs: root, the repositioned section and the winglet.
pub const MIN_MAIN_WING_SECTIONS: usize = 3;

/// Sections a tailplane needs.
pub const MIN_TAIL_SECTIONS: usize = 2;

/// Rebuilds the aircraft from a fixed base topology for every snapshot.
///
/// [`apply_parameters`] mutates parts in place and several of its steps build on the
/// current state (wing scale, half span, repositioned sections). Starting every frame
/// from the same base makes the result a function of the snapshot alone.
#[derive(Debug, Clone)]
pub struct Synthesizer<T: FloatingPoint, A> {
    base: A,
    _marker: PhantomData<T>,
}

/// The outcome of one synthesis: the shaped aircraft and the lofts of its visible parts.
#[derive(Debug, Clone)]
pub struct SynthesizedFrame<A, L> {
    pub aircraft: A,
    pub lofts: Vec<L>,
}

impl<T, A> Synthesizer<T, A>
where
    T: FloatingPoint,
    A: AircraftModel<T> + Clone,
{
    pub fn new(base: A) -> Self {
        Self {
            base,
            _marker: PhantomData,
        }
    }

    pub fn base(&self) -> &A {
        &self.base
    }

    /// Shape a fresh copy of the base aircraft with `snapshot`.
    pub fn rebuild(
        &self,
        snapshot: &ParameterSnapshot<T>,
    ) -> Result<SynthesizedFrame<A, A::Loft>, MorphError> {
        let mut aircraft = self.base.clone();
        let lofts = apply_parameters(&mut aircraft, snapshot)?;
        Ok(SynthesizedFrame { aircraft, lofts })
    }
}

/// Apply `snapshot` to the parts of `aircraft` and return the lofts of every visible part.
///
/// Lofts are ordered fuselage, main wing, horizontal tail, vertical tail, each wing
/// followed by its mirrored half when it is symmetric. Parameter values are forwarded
/// as they are; implausible values are left to the geometry kernel to reject.
pub fn apply_parameters<T, A>(
    aircraft: &mut A,
    snapshot: &ParameterSnapshot<T>,
) -> Result<Vec<A::Loft>, MorphError>
where
    T: FloatingPoint,
    A: AircraftModel<T>,
{
    let mut lofts = vec![];

    let fuselage = fuselage_mut(aircraft, Component::Fuselage)?;
    shape_fuselage(fuselage, &snapshot.fuselage)?;
    lofts.push(fuselage.loft()?);

    let wing_main = wing_mut(aircraft, Component::MainWing)?;
    shape_main_wing(wing_main, &snapshot.wing_main)?;
    push_wing_lofts(wing_main, &mut lofts)?;

    let wing_htp = wing_mut(aircraft, Component::HorizontalTail)?;
    shape_horizontal_tail(wing_htp, &snapshot.wing_htp)?;
    push_wing_lofts(wing_htp, &mut lofts)?;

    let wing_vtp = wing_mut(aircraft, Component::VerticalTail)?;
    shape_vertical_tail(wing_vtp, &snapshot.wing_vtp)?;
    push_wing_lofts(wing_vtp, &mut lofts)?;

    Ok(lofts)
}

fn fuselage_mut<T: FloatingPoint, A: AircraftModel<T>>(
    aircraft: &mut A,
    component: Component,
) -> Result<&mut A::Fuselage, MorphError> {
    aircraft
        .fuselage_mut(component.name())
        .ok_or_else(|| MorphError::MissingComponent(component.name().to_string()))
}

fn wing_mut<T: FloatingPoint, A: AircraftModel<T>>(
    aircraft: &mut A,
    component: Component,
) -> Result<&mut A::Wing, MorphError> {
    aircraft
        .wing_mut(component.name())
        .ok_or_else(|| MorphError::MissingComponent(component.name().to_string()))
}

fn push_wing_lofts<T: FloatingPoint, W: WingPart<T>>(
    wing: &W,
    lofts: &mut Vec<W::Loft>,
) -> Result<(), MorphError> {
    lofts.push(wing.loft()?);
    if let Some(mirrored) = wing.mirrored_loft()? {
        lofts.push(mirrored);
    }
    Ok(())
}

fn section_mut<T: FloatingPoint, P: SectionedPart<T>>(
    part: &mut P,
    index: usize,
) -> Result<&mut P::Section, MorphError> {
    let found = part.section_count();
    let uid = part.uid().to_string();
    part.section_mut(index).ok_or(MorphError::InsufficientSections {
        uid,
        required: index + 1,
        found,
    })
}

fn shape_fuselage<T: FloatingPoint, P: SectionedPart<T>>(
    fuselage: &mut P,
    params: &FuselageParameters<T>,
) -> Result<(), MorphError> {
    ensure_sections(&*fuselage, MIN_FUSELAGE_SECTIONS)?;

    for index in 0..fuselage.section_count() {
        let s = section_mut(fuselage, index)?;
        s.set_height(params.section_height);
        s.set_width(params.section_width);
    }

    let resized = [
        (params.nose_center, params.nose_area),
        (params.section_2_center, params.section_2_area),
        (params.section_3_center, params.section_3_area),
        (params.section_4_center, params.section_4_area),
    ];
    for (index, (center, area)) in resized.into_iter().enumerate() {
        let s = section_mut(fuselage, index)?;
        s.set_center(center);
        s.set_area(area);
    }

    // the tail upsweep (`tail_angle`) has no section counterpart yet
    let tail_index = fuselage.section_count() - 1;
    let tail = section_mut(fuselage, tail_index)?;
    tail.set_center(params.tail_center);
    tail.set_width(params.tail_width);
    tail.set_height(params.tail_height);
    Ok(())
}

fn shape_main_wing<T: FloatingPoint, W: WingPart<T>>(
    wing: &mut W,
    params: &MainWingParameters<T>,
) -> Result<(), MorphError> {
    ensure_sections(&*wing, MIN_MAIN_WING_SECTIONS)?;

    wing.set_root_leposition(params.root_leposition);
    wing.scale(params.scale)?;
    wing.set_half_span_keep_area(params.half_span)?;

    // move the second-to-last section between its neighbours
    let tip_index = wing.section_count() - 1;
    let tip = section(&*wing, tip_index)?.center();
    let inner = section(&*wing, tip_index - 2)?.center();
    section_mut(wing, tip_index - 1)?.set_center(lerp_point(
        &inner,
        &tip,
        params.section_2_rel_pos,
    ));

    // taper from root to tip along the span
    for index in 0..wing.section_count() {
        let s = section_mut(wing, index)?;
        let theta = s.center().y / params.half_span;
        s.set_width(lerp(params.root_width, params.tip_width, theta));
        s.set_height(lerp(params.root_height, params.tip_height, theta));
    }

    wing.set_sweep(params.sweep)?;
    wing.set_dihedral(params.dihedral)?;

    // winglet
    let pre_tip = section(&*wing, tip_index - 1)?.center();
    let winglet = section_mut(wing, tip_index)?;
    winglet.set_center(pre_tip + params.winglet_center_translation);
    winglet.set_rotation(params.winglet_rotation);
    winglet.set_width(params.winglet_width);
    Ok(())
}

fn shape_tip<T: FloatingPoint, W: WingPart<T>>(
    wing: &mut W,
    tip_width: T,
    tip_height: T,
) -> Result<(), MorphError> {
    let tip_index = wing.section_count() - 1;
    let tip = section_mut(wing, tip_index)?;
    tip.set_width(tip_width);
    tip.set_height(tip_height);
    Ok(())
}

fn shape_horizontal_tail<T: FloatingPoint, W: WingPart<T>>(
    wing: &mut W,
    params: &HorizontalTailParameters<T>,
) -> Result<(), MorphError> {
    ensure_sections(&*wing, MIN_TAIL_SECTIONS)?;
    wing.set_root_leposition(params.root_leposition);
    wing.set_sweep(params.sweep)?;
    wing.set_dihedral(params.dihedral)?;
    shape_tip(wing, params.tip_width, params.tip_height)
}

fn shape_vertical_tail<T: FloatingPoint, W: WingPart<T>>(
    wing: &mut W,
    params: &VerticalTailParameters<T>,
) -> Result<(), MorphError> {
    ensure_sections(&*wing, MIN_TAIL_SECTIONS)?;
    wing.set_root_leposition(params.root_leposition);
    wing.set_rotation(params.rotation);
    wing.set_sweep(params.sweep)?;
    wing.set_dihedral(params.dihedral)?;
    shape_tip(wing, params.tip_width, params.tip_height)
}
