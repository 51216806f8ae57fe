//! Reconstruct a parameter snapshot from an already built aircraft.
//!
//! The measurements are deliberately coarse: they give a sensible starting point for
//! an animation whose start geometry was generated with matching topology, nothing more.

use nalgebra::{Point3, Vector3};

use crate::{
    error::MorphError,
    geometry::{AircraftModel, CrossSection, SectionedPart, WingPart},
    misc::{equivalent_circle_area, FloatingPoint},
    parameter::{
        Component, FuselageParameters, HorizontalTailParameters, MainWingParameters,
        ParameterSnapshot, VerticalTailParameters,
    },
};


/// Sections the fuselage needs: nose, sections 2 to 4; the tail is the last one.
pub const MIN_FUSELAGE_SECTIONS: usize = 4;

/// Sections a wing needs for the tip measurements.
pub const MIN_WING_SECTIONS: usize = 2;

/// Deduce the shape parameters of every tracked component of `aircraft`.
///
/// * extents of the part bounding boxes give lengths, widths and heights
/// * section centers give the point parameters
/// * section areas are the areas of circles with the measured section circumference
/// * angles, the wing scale and the winglet rotation start from their neutral values
pub fn deduce_parameters<T, A>(aircraft: &A) -> Result<ParameterSnapshot<T>, MorphError>
where
    T: FloatingPoint,
    A: AircraftModel<T>,
{
    let fuselage = lookup_fuselage(aircraft, Component::Fuselage)?;
    let wing_main = lookup_wing(aircraft, Component::MainWing)?;
    let wing_htp = lookup_wing(aircraft, Component::HorizontalTail)?;
    let wing_vtp = lookup_wing(aircraft, Component::VerticalTail)?;
    log::info!("Deducing parameters of aircraft '{}'", aircraft.uid());

    Ok(ParameterSnapshot {
        fuselage: deduce_fuselage(fuselage)?,
        wing_main: deduce_main_wing(wing_main)?,
        wing_htp: deduce_horizontal_tail(wing_htp)?,
        wing_vtp: deduce_vertical_tail(wing_vtp)?,
    })
}

fn lookup_fuselage<T: FloatingPoint, A: AircraftModel<T>>(
    aircraft: &A,
    component: Component,
) -> Result<&A::Fuselage, MorphError> {
    aircraft
        .fuselage(component.name())
        .ok_or_else(|| MorphError::MissingComponent(component.name().to_string()))
}

fn lookup_wing<T: FloatingPoint, A: AircraftModel<T>>(
    aircraft: &A,
    component: Component,
) -> Result<&A::Wing, MorphError> {
    aircraft
        .wing(component.name())
        .ok_or_else(|| MorphError::MissingComponent(component.name().to_string()))
}

/// Fail with [`MorphError::InsufficientSections`] if `part` has fewer than `required` sections.
pub(crate) fn ensure_sections<T: FloatingPoint, P: SectionedPart<T>>(
    part: &P,
    required: usize,
) -> Result<(), MorphError> {
    let found = part.section_count();
    if found < required {
        return Err(MorphError::InsufficientSections {
            uid: part.uid().to_string(),
            required,
            found,
        });
    }
    Ok(())
}

/// Section at `index`, reported as too few sections when absent.
pub(crate) fn section<T: FloatingPoint, P: SectionedPart<T>>(
    part: &P,
    index: usize,
) -> Result<&P::Section, MorphError> {
    part.section(index).ok_or_else(|| MorphError::InsufficientSections {
        uid: part.uid().to_string(),
        required: index + 1,
        found: part.section_count(),
    })
}

fn center_and_area<T: FloatingPoint, P: SectionedPart<T>>(
    part: &P,
    index: usize,
) -> Result<(Point3<T>, T), MorphError> {
    let s = section(part, index)?;
    Ok((s.center(), equivalent_circle_area(s.circumference())))
}

fn deduce_fuselage<T: FloatingPoint, P: SectionedPart<T>>(
    fuselage: &P,
) -> Result<FuselageParameters<T>, MorphError> {
    ensure_sections(fuselage, MIN_FUSELAGE_SECTIONS)?;
    let size = fuselage.bounding_box()?.size();

    let (nose_center, nose_area) = center_and_area(fuselage, 0)?;
    let (section_2_center, section_2_area) = center_and_area(fuselage, 1)?;
    let (section_3_center, section_3_area) = center_and_area(fuselage, 2)?;
    let (section_4_center, section_4_area) = center_and_area(fuselage, 3)?;
    let tail_center = section(fuselage, fuselage.section_count() - 1)?.center();

    Ok(FuselageParameters {
        length: size.x,
        section_height: size.z,
        section_width: size.y,
        nose_center,
        nose_area,
        section_2_center,
        section_2_area,
        section_3_center,
        section_3_area,
        section_4_center,
        section_4_area,
        tail_angle: T::zero(),
        tail_center,
        tail_width: size.y,
        tail_height: size.z,
    })
}

fn deduce_main_wing<T: FloatingPoint, W: WingPart<T>>(
    wing: &W,
) -> Result<MainWingParameters<T>, MorphError> {
    ensure_sections(wing, MIN_WING_SECTIONS)?;
    let size = wing.bounding_box()?.size();

    let tip_index = wing.section_count() - 1;
    let tip = section(wing, tip_index)?.center();
    let pre_tip = section(wing, tip_index - 1)?.center();

    Ok(MainWingParameters {
        root_leposition: wing.root_leposition(),
        scale: T::one(),
        half_span: size.y,
        section_2_rel_pos: T::from_f64_constant(0.5),
        root_width: size.x,
        root_height: size.z,
        tip_width: size.x,
        tip_height: size.z,
        sweep: T::zero(),
        dihedral: T::zero(),
        winglet_center_translation: tip - pre_tip,
        winglet_rotation: Vector3::zeros(),
        winglet_width: size.x,
    })
}

fn deduce_horizontal_tail<T: FloatingPoint, W: WingPart<T>>(
    wing: &W,
) -> Result<HorizontalTailParameters<T>, MorphError> {
    ensure_sections(wing, MIN_WING_SECTIONS)?;
    let size = wing.bounding_box()?.size();
    Ok(HorizontalTailParameters {
        root_leposition: wing.root_leposition(),
        sweep: T::zero(),
        dihedral: T::zero(),
        tip_width: size.x,
        tip_height: size.z,
    })
}

fn deduce_vertical_tail<T: FloatingPoint, W: WingPart<T>>(
    wing: &W,
) -> Result<VerticalTailParameters<T>, MorphError> {
    let horizontal = deduce_horizontal_tail(wing)?;
    Ok(VerticalTailParameters {
        root_leposition: horizontal.root_leposition,
        rotation: Vector3::zeros(),
        sweep: horizontal.sweep,
        dihedral: horizontal.dihedral,
        tip_width: horizontal.tip_width,
        tip_height: horizontal.tip_height,
    })
}
