use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};

use crate::geometry::{AircraftModel, CrossSection, SectionedPart, WingPart};

use super::*;

#[test]
fn default_fuselage_is_a_unit_tube() {
    let mut aircraft = WireframeAircraft::<f64>::new("aircraft");
    let fuselage = aircraft.create_fuselage("fuselage", 5).unwrap();
    assert_eq!(fuselage.section_count(), 5);
    let bb = fuselage.bounding_box().unwrap();
    assert_relative_eq!(bb.size(), Vector3::new(4., 1., 1.), epsilon = 1e-12);
}

#[test]
fn default_wing_spans_along_y() {
    let mut aircraft = WireframeAircraft::<f64>::new("aircraft");
    let wing = aircraft.create_wing("wing_main", 3).unwrap();
    wing.set_root_leposition(Point3::new(-2., 0., 0.));
    let bb = wing.bounding_box().unwrap();
    assert_relative_eq!(bb.size(), Vector3::new(1., 2., 0.12), epsilon = 1e-12);
    assert_relative_eq!(bb.min().x, -2.5, epsilon = 1e-12);
}

#[test]
fn duplicate_or_degenerate_parts_are_rejected() {
    let mut aircraft = WireframeAircraft::<f64>::new("aircraft");
    aircraft.create_wing("wing_main", 3).unwrap();
    assert!(aircraft.create_fuselage("wing_main", 5).is_err());
    assert!(aircraft.create_wing("wing_htp", 1).is_err());
    assert!(aircraft.wing("wing_htp").is_none());
}

#[test]
fn set_area_scales_uniformly() {
    let mut section = WireframeSection::new(Point3::origin(), 2., 1., ProfilePlane::YZ);
    let area = section.area();
    section.set_area(area * 4.);
    assert_relative_eq!(section.width(), 4., epsilon = 1e-12);
    assert_relative_eq!(section.height(), 2., epsilon = 1e-12);

    // a collapsed profile reopens as a circle
    let mut section = WireframeSection::new(Point3::origin(), 0., 0., ProfilePlane::YZ);
    section.set_area(std::f64::consts::PI);
    assert_relative_eq!(section.width(), 2., epsilon = 1e-12);
    assert_relative_eq!(section.height(), 2., epsilon = 1e-12);
}

#[test]
fn rotated_profile_changes_extents() {
    let mut section = WireframeSection::new(Point3::origin(), 1., 0.1, ProfilePlane::XZ);
    section.set_rotation(Vector3::new(0., 90., 0.));
    let bb = crate::bounding_box::BoundingBox::new_with_points(section.outline()).unwrap();
    assert_relative_eq!(bb.size().x, 0.1, epsilon = 1e-9);
    assert_relative_eq!(bb.size().z, 1., epsilon = 1e-9);
}

#[test]
fn half_span_keeps_planform_area() {
    let mut wing = WireframeWing::<f64>::new("wing", 3);
    wing.set_half_span_keep_area(8.).unwrap();
    assert_relative_eq!(wing.half_span(), 8.);
    assert_relative_eq!(wing.section(1).unwrap().center().y, 4.);
    assert_relative_eq!(wing.section(2).unwrap().width(), 0.25);

    let mut wing = WireframeWing::<f64>::new("wing", 1);
    assert!(wing.set_half_span_keep_area(8.).is_err());
}

#[test]
fn scale_grows_wing_around_root() {
    let mut wing = WireframeWing::<f64>::new("wing", 2);
    wing.scale(2.).unwrap();
    assert_relative_eq!(wing.half_span(), 2.);
    assert_relative_eq!(wing.section(0).unwrap().width(), 2.);
    assert!(wing.scale(0.).is_err());
}

#[test]
fn sweep_and_dihedral_shear_the_tip() {
    let mut wing = WireframeWing::<f64>::new("wing", 2);
    wing.set_sweep(45.).unwrap();
    wing.set_dihedral(45.).unwrap();
    let bb = wing.bounding_box().unwrap();
    // tip shifted back and up by one span
    assert_relative_eq!(bb.max().x, 1.5, epsilon = 1e-9);
    assert_relative_eq!(bb.max().z, 1.06, epsilon = 1e-9);
    assert!(wing.set_sweep(90.).is_err());
}

#[test]
fn mirrored_loft_only_for_symmetric_wings() {
    let mut wing = WireframeWing::<f64>::new("wing", 2);
    assert!(wing.mirrored_loft().unwrap().is_none());
    wing.set_symmetric(true);
    let mirrored = wing.mirrored_loft().unwrap().unwrap();
    assert!(mirrored.is_mirrored());
    assert_relative_eq!(mirrored.bounding_box().min().y, -1.);
    assert_relative_eq!(mirrored.bounding_box().max().y, 0.);
    assert_eq!(mirrored.uid(), "wing");
}

#[test]
fn vertical_rotation_stands_the_wing_up() {
    let mut wing = WireframeWing::<f64>::new("wing_vtp", 2);
    wing.set_rotation(Vector3::new(90., 0., 0.));
    let bb = wing.bounding_box().unwrap();
    assert_relative_eq!(bb.size().z, 1., epsilon = 1e-9);
    assert_relative_eq!(bb.size().y, 0.12, epsilon = 1e-9);
}

#[test]
fn configuration_round_trips_through_file() {
    let mut aircraft = WireframeAircraft::<f64>::new("aircraft");
    aircraft.create_fuselage("fuselage", 5).unwrap();
    aircraft.create_wing("wing_main", 3).unwrap().set_symmetric(true);

    let path = std::env::temp_dir()
        .join("airframe-morph-wireframe-test")
        .join("configuration.json");
    aircraft.write_configuration(&path).unwrap();
    let read = WireframeAircraft::<f64>::read_configuration(&path).unwrap();
    assert_eq!(read.fuselages().len(), 1);
    assert!(read.wing("wing_main").unwrap().is_symmetric());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn non_finite_configuration_is_not_written() {
    let mut aircraft = WireframeAircraft::<f64>::new("aircraft");
    aircraft.create_fuselage("fuselage", 5).unwrap();
    let wing = aircraft.create_wing("wing_main", 3).unwrap();
    // a zero span divides the chords by zero
    wing.set_half_span_keep_area(0.).unwrap();
    assert!(!wing.is_finite());

    let path = std::env::temp_dir()
        .join("airframe-morph-wireframe-test")
        .join("non-finite.json");
    let _ = std::fs::remove_file(&path);
    let err = aircraft.write_configuration(&path).unwrap_err();
    assert!(err.to_string().contains("wing_main"));
    assert!(!path.exists());
}
