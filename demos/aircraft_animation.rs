use std::{fs::File, io::BufReader};

use anyhow::Context;
use nalgebra::{Point3, Vector3};

use airframe_morph::prelude::*;

/// Morphs the default wireframe airliner into a swept, slender configuration.
///
/// Usage: `cargo run --example aircraft_animation [options.json]`
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("Failed to open {}", path))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse {}", path))?
        }
        None => AnimationOptions::default(),
    };

    let mut driver = AnimationDriver::new(
        options,
        JsonFrameWriter::new(),
        Some(Box::new(JsonSequenceAssembler)),
    );
    let report = driver.run(
        WireframeAircraft::new("aircraft"),
        &PartBlueprint::airliner(),
        &target(),
    )?;

    log::info!(
        "Captured {} frames, animation: {:?}",
        report.frames.len(),
        report.animation
    );
    Ok(())
}

fn target() -> ParameterSnapshot<f64> {
    ParameterSnapshot {
        fuselage: FuselageParameters {
            length: 5.,
            section_height: 1.5,
            section_width: 1.75,
            nose_center: Point3::new(0., 0., -0.4),
            nose_area: 0.,
            section_2_center: Point3::new(0.3, 0., -0.2),
            section_2_area: 0.8,
            section_3_center: Point3::new(1.2, 0., 0.),
            section_3_area: 2.,
            section_4_center: Point3::new(5., 0., 0.),
            section_4_area: 2.,
            tail_angle: 20.,
            tail_center: Point3::new(10., 0., 0.75),
            tail_width: 0.075,
            tail_height: 0.5,
        },
        wing_main: MainWingParameters {
            root_leposition: Point3::new(1.5, 0., -0.33),
            scale: 2.,
            half_span: 8.,
            section_2_rel_pos: 0.95,
            root_width: 1.75,
            root_height: 0.25,
            tip_width: 0.33,
            tip_height: 0.05,
            sweep: 12.,
            dihedral: 7.,
            winglet_center_translation: Vector3::new(0.1, 0.2, 0.4),
            winglet_rotation: Vector3::new(80., 0., 0.),
            winglet_width: 0.25,
        },
        wing_htp: HorizontalTailParameters {
            root_leposition: Point3::new(9.5, 0., 0.55),
            sweep: 25.,
            dihedral: 5.,
            tip_width: 0.5,
            tip_height: 0.1,
        },
        wing_vtp: VerticalTailParameters {
            root_leposition: Point3::new(9.5, 0., 0.55),
            rotation: Vector3::new(90., 0., 0.),
            sweep: 25.,
            dihedral: 5.,
            tip_width: 0.5,
            tip_height: 0.1,
        },
    }
}
