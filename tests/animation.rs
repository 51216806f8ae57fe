use std::path::PathBuf;

use airframe_morph::prelude::*;
use approx::assert_relative_eq;

fn blueprint(fuselage_sections: usize) -> Vec<PartBlueprint<f64>> {
    let mut blueprint = PartBlueprint::airliner();
    blueprint[0] = PartBlueprint::Fuselage {
        uid: "fuselage".to_string(),
        section_count: fuselage_sections,
    };
    blueprint
}

fn built_aircraft(blueprint: &[PartBlueprint<f64>]) -> WireframeAircraft<f64> {
    let mut aircraft = WireframeAircraft::new("aircraft");
    for part in blueprint {
        part.build(&mut aircraft).unwrap();
    }
    aircraft
}

/// Fresh output directory, emptied of anything a previous run left behind.
fn output_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("airframe-morph-it").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn section_height_morphs_monotonically() {
    let blueprint = blueprint(6);
    let start = deduce_parameters(&built_aircraft(&blueprint)).unwrap();
    let h0 = start.fuselage.section_height;
    let mut target = start.clone();
    target.fuselage.section_height = 1.5;

    let dir = output_dir("height");
    let options = AnimationOptions::default()
        .with_n_frames_still(0)
        .with_n_frames_animation(20)
        .with_frame_basename(format!("{}/frame_", dir.display()))
        .with_configuration_path(dir.join("out.json"));
    let mut driver = AnimationDriver::new(options, FrameRecorder::new(), None);
    let report = driver
        .run(WireframeAircraft::new("aircraft"), &blueprint, &target)
        .unwrap();
    assert_eq!(report.initial, start);

    // sections past the fourth only take the common section height
    let heights = driver
        .renderer()
        .frames()
        .iter()
        .map(|frame| {
            let fuselage: &WireframeLoft<f64> = &frame.lofts[0];
            assert_eq!(fuselage.uid(), "fuselage");
            fuselage.sections()[4].height()
        })
        .collect::<Vec<_>>();
    assert_eq!(heights.len(), 20);
    assert_eq!(heights[0], h0);
    assert_eq!(heights[19], 1.5);
    assert!(heights.windows(2).all(|w| w[0] < w[1]));

    let fuselage = report.aircraft.fuselage("fuselage").unwrap();
    assert_relative_eq!(fuselage.section(4).unwrap().height(), 1.5);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn deduced_start_resynthesizes_the_same_extents() {
    // four sections plus the tail
    let aircraft = built_aircraft(&blueprint(5));
    let snapshot = deduce_parameters(&aircraft).unwrap();
    let frame = Synthesizer::new(aircraft.clone()).rebuild(&snapshot).unwrap();

    let before = aircraft.fuselage("fuselage").unwrap().bounding_box().unwrap();
    let after = frame.lofts[0].bounding_box();
    assert_relative_eq!(before.size(), after.size(), epsilon = 1e-9);

    for uid in ["wing_main", "wing_htp", "wing_vtp"] {
        let before = aircraft.wing(uid).unwrap().bounding_box().unwrap();
        let after = frame.aircraft.wing(uid).unwrap().bounding_box().unwrap();
        assert_relative_eq!(before.size(), after.size(), epsilon = 1e-9);
        assert_relative_eq!(before.center(), after.center(), epsilon = 1e-9);
    }
}

#[test]
fn json_frames_are_written_and_assembled() {
    let blueprint = blueprint(5);
    let start = deduce_parameters(&built_aircraft(&blueprint)).unwrap();
    let mut target = start.clone();
    target.wing_main.sweep = 20.;
    target.wing_main.half_span = 6.;

    let dir = output_dir("json");
    let options = AnimationOptions::default()
        .with_n_frames_still(1)
        .with_n_frames_animation(4)
        .with_frame_basename(format!("{}/frame_", dir.display()))
        .with_configuration_path(dir.join("out.json"))
        .with_animation_path(dir.join("movie.json"));
    let mut driver = AnimationDriver::new(
        options,
        JsonFrameWriter::new(),
        Some(Box::new(JsonSequenceAssembler)),
    );
    let report = driver
        .run(WireframeAircraft::new("aircraft"), &blueprint, &target)
        .unwrap();

    assert_eq!(report.frames.len(), 9);
    assert!(report.frames.iter().all(|path| path.exists()));
    assert_eq!(report.frames[8], dir.join("frame_0008.json"));

    let movie = report.animation.as_ref().unwrap();
    let document: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(movie).unwrap()).unwrap();
    let frames = document["frames"].as_array().unwrap();
    assert_eq!(frames.len(), 9);
    assert_eq!(frames[0]["lofts"].as_array().unwrap().len(), 1);
    assert_eq!(frames[8]["lofts"].as_array().unwrap().len(), 6);
    assert_eq!(frames[8]["camera"]["scale"], 90.);

    let written = WireframeAircraft::<f64>::read_configuration(&dir.join("out.json")).unwrap();
    assert_eq!(written.wings().len(), 3);
    let wing = written.wing("wing_main").unwrap();
    assert_eq!(wing.sweep(), 20.);
    // the span is stretched to 6, then the winglet is pulled back to its deduced offset
    let pre_tip = wing.section(1).unwrap().center();
    let tip = wing.section(2).unwrap().center();
    assert_relative_eq!(pre_tip.y, 3., epsilon = 1e-9);
    assert_relative_eq!(tip, pre_tip + start.wing_main.winglet_center_translation, epsilon = 1e-9);
    assert_relative_eq!(tip.y, 4., epsilon = 1e-9);
    std::fs::remove_dir_all(&dir).unwrap();
}
