use std::{
    cell::Cell,
    path::{Path, PathBuf},
    rc::Rc,
};

use approx::assert_relative_eq;

use crate::{
    error::MorphError,
    fixtures,
    geometry::wireframe::{WireframeAircraft, WireframeLoft},
};

use super::*;

fn output_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join("airframe-morph-animation-test").join(name)
}

/// Options writing into a fresh directory named `name`.
fn test_options(name: &str) -> AnimationOptions {
    let dir = output_dir(name);
    let _ = std::fs::remove_dir_all(&dir);
    AnimationOptions::default()
        .with_n_frames_still(1)
        .with_n_frames_animation(3)
        .with_frame_basename(format!("{}/frame_", dir.display()))
        .with_configuration_path(dir.join("out.json"))
        .with_animation_path(dir.join("movie.json"))
}

fn clean_up(name: &str) {
    let _ = std::fs::remove_dir_all(output_dir(name));
}

struct CountingAssembler(Rc<Cell<usize>>);

impl FrameAssembler for CountingAssembler {
    fn assemble(&mut self, frames: &[PathBuf], _output: &Path) -> anyhow::Result<()> {
        self.0.set(frames.len());
        Ok(())
    }
}

struct FailingAssembler;

impl FrameAssembler for FailingAssembler {
    fn assemble(&mut self, _frames: &[PathBuf], output: &Path) -> anyhow::Result<()> {
        anyhow::bail!("Cannot encode '{}'", output.display())
    }
}

#[test]
fn theta_spans_the_unit_interval() {
    assert_eq!(frame_theta::<f64>(0, 1), 1.);
    assert_eq!(frame_theta::<f64>(0, 20), 0.);
    assert_eq!(frame_theta::<f64>(19, 20), 1.);
    assert_relative_eq!(frame_theta::<f64>(1, 3), 0.5);
}

#[test]
fn frames_are_numbered_with_four_digits() {
    let options = AnimationOptions::default();
    assert_eq!(
        options.frame_path(7, "png"),
        PathBuf::from("result/animation_0007.png")
    );
    assert_eq!(
        options.frame_path(12345, "png"),
        PathBuf::from("result/animation_12345.png")
    );
}

#[test]
fn options_fill_missing_fields_with_defaults() {
    let options: AnimationOptions =
        serde_json::from_str(r#"{ "n_frames_animation": 3, "camera": { "scale": 45.0 } }"#)
            .unwrap();
    assert_eq!(options.n_frames_animation, 3);
    assert_eq!(options.n_frames_still, 5);
    assert_eq!(options.frame_basename, "result/animation_");
    assert_eq!(options.camera.scale, 45.);
    assert_eq!(options.camera.target, CameraOptions::default().target);
}

#[test]
fn run_visits_every_stage_in_order() {
    let mut driver = AnimationDriver::new(test_options("stages"), FrameRecorder::new(), None);
    assert!(!driver.options().configuration_path.exists());
    let report = driver
        .run(
            WireframeAircraft::new("aircraft"),
            &PartBlueprint::airliner(),
            &fixtures::airliner_target(),
        )
        .unwrap();

    let still = AnimationStage::CaptureStillFrames { count: 1 };
    let build = |part: &str| AnimationStage::BuildTopology {
        part: part.to_string(),
    };
    assert_eq!(
        report.stages,
        vec![
            build("fuselage"),
            still.clone(),
            build("wing_main"),
            still.clone(),
            build("wing_htp"),
            still.clone(),
            build("wing_vtp"),
            still.clone(),
            AnimationStage::DeduceInitialParameters,
            AnimationStage::InterpolateAndSynthesize { frames: 3 },
            still,
            AnimationStage::ExportPersistedState,
            AnimationStage::AssembleAnimation,
            AnimationStage::Finished,
        ]
    );
    // no assembler, nothing assembled
    assert!(report.animation.is_none());
    assert!(driver.options().configuration_path.exists());
    clean_up("stages");
}

#[test]
fn frames_share_one_counter() {
    let mut driver = AnimationDriver::new(test_options("counter"), FrameRecorder::new(), None);
    let report = driver
        .run(
            WireframeAircraft::new("aircraft"),
            &PartBlueprint::airliner(),
            &fixtures::airliner_target(),
        )
        .unwrap();

    // four topology stills, three morph frames, one final still
    assert_eq!(report.frames.len(), 8);
    let names = report
        .frames
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    assert_eq!(names.first().unwrap(), "frame_0000.frame");
    assert_eq!(names.last().unwrap(), "frame_0007.frame");

    let recorder = driver.renderer();
    assert_eq!(recorder.clears(), 8);
    let shown = recorder.frames().iter().map(|f| f.lofts.len()).collect::<Vec<_>>();
    assert_eq!(shown, vec![1, 3, 5, 6, 6, 6, 6, 6]);
    assert_eq!(recorder.frames()[0].camera, Some(CameraOptions::default()));
    clean_up("counter");
}

#[test]
fn every_run_starts_a_new_sequence() {
    let mut driver = AnimationDriver::new(test_options("rerun"), FrameRecorder::new(), None);
    let blueprint = PartBlueprint::airliner();
    let target = fixtures::airliner_target();
    let first = driver
        .run(WireframeAircraft::new("aircraft"), &blueprint, &target)
        .unwrap();
    let second = driver
        .run(WireframeAircraft::new("aircraft"), &blueprint, &target)
        .unwrap();

    assert_eq!(second.frames, first.frames);
    assert_eq!(second.stages, first.stages);
    assert_eq!(second.frames.len(), 8);
    assert_eq!(second.stages.len(), 14);
    assert_eq!(
        second.frames[0].file_name().unwrap().to_string_lossy(),
        "frame_0000.frame"
    );
    assert_eq!(driver.frames().len(), 8);
    clean_up("rerun");
}

#[test]
fn frames_are_not_captured_unless_written() {
    let options = test_options("no-frames").with_write_frames(false);
    let assembled = Rc::new(Cell::new(0));
    let mut driver = AnimationDriver::new(
        options,
        FrameRecorder::<WireframeLoft<f64>>::new(),
        Some(Box::new(CountingAssembler(assembled.clone()))),
    );
    let report = driver
        .run(
            WireframeAircraft::new("aircraft"),
            &PartBlueprint::airliner(),
            &fixtures::airliner_target(),
        )
        .unwrap();
    assert!(report.frames.is_empty());
    assert!(driver.renderer().frames().is_empty());
    assert!(report.animation.is_none());
    assert_eq!(assembled.get(), 0);
    assert!(!report.stages.contains(&AnimationStage::AssembleAnimation));
    clean_up("no-frames");
}

#[test]
fn assembler_receives_every_frame() {
    let assembled = Rc::new(Cell::new(0));
    let mut driver = AnimationDriver::new(
        test_options("assembler"),
        FrameRecorder::new(),
        Some(Box::new(CountingAssembler(assembled.clone()))),
    );
    let report = driver
        .run(
            WireframeAircraft::new("aircraft"),
            &PartBlueprint::airliner(),
            &fixtures::airliner_target(),
        )
        .unwrap();
    assert_eq!(assembled.get(), 8);
    assert_eq!(report.animation, Some(driver.options().animation_path.clone()));
    clean_up("assembler");
}

#[test]
fn failing_assembler_aborts_the_run() {
    let mut driver = AnimationDriver::new(
        test_options("failing-assembler"),
        FrameRecorder::new(),
        Some(Box::new(FailingAssembler)),
    );
    let result = driver.run(
        WireframeAircraft::new("aircraft"),
        &PartBlueprint::airliner(),
        &fixtures::airliner_target(),
    );
    let Err(MorphError::Collaborator(err)) = result else {
        panic!("expected the assembler error");
    };
    assert!(err.to_string().contains("movie.json"));
    assert_eq!(driver.stages().last(), Some(&AnimationStage::AssembleAnimation));
    // the configuration is exported before the frames are assembled
    assert!(driver.options().configuration_path.exists());
    clean_up("failing-assembler");
}

#[test]
fn single_frame_reaches_the_target() {
    let options = test_options("single").with_n_frames_animation(1);
    let mut driver = AnimationDriver::new(options, FrameRecorder::new(), None);
    let target = fixtures::airliner_target();
    let report = driver
        .run(
            WireframeAircraft::new("aircraft"),
            &PartBlueprint::airliner(),
            &target,
        )
        .unwrap();
    assert_eq!(report.frames.len(), 6);
    let htp = report.aircraft.wing("wing_htp").unwrap();
    assert_eq!(htp.sweep(), target.wing_htp.sweep);
    clean_up("single");
}

#[test]
fn failing_frame_aborts_the_run() {
    let mut target = fixtures::airliner_target();
    target.wing_htp.sweep = 95.;
    let mut driver = AnimationDriver::new(test_options("abort"), FrameRecorder::new(), None);
    let result = driver.run(
        WireframeAircraft::new("aircraft"),
        &PartBlueprint::airliner(),
        &target,
    );
    assert!(matches!(result, Err(MorphError::Collaborator(_))));
    // the sweep leaves the accepted range only in the last frame
    assert_eq!(driver.frames().len(), 6);
    assert_eq!(
        driver.stages().last(),
        Some(&AnimationStage::InterpolateAndSynthesize { frames: 3 })
    );
    clean_up("abort");
}

#[test]
fn duplicate_parts_in_the_blueprint_are_fatal() {
    let mut blueprint = PartBlueprint::<f64>::airliner();
    blueprint.push(blueprint[0].clone());
    let mut driver = AnimationDriver::new(test_options("duplicate"), FrameRecorder::new(), None);
    let result = driver.run(
        WireframeAircraft::new("aircraft"),
        &blueprint,
        &fixtures::airliner_target(),
    );
    assert!(matches!(result, Err(MorphError::Collaborator(_))));
    clean_up("duplicate");
}
