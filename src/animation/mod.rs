//! Sequencing of an aircraft morphing animation.
//!
//! The driver builds the start topology part by part, deduces the start parameters,
//! morphs towards a target snapshot and hands every frame to a [`Renderer`].
//! Any failure aborts the run; only a missing [`FrameAssembler`] is skipped.

pub mod assembler;
pub mod blueprint;
pub mod options;
pub mod renderer;

pub use assembler::*;
pub use blueprint::*;
pub use options::*;
pub use renderer::*;

use std::{fmt, path::PathBuf};

use crate::{
    deduce::deduce_parameters,
    error::MorphError,
    geometry::AircraftModel,
    misc::FloatingPoint,
    parameter::ParameterSnapshot,
    synthesize::{SynthesizedFrame, Synthesizer},
};

#[cfg(test)]
mod tests;

/// The stages an animation run goes through, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnimationStage {
    BuildTopology { part: String },
    CaptureStillFrames { count: usize },
    DeduceInitialParameters,
    InterpolateAndSynthesize { frames: usize },
    ExportPersistedState,
    AssembleAnimation,
    Finished,
}

impl fmt::Display for AnimationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationStage::BuildTopology { part } => write!(f, "build topology ({})", part),
            AnimationStage::CaptureStillFrames { count } => {
                write!(f, "capture {} still frames", count)
            }
            AnimationStage::DeduceInitialParameters => f.write_str("deduce initial parameters"),
            AnimationStage::InterpolateAndSynthesize { frames } => {
                write!(f, "interpolate and synthesize {} frames", frames)
            }
            AnimationStage::ExportPersistedState => f.write_str("export persisted state"),
            AnimationStage::AssembleAnimation => f.write_str("assemble animation"),
            AnimationStage::Finished => f.write_str("finished"),
        }
    }
}

/// Blend factor of frame `index` out of `n_frames`.
///
/// Frames are spread over `[0, 1]` with both ends included; a single frame shows the target.
/// ```
/// use airframe_morph::animation::frame_theta;
/// assert_eq!(frame_theta::<f64>(0, 5), 0.);
/// assert_eq!(frame_theta::<f64>(4, 5), 1.);
/// assert_eq!(frame_theta::<f64>(0, 1), 1.);
/// ```
pub fn frame_theta<T: FloatingPoint>(index: usize, n_frames: usize) -> T {
    if n_frames > 1 {
        T::from_f64_constant(index as f64) / T::from_f64_constant((n_frames - 1) as f64)
    } else {
        T::one()
    }
}

/// Outcome of [`AnimationDriver::run`].
#[derive(Debug)]
pub struct AnimationReport<T: FloatingPoint, A> {
    /// The aircraft shaped with the last synthesized snapshot
    pub aircraft: A,
    /// Parameters deduced from the freshly built topology
    pub initial: ParameterSnapshot<T>,
    /// Files of all captured frames, in capture order
    pub frames: Vec<PathBuf>,
    pub stages: Vec<AnimationStage>,
    /// The assembled animation, if one was created
    pub animation: Option<PathBuf>,
}

/// Runs an animation against a renderer and an optional frame assembler.
pub struct AnimationDriver<R> {
    options: AnimationOptions,
    renderer: R,
    assembler: Option<Box<dyn FrameAssembler>>,
    frames: Vec<PathBuf>,
    stages: Vec<AnimationStage>,
}

impl<R> AnimationDriver<R> {
    /// Create a driver. Without `assembler`, the frames are never joined into an animation.
    pub fn new(
        options: AnimationOptions,
        renderer: R,
        assembler: Option<Box<dyn FrameAssembler>>,
    ) -> Self {
        Self {
            options,
            renderer,
            assembler,
            frames: vec![],
            stages: vec![],
        }
    }

    pub fn options(&self) -> &AnimationOptions {
        &self.options
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Files captured so far in the current run
    pub fn frames(&self) -> &[PathBuf] {
        &self.frames
    }

    /// Stages entered so far in the current run
    pub fn stages(&self) -> &[AnimationStage] {
        &self.stages
    }

    fn enter(&mut self, stage: AnimationStage) {
        log::info!("Stage: {}", stage);
        self.stages.push(stage);
    }

    /// Show `lofts` as one frame and capture it when frames are written.
    fn present<L>(&mut self, lofts: &[L]) -> Result<(), MorphError>
    where
        R: Renderer<L>,
    {
        self.renderer.clear()?;
        self.renderer.display(lofts)?;
        self.renderer.configure_camera(&self.options.camera)?;
        if self.options.write_frames {
            let path = self
                .options
                .frame_path(self.frames.len(), self.renderer.image_extension());
            log::debug!("Capturing frame {}", path.display());
            self.renderer.capture(&path)?;
            self.frames.push(path);
        }
        Ok(())
    }

    fn capture_still_frames<L>(&mut self, lofts: &[L]) -> Result<(), MorphError>
    where
        R: Renderer<L>,
    {
        let count = self.options.n_frames_still;
        self.enter(AnimationStage::CaptureStillFrames { count });
        for _ in 0..count {
            self.present(lofts)?;
        }
        Ok(())
    }

    /// Build `blueprint` into `aircraft`, morph it into `target` and export the result.
    ///
    /// Every run starts a new frame sequence: frame numbering restarts at 0 and the
    /// frames and stages of earlier runs are dropped.
    pub fn run<T, A>(
        &mut self,
        mut aircraft: A,
        blueprint: &[PartBlueprint<T>],
        target: &ParameterSnapshot<T>,
    ) -> Result<AnimationReport<T, A>, MorphError>
    where
        T: FloatingPoint,
        A: AircraftModel<T> + Clone,
        R: Renderer<A::Loft>,
    {
        self.frames.clear();
        self.stages.clear();

        let mut lofts = vec![];
        for part in blueprint {
            self.enter(AnimationStage::BuildTopology {
                part: part.uid().to_string(),
            });
            part.build(&mut aircraft)?;
            lofts.extend(part.lofts(&aircraft)?);
            self.capture_still_frames(&lofts)?;
        }

        self.enter(AnimationStage::DeduceInitialParameters);
        let initial = deduce_parameters(&aircraft)?;

        let synthesizer = Synthesizer::new(aircraft);
        let (aircraft, lofts) = match self.animate(&synthesizer, &initial, target)? {
            Some(frame) => (frame.aircraft, frame.lofts),
            None => (synthesizer.base().clone(), lofts),
        };
        self.capture_still_frames(&lofts)?;

        self.enter(AnimationStage::ExportPersistedState);
        aircraft.write_configuration(&self.options.configuration_path)?;
        log::info!(
            "Wrote configuration to {}",
            self.options.configuration_path.display()
        );

        let animation = self.assemble()?;

        self.enter(AnimationStage::Finished);
        Ok(AnimationReport {
            aircraft,
            initial,
            frames: self.frames.clone(),
            stages: self.stages.clone(),
            animation,
        })
    }

    /// Morph from `start` to `end` over the configured number of frames.
    ///
    /// Every frame is rebuilt from the synthesizer's base and presented.
    /// Returns the last frame, `None` when no frames are configured.
    pub fn animate<T, A>(
        &mut self,
        synthesizer: &Synthesizer<T, A>,
        start: &ParameterSnapshot<T>,
        end: &ParameterSnapshot<T>,
    ) -> Result<Option<SynthesizedFrame<A, A::Loft>>, MorphError>
    where
        T: FloatingPoint,
        A: AircraftModel<T> + Clone,
        R: Renderer<A::Loft>,
    {
        let n_frames = self.options.n_frames_animation;
        self.enter(AnimationStage::InterpolateAndSynthesize { frames: n_frames });

        let mut last = None;
        for index in 0..n_frames {
            let theta = frame_theta::<T>(index, n_frames);
            log::debug!("Frame {} of {}, theta = {:?}", index + 1, n_frames, theta);
            let snapshot = start.interpolate(end, theta);
            let frame = synthesizer.rebuild(&snapshot)?;
            self.present(&frame.lofts)?;
            last = Some(frame);
        }
        Ok(last)
    }

    fn assemble(&mut self) -> Result<Option<PathBuf>, MorphError> {
        if !(self.options.create_animation && self.options.write_frames) {
            return Ok(None);
        }
        self.enter(AnimationStage::AssembleAnimation);
        match self.assembler.as_mut() {
            Some(assembler) => {
                let output = self.options.animation_path.clone();
                assembler.assemble(&self.frames, &output)?;
                log::info!(
                    "Assembled {} frames into {}",
                    self.frames.len(),
                    output.display()
                );
                Ok(Some(output))
            }
            None => {
                log::warn!("Not creating the animation: no frame assembler available");
                Ok(None)
            }
        }
    }
}
