use std::path::PathBuf;

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// View set up before every presented frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraOptions {
    /// Direction the view looks from
    pub projection: Vector3<f64>,
    /// Point the view is centered on
    pub target: Point3<f64>,
    /// Zoom factor
    pub scale: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            projection: Vector3::new(-1., -1., 1.),
            target: Point3::new(5., 0., 0.),
            scale: 90.,
        }
    }
}

/// Options for an animation run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationOptions {
    /// Frames captured while the topology is built and after the morph finished
    pub n_frames_still: usize,
    /// Frames of the morph between the deduced and the target shape
    pub n_frames_animation: usize,
    /// Prefix of the captured frame files, the counter and extension are appended
    pub frame_basename: String,
    /// Capture every presented frame to a file
    pub write_frames: bool,
    /// Where the final aircraft configuration is written
    pub configuration_path: PathBuf,
    /// Join the captured frames into a single animation
    pub create_animation: bool,
    pub animation_path: PathBuf,
    pub camera: CameraOptions,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            n_frames_still: 5,
            n_frames_animation: 20,
            frame_basename: "result/animation_".to_string(),
            write_frames: true,
            configuration_path: PathBuf::from("out.json"),
            create_animation: true,
            animation_path: PathBuf::from("movie.json"),
            camera: CameraOptions::default(),
        }
    }
}

impl AnimationOptions {
    pub fn with_n_frames_still(mut self, n: usize) -> Self {
        self.n_frames_still = n;
        self
    }

    pub fn with_n_frames_animation(mut self, n: usize) -> Self {
        self.n_frames_animation = n;
        self
    }

    pub fn with_frame_basename(mut self, basename: impl Into<String>) -> Self {
        self.frame_basename = basename.into();
        self
    }

    pub fn with_write_frames(mut self, write_frames: bool) -> Self {
        self.write_frames = write_frames;
        self
    }

    pub fn with_configuration_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.configuration_path = path.into();
        self
    }

    pub fn with_create_animation(mut self, create_animation: bool) -> Self {
        self.create_animation = create_animation;
        self
    }

    pub fn with_animation_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.animation_path = path.into();
        self
    }

    /// File name of the frame with the running number `counter`.
    pub fn frame_path(&self, counter: usize, extension: &str) -> PathBuf {
        PathBuf::from(format!("{}{:04}.{}", self.frame_basename, counter, extension))
    }
}
