use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Serialize;

use super::CameraOptions;

/// Display surface the animation is presented on.
pub trait Renderer<L> {
    /// Remove everything currently shown.
    fn clear(&mut self) -> anyhow::Result<()>;
    /// Show `lofts` on top of what is already shown.
    fn display(&mut self, lofts: &[L]) -> anyhow::Result<()>;
    fn configure_camera(&mut self, camera: &CameraOptions) -> anyhow::Result<()>;
    /// Rasterize the current view to `path`.
    fn capture(&mut self, path: &Path) -> anyhow::Result<()>;
    /// Extension of the captured files, without the dot
    fn image_extension(&self) -> &str;
}

/// A frame kept by [`FrameRecorder`].
#[derive(Clone, Debug)]
pub struct RecordedFrame<L> {
    pub path: PathBuf,
    pub lofts: Vec<L>,
    pub camera: Option<CameraOptions>,
}

/// Renderer keeping the captured frames in memory.
#[derive(Clone, Debug)]
pub struct FrameRecorder<L> {
    shown: Vec<L>,
    camera: Option<CameraOptions>,
    frames: Vec<RecordedFrame<L>>,
    clears: usize,
}

impl<L> Default for FrameRecorder<L> {
    fn default() -> Self {
        Self {
            shown: vec![],
            camera: None,
            frames: vec![],
            clears: 0,
        }
    }
}

impl<L> FrameRecorder<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> &[L] {
        &self.shown
    }

    pub fn frames(&self) -> &[RecordedFrame<L>] {
        &self.frames
    }

    /// Number of times the view was cleared
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl<L: Clone> Renderer<L> for FrameRecorder<L> {
    fn clear(&mut self) -> anyhow::Result<()> {
        self.shown.clear();
        self.clears += 1;
        Ok(())
    }

    fn display(&mut self, lofts: &[L]) -> anyhow::Result<()> {
        self.shown.extend_from_slice(lofts);
        Ok(())
    }

    fn configure_camera(&mut self, camera: &CameraOptions) -> anyhow::Result<()> {
        self.camera = Some(camera.clone());
        Ok(())
    }

    fn capture(&mut self, path: &Path) -> anyhow::Result<()> {
        self.frames.push(RecordedFrame {
            path: path.to_path_buf(),
            lofts: self.shown.clone(),
            camera: self.camera.clone(),
        });
        Ok(())
    }

    fn image_extension(&self) -> &str {
        "frame"
    }
}

#[derive(Serialize)]
struct FrameDocument<'a, L> {
    camera: Option<&'a CameraOptions>,
    lofts: &'a [L],
}

/// Renderer writing every captured view as a JSON document.
#[derive(Clone, Debug)]
pub struct JsonFrameWriter<L> {
    shown: Vec<L>,
    camera: Option<CameraOptions>,
}

impl<L> Default for JsonFrameWriter<L> {
    fn default() -> Self {
        Self {
            shown: vec![],
            camera: None,
        }
    }
}

impl<L> JsonFrameWriter<L> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: Clone + Serialize> Renderer<L> for JsonFrameWriter<L> {
    fn clear(&mut self) -> anyhow::Result<()> {
        self.shown.clear();
        Ok(())
    }

    fn display(&mut self, lofts: &[L]) -> anyhow::Result<()> {
        self.shown.extend_from_slice(lofts);
        Ok(())
    }

    fn configure_camera(&mut self, camera: &CameraOptions) -> anyhow::Result<()> {
        self.camera = Some(camera.clone());
        Ok(())
    }

    fn capture(&mut self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create '{}'", dir.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to create frame '{}'", path.display()))?;
        let mut writer = BufWriter::new(file);
        let document = FrameDocument {
            camera: self.camera.as_ref(),
            lofts: &self.shown,
        };
        serde_json::to_writer(&mut writer, &document)?;
        writer.flush()?;
        Ok(())
    }

    fn image_extension(&self) -> &str {
        "json"
    }
}
