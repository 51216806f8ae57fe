use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Serialize;

/// Joins captured frames into a single animation file.
pub trait FrameAssembler {
    fn assemble(&mut self, frames: &[PathBuf], output: &Path) -> anyhow::Result<()>;
}

#[derive(Serialize)]
struct SequenceDocument {
    frames: Vec<serde_json::Value>,
}

/// Assembles frames written by [`super::JsonFrameWriter`] into one JSON document.
#[derive(Clone, Debug, Default)]
pub struct JsonSequenceAssembler;

impl FrameAssembler for JsonSequenceAssembler {
    fn assemble(&mut self, frames: &[PathBuf], output: &Path) -> anyhow::Result<()> {
        let frames = frames
            .iter()
            .map(|path| {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open frame '{}'", path.display()))?;
                serde_json::from_reader(BufReader::new(file))
                    .with_context(|| format!("Failed to parse frame '{}'", path.display()))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        if let Some(dir) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let file = File::create(output)
            .with_context(|| format!("Failed to create animation '{}'", output.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &SequenceDocument { frames })?;
        writer.flush()?;
        Ok(())
    }
}
